//! Block elements and their Markdown emission
//!
//! The renderer produces an ordered `Vec<Block>`; `MarkdownDocument` turns
//! that sequence into text. Blocks are separated by one blank line and the
//! document ends with a single newline.

use serde::Serialize;

/// A single block of output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Block {
    /// `#`-style header
    Header { level: u8, text: String },
    /// `>` quoted paragraph
    BlockQuote { text: String },
    /// Pipe table
    Table {
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Plain paragraph
    Paragraph { text: String },
    /// Fenced code block
    CodeBlock { lang: String, code: String },
}

impl Block {
    /// Create a header
    pub fn header(level: u8, text: impl Into<String>) -> Self {
        Block::Header {
            level: level.clamp(1, 6),
            text: text.into(),
        }
    }

    /// Create a block quote
    pub fn quote(text: impl Into<String>) -> Self {
        Block::BlockQuote { text: text.into() }
    }

    /// Create a table
    pub fn table(columns: &[&str], rows: Vec<Vec<String>>) -> Self {
        Block::Table {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    /// Create a paragraph
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    /// Create a fenced code block
    pub fn code(lang: impl Into<String>, code: impl Into<String>) -> Self {
        Block::CodeBlock {
            lang: lang.into(),
            code: code.into(),
        }
    }

    /// Render this block as Markdown, without trailing newline
    pub fn to_markdown(&self) -> String {
        match self {
            Block::Header { level, text } => {
                format!("{} {}", "#".repeat(usize::from(*level)), text)
            }
            Block::BlockQuote { text } => text
                .lines()
                .map(|line| {
                    if line.is_empty() {
                        ">".to_string()
                    } else {
                        format!("> {}", line)
                    }
                })
                .collect::<Vec<_>>()
                .join("\n"),
            Block::Table { columns, rows } => {
                let mut lines = Vec::with_capacity(rows.len() + 2);
                lines.push(table_row(columns.iter().map(String::as_str)));
                lines.push(table_row(columns.iter().map(|_| "---")));
                for row in rows {
                    // short rows are padded so every line has the header's width
                    let cells = (0..columns.len())
                        .map(|i| row.get(i).map(String::as_str).unwrap_or(""));
                    lines.push(table_row(cells));
                }
                lines.join("\n")
            }
            Block::Paragraph { text } => text.clone(),
            Block::CodeBlock { lang, code } => {
                format!("```{}\n{}\n```", lang, code.trim_end_matches('\n'))
            }
        }
    }
}

fn table_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let mut row = String::from("|");
    for cell in cells {
        row.push(' ');
        row.push_str(&cell.replace('\n', " "));
        row.push_str(" |");
    }
    row
}

/// An ordered sequence of blocks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MarkdownDocument {
    blocks: Vec<Block>,
}

impl MarkdownDocument {
    /// Create a document from blocks
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Emit Markdown text. An empty document emits an empty string.
    pub fn to_markdown(&self) -> String {
        if self.blocks.is_empty() {
            return String::new();
        }
        let mut md = self
            .blocks
            .iter()
            .map(Block::to_markdown)
            .collect::<Vec<_>>()
            .join("\n\n");
        md.push('\n');
        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header_levels() {
        assert_eq!(Block::header(2, "Parameters").to_markdown(), "## Parameters");
        assert_eq!(Block::header(0, "x").to_markdown(), "# x");
        assert_eq!(Block::header(9, "x").to_markdown(), "###### x");
    }

    #[test]
    fn test_block_quote_multiline() {
        assert_eq!(Block::quote("a\n\nb").to_markdown(), "> a\n>\n> b");
    }

    #[test]
    fn test_table() {
        let table = Block::table(
            &["Property", "Required"],
            vec![vec!["`a`".into(), "True".into()], vec!["`b`".into()]],
        );
        assert_eq!(
            table.to_markdown(),
            "| Property | Required |\n| --- | --- |\n| `a` | True |\n| `b` |  |"
        );
    }

    #[test]
    fn test_code_block() {
        assert_eq!(
            Block::code("bicep", "{\n  a: 1\n}\n").to_markdown(),
            "```bicep\n{\n  a: 1\n}\n```"
        );
    }

    #[test]
    fn test_document_joins_blocks() {
        let doc = MarkdownDocument::from_blocks(vec![
            Block::header(3, "myType"),
            Block::quote("Type description"),
        ]);
        assert_eq!(doc.to_markdown(), "### myType\n\n> Type description\n");
        assert_eq!(MarkdownDocument::default().to_markdown(), "");
    }
}
