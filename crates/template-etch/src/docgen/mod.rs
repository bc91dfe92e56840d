//! Documentation generation core
//!
//! This module turns extracted template records into block elements and
//! Markdown text. It handles section layout, table cell formatting, usage
//! examples and the end-to-end `Etcher` pipeline.

pub mod elements;
mod etcher;
pub mod example;
mod markdown;

pub use elements::{Block, MarkdownDocument};
pub use etcher::{EtchConfig, EtchOutput, Etcher};
pub use example::{generate_example, ExampleConfig};
pub use markdown::{
    code_span, escape_cell, render_user_type, type_cell, MarkdownRenderer, CELL_BREAK, CODE_LANG,
};
