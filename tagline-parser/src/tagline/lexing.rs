//! Line-level recognition of the shorthand grammar

pub mod attributes;
pub mod line_classification;

pub use line_classification::{classify_line, is_blank_line, LineKind, ShorthandFields};
