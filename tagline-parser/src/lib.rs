//! # tagline
//!
//! A parser for the tagline shorthand: one HTML tag per line, nesting given by
//! leading spaces, with inline shorthand for id, classes, attributes and text.
//!
//! File Layout
//!
//! The work is split the same way the data flows:
//! src/tagline
//!   ├── ast        MarkupNode, the ordered attribute map and the tag vocabulary
//!   ├── lexing     Per-line classification and attribute segmentation
//!   ├── parsing    Depth-indexed tree building and the ShorthandParser driver
//!   └── loader     Reading sources from disk and writing HTML back out
//!
//! So a source goes: text → lines → LineKind → MarkupNode → tree → HTML.

pub mod tagline;

pub use tagline::ast::{AttributeMap, MarkupNode, RenderOptions};
pub use tagline::loader::{DocumentLoader, LoaderError};
pub use tagline::parsing::{
    DepthPolicy, Document, LineEndings, LinePolicy, ParseError, ParseOptions, ShorthandParser,
};
