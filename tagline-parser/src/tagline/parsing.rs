//! Parsing module for tagline
//!
//! Turns classified lines into a forest of [`MarkupNode`](crate::tagline::ast::MarkupNode)s.
//!
//! - [`tree_builder`]: the depth-indexed stack of open ancestors
//! - [`parser`]: [`ShorthandParser`], which drives classification and tree building
//! - [`options`]: policies for the cases the grammar leaves open

pub mod error;
pub mod options;
pub mod parser;
pub mod tree_builder;

pub use error::{ParseError, ParseResult};
pub use options::{DepthPolicy, LineEndings, LinePolicy, ParseOptions};
pub use parser::{Document, ShorthandParser};
pub use tree_builder::TreeBuilder;
