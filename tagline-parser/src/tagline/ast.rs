//! Data model for parsed shorthand
//!
//! A parse produces a forest of [`MarkupNode`]s. Each node owns its children
//! outright, so the whole tree is dropped in one go once it has been rendered.

pub mod attributes;
pub mod elements;
pub mod error;
pub mod node;

pub use attributes::AttributeMap;
pub use elements::{is_shorthand_tag, is_void_element, SHORTHAND_TAGS, VOID_ELEMENTS};
pub use error::TreeError;
pub use node::{MarkupNode, RenderOptions};
