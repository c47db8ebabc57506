//! MarkupNode - one HTML element of the parsed forest
//!
//! A node is created fully formed from the fields of a single shorthand line
//! ([`MarkupNode::from_shorthand`]) and afterwards only ever grows by having
//! children appended at the tail of its subtree.
//!
//! Rendering
//!
//!     <name key="value" ...>text
//!         <child>...</child>
//!     </name>
//!
//! Every child is placed on its own line behind a single indent unit. The
//! indent is not cumulative: a grandchild's lines are shifted by the child's
//! indent only, since the child's output is inserted as-is. Void elements
//! render as `<name ... />` and drop their text and children.

use super::attributes::AttributeMap;
use super::elements::is_void_element;
use super::error::TreeError;
use crate::tagline::lexing::attributes::parse_pair;
use serde::{Deserialize, Serialize};

/// Knobs for [`MarkupNode::render_with`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RenderOptions {
    /// Inserted before each child's output
    pub indent: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
        }
    }
}

/// An HTML element with ordered attributes, owned children and optional text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkupNode {
    name: String,
    attributes: AttributeMap,
    children: Vec<MarkupNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl MarkupNode {
    /// Create an empty element. The tag name is lower-cased and must not be empty.
    pub fn new(tag_name: &str) -> Self {
        debug_assert!(!tag_name.is_empty(), "element name must not be empty");
        Self {
            name: tag_name.to_lowercase(),
            attributes: AttributeMap::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Build a node from the fields of one shorthand line.
    ///
    /// The first class token is the (empty) text in front of the first `.`
    /// and is skipped. Raw attribute strings that are not a complete
    /// `key="value"` pair are ignored. Text is always set, even when empty.
    pub fn from_shorthand<C, A>(
        tag_name: &str,
        id: &str,
        class_tokens: &[C],
        raw_attributes: &[A],
        text: &str,
    ) -> Self
    where
        C: AsRef<str>,
        A: AsRef<str>,
    {
        let mut node = Self::new(tag_name);
        if !id.is_empty() {
            node.add_attribute("id", id);
        }
        for class in class_tokens.iter().skip(1) {
            node.add_attribute("class", class.as_ref());
        }
        for raw in raw_attributes {
            if let Some((key, value)) = parse_pair(raw.as_ref()) {
                node.add_attribute(key, value);
            }
        }
        node.set_text(text);
        node
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    pub fn children(&self) -> &[MarkupNode] {
        &self.children
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Void elements never render text, children or a closing tag.
    pub fn is_void(&self) -> bool {
        is_void_element(&self.name)
    }

    /// Add an attribute, space-joining with an existing value for the same key.
    pub fn add_attribute(&mut self, key: &str, value: &str) {
        self.attributes.insert(key, value);
    }

    /// Set the inline text. Last write wins.
    pub fn set_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }

    /// Append `child` as the new last child of this node.
    pub fn push_child(&mut self, child: MarkupNode) {
        self.children.push(child);
    }

    /// Append `child` `depth` levels down, always following the last child.
    ///
    /// With `depth == 0` the child is appended to this node directly.
    pub fn append_child(&mut self, child: MarkupNode, depth: usize) -> Result<(), TreeError> {
        if depth == 0 {
            self.push_child(child);
            return Ok(());
        }
        match self.children.last_mut() {
            Some(last) => last.append_child(child, depth - 1),
            None => Err(TreeError::NoOpenChild {
                parent: self.name.clone(),
                remaining_depth: depth,
            }),
        }
    }

    /// Serialize this node and its subtree with the default tab indent.
    pub fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    pub fn render_with(&self, options: &RenderOptions) -> String {
        let mut out = format!("<{}", self.name);
        for (key, value) in self.attributes.iter() {
            out.push_str(&format!(" {}=\"{}\"", key, value));
        }

        if self.is_void() {
            out.push_str(" />");
            return out;
        }

        out.push('>');
        out.push_str(self.text.as_deref().unwrap_or(""));
        for child in &self.children {
            out.push('\n');
            out.push_str(&options.indent);
            out.push_str(&child.render_with(options));
        }
        if !self.children.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("</{}>", self.name));
        out
    }
}
