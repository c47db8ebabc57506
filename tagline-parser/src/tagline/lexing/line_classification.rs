//! Line Classification
//!
//! Every source line is classified on its own, with no look-behind or
//! look-ahead. The line grammar is
//!
//!     line := ' '* tag ('#' id)? ('.' class)* (' ' key="value")* (' ' text)?
//!
//! and the whole line has to match. The leading spaces decide between the two
//! shorthand forms: none means a new root element, one or more means an
//! element nested that many levels below the newest root. Tabs are not
//! indentation.
//!
//! The regex only extracts fields. Whether the tag belongs to the vocabulary
//! and which form the line takes is decided in [`classify_line`].

use crate::tagline::ast::elements::is_shorthand_tag;
use crate::tagline::ast::MarkupNode;
use crate::tagline::lexing::attributes::segment_attributes;
use once_cell::sync::Lazy;
use regex::Regex;

static SHORTHAND_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<indent> *)",
        r"(?P<tag>[A-Za-z][A-Za-z0-9]*)",
        r"(?:#(?P<id>[^ .]+))?",
        r"(?P<classes>(?:\.[^ ]+)+)?",
        r#"(?P<attrs>(?: [^ ]+="[^"]+")+)?"#,
        r"(?: (?P<text>.+))?",
        r"[ \t]*$",
    ))
    .unwrap()
});

/// Fields extracted from one recognized shorthand line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShorthandFields {
    pub tag: String,
    pub id: String,
    /// Class run split on `.`; the first entry is the empty text before the first dot
    pub class_tokens: Vec<String>,
    /// Complete `key="value"` strings, in source order
    pub attributes: Vec<String>,
    pub text: String,
}

impl ShorthandFields {
    /// Build the element this line describes.
    pub fn into_node(self) -> MarkupNode {
        MarkupNode::from_shorthand(
            &self.tag,
            &self.id,
            self.class_tokens.as_slice(),
            self.attributes.as_slice(),
            &self.text,
        )
    }
}

/// Result of classifying a single source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// No leading spaces: starts a new top-level element
    Root(ShorthandFields),
    /// `depth` leading spaces: nested below the newest root
    Nested { depth: usize, fields: ShorthandFields },
    /// Not shorthand (blank, unknown tag, malformed)
    Unrecognized,
}

/// Classify one line (without its line terminator).
pub fn classify_line(line: &str) -> LineKind {
    let Some(caps) = SHORTHAND_LINE.captures(line) else {
        return LineKind::Unrecognized;
    };

    let tag = caps.name("tag").map_or("", |m| m.as_str());
    if !is_shorthand_tag(tag) {
        return LineKind::Unrecognized;
    }

    let depth = caps.name("indent").map_or(0, |m| m.as_str().len());
    let field = |name: &str| caps.name(name).map_or("", |m| m.as_str());
    let fields = ShorthandFields {
        tag: tag.to_string(),
        id: field("id").to_string(),
        class_tokens: field("classes").split('.').map(str::to_string).collect(),
        attributes: segment_attributes(field("attrs")),
        text: field("text").to_string(),
    };

    if depth > 0 {
        LineKind::Nested { depth, fields }
    } else {
        LineKind::Root(fields)
    }
}

/// Check if a line holds nothing but whitespace
pub fn is_blank_line(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root_fields(line: &str) -> ShorthandFields {
        match classify_line(line) {
            LineKind::Root(fields) => fields,
            other => panic!("expected root line for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_root_with_id_and_class() {
        let fields = root_fields("div#main.container");
        assert_eq!(fields.tag, "div");
        assert_eq!(fields.id, "main");
        assert_eq!(fields.class_tokens, vec!["", "container"]);
        assert!(fields.attributes.is_empty());
        assert_eq!(fields.text, "");
    }

    #[test]
    fn test_nested_depth_is_space_count() {
        match classify_line("   p Hello world") {
            LineKind::Nested { depth, fields } => {
                assert_eq!(depth, 3);
                assert_eq!(fields.tag, "p");
                assert_eq!(fields.text, "Hello world");
            }
            other => panic!("expected nested line, got {other:?}"),
        }
    }

    #[test]
    fn test_attributes_and_text() {
        let fields = root_fields(r#"a href="https://x.com/a b" title="t" Link text"#);
        assert_eq!(
            fields.attributes,
            vec![r#"href="https://x.com/a b""#, r#"title="t""#]
        );
        assert_eq!(fields.text, "Link text");
    }

    #[test]
    fn test_multiple_classes() {
        let fields = root_fields("div.foo.bar");
        assert_eq!(fields.class_tokens, vec!["", "foo", "bar"]);
        assert_eq!(fields.id, "");
    }

    #[test]
    fn test_no_classes_still_yields_leading_token() {
        let fields = root_fields("p");
        assert_eq!(fields.class_tokens, vec![""]);
    }

    #[test]
    fn test_quoted_text_that_is_not_an_attribute() {
        let fields = root_fields(r#"p He said "hi""#);
        assert!(fields.attributes.is_empty());
        assert_eq!(fields.text, r#"He said "hi""#);
    }

    #[test]
    fn test_trailing_whitespace_is_tolerated() {
        let fields = root_fields("hr ");
        assert_eq!(fields.tag, "hr");
        assert_eq!(fields.text, "");
    }

    #[test]
    fn test_trailing_whitespace_after_text_is_kept() {
        let fields = root_fields("p hi  ");
        assert_eq!(fields.text, "hi  ");
    }

    #[test]
    fn test_unknown_tags_are_unrecognized() {
        assert_eq!(classify_line("custom"), LineKind::Unrecognized);
        assert_eq!(classify_line("divx.foo"), LineKind::Unrecognized);
        assert_eq!(classify_line("DIV"), LineKind::Unrecognized);
        assert_eq!(classify_line("my-widget hi"), LineKind::Unrecognized);
    }

    #[test]
    fn test_blank_and_tab_lines_are_unrecognized() {
        assert_eq!(classify_line(""), LineKind::Unrecognized);
        assert_eq!(classify_line("    "), LineKind::Unrecognized);
        assert_eq!(classify_line("\tp tabbed"), LineKind::Unrecognized);
        assert!(is_blank_line("  \t "));
        assert!(!is_blank_line(" p"));
    }

    #[test]
    fn test_into_node() {
        let node = root_fields(r#"input#q.search type="text""#).into_node();
        assert_eq!(node.render(), r#"<input id="q" class="search" type="text" />"#);
    }
}
