//! ShorthandParser - the line-by-line driver
//!
//! A parse is a single pass over the source lines:
//!
//! 1. split the source into lines ([`LineEndings`])
//! 2. classify each line on its own ([`classify_line`])
//! 3. build a node from the line's fields
//! 4. place it in the tree at the line's depth ([`TreeBuilder`])
//!
//! Rendering joins the rendered roots with single newlines.
//!
//! Unrecognized lines and indentation that jumps past the open elements are
//! handled per [`ParseOptions`]; the defaults drop the former and clamp the
//! latter, so a parse with default options never fails.

use super::error::{ParseError, ParseResult};
use super::options::{DepthPolicy, LinePolicy, ParseOptions};
use super::tree_builder::TreeBuilder;
use crate::tagline::ast::{MarkupNode, RenderOptions};
use crate::tagline::lexing::{classify_line, is_blank_line, LineKind};
use serde::Serialize;

/// The parsed forest: top-level elements in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    roots: Vec<MarkupNode>,
}

impl Document {
    pub fn new(roots: Vec<MarkupNode>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[MarkupNode] {
        &self.roots
    }

    pub fn into_roots(self) -> Vec<MarkupNode> {
        self.roots
    }

    pub fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    /// Render every root and join them with `\n`. No trailing newline.
    pub fn render_with(&self, options: &RenderOptions) -> String {
        self.roots
            .iter()
            .map(|root| root.render_with(options))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Converts shorthand source text into HTML
#[derive(Debug, Clone)]
pub struct ShorthandParser {
    source: String,
    options: ParseOptions,
}

impl ShorthandParser {
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_options(source, ParseOptions::default())
    }

    pub fn with_options(source: impl Into<String>, options: ParseOptions) -> Self {
        Self {
            source: source.into(),
            options,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse and render with the default tab indent.
    pub fn parse(&self) -> ParseResult<String> {
        Ok(self.parse_document()?.render())
    }

    /// Parse the source into a [`Document`].
    pub fn parse_document(&self) -> ParseResult<Document> {
        let mut builder = TreeBuilder::new();
        let mut skipped = 0usize;

        let lines = self.options.line_endings.split(&self.source);
        for (index, line) in lines.into_iter().enumerate() {
            let line_number = index + 1;
            match classify_line(line) {
                LineKind::Root(fields) => {
                    tracing::trace!(line = line_number, tag = %fields.tag, "root element");
                    self.place(&mut builder, 0, fields.into_node(), line_number, line)?;
                }
                LineKind::Nested { depth, fields } => {
                    tracing::trace!(line = line_number, depth, tag = %fields.tag, "nested element");
                    if !self.place(&mut builder, depth, fields.into_node(), line_number, line)? {
                        skipped += 1;
                    }
                }
                LineKind::Unrecognized if is_blank_line(line) => {}
                LineKind::Unrecognized => match self.options.unrecognized_lines {
                    LinePolicy::Skip => {
                        tracing::debug!(
                            line = line_number,
                            content = line,
                            "skipping unrecognized line"
                        );
                        skipped += 1;
                    }
                    LinePolicy::Reject => {
                        return Err(ParseError::UnrecognizedLine {
                            line: line_number,
                            content: line.to_string(),
                        });
                    }
                },
            }
        }

        let roots = builder.finish();
        tracing::debug!(roots = roots.len(), skipped, "parsed shorthand document");
        Ok(Document::new(roots))
    }

    /// Place a node at the line's depth. A nested line sits one level below the
    /// element it follows, so depth `d` needs `d` open elements.
    ///
    /// Returns `false` when a nested line has no open element to attach to and
    /// was dropped.
    fn place(
        &self,
        builder: &mut TreeBuilder,
        depth: usize,
        node: MarkupNode,
        line_number: usize,
        line: &str,
    ) -> ParseResult<bool> {
        let height = builder.height();
        let depth = if depth > height {
            match self.options.depth {
                DepthPolicy::Clamp if height == 0 => {
                    tracing::debug!(
                        line = line_number,
                        depth,
                        "dropping nested line with no open element"
                    );
                    return Ok(false);
                }
                DepthPolicy::Clamp => {
                    tracing::debug!(line = line_number, depth, height, "clamping indentation");
                    height
                }
                DepthPolicy::Reject => {
                    return Err(ParseError::MalformedDepth {
                        line: line_number,
                        content: line.to_string(),
                        depth,
                        max: height,
                    });
                }
            }
        } else {
            depth
        };

        builder
            .place(depth, node)
            .map_err(|_| ParseError::MalformedDepth {
                line: line_number,
                content: line.to_string(),
                depth,
                max: height,
            })?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagline::parsing::options::LineEndings;

    fn parse(source: &str) -> String {
        ShorthandParser::new(source).parse().unwrap()
    }

    #[test]
    fn test_single_void_element() {
        assert_eq!(parse("br"), "<br />");
    }

    #[test]
    fn test_nested_paragraph() {
        let html = parse("div#main.container\r\n p Hello world");
        assert_eq!(
            html,
            "<div id=\"main\" class=\"container\">\n\t<p>Hello world</p>\n</div>"
        );
    }

    #[test]
    fn test_roots_joined_without_trailing_newline() {
        assert_eq!(parse("h1 Title\np Body\n"), "<h1>Title</h1>\n<p>Body</p>");
    }

    #[test]
    fn test_unrecognized_lines_are_skipped() {
        assert_eq!(parse("widget\np kept\n# comment"), "<p>kept</p>");
    }

    #[test]
    fn test_unrecognized_lines_can_be_rejected() {
        let options = ParseOptions {
            unrecognized_lines: LinePolicy::Reject,
            ..ParseOptions::default()
        };
        let err = ShorthandParser::with_options("p ok\n\nwidget", options)
            .parse()
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::UnrecognizedLine {
                line: 3,
                content: "widget".to_string()
            }
        );
    }

    #[test]
    fn test_blank_lines_are_never_rejected() {
        let html = ShorthandParser::with_options("p a\n   \n\np b", ParseOptions::strict())
            .parse()
            .unwrap();
        assert_eq!(html, "<p>a</p>\n<p>b</p>");
    }

    #[test]
    fn test_deep_indent_is_clamped() {
        let html = parse("div\n   p deep");
        assert_eq!(html, "<div>\n\t<p>deep</p>\n</div>");
    }

    #[test]
    fn test_nested_line_before_any_root_is_dropped() {
        let source = " p orphan\r\ndiv\r\n span";
        let doc = ShorthandParser::new(source).parse_document().unwrap();
        assert_eq!(doc.roots().len(), 1);
        assert_eq!(doc.render(), "<div>\n\t<span></span>\n</div>");
    }

    #[test]
    fn test_nested_line_before_any_root_can_be_rejected() {
        let options = ParseOptions {
            depth: DepthPolicy::Reject,
            ..ParseOptions::default()
        };
        let err = ShorthandParser::with_options(" p orphan\ndiv", options)
            .parse()
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedDepth {
                line: 1,
                content: " p orphan".to_string(),
                depth: 1,
                max: 0
            }
        );
    }

    #[test]
    fn test_deep_indent_can_be_rejected() {
        let options = ParseOptions {
            depth: DepthPolicy::Reject,
            ..ParseOptions::default()
        };
        let err = ShorthandParser::with_options("div\n span\n   p", options)
            .parse()
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedDepth {
                line: 3,
                content: "   p".to_string(),
                depth: 3,
                max: 2
            }
        );
    }

    #[test]
    fn test_crlf_only_splitting() {
        let options = ParseOptions {
            line_endings: LineEndings::Crlf,
            ..ParseOptions::default()
        };
        let parser = ShorthandParser::with_options("ul\r\n li a\r\n li b", options);
        assert_eq!(
            parser.parse().unwrap(),
            "<ul>\n\t<li>a</li>\n\t<li>b</li>\n</ul>"
        );

        let lf_only = ShorthandParser::with_options("ul\n li a", options);
        assert_eq!(lf_only.parse().unwrap(), "");
    }

    #[test]
    fn test_document_roots() {
        let doc = ShorthandParser::new("div\n p\np\n span")
            .parse_document()
            .unwrap();
        let names: Vec<&str> = doc.roots().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["div", "p"]);
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(parse(""), "");
    }
}
