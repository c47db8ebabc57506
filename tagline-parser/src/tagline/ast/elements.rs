//! Tag vocabulary
//!
//! The shorthand only recognizes a closed set of element names. A line whose
//! tag is not listed here is not shorthand at all, no matter how well the rest
//! of it is formed.

/// Element names accepted at the start of a shorthand line.
pub const SHORTHAND_TAGS: &[&str] = &[
    "a", "abbr", "address", "area", "article", "aside", "audio", "b", "base", "bdo",
    "blockquote", "body", "br", "button", "canvas", "caption", "cite", "code", "col",
    "colgroup", "command", "datalist", "dd", "defs", "del", "details", "dfn", "div", "dl",
    "dt", "em", "embed", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2",
    "h3", "h4", "h5", "head", "header", "hgroup", "hr", "html", "i", "iframe", "img",
    "input", "ins", "kbd", "keygen", "label", "legend", "li", "link", "map", "mark", "math",
    "menu", "meta", "meter", "nav", "noscript", "object", "ol", "optgroup", "option",
    "output", "p", "param", "path", "pre", "progress", "q", "rp", "rt", "ruby", "samp",
    "script", "section", "select", "small", "source", "span", "strong", "style", "sub",
    "summary", "sup", "svg", "symbol", "table", "tbody", "td", "textarea", "tfoot", "th",
    "thead", "time", "title", "tr", "track", "ul", "use", "var", "video", "wbr",
];

/// Elements rendered as `<name ... />` with no content and no closing tag.
pub const VOID_ELEMENTS: &[&str] = &["img", "link", "meta", "br", "hr", "input", "area", "param"];

/// Check whether `name` may start a shorthand line. Case-sensitive.
pub fn is_shorthand_tag(name: &str) -> bool {
    SHORTHAND_TAGS.contains(&name)
}

/// Check whether `name` is rendered as a void element.
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}
