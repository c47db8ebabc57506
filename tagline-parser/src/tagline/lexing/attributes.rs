//! Attribute Segmentation
//!
//! The attribute run of a shorthand line is captured as one string such as
//! ` href="/a b" title="x"`. Values may contain spaces, so a plain split on
//! spaces cuts some pairs in half. [`segment_attributes`] splits first and then
//! glues the pieces back together until every piece is a whole `key="value"`.

use once_cell::sync::Lazy;
use regex::Regex;

/// A complete pair somewhere inside a token
static PAIR_PRESENT: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[^ ]+="[^"]+""#).unwrap());

/// A token that is exactly one pair, with named fields
static PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^(?P<key>[^ ]+?)="(?P<value>[^"]+)"$"#).unwrap());

/// Split a raw attribute run into complete `key="value"` strings.
///
/// The run starts with a space, so the first token of the split is empty and
/// is dropped. Tokens that form a pair on their own are emitted directly.
/// Other tokens are buffered until one ends with a closing quote, at which
/// point the buffer and that token are emitted together. Whatever is still
/// buffered at the end never closed its quote and is discarded.
pub fn segment_attributes(run: &str) -> Vec<String> {
    let mut attributes = Vec::new();
    let mut pending = String::new();

    for token in run.split(' ').skip(1) {
        if PAIR_PRESENT.is_match(token) {
            attributes.push(token.to_string());
        } else if token.ends_with('"') {
            pending.push_str(token);
            attributes.push(std::mem::take(&mut pending));
        } else {
            pending.push_str(token);
            pending.push(' ');
        }
    }

    attributes
}

/// Extract `(key, value)` from a complete `key="value"` string.
pub fn parse_pair(raw: &str) -> Option<(&str, &str)> {
    let caps = PAIR.captures(raw)?;
    Some((caps.name("key")?.as_str(), caps.name("value")?.as_str()))
}
