//! Parse policies
//!
//! The shorthand grammar is best-effort: by default lines that are not
//! shorthand are dropped, and indentation that jumps more than one level is
//! clamped to the deepest open element. Both can be made strict.

use serde::Deserialize;

/// What to do with a non-blank line that is not shorthand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinePolicy {
    /// Drop the line and continue
    #[default]
    Skip,
    /// Fail with [`ParseError::UnrecognizedLine`](super::ParseError::UnrecognizedLine)
    Reject,
}

/// What to do with a nested line deeper than any open element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DepthPolicy {
    /// Attach under the deepest open element (or start a new root if none is open)
    #[default]
    Clamp,
    /// Fail with [`ParseError::MalformedDepth`](super::ParseError::MalformedDepth)
    Reject,
}

/// How the source is split into lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineEndings {
    /// Split on `\n`, dropping a trailing `\r` from each line
    #[default]
    Any,
    /// Split on `\r\n` only
    Crlf,
}

impl LineEndings {
    pub fn split<'a>(&self, source: &'a str) -> Vec<&'a str> {
        match self {
            LineEndings::Any => source
                .split('\n')
                .map(|line| line.strip_suffix('\r').unwrap_or(line))
                .collect(),
            LineEndings::Crlf => source.split("\r\n").collect(),
        }
    }
}

/// Options for a single parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ParseOptions {
    pub unrecognized_lines: LinePolicy,
    pub depth: DepthPolicy,
    pub line_endings: LineEndings,
}

impl ParseOptions {
    /// Reject both unrecognized lines and malformed depth.
    pub fn strict() -> Self {
        Self {
            unrecognized_lines: LinePolicy::Reject,
            depth: DepthPolicy::Reject,
            ..Self::default()
        }
    }
}
