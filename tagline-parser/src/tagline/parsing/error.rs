//! Error types for parsing
//!
//! Only raised when a strict policy is selected; with the default options a
//! parse always succeeds.

use std::fmt;

/// Errors that can occur while turning shorthand lines into a tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A non-blank line that does not follow the shorthand grammar
    UnrecognizedLine {
        /// 1-based line number
        line: usize,
        content: String,
    },
    /// A nested line deeper than the currently open elements allow
    MalformedDepth {
        /// 1-based line number
        line: usize,
        content: String,
        depth: usize,
        /// Deepest depth that would have been accepted
        max: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnrecognizedLine { line, content } => {
                writeln!(f, "Unrecognized shorthand on line {}", line)?;
                write!(f, ">> {:3} | {}", line, content)
            }
            ParseError::MalformedDepth {
                line,
                content,
                depth,
                max,
            } => {
                writeln!(
                    f,
                    "Indentation of {} on line {} is deeper than the open elements allow (at most {})",
                    depth, line, max
                )?;
                write!(f, ">> {:3} | {}", line, content)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Type alias for parse results
pub type ParseResult<T> = Result<T, ParseError>;
