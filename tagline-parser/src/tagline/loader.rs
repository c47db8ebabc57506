//! Document loading utilities
//!
//! This module provides `DocumentLoader` - a utility for loading shorthand
//! source from files or strings, parsing it, and writing the HTML back out.
//! It is used by the CLI and by tests.
//!
//! # Example
//!
//! ```rust
//! use tagline_parser::tagline::loader::DocumentLoader;
//!
//! // From file
//! let html = DocumentLoader::from_path("page.tl").unwrap().to_html().unwrap();
//!
//! // From string, straight to an output file
//! DocumentLoader::from_string("p Hello\n").write_html("page.html").unwrap();
//! ```

use crate::tagline::ast::RenderOptions;
use crate::tagline::parsing::{Document, ParseError, ParseOptions, ShorthandParser};
use std::fs;
use std::path::Path;

/// Error that can occur when loading or writing documents
#[derive(Debug, Clone)]
pub enum LoaderError {
    /// IO error when reading the source or writing the output
    IoError(String),
    /// Parse error (only with strict parse options)
    ParseError(ParseError),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::IoError(msg) => write!(f, "IO error: {}", msg),
            LoaderError::ParseError(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::IoError(err.to_string())
    }
}

impl From<ParseError> for LoaderError {
    fn from(err: ParseError) -> Self {
        LoaderError::ParseError(err)
    }
}

/// Source loader with parse and render shortcuts
pub struct DocumentLoader {
    source: String,
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl DocumentLoader {
    /// Load from a file path. A missing file fails immediately.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|err| {
            LoaderError::IoError(format!("cannot read {}: {}", path.display(), err))
        })?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "loaded shorthand source");
        Ok(Self::from_string(source))
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parse the source into a [`Document`]
    pub fn parse_document(&self) -> Result<Document, LoaderError> {
        let parser = ShorthandParser::with_options(self.source.as_str(), self.parse_options);
        Ok(parser.parse_document()?)
    }

    /// Parse and render the source to HTML
    pub fn to_html(&self) -> Result<String, LoaderError> {
        Ok(self.parse_document()?.render_with(&self.render_options))
    }

    /// Parse, render, and write the HTML to `path`, creating or truncating it.
    pub fn write_html<P: AsRef<Path>>(&self, path: P) -> Result<(), LoaderError> {
        let path = path.as_ref();
        let html = self.to_html()?;
        fs::write(path, &html).map_err(|err| {
            LoaderError::IoError(format!("cannot write {}: {}", path.display(), err))
        })?;
        tracing::debug!(path = %path.display(), bytes = html.len(), "wrote html output");
        Ok(())
    }
}
