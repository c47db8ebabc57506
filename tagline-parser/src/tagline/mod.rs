//! Main module for tagline library functionality

pub mod ast;
pub mod lexing;
pub mod loader;
pub mod parsing;
