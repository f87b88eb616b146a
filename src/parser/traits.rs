//! Parser trait definition

use std::path::Path;

use crate::parser::types::PackageInfo;

/// Trait for parsing dependency manifests
pub trait Parser {
    /// Check if this parser can handle the given file
    fn can_parse(&self, path: &Path) -> bool;

    /// Parse the content and extract package information
    fn parse(&self, content: &str) -> Result<Vec<PackageInfo>, ParseError>;
}

/// Error type for parsing operations
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Invalid syntax in the file
    #[error("Invalid syntax: {0}")]
    InvalidSyntax(String),
}
