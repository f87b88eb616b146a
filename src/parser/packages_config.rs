//! packages.config parser
//!
//! Format example:
//! ```text
//! <?xml version="1.0" encoding="utf-8"?>
//! <packages>
//!   <package id="Newtonsoft.Json" version="12.0.3" targetFramework="net472" />
//! </packages>
//! ```

use std::path::Path;

use crate::config::MANIFEST_FILE_NAME;
use crate::parser::traits::{ParseError, Parser};
use crate::parser::types::PackageInfo;

/// Parser for packages.config files
#[derive(Debug, Default)]
pub struct PackagesConfigParser;

impl PackagesConfigParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for PackagesConfigParser {
    fn can_parse(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.eq_ignore_ascii_case(MANIFEST_FILE_NAME))
    }

    fn parse(&self, content: &str) -> Result<Vec<PackageInfo>, ParseError> {
        let doc = roxmltree::Document::parse(content)
            .map_err(|e| ParseError::InvalidSyntax(e.to_string()))?;

        let packages = doc
            .descendants()
            .filter(|node| node.has_tag_name("package"))
            .filter(|node| {
                node.parent_element()
                    .is_some_and(|parent| parent.has_tag_name("packages"))
            })
            // Entries without an id cannot be looked up
            .filter_map(|node| {
                let id = node.attribute("id")?;
                let version = node.attribute("version").unwrap_or_default();
                Some(PackageInfo::new(id, version))
            })
            .collect();

        Ok(packages)
    }
}
