//! Parser layer
//! - traits.rs: Parser trait definition
//! - types.rs: Common types (PackageInfo)
//! - packages_config.rs: packages.config parser
//! - discovery.rs: Manifest discovery under a project root

pub mod discovery;
pub mod packages_config;
pub mod traits;
pub mod types;

pub use discovery::find_manifests;
pub use packages_config::PackagesConfigParser;
pub use traits::{ParseError, Parser};
pub use types::PackageInfo;
