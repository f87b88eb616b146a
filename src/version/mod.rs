//! Version lookup layer for baseline compatibility checks
//!
//! This module resolves the published versions of a package together with the
//! target frameworks each version declares, caches them in memory and on disk,
//! and checks declared versions against the baseline framework.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│    Cache    │◀────│   Checker   │
//! │  (resolve)  │     │  (memory)   │     │ (baseline)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │ Registries  │     │    Store    │
//! │   (nuget)   │     │ (json files)│
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`cache`]: In-memory version cache, populated from the store or the registry
//! - [`checker`]: Baseline support, latest and minimal supporting version
//! - [`registry`]: Registry trait for resolving versions from remote sources
//! - [`registries`]: Concrete registry implementations (NuGet)
//! - [`store`]: One JSON file per package on disk
//! - [`error`]: Error types for cache, registry and analysis operations
//! - [`types`]: Common types like `PackageVersionMap` and `CacheEntry`

pub mod cache;
pub mod checker;
pub mod error;
pub mod registries;
pub mod registry;
pub mod store;
pub mod types;
