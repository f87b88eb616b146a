//! Registry implementations for resolving package versions

pub mod nuget;

pub use nuget::NuGetRegistry;
