pub mod config;
pub mod log;
pub mod parser;
pub mod report;
pub mod runner;
pub mod version;
