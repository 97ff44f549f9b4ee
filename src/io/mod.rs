/// Command-line parsing and the run driver
pub mod cli;
/// Constants and board generation parameters
pub mod configuration;
/// Error types
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Plain-text board map and selection listing
pub mod report;
