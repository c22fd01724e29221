//! Output sink trait and errors

use crate::generator::GeneratedListing;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// A consumer of generated listings
///
/// A sink receives the whole listing at once and replaces whatever it held
/// from a previous run; there are no incremental updates.
pub trait OutputSink {
    /// Writes the listing, replacing any earlier output
    ///
    /// # Arguments
    ///
    /// * `listing` - The generated listing
    fn write_listing(&mut self, listing: &GeneratedListing) -> OutputResult<()>;

    /// Short human-readable name used in log messages
    fn describe(&self) -> String;
}
