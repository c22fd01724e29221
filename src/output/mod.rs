//! Output module for delivering generated listings
//!
//! This module handles:
//! - Writing a listing to any writer (stdout in the CLI)
//! - Replacing an output file with the latest listing
//! - Copying a listing to the system clipboard on request

mod clipboard;
mod sinks;
mod traits;

pub use clipboard::{ClipboardCopier, ClipboardError};
pub use sinks::{FileSink, WriterSink};
pub use traits::{OutputError, OutputResult, OutputSink};

use crate::generator::GeneratedListing;
use std::path::Path;

/// Builds the sinks for one run: the output file (if any), then stdout
///
/// The file comes first so a failing file write aborts before anything
/// reaches stdout.
pub fn standard_sinks(output: Option<&Path>, stdout: bool) -> Vec<Box<dyn OutputSink>> {
    let mut sinks: Vec<Box<dyn OutputSink>> = Vec::new();
    if let Some(path) = output {
        sinks.push(Box::new(FileSink::new(path)));
    }
    if stdout {
        sinks.push(Box::new(WriterSink::stdout()));
    }
    sinks
}

/// Delivers one listing to every sink, in order
///
/// Stops at the first failing sink.
pub fn deliver(listing: &GeneratedListing, sinks: &mut [Box<dyn OutputSink>]) -> OutputResult<()> {
    for sink in sinks.iter_mut() {
        tracing::debug!("Writing listing to {}", sink.describe());
        sink.write_listing(listing)?;
    }
    Ok(())
}
