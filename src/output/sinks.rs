//! Writer and file sinks

use crate::generator::GeneratedListing;
use crate::output::traits::{OutputResult, OutputSink};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes listings to any [`Write`] implementation
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<std::io::Stdout> {
    /// A sink writing to standard output
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn write_listing(&mut self, listing: &GeneratedListing) -> OutputResult<()> {
        self.writer.write_all(listing.code.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn describe(&self) -> String {
        "writer".to_string()
    }
}

/// Writes listings to a file, truncating it on every write
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputSink for FileSink {
    fn write_listing(&mut self, listing: &GeneratedListing) -> OutputResult<()> {
        let mut file = File::create(&self.path)?;
        file.write_all(listing.code.as_bytes())?;
        file.flush()?;

        tracing::info!(
            "Wrote {} entries to {}",
            listing.entries.len(),
            self.path.display()
        );
        Ok(())
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
