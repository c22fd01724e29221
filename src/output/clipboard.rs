//! Clipboard copy action
//!
//! Copying is an explicit action the user asks for. The listing is piped to a
//! platform clipboard tool and the outcome is reported back as a `Result`.

use crate::config::ClipboardConfig;
use std::path::PathBuf;
use std::process::Stdio;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Clipboard tools tried in order when no command is configured
const CANDIDATES: &[&[&str]] = &[
    &["pbcopy"],
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
    &["clip"],
];

/// Errors that can occur while copying to the clipboard
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("No clipboard tool found (tried pbcopy, wl-copy, xclip, xsel, clip)")]
    Unavailable,

    #[error("Failed to start clipboard tool {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("Failed to send listing to clipboard tool: {0}")]
    Write(#[source] std::io::Error),

    #[error("Clipboard tool {program} exited with {status}")]
    Failed { program: String, status: String },
}

/// Copies text to the system clipboard through an external tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardCopier {
    command: Vec<String>,
}

impl ClipboardCopier {
    /// Uses the given program and arguments
    pub fn new(command: Vec<String>) -> Result<Self, ClipboardError> {
        if command.is_empty() {
            return Err(ClipboardError::Unavailable);
        }
        Ok(Self { command })
    }

    /// Uses the configured command, or detects one on `PATH`
    pub fn from_config(config: &ClipboardConfig) -> Result<Self, ClipboardError> {
        match &config.command {
            Some(command) => Self::new(command.clone()),
            None => Self::detect(),
        }
    }

    /// Picks the first known clipboard tool present on `PATH`
    pub fn detect() -> Result<Self, ClipboardError> {
        let candidate = CANDIDATES
            .iter()
            .find(|candidate| find_in_path(candidate[0]).is_some())
            .ok_or(ClipboardError::Unavailable)?;

        tracing::debug!("Using clipboard tool: {}", candidate.join(" "));
        Self::new(candidate.iter().map(|part| part.to_string()).collect())
    }

    /// The program and arguments that will be run
    pub fn command(&self) -> &[String] {
        &self.command
    }

    /// Pipes `text` to the clipboard tool and waits for it to exit
    ///
    /// The tool's stderr is inherited so its own diagnostics reach the user.
    /// Some tools (`xclip`, `wl-copy`) fork a process that keeps serving the
    /// selection; only the direct child is awaited.
    pub async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let (program, args) = self
            .command
            .split_first()
            .ok_or(ClipboardError::Unavailable)?;

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                program: program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(ClipboardError::Write)?;
            stdin.shutdown().await.map_err(ClipboardError::Write)?;
        }

        let status = child.wait().await.map_err(ClipboardError::Write)?;
        if !status.success() {
            return Err(ClipboardError::Failed {
                program: program.clone(),
                status: status.to_string(),
            });
        }

        tracing::info!("Copied {} bytes to the clipboard", text.len());
        Ok(())
    }
}

/// Finds an executable by name in the directories on `PATH`
fn find_in_path(program: &str) -> Option<PathBuf> {
    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .flat_map(|dir| [dir.join(program), dir.join(format!("{}.exe", program))])
        .find(|candidate| candidate.is_file())
}
