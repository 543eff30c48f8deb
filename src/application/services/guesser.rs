//! Indentation guessing for an editor buffer
//!
//! Scans the buffer body, derives a unit with [`IndentTally`] and writes it
//! to the buffer's indent marker for later [`IndentResolver`] runs.
//!
//! [`IndentResolver`]: crate::application::services::IndentResolver

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationResult, IoResultExt, RawLines};
use crate::config::Settings;
use crate::domain::{BufferRef, IndentTally, IndentUnit};
use crate::infrastructure::traits::FileSystem;

/// Result of one `guess` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// No buffer identity available; nothing was scanned or written.
    Skipped,
    /// The guessed unit was written to the marker file.
    Persisted(IndentUnit),
    /// The unit was computed but the marker could not be written.
    PersistFailed(IndentUnit),
}

/// Service guessing and persisting a buffer's indentation unit.
pub struct IndentGuesser {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
}

impl IndentGuesser {
    /// Create a new guesser.
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self { fs, settings }
    }

    /// Guess the buffer's unit and write it to the indent marker.
    ///
    /// Never fails: a write error is reported as [`GuessOutcome::PersistFailed`].
    #[instrument(skip(self))]
    pub fn guess(&self, buffer: Option<&BufferRef>) -> GuessOutcome {
        let Some(buffer) = buffer else {
            debug!("guess: no session/buffer id, skipping");
            return GuessOutcome::Skipped;
        };

        let unit = self.guess_unit(buffer);
        match self.persist(buffer, &unit) {
            Ok(()) => {
                debug!("guess: persisted {:?}", unit.as_str());
                GuessOutcome::Persisted(unit)
            }
            Err(e) => {
                debug!("guess: {}", e);
                GuessOutcome::PersistFailed(unit)
            }
        }
    }

    /// Guess the buffer's unit without persisting it.
    ///
    /// An unreadable body yields a single space.
    pub fn guess_unit(&self, buffer: &BufferRef) -> IndentUnit {
        let body = self.settings.body_path(buffer);
        match self.tally(&body) {
            Ok(tally) => {
                debug!(
                    "guess_unit: spaces={} tabs={}",
                    tally.spaces, tally.tabs
                );
                tally.guess()
            }
            Err(e) => {
                debug!("guess_unit: {}, falling back to one space", e);
                IndentUnit::spaces(1)
            }
        }
    }

    fn tally(&self, body: &Path) -> ApplicationResult<IndentTally> {
        let reader = self.fs.open(body).with_path_context("open body", body)?;
        let mut tally = IndentTally::default();
        for line in RawLines::new(reader).take(self.settings.guess_line_limit) {
            let line = line.with_path_context("read body", body)?;
            tally.observe(&line);
        }
        Ok(tally)
    }

    fn persist(&self, buffer: &BufferRef, unit: &IndentUnit) -> ApplicationResult<()> {
        let marker = self.settings.indent_marker_path(buffer);
        self.fs
            .write(&marker, unit.as_str())
            .with_path_context("write indent marker", &marker)
    }
}
