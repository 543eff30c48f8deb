//! Streaming indent/deindent of a line stream

use std::io::{BufRead, BufWriter, Write};

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, RawLines};
use crate::domain::{deindent_line, Direction, IndentUnit};

/// Summary of a transform run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    /// Lines read (and written).
    pub lines: usize,
    /// Lines whose content was changed.
    pub changed: usize,
}

/// Applies one indentation step to every line of a stream.
///
/// Lines are written as they are read; the input is never held in full.
pub struct LineTransformer {
    unit: IndentUnit,
}

impl LineTransformer {
    pub fn new(unit: IndentUnit) -> Self {
        Self { unit }
    }

    /// Transform `input` into `output`, one line at a time.
    #[instrument(skip(self, input, output))]
    pub fn run<R, W>(
        &self,
        direction: Direction,
        input: R,
        output: W,
    ) -> ApplicationResult<TransformStats>
    where
        R: BufRead,
        W: Write,
    {
        let mut out = BufWriter::new(output);
        let mut stats = TransformStats::default();

        for line in RawLines::new(input) {
            let line = line.map_err(|e| ApplicationError::stream("read input", e))?;
            let written = match direction {
                Direction::Indent => {
                    out.write_all(self.unit.as_bytes())
                        .and_then(|_| out.write_all(&line))
                        .map(|_| true)
                }
                Direction::Deindent => {
                    let stripped = deindent_line(&line, &self.unit);
                    out.write_all(stripped).map(|_| stripped.len() != line.len())
                }
            };
            let changed = written.map_err(|e| ApplicationError::stream("write output", e))?;

            stats.lines += 1;
            if changed {
                stats.changed += 1;
            }
        }

        out.flush()
            .map_err(|e| ApplicationError::stream("write output", e))?;
        debug!(
            "run: {:?} {} lines, {} changed",
            direction, stats.lines, stats.changed
        );
        Ok(stats)
    }
}
