//! Indentation style heuristic

use crate::domain::IndentUnit;

/// Number of leading lines inspected when guessing.
pub const DEFAULT_GUESS_LINE_LIMIT: usize = 200;

/// Counts of lines starting with a space vs. a tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndentTally {
    pub spaces: usize,
    pub tabs: usize,
}

impl IndentTally {
    /// Look at the first byte of a line only.
    pub fn observe(&mut self, line: &[u8]) {
        match line.first() {
            Some(b' ') => self.spaces += 1,
            Some(b'\t') => self.tabs += 1,
            _ => {}
        }
    }

    /// Two spaces if space-led lines strictly outnumber tab-led ones, else one tab.
    pub fn guess(&self) -> IndentUnit {
        if self.spaces > self.tabs {
            IndentUnit::spaces(2)
        } else {
            IndentUnit::tab()
        }
    }

    /// Tally at most `limit` lines.
    pub fn from_lines<I, L>(lines: I, limit: usize) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let mut tally = Self::default();
        for line in lines.into_iter().take(limit) {
            tally.observe(line.as_ref());
        }
        tally
    }
}
