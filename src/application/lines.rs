//! Lazy, byte-oriented line iteration

use std::io::{self, BufRead};

/// Iterator over the raw lines of a reader.
///
/// Each item keeps its trailing `\n` when the input had one. Bytes are not
/// required to be valid UTF-8. Only one line is held in memory at a time.
pub struct RawLines<R> {
    reader: R,
}

impl<R: BufRead> RawLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Iterator for RawLines<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => None,
            Ok(_) => Some(Ok(line)),
            Err(e) => Some(Err(e)),
        }
    }
}
