//! Indentation unit and the per-line indent/deindent rules

use std::str::FromStr;

use crate::domain::DomainError;

const SPACE: u8 = b' ';
const TAB: u8 = b'\t';

/// Widest unit an explicit spec may ask for.
pub const MAX_INDENT_WIDTH: usize = u16::MAX as usize;

/// One level of indentation: a non-empty run of spaces or tabs.
///
/// Units built here always hold a single repeated character. Units read back
/// from a persisted marker are trusted as-is (see [`IndentUnit::from_persisted`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndentUnit(String);

impl IndentUnit {
    /// A single tab, the fallback whenever nothing better is known.
    pub fn tab() -> Self {
        Self::tabs(1)
    }

    pub fn tabs(width: usize) -> Self {
        Self("\t".repeat(width))
    }

    pub fn spaces(width: usize) -> Self {
        Self(" ".repeat(width))
    }

    /// Accept raw marker file contents. Empty contents are rejected.
    pub fn from_persisted(raw: String) -> Option<Self> {
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl Default for IndentUnit {
    fn default() -> Self {
        Self::tab()
    }
}

/// Parse an explicit spec of the form `<count><kind>`.
///
/// `kind` is the last character: `s` means spaces, anything else means tabs.
/// A spec made only of digits is a tab count (`"2"` is two tabs).
impl FromStr for IndentUnit {
    type Err = DomainError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let mut chars = spec.chars();
        let kind = chars.next_back().ok_or(DomainError::EmptySpec)?;

        let (count, fill) = if kind.is_ascii_digit() {
            (spec, TAB)
        } else if kind == 's' {
            (chars.as_str(), SPACE)
        } else {
            (chars.as_str(), TAB)
        };

        let width: usize = count.parse().map_err(|_| {
            // All digits but too large for usize
            if !count.is_empty() && count.bytes().all(|b| b.is_ascii_digit()) {
                DomainError::TooWide {
                    spec: spec.to_string(),
                    max: MAX_INDENT_WIDTH,
                }
            } else {
                DomainError::InvalidCount {
                    spec: spec.to_string(),
                }
            }
        })?;
        if width == 0 {
            return Err(DomainError::ZeroWidth {
                spec: spec.to_string(),
            });
        }
        if width > MAX_INDENT_WIDTH {
            return Err(DomainError::TooWide {
                spec: spec.to_string(),
                max: MAX_INDENT_WIDTH,
            });
        }

        Ok(match fill {
            SPACE => Self::spaces(width),
            _ => Self::tabs(width),
        })
    }
}

/// Which way a line stream is shifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Prepend one unit to every line.
    Indent,
    /// Remove one unit, or failing that one whitespace character, from every line.
    Deindent,
}

/// Remove one level of indentation from `line`.
///
/// The full unit wins over the single-character fallback, so at most one of
/// the two is ever stripped. Non-whitespace is never removed.
pub fn deindent_line<'a>(line: &'a [u8], unit: &IndentUnit) -> &'a [u8] {
    if let Some(rest) = line.strip_prefix(unit.as_bytes()) {
        return rest;
    }
    match line.first() {
        Some(&SPACE) | Some(&TAB) => &line[1..],
        _ => line,
    }
}
