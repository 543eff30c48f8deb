//! Domain layer: indentation units and line-level rules
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod guess;
pub mod indent;

pub use entities::{expand_env_vars, BufferRef, BODY_FILE, INDENT_MARKER_FILE};
pub use error::DomainError;
pub use guess::{IndentTally, DEFAULT_GUESS_LINE_LIMIT};
pub use indent::{deindent_line, Direction, IndentUnit};
