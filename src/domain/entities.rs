//! Domain entities: core data structures

use std::path::{Path, PathBuf};

/// File holding the buffer contents, relative to the buffer directory.
pub const BODY_FILE: &str = "body";

/// Indent marker written by `guess`, relative to the buffer directory.
pub const INDENT_MARKER_FILE: &str = "prop/indentchar";

/// Identifies one editor buffer: the editor session plus the buffer within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferRef {
    pub session_id: String,
    pub buffer_id: String,
}

impl BufferRef {
    pub fn new(session_id: impl Into<String>, buffer_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            buffer_id: buffer_id.into(),
        }
    }

    /// Both identifiers are required; either one missing means there is no buffer.
    pub fn from_parts(session_id: Option<String>, buffer_id: Option<String>) -> Option<Self> {
        Some(Self::new(session_id?, buffer_id?))
    }

    /// Directory of this buffer below the state root.
    ///
    /// Layout: `<state_root>/<session_prefix><session_id>/<buffer_id>`
    pub fn dir(&self, state_root: &Path, session_prefix: &str) -> PathBuf {
        state_root
            .join(format!("{}{}", session_prefix, self.session_id))
            .join(&self.buffer_id)
    }
}

/// Expand environment variables in a path string.
///
/// Supports `$VAR`, `${VAR}`, and `~` (home directory).
/// Undefined variables are left unexpanded.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
