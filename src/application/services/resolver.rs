//! Indentation unit resolution
//!
//! Picks the unit for an indent/deindent run: an explicit spec wins,
//! then the buffer's persisted marker, then a single tab.

use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{BufferRef, IndentUnit};
use crate::infrastructure::traits::FileSystem;

/// Service resolving the indentation unit for the current invocation.
pub struct IndentResolver {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
}

impl IndentResolver {
    /// Create a new resolver.
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self { fs, settings }
    }

    /// Resolve the unit to use.
    ///
    /// Only a malformed explicit spec is an error. Missing identifiers or an
    /// unreadable marker fall back to [`IndentUnit::default`].
    pub fn resolve(
        &self,
        spec: Option<&str>,
        buffer: Option<&BufferRef>,
    ) -> ApplicationResult<IndentUnit> {
        if let Some(spec) = spec {
            let unit: IndentUnit = spec.parse()?;
            debug!("resolve: explicit spec {:?} -> {:?}", spec, unit.as_str());
            return Ok(unit);
        }
        Ok(self.persisted(buffer).unwrap_or_default())
    }

    /// Read the buffer's persisted unit, if there is a usable one.
    pub fn persisted(&self, buffer: Option<&BufferRef>) -> Option<IndentUnit> {
        let Some(buffer) = buffer else {
            debug!("persisted: no session/buffer id, using default");
            return None;
        };

        match self.read_marker(buffer) {
            Ok(Some(unit)) => {
                debug!("persisted: marker -> {:?}", unit.as_str());
                Some(unit)
            }
            Ok(None) => {
                debug!("persisted: marker is empty, using default");
                None
            }
            Err(e) => {
                debug!("persisted: {}, using default", e);
                None
            }
        }
    }

    fn read_marker(&self, buffer: &BufferRef) -> ApplicationResult<Option<IndentUnit>> {
        let path = self.settings.indent_marker_path(buffer);
        let raw = self
            .fs
            .read_to_string(&path)
            .with_path_context("read indent marker", &path)?;
        Ok(IndentUnit::from_persisted(raw))
    }
}
