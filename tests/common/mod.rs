//! Fixtures shared by the integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use bindent::config::Settings;
use bindent::domain::BufferRef;
use bindent::infrastructure::traits::RealFileSystem;
use bindent::infrastructure::ServiceContainer;

pub const SESSION: &str = "4242";
pub const BUFFER: &str = "7";

/// A fake teddy state root with one buffer directory.
pub struct TeddyState {
    pub root: TempDir,
    pub buffer: BufferRef,
}

impl TeddyState {
    /// Create `<root>/teddy.<SESSION>/<BUFFER>/prop`.
    pub fn new() -> Self {
        bindent::util::testing::init_test_setup();
        let root = TempDir::new().expect("create temp dir");
        let state = Self {
            root,
            buffer: BufferRef::new(SESSION, BUFFER),
        };
        std::fs::create_dir_all(state.buffer_dir().join("prop")).expect("create prop dir");
        state
    }

    pub fn settings(&self) -> Settings {
        Settings {
            state_root: self.root.path().to_path_buf(),
            ..Settings::default()
        }
    }

    pub fn container(&self) -> ServiceContainer {
        ServiceContainer::with_deps(self.settings(), Arc::new(RealFileSystem))
    }

    pub fn buffer_dir(&self) -> PathBuf {
        self.root
            .path()
            .join(format!("teddy.{}", SESSION))
            .join(BUFFER)
    }

    pub fn marker_path(&self) -> PathBuf {
        self.buffer_dir().join("prop/indentchar")
    }

    pub fn body_path(&self) -> PathBuf {
        self.buffer_dir().join("body")
    }

    pub fn write_body(&self, content: &str) {
        std::fs::write(self.body_path(), content).expect("write body");
    }

    pub fn write_marker(&self, content: &str) {
        std::fs::write(self.marker_path(), content).expect("write marker");
    }

    pub fn read_marker(&self) -> Option<String> {
        std::fs::read_to_string(self.marker_path()).ok()
    }
}
