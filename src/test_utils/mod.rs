//! Test utilities for jpp
//!
//! - [`init_test_logging`] installs a tracing subscriber once per test binary
//! - [`TemplateDir`] is a temporary directory of template files
//!
//! ```rust,no_run
//! use jpp_cli::test_utils::TemplateDir;
//!
//! let dir = TemplateDir::new().unwrap();
//! dir.write("mov.jS", "{% include 'regs.inc' %}").unwrap();
//! dir.write("regs.inc", "r4\n").unwrap();
//! assert!(dir.path("mov.jS").exists());
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use anyhow::{Context, Result};
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG`; with neither, nothing is
/// installed.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_ansi(true)
            .try_init();
    });
}

/// A temporary directory holding templates, removed on drop.
#[derive(Debug)]
pub struct TemplateDir {
    dir: TempDir,
}

impl TemplateDir {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new().context("Failed to create template directory")?,
        })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `name` inside the directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a template, creating subdirectories as needed.
    pub fn write(&self, name: &str, content: &str) -> Result<&Self> {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(self)
    }

    pub fn read(&self, name: &str) -> Result<String> {
        let path = self.path(name);
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }
}
