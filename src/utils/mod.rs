//! Filesystem helpers.
//!
//! - [`fs`] - Atomic file writes for rendered output and dependency files

pub mod fs;

pub use fs::{AtomicFile, atomic_write, ensure_dir};
