//! File writing that never leaves a half-written destination behind.
//!
//! Output is written to a temporary file next to the destination and renamed
//! over it only once everything has been written. If the writer is dropped
//! without [`AtomicFile::commit`], the temporary file is removed and an
//! existing destination keeps its previous contents.
//!
//! ```rust
//! use jpp_cli::utils::fs::atomic_write;
//!
//! # fn example() -> anyhow::Result<()> {
//! let dir = tempfile::tempdir()?;
//! atomic_write(&dir.path().join("mov.d"), b"mov.S: mov.jS\n")?;
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// A file that appears at its destination only when committed.
#[derive(Debug)]
pub struct AtomicFile {
    target: PathBuf,
    temp: NamedTempFile,
}

impl AtomicFile {
    /// Start writing `target`, creating its parent directory if needed.
    pub fn create(target: &Path) -> Result<Self> {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        ensure_dir(dir)?;
        let temp = NamedTempFile::new_in(dir).with_context(|| {
            format!("Failed to create temporary file in: {}", dir.display())
        })?;
        Ok(Self {
            target: target.to_path_buf(),
            temp,
        })
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Flush, sync and move the temporary file over the destination.
    pub fn commit(mut self) -> Result<()> {
        self.temp.flush()?;
        let permissions = match fs::metadata(&self.target) {
            Ok(metadata) => Some(metadata.permissions()),
            Err(_) => default_permissions(),
        };
        if let Some(permissions) = permissions {
            fs::set_permissions(self.temp.path(), permissions).with_context(|| {
                format!("Failed to set permissions for: {}", self.target.display())
            })?;
        }
        self.temp.as_file().sync_all().context("Failed to sync file to disk")?;
        self.temp
            .persist(&self.target)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to write: {}", self.target.display()))?;
        Ok(())
    }
}

impl Write for AtomicFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.temp.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.temp.flush()
    }
}

/// Temporary files are private to their owner; new destinations get the
/// usual mode for generated sources instead.
#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}

/// Write `content` to `path` through an [`AtomicFile`].
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = AtomicFile::create(path)?;
    file.write_all(content)
        .with_context(|| format!("Failed to write to temp file for: {}", path.display()))?;
    file.commit()
}

/// Create `path` and its parents if they do not exist yet.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    } else if !path.is_dir() {
        return Err(anyhow::anyhow!("Path exists but is not a directory: {}", path.display()));
    }
    Ok(())
}
