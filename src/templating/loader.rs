//! Template source resolution with dependency tracking.
//!
//! [`TracingLoader`] reads template names relative to one base directory and
//! remembers every name whose source it read. Dependency output is built
//! from that record.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use minijinja::{Environment, Error, ErrorKind};

/// Reads templates below a base directory and records the names it served.
///
/// Names are `/`-separated paths relative to the base. Absolute names and
/// names with `..` components are reported as not found.
///
/// A name is recorded once its source has been read, before the engine
/// parses it, so a template with a syntax error still counts as a
/// dependency. Clones share one record.
#[derive(Debug, Clone)]
pub struct TracingLoader {
    base: PathBuf,
    touched: Arc<Mutex<BTreeSet<String>>>,
}

impl TracingLoader {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            touched: Arc::default(),
        }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Make this loader the template source of `env`.
    pub fn install(&self, env: &mut Environment<'_>) {
        let loader = self.clone();
        env.set_loader(move |name| loader.load(name).map(Some));
    }

    /// Read the source of `name`, recording it on success.
    pub fn load(&self, name: &str) -> Result<String, Error> {
        let path = self.resolve(name).ok_or_else(|| {
            tracing::debug!(template = name, "rejecting template name outside the base directory");
            not_found(name)
        })?;
        if !path.is_file() {
            return Err(not_found(name)
                .with_source(io::Error::new(io::ErrorKind::NotFound, format!("{} is not a file", path.display()))));
        }
        let source = fs::read_to_string(&path).map_err(|e| {
            Error::new(ErrorKind::TemplateNotFound, format!("template '{name}' could not be read")).with_source(e)
        })?;

        let mut touched = self.touched.lock().unwrap_or_else(PoisonError::into_inner);
        if touched.insert(name.to_string()) {
            tracing::debug!(template = name, path = %path.display(), "recorded template dependency");
        }
        Ok(source)
    }

    /// Names read so far, sorted and without duplicates.
    pub fn touched(&self) -> Vec<String> {
        self.touched.lock().unwrap_or_else(PoisonError::into_inner).iter().cloned().collect()
    }

    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        let confined = relative.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if name.is_empty() || !confined {
            return None;
        }
        Some(self.base.join(relative))
    }
}

fn not_found(name: &str) -> Error {
    Error::new(ErrorKind::TemplateNotFound, format!("template '{name}' not found"))
}
