//! Where a run reads its template from and where its output goes.
//!
//! The defaults follow the GCC `-M` family:
//!
//! | flags            | rendered output      | dependency line                  |
//! |------------------|----------------------|----------------------------------|
//! | none             | `-o` (stdout)        | none                             |
//! | `-M`             | discarded            | `-o` (stdout)                    |
//! | `-M -MF f`       | `-o` unless it is `f`| `f`                              |
//! | `-MD`            | `-o`                 | `<infile name>.d`, or `<outfile>.d` with `-o` |
//!
//! The target defaults to the infile name with its extension replaced by
//! `.S`. [`RenderPlan::derive`] never touches the filesystem.

use std::path::{Path, PathBuf};

use crate::constants::{DEPFILE_EXTENSION, STDIO_SENTINEL, TARGET_EXTENSION};

/// Where the top-level template comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Read from standard input as an anonymous template
    Stdin,
    /// Load through the tracing loader; tracked as a dependency
    File(PathBuf),
}

/// Where rendered text or the dependency line is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
    /// Rendered but thrown away, to discover dependencies only
    Discard,
}

impl Destination {
    fn from_path(path: &Path) -> Self {
        if path == Path::new(STDIO_SENTINEL) {
            Self::Stdout
        } else {
            Self::File(path.to_path_buf())
        }
    }
}

/// The dependency line and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepFile {
    pub target: String,
    pub destination: Destination,
}

/// Command line values the plan is derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    pub infile: PathBuf,
    pub outfile: PathBuf,
    /// `-M`
    pub make_deps: bool,
    /// `-MD`, implies `-M`
    pub make_deps_and_output: bool,
    /// `-MF`
    pub depfile: Option<PathBuf>,
    /// `-MT`
    pub target: Option<String>,
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            infile: PathBuf::from(STDIO_SENTINEL),
            outfile: PathBuf::from(STDIO_SENTINEL),
            make_deps: false,
            make_deps_and_output: false,
            depfile: None,
            target: None,
        }
    }
}

/// Everything the driver needs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    pub input: Input,
    /// Directory template names are resolved against
    pub loader_base: PathBuf,
    pub output: Destination,
    pub depfile: Option<DepFile>,
}

impl RenderPlan {
    pub fn derive(request: &PlanRequest) -> Self {
        let stdio = Path::new(STDIO_SENTINEL);
        let make_deps = request.make_deps || request.make_deps_and_output;

        let depfile_path = match &request.depfile {
            Some(path) => path.clone(),
            None if request.make_deps_and_output => {
                if request.outfile == stdio {
                    file_name(&request.infile).with_extension(DEPFILE_EXTENSION)
                } else {
                    request.outfile.with_extension(DEPFILE_EXTENSION)
                }
            }
            None => request.outfile.clone(),
        };

        let output = if make_deps && request.outfile == depfile_path {
            Destination::Discard
        } else {
            Destination::from_path(&request.outfile)
        };

        let depfile = make_deps.then(|| DepFile {
            target: request.target.clone().unwrap_or_else(|| {
                file_name(&request.infile)
                    .with_extension(TARGET_EXTENSION)
                    .to_string_lossy()
                    .into_owned()
            }),
            destination: Destination::from_path(&depfile_path),
        });

        let input = if request.infile == stdio {
            Input::Stdin
        } else {
            Input::File(request.infile.clone())
        };

        Self {
            input,
            loader_base: loader_base(&request.infile),
            output,
            depfile,
        }
    }

    /// Name the top-level template is requested under, relative to
    /// [`RenderPlan::loader_base`].
    pub fn template_name(&self) -> Option<String> {
        match &self.input {
            Input::Stdin => None,
            Input::File(path) => Some(file_name(path).to_string_lossy().into_owned()),
        }
    }
}

/// Final component of `path`, or the whole path when it has none.
fn file_name(path: &Path) -> PathBuf {
    path.file_name().map(PathBuf::from).unwrap_or_else(|| path.to_path_buf())
}

fn loader_base(infile: &Path) -> PathBuf {
    match infile.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
