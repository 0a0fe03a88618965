//! Command-line interface for jpp.
//!
//! jpp renders one template and optionally reports the templates it read as
//! a Makefile rule, with the GCC `-M` family of flags:
//!
//! ```bash
//! # Render to stdout
//! jpp tests/mov.jS
//!
//! # Render to a file and write build/mov.d alongside it
//! jpp -MD -o build/mov.S tests/mov.jS
//!
//! # Only the dependency rule, with an explicit target
//! jpp -M -MT build/mov.o tests/mov.jS
//!
//! # Template from stdin
//! jpp < tests/mov.jS
//! ```
//!
//! The single-dash multi-letter flags are rewritten to their `--M`, `--MD`,
//! `--MF` and `--MT` spellings by [`normalize_args`] before `clap` sees them;
//! the long spellings work directly too.
//!
//! # Global Options
//!
//! - `--verbose` - Debug logging on stderr
//! - `--quiet` - Only errors
//!
//! `RUST_LOG`, when set, overrides both.


use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::constants::STDIO_SENTINEL;
use crate::preprocess::{self, PlanRequest, RenderPlan};

/// Settings derived from the command line, kept apart from parsing so tests
/// can build them directly.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Filter directive for the stderr subscriber, e.g. `"debug"`.
    ///
    /// Ignored when `RUST_LOG` is set. `None` installs no subscriber.
    pub log_level: Option<String>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The filter the stderr subscriber is built with.
    pub fn env_filter(&self) -> Option<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Some(filter),
            Err(_) => self.log_level.as_deref().map(EnvFilter::new),
        }
    }

    /// Install the stderr subscriber. Only the first call in a process has
    /// an effect.
    pub fn init_logging(&self) {
        if let Some(filter) = self.env_filter() {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init();
        }
    }
}

/// jpp command line.
#[derive(Parser, Debug)]
#[command(
    name = "jpp",
    about = "Jinja-style preprocessor for assembly test sources",
    version,
    long_about = "Renders a template with the instruction test helpers bound and \
                  optionally writes a Makefile rule listing every template it read."
)]
pub struct Cli {
    /// Template to render, `-` for stdin.
    ///
    /// Includes and imports are resolved relative to its directory.
    #[arg(value_name = "infile", default_value = STDIO_SENTINEL)]
    infile: PathBuf,

    /// Rendered output, `-` for stdout
    #[arg(short = 'o', value_name = "outfile", default_value = STDIO_SENTINEL)]
    outfile: PathBuf,

    /// Write a dependency rule; the rendered output is discarded when it
    /// would go to the same place
    #[arg(long = "M")]
    make_deps: bool,

    /// Like -M but always keep the rendered output
    #[arg(long = "MD")]
    make_deps_and_output: bool,

    /// Dependency rule destination
    ///
    /// Defaults to the output with -M, and to the output or infile name with
    /// a `.d` extension with -MD.
    #[arg(long = "MF", value_name = "filename")]
    depfile: Option<PathBuf>,

    /// Target of the dependency rule [default: infile name with `.S`]
    #[arg(long = "MT", value_name = "target")]
    target: Option<String>,

    /// Debug logging on stderr
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Parse the process arguments, accepting `-M`, `-MD`, `-MF` and `-MT`.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config)
    }

    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: Some(log_level.to_string()),
        }
    }

    pub fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();

        let plan = self.plan();
        tracing::debug!(?plan, "derived render plan");
        preprocess::run(&plan)
    }

    pub fn plan(&self) -> RenderPlan {
        RenderPlan::derive(&PlanRequest {
            infile: self.infile.clone(),
            outfile: self.outfile.clone(),
            make_deps: self.make_deps,
            make_deps_and_output: self.make_deps_and_output,
            depfile: self.depfile.clone(),
            target: self.target.clone(),
        })
    }
}

/// Rewrite GCC-style `-M`, `-MD`, `-MF[file]` and `-MT[target]` into the
/// long options `clap` understands. Values of options and everything after
/// `--` are left alone.
pub fn normalize_args<I, S>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    let mut takes_value = false;
    let mut positional_only = false;

    for arg in args {
        if takes_value || positional_only {
            takes_value = false;
            normalized.push(arg);
            continue;
        }
        let Some(text) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };

        match text {
            "--" => positional_only = true,
            "-M" | "-MD" => {
                normalized.push(format!("-{text}").into());
                continue;
            }
            "-MF" | "-MT" | "--MF" | "--MT" | "-o" => {
                takes_value = true;
                if !text.starts_with("--") && text != "-o" {
                    normalized.push(format!("-{text}").into());
                    continue;
                }
            }
            _ => {
                if let Some(flag) = ["-MF", "-MT"].into_iter().find(|flag| text.starts_with(flag))
                {
                    normalized.push(format!("-{flag}").into());
                    normalized.push(text[flag.len()..].into());
                    continue;
                }
            }
        }
        normalized.push(arg);
    }
    normalized
}
