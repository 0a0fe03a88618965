//! Integration test suite for jpp
//!
//! These tests drive the `jpp` binary end to end: template directories are
//! created with [`TemplateDir`](jpp_cli::test_utils::TemplateDir) and the
//! binary runs with that directory as its working directory.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! - **render**: output to stdout and files, stdin input, includes
//! - **dependencies**: `-M`, `-MD`, `-MF`, `-MT`
//! - **errors**: exit status, messages and untouched outputs on failure

mod common;

mod dependencies;
mod errors;
mod render;
