//! jpp - Jinja-style preprocessor for assembly test sources
//!
//! jpp expands templates written in a Jinja subset into assembly source and,
//! like `gcc -M`, reports which template files a render read so `make` can
//! rebuild the output when any of them change.
//!
//! # Architecture Overview
//!
//! ```text
//! cli ──> preprocess::plan ──> preprocess::driver ──> templating
//!                                    │                    │
//!                                    │            TracingLoader (records names)
//!                                    └──> dependency line from the recorded names
//! ```
//!
//! - [`templating`] - minijinja settings, the tracing loader and error
//!   classification
//! - [`preprocess`] - Domain filters and globals, the render plan and the
//!   driver that runs it
//! - [`cli`] - Command line parsing and logging setup
//! - [`core`] - User-facing error reporting
//! - [`utils`] - Atomic file writes
//! - [`constants`] - Render parameters and flag masks
//!
//! # Template Environment
//!
//! Every template is rendered with:
//!
//! | Name | Kind | Value |
//! |------|------|-------|
//! | `V`, `N`, `Z`, `C` | global | `256`, `4`, `2`, `1` |
//! | `test_id()` | global | `1, 2, 3, ...` across the run |
//! | `base1`, `base2` | top-level parameter | `0x1234`, `0x5678` |
//! | `ext0`, `ext1`, `hex`, `selectkeys` | filter | see [`preprocess::filters`] |
//!
//! # Example
//!
//! ```bash
//! jpp -MD -o build/add.S tests/add.jS
//! cat build/add.d
//! # add.S: add.jS common.inc
//! ```

pub mod cli;
pub mod constants;
pub mod core;
pub mod preprocess;
pub mod templating;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
