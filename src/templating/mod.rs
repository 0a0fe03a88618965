//! Template engine setup for jpp, built on [`minijinja`].
//!
//! jpp templates are Jinja with a few fixed settings:
//!
//! - **Strict undefined**: referencing a name that was never bound fails the
//!   render with [`TemplateError::UndefinedName`] instead of producing an
//!   empty string. `is defined` and `default` still probe safely.
//! - **Whitespace**: `trim_blocks` drops the first newline after a tag and a
//!   single trailing newline of the source is kept.
//! - **No escaping**: output is assembly, never HTML.
//! - **Traced loading**: every `include`, `import` and `from` goes through a
//!   [`TracingLoader`], which records the templates a render actually read.
//!
//! Rendering streams into any [`std::io::Write`] with
//! [`minijinja::Template::render_to_write`].
//!
//! # Example
//!
//! ```
//! use jpp_cli::templating::strict_environment;
//! use minijinja::context;
//!
//! let env = strict_environment();
//! let out = env.render_str("{% do range(1) %}mov #{{ base }}, r4", context! { base => 4 }).unwrap();
//! assert_eq!(out, "mov #4, r4");
//! assert!(env.render_str("{{ missing }}", context! {}).is_err());
//! ```

mod error;
mod loader;

pub use error::{Location, Result, TemplateError};
pub use loader::TracingLoader;

use minijinja::{AutoEscape, Environment, UndefinedBehavior};

/// A fresh environment with jpp's engine settings and no loader.
pub fn strict_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_trim_blocks(true);
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env
}
