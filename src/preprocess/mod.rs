//! The assembly test preprocessor built on [`crate::templating`].
//!
//! [`build_environment`] assembles the environment every jpp template is
//! rendered in:
//!
//! - filters `ext0`, `ext1`, `hex` and `selectkeys` ([`filters`])
//! - globals `V`, `N`, `Z`, `C` and `test_id()` ([`globals`])
//! - render parameters `base1` and `base2` for the top-level template
//!
//! [`plan`] turns command line values into a [`RenderPlan`] and [`driver`]
//! executes it.

pub mod driver;
pub mod filters;
pub mod globals;
pub mod plan;

pub use driver::{dependency_line, run, run_with};
pub use plan::{DepFile, Destination, Input, PlanRequest, RenderPlan};

use minijinja::{Environment, Value, context};

use crate::constants::{BASE1, BASE2};
use crate::templating::{TracingLoader, strict_environment};

/// Names of the render parameters.
const PARAMS: [&str; 2] = ["base1", "base2"];

/// The environment for one run, resolving templates through `loader`.
pub fn build_environment(loader: &TracingLoader) -> Environment<'static> {
    let mut env = strict_environment();
    loader.install(&mut env);
    env.add_filter("ext0", filters::ext0);
    env.add_filter("ext1", filters::ext1);
    env.add_filter("hex", filters::hex);
    env.add_filter("selectkeys", filters::selectkeys);
    globals::register(&mut env);
    env
}

/// Parameters bound for the top-level template and what it includes.
pub fn render_params() -> Value {
    context! { base1 => BASE1, base2 => BASE2 }
}

/// Every name a template can reference without binding it first.
pub fn bound_names() -> impl Iterator<Item = &'static str> {
    globals::names().chain(PARAMS)
}
