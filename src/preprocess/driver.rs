//! Runs one [`RenderPlan`]: render, write, then report dependencies.

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use minijinja::Template;

use super::plan::{Destination, Input, RenderPlan};
use super::{bound_names, build_environment, render_params};
use crate::constants::STDIN_TEMPLATE;
use crate::templating::{TemplateError, TracingLoader};
use crate::utils::fs::{AtomicFile, atomic_write};

/// Run `plan` against the process's standard input and output.
pub fn run(plan: &RenderPlan) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(plan, &mut stdin.lock(), &mut stdout.lock())
}

/// Run `plan` with explicit standard streams.
///
/// The template is always rendered to completion, even when the output is
/// discarded, because only a full render finds every included template.
/// The dependency line is written only after the render succeeded.
pub fn run_with(plan: &RenderPlan, stdin: &mut dyn Read, stdout: &mut dyn Write) -> Result<()> {
    let loader = TracingLoader::new(&plan.loader_base);
    let mut env = build_environment(&loader);

    let name = match (&plan.input, plan.template_name()) {
        (Input::File(_), Some(name)) => name,
        _ => {
            let mut source = String::new();
            stdin
                .read_to_string(&mut source)
                .context("Failed to read template from standard input")?;
            env.add_template_owned(STDIN_TEMPLATE, source).map_err(template_error)?;
            STDIN_TEMPLATE.to_string()
        }
    };
    let template = env.get_template(&name).map_err(template_error)?;
    tracing::debug!(template = %name, base = %plan.loader_base.display(), "rendering");

    write_rendered(&plan.output, &template, stdout)?;

    if let Some(depfile) = &plan.depfile {
        let line = dependency_line(&depfile.target, &loader.touched());
        match &depfile.destination {
            Destination::File(path) => {
                tracing::debug!(path = %path.display(), "writing dependency file");
                atomic_write(path, line.as_bytes())?;
            }
            Destination::Stdout => {
                stdout.write_all(line.as_bytes()).context("Failed to write dependencies")?;
            }
            Destination::Discard => {}
        }
    }
    stdout.flush().context("Failed to flush standard output")?;
    Ok(())
}

fn template_error(error: minijinja::Error) -> TemplateError {
    TemplateError::from(error).with_suggestions(bound_names())
}

/// Stream the render of `template` into `destination`.
fn write_rendered(destination: &Destination, template: &Template<'_, '_>, stdout: &mut dyn Write) -> Result<()> {
    match destination {
        Destination::Stdout => {
            template.render_to_write(render_params(), stdout).map_err(template_error)?;
        }
        Destination::Discard => {
            tracing::debug!("rendered output is discarded");
            template.render_to_write(render_params(), io::sink()).map_err(template_error)?;
        }
        Destination::File(path) => {
            let mut file = AtomicFile::create(path)?;
            template.render_to_write(render_params(), &mut file).map_err(template_error)?;
            file.commit()?;
        }
    }
    Ok(())
}

/// One Makefile rule: `target: dep dep ...`.
pub fn dependency_line(target: &str, touched: &[String]) -> String {
    format!("{target}: {}\n", touched.join(" "))
}
