//! Error reporting for the jpp command line.
//!
//! Library code returns typed errors ([`TemplateError`] from the engine,
//! `anyhow` context around I/O in the driver). At the process boundary
//! [`user_friendly_error`] turns whatever came back into an [`ErrorContext`]:
//! a [`JppError`] plus optional details and a suggestion, printed in colour
//! to stderr.
//!
//! ```rust,no_run
//! use jpp_cli::core::{JppError, ErrorContext, user_friendly_error};
//!
//! let ctx = user_friendly_error(anyhow::anyhow!("something failed"));
//! ctx.display();
//!
//! let ctx = ErrorContext::new(JppError::Other("bad input".into()))
//!     .with_suggestion("Run with --verbose for more output");
//! assert!(ctx.to_string().contains("Suggestion"));
//! ```

use std::fmt;
use std::io;

use colored::Colorize;
use thiserror::Error;

use crate::templating::TemplateError;

/// Failures reported to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JppError {
    /// Loading, compiling or rendering a template failed
    #[error("{kind}: {message}")]
    Template { kind: &'static str, message: String },

    /// The process may not read or write a file
    #[error("Permission denied: {message}")]
    PermissionDenied { message: String },

    /// A file or directory involved in the run is missing
    #[error("File not found: {message}")]
    FileNotFound { message: String },

    /// Anything else, with its full context chain
    #[error("{0}")]
    Other(String),
}

/// A [`JppError`] with the extra lines shown below it.
#[derive(Debug)]
pub struct ErrorContext {
    pub error: JppError,
    /// Shown in green
    pub suggestion: Option<String>,
    /// Shown in yellow
    pub details: Option<String>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(error: JppError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print to stderr: the error in bold red, details in yellow and the
    /// suggestion in green.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

/// Convert any error reaching `main` into a displayable [`ErrorContext`].
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(jpp_error) = error.downcast_ref::<JppError>() {
        return ErrorContext::new(jpp_error.clone());
    }

    if let Some(template_error) = error.downcast_ref::<TemplateError>() {
        return template_error_context(template_error);
    }

    if let Some(io_error) = error.downcast_ref::<io::Error>() {
        let message = format!("{error:#}");
        match io_error.kind() {
            io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(JppError::PermissionDenied {
                    message,
                })
                .with_suggestion("Check the permissions of the input file and output directory");
            }
            io::ErrorKind::NotFound => {
                return ErrorContext::new(JppError::FileNotFound {
                    message,
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    ErrorContext::new(JppError::Other(format!("{error:#}")))
}

fn template_error_context(error: &TemplateError) -> ErrorContext {
    let context = ErrorContext::new(JppError::Template {
        kind: error.kind(),
        message: error.to_string(),
    });

    match error {
        TemplateError::UndefinedName {
            suggestions,
            ..
        } if !suggestions.is_empty() => {
            context.with_suggestion(format!("Did you mean {}?", quoted(suggestions)))
        }
        TemplateError::UndefinedName {
            ..
        } => context
            .with_details("Templates may only reference names that are bound")
            .with_suggestion(
                "Bind it with {% set %}, or test it with 'is defined' or '| default(...)'",
            ),
        TemplateError::NotFound {
            ..
        } => context.with_suggestion(
            "Template names are resolved relative to the directory of the input file",
        ),
        TemplateError::ParseError {
            ..
        } => context.with_suggestion(
            "Output uses {{ ... }}, statements use {% ... %} and comments use {# ... #}",
        ),
        TemplateError::TypeMismatch {
            ..
        } => context.with_suggestion("Check the type of the value passed to the filter or operator"),
        TemplateError::Io(source) => context.with_details(source.to_string()),
    }
}

fn quoted(names: &[String]) -> String {
    names.iter().map(|name| format!("'{name}'")).collect::<Vec<_>>().join(", ")
}
