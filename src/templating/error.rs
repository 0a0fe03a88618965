//! Template error handling for jpp
//!
//! Every engine failure is classified into a [`TemplateError`] kind:
//! `NotFound`, `UndefinedName`, `TypeMismatch` or `ParseError`, plus `Io` when
//! rendered output could not be written. Errors raised inside an included
//! template are reported where they happened, not at the include.

use std::error::Error as _;
use std::fmt;
use std::io;

use minijinja::ErrorKind;
use thiserror::Error;

/// Where in a template an error happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Template name as requested from the loader
    pub template: String,
    /// 1-based line number
    pub line: usize,
}

impl Location {
    pub fn new(template: &str, line: usize) -> Self {
        Self {
            template: template.to_string(),
            line,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, line {}", self.template, self.line)
    }
}

/// Render an optional location as a ` (template, line N)` suffix.
fn at(location: &Option<Location>) -> String {
    match location {
        Some(location) => format!(" ({location})"),
        None => String::new(),
    }
}

fn subject(name: &Option<String>) -> String {
    match name {
        Some(name) => format!("'{name}' is undefined"),
        None => "undefined value".to_string(),
    }
}

/// Errors produced while loading, compiling or rendering templates.
///
/// All of them are fatal to a render.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A template could not be found or read.
    #[error("{message}{}", at(.location))]
    NotFound {
        message: String,
        location: Option<Location>,
    },

    /// A name was referenced but never bound.
    #[error("{}{}", subject(.name), at(.location))]
    UndefinedName {
        /// The undefined expression, when the engine could point at it
        name: Option<String>,
        /// Bound names that look similar, closest first
        suggestions: Vec<String>,
        location: Option<Location>,
    },

    /// A value had the wrong shape for an operation, filter or function.
    #[error("{message}{}", at(.location))]
    TypeMismatch {
        message: String,
        location: Option<Location>,
    },

    /// The template source is malformed.
    #[error("syntax error: {message}{}", at(.location))]
    ParseError {
        message: String,
        location: Option<Location>,
    },

    /// Writing rendered output failed.
    #[error("failed to write rendered output")]
    Io(#[source] io::Error),
}

pub type Result<T, E = TemplateError> = std::result::Result<T, E>;

impl From<minijinja::Error> for TemplateError {
    fn from(error: minijinja::Error) -> Self {
        let error = innermost(&error);
        let location = error.name().zip(error.line()).map(|(template, line)| Location::new(template, line));
        let message = error.detail().map_or_else(|| error.kind().to_string(), str::to_string);

        match error.kind() {
            ErrorKind::TemplateNotFound => Self::NotFound {
                message,
                location,
            },
            ErrorKind::UndefinedError | ErrorKind::UnknownFunction => Self::UndefinedName {
                name: undefined_expression(error),
                suggestions: Vec::new(),
                location,
            },
            ErrorKind::SyntaxError
            | ErrorKind::BadEscape
            | ErrorKind::UnknownFilter
            | ErrorKind::UnknownTest => Self::ParseError {
                message,
                location,
            },
            ErrorKind::WriteFailure => {
                let cause = error.source().map_or(message, ToString::to_string);
                Self::Io(io::Error::other(cause))
            }
            _ => Self::TypeMismatch {
                message,
                location,
            },
        }
    }
}

/// The error that actually failed, below any include that wrapped it.
fn innermost(mut error: &minijinja::Error) -> &minijinja::Error {
    while let Some(inner) = error.source().and_then(|source| source.downcast_ref::<minijinja::Error>()) {
        error = inner;
    }
    error
}

/// The source text of an undefined expression if it is a plain dotted name.
fn undefined_expression(error: &minijinja::Error) -> Option<String> {
    let source = error.template_source()?;
    let text = source.get(error.range()?)?.trim();
    let plain = !text.is_empty() && text.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '.');
    plain.then(|| text.to_string())
}

impl TemplateError {
    /// Record bound names close to an undefined one, closest first.
    ///
    /// Names within a third of their length in edits are offered, at most
    /// three of them. Other kinds pass through unchanged.
    #[must_use]
    pub fn with_suggestions<'a>(mut self, known: impl IntoIterator<Item = &'a str>) -> Self {
        if let Self::UndefinedName {
            name: Some(name),
            suggestions,
            ..
        } = &mut self
        {
            let name: &str = name;
            let limit = (name.chars().count() / 3).max(1);
            let mut close: Vec<(usize, &str)> = known
                .into_iter()
                .filter(|candidate| *candidate != name)
                .map(|candidate| (strsim::levenshtein(name, candidate), candidate))
                .filter(|(distance, _)| *distance <= limit)
                .collect();
            close.sort();
            *suggestions = close.into_iter().take(3).map(|(_, candidate)| candidate.to_string()).collect();
        }
        self
    }

    /// The location this error was raised at, if known.
    pub fn location(&self) -> Option<&Location> {
        match self {
            Self::NotFound {
                location,
                ..
            }
            | Self::UndefinedName {
                location,
                ..
            }
            | Self::TypeMismatch {
                location,
                ..
            }
            | Self::ParseError {
                location,
                ..
            } => location.as_ref(),
            Self::Io(_) => None,
        }
    }

    /// Short category name used in user-facing headers.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound {
                ..
            } => "NotFound",
            Self::UndefinedName {
                ..
            } => "UndefinedName",
            Self::TypeMismatch {
                ..
            } => "TypeMismatch",
            Self::ParseError {
                ..
            } => "ParseError",
            Self::Io(_) => "Io",
        }
    }
}
