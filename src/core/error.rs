//! Error handling for pomdep
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** ([`PomdepError`]) for the coordinate resolver and the
//!    descriptor mutator, so callers can match on the failure kind
//! 2. **User-friendly messages** ([`ErrorContext`]) with details and suggestions for
//!    CLI users
//!
//! Library functions return `Result<T, PomdepError>`. The CLI layer wraps them in
//! [`anyhow::Error`] and converts back with [`user_friendly_error`] right before
//! printing.
//!
//! # Examples
//!
//! ```rust,no_run
//! use pomdep::core::{PomdepError, user_friendly_error};
//!
//! let error = anyhow::Error::from(PomdepError::NoProjectContext);
//! let context = user_friendly_error(error);
//! context.display(); // Colored error with a suggestion
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The locator form shown in usage hints.
pub const LOCATOR_USAGE: &str = "groupId:artifactId:version[:packaging[:classifier]]";

/// The main error type for pomdep operations.
///
/// Every variant is terminal: nothing is retried and nothing is recovered
/// locally. Validation variants ([`MissingCoordinate`], [`InvalidCoordinateFormat`],
/// [`IncompleteCoordinate`], [`InvalidProperty`]) are raised before the
/// descriptor is touched; [`WriteFailure`] is raised after the in-memory
/// document has already been mutated.
///
/// [`MissingCoordinate`]: PomdepError::MissingCoordinate
/// [`InvalidCoordinateFormat`]: PomdepError::InvalidCoordinateFormat
/// [`IncompleteCoordinate`]: PomdepError::IncompleteCoordinate
/// [`InvalidProperty`]: PomdepError::InvalidProperty
/// [`WriteFailure`]: PomdepError::WriteFailure
#[derive(Error, Debug)]
pub enum PomdepError {
    /// No artifact identity was supplied, neither as a locator nor as a discrete
    /// artifact id.
    #[error(
        "You must specify an artifact, e.g. -Dartifact=org.apache.maven.plugins:maven-downloader-plugin:1.0"
    )]
    MissingCoordinate,

    /// The locator string does not split into 3 to 5 tokens.
    #[error("Invalid artifact, you must specify groupId:artifactId:version[:packaging[:classifier]] {artifact}")]
    InvalidCoordinateFormat {
        /// The locator string as supplied
        artifact: String,
    },

    /// Discrete fields name an artifact but leave a required field empty.
    #[error("Incomplete artifact coordinate: {field} is required when artifactId is given")]
    IncompleteCoordinate {
        /// Name of the missing field (`groupId` or `version`)
        field: &'static str,
    },

    /// A `-D` property could not be interpreted.
    #[error("Invalid property '{property}': {reason}")]
    InvalidProperty {
        /// The raw property text
        property: String,
        /// Why it was rejected
        reason: String,
    },

    /// The invocation is not bound to a project.
    #[error("You must execute this goal in a project")]
    NoProjectContext,

    /// The current project has no descriptor file on disk.
    #[error("No pom file for this project found")]
    NoDescriptorFile,

    /// Reading the descriptor failed.
    #[error("Reading file failed: {file}")]
    ReadFailure {
        /// Descriptor file name
        file: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The descriptor is not a well-formed Maven project document.
    #[error("Invalid pom file {file}: {reason}")]
    DescriptorParseError {
        /// Descriptor file name
        file: String,
        /// Parser message
        reason: String,
    },

    /// Serializing the document to its backing file failed.
    #[error("Writing to file failed: {file}")]
    WriteFailure {
        /// Descriptor file name
        file: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Any other failure, used when wrapping foreign errors for display.
    #[error("{message}")]
    Other {
        /// The error message
        message: String,
    },
}

/// Error wrapper carrying the user-facing details and suggestion.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying pomdep error
    pub error: PomdepError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: PomdepError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr: error in red, details in yellow, suggestion in green.
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

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] ready for display.
///
/// [`PomdepError`] values get tailored suggestions. Anything else is shown
/// with its full cause chain as details.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    match error.downcast::<PomdepError>() {
        Ok(pomdep_error) => create_error_context(pomdep_error),
        Err(error) => {
            let causes: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();
            let context = ErrorContext::new(PomdepError::Other {
                message: error.to_string(),
            });
            if causes.is_empty() {
                context
            } else {
                context.with_details(causes.join(": "))
            }
        }
    }
}

fn create_error_context(error: PomdepError) -> ErrorContext {
    let (details, suggestion): (Option<String>, Option<String>) = match &error {
        PomdepError::MissingCoordinate => (
            None,
            Some(format!(
                "Pass --artifact {LOCATOR_USAGE}, or --group-id, --artifact-id and --version"
            )),
        ),
        PomdepError::InvalidCoordinateFormat { .. } => (
            Some("The locator must contain 3 to 5 colon-separated parts".to_string()),
            Some("Example: org.apache.commons:commons-lang3:3.14.0 or g:a:v:war:classes".to_string()),
        ),
        PomdepError::IncompleteCoordinate { field } => (
            None,
            Some(format!("Add --{} or use --artifact instead", flag_for_field(field))),
        ),
        PomdepError::InvalidProperty { .. } => (
            None,
            Some("Properties take the form -Dkey=value, e.g. -Dmdep.skip=true".to_string()),
        ),
        PomdepError::NoProjectContext => (
            Some("No pom.xml was found in the current directory".to_string()),
            Some("Run pomdep from the project directory or point --file at its pom.xml".to_string()),
        ),
        PomdepError::NoDescriptorFile => (
            None,
            Some("Check that the project directory contains a pom.xml".to_string()),
        ),
        PomdepError::ReadFailure { source, .. } | PomdepError::WriteFailure { source, .. } => {
            let suggestion = match source.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    "Check the file permissions of the pom file and its directory"
                }
                _ => "Check that the pom file path is a regular, accessible file",
            };
            (Some(source.to_string()), Some(suggestion.to_string()))
        }
        PomdepError::DescriptorParseError { .. } => (
            None,
            Some("Fix the XML syntax of the pom file; the root element must be <project>".to_string()),
        ),
        PomdepError::ConfigError { .. } => (
            None,
            Some(
                "Check the TOML syntax of the config file or pass --config with another path"
                    .to_string(),
            ),
        ),
        PomdepError::Other { .. } => (None, None),
    };

    ErrorContext {
        error,
        suggestion,
        details,
    }
}

fn flag_for_field(field: &str) -> &'static str {
    match field {
        "groupId" => "group-id",
        "artifactId" => "artifact-id",
        _ => "version",
    }
}
