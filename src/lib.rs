//! pomdep - add dependencies to Maven project descriptors
//!
//! pomdep is a command-line equivalent of `mvn dependency:add`: it resolves an
//! artifact coordinate, appends a `<dependency>` to the project's `pom.xml`
//! and rewrites the file. Everything runs synchronously in one pass; there is
//! no dependency resolution, no duplicate detection and no remote access.
//!
//! # Core Modules
//!
//! - [`cli`] - Command-line interface
//! - [`config`] - User configuration (`~/.pomdep/config.toml`)
//! - [`coordinate`] - Artifact coordinates and their two input forms
//! - [`core`] - Error types and user-facing error formatting
//! - [`descriptor`] - `pom.xml` document model, parser and writer
//! - [`mutator`] - The add goal itself
//! - [`project`] - Project context, discovery and descriptor serialization
//!
//! # Example
//!
//! ```rust,no_run
//! use pomdep::coordinate::CoordinateInput;
//! use pomdep::mutator::AddGoal;
//! use pomdep::project::{FsSession, XmlDocumentWriter};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut session = FsSession::discover(None)?;
//! let goal = AddGoal::new(CoordinateInput::Locator("org.slf4j:slf4j-api:2.0.13".into()));
//! goal.execute(&mut session, &XmlDocumentWriter)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod coordinate;
pub mod core;
pub mod descriptor;
pub mod mutator;
pub mod project;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
