//! The add goal: append a dependency to the project descriptor and rewrite it.
//!
//! [`AddGoal::execute`] runs the whole invocation as a single linear flow:
//!
//! ```text
//! skip? ── yes ──> Skipped
//!   │ no
//! resolve coordinate ──> locate descriptor ──> mutate model ──> serialize ──> Added
//! ```
//!
//! Every step can end the flow with a [`PomdepError`]; nothing is retried.
//! Validation happens before the project is even looked at, so an invalid
//! coordinate never touches the descriptor. A failed write, on the other
//! hand, leaves the in-memory model mutated.
//!
//! The descriptor is not locked and the write is not atomic: two invocations
//! against the same file race and the last writer wins.

use crate::coordinate::{Coordinate, CoordinateInput};
use crate::core::{PomdepError, Result};
use crate::descriptor::{Dependency, display_name};
use crate::project::{DocumentWriter, ProjectContext, ProjectDescriptor};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};


/// How the coordinate's classifier reaches the dependency entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClassifierMapping {
    /// The entry keeps its own (unset) classifier, so a classifier given on the
    /// coordinate does not appear in the descriptor. This is the behaviour of
    /// the Maven `dependency:add` goal.
    #[default]
    Preserve,
    /// Copy the coordinate's classifier onto the entry.
    FromCoordinate,
}

/// Map a coordinate to a new dependency entry.
#[must_use]
pub fn map_dependency(coordinate: &Coordinate, mapping: ClassifierMapping) -> Dependency {
    let mut dependency = Dependency::new(
        coordinate.group_id(),
        coordinate.artifact_id(),
        coordinate.version(),
    );
    dependency.dependency_type = coordinate.packaging().to_string();

    if let Some(classifier) = coordinate.classifier() {
        dependency.classifier = match mapping {
            ClassifierMapping::Preserve => dependency.classifier.take(),
            ClassifierMapping::FromCoordinate => Some(classifier.to_string()),
        };
    }

    dependency
}

/// What a successful add reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    /// Management key of the added dependency (`groupId:artifactId:type[:classifier]`)
    pub key: String,
    /// File name of the rewritten descriptor
    pub file_name: String,
}

/// Result of running the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddResult {
    /// Execution was skipped; nothing was validated or written.
    Skipped,
    Added(AddOutcome),
}

/// Append the dependency for `coordinate` to the current project's descriptor
/// and rewrite the descriptor file.
///
/// # Errors
///
/// - [`PomdepError::NoProjectContext`] when there is no current project
/// - [`PomdepError::NoDescriptorFile`] when the project has no descriptor file
/// - [`PomdepError::WriteFailure`] when the file cannot be written; the model
///   has been mutated by then
/// - whatever the context reports while loading the project
pub fn add_dependency<C, W>(
    coordinate: &Coordinate,
    context: &mut C,
    writer: &W,
    mapping: ClassifierMapping,
) -> Result<AddOutcome>
where
    C: ProjectContext + ?Sized,
    W: DocumentWriter + ?Sized,
{
    let project = context.current_project()?.ok_or(PomdepError::NoProjectContext)?;
    let file = project
        .backing_file()
        .ok_or(PomdepError::NoDescriptorFile)?
        .to_path_buf();
    let file_name = display_name(&file);

    let dependency = map_dependency(coordinate, mapping);
    let key = dependency.management_key();

    let model = project.original_model_mut();
    model.add_dependency(dependency);
    debug!(%key, file = %file.display(), "Appended dependency to model");

    write_descriptor(&file, |out| writer.write(out, model)).map_err(|source| {
        PomdepError::WriteFailure {
            file: file_name.clone(),
            source,
        }
    })?;

    info!("Successfully added {key} to {file_name}");
    Ok(AddOutcome { key, file_name })
}

/// Truncate `path` and hand a buffered stream to `write`.
///
/// The file handle is dropped on every path out of this function, and the
/// buffer is flushed explicitly so that late I/O errors are reported.
fn write_descriptor(
    path: &Path,
    write: impl FnOnce(&mut dyn Write) -> std::io::Result<()>,
) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write(&mut out)?;
    out.flush()
}

/// A fully configured add invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddGoal {
    pub input: CoordinateInput,
    pub skip: bool,
    pub classifier_mapping: ClassifierMapping,
}

impl AddGoal {
    /// A goal that resolves `input` with the default classifier mapping.
    #[must_use]
    pub fn new(input: CoordinateInput) -> Self {
        Self {
            input,
            skip: false,
            classifier_mapping: ClassifierMapping::default(),
        }
    }

    /// Run the goal against `context`, serializing with `writer`.
    ///
    /// # Errors
    ///
    /// Coordinate validation errors first, then those of [`add_dependency`].
    pub fn execute<C, W>(&self, context: &mut C, writer: &W) -> Result<AddResult>
    where
        C: ProjectContext + ?Sized,
        W: DocumentWriter + ?Sized,
    {
        if self.skip {
            info!("Skipping plugin execution");
            return Ok(AddResult::Skipped);
        }

        let coordinate = self.input.resolve()?;
        debug!(%coordinate, "Resolved coordinate");

        add_dependency(&coordinate, context, writer, self.classifier_mapping).map(AddResult::Added)
    }
}
