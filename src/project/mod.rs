//! Project context and document writer capabilities.
//!
//! The descriptor mutator never touches the build environment directly. It
//! talks to two narrow capabilities:
//!
//! - [`ProjectContext`] / [`ProjectDescriptor`]: "which project am I in, where is
//!   its descriptor file, and give me its in-memory model"
//! - [`DocumentWriter`]: "serialize this model to this stream"
//!
//! [`FsSession`] and [`XmlDocumentWriter`] are the filesystem-backed
//! implementations used by the CLI. [`Session`] holds an already-built
//! [`MavenProject`] and is what tests use.

use crate::core::Result;
use crate::descriptor::PomDocument;
use std::io::Write;
use std::path::{Path, PathBuf};


/// Conventional descriptor file name.
pub const POM_FILE_NAME: &str = "pom.xml";

/// A project the goal runs against.
pub trait ProjectDescriptor {
    /// The descriptor file backing the model, if the project has one.
    fn backing_file(&self) -> Option<&Path>;

    /// The model as read from the descriptor, mutable in place.
    fn original_model_mut(&mut self) -> &mut PomDocument;
}

/// Access to the project the invocation is bound to.
pub trait ProjectContext {
    type Project: ProjectDescriptor;

    /// The current project, or `None` outside a project.
    ///
    /// # Errors
    ///
    /// Implementations that load lazily report read or parse failures here.
    fn current_project(&mut self) -> Result<Option<&mut Self::Project>>;
}

/// Serializes a model to an output stream.
pub trait DocumentWriter {
    /// Write `document` to `out`.
    ///
    /// # Errors
    ///
    /// Any I/O error raised while writing.
    fn write(&self, out: &mut dyn Write, document: &PomDocument) -> std::io::Result<()>;
}

/// Writes descriptors as indented XML.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlDocumentWriter;

impl DocumentWriter for XmlDocumentWriter {
    fn write(&self, out: &mut dyn Write, document: &PomDocument) -> std::io::Result<()> {
        document.write_to(out)
    }
}

/// A project and its in-memory model.
#[derive(Debug, Clone)]
pub struct MavenProject {
    file: Option<PathBuf>,
    model: PomDocument,
}

impl MavenProject {
    /// A project backed by a descriptor file.
    pub fn new(file: impl Into<PathBuf>, model: PomDocument) -> Self {
        Self {
            file: Some(file.into()),
            model,
        }
    }

    /// A project with no descriptor on disk and a default model.
    #[must_use]
    pub fn without_descriptor() -> Self {
        Self {
            file: None,
            model: PomDocument::new(),
        }
    }

    /// Read-only view of the model.
    #[must_use]
    pub fn model(&self) -> &PomDocument {
        &self.model
    }
}

impl ProjectDescriptor for MavenProject {
    fn backing_file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    fn original_model_mut(&mut self) -> &mut PomDocument {
        &mut self.model
    }
}

/// A context holding an already loaded project (or none).
#[derive(Debug, Clone, Default)]
pub struct Session {
    project: Option<MavenProject>,
}

impl Session {
    #[must_use]
    pub fn new(project: Option<MavenProject>) -> Self {
        Self { project }
    }

    #[must_use]
    pub fn project(&self) -> Option<&MavenProject> {
        self.project.as_ref()
    }
}

impl ProjectContext for Session {
    type Project = MavenProject;

    fn current_project(&mut self) -> Result<Option<&mut MavenProject>> {
        Ok(self.project.as_mut())
    }
}

/// Where the project lives on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectLocation {
    /// Not inside a project.
    Outside,
    /// A project base directory without a descriptor file.
    BaseOnly(PathBuf),
    /// An existing descriptor file.
    Descriptor(PathBuf),
}

impl ProjectLocation {
    /// Locate the project for an invocation.
    ///
    /// With an explicit path, a directory is taken as the project base and any
    /// other path as the descriptor itself. Without one, only `pom.xml` in
    /// `working_dir` counts; parent directories are not searched.
    #[must_use]
    pub fn locate(explicit: Option<&Path>, working_dir: &Path) -> Self {
        let Some(path) = explicit else {
            let candidate = working_dir.join(POM_FILE_NAME);
            return if candidate.is_file() {
                Self::Descriptor(candidate)
            } else {
                Self::Outside
            };
        };

        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            working_dir.join(path)
        };

        if path.is_dir() {
            let candidate = path.join(POM_FILE_NAME);
            if candidate.is_file() {
                Self::Descriptor(candidate)
            } else {
                Self::BaseOnly(path)
            }
        } else if path.is_file() {
            Self::Descriptor(path)
        } else {
            Self::BaseOnly(path.parent().map(Path::to_path_buf).unwrap_or(path))
        }
    }
}

/// Filesystem-backed context that parses the descriptor on first use.
#[derive(Debug)]
pub struct FsSession {
    location: ProjectLocation,
    project: Option<MavenProject>,
}

impl FsSession {
    #[must_use]
    pub fn new(location: ProjectLocation) -> Self {
        Self {
            location,
            project: None,
        }
    }

    /// Locate the project from the current working directory.
    ///
    /// # Errors
    ///
    /// Fails when the working directory cannot be determined.
    pub fn discover(explicit: Option<&Path>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let working_dir = std::env::current_dir().context("Cannot determine current working directory")?;
        let location = ProjectLocation::locate(explicit, &working_dir);
        tracing::debug!(?location, "Located project");
        Ok(Self::new(location))
    }
}

impl ProjectContext for FsSession {
    type Project = MavenProject;

    fn current_project(&mut self) -> Result<Option<&mut MavenProject>> {
        if self.project.is_none() {
            self.project = match &self.location {
                ProjectLocation::Outside => None,
                ProjectLocation::BaseOnly(base_dir) => {
                    tracing::debug!(base_dir = %base_dir.display(), "Project has no descriptor file");
                    Some(MavenProject::without_descriptor())
                }
                ProjectLocation::Descriptor(file) => {
                    Some(MavenProject::new(file.clone(), PomDocument::load(file)?))
                }
            };
        }
        Ok(self.project.as_mut())
    }
}
