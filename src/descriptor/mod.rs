//! In-memory model of a project descriptor (`pom.xml`).
//!
//! The document is kept as a generic element tree rather than a typed Maven
//! model so that content this tool knows nothing about (plugins, profiles,
//! comments, vendor extensions) survives a read-mutate-write cycle. Only the
//! `<project><dependencies>` list has a typed view, through [`Dependency`].
//!
//! Whitespace-only text between elements is dropped on parse and regenerated
//! on write, so a rewritten file is re-indented. Element order, attributes,
//! text (including the spaces of mixed content), comments and CDATA are kept.
//!
//! # Examples
//!
//! ```rust
//! use pomdep::descriptor::{Dependency, PomDocument};
//!
//! let mut pom = PomDocument::parse("<project><modelVersion>4.0.0</modelVersion></project>")?;
//! pom.add_dependency(Dependency::new("g", "a", "1.0"));
//! assert_eq!(pom.dependencies().len(), 1);
//! # Ok::<(), pomdep::descriptor::XmlError>(())
//! ```

mod dependency;
mod xml;


pub use dependency::{DEFAULT_TYPE, Dependency};
pub use xml::XmlError;

use crate::core::{PomdepError, Result};
use std::path::Path;

/// Root element name of a project descriptor.
pub const PROJECT_ELEMENT: &str = "project";

/// Siblings that follow `<dependencies>` in the canonical POM layout.
const AFTER_DEPENDENCIES: [&str; 5] = ["repositories", "pluginRepositories", "build", "reporting", "profiles"];

/// A node in the element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Character data, stored unescaped
    Text(String),
    CData(String),
    Comment(String),
    ProcessingInstruction(String),
    DocType(String),
}

/// An XML element with its attributes in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Iterate over child elements, skipping text and comments.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    /// First child element with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.elements().find(|element| element.name == name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.children.iter_mut().find_map(|node| match node {
            Node::Element(element) if element.name == name => Some(element),
            _ => None,
        })
    }

    /// Concatenated text of the named child, trimmed. `None` if the child is absent.
    #[must_use]
    pub fn child_text(&self, name: &str) -> Option<String> {
        self.child(name).map(Element::text)
    }

    /// Concatenated text and CDATA content of this element, trimmed.
    #[must_use]
    pub fn text(&self) -> String {
        let mut text = String::new();
        for node in &self.children {
            match node {
                Node::Text(value) | Node::CData(value) => text.push_str(value),
                _ => {}
            }
        }
        text.trim().to_string()
    }

    /// Append `<name>text</name>`.
    pub fn push_text_child(&mut self, name: &str, text: &str) {
        let mut child = Element::new(name);
        child.children.push(Node::Text(text.to_string()));
        self.children.push(Node::Element(child));
    }
}

/// The `<?xml ...?>` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDeclaration {
    pub version: String,
    pub encoding: Option<String>,
    pub standalone: Option<String>,
}

impl Default for XmlDeclaration {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            encoding: Some("UTF-8".to_string()),
            standalone: None,
        }
    }
}

/// A parsed project descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomDocument {
    pub declaration: XmlDeclaration,
    /// Comments, processing instructions and doctype before the root element
    pub prolog: Vec<Node>,
    pub root: Element,
    /// Comments and processing instructions after the root element
    pub epilog: Vec<Node>,
}

impl Default for PomDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PomDocument {
    /// A minimal `<project>` with only `<modelVersion>4.0.0</modelVersion>`.
    #[must_use]
    pub fn new() -> Self {
        let mut root = Element::new(PROJECT_ELEMENT);
        root.push_text_child("modelVersion", "4.0.0");
        Self {
            declaration: XmlDeclaration::default(),
            prolog: Vec::new(),
            root,
            epilog: Vec::new(),
        }
    }

    /// Parse a descriptor from XML text.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError`] when the text is not well-formed or the root element
    /// is not `<project>`.
    pub fn parse(source: &str) -> std::result::Result<Self, XmlError> {
        xml::parse_document(source)
    }

    /// Read and parse the descriptor at `path`.
    ///
    /// # Errors
    ///
    /// [`PomdepError::ReadFailure`] when the file cannot be read and
    /// [`PomdepError::DescriptorParseError`] when it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let file = display_name(path);
        let content = std::fs::read_to_string(path).map_err(|source| PomdepError::ReadFailure {
            file: file.clone(),
            source,
        })?;

        let document = Self::parse(&content).map_err(|e| PomdepError::DescriptorParseError {
            file,
            reason: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), "Loaded project descriptor");
        Ok(document)
    }

    /// Serialize the whole document to `out`.
    ///
    /// # Errors
    ///
    /// Any I/O error raised by `out`.
    pub fn write_to<W: std::io::Write>(&self, out: W) -> std::io::Result<()> {
        xml::write_document(self, out)
    }

    /// Serialize to a string.
    ///
    /// # Errors
    ///
    /// Only fails if the XML writer itself reports an error.
    pub fn to_xml_string(&self) -> std::io::Result<String> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        String::from_utf8(buffer).map_err(std::io::Error::other)
    }

    /// Direct dependencies of the project, in document order.
    ///
    /// Entries under `<dependencyManagement>` or profiles are not included.
    #[must_use]
    pub fn dependencies(&self) -> Vec<Dependency> {
        self.root
            .child("dependencies")
            .map(|dependencies| {
                dependencies
                    .elements()
                    .filter(|element| element.name == "dependency")
                    .map(Dependency::from_element)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Append a dependency at the end of `<project><dependencies>`.
    ///
    /// The `<dependencies>` element is created when missing. Existing entries
    /// are never inspected, so the same dependency can be added twice.
    pub fn add_dependency(&mut self, dependency: Dependency) {
        if self.root.child("dependencies").is_none() {
            let position = self
                .root
                .children
                .iter()
                .position(|node| {
                    matches!(node, Node::Element(element) if AFTER_DEPENDENCIES.contains(&element.name.as_str()))
                })
                .unwrap_or(self.root.children.len());
            self.root
                .children
                .insert(position, Node::Element(Element::new("dependencies")));
        }

        if let Some(dependencies) = self.root.child_mut("dependencies") {
            dependencies.children.push(Node::Element(dependency.to_element()));
        }
    }
}

/// The file name of `path` for messages, falling back to the full path.
#[must_use]
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
