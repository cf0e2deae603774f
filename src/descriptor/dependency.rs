//! The `<dependency>` entry of a project descriptor.

use super::Element;

/// Dependency type assumed when `<type>` is absent.
pub const DEFAULT_TYPE: &str = "jar";

/// A dependency declared in `<project><dependencies>`.
///
/// Fields that are absent from the XML read as empty strings, except `type`
/// which reads as [`DEFAULT_TYPE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    /// The `<type>` element; the packaging of the referenced artifact
    pub dependency_type: String,
    pub classifier: Option<String>,
}

impl Dependency {
    /// Create a dependency with the default type and no classifier.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            dependency_type: DEFAULT_TYPE.to_string(),
            classifier: None,
        }
    }

    /// The identity used by dependency management:
    /// `groupId:artifactId:type[:classifier]`.
    #[must_use]
    pub fn management_key(&self) -> String {
        let mut key = format!("{}:{}:{}", self.group_id, self.artifact_id, self.dependency_type);
        if let Some(classifier) = &self.classifier {
            key.push(':');
            key.push_str(classifier);
        }
        key
    }

    /// Read a dependency from a `<dependency>` element.
    #[must_use]
    pub fn from_element(element: &Element) -> Self {
        let text = |name: &str| element.child_text(name).unwrap_or_default();

        Self {
            group_id: text("groupId"),
            artifact_id: text("artifactId"),
            version: text("version"),
            dependency_type: element
                .child_text("type")
                .unwrap_or_else(|| DEFAULT_TYPE.to_string()),
            classifier: element.child_text("classifier"),
        }
    }

    /// Render as a `<dependency>` element.
    ///
    /// Like the Maven model writer, `<type>` is omitted when it is `jar` and
    /// `<classifier>` when unset.
    #[must_use]
    pub fn to_element(&self) -> Element {
        let mut element = Element::new("dependency");
        element.push_text_child("groupId", &self.group_id);
        element.push_text_child("artifactId", &self.artifact_id);
        if !self.version.is_empty() {
            element.push_text_child("version", &self.version);
        }
        if self.dependency_type != DEFAULT_TYPE {
            element.push_text_child("type", &self.dependency_type);
        }
        if let Some(classifier) = &self.classifier {
            element.push_text_child("classifier", classifier);
        }
        element
    }
}
