//! Artifact coordinates and the resolver that builds them.
//!
//! A [`Coordinate`] is the normalized identity of an artifact: group, name,
//! version, packaging and an optional classifier. It is built in one step from a
//! [`CoordinateInput`], which is either a colon-delimited locator string or a set
//! of discrete fields. The two shapes never merge: a locator fully determines the
//! coordinate.
//!
//! # Locator format
//!
//! ```text
//! groupId:artifactId:version[:packaging[:classifier]]
//! ```
//!
//! Empty segments are dropped before counting, so `g::a:v` reads as three tokens.
//!
//! # Examples
//!
//! ```rust
//! use pomdep::coordinate::Coordinate;
//!
//! let coordinate: Coordinate = "org.slf4j:slf4j-api:2.0.13".parse()?;
//! assert_eq!(coordinate.packaging(), "jar");
//! assert_eq!(coordinate.classifier(), None);
//! # Ok::<(), pomdep::core::PomdepError>(())
//! ```

use crate::core::{PomdepError, Result};
use std::fmt;
use std::str::FromStr;


/// Packaging used when none is given.
pub const DEFAULT_PACKAGING: &str = "jar";

/// Fully populated artifact coordinate.
///
/// Group, artifact and version are always non-empty and packaging always has a
/// value. The fields are private so a `Coordinate` can only come out of the
/// resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    group_id: String,
    artifact_id: String,
    version: String,
    packaging: String,
    classifier: Option<String>,
}

impl Coordinate {
    /// The group id, e.g. `org.apache.maven.plugins`.
    #[must_use]
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// The artifact id, e.g. `maven-dependency-plugin`.
    #[must_use]
    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Packaging (the dependency `type`), `jar` unless overridden.
    #[must_use]
    pub fn packaging(&self) -> &str {
        &self.packaging
    }

    #[must_use]
    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    /// Parse a `groupId:artifactId:version[:packaging[:classifier]]` locator.
    ///
    /// # Errors
    ///
    /// [`PomdepError::InvalidCoordinateFormat`] when the locator does not split into
    /// 3 to 5 non-empty tokens.
    pub fn from_locator(artifact: &str) -> Result<Self> {
        let tokens: Vec<&str> = artifact.split(':').filter(|token| !token.is_empty()).collect();

        if !(3..=5).contains(&tokens.len()) {
            return Err(PomdepError::InvalidCoordinateFormat {
                artifact: artifact.to_string(),
            });
        }

        Ok(Self {
            group_id: tokens[0].to_string(),
            artifact_id: tokens[1].to_string(),
            version: tokens[2].to_string(),
            packaging: tokens.get(3).copied().unwrap_or(DEFAULT_PACKAGING).to_string(),
            classifier: tokens.get(4).map(|classifier| (*classifier).to_string()),
        })
    }

    /// Build a coordinate from discrete fields.
    ///
    /// # Errors
    ///
    /// - [`PomdepError::MissingCoordinate`] when no artifact id is given
    /// - [`PomdepError::IncompleteCoordinate`] when the group id or version is missing
    pub fn from_fields(fields: &DiscreteFields) -> Result<Self> {
        let artifact_id = non_empty(fields.artifact_id.as_deref()).ok_or(PomdepError::MissingCoordinate)?;
        let group_id = non_empty(fields.group_id.as_deref())
            .ok_or(PomdepError::IncompleteCoordinate { field: "groupId" })?;
        let version = non_empty(fields.version.as_deref())
            .ok_or(PomdepError::IncompleteCoordinate { field: "version" })?;

        Ok(Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
            packaging: non_empty(fields.packaging.as_deref()).unwrap_or(DEFAULT_PACKAGING).to_string(),
            classifier: non_empty(fields.classifier.as_deref()).map(str::to_string),
        })
    }
}

impl FromStr for Coordinate {
    type Err = PomdepError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_locator(s)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}:{}", self.group_id, self.artifact_id, self.version, self.packaging)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        Ok(())
    }
}

/// Coordinate parts supplied one by one.
///
/// Any field may be absent; [`Coordinate::from_fields`] decides what is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscreteFields {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    /// Falls back to [`DEFAULT_PACKAGING`] when absent
    pub packaging: Option<String>,
    pub classifier: Option<String>,
}

/// The two mutually exclusive ways of naming an artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinateInput {
    /// A `groupId:artifactId:version[:packaging[:classifier]]` string.
    Locator(String),
    /// Individually supplied fields.
    Fields(DiscreteFields),
}

impl CoordinateInput {
    /// Pick the input shape: a present locator wins over every discrete field.
    #[must_use]
    pub fn select(artifact: Option<String>, fields: DiscreteFields) -> Self {
        match artifact {
            Some(locator) => Self::Locator(locator),
            None => Self::Fields(fields),
        }
    }

    /// Resolve into a validated [`Coordinate`].
    ///
    /// # Errors
    ///
    /// See [`Coordinate::from_locator`] and [`Coordinate::from_fields`].
    pub fn resolve(&self) -> Result<Coordinate> {
        match self {
            Self::Locator(artifact) => Coordinate::from_locator(artifact),
            Self::Fields(fields) => Coordinate::from_fields(fields),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
