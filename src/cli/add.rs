//! Add command implementation for pomdep
//!
//! Collects the coordinate from flags, Maven-style `-D` properties and the
//! config file, then runs the [`AddGoal`] against the project found on disk.
//!
//! Precedence, highest first: explicit flag, `-D` property, config file,
//! built-in default.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

use crate::config::PomdepConfig;
use crate::coordinate::{CoordinateInput, DiscreteFields};
use crate::core::PomdepError;
use crate::mutator::{AddGoal, AddResult, ClassifierMapping};
use crate::project::{FsSession, XmlDocumentWriter};

/// Add a single artifact to the project's pom file.
#[derive(Args, Debug)]
pub struct AddCommand {
    /// Artifact locator: groupId:artifactId:version[:packaging[:classifier]]
    ///
    /// When given, the discrete coordinate options are ignored.
    #[arg(short, long, value_name = "LOCATOR")]
    artifact: Option<String>,

    /// The groupId of the artifact (ignored if --artifact is used)
    #[arg(short, long, value_name = "ID")]
    group_id: Option<String>,

    /// The artifactId of the artifact (ignored if --artifact is used)
    #[arg(long, value_name = "ID")]
    artifact_id: Option<String>,

    /// The version of the artifact (ignored if --artifact is used)
    #[arg(long = "version", value_name = "VERSION")]
    artifact_version: Option<String>,

    /// The packaging of the artifact, `jar` when unset (ignored if --artifact is used)
    #[arg(short, long, value_name = "TYPE")]
    packaging: Option<String>,

    /// The classifier of the artifact (ignored if --artifact is used)
    #[arg(long, value_name = "NAME")]
    classifier: Option<String>,

    /// Skip execution completely
    #[arg(long, env = "POMDEP_SKIP")]
    skip: bool,

    /// Write the classifier onto the dependency entry
    ///
    /// By default a classifier is accepted but not recorded, matching the
    /// Maven `dependency:add` goal.
    #[arg(long)]
    apply_classifier: bool,

    /// Maven-style property, e.g. -Dartifact=g:a:v or -Dmdep.skip=true
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE")]
    properties: Vec<String>,
}

/// Values recognised among the `-D` properties.
#[derive(Debug, Default, PartialEq, Eq)]
struct Properties {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
    packaging: Option<String>,
    classifier: Option<String>,
    artifact: Option<String>,
    skip: Option<bool>,
}

impl Properties {
    /// Parse `KEY=VALUE` definitions; a bare `KEY` means `KEY=true`.
    fn parse(defines: &[String]) -> Result<Self, PomdepError> {
        let mut properties = Self::default();

        for define in defines {
            let (key, value) = define.split_once('=').unwrap_or((define.as_str(), "true"));
            let value = value.to_string();

            match key.trim() {
                "" => {
                    return Err(PomdepError::InvalidProperty {
                        property: define.clone(),
                        reason: "missing property name".to_string(),
                    });
                }
                "groupId" => properties.group_id = Some(value),
                "artifactId" => properties.artifact_id = Some(value),
                "version" => properties.version = Some(value),
                "packaging" => properties.packaging = Some(value),
                "classifier" => properties.classifier = Some(value),
                "artifact" => properties.artifact = Some(value),
                "mdep.skip" => {
                    let skip = value.to_ascii_lowercase().parse::<bool>().map_err(|_| {
                        PomdepError::InvalidProperty {
                            property: define.clone(),
                            reason: "expected true or false".to_string(),
                        }
                    })?;
                    properties.skip = Some(skip);
                }
                other => debug!(property = other, "Ignoring unrecognized property"),
            }
        }

        Ok(properties)
    }
}

impl AddCommand {
    /// Merge the command line with `config` into a goal.
    ///
    /// `--skip` short-circuits everything else, so no option is validated and
    /// the config file is not read.
    fn into_goal(self, config: &PomdepConfig) -> Result<AddGoal, PomdepError> {
        let classifier_mapping = if self.apply_classifier || config.apply_classifier {
            ClassifierMapping::FromCoordinate
        } else {
            ClassifierMapping::Preserve
        };

        if self.skip {
            return Ok(AddGoal {
                input: CoordinateInput::Fields(DiscreteFields::default()),
                skip: true,
                classifier_mapping,
            });
        }

        let properties = Properties::parse(&self.properties)?;
        let fields = DiscreteFields {
            group_id: self.group_id.or(properties.group_id),
            artifact_id: self.artifact_id.or(properties.artifact_id),
            version: self.artifact_version.or(properties.version),
            packaging: self
                .packaging
                .or(properties.packaging)
                .or_else(|| config.packaging.clone()),
            classifier: self.classifier.or(properties.classifier),
        };

        Ok(AddGoal {
            input: CoordinateInput::select(self.artifact.or(properties.artifact), fields),
            skip: properties.skip.unwrap_or(config.skip),
            classifier_mapping,
        })
    }

    /// Execute the add command.
    ///
    /// # Arguments
    ///
    /// * `manifest_path` - Explicit pom file or project directory; defaults to
    ///   `pom.xml` in the current directory
    /// * `config_path` - Explicit config file; defaults to the user config
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the dependency was added or execution was skipped
    /// - `Err(anyhow::Error)` wrapping a [`PomdepError`] otherwise
    pub fn execute_with_manifest_path(
        self,
        manifest_path: Option<PathBuf>,
        config_path: Option<PathBuf>,
    ) -> Result<()> {
        // an explicit --skip never reads the config file
        let config = if self.skip {
            PomdepConfig::default()
        } else {
            PomdepConfig::load(config_path.as_deref())?
        };
        let goal = self.into_goal(&config)?;
        let mut session = FsSession::discover(manifest_path.as_deref())?;

        match goal.execute(&mut session, &XmlDocumentWriter)? {
            AddResult::Skipped => println!("{}", "Skipping plugin execution".yellow()),
            AddResult::Added(outcome) => println!(
                "{}",
                format!("Successfully added {} to {}", outcome.key, outcome.file_name).green()
            ),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        add: AddCommand,
    }

    fn parse(args: &[&str]) -> AddCommand {
        let mut argv = vec!["add"];
        argv.extend_from_slice(args);
        Harness::try_parse_from(argv).unwrap().add
    }

    #[test]
    fn test_properties_parse() {
        let defines = vec![
            "artifact=g:a:v".to_string(),
            "mdep.skip".to_string(),
            "unknown=1".to_string(),
        ];
        let properties = Properties::parse(&defines).unwrap();

        assert_eq!(properties.artifact.as_deref(), Some("g:a:v"));
        assert_eq!(properties.skip, Some(true));
    }

    #[test]
    fn test_invalid_properties() {
        let result = Properties::parse(&["=value".to_string()]);
        assert!(matches!(result, Err(PomdepError::InvalidProperty { .. })));

        let result = Properties::parse(&["mdep.skip=maybe".to_string()]);
        assert!(matches!(result, Err(PomdepError::InvalidProperty { .. })));

        let properties = Properties::parse(&["mdep.skip=FALSE".to_string()]).unwrap();
        assert_eq!(properties.skip, Some(false));
    }

    #[test]
    fn test_flags_win_over_properties_and_config() {
        let command = parse(&["--group-id", "flag.group", "-DgroupId=prop.group", "-DartifactId=a", "-Dversion=1"]);
        let config = PomdepConfig {
            packaging: Some("war".to_string()),
            ..PomdepConfig::default()
        };

        let goal = command.into_goal(&config).unwrap();
        let CoordinateInput::Fields(fields) = &goal.input else {
            panic!("expected discrete fields");
        };
        assert_eq!(fields.group_id.as_deref(), Some("flag.group"));
        assert_eq!(fields.artifact_id.as_deref(), Some("a"));
        assert_eq!(fields.packaging.as_deref(), Some("war"));
        assert!(!goal.skip);
    }

    #[test]
    fn test_locator_from_property_selects_locator_mode() {
        let goal = parse(&["-Dartifact=g:a:1.0", "--artifact-id", "other"])
            .into_goal(&PomdepConfig::default())
            .unwrap();

        assert_eq!(goal.input, CoordinateInput::Locator("g:a:1.0".to_string()));
    }

    #[test]
    fn test_skip_sources() {
        let config = PomdepConfig {
            skip: true,
            ..PomdepConfig::default()
        };
        assert!(parse(&[]).into_goal(&config).unwrap().skip);
        assert!(!parse(&["-Dmdep.skip=false"]).into_goal(&config).unwrap().skip);

        // --skip bypasses property validation entirely
        let goal = parse(&["--skip", "-Dmdep.skip=maybe"]).into_goal(&PomdepConfig::default()).unwrap();
        assert!(goal.skip);
    }

    #[test]
    fn test_apply_classifier_sources() {
        let goal = parse(&["--apply-classifier"]).into_goal(&PomdepConfig::default()).unwrap();
        assert_eq!(goal.classifier_mapping, ClassifierMapping::FromCoordinate);

        let config = PomdepConfig {
            apply_classifier: true,
            ..PomdepConfig::default()
        };
        let goal = parse(&[]).into_goal(&config).unwrap();
        assert_eq!(goal.classifier_mapping, ClassifierMapping::FromCoordinate);

        let goal = parse(&[]).into_goal(&PomdepConfig::default()).unwrap();
        assert_eq!(goal.classifier_mapping, ClassifierMapping::Preserve);
    }
}
