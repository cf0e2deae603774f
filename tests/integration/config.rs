use crate::common::TestProject;
use pomdep::test_utils::PomFixture;
use predicates::prelude::*;

#[test]
fn test_config_skip() {
    let project = TestProject::new().unwrap();
    project.write_pom(PomFixture::MINIMAL).unwrap();
    project.write_config("skip = true\n").unwrap();

    project
        .pomdep()
        .args(["add", "-a", "g:a:1.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipping plugin execution"));
    assert_eq!(project.read_pom(), PomFixture::MINIMAL);

    // a property overrides the config file
    project
        .pomdep()
        .args(["add", "-a", "g:a:1.0", "-Dmdep.skip=false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully added g:a:jar to pom.xml"));
}

#[test]
fn test_config_packaging_and_classifier() {
    let project = TestProject::new().unwrap();
    project.write_pom(PomFixture::MINIMAL).unwrap();
    project
        .write_config("apply-classifier = true\npackaging = \"war\"\n")
        .unwrap();

    project
        .pomdep()
        .args(["add", "-g", "g", "--artifact-id", "a", "--version", "1.0", "--classifier", "tests"])
        .assert()
        .success()
        .stdout(predicate::str::contains("g:a:war:tests"));

    let pom = project.read_pom();
    assert!(pom.contains("<type>war</type>"));
    assert!(pom.contains("<classifier>tests</classifier>"));
}

#[test]
fn test_invalid_config_fails() {
    let project = TestProject::new().unwrap();
    project.write_pom(PomFixture::MINIMAL).unwrap();
    project.write_config("skip = \"sometimes\"\n").unwrap();

    project
        .pomdep()
        .args(["add", "-a", "g:a:1.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let project = TestProject::new().unwrap();
    project.write_pom(PomFixture::MINIMAL).unwrap();

    project
        .pomdep()
        .args(["--config", "does-not-exist.toml", "add", "-a", "g:a:1.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let project = TestProject::new().unwrap();
    project.write_pom(PomFixture::MINIMAL).unwrap();

    project
        .pomdep()
        .args(["--verbose", "add", "-a", "g:a:1.0"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Resolved coordinate"));
}
