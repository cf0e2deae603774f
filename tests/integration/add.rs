use crate::common::TestProject;
use pomdep::descriptor::{Dependency, PomDocument};
use pomdep::test_utils::PomFixture;
use predicates::prelude::*;
use std::fs;

fn dependencies(project: &TestProject) -> Vec<Dependency> {
    PomDocument::parse(&project.read_pom()).unwrap().dependencies()
}

#[test]
fn test_add_locator() {
    let project = TestProject::new().unwrap();
    project.write_pom(PomFixture::MINIMAL).unwrap();

    project
        .pomdep()
        .args(["add", "--artifact", "org.apache.maven.plugins:maven-downloader-plugin:1.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Successfully added org.apache.maven.plugins:maven-downloader-plugin:jar to pom.xml",
        ));

    assert_eq!(
        dependencies(&project),
        vec![Dependency::new("org.apache.maven.plugins", "maven-downloader-plugin", "1.0")]
    );
    let pom = project.read_pom();
    assert!(pom.starts_with("<?xml"));
    assert!(!pom.contains("<type>"));
    assert!(pom.contains("<groupId>com.example</groupId>"));
}

#[test]
fn test_add_discrete_fields() {
    let project = TestProject::new().unwrap();
    project.write_pom(PomFixture::WITH_DEPENDENCIES).unwrap();

    project
        .pomdep()
        .args(["add", "-g", "junit", "--artifact-id", "junit", "--version", "4.13.2", "-p", "pom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("junit:junit:pom"));

    let dependencies = dependencies(&project);
    assert_eq!(dependencies.len(), 2);
    assert_eq!(dependencies[0].artifact_id, "slf4j-api");
    assert_eq!(dependencies[1].dependency_type, "pom");
}

#[test]
fn test_add_with_properties() {
    let project = TestProject::new().unwrap();
    project.write_pom(PomFixture::MINIMAL).unwrap();

    project
        .pomdep()
        .args(["add", "-Dartifact=g:a:1.0:war:cls", "-Dunrelated=ignored"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully added g:a:war to pom.xml"));

    let pom = project.read_pom();
    assert!(pom.contains("<type>war</type>"));
    assert!(!pom.contains("<classifier>"));
}

#[test]
fn test_apply_classifier_flag() {
    let project = TestProject::new().unwrap();
    project.write_pom(PomFixture::MINIMAL).unwrap();

    project
        .pomdep()
        .args(["add", "-a", "g:a:1.0:jar:sources", "--apply-classifier"])
        .assert()
        .success()
        .stdout(predicate::str::contains("g:a:jar:sources"));

    assert!(project.read_pom().contains("<classifier>sources</classifier>"));
}

#[test]
fn test_repeated_add_duplicates_entry() {
    let project = TestProject::new().unwrap();
    project.write_pom(PomFixture::MINIMAL).unwrap();

    for _ in 0..2 {
        project.pomdep().args(["add", "-a", "g:a:1.0"]).assert().success();
    }

    assert_eq!(dependencies(&project).len(), 2);
}

#[test]
fn test_skip_leaves_pom_untouched() {
    let project = TestProject::new().unwrap();
    project.write_pom(PomFixture::MINIMAL).unwrap();

    project
        .pomdep()
        .args(["add", "--skip", "-a", "not-a-coordinate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipping plugin execution"));

    project
        .pomdep()
        .args(["add", "-Dmdep.skip=true"])
        .assert()
        .success();

    assert_eq!(project.read_pom(), PomFixture::MINIMAL);
}

#[test]
fn test_skip_outside_project() {
    let project = TestProject::new().unwrap();

    project
        .pomdep()
        .args(["add"])
        .env("POMDEP_SKIP", "true")
        .assert()
        .success();
}

#[test]
fn test_skip_ignores_broken_config() {
    let project = TestProject::new().unwrap();
    project.write_pom(PomFixture::MINIMAL).unwrap();
    fs::write(project.project_path().join("bad.toml"), "skipp = 1\n").unwrap();

    project
        .pomdep()
        .args(["--config", "bad.toml", "add", "--skip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipping plugin execution"));

    project
        .pomdep()
        .args(["--config", "missing.toml", "add", "--skip", "-a", "g:a"])
        .assert()
        .success();

    assert_eq!(project.read_pom(), PomFixture::MINIMAL);
}

#[test]
fn test_invalid_locator_fails() {
    let project = TestProject::new().unwrap();
    project.write_pom(PomFixture::MINIMAL).unwrap();

    project
        .pomdep()
        .args(["add", "-a", "g:a"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Invalid artifact, you must specify groupId:artifactId:version[:packaging[:classifier]] g:a",
        ));

    assert_eq!(project.read_pom(), PomFixture::MINIMAL);
}

#[test]
fn test_missing_coordinate_fails() {
    let project = TestProject::new().unwrap();
    project.write_pom(PomFixture::MINIMAL).unwrap();

    project
        .pomdep()
        .args(["add"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("You must specify an artifact"));
}

#[test]
fn test_no_project_fails() {
    let project = TestProject::new().unwrap();

    project
        .pomdep()
        .args(["add", "-a", "g:a:1.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("You must execute this goal in a project"));
}

#[test]
fn test_directory_without_pom_fails() {
    let project = TestProject::new().unwrap();
    let empty = project.project_path().join("module");
    fs::create_dir_all(&empty).unwrap();

    project
        .pomdep()
        .args(["--file", "module", "add", "-a", "g:a:1.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No pom file for this project found"));
}

#[test]
fn test_explicit_pom_file() {
    let project = TestProject::new().unwrap();
    let module = project.project_path().join("module");
    fs::create_dir_all(&module).unwrap();
    let pom = PomFixture::write_to(&module, PomFixture::WITH_BUILD).unwrap();

    project
        .pomdep()
        .args(["add", "-f", "module/pom.xml", "-a", "g:a:1.0"])
        .assert()
        .success();

    let written = fs::read_to_string(pom).unwrap();
    let dependencies_at = written.find("<dependencies>").unwrap();
    assert!(dependencies_at < written.find("<build>").unwrap());
    assert!(written.contains("<!-- keep in sync with CI -->"));
    assert!(written.contains("-Xmx512m &amp; more"));
}

#[test]
fn test_broken_pom_fails() {
    let project = TestProject::new().unwrap();
    project.write_pom(PomFixture::BROKEN).unwrap();

    project
        .pomdep()
        .args(["add", "-a", "g:a:1.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid pom file pom.xml"));

    assert_eq!(project.read_pom(), PomFixture::BROKEN);
}

#[test]
fn test_invalid_property_fails() {
    let project = TestProject::new().unwrap();
    project.write_pom(PomFixture::MINIMAL).unwrap();

    project
        .pomdep()
        .args(["add", "-a", "g:a:1.0", "-Dmdep.skip=sometimes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid property 'mdep.skip=sometimes'"));
}
