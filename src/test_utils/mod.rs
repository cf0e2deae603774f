//! Test utilities for pomdep
//!
//! Shared by the unit tests and, through the `test-utils` feature, by the
//! integration suite:
//! - one-time tracing initialisation that plays well with the test harness
//! - sample `pom.xml` documents
//!
//! # Example
//!
//! ```rust,no_run
//! use pomdep::test_utils::{PomFixture, init_test_logging};
//!
//! init_test_logging(None);
//! let dir = std::env::temp_dir();
//! let pom = PomFixture::write_to(&dir, PomFixture::MINIMAL).unwrap();
//! assert!(pom.ends_with("pom.xml"));
//! ```

use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG`; with neither, tests run
/// without a subscriber. Later calls are no-ops.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// Sample project descriptors.
pub struct PomFixture;

impl PomFixture {
    /// Smallest valid descriptor, no dependencies section
    pub const MINIMAL: &'static str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>com.example</groupId>
  <artifactId>demo</artifactId>
  <version>1.0-SNAPSHOT</version>
</project>
"#;

    /// Descriptor with one existing dependency
    pub const WITH_DEPENDENCIES: &'static str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>com.example</groupId>
  <artifactId>demo</artifactId>
  <version>1.0-SNAPSHOT</version>
  <dependencies>
    <dependency>
      <groupId>org.slf4j</groupId>
      <artifactId>slf4j-api</artifactId>
      <version>2.0.13</version>
    </dependency>
  </dependencies>
</project>
"#;

    /// Descriptor with properties, a build section and comments
    pub const WITH_BUILD: &'static str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- Licensed under the Apache License, Version 2.0 -->
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd">
  <modelVersion>4.0.0</modelVersion>
  <groupId>com.example</groupId>
  <artifactId>demo</artifactId>
  <version>1.0-SNAPSHOT</version>
  <properties>
    <!-- keep in sync with CI -->
    <maven.compiler.release>17</maven.compiler.release>
  </properties>
  <build>
    <plugins>
      <plugin>
        <groupId>org.apache.maven.plugins</groupId>
        <artifactId>maven-surefire-plugin</artifactId>
        <configuration>
          <argLine>-Xmx512m &amp; more</argLine>
        </configuration>
      </plugin>
    </plugins>
  </build>
</project>
"#;

    /// Not well-formed
    pub const BROKEN: &'static str = "<project><dependencies></project>";

    /// Write `content` as `pom.xml` into `dir`.
    ///
    /// # Errors
    ///
    /// Any I/O error from writing the file.
    pub fn write_to(dir: &Path, content: &str) -> std::io::Result<PathBuf> {
        let path = dir.join("pom.xml");
        std::fs::write(&path, content)?;
        Ok(path)
    }
}
