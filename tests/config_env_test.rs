//! DOCKWRAP_* environment overrides.
//!
//! Kept in its own test binary with a single test: the variables are
//! process-global.

use std::fs;

use tempfile::TempDir;

use dockwrap::config::{OutputFormat, Settings};

#[test]
fn given_env_vars_when_load_then_override_config_file() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("dockwrap.toml");
    fs::write(&path, "output = \"json\"\nshell = \"sh\"\n").unwrap();

    std::env::set_var("DOCKWRAP_OUTPUT", "text");
    std::env::set_var("DOCKWRAP_SHELL", "bash");
    std::env::set_var("DOCKWRAP_CATALOG__EXTRA_FILE", "/tmp/releases.json");

    // Act
    let settings = Settings::load(Some(&path)).unwrap();

    std::env::remove_var("DOCKWRAP_OUTPUT");
    std::env::remove_var("DOCKWRAP_SHELL");
    std::env::remove_var("DOCKWRAP_CATALOG__EXTRA_FILE");

    // Assert
    assert_eq!(settings.output, OutputFormat::Text);
    assert_eq!(settings.shell, "bash");
    assert_eq!(
        settings.catalog.extra_file.as_deref(),
        Some(std::path::Path::new("/tmp/releases.json"))
    );
}
