use crate::tests::EnvGuard;
use crate::{CliError, load_config};

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};
use serial_test::serial;
use tempfile::TempDir;

#[test]
#[serial]
fn given_empty_config_dir_when_loaded_then_defaults() {
    // Given
    let temp = TempDir::new().unwrap();
    let _guard = EnvGuard::set("PV_CONFIG_DIR", temp.path().to_str().unwrap());

    // When
    let result = load_config();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.field_limits().max_fields, eq(4));
}

#[test]
#[serial]
fn given_out_of_range_config_when_loaded_then_config_error() {
    // Given
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "[fields]\nmax_fields = 0\n").unwrap();
    let _guard = EnvGuard::set("PV_CONFIG_DIR", temp.path().to_str().unwrap());

    // When
    let result = load_config();

    // Then
    assert!(matches!(result, Err(CliError::Config(_))));
}

#[test]
#[serial]
fn given_malformed_config_when_loaded_then_config_error() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "not toml {{").unwrap();
    let _guard = EnvGuard::set("PV_CONFIG_DIR", temp.path().to_str().unwrap());

    let result = load_config();

    assert!(matches!(result, Err(CliError::Config(_))));
}
