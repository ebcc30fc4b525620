use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir, write_config};

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.verification.accepted_schemes.len(), eq(2));
    assert_that!(config.verification.invisible_class.as_str(), eq("invisible"));
    assert_that!(config.verification.max_link_length, eq(2047));
    assert_that!(config.fields.max_fields, eq(4));
    assert_that!(*config.logging.level, eq(LevelFilter::Warn));
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_ok_and_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(
        &temp,
        r#"
            [verification]
            accepted_schemes = ["https"]
            invisible_class = "sr-only"

            [fields]
            max_fields = 8

            [logging]
            level = "debug"
            colored = false
        "#,
    );

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.verification.accepted_schemes.len(), eq(1));
    assert_that!(config.verification.accepted_schemes[0].as_str(), eq("https"));
    assert_that!(config.verification.invisible_class.as_str(), eq("sr-only"));
    assert_that!(config.verification.max_link_length, eq(2047));
    assert_that!(config.fields.max_fields, eq(8));
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
    assert_that!(config.logging.colored, eq(false));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[fields]\nmax_fields = 8");
    let _max = EnvGuard::set("PV_MAX_FIELDS", "6");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.fields.max_fields, eq(6));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let _temp = setup_config_dir();
    let _schemes = EnvGuard::set("PV_ACCEPTED_SCHEMES", " https, gemini ,");
    let _class = EnvGuard::set("PV_INVISIBLE_CLASS", "hidden");
    let _length = EnvGuard::set("PV_MAX_LINK_LENGTH", "512");
    let _level = EnvGuard::set("PV_LOG_LEVEL", "TRACE");
    let _colored = EnvGuard::set("PV_LOG_COLORED", "0");
    let _file = EnvGuard::set("PV_LOG_FILE", "pv.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.verification.accepted_schemes.join("|").as_str(),
        eq("https|gemini")
    );
    assert_that!(config.verification.invisible_class.as_str(), eq("hidden"));
    assert_that!(config.verification.max_link_length, eq(512));
    assert_that!(*config.logging.level, eq(LevelFilter::Trace));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.file.as_deref(), eq(Some("pv.log")));
}

#[test]
#[serial]
fn given_loaded_config_when_converted_then_policy_and_limits_match() {
    // Given
    let _temp = setup_config_dir();
    let _class = EnvGuard::set("PV_INVISIBLE_CLASS", "hidden");
    let _value = EnvGuard::set("PV_MAX_FIELD_VALUE_LENGTH", "500");

    // When
    let config = Config::load().unwrap();
    let policy = config.verification_policy();
    let limits = config.field_limits();

    // Then
    assert_that!(policy.invisible_class.as_str(), eq("hidden"));
    assert_that!(policy.accepts_scheme("https"), eq(true));
    assert_that!(limits.max_value_length, eq(500));
    assert_that!(limits.max_fields, eq(4));
}
