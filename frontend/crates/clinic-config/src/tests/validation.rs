use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests
// =========================================================================

fn validate_with(key: &'static str, value: &str) -> crate::ConfigErrorResult<()> {
    let (_temp, _guard) = setup_config_dir();
    let _override = EnvGuard::set(key, value);
    let config = Config::load().unwrap();
    config.validate()
}

#[test]
#[serial]
fn given_non_http_base_url_when_validate_then_error() {
    assert_that!(
        validate_with("CLINIC_API_BASE_URL", "ftp://clinic.test"),
        err(anything())
    );
}

#[test]
#[serial]
fn given_https_base_url_when_validate_then_ok() {
    assert_that!(
        validate_with("CLINIC_API_BASE_URL", "https://clinic.test/api"),
        ok(anything())
    );
}

#[test]
#[serial]
fn given_blank_credential_key_when_validate_then_error() {
    assert_that!(validate_with("CLINIC_CREDENTIAL_KEY", "  "), err(anything()));
}

#[test]
#[serial]
fn given_storage_file_escaping_config_dir_when_validate_then_error() {
    assert_that!(
        validate_with("CLINIC_STORAGE_FILE", "../storage.json"),
        err(anything())
    );
}

#[test]
#[serial]
fn given_route_without_leading_slash_when_validate_then_error() {
    assert_that!(
        validate_with("CLINIC_DASHBOARD_ROUTE", "dashboard"),
        err(anything())
    );
}

#[test]
#[serial]
fn given_entry_equal_to_dashboard_when_validate_then_error() {
    assert_that!(
        validate_with("CLINIC_ENTRY_ROUTE", "/dashboard"),
        err(anything())
    );
}

#[test]
#[serial]
fn given_zero_min_query_length_when_validate_then_error() {
    assert_that!(
        validate_with("CLINIC_SEARCH_MIN_QUERY_LENGTH", "0"),
        err(anything())
    );
}

#[test]
#[serial]
fn given_min_query_length_over_max_when_validate_then_error() {
    assert_that!(
        validate_with("CLINIC_SEARCH_MIN_QUERY_LENGTH", "33"),
        err(anything())
    );
}

#[test]
#[serial]
fn given_zero_debounce_when_validate_then_ok() {
    assert_that!(
        validate_with("CLINIC_SEARCH_DEBOUNCE_MS", "0"),
        ok(anything())
    );
}

#[test]
#[serial]
fn given_debounce_over_max_when_validate_then_error() {
    assert_that!(
        validate_with("CLINIC_SEARCH_DEBOUNCE_MS", "5001"),
        err(anything())
    );
}
