use super::*;

// =============================================================================
// env_bool — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__LB_TEST_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__LB_TEST_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_invalid_and_unset_return_none() {
    let key = "__LB_TEST_EB_INVALID_712__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
    assert_eq!(env_bool("__LB_TEST_EB_SURELY_UNSET_55__"), None);
}

// =============================================================================
// cookie_secure inference — tested through the https prefix logic, since
// COOKIE_SECURE and PUBLIC_URL are shared globals across parallel tests.
// =============================================================================

#[test]
fn cookie_secure_https_inference_logic() {
    assert!("https://crm.example.com".starts_with("https://"));
    assert!(!"http://localhost:3000".starts_with("https://"));
}

// =============================================================================
// AppConfig defaults
// =============================================================================

#[test]
fn default_port_is_3000() {
    assert_eq!(DEFAULT_PORT, 3000);
}

#[test]
fn config_error_messages_name_the_variable() {
    let err = ConfigError::MissingVar { var: "BACKEND_API_URL".into() };
    assert_eq!(err.to_string(), "missing required environment variable BACKEND_API_URL");
    let err = ConfigError::InvalidPort("zero".into());
    assert_eq!(err.to_string(), "invalid PORT value: zero");
}
