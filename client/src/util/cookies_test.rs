use super::*;

// =============================================================
// cookie_value parsing
// =============================================================

#[test]
fn cookie_value_finds_named_cookie() {
    assert_eq!(
        cookie_value("lb_token=abc123; lb_role=admin", "lb_role").as_deref(),
        Some("admin")
    );
    assert_eq!(
        cookie_value("lb_token=abc123; lb_role=admin", "lb_token").as_deref(),
        Some("abc123")
    );
}

#[test]
fn cookie_value_handles_surrounding_whitespace() {
    assert_eq!(
        cookie_value("  lb_token = abc123 ;  lb_role=staff", "lb_token").as_deref(),
        Some("abc123")
    );
}

#[test]
fn cookie_value_missing_name_is_none() {
    assert_eq!(cookie_value("lb_token=abc123", "lb_role"), None);
    assert_eq!(cookie_value("", "lb_token"), None);
}

#[test]
fn cookie_value_does_not_match_name_prefixes() {
    assert_eq!(cookie_value("lb_role_backup=admin", "lb_role"), None);
}

#[test]
fn cookie_value_empty_value_is_some_empty() {
    assert_eq!(cookie_value("lb_token=; lb_role=staff", "lb_token").as_deref(), Some(""));
}

#[test]
fn cookie_value_pairs_without_equals_are_skipped() {
    assert_eq!(cookie_value("garbage; lb_role=staff", "lb_role").as_deref(), Some("staff"));
}

// =============================================================
// Server-side accessors are inert
// =============================================================

#[test]
fn session_token_is_none_without_a_browser() {
    // Unit tests compile without the hydrate feature, so the document
    // accessor must fall back to None rather than panic.
    assert_eq!(session_token(), None);
}
