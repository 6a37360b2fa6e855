use super::*;
use axum::http::header::COOKIE;

fn headers_with_cookie(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, value.parse().expect("valid cookie header"));
    headers
}

// =============================================================================
// Cookie extraction feeding the policy
// =============================================================================

#[test]
fn no_cookies_on_protected_path_redirects_unauthenticated() {
    let headers = HeaderMap::new();
    assert_eq!(
        redirect_target(&headers, "/admin/dashboard").as_deref(),
        Some("/login?error=unauthenticated")
    );
}

#[test]
fn valid_cookies_on_owned_path_are_forwarded() {
    let headers = headers_with_cookie("lb_token=abc123; lb_role=admin");
    assert_eq!(redirect_target(&headers, "/admin/leads"), None);
}

#[test]
fn valid_cookies_on_login_redirect_to_role_dashboard() {
    let headers = headers_with_cookie("lb_token=abc123; lb_role=staff");
    assert_eq!(
        redirect_target(&headers, "/login").as_deref(),
        Some("/staff/dashboard")
    );
}

#[test]
fn foreign_area_redirects_unauthorized() {
    let headers = headers_with_cookie("lb_token=abc123; lb_role=staff");
    assert_eq!(
        redirect_target(&headers, "/superadmin/admins").as_deref(),
        Some("/login?error=unauthorized")
    );
}

#[test]
fn token_without_role_cookie_is_unauthorized_on_protected_paths() {
    let headers = headers_with_cookie("lb_token=abc123");
    assert_eq!(
        redirect_target(&headers, "/staff/timesheet").as_deref(),
        Some("/login?error=unauthorized")
    );
}

#[test]
fn role_without_token_cookie_is_unauthenticated() {
    let headers = headers_with_cookie("lb_role=admin");
    assert_eq!(
        redirect_target(&headers, "/admin/dashboard").as_deref(),
        Some("/login?error=unauthenticated")
    );
}

// =============================================================================
// Bypass paths pass through untouched regardless of cookies
// =============================================================================

#[test]
fn api_and_assets_are_never_intercepted() {
    let anon = HeaderMap::new();
    let stale = headers_with_cookie("lb_token=abc123; lb_role=wizard");
    for headers in [&anon, &stale] {
        assert_eq!(redirect_target(headers, "/api/session"), None);
        assert_eq!(redirect_target(headers, "/pkg/leadboard.wasm"), None);
        assert_eq!(redirect_target(headers, "/favicon.ico"), None);
        assert_eq!(redirect_target(headers, "/healthz"), None);
    }
}

// =============================================================================
// Cookie names
// =============================================================================

#[test]
fn unrelated_cookies_do_not_authenticate() {
    let headers = headers_with_cookie("session=abc123; theme=dark");
    assert_eq!(
        redirect_target(&headers, "/admin/dashboard").as_deref(),
        Some("/login?error=unauthenticated")
    );
}
