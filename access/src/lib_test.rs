use super::*;

// =============================================================================
// Role parsing and canonical values
// =============================================================================

#[test]
fn role_parse_accepts_canonical_values() {
    assert_eq!(Role::parse("superadmin"), Some(Role::SuperAdmin));
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
    assert_eq!(Role::parse("teamleader"), Some(Role::TeamLeader));
    assert_eq!(Role::parse("staff"), Some(Role::Staff));
}

#[test]
fn role_parse_trims_and_ignores_case() {
    assert_eq!(Role::parse("  Admin  "), Some(Role::Admin));
    assert_eq!(Role::parse("TEAMLEADER"), Some(Role::TeamLeader));
}

#[test]
fn role_parse_rejects_unknown_strings() {
    assert_eq!(Role::parse(""), None);
    assert_eq!(Role::parse("manager"), None);
    assert_eq!(Role::parse("team leader"), None);
}

#[test]
fn role_round_trips_through_as_str() {
    for role in Role::ALL {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

#[test]
fn role_serde_uses_cookie_values() {
    for role in Role::ALL {
        let json = serde_json::to_string(&role).expect("serialize");
        assert_eq!(json, format!("\"{}\"", role.as_str()));
        let back: Role = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, role);
    }
}

// =============================================================================
// Prefix authorization: authorized iff the path starts with a role prefix
// =============================================================================

#[test]
fn authorize_matches_prefixes_exactly() {
    for role in Role::ALL {
        for prefix in role.allowed_prefixes() {
            assert!(authorize(role, prefix), "{role:?} should reach {prefix}");
            let nested = format!("{prefix}/leads/42");
            assert!(authorize(role, &nested), "{role:?} should reach {nested}");
        }
    }
}

#[test]
fn authorize_rejects_foreign_prefixes() {
    assert!(!authorize(Role::Staff, "/admin/dashboard"));
    assert!(!authorize(Role::Staff, "/teamleader/leads"));
    assert!(!authorize(Role::Admin, "/superadmin/dashboard"));
    assert!(!authorize(Role::TeamLeader, "/staff/timesheet"));
}

#[test]
fn superadmin_also_covers_admin_area() {
    assert!(authorize(Role::SuperAdmin, "/admin/leads"));
    assert!(authorize(Role::SuperAdmin, "/superadmin/dashboard"));
    assert!(!authorize(Role::Admin, "/superadmin/admins"));
}

#[test]
fn dashboard_path_is_within_allowed_prefixes() {
    for role in Role::ALL {
        assert!(
            authorize(role, role.dashboard_path()),
            "{role:?} must be able to reach its own dashboard"
        );
    }
}

// =============================================================================
// Bypass and public-page classification
// =============================================================================

#[test]
fn api_and_asset_paths_bypass() {
    assert!(is_asset_or_api("/api/session"));
    assert!(is_asset_or_api("/api"));
    assert!(is_asset_or_api("/pkg/leadboard.wasm"));
    assert!(is_asset_or_api("/assets/logo.svg"));
    assert!(is_asset_or_api("/favicon.ico"));
    assert!(is_asset_or_api("/healthz"));
}

#[test]
fn app_paths_are_not_bypassed() {
    assert!(!is_asset_or_api("/"));
    assert!(!is_asset_or_api("/login"));
    assert!(!is_asset_or_api("/admin/dashboard"));
    assert!(!is_asset_or_api("/apiary"));
}

#[test]
fn public_pages_are_root_login_register() {
    assert!(is_public_page("/"));
    assert!(is_public_page("/login"));
    assert!(is_public_page("/register"));
    assert!(!is_public_page("/admin/dashboard"));
    assert!(!is_public_page("/login/reset"));
}

// =============================================================================
// decide: unauthenticated requests
// =============================================================================

#[test]
fn unauthenticated_public_pages_are_allowed() {
    assert_eq!(decide("/login", None, None), RouteDecision::Allow);
    assert_eq!(decide("/register", None, None), RouteDecision::Allow);
    assert_eq!(decide("/", None, None), RouteDecision::Allow);
}

#[test]
fn unauthenticated_protected_path_redirects_to_login_marker() {
    let decision = decide("/admin/dashboard", None, None);
    assert_eq!(decision, RouteDecision::ToLogin(DenyReason::Unauthenticated));
    assert_eq!(
        decision.redirect_target().as_deref(),
        Some("/login?error=unauthenticated")
    );
}

#[test]
fn unauthenticated_redirect_covers_every_role_area() {
    for role in Role::ALL {
        let decision = decide(role.dashboard_path(), None, None);
        assert_eq!(decision, RouteDecision::ToLogin(DenyReason::Unauthenticated));
    }
}

#[test]
fn blank_token_counts_as_unauthenticated() {
    assert_eq!(
        decide("/staff/leads", Some("   "), Some("staff")),
        RouteDecision::ToLogin(DenyReason::Unauthenticated)
    );
    assert_eq!(
        decide("/staff/leads", Some(""), Some("staff")),
        RouteDecision::ToLogin(DenyReason::Unauthenticated)
    );
}

// =============================================================================
// decide: authenticated requests
// =============================================================================

#[test]
fn authenticated_login_redirects_to_exact_role_dashboard() {
    for role in Role::ALL {
        let decision = decide("/login", Some("tok"), Some(role.as_str()));
        assert_eq!(decision, RouteDecision::ToDashboard(role));
        assert_eq!(
            decision.redirect_target().as_deref(),
            Some(role.dashboard_path())
        );
    }
}

#[test]
fn authenticated_root_and_register_redirect_home() {
    assert_eq!(
        decide("/", Some("tok"), Some("admin")),
        RouteDecision::ToDashboard(Role::Admin)
    );
    assert_eq!(
        decide("/register", Some("tok"), Some("staff")),
        RouteDecision::ToDashboard(Role::Staff)
    );
}

#[test]
fn authenticated_allowed_paths_are_served() {
    assert_eq!(
        decide("/admin/leads", Some("tok"), Some("admin")),
        RouteDecision::Allow
    );
    assert_eq!(
        decide("/staff/timesheet", Some("tok"), Some("staff")),
        RouteDecision::Allow
    );
    assert_eq!(
        decide("/admin/calendar/7", Some("tok"), Some("superadmin")),
        RouteDecision::Allow
    );
}

#[test]
fn authenticated_foreign_path_redirects_unauthorized() {
    let decision = decide("/superadmin/admins", Some("tok"), Some("staff"));
    assert_eq!(decision, RouteDecision::ToLogin(DenyReason::Unauthorized));
    assert_eq!(
        decision.redirect_target().as_deref(),
        Some("/login?error=unauthorized")
    );
}

#[test]
fn unknown_role_is_never_authorized() {
    assert_eq!(
        decide("/admin/dashboard", Some("tok"), Some("wizard")),
        RouteDecision::ToLogin(DenyReason::Unauthorized)
    );
    assert_eq!(
        decide("/admin/dashboard", Some("tok"), None),
        RouteDecision::ToLogin(DenyReason::Unauthorized)
    );
}

#[test]
fn unknown_role_on_public_page_does_not_loop() {
    // A stale role cookie must not bounce the login page back to itself.
    assert_eq!(decide("/login", Some("tok"), Some("wizard")), RouteDecision::Allow);
    assert_eq!(decide("/login", Some("tok"), None), RouteDecision::Allow);
}

// =============================================================================
// decide: bypass paths are never intercepted regardless of auth state
// =============================================================================

#[test]
fn bypass_paths_ignore_auth_state() {
    let paths = ["/api/session", "/pkg/app.js", "/assets/app.css", "/favicon.ico"];
    for path in paths {
        assert_eq!(decide(path, None, None), RouteDecision::Allow, "{path} anon");
        assert_eq!(
            decide(path, Some("tok"), Some("staff")),
            RouteDecision::Allow,
            "{path} staff"
        );
        assert_eq!(
            decide(path, Some("tok"), Some("wizard")),
            RouteDecision::Allow,
            "{path} unknown role"
        );
    }
}

// =============================================================================
// Exhaustive property: authorized iff prefix match
// =============================================================================

#[test]
fn decide_agrees_with_authorize_on_protected_paths() {
    let paths = [
        "/superadmin/dashboard",
        "/superadmin/admins",
        "/admin/dashboard",
        "/admin/leads",
        "/admin/calendar/3",
        "/teamleader/dashboard",
        "/teamleader/leads",
        "/staff/dashboard",
        "/staff/timesheet",
    ];
    for role in Role::ALL {
        for path in paths {
            let expected = if authorize(role, path) {
                RouteDecision::Allow
            } else {
                RouteDecision::ToLogin(DenyReason::Unauthorized)
            };
            assert_eq!(
                decide(path, Some("tok"), Some(role.as_str())),
                expected,
                "{role:?} on {path}"
            );
        }
    }
}
