//! Shared role model and route-access policy.
//!
//! This crate owns the per-request authorization decision used by both the
//! server middleware and the browser UI: which roles exist, which URL
//! prefixes each role may reach, and where to send a request that is not
//! servable. The decision is pure and stateless so it can be evaluated
//! identically on either side of the SSR boundary.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use serde::{Deserialize, Serialize};

/// Path of the login page, also the target of every denial redirect.
pub const LOGIN_PATH: &str = "/login";

/// Cookie carrying the backend-issued bearer token.
pub const TOKEN_COOKIE: &str = "lb_token";
/// Cookie carrying the canonical role string.
pub const ROLE_COOKIE: &str = "lb_role";
/// Cookie carrying the display name for the header chrome.
pub const NAME_COOKIE: &str = "lb_name";

/// A user's role as carried in the role cookie and session responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    SuperAdmin,
    Admin,
    TeamLeader,
    Staff,
}

impl Role {
    /// All roles, in privilege order.
    pub const ALL: [Self; 4] = [Self::SuperAdmin, Self::Admin, Self::TeamLeader, Self::Staff];

    /// Canonical cookie value for this role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "superadmin",
            Self::Admin => "admin",
            Self::TeamLeader => "teamleader",
            Self::Staff => "staff",
        }
    }

    /// Human-readable label for headers and sidebars.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super Admin",
            Self::Admin => "Admin",
            Self::TeamLeader => "Team Leader",
            Self::Staff => "Staff",
        }
    }

    /// Parse a role cookie value. Unknown strings do not parse.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "superadmin" => Some(Self::SuperAdmin),
            "admin" => Some(Self::Admin),
            "teamleader" => Some(Self::TeamLeader),
            "staff" => Some(Self::Staff),
            _ => None,
        }
    }

    /// URL prefixes this role is authorized for. A pathname is servable for
    /// the role iff it starts with one of these. SuperAdmin also covers the
    /// Admin area.
    #[must_use]
    pub fn allowed_prefixes(self) -> &'static [&'static str] {
        match self {
            Self::SuperAdmin => &["/superadmin", "/admin"],
            Self::Admin => &["/admin"],
            Self::TeamLeader => &["/teamleader"],
            Self::Staff => &["/staff"],
        }
    }

    /// The role's default dashboard, used when redirecting an authenticated
    /// user away from a public page.
    #[must_use]
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::SuperAdmin => "/superadmin/dashboard",
            Self::Admin => "/admin/dashboard",
            Self::TeamLeader => "/teamleader/dashboard",
            Self::Staff => "/staff/dashboard",
        }
    }
}

/// Why a request was denied; rendered into the login redirect query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DenyReason {
    /// No auth token cookie was present.
    Unauthenticated,
    /// A token was present but the role does not cover the path.
    Unauthorized,
}

impl DenyReason {
    /// Query-string marker shown on the login page.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Unauthorized => "unauthorized",
        }
    }
}

/// Outcome of evaluating one request against the policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Serve the request as-is.
    Allow,
    /// Authenticated user on a public page: send them home.
    ToDashboard(Role),
    /// Denied: send to the login page with an error marker.
    ToLogin(DenyReason),
}

impl RouteDecision {
    /// Redirect Location for non-`Allow` decisions.
    #[must_use]
    pub fn redirect_target(&self) -> Option<String> {
        match self {
            Self::Allow => None,
            Self::ToDashboard(role) => Some(role.dashboard_path().to_owned()),
            Self::ToLogin(reason) => Some(format!("{LOGIN_PATH}?error={}", reason.marker())),
        }
    }
}

/// Static assets and API routes bypass the guard entirely and are never
/// intercepted regardless of auth state.
#[must_use]
pub fn is_asset_or_api(path: &str) -> bool {
    path == "/api"
        || path.starts_with("/api/")
        || path.starts_with("/pkg/")
        || path.starts_with("/assets/")
        || path == "/favicon.ico"
        || path == "/healthz"
        || path == "/readyz"
}

/// Public pages: reachable without a session, but an authenticated user is
/// redirected from them to their dashboard.
#[must_use]
pub fn is_public_page(path: &str) -> bool {
    matches!(path, "/" | "/login" | "/register")
}

/// A role is authorized for a pathname iff the pathname starts with one of
/// the role's allowed prefixes.
#[must_use]
pub fn authorize(role: Role, path: &str) -> bool {
    role.allowed_prefixes().iter().any(|prefix| path.starts_with(prefix))
}

/// Evaluate one request: pathname plus the optional token and role cookie
/// values. Pure and stateless; the caller turns the decision into a
/// forwarded request or a redirect response.
///
/// A token whose value is empty or whitespace counts as absent. A token
/// with an unknown role is never authorized, but is allowed through on
/// public pages so a stale role cookie cannot loop the login redirect.
#[must_use]
pub fn decide(path: &str, token: Option<&str>, role: Option<&str>) -> RouteDecision {
    if is_asset_or_api(path) {
        return RouteDecision::Allow;
    }

    let authenticated = token.is_some_and(|t| !t.trim().is_empty());
    if !authenticated {
        if is_public_page(path) {
            return RouteDecision::Allow;
        }
        return RouteDecision::ToLogin(DenyReason::Unauthenticated);
    }

    let role = role.and_then(Role::parse);
    if is_public_page(path) {
        return match role {
            Some(role) => RouteDecision::ToDashboard(role),
            None => RouteDecision::Allow,
        };
    }

    match role {
        Some(role) if authorize(role, path) => RouteDecision::Allow,
        _ => RouteDecision::ToLogin(DenyReason::Unauthorized),
    }
}
