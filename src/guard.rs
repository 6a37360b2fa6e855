//! Route-access middleware.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request passes through here before routing. The guard reads the
//! token and role cookies, evaluates the pure policy in the `access` crate,
//! and either forwards the request or answers with a temporary redirect.
//! Asset and API bypass is part of the policy itself, so the layer can sit
//! over the whole router.

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;

use axum::extract::Request;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

pub use access::{ROLE_COOKIE, TOKEN_COOKIE};

/// Redirect Location for a request, or `None` when it is servable.
fn redirect_target(headers: &HeaderMap, path: &str) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    let token = jar.get(TOKEN_COOKIE).map(Cookie::value);
    let role = jar.get(ROLE_COOKIE).map(Cookie::value);
    access::decide(path, token, role).redirect_target()
}

/// Axum middleware applying the route-access policy.
pub async fn route_guard(request: Request, next: Next) -> Response {
    match redirect_target(request.headers(), request.uri().path()) {
        None => next.run(request).await,
        Some(target) => Redirect::temporary(&target).into_response(),
    }
}
