//! Session endpoints — login/register proxies and cookie lifecycle.
//!
//! ARCHITECTURE
//! ============
//! The browser cannot call the backend's sign-in endpoint and set host
//! cookies itself, so login and registration are proxied here. The token
//! and role cookies are deliberately not HttpOnly: the browser reads the
//! token back and attaches it as a bearer header on direct backend calls.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;

use access::{NAME_COOKIE, ROLE_COOKIE, Role, TOKEN_COOKIE};

use crate::backend::{BackendError, RegisterRequest};
use crate::state::AppState;

const SESSION_TTL_DAYS: i64 = 7;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Identity payload returned by login and `me`.
#[derive(Debug, Clone, Serialize)]
pub struct SessionUser {
    pub name: String,
    pub role: Role,
}

fn session_cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::days(SESSION_TTL_DAYS))
        .build()
}

fn expired_cookie(name: &'static str, secure: bool) -> Cookie<'static> {
    Cookie::build((name, ""))
        .path("/")
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

/// `POST /api/session` — forward credentials to the backend, set cookies.
pub async fn login(State(state): State<AppState>, Json(form): Json<LoginForm>) -> Response {
    let signin = match state.backend.sign_in(&form.email, &form.password).await {
        Ok(signin) => signin,
        Err(BackendError::Status(code)) if (400..500).contains(&code) => {
            return (StatusCode::UNAUTHORIZED, "invalid credentials").into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "backend sign-in failed");
            return (StatusCode::BAD_GATEWAY, "backend unavailable").into_response();
        }
    };

    let Some(role) = Role::parse(&signin.role) else {
        tracing::error!(role = %signin.role, "backend returned unknown role");
        return (StatusCode::BAD_GATEWAY, "unknown role").into_response();
    };

    let secure = state.config.cookie_secure;
    let jar = CookieJar::new()
        .add(session_cookie(TOKEN_COOKIE, signin.token, secure))
        .add(session_cookie(ROLE_COOKIE, role.as_str().to_owned(), secure))
        .add(session_cookie(NAME_COOKIE, signin.name.clone(), secure));

    (jar, Json(SessionUser { name: signin.name, role })).into_response()
}

/// `POST /api/session/register` — forward a registration to the backend.
/// No cookies are set; accounts await approval server-side.
pub async fn register(State(state): State<AppState>, Json(form): Json<RegisterRequest>) -> Response {
    match state.backend.register(&form).await {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(BackendError::Status(code)) if (400..500).contains(&code) => {
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST);
            (status, "registration rejected").into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "backend registration failed");
            (StatusCode::BAD_GATEWAY, "backend unavailable").into_response()
        }
    }
}

/// `GET /api/session/me` — identity from cookies, or 401.
pub async fn me(jar: CookieJar) -> Result<Json<SessionUser>, StatusCode> {
    let token = jar.get(TOKEN_COOKIE).map(Cookie::value).unwrap_or_default();
    if token.trim().is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let role = jar
        .get(ROLE_COOKIE)
        .map(Cookie::value)
        .and_then(Role::parse)
        .ok_or(StatusCode::UNAUTHORIZED)?;
    let name = jar.get(NAME_COOKIE).map(Cookie::value).unwrap_or_default().to_owned();

    Ok(Json(SessionUser { name, role }))
}

/// `POST /api/session/logout` — expire the session cookies.
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    let secure = state.config.cookie_secure;
    let jar = CookieJar::new()
        .add(expired_cookie(TOKEN_COOKIE, secure))
        .add(expired_cookie(ROLE_COOKIE, secure))
        .add(expired_cookie(NAME_COOKIE, secure));

    (jar, StatusCode::NO_CONTENT)
}
