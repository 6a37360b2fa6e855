//! REST calls to the CRM backend and the host session API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Backend data
//! calls attach the bearer token read from the token cookie; session calls
//! are same-origin against the host. Server-side (SSR): stubs returning
//! `None`/error since these requests are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch
//! failures degrade into UI error state without crashing hydration.
//! Non-2xx responses become status-bearing messages; nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use access::Role;

use super::types::{
    ActivityLog, DashboardSummary, Lead, MarketingCampaign, ProductivityDay, SessionUser,
    StaffMember, TimesheetEntry,
};

/// Compile-time base URL of the CRM backend, the WASM analogue of the
/// host's runtime `BACKEND_API_URL`.
#[cfg(any(test, feature = "hydrate"))]
fn backend_base() -> &'static str {
    option_env!("LEADBOARD_BACKEND_URL").unwrap_or("http://localhost:8000")
}

/// Backend path segment for a role's lead/summary scope. SuperAdmin shares
/// the admin scope.
#[cfg(any(test, feature = "hydrate"))]
fn role_scope(role: Role) -> &'static str {
    match role {
        Role::SuperAdmin | Role::Admin => "admin",
        Role::TeamLeader => "teamleader",
        Role::Staff => "staff",
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn leads_endpoint(role: Role) -> String {
    format!("/accounts/leads/{}/", role_scope(role))
}

#[cfg(any(test, feature = "hydrate"))]
fn lead_status_endpoint() -> String {
    "/accounts/api/leads/update-status/".to_owned()
}

#[cfg(any(test, feature = "hydrate"))]
fn staff_endpoint() -> String {
    "/accounts/api/admin/staff/".to_owned()
}

#[cfg(any(test, feature = "hydrate"))]
fn staff_calendar_endpoint(staff_id: i64, year: i32, month: u32) -> String {
    format!("/accounts/api/admin/staff-calendar/{staff_id}/?year={year}&month={month}")
}

#[cfg(any(test, feature = "hydrate"))]
fn own_calendar_endpoint(year: i32, month: u32) -> String {
    format!("/accounts/api/staff/calendar/?year={year}&month={month}")
}

#[cfg(any(test, feature = "hydrate"))]
fn timesheet_endpoint() -> String {
    "/accounts/api/staff/timesheet/".to_owned()
}

#[cfg(any(test, feature = "hydrate"))]
fn activity_endpoint() -> String {
    "/accounts/api/activity/".to_owned()
}

#[cfg(any(test, feature = "hydrate"))]
fn summary_endpoint(role: Role) -> String {
    format!("/accounts/api/{}/summary/", role_scope(role))
}

#[cfg(any(test, feature = "hydrate"))]
fn campaigns_endpoint() -> String {
    "/accounts/api/marketing/".to_owned()
}

#[cfg(any(test, feature = "hydrate"))]
fn campaign_update_endpoint() -> String {
    "/accounts/api/marketing/update/".to_owned()
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

// =============================================================================
// Bearer-authenticated backend calls
// =============================================================================

#[cfg(feature = "hydrate")]
async fn backend_get<T: serde::de::DeserializeOwned>(what: &str, path: &str) -> Result<T, String> {
    let token = crate::util::cookies::session_token().ok_or_else(|| "not signed in".to_owned())?;
    let url = format!("{}{path}", backend_base());
    let resp = gloo_net::http::Request::get(&url)
        .header("Authorization", &bearer(&token))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(what, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn backend_post(what: &str, path: &str, payload: &serde_json::Value) -> Result<(), String> {
    let token = crate::util::cookies::session_token().ok_or_else(|| "not signed in".to_owned())?;
    let url = format!("{}{path}", backend_base());
    let resp = gloo_net::http::Request::post(&url)
        .header("Authorization", &bearer(&token))
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(what, resp.status()));
    }
    Ok(())
}

/// Fetch the lead list for the caller's role scope.
///
/// # Errors
///
/// Returns an error string on transport failure, non-OK status, or an
/// unexpected body.
pub async fn fetch_leads(role: Role) -> Result<Vec<Lead>, String> {
    #[cfg(feature = "hydrate")]
    {
        backend_get("leads", &leads_endpoint(role)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = role;
        Err("not available on server".to_owned())
    }
}

/// Move a lead to a new pipeline status.
///
/// # Errors
///
/// Returns an error string when the backend rejects the change.
pub async fn update_lead_status(lead_id: i64, status: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "lead_id": lead_id, "status": status });
        backend_post("status update", &lead_status_endpoint(), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (lead_id, status);
        Err("not available on server".to_owned())
    }
}

/// List staff accounts for the admin calendar picker.
///
/// # Errors
///
/// Returns an error string on any request failure.
pub async fn fetch_staff() -> Result<Vec<StaffMember>, String> {
    #[cfg(feature = "hydrate")]
    {
        backend_get("staff", &staff_endpoint()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch a staff member's productivity calendar for one month (admin view).
///
/// # Errors
///
/// Returns an error string on any request failure.
pub async fn fetch_staff_calendar(
    staff_id: i64,
    year: i32,
    month: u32,
) -> Result<Vec<ProductivityDay>, String> {
    #[cfg(feature = "hydrate")]
    {
        backend_get("calendar", &staff_calendar_endpoint(staff_id, year, month)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (staff_id, year, month);
        Err("not available on server".to_owned())
    }
}

/// Fetch the signed-in staff member's own productivity calendar.
///
/// # Errors
///
/// Returns an error string on any request failure.
pub async fn fetch_own_calendar(year: i32, month: u32) -> Result<Vec<ProductivityDay>, String> {
    #[cfg(feature = "hydrate")]
    {
        backend_get("calendar", &own_calendar_endpoint(year, month)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (year, month);
        Err("not available on server".to_owned())
    }
}

/// Fetch the signed-in staff member's timesheet.
///
/// # Errors
///
/// Returns an error string on any request failure.
pub async fn fetch_timesheet() -> Result<Vec<TimesheetEntry>, String> {
    #[cfg(feature = "hydrate")]
    {
        backend_get("timesheet", &timesheet_endpoint()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch recent activity-log entries for the caller's scope.
///
/// # Errors
///
/// Returns an error string on any request failure.
pub async fn fetch_activity() -> Result<Vec<ActivityLog>, String> {
    #[cfg(feature = "hydrate")]
    {
        backend_get("activity", &activity_endpoint()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the KPI summary for the caller's role scope.
///
/// # Errors
///
/// Returns an error string on any request failure.
pub async fn fetch_summary(role: Role) -> Result<DashboardSummary, String> {
    #[cfg(feature = "hydrate")]
    {
        backend_get("summary", &summary_endpoint(role)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = role;
        Err("not available on server".to_owned())
    }
}

/// List marketing campaigns.
///
/// # Errors
///
/// Returns an error string on any request failure.
pub async fn fetch_campaigns() -> Result<Vec<MarketingCampaign>, String> {
    #[cfg(feature = "hydrate")]
    {
        backend_get("campaigns", &campaigns_endpoint()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Save an edited marketing campaign.
///
/// # Errors
///
/// Returns an error string when the backend rejects the update.
pub async fn update_campaign(campaign: &MarketingCampaign) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::to_value(campaign).map_err(|e| e.to_string())?;
        backend_post("campaign update", &campaign_update_endpoint(), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = campaign;
        Err("not available on server".to_owned())
    }
}

// =============================================================================
// Same-origin session calls against the host
// =============================================================================

/// Sign in through the host's session proxy. On success the host sets the
/// token/role cookies and returns the session identity.
///
/// # Errors
///
/// Returns an error string on bad credentials or transport failure.
pub async fn login(email: &str, password: &str) -> Result<SessionUser, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/session")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 401 {
            return Err("Invalid email or password.".to_owned());
        }
        if !resp.ok() {
            return Err(request_failed_message("sign-in", resp.status()));
        }
        resp.json::<SessionUser>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Submit a staff registration through the host proxy.
///
/// # Errors
///
/// Returns an error string when the backend rejects the registration.
pub async fn register(name: &str, email: &str, phone: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "name": name,
            "email": email,
            "phone": phone,
            "password": password,
        });
        let resp = gloo_net::http::Request::post("/api/session/register")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("registration", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, phone, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the current session identity from `/api/session/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_session() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/session/me").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// End the session by calling `POST /api/session/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/session/logout").send().await;
    }
}
