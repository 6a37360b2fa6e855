//! Backend DTOs consumed by the dashboard pages.
//!
//! DESIGN
//! ======
//! Entities are thin, backend-defined shapes mirrored from JSON responses.
//! Nothing here is created or owned by this crate; lifecycle and invariants
//! are the backend's responsibility. Numeric counters tolerate integral
//! floats because the backend serializes some counts that way.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use access::Role;

/// Statuses offered by the status-change dialog. `Lead::status` itself is
/// an opaque backend string; this list only drives the picker.
pub const STATUS_OPTIONS: [&str; 6] = ["New", "Contacted", "Interested", "Follow-up", "Won", "Lost"];

/// Identity payload returned by the host session API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Display name.
    pub name: String,
    /// Role driving navigation and API scope.
    pub role: Role,
}

/// A sales prospect tracked through the backend's status pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    /// Backend identifier.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Prospect name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Current pipeline status (e.g. `"New"`, `"Interested"`, `"Lost"`).
    pub status: String,
    /// Display name of the assigned staff member, if any.
    #[serde(default)]
    pub assigned_to: Option<String>,
    /// ISO 8601 creation date, if provided.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A staff/admin/team-leader account as listed by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub name: String,
    /// Backend role string; not every listed account maps to a UI role.
    pub role: String,
}

/// One audit-trail entry from the backend's activity log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub actor: String,
    pub action: String,
    /// ISO 8601 timestamp.
    pub timestamp: String,
}

/// One day of the productivity calendar: lead count plus computed earnings.
/// The earnings figure is computed server-side (salary slabs are not
/// re-implemented here).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductivityDay {
    /// ISO 8601 date (`YYYY-MM-DD`).
    pub date: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub lead_count: i64,
    pub earnings: f64,
}

/// One timesheet row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimesheetEntry {
    /// ISO 8601 date (`YYYY-MM-DD`).
    pub date: String,
    /// Check-in time (`HH:MM`), if recorded.
    #[serde(default)]
    pub check_in: Option<String>,
    /// Check-out time (`HH:MM`), if recorded.
    #[serde(default)]
    pub check_out: Option<String>,
    /// Hours credited for the day, computed server-side.
    pub hours: f64,
}

/// A marketing campaign as edited in the shared dialog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketingCampaign {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub title: String,
    /// Lead source the campaign feeds (e.g. `"facebook"`).
    pub source: String,
    /// Outreach message template.
    pub message: String,
    /// Attached media URL, if any.
    #[serde(default)]
    pub media_url: Option<String>,
}

/// Per-status lead count for the KPI widgets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub count: i64,
}

/// Aggregated dashboard figures, computed by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub total_leads: i64,
    #[serde(default)]
    pub status_counts: Vec<StatusCount>,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub staff_count: i64,
    /// Month-to-date earnings for the viewer's scope.
    pub month_earnings: f64,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
