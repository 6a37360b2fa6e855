use super::*;

// =============================================================
// Lead
// =============================================================

#[test]
fn lead_decodes_backend_json() {
    let json = r#"{
        "id": 42,
        "name": "Asha Verma",
        "phone": "9998887776",
        "status": "Interested",
        "assigned_to": "Ravi",
        "created_at": "2025-06-01"
    }"#;
    let lead: Lead = serde_json::from_str(json).expect("decode");
    assert_eq!(lead.id, 42);
    assert_eq!(lead.status, "Interested");
    assert_eq!(lead.assigned_to.as_deref(), Some("Ravi"));
}

#[test]
fn lead_tolerates_missing_optional_fields() {
    let json = r#"{"id": 7, "name": "N", "phone": "1", "status": "New"}"#;
    let lead: Lead = serde_json::from_str(json).expect("decode");
    assert_eq!(lead.assigned_to, None);
    assert_eq!(lead.created_at, None);
}

#[test]
fn lead_id_tolerates_integral_float() {
    let json = r#"{"id": 42.0, "name": "N", "phone": "1", "status": "New"}"#;
    let lead: Lead = serde_json::from_str(json).expect("decode");
    assert_eq!(lead.id, 42);
}

#[test]
fn lead_id_rejects_fractional_float() {
    let json = r#"{"id": 42.5, "name": "N", "phone": "1", "status": "New"}"#;
    assert!(serde_json::from_str::<Lead>(json).is_err());
}

// =============================================================
// ProductivityDay and DashboardSummary
// =============================================================

#[test]
fn productivity_day_decodes_counts_and_earnings() {
    let json = r#"{"date": "2025-06-03", "lead_count": 5.0, "earnings": 412.5}"#;
    let day: ProductivityDay = serde_json::from_str(json).expect("decode");
    assert_eq!(day.lead_count, 5);
    assert!((day.earnings - 412.5).abs() < f64::EPSILON);
}

#[test]
fn dashboard_summary_defaults_empty_status_counts() {
    let json = r#"{"total_leads": 120, "staff_count": 8, "month_earnings": 90000.0}"#;
    let summary: DashboardSummary = serde_json::from_str(json).expect("decode");
    assert!(summary.status_counts.is_empty());
    assert_eq!(summary.total_leads, 120);
}

#[test]
fn dashboard_summary_decodes_status_counts() {
    let json = r#"{
        "total_leads": 3,
        "status_counts": [{"status": "New", "count": 2}, {"status": "Lost", "count": 1}],
        "staff_count": 1,
        "month_earnings": 0.0
    }"#;
    let summary: DashboardSummary = serde_json::from_str(json).expect("decode");
    assert_eq!(summary.status_counts.len(), 2);
    assert_eq!(summary.status_counts[0].status, "New");
    assert_eq!(summary.status_counts[0].count, 2);
}

// =============================================================
// SessionUser round-trips through the access role values
// =============================================================

#[test]
fn session_user_decodes_role_string() {
    let user: SessionUser =
        serde_json::from_str(r#"{"name": "Dana", "role": "teamleader"}"#).expect("decode");
    assert_eq!(user.role, Role::TeamLeader);
}

#[test]
fn session_user_rejects_unknown_role() {
    assert!(serde_json::from_str::<SessionUser>(r#"{"name": "Dana", "role": "wizard"}"#).is_err());
}

// =============================================================
// Campaigns and timesheets
// =============================================================

#[test]
fn campaign_round_trips() {
    let campaign = MarketingCampaign {
        id: 3,
        title: "June push".into(),
        source: "facebook".into(),
        message: "Hello {name}".into(),
        media_url: None,
    };
    let json = serde_json::to_string(&campaign).expect("serialize");
    let back: MarketingCampaign = serde_json::from_str(&json).expect("decode");
    assert_eq!(back, campaign);
}

#[test]
fn timesheet_entry_tolerates_open_day() {
    let json = r#"{"date": "2025-06-03", "check_in": "09:12", "hours": 0.0}"#;
    let entry: TimesheetEntry = serde_json::from_str(json).expect("decode");
    assert_eq!(entry.check_in.as_deref(), Some("09:12"));
    assert_eq!(entry.check_out, None);
}

#[test]
fn status_options_are_distinct() {
    for (i, a) in STATUS_OPTIONS.iter().enumerate() {
        for (j, b) in STATUS_OPTIONS.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
}
