use super::*;

fn lead(id: i64, status: &str) -> Lead {
    Lead {
        id,
        name: format!("Lead {id}"),
        phone: "5550100".into(),
        status: status.into(),
        assigned_to: None,
        created_at: None,
    }
}

#[test]
fn leads_state_default_is_empty() {
    let state = LeadsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert!(state.status_filter.is_none());
}

#[test]
fn filter_none_keeps_every_row() {
    let items = vec![lead(1, "New"), lead(2, "Lost")];
    assert_eq!(filter_by_status(&items, None).len(), 2);
}

#[test]
fn filter_keeps_only_matching_status() {
    let items = vec![lead(1, "New"), lead(2, "Lost"), lead(3, "New")];
    let visible = filter_by_status(&items, Some("New"));
    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(|l| l.status == "New"));
}

#[test]
fn filter_with_unknown_status_is_empty() {
    let items = vec![lead(1, "New")];
    assert!(filter_by_status(&items, Some("Archived")).is_empty());
}
