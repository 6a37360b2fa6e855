use super::*;

fn campaign(id: i64, title: &str) -> MarketingCampaign {
    MarketingCampaign {
        id,
        title: title.into(),
        source: "facebook".into(),
        message: "Hello".into(),
        media_url: None,
    }
}

#[test]
fn campaign_state_default_is_closed_and_empty() {
    let state = CampaignState::default();
    assert!(!state.open);
    assert!(state.items.is_empty());
    assert!(state.selected.is_none());
    assert!(!state.saving);
}

#[test]
fn selected_campaign_resolves_by_id() {
    let state = CampaignState {
        items: vec![campaign(1, "June push"), campaign(2, "Referrals")],
        selected: Some(2),
        ..Default::default()
    };
    assert_eq!(state.selected_campaign().map(|c| c.title.as_str()), Some("Referrals"));
}

#[test]
fn selected_campaign_is_none_for_stale_selection() {
    let state = CampaignState {
        items: vec![campaign(1, "June push")],
        selected: Some(9),
        ..Default::default()
    };
    assert!(state.selected_campaign().is_none());
}
