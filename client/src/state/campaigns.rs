//! State for the shared marketing-campaign dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dialog is installed once at the app root and opened from the header
//! on any page, so its state lives in context rather than in a page.

#[cfg(test)]
#[path = "campaigns_test.rs"]
mod campaigns_test;

use crate::net::types::MarketingCampaign;

/// State backing the campaign dialog.
#[derive(Clone, Debug, Default)]
pub struct CampaignState {
    /// Whether the dialog is visible.
    pub open: bool,
    pub items: Vec<MarketingCampaign>,
    pub loading: bool,
    /// Campaign currently being edited, by id.
    pub selected: Option<i64>,
    pub saving: bool,
    pub error: Option<String>,
}

impl CampaignState {
    /// The campaign under edit, if the selection still exists.
    #[must_use]
    pub fn selected_campaign(&self) -> Option<&MarketingCampaign> {
        let id = self.selected?;
        self.items.iter().find(|c| c.id == id)
    }
}
