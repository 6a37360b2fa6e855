//! Lead-list state for the leads page.

#[cfg(test)]
#[path = "leads_test.rs"]
mod leads_test;

use crate::net::types::Lead;

/// State backing the lead table: fetched rows plus view concerns.
#[derive(Clone, Debug, Default)]
pub struct LeadsState {
    pub items: Vec<Lead>,
    pub loading: bool,
    pub error: Option<String>,
    /// Active status filter; `None` shows every status.
    pub status_filter: Option<String>,
}

/// Rows visible under the current filter.
#[must_use]
pub fn filter_by_status(items: &[Lead], filter: Option<&str>) -> Vec<Lead> {
    match filter {
        None => items.to_vec(),
        Some(status) => items.iter().filter(|lead| lead.status == status).cloned().collect(),
    }
}
