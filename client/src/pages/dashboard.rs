//! Role dashboard: KPI stat cards plus recent activity.
//!
//! SYSTEM CONTEXT
//! ==============
//! One component serves every role's dashboard route; the fetched summary
//! is already scoped server-side by the caller's bearer token and role.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::layout::Shell;
use crate::components::stat_card::StatCard;
use crate::net::types::{ActivityLog, DashboardSummary};
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Format a money amount with thousands separators and two decimals.
pub(crate) fn format_amount(value: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let cents = (value.abs() * 100.0).round() as i64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac:02}")
}

/// The most recent `limit` entries, newest first by timestamp string.
pub(crate) fn recent_activity(mut entries: Vec<ActivityLog>, limit: usize) -> Vec<ActivityLog> {
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    entries.truncate(limit);
    entries
}

const ACTIVITY_LIMIT: usize = 10;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let summary = RwSignal::new(None::<DashboardSummary>);
    let activity = RwSignal::new(Vec::<ActivityLog>::new());
    let error = RwSignal::new(None::<String>);

    let fetched = RwSignal::new(false);
    Effect::new(move || {
        let Some(user) = auth.get().user else {
            return;
        };
        if fetched.get() {
            return;
        }
        fetched.set(true);
        let role = user.role;
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_summary(role).await {
                Ok(data) => summary.set(Some(data)),
                Err(e) => error.set(Some(e)),
            }
            match crate::net::api::fetch_activity().await {
                Ok(entries) => activity.set(recent_activity(entries, ACTIVITY_LIMIT)),
                Err(e) => error.set(Some(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = role;
    });

    view! {
        <Shell>
            <div class="dashboard">
                <h1 class="dashboard__title">"Dashboard"</h1>

                <Show when=move || error.get().is_some()>
                    <p class="dashboard__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <Show
                    when=move || summary.get().is_some()
                    fallback=move || view! { <p>"Loading summary..."</p> }
                >
                    {move || {
                        summary
                            .get()
                            .map(|data| {
                                view! {
                                    <div class="dashboard__cards">
                                        <StatCard
                                            label="Total Leads".to_owned()
                                            value=data.total_leads.to_string()
                                        />
                                        <StatCard
                                            label="Staff".to_owned()
                                            value=data.staff_count.to_string()
                                        />
                                        <StatCard
                                            label="Month Earnings".to_owned()
                                            value=format_amount(data.month_earnings)
                                            hint="computed by the backend".to_owned()
                                        />
                                    </div>
                                    <div class="dashboard__statuses">
                                        {data
                                            .status_counts
                                            .into_iter()
                                            .map(|entry| {
                                                view! {
                                                    <span class="status-chip">
                                                        {entry.status}
                                                        ": "
                                                        {entry.count}
                                                    </span>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                            })
                    }}
                </Show>

                <h2 class="dashboard__subtitle">"Recent Activity"</h2>
                <ul class="activity-list">
                    {move || {
                        activity
                            .get()
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <li class="activity-list__item">
                                        <span class="activity-list__actor">{entry.actor}</span>
                                        {" "}
                                        {entry.action}
                                        <span class="activity-list__ts">{entry.timestamp}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </div>
        </Shell>
    }
}
