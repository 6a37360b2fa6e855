//! KPI stat card used on the dashboards.

use leptos::prelude::*;

/// One headline figure with a label and an optional hint line.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{value}</span>
            {hint.map(|hint| view! { <span class="stat-card__hint">{hint}</span> })}
        </div>
    }
}
