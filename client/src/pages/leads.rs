//! Lead list with status filter and the status-change workflow.
//!
//! SYSTEM CONTEXT
//! ==============
//! One component serves every role's leads route; the backend scopes the
//! list by the caller's role. Status changes go through a confirmation
//! dialog and refresh the row locally on success.

#[cfg(test)]
#[path = "leads_test.rs"]
mod leads_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::layout::Shell;
use crate::net::types::{Lead, STATUS_OPTIONS};
use crate::state::auth::AuthState;
use crate::state::leads::{LeadsState, filter_by_status};
use crate::util::auth::install_unauth_redirect;

/// Statuses offered when changing a lead: the fixed list minus the current
/// status.
pub(crate) fn next_status_options(current: &str) -> Vec<&'static str> {
    STATUS_OPTIONS.iter().copied().filter(|option| *option != current).collect()
}

#[component]
pub fn LeadsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let leads = RwSignal::new(LeadsState::default());
    // Lead currently in the status-change dialog.
    let editing = RwSignal::new(None::<Lead>);

    let fetched = RwSignal::new(false);
    Effect::new(move || {
        let Some(user) = auth.get().user else {
            return;
        };
        if fetched.get() {
            return;
        }
        fetched.set(true);
        leads.update(|s| s.loading = true);
        let role = user.role;
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_leads(role).await {
                Ok(items) => leads.update(|s| {
                    s.items = items;
                    s.loading = false;
                }),
                Err(e) => leads.update(|s| {
                    s.error = Some(e);
                    s.loading = false;
                }),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = role;
    });

    let visible = move || {
        let state = leads.get();
        filter_by_status(&state.items, state.status_filter.as_deref())
    };

    let on_filter = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        leads.update(|s| {
            s.status_filter = if value == "all" { None } else { Some(value) };
        });
    };

    let on_dialog_cancel = Callback::new(move |()| editing.set(None));

    view! {
        <Shell>
            <div class="leads">
                <div class="leads__toolbar">
                    <h1 class="leads__title">"Leads"</h1>
                    <label class="leads__filter">
                        "Status"
                        <select class="leads__filter-select" on:change=on_filter>
                            <option value="all">"All"</option>
                            {STATUS_OPTIONS
                                .iter()
                                .map(|status| view! { <option value=*status>{*status}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                </div>

                <Show when=move || leads.get().error.is_some()>
                    <p class="leads__error">{move || leads.get().error.unwrap_or_default()}</p>
                </Show>

                <Show
                    when=move || !leads.get().loading
                    fallback=move || view! { <p>"Loading leads..."</p> }
                >
                    <table class="leads__table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Phone"</th>
                                <th>"Status"</th>
                                <th>"Assigned To"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                visible()
                                    .into_iter()
                                    .map(|lead| {
                                        let row = lead.clone();
                                        view! {
                                            <tr class="leads__row">
                                                <td>{lead.name}</td>
                                                <td>{lead.phone}</td>
                                                <td>
                                                    <span class="status-chip">{lead.status}</span>
                                                </td>
                                                <td>
                                                    {lead.assigned_to.unwrap_or_else(|| "—".to_owned())}
                                                </td>
                                                <td>
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| editing.set(Some(row.clone()))
                                                    >
                                                        "Change Status"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>

                <Show when=move || editing.get().is_some()>
                    <StatusDialog lead=editing leads=leads on_cancel=on_dialog_cancel/>
                </Show>
            </div>
        </Shell>
    }
}

/// Modal dialog confirming a lead's move to a new status.
#[component]
fn StatusDialog(
    lead: RwSignal<Option<Lead>>,
    leads: RwSignal<LeadsState>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let next_status = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let dialog_error = RwSignal::new(None::<String>);

    let current = move || lead.get().map(|l| (l.id, l.name, l.status)).unwrap_or_default();

    let submit = Callback::new(move |()| {
        let Some(target) = lead.get_untracked() else {
            return;
        };
        let status = next_status.get_untracked();
        if status.is_empty() || saving.get_untracked() {
            return;
        }
        saving.set(true);
        dialog_error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_lead_status(target.id, &status).await {
                Ok(()) => {
                    leads.update(|s| {
                        if let Some(row) = s.items.iter_mut().find(|l| l.id == target.id) {
                            row.status.clone_from(&status);
                        }
                    });
                    saving.set(false);
                    on_cancel.run(());
                }
                Err(e) => {
                    dialog_error.set(Some(e));
                    saving.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (target, status);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Change Status"</h2>
                <p class="dialog__context">
                    {move || current().1}
                    " — currently "
                    <span class="status-chip">{move || current().2}</span>
                </p>
                <Show when=move || dialog_error.get().is_some()>
                    <p class="dialog__error">{move || dialog_error.get().unwrap_or_default()}</p>
                </Show>
                <label class="dialog__label">
                    "New Status"
                    <select
                        class="dialog__input"
                        on:change=move |ev| next_status.set(event_target_value(&ev))
                    >
                        <option value="">"Select..."</option>
                        {move || {
                            next_status_options(&current().2)
                                .into_iter()
                                .map(|status| view! { <option value=status>{status}</option> })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || saving.get() || next_status.get().is_empty()
                        on:click=move |_| submit.run(())
                    >
                        {move || if saving.get() { "Saving..." } else { "Update" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
