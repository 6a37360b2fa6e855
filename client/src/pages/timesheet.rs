//! Staff timesheet: per-day check-in/out rows with a total-hours footer.

#[cfg(test)]
#[path = "timesheet_test.rs"]
mod timesheet_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::layout::Shell;
use crate::net::types::TimesheetEntry;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Sum of credited hours across the sheet.
pub(crate) fn total_hours(entries: &[TimesheetEntry]) -> f64 {
    entries.iter().map(|entry| entry.hours).sum()
}

/// Hours rendered with one decimal place.
pub(crate) fn format_hours(hours: f64) -> String {
    format!("{hours:.1} h")
}

#[component]
pub fn TimesheetPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let entries = RwSignal::new(Vec::<TimesheetEntry>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let fetched = RwSignal::new(false);
    Effect::new(move || {
        if auth.get().user.is_none() || fetched.get() {
            return;
        }
        fetched.set(true);
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_timesheet().await {
                Ok(rows) => entries.set(rows),
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    });

    view! {
        <Shell>
            <div class="timesheet">
                <h1 class="timesheet__title">"Timesheet"</h1>

                <Show when=move || error.get().is_some()>
                    <p class="timesheet__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <Show
                    when=move || !loading.get()
                    fallback=move || view! { <p>"Loading timesheet..."</p> }
                >
                    <table class="timesheet__table">
                        <thead>
                            <tr>
                                <th>"Date"</th>
                                <th>"Check In"</th>
                                <th>"Check Out"</th>
                                <th>"Hours"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                entries
                                    .get()
                                    .into_iter()
                                    .map(|entry| {
                                        view! {
                                            <tr>
                                                <td>{entry.date}</td>
                                                <td>
                                                    {entry.check_in.unwrap_or_else(|| "—".to_owned())}
                                                </td>
                                                <td>
                                                    {entry.check_out.unwrap_or_else(|| "—".to_owned())}
                                                </td>
                                                <td>{format_hours(entry.hours)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                        <tfoot>
                            <tr>
                                <td colspan="3">"Total"</td>
                                <td>{move || format_hours(total_hours(&entries.get()))}</td>
                            </tr>
                        </tfoot>
                    </table>
                </Show>
            </div>
        </Shell>
    }
}
