//! Productivity calendar: per-day lead counts and computed earnings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Staff see their own month; admins pick a staff member first and view
//! that member's month via the admin calendar endpoint. Earnings figures
//! come from the backend; this page only lays them out on a month grid.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use access::Role;

use crate::components::layout::Shell;
use crate::net::types::{ProductivityDay, StaffMember};
use crate::pages::dashboard::format_amount;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

pub(crate) fn month_name(month: u32) -> &'static str {
    MONTH_NAMES.get(month as usize - 1).copied().unwrap_or("")
}

pub(crate) fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Weekday of the first day of the month, 0 = Sunday (Sakamoto's method).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn first_weekday(year: i32, month: u32) -> u32 {
    const T: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let y = if month < 3 { year - 1 } else { year };
    let raw = y + y / 4 - y / 100 + y / 400 + T[month as usize - 1] + 1;
    raw.rem_euclid(7) as u32
}

pub(crate) fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

pub(crate) fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

/// ISO date key matching the backend's `ProductivityDay::date` format.
pub(crate) fn date_key(year: i32, month: u32, day: u32) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

/// Month totals as `(lead_count, earnings)`.
pub(crate) fn month_totals(days: &[ProductivityDay]) -> (i64, f64) {
    days.iter().fold((0, 0.0), |(count, earnings), day| {
        (count + day.lead_count, earnings + day.earnings)
    })
}

fn current_year_month() -> (i32, u32) {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let year = i32::try_from(now.get_full_year()).unwrap_or(2025);
        (year, now.get_month() + 1)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        // SSR placeholder; replaced as soon as hydration runs.
        (2025, 1)
    }
}

#[component]
pub fn CalendarPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let month_cursor = RwSignal::new(current_year_month());
    let days = RwSignal::new(Vec::<ProductivityDay>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    // Admin mode: pick a staff member first.
    let staff = RwSignal::new(Vec::<StaffMember>::new());
    let selected_staff = RwSignal::new(None::<i64>);

    let is_staff_view = move || auth.get().user.is_some_and(|u| u.role == Role::Staff);

    // Load the staff picker for admin viewers.
    let staff_fetched = RwSignal::new(false);
    Effect::new(move || {
        let Some(user) = auth.get().user else {
            return;
        };
        if user.role == Role::Staff || staff_fetched.get() {
            return;
        }
        staff_fetched.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_staff().await {
                Ok(members) => staff.set(members),
                Err(e) => error.set(Some(e)),
            }
        });
    });

    // Fetch the month whenever the cursor, viewer, or picked staff changes.
    Effect::new(move || {
        let Some(user) = auth.get().user else {
            return;
        };
        let (year, month) = month_cursor.get();
        let staff_id = selected_staff.get();
        if user.role != Role::Staff && staff_id.is_none() {
            return;
        }
        loading.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match staff_id {
                Some(id) => crate::net::api::fetch_staff_calendar(id, year, month).await,
                None => crate::net::api::fetch_own_calendar(year, month).await,
            };
            match result {
                Ok(data) => days.set(data),
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (year, month, staff_id);
    });

    let on_staff_pick = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        selected_staff.set(value.parse::<i64>().ok());
    };

    let totals = move || month_totals(&days.get());

    let grid = move || {
        let (year, month) = month_cursor.get();
        let by_date: std::collections::HashMap<String, ProductivityDay> =
            days.get().into_iter().map(|d| (d.date.clone(), d)).collect();

        let mut cells: Vec<AnyView> = Vec::new();
        for _ in 0..first_weekday(year, month) {
            cells.push(view! { <div class="calendar__cell calendar__cell--blank"></div> }.into_any());
        }
        for day in 1..=days_in_month(year, month) {
            let entry = by_date.get(&date_key(year, month, day)).cloned();
            cells.push(
                view! {
                    <div class="calendar__cell">
                        <span class="calendar__day">{day}</span>
                        {entry
                            .map(|e| {
                                view! {
                                    <span class="calendar__leads">{e.lead_count} " leads"</span>
                                    <span class="calendar__earnings">{format_amount(e.earnings)}</span>
                                }
                            })}
                    </div>
                }
                .into_any(),
            );
        }
        cells
    };

    view! {
        <Shell>
            <div class="calendar">
                <div class="calendar__toolbar">
                    <h1 class="calendar__title">"Productivity Calendar"</h1>
                    <Show when=move || !is_staff_view()>
                        <label class="calendar__picker">
                            "Staff member"
                            <select class="calendar__picker-select" on:change=on_staff_pick>
                                <option value="">"Select..."</option>
                                {move || {
                                    staff
                                        .get()
                                        .into_iter()
                                        .map(|member| {
                                            view! {
                                                <option value=member.id.to_string()>
                                                    {member.name}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </select>
                        </label>
                    </Show>
                    <span class="calendar__spacer"></span>
                    <button
                        class="btn"
                        on:click=move |_| {
                            month_cursor.update(|(y, m)| (*y, *m) = prev_month(*y, *m));
                        }
                    >
                        "‹"
                    </button>
                    <span class="calendar__month">
                        {move || {
                            let (year, month) = month_cursor.get();
                            format!("{} {year}", month_name(month))
                        }}
                    </span>
                    <button
                        class="btn"
                        on:click=move |_| {
                            month_cursor.update(|(y, m)| (*y, *m) = next_month(*y, *m));
                        }
                    >
                        "›"
                    </button>
                </div>

                <Show when=move || error.get().is_some()>
                    <p class="calendar__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <Show
                    when=move || !loading.get()
                    fallback=move || view! { <p>"Loading month..."</p> }
                >
                    <div class="calendar__weekdays">
                        {["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
                            .iter()
                            .map(|d| view! { <span class="calendar__weekday">{*d}</span> })
                            .collect::<Vec<_>>()}
                    </div>
                    <div class="calendar__grid">{grid}</div>
                    <div class="calendar__totals">
                        "Month total: "
                        {move || totals().0}
                        " leads · "
                        {move || format_amount(totals().1)}
                    </div>
                </Show>
            </div>
        </Shell>
    }
}
