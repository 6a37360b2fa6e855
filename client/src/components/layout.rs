//! Role-specific layout shell: sidebar navigation plus header chrome.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;

use access::Role;

use crate::state::auth::AuthState;
use crate::state::campaigns::CampaignState;
use crate::state::ui::UiState;

/// Sidebar entries for a role, as `(href, label)` pairs. Every target must
/// be reachable for the role under the access policy.
#[must_use]
pub fn nav_items(role: Role) -> Vec<(&'static str, &'static str)> {
    match role {
        Role::SuperAdmin => vec![
            ("/superadmin/dashboard", "Dashboard"),
            ("/superadmin/leads", "Leads"),
            ("/admin/calendar", "Staff Calendar"),
        ],
        Role::Admin => vec![
            ("/admin/dashboard", "Dashboard"),
            ("/admin/leads", "Leads"),
            ("/admin/calendar", "Staff Calendar"),
        ],
        Role::TeamLeader => vec![
            ("/teamleader/dashboard", "Dashboard"),
            ("/teamleader/leads", "Team Leads"),
        ],
        Role::Staff => vec![
            ("/staff/dashboard", "Dashboard"),
            ("/staff/leads", "My Leads"),
            ("/staff/calendar", "Calendar"),
            ("/staff/timesheet", "Timesheet"),
        ],
    }
}

/// Layout shell wrapping every protected page: sidebar + header + content.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="shell" class=("shell--collapsed", move || ui.get().sidebar_collapsed)>
            <Sidebar/>
            <div class="shell__main">
                <Header/>
                <main class="shell__content">{children()}</main>
            </div>
        </div>
    }
}

/// Sidebar with the signed-in role's navigation links.
#[component]
fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let links = move || {
        auth.get()
            .user
            .map(|user| nav_items(user.role))
            .unwrap_or_default()
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"Leadboard"</div>
            <button
                class="sidebar__collapse"
                on:click=move |_| ui.update(|u| u.sidebar_collapsed = !u.sidebar_collapsed)
                title="Toggle sidebar"
            >
                {move || if ui.get().sidebar_collapsed { "»" } else { "«" }}
            </button>
            <ul class="sidebar__links">
                {move || {
                    links()
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <li class="sidebar__item">
                                    <a class="sidebar__link" href=href>
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </nav>
    }
}

/// Header with identity, campaign dialog trigger, dark mode, and logout.
#[component]
fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let campaigns = expect_context::<RwSignal<CampaignState>>();

    let identity = move || {
        auth.get()
            .user
            .map(|user| (user.name, user.role.label()))
            .unwrap_or_else(|| (String::new(), ""))
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(|a| a.user = None);
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href(access::LOGIN_PATH);
                }
            });
        }
    };

    view! {
        <header class="header">
            <span class="header__spacer"></span>

            <button
                class="btn header__campaigns"
                on:click=move |_| campaigns.update(|c| c.open = true)
            >
                "Campaigns"
            </button>

            <button
                class="btn header__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <span class="header__self">
                {move || identity().0}
                " ("
                <span class="header__role">{move || identity().1}</span>
                ")"
            </span>

            <button class="btn header__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
