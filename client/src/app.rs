//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::campaign_dialog::CampaignDialog;
use crate::pages::{
    calendar::CalendarPage, dashboard::DashboardPage, home::HomePage, leads::LeadsPage,
    login::LoginPage, register::RegisterPage, timesheet::TimesheetPage,
};
use crate::state::{auth::AuthState, campaigns::CampaignState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts, resolves the session, and sets up
/// client-side routing for the role-prefixed dashboard areas. The server
/// guard has already authorized whichever route is being served; routing
/// here only mirrors that structure.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState { user: None, loading: true });
    let ui = RwSignal::new(UiState::default());
    let campaigns = RwSignal::new(CampaignState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(campaigns);

    // Resolve the session once on startup.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_session().await;
            auth.update(|a| {
                a.user = user;
                a.loading = false;
            });
        });
        #[cfg(not(feature = "hydrate"))]
        auth.update(|a| a.loading = false);
    });

    // Apply the persisted dark-mode preference.
    Effect::new(move || {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/leadboard.css"/>
        <Title text="Leadboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>

                <Route
                    path=(StaticSegment("superadmin"), StaticSegment("dashboard"))
                    view=DashboardPage
                />
                <Route
                    path=(StaticSegment("superadmin"), StaticSegment("leads"))
                    view=LeadsPage
                />

                <Route
                    path=(StaticSegment("admin"), StaticSegment("dashboard"))
                    view=DashboardPage
                />
                <Route path=(StaticSegment("admin"), StaticSegment("leads")) view=LeadsPage/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("calendar"))
                    view=CalendarPage
                />

                <Route
                    path=(StaticSegment("teamleader"), StaticSegment("dashboard"))
                    view=DashboardPage
                />
                <Route
                    path=(StaticSegment("teamleader"), StaticSegment("leads"))
                    view=LeadsPage
                />

                <Route
                    path=(StaticSegment("staff"), StaticSegment("dashboard"))
                    view=DashboardPage
                />
                <Route path=(StaticSegment("staff"), StaticSegment("leads")) view=LeadsPage/>
                <Route
                    path=(StaticSegment("staff"), StaticSegment("calendar"))
                    view=CalendarPage
                />
                <Route
                    path=(StaticSegment("staff"), StaticSegment("timesheet"))
                    view=TimesheetPage
                />
            </Routes>
        </Router>

        <CampaignDialog/>
    }
}
