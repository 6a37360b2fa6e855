//! Public landing page.
//!
//! The server guard already bounces authenticated users to their
//! dashboard; after hydration the same redirect is applied client-side in
//! case the session arrives late.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(user) = auth.get().user {
            navigate(user.role.dashboard_path(), NavigateOptions::default());
        }
    });

    view! {
        <div class="landing">
            <div class="landing__card">
                <h1>"Leadboard"</h1>
                <p class="landing__subtitle">"Lead tracking and team productivity"</p>
                <div class="landing__actions">
                    <a class="btn btn--primary" href="/login">
                        "Sign In"
                    </a>
                    <a class="btn" href="/register">
                        "Register"
                    </a>
                </div>
            </div>
        </div>
    }
}
