//! Staff self-registration page.
//!
//! Submits through the host proxy; accounts stay pending until an
//! administrator approves them backend-side, so no session is created.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

/// Validated registration fields in form order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

fn validate_registration(
    name: &str,
    email: &str,
    phone: &str,
    password: &str,
) -> Result<RegistrationInput, &'static str> {
    let name = name.trim();
    let email = email.trim();
    let phone = phone.trim();
    if name.is_empty() || email.is_empty() || phone.is_empty() {
        return Err("Fill in name, email, and phone.");
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters.");
    }
    Ok(RegistrationInput {
        name: name.to_owned(),
        email: email.to_owned(),
        phone: phone.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let submitted = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || submitted.get() {
            return;
        }
        let input = match validate_registration(&name.get(), &email.get(), &phone.get(), &password.get()) {
            Ok(input) => input,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Submitting registration...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&input.name, &input.email, &input.phone, &input.password)
                .await
            {
                Ok(()) => {
                    submitted.set(true);
                    info.set(
                        "Registration submitted. An administrator will approve your account."
                            .to_owned(),
                    );
                }
                Err(e) => info.set(format!("Registration failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = input;
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Join Leadboard"</h1>
                <p class="login-card__subtitle">"Staff registration"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="tel"
                        placeholder="Phone"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button
                        class="login-button"
                        type="submit"
                        disabled=move || busy.get() || submitted.get()
                    >
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <a class="login-card__link" href="/login">
                    "Already approved? Sign in"
                </a>
            </div>
        </div>
    }
}
