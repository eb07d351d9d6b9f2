//! Login page view.

use dioxus::prelude::*;
use ui::{notify, use_auth, use_notifications, Level};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut notes = use_notifications();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    // Already signed in: skip straight to the dashboard
    use_effect(move || {
        if auth.read().is_authenticated() {
            nav.replace(Route::Dashboard {});
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let outcome = auth.write().login(&email.read(), &password.read());
        if outcome.success {
            error.set(None);
            notify(&mut notes, Level::Success, "Login successful");
            nav.replace(Route::Dashboard {});
        } else {
            let message = outcome
                .error
                .unwrap_or_else(|| "Invalid credentials".to_string());
            notify(&mut notes, Level::Error, &message);
            error.set(Some(message));
        }
    };

    rsx! {
        div {
            class: "login-container",
            form {
                class: "login-card",
                onsubmit: on_submit,
                h1 { "Nellis Auto" }
                p { class: "login-subtitle", "Sign in to the admin console" }

                if let Some(message) = error() {
                    div { class: "login-error", "{message}" }
                }

                label {
                    r#for: "login-email",
                    "Email"
                }
                input {
                    id: "login-email",
                    r#type: "email",
                    required: true,
                    autocomplete: "username",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                label {
                    r#for: "login-password",
                    "Password"
                }
                input {
                    id: "login-password",
                    r#type: "password",
                    required: true,
                    autocomplete: "current-password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary login-submit",
                    "Sign In"
                }
            }
        }
    }
}
