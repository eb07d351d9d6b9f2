//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use store::{AuthGate, Credentials};

use crate::storage::{platform_store, PlatformStore};
use crate::toast::{notify, use_notifications};

pub type Gate = AuthGate<PlatformStore>;

/// Get the auth gate.
/// Returns a signal that updates when the administrator signs in or out.
pub fn use_auth() -> Signal<Gate> {
    use_context::<Signal<Gate>>()
}

/// Provider component that owns the auth gate.
///
/// The stored session is restored synchronously while the signal is created,
/// so children never see a "not yet known" state.
#[component]
pub fn AuthProvider(credentials: Credentials, children: Element) -> Element {
    let gate = use_signal(move || AuthGate::open(platform_store(), credentials));
    use_context_provider(|| gate);

    rsx! {
        {children}
    }
}

/// Renders `children` only for a signed-in administrator; otherwise calls
/// `on_denied` once so the caller can redirect to its login route.
#[component]
pub fn ProtectedRoute(on_denied: EventHandler<()>, children: Element) -> Element {
    let auth = use_auth();
    let authenticated = auth.read().is_authenticated();

    use_effect(move || {
        if !auth.read().is_authenticated() {
            on_denied.call(());
        }
    });

    if !authenticated {
        return rsx! {};
    }

    rsx! {
        {children}
    }
}

/// Button to sign the administrator out.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    let mut auth = use_auth();
    let mut notes = use_notifications();

    let onclick = move |_| {
        if let Err(e) = auth.write().logout() {
            tracing::warn!("Failed to clear stored session: {}", e);
        }
        notify(&mut notes, crud::Level::Info, "Signed out");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            {children}
            span { "{label}" }
        }
    }
}
