use crud::{Level, Notification, Notifications};
use dioxus::prelude::*;

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

/// How long a toast stays on screen before it dismisses itself.
pub const TOAST_DURATION_MS: u32 = 4_000;

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

pub fn notify(notes: &mut Signal<Notifications>, level: Level, message: &str) {
    match level {
        Level::Error => tracing::error!("{message}"),
        _ => tracing::info!("{message}"),
    }
    notes.write().push(level, message);
}

/// Stack of live notifications, newest at the bottom.
#[component]
pub fn Toaster(#[props(default = TOAST_DURATION_MS)] duration_ms: u32) -> Element {
    let notes = use_notifications();
    let items = notes.read().items().to_vec();

    rsx! {
        document::Stylesheet { href: TOAST_CSS }

        div {
            class: "toaster",
            role: "status",
            for item in items {
                Toast {
                    key: "{item.id}",
                    notification: item.clone(),
                    duration_ms,
                }
            }
        }
    }
}

#[component]
fn Toast(notification: Notification, duration_ms: u32) -> Element {
    let mut notes = use_notifications();
    let id = notification.id;

    // Scoped to this toast: the timer is dropped if it is dismissed by hand.
    use_hook(move || {
        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            {
                gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                notes.write().dismiss(id);
            }
            #[cfg(not(target_arch = "wasm32"))]
            let _ = duration_ms;
        })
    });

    rsx! {
        div {
            class: "toast {notification.level.as_str()}",
            span { class: "toast-message", "{notification.message}" }
            button {
                class: "toast-close",
                title: "Dismiss",
                onclick: move |_| notes.write().dismiss(id),
                "×"
            }
        }
    }
}
