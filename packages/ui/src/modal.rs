use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

const MODAL_CSS: Asset = asset!("/assets/styling/modal.css");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ModalSize {
    fn class(&self) -> &'static str {
        match self {
            ModalSize::Small => "modal-card small",
            ModalSize::Medium => "modal-card medium",
            ModalSize::Large => "modal-card large",
        }
    }
}

/// A full-screen overlay that centers its children in a titled card.
/// Clicking the backdrop or the close button triggers `on_close`; clicks
/// inside the card stay inside it.
#[component]
pub fn Modal(
    is_open: bool,
    on_close: EventHandler<()>,
    title: String,
    #[props(default)] size: ModalSize,
    children: Element,
) -> Element {
    if !is_open {
        return rsx! {};
    }

    rsx! {
        document::Stylesheet { href: MODAL_CSS }

        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: size.class(),
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    h2 { "{title}" }
                    button {
                        class: "modal-close",
                        title: "Close",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 16, height: 16 }
                    }
                }
                div {
                    class: "modal-body",
                    {children}
                }
            }
        }
    }
}

/// Yes/no gate in front of a destructive action.
#[component]
pub fn ConfirmDialog(
    is_open: bool,
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    #[props(default)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        Modal {
            is_open,
            on_close: on_cancel,
            title,
            size: ModalSize::Small,
            p { class: "confirm-message", "{message}" }
            div {
                class: "modal-actions",
                button {
                    class: "btn btn-secondary",
                    disabled: busy,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-danger",
                    disabled: busy,
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
            }
        }
    }
}
