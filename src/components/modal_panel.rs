//! Modal Panel Component
//!
//! Overlay panels and the sticky back button that closes them.

use dioxus::prelude::*;
use guidebook_core::ModalId;

use crate::context::{use_controller, use_modal_open};

/// Overlay panel shown while its modal is open.
///
/// Closes on the × control or on a click on the scrim around the content.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ModalPanel { modal: ModalId::Rules, title: "House Rules".to_string(),
///         CollapsibleList { modal: ModalId::Rules }
///     }
/// }
/// ```
#[component]
pub fn ModalPanel(modal: ModalId, title: String, children: Element) -> Element {
    let mut controller = use_controller();
    let visible = controller.read().modals().is_visible(modal);
    let display = if visible { "display: block;" } else { "display: none;" };

    rsx! {
        div {
            id: "{modal}",
            class: "modal",
            style: "{display}",
            role: "dialog",
            "aria-modal": "true",
            "aria-hidden": if visible { "false" } else { "true" },
            onclick: move |_| {
                controller.write().close(modal);
            },

            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),

                span {
                    class: "close",
                    "aria-label": "Close",
                    onclick: move |_| {
                        controller.write().close(modal);
                    },
                    "×"
                }

                h2 { class: "modal-title", "{title}" }

                {children}
            }
        }
    }
}

/// Back button pinned over open panels; closes all of them.
#[component]
pub fn StickyBackButton() -> Element {
    let mut controller = use_controller();
    let modal_open = use_modal_open();

    rsx! {
        button {
            class: if modal_open() { "sticky-back-btn visible" } else { "sticky-back-btn" },
            "aria-label": "Back",
            onclick: move |_| {
                let closed = controller.write().close_all();
                tracing::debug!("Back button closed {} panel(s)", closed.len());
            },
            "‹ Back"
        }
    }
}
