//! Trigger Button Component
//!
//! A button or card that opens the panel the router maps its id to.

use dioxus::prelude::*;

use crate::context::{schedule_open_effect, use_controller};

/// Button wired through the router by element id.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TriggerButton {
///         id: "rules-btn".to_string(),
///         label: "House Rules".to_string(),
///         icon: "📜".to_string(),
///     }
/// }
/// ```
#[component]
pub fn TriggerButton(
    /// Element id, looked up in the button router
    id: String,
    label: String,
    #[props(default)]
    icon: String,
    #[props(default = "action-btn".to_string())]
    class: String,
) -> Element {
    let mut controller = use_controller();
    let trigger = id.clone();

    rsx! {
        button {
            id: "{id}",
            class: "{class}",
            onclick: move |_| {
                let effect = controller.write().click_trigger(&trigger);
                schedule_open_effect(controller, effect);
            },
            if !icon.is_empty() {
                span { class: "trigger-icon", "{icon}" }
            }
            span { class: "trigger-label", "{label}" }
        }
    }
}
