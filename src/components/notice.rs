//! Notice Toast Component
//!
//! Shows the controller's current notice, if any.

use dioxus::prelude::*;

use crate::context::use_controller;

#[component]
pub fn NoticeToast() -> Element {
    let controller = use_controller();
    let Some(notice) = controller.read().notice().cloned() else {
        return VNode::empty();
    };

    rsx! {
        div {
            class: "{notice.kind.class()}",
            role: "status",
            "aria-live": "polite",
            "{notice.message}"
        }
    }
}
