//! Collapsible List Component
//!
//! Accordion of rule or amenity categories. The accordion itself is
//! initialized by the controller when the panel opens.

use dioxus::prelude::*;
use guidebook_core::ModalId;

use crate::context::{get_content, use_controller};

/// Category list for the rules or amenities panel.
///
/// Clicking a header expands its category and collapses any other one.
#[component]
pub fn CollapsibleList(modal: ModalId) -> Element {
    let mut controller = use_controller();
    let content = get_content();
    let categories = match modal {
        ModalId::Rules => &content.rules,
        ModalId::Amenities => &content.amenities,
        _ => return VNode::empty(),
    };
    let item_class = if modal == ModalId::Rules { "rule-category" } else { "amenity-category" };

    let expanded: Vec<(bool, u16)> = {
        let ctl = controller.read();
        categories
            .iter()
            .map(|c| {
                ctl.accordion(modal)
                    .and_then(|group| group.section(&c.name))
                    .map(|s| (s.expanded, s.indicator_rotation()))
                    .unwrap_or((false, 0))
            })
            .collect()
    };

    rsx! {
        div { class: "collapsible-list",
            for (category, (is_expanded, rotation)) in categories.iter().zip(expanded) {
                {
                    let name = category.name.clone();
                    let class = if is_expanded {
                        format!("{item_class} active")
                    } else {
                        item_class.to_string()
                    };
                    let display = if is_expanded { "block" } else { "none" };
                    rsx! {
                        div {
                            key: "{category.name}",
                            class: "{class}",

                            div {
                                class: "category-header",
                                "data-category": "{category.name}",
                                onclick: move |_| {
                                    controller.write().toggle_section(modal, &name);
                                },
                                if let Some(icon) = &category.icon {
                                    span { class: "category-icon", "{icon}" }
                                }
                                h3 { "{category.name}" }
                                i {
                                    class: "category-indicator",
                                    style: "transform: rotate({rotation}deg);",
                                    "⌄"
                                }
                            }

                            div {
                                class: "category-content",
                                style: "display: {display};",
                                ul {
                                    for item in category.items.iter() {
                                        li { "{item}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
