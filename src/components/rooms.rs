//! Rooms Modal Content
//!
//! Villa tabs, a thumbnail slider per villa, and a dot-indexed gallery per
//! room. Rooms still under construction show a notice instead.

use dioxus::prelude::*;
use guidebook_core::SliderSpec;

use crate::components::ImageSlider;
use crate::context::{get_content, show_notice, use_controller};

#[component]
pub fn RoomsModal() -> Element {
    let mut controller = use_controller();
    let villas = &get_content().villas;
    let active_villa = controller.read().villa_tabs().active().map(str::to_string);

    rsx! {
        div { class: "villa-tabs",
            for villa in villas.iter() {
                {
                    let id = villa.id.clone();
                    let is_active = active_villa.as_deref() == Some(villa.id.as_str());
                    rsx! {
                        button {
                            key: "{villa.id}",
                            class: if is_active { "villa-tab active" } else { "villa-tab" },
                            "data-villa": "{villa.id}",
                            onclick: move |_| controller.write().select_villa_tab(&id),
                            "{villa.name}"
                        }
                    }
                }
            }
        }

        for villa in villas.iter() {
            {
                let is_active = active_villa.as_deref() == Some(villa.id.as_str());
                rsx! {
                    div {
                        key: "{villa.id}",
                        class: if is_active { "villa-content active" } else { "villa-content" },

                        ImageSlider {
                            spec: SliderSpec::thumbnailed(villa.slider_container(), villa.images.len()),
                            images: villa.images.clone(),
                            class: "villa-slider".to_string(),
                        }

                        if !villa.description.is_empty() {
                            p { class: "villa-description", "{villa.description}" }
                        }

                        div { class: "room-list",
                            for room in villa.rooms.iter() {
                                if room.coming_soon {
                                    {
                                        let room_id = room.id.clone();
                                        rsx! {
                                            div {
                                                key: "{room.id}",
                                                class: "room-card coming-soon",
                                                onclick: move |_| {
                                                    let notice = controller.read().select_room(&room_id);
                                                    if let Some(notice) = notice {
                                                        show_notice(controller, notice);
                                                    }
                                                },
                                                h4 { "{room.name}" }
                                                span { class: "badge", "Coming soon" }
                                            }
                                        }
                                    }
                                } else {
                                    div { key: "{room.id}", class: "room-card",
                                        ImageSlider {
                                            spec: SliderSpec::dotted(room.slider_container(), room.images.len()),
                                            images: room.images.clone(),
                                            class: "room-image-gallery".to_string(),
                                        }
                                        h4 { "{room.name}" }
                                        if !room.description.is_empty() {
                                            p { "{room.description}" }
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
}
