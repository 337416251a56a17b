//! Gallery Modal Content
//!
//! Section tabs with their sliders, the category filter bar, the image grid
//! that opens the lightbox, and the jump to the rooms panel.

use dioxus::prelude::*;
use guidebook_core::{ModalId, SliderSpec};

use crate::components::ImageSlider;
use crate::context::{get_content, open_lightbox, schedule_open_effect, use_controller};

#[component]
pub fn GalleryModal() -> Element {
    let mut controller = use_controller();
    let gallery = &get_content().gallery;

    let (ready, active_filter, active_tab) = {
        let ctl = controller.read();
        (
            ctl.is_initialized(ModalId::Gallery),
            ctl.filter().active().clone(),
            ctl.gallery_tabs().active().map(str::to_string),
        )
    };

    rsx! {
        if !gallery.sections.is_empty() {
            div { class: "gallery-tabs",
                for section in gallery.sections.iter() {
                    {
                        let name = section.name.clone();
                        let is_active = active_tab.as_deref() == Some(section.name.as_str());
                        rsx! {
                            button {
                                key: "{section.name}",
                                class: if is_active { "gallery-tab active" } else { "gallery-tab" },
                                "data-category": "{section.name}",
                                onclick: move |_| controller.write().select_gallery_tab(&name),
                                "{section.label}"
                            }
                        }
                    }
                }
            }

            for section in gallery.sections.iter() {
                {
                    let is_active = active_tab.as_deref() == Some(section.name.as_str());
                    rsx! {
                        div {
                            key: "{section.name}",
                            id: "{section.name}-section",
                            class: if is_active { "gallery-section active" } else { "gallery-section" },
                            ImageSlider {
                                spec: SliderSpec::thumbnailed(section.slider_container(), section.images.len()),
                                images: section.images.clone(),
                            }
                        }
                    }
                }
            }
        }

        if !gallery.filters.is_empty() {
            div { class: "filter-bar",
                for choice in gallery.filters.iter() {
                    {
                        let filter = choice.filter.clone();
                        let is_active = choice.filter == active_filter;
                        rsx! {
                            button {
                                key: "{choice.filter}",
                                class: if is_active { "filter-btn active" } else { "filter-btn" },
                                "data-filter": "{choice.filter}",
                                onclick: move |_| controller.write().select_filter(filter.clone()),
                                "{choice.label}"
                            }
                        }
                    }
                }
            }
        }

        div { class: "gallery-grid",
            for (i, item) in gallery.items.iter().enumerate() {
                {
                    let shown = ready && active_filter.matches(&item.category);
                    let src = item.src.clone();
                    let alt = item.alt.clone();
                    rsx! {
                        div {
                            key: "{i}",
                            class: if shown { "gallery-item show" } else { "gallery-item" },
                            "data-category": "{item.category}",
                            onclick: move |_| {
                                if ready {
                                    open_lightbox(controller, src.clone(), alt.clone());
                                }
                            },
                            img { src: "{item.src}", alt: "{item.alt}" }
                        }
                    }
                }
            }
        }

        button {
            id: "view-rooms-from-gallery",
            class: "action-btn",
            onclick: move |_| {
                let effect = controller.write().view_rooms_from_gallery();
                schedule_open_effect(controller, effect);
            },
            "View Detailed Room Images"
        }
    }
}
