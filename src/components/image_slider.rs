//! Image Slider Component
//!
//! Renders one slider container. Which controls appear (dots, thumbnails,
//! counter) follows its [`SliderSpec`]; the index lives in the controller.

use dioxus::prelude::*;
use guidebook_core::{ImageRef, SliderSpec};

use crate::context::use_controller;

/// Slider over `images`, keyed by `spec.container`.
///
/// Until the owning panel has wired its sliders the first image shows and
/// the controls are inert.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ImageSlider {
///         spec: SliderSpec::thumbnailed(villa.slider_container(), villa.images.len()),
///         images: villa.images.clone(),
///         class: "villa-slider".to_string(),
///     }
/// }
/// ```
#[component]
pub fn ImageSlider(
    spec: SliderSpec,
    images: Vec<ImageRef>,
    #[props(default = "gallery-slider".to_string())]
    class: String,
) -> Element {
    let mut controller = use_controller();
    let container = spec.container.clone();

    let (index, counter) = {
        let ctl = controller.read();
        match ctl.slider(&container) {
            Some(slider) => (slider.index(), slider.counter_text()),
            None => (
                0,
                spec.counter.then(|| format!("1 / {}", images.len())),
            ),
        }
    };

    let prev_target = container.clone();
    let next_target = container.clone();

    rsx! {
        div {
            id: "{container}",
            class: "{class}",

            div { class: "slider-track",
                for (i, image) in images.iter().enumerate() {
                    img {
                        key: "{i}",
                        class: if i == index { "slider-image active" } else { "slider-image" },
                        src: "{image.src}",
                        alt: "{image.alt}",
                    }
                }
            }

            button {
                class: "slider-nav prev",
                "aria-label": "Previous image",
                onclick: move |e| {
                    e.stop_propagation();
                    controller.write().slider_prev(&prev_target);
                },
                "‹"
            }
            button {
                class: "slider-nav next",
                "aria-label": "Next image",
                onclick: move |e| {
                    e.stop_propagation();
                    controller.write().slider_next(&next_target);
                },
                "›"
            }

            if let Some(text) = counter {
                div { class: "slider-counter", "{text}" }
            }

            if spec.thumbnails {
                div { class: "slider-thumbnails",
                    for (i, image) in images.iter().enumerate() {
                        {
                            let target = container.clone();
                            rsx! {
                                img {
                                    key: "{i}",
                                    class: if i == index { "thumbnail active" } else { "thumbnail" },
                                    src: "{image.src}",
                                    alt: "{image.alt}",
                                    onclick: move |e| {
                                        e.stop_propagation();
                                        controller.write().slider_jump(&target, i);
                                    },
                                }
                            }
                        }
                    }
                }
            }

            if spec.dots {
                div { class: "slider-dots",
                    for i in 0..images.len() {
                        {
                            let target = container.clone();
                            rsx! {
                                span {
                                    key: "{i}",
                                    class: if i == index { "dot active" } else { "dot" },
                                    onclick: move |e| {
                                        e.stop_propagation();
                                        controller.write().slider_jump(&target, i);
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
