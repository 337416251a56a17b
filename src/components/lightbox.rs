//! Lightbox Component
//!
//! Full-size overlay for a gallery image. Stays in the tree while its
//! closing transition plays.

use dioxus::prelude::*;

use crate::context::{close_lightbox, use_controller};

#[component]
pub fn Lightbox() -> Element {
    let controller = use_controller();

    let (src, alt, active) = {
        let ctl = controller.read();
        let lightbox = ctl.lightbox();
        match lightbox.image() {
            Some((src, alt)) => (src.to_string(), alt.to_string(), lightbox.is_active()),
            None => return VNode::empty(),
        }
    };

    rsx! {
        div {
            class: if active { "lightbox active" } else { "lightbox" },
            onclick: move |_| close_lightbox(controller),

            img {
                src: "{src}",
                alt: "{alt}",
                onclick: move |e| e.stop_propagation(),
            }

            span {
                class: "lightbox-close",
                "aria-label": "Close",
                onclick: move |e| {
                    e.stop_propagation();
                    close_lightbox(controller);
                },
                "×"
            }
        }
    }
}
