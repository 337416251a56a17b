//! Hero Slideshow Component
//!
//! Background slides rotating for the lifetime of the app, with the property
//! title and the share button on top.

use dioxus::prelude::*;
use guidebook_core::{HERO_INTERVAL, HERO_START_DELAY};

use crate::components::ShareButton;
use crate::context::{get_content, use_controller};

#[component]
pub fn HeroSlideshow() -> Element {
    let mut controller = use_controller();
    let content = get_content();

    use_future(move || async move {
        tokio::time::sleep(HERO_START_DELAY).await;
        loop {
            tokio::time::sleep(HERO_INTERVAL).await;
            controller.write().advance_hero();
        }
    });

    let current = controller.read().hero().current();

    rsx! {
        header { class: "hero",
            div { class: "hero-slider",
                for (i, slide) in content.hero_slides.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: if i == current { "slide active" } else { "slide" },
                        style: "background-image: url('{slide.src}');",
                        role: "img",
                        "aria-label": "{slide.alt}",
                    }
                }
            }

            div { class: "hero-overlay",
                h1 { class: "hero-title", "{content.property.name}" }
                p { class: "hero-location", "{content.property.location}" }
                p { class: "hero-tagline", "{content.property.tagline}" }
                ShareButton {}
            }
        }
    }
}
