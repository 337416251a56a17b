//! Controller context for the guidebook.
//!
//! The App component owns a single [`GuidebookController`] in a signal and
//! provides it to every component via use_context, next to a `bool` signal
//! that mirrors "any modal open".
//!
//! ## Usage
//!
//! ```ignore
//! let mut controller = use_controller();
//!
//! // In an event handler
//! let effect = controller.write().click_trigger("rules-btn");
//! schedule_open_effect(controller, effect);
//! ```

use dioxus::prelude::*;
use guidebook_core::{
    GuidebookContent, GuidebookController, Notice, OpenEffect, LIGHTBOX_ACTIVATE_DELAY,
    LIGHTBOX_TRANSITION, PANEL_INIT_DELAY,
};

/// Get the guidebook content loaded at startup.
pub fn get_content() -> &'static GuidebookContent {
    crate::get_content()
}

/// Get the initial window width.
pub fn get_window_width() -> f64 {
    crate::get_window_width()
}

/// Build the controller and hook the "any modal open" notification up to
/// `modal_open`.
pub fn build_controller(mut modal_open: Signal<bool>) -> GuidebookController {
    let mut controller = GuidebookController::new(get_content().clone());
    controller.on_any_open_changed(move |open| modal_open.set(open));
    controller
}

/// Hook to access the guidebook controller from context.
pub fn use_controller() -> Signal<GuidebookController> {
    use_context::<Signal<GuidebookController>>()
}

/// Hook to read whether any modal is open (back affordance, scroll lock).
pub fn use_modal_open() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

/// Run the follow-up of opening a panel: gallery-style panels wire their
/// controls once the panel has had time to lay out.
pub fn schedule_open_effect(mut controller: Signal<GuidebookController>, effect: OpenEffect) {
    if let OpenEffect::DeferInit(modal) = effect {
        spawn(async move {
            tokio::time::sleep(PANEL_INIT_DELAY).await;
            if let Err(e) = controller.write().init_deferred(modal) {
                tracing::error!("Failed to wire {}: {}", modal, e);
            }
        });
    }
}

/// Show a notice and dismiss it after its duration.
pub fn show_notice(mut controller: Signal<GuidebookController>, notice: Notice) {
    let duration = notice.duration;
    let ticket = controller.write().post_notice(notice);
    spawn(async move {
        tokio::time::sleep(duration).await;
        controller.write().dismiss_notice(ticket);
    });
}

/// Insert the lightbox, then apply its transition class one tick later.
pub fn open_lightbox(mut controller: Signal<GuidebookController>, src: String, alt: String) {
    let ticket = controller.write().open_lightbox(&src, &alt);
    spawn(async move {
        tokio::time::sleep(LIGHTBOX_ACTIVATE_DELAY).await;
        controller.write().activate_lightbox(ticket);
    });
}

/// Drop the transition class and remove the overlay once it has played.
pub fn close_lightbox(mut controller: Signal<GuidebookController>) {
    let Some(ticket) = controller.write().close_lightbox() else {
        return;
    };
    spawn(async move {
        tokio::time::sleep(LIGHTBOX_TRANSITION).await;
        controller.write().finish_lightbox(ticket);
    });
}
