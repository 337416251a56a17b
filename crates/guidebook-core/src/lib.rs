//! Guidebook Core Library
//!
//! Interaction state for the property guidebook: overlay panels, the button
//! router, accordion lists, gallery filtering and tabs, image sliders, the
//! lightbox, the hero slideshow, notices and the share action.
//!
//! Nothing here renders. The desktop app drives a [`GuidebookController`]
//! from its event handlers and reads state back out when it re-renders.
//!
//! ## Quick Start
//!
//! ```
//! use guidebook_core::{GuidebookContent, GuidebookController, ModalId};
//!
//! let content = GuidebookContent::builtin().unwrap();
//! let mut controller = GuidebookController::new(content);
//!
//! controller.click_trigger("rules-btn");
//! assert!(controller.modals().is_visible(ModalId::Rules));
//!
//! controller.close_all();
//! assert!(!controller.modals().any_open());
//! ```

pub mod accordion;
pub mod content;
pub mod controller;
pub mod error;
pub mod gallery;
pub mod hero;
pub mod lightbox;
pub mod modal;
pub mod notice;
pub mod router;
pub mod share;
pub mod slider;

// Re-exports
pub use accordion::{AccordionGroup, AccordionRegistry, Section};
pub use content::{GuidebookContent, ImageRef, Placement};
pub use controller::{GuidebookController, OpenEffect};
pub use error::{GuidebookError, GuidebookResult};
pub use gallery::{Filter, GalleryFilter, TabSet, PANEL_INIT_DELAY};
pub use hero::{HeroSlideshow, HERO_INTERVAL, HERO_START_DELAY};
pub use lightbox::{Lightbox, LightboxPhase, LightboxTicket, LIGHTBOX_ACTIVATE_DELAY, LIGHTBOX_TRANSITION};
pub use modal::{ModalChange, ModalId, ModalManager};
pub use notice::{Notice, NoticeBoard, NoticeKind, NoticeTicket};
pub use router::{RouteIssue, RouteTable, BUTTON_ROUTES};
pub use share::{
    copy_link, share_or_copy, ClipboardError, ClipboardProvider, ClipboardSink, NativeShare,
    NoNativeShare, ShareError, ShareOutcome, SharePayload,
};
pub use slider::{Slider, SliderRegistry, SliderSpec};
