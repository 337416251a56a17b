//! UI Components for the guidebook.
//!
//! Every component reads and mutates the shared controller from context;
//! none of them keep interaction state of their own.

mod collapsible;
mod gallery;
mod hero;
mod image_slider;
mod info_panel;
mod lightbox;
mod modal_panel;
mod notice;
mod rooms;
mod share_button;
mod trigger;

pub use collapsible::CollapsibleList;
pub use gallery::GalleryModal;
pub use hero::HeroSlideshow;
pub use image_slider::ImageSlider;
pub use info_panel::InfoPanelBody;
pub use lightbox::Lightbox;
pub use modal_panel::{ModalPanel, StickyBackButton};
pub use notice::NoticeToast;
pub use rooms::RoomsModal;
pub use share_button::ShareButton;
pub use trigger::TriggerButton;
