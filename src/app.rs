use dioxus::prelude::*;
use guidebook_core::notice::mobile_notice_applies;
use guidebook_core::{GuidebookController, ModalId, Notice, Placement};

use crate::components::{
    CollapsibleList, GalleryModal, HeroSlideshow, InfoPanelBody, Lightbox, ModalPanel,
    NoticeToast, RoomsModal, StickyBackButton, TriggerButton,
};
use crate::context::{build_controller, get_content, get_window_width, show_notice};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the controller context, and lays out the page:
/// hero, quick actions, card grid, footer, then every overlay.
#[component]
pub fn App() -> Element {
    let modal_open: Signal<bool> = use_signal(|| false);
    let controller: Signal<GuidebookController> = use_signal(move || build_controller(modal_open));

    use_context_provider(|| modal_open);
    use_context_provider(|| controller);

    // Mobile-view notice on wide windows
    use_future(move || async move {
        if mobile_notice_applies(get_window_width()) {
            show_notice(controller, Notice::mobile_view());
        }
    });

    let content = get_content();
    let modals = content.present_modals();
    let page_class = if modal_open() { "guidebook modal-open" } else { "guidebook" };

    rsx! {
        style { {GLOBAL_STYLES} }

        div { class: "{page_class}",
            HeroSlideshow {}

            nav { class: "quick-actions",
                for trigger in content.triggers_at(Placement::Header) {
                    TriggerButton {
                        key: "{trigger.id}",
                        id: trigger.id.clone(),
                        label: trigger.label.clone(),
                        icon: trigger.icon.clone().unwrap_or_default(),
                    }
                }
            }

            main { class: "cards-grid",
                for trigger in content.triggers_at(Placement::Card) {
                    TriggerButton {
                        key: "{trigger.id}",
                        id: trigger.id.clone(),
                        label: trigger.label.clone(),
                        icon: trigger.icon.clone().unwrap_or_default(),
                        class: "info-card".to_string(),
                    }
                }
            }

            footer { class: "page-footer",
                for trigger in content.triggers_at(Placement::Footer) {
                    TriggerButton {
                        key: "{trigger.id}",
                        id: trigger.id.clone(),
                        label: trigger.label.clone(),
                        icon: trigger.icon.clone().unwrap_or_default(),
                        class: "footer-btn".to_string(),
                    }
                }
                p { class: "footer-note", "{content.property.name} · {content.property.location}" }
            }

            for panel in content.panels.iter() {
                ModalPanel {
                    key: "{panel.modal}",
                    modal: panel.modal,
                    title: panel.title.clone(),
                    InfoPanelBody { body: panel.body.clone() }
                }
            }

            if modals.contains(&ModalId::Rules) {
                ModalPanel { modal: ModalId::Rules, title: "House Rules".to_string(),
                    CollapsibleList { modal: ModalId::Rules }
                }
            }

            if modals.contains(&ModalId::Amenities) {
                ModalPanel { modal: ModalId::Amenities, title: "Amenities".to_string(),
                    CollapsibleList { modal: ModalId::Amenities }
                }
            }

            if modals.contains(&ModalId::Gallery) {
                ModalPanel { modal: ModalId::Gallery, title: "Gallery".to_string(),
                    GalleryModal {}
                }
            }

            if modals.contains(&ModalId::Rooms) {
                ModalPanel { modal: ModalId::Rooms, title: "Rooms".to_string(),
                    RoomsModal {}
                }
            }

            StickyBackButton {}
            Lightbox {}
            NoticeToast {}
        }
    }
}
