//! Share Button Component
//!
//! Shares the guidebook link. The desktop has no share sheet, so the link
//! goes to the clipboard and a notice reports the result.

use dioxus::prelude::*;
use guidebook_core::{
    share_or_copy, ClipboardError, ClipboardProvider, ClipboardSink, NoNativeShare,
};

use crate::context::{get_content, show_notice, use_controller};

/// System clipboard via arboard, opened per copy.
pub struct DesktopClipboard;

pub struct DesktopClipboardHandle(arboard::Clipboard);

impl ClipboardProvider for DesktopClipboard {
    type Sink = DesktopClipboardHandle;

    fn open(&self) -> Result<Self::Sink, ClipboardError> {
        arboard::Clipboard::new()
            .map(DesktopClipboardHandle)
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

impl ClipboardSink for DesktopClipboardHandle {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.0
            .set_text(text)
            .map_err(|e| ClipboardError::Rejected(e.to_string()))
    }
}

#[component]
pub fn ShareButton() -> Element {
    let controller = use_controller();
    let mut sharing = use_signal(|| false);

    let share = move |_| {
        sharing.set(true);
        spawn(async move {
            let payload = get_content().share_payload();
            let outcome = share_or_copy(&payload, &NoNativeShare, &DesktopClipboard).await;
            if let Some(notice) = outcome.notice() {
                show_notice(controller, notice);
            }
            sharing.set(false);
        });
    };

    rsx! {
        button {
            id: "share-btn",
            class: "share-btn",
            disabled: sharing(),
            onclick: share,
            "Share"
        }
    }
}
