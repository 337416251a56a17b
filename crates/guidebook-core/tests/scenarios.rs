//! End-to-end click scenarios against the controller and the share action.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use guidebook_core::{
    share_or_copy, ClipboardError, ClipboardProvider, ClipboardSink, Filter, GuidebookContent,
    GuidebookController, ModalId, NativeShare, NoNativeShare, NoticeKind, OpenEffect, ShareError,
    ShareOutcome, SharePayload,
};

fn controller() -> GuidebookController {
    GuidebookController::new(GuidebookContent::builtin().expect("builtin content"))
}

fn payload() -> SharePayload {
    GuidebookContent::builtin().unwrap().share_payload()
}

// ============================================================================
// Test doubles
// ============================================================================

/// Clipboard that counts live handles and records what was written.
#[derive(Default)]
struct RecordingClipboard {
    live: Rc<Cell<usize>>,
    written: Rc<RefCell<Vec<String>>>,
    refuse: bool,
}

struct RecordingSink {
    live: Rc<Cell<usize>>,
    written: Rc<RefCell<Vec<String>>>,
    refuse: bool,
}

impl Drop for RecordingSink {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

impl ClipboardSink for RecordingSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.refuse {
            return Err(ClipboardError::Rejected("denied".to_string()));
        }
        self.written.borrow_mut().push(text.to_string());
        Ok(())
    }
}

impl ClipboardProvider for RecordingClipboard {
    type Sink = RecordingSink;

    fn open(&self) -> Result<Self::Sink, ClipboardError> {
        self.live.set(self.live.get() + 1);
        Ok(RecordingSink {
            live: self.live.clone(),
            written: self.written.clone(),
            refuse: self.refuse,
        })
    }
}

struct ShareSheet {
    result: Result<(), ShareError>,
    calls: Cell<usize>,
}

impl NativeShare for ShareSheet {
    fn can_share(&self, payload: &SharePayload) -> bool {
        !payload.url.is_empty()
    }

    async fn share(&self, _payload: &SharePayload) -> Result<(), ShareError> {
        self.calls.set(self.calls.get() + 1);
        self.result.clone()
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn filter_villa_then_all() {
    let mut ctl = controller();
    assert_eq!(ctl.click_trigger("gallery-card"), OpenEffect::DeferInit(ModalId::Gallery));
    ctl.init_deferred(ModalId::Gallery).unwrap();

    let categories: Vec<String> = ctl
        .content()
        .gallery
        .items
        .iter()
        .map(|i| i.category.clone())
        .collect();
    let all: Vec<usize> = (0..categories.len()).collect();

    ctl.select_filter(Filter::parse("villa"));
    let shown = ctl.filter().visible(categories.iter().map(String::as_str));
    assert!(!shown.is_empty());
    assert!(shown.iter().all(|i| categories[*i] == "villa"));
    assert_eq!(
        shown.len(),
        categories.iter().filter(|c| *c == "villa").count()
    );

    ctl.select_filter(Filter::parse("all"));
    assert_eq!(ctl.filter().visible(categories.iter().map(String::as_str)), all);
}

#[test]
fn four_image_villa_slider_counter() {
    let mut ctl = controller();
    ctl.click_trigger("rooms-card");
    ctl.init_deferred(ModalId::Rooms).unwrap();

    let container = ctl.content().villas[0].slider_container();
    assert_eq!(ctl.slider(&container).unwrap().len(), 4);

    assert_eq!(ctl.slider_next(&container), Some(1));
    assert_eq!(
        ctl.slider(&container).unwrap().counter_text().as_deref(),
        Some("2 / 4")
    );

    for _ in 0..3 {
        ctl.slider_next(&container);
    }
    let slider = ctl.slider(&container).unwrap();
    assert_eq!(slider.index(), 0);
    assert_eq!(slider.counter_text().as_deref(), Some("1 / 4"));
}

#[test]
fn rules_quiet_hours_then_pets() {
    let mut ctl = controller();
    ctl.click_trigger("rules-btn");

    assert_eq!(ctl.toggle_section(ModalId::Rules, "Quiet Hours"), Some(true));
    assert_eq!(ctl.toggle_section(ModalId::Rules, "Pets"), Some(true));

    let group = ctl.accordion(ModalId::Rules).unwrap();
    assert!(!group.is_expanded("Quiet Hours"));
    assert!(group.is_expanded("Pets"));
    assert_eq!(group.section("Pets").unwrap().indicator_rotation(), 180);
    assert_eq!(group.section("Quiet Hours").unwrap().indicator_rotation(), 0);
}

#[test]
fn back_affordance_follows_modals() {
    let mut ctl = controller();
    let back_visible = Rc::new(Cell::new(false));
    let flag = back_visible.clone();
    ctl.on_any_open_changed(move |open| flag.set(open));

    ctl.click_trigger("reviews-btn");
    ctl.click_trigger("emergency-btn");
    assert!(back_visible.get());

    ctl.close(ModalId::Reviews);
    assert!(back_visible.get());

    ctl.close_all();
    assert!(!back_visible.get());
}

#[test]
fn gallery_tabs_do_not_touch_sliders() {
    let mut ctl = controller();
    ctl.open(ModalId::Gallery);
    ctl.init_deferred(ModalId::Gallery).unwrap();

    let villa = ctl.content().gallery.sections[0].slider_container();
    ctl.slider_next(&villa);
    ctl.select_gallery_tab("farmstay");
    assert!(ctl.gallery_tabs().is_active("farmstay"));
    ctl.select_gallery_tab("villa");
    assert_eq!(ctl.slider(&villa).unwrap().index(), 1);
}

// ============================================================================
// Share
// ============================================================================

#[tokio::test]
async fn without_share_sheet_link_is_copied() {
    let clipboard = RecordingClipboard::default();
    let payload = payload();

    let outcome = share_or_copy(&payload, &NoNativeShare, &clipboard).await;

    assert_eq!(outcome, ShareOutcome::Copied);
    assert_eq!(*clipboard.written.borrow(), vec![payload.url.clone()]);
    assert_eq!(clipboard.live.get(), 0);
    assert_eq!(outcome.notice().unwrap().kind, NoticeKind::Success);
}

#[tokio::test]
async fn refused_copy_still_releases_handle() {
    let clipboard = RecordingClipboard {
        refuse: true,
        ..Default::default()
    };
    let outcome = share_or_copy(&payload(), &NoNativeShare, &clipboard).await;

    assert!(matches!(outcome, ShareOutcome::CopyRejected(_)));
    assert_eq!(clipboard.live.get(), 0);
    assert_eq!(outcome.notice().unwrap().kind, NoticeKind::Failure);
}

#[tokio::test]
async fn accepted_share_skips_clipboard() {
    let clipboard = RecordingClipboard::default();
    let sheet = ShareSheet {
        result: Ok(()),
        calls: Cell::new(0),
    };
    let outcome = share_or_copy(&payload(), &sheet, &clipboard).await;

    assert_eq!(outcome, ShareOutcome::Shared);
    assert_eq!(sheet.calls.get(), 1);
    assert!(clipboard.written.borrow().is_empty());
}

#[tokio::test]
async fn cancelled_share_falls_back_to_copy() {
    let clipboard = RecordingClipboard::default();
    let sheet = ShareSheet {
        result: Err(ShareError::Cancelled),
        calls: Cell::new(0),
    };
    let outcome = share_or_copy(&payload(), &sheet, &clipboard).await;

    assert_eq!(outcome, ShareOutcome::Copied);
    assert_eq!(sheet.calls.get(), 1);
    assert_eq!(clipboard.written.borrow().len(), 1);
}

#[tokio::test]
async fn share_sheet_refusing_payload_is_not_called() {
    let clipboard = RecordingClipboard::default();
    let sheet = ShareSheet {
        result: Ok(()),
        calls: Cell::new(0),
    };
    let mut payload = payload();
    payload.url.clear();

    let outcome = share_or_copy(&payload, &sheet, &clipboard).await;
    assert_eq!(sheet.calls.get(), 0);
    assert_eq!(outcome, ShareOutcome::Copied);
}
