//! UI Controller
//!
//! Owns one instance of every sub-controller and applies the cross-cutting
//! rules between them: opening the rules or amenities panel readies its
//! accordion, opening the gallery or rooms panel asks the caller to wire the
//! sliders after [`PANEL_INIT_DELAY`](crate::gallery::PANEL_INIT_DELAY).

use std::collections::BTreeSet;

use crate::accordion::{AccordionGroup, AccordionRegistry};
use crate::content::GuidebookContent;
use crate::error::GuidebookResult;
use crate::gallery::{Filter, GalleryFilter, TabSet};
use crate::hero::HeroSlideshow;
use crate::lightbox::{Lightbox, LightboxTicket};
use crate::modal::{ModalChange, ModalId, ModalManager};
use crate::notice::{Notice, NoticeBoard, NoticeTicket};
use crate::router::{self, RouteIssue, RouteTable};
use crate::slider::{Slider, SliderRegistry};

/// Follow-up the caller has to schedule after a panel opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenEffect {
    None,
    /// Call [`GuidebookController::init_deferred`] after the layout delay.
    DeferInit(ModalId),
}

#[derive(Debug)]
pub struct GuidebookController {
    content: GuidebookContent,
    modals: ModalManager,
    routes: RouteTable,
    route_issues: Vec<RouteIssue>,
    accordions: AccordionRegistry,
    sliders: SliderRegistry,
    filter: GalleryFilter,
    gallery_tabs: TabSet,
    villa_tabs: TabSet,
    lightbox: Lightbox,
    hero: HeroSlideshow,
    notices: NoticeBoard,
    initialized: BTreeSet<ModalId>,
}

impl GuidebookController {
    pub fn new(content: GuidebookContent) -> Self {
        let present_modals = content.present_modals();
        let (routes, route_issues) = router::wire(&content.present_triggers(), &present_modals);
        let gallery_tabs = TabSet::new(content.gallery.sections.iter().map(|s| s.name.clone()));
        let villa_tabs = TabSet::new(content.villas.iter().map(|v| v.id.clone()));
        let hero = HeroSlideshow::new(content.hero_slides.len());

        tracing::info!(
            panels = present_modals.len(),
            routes = routes.len(),
            "guidebook controller ready"
        );

        Self {
            modals: ModalManager::new(present_modals),
            routes,
            route_issues,
            accordions: AccordionRegistry::default(),
            sliders: SliderRegistry::default(),
            filter: GalleryFilter::default(),
            gallery_tabs,
            villa_tabs,
            lightbox: Lightbox::default(),
            hero,
            notices: NoticeBoard::default(),
            initialized: BTreeSet::new(),
            content,
        }
    }

    pub fn content(&self) -> &GuidebookContent {
        &self.content
    }

    pub fn route_issues(&self) -> &[RouteIssue] {
        &self.route_issues
    }

    // === Modals ===

    pub fn modals(&self) -> &ModalManager {
        &self.modals
    }

    /// See [`ModalManager::subscribe`].
    pub fn on_any_open_changed(&mut self, observer: impl FnMut(bool) + 'static) {
        self.modals.subscribe(observer);
    }

    /// Click on a trigger element.
    pub fn click_trigger(&mut self, trigger: &str) -> OpenEffect {
        tracing::debug!("Button clicked: {}", trigger);
        match self.routes.route(trigger) {
            Ok(modal) => self.open(modal),
            Err(e) => {
                tracing::warn!("{}", e);
                OpenEffect::None
            }
        }
    }

    pub fn open(&mut self, modal: ModalId) -> OpenEffect {
        if self.modals.open(modal).is_none() {
            return OpenEffect::None;
        }
        self.after_open(modal)
    }

    pub fn close(&mut self, modal: ModalId) -> Option<ModalChange> {
        self.modals.close(modal)
    }

    pub fn close_all(&mut self) -> Vec<ModalChange> {
        self.modals.close_all()
    }

    /// Gallery's "view detailed room images" action.
    pub fn view_rooms_from_gallery(&mut self) -> OpenEffect {
        if self.modals.switch(ModalId::Gallery, ModalId::Rooms).is_none() {
            return OpenEffect::None;
        }
        self.after_open(ModalId::Rooms)
    }

    fn after_open(&mut self, modal: ModalId) -> OpenEffect {
        if modal.has_collapsible_content() {
            let categories = self.content.collapsible_categories(modal);
            self.accordions.ensure(modal.as_str(), categories);
        }
        if modal.has_deferred_gallery() && !self.initialized.contains(&modal) {
            return OpenEffect::DeferInit(modal);
        }
        OpenEffect::None
    }

    /// Wire the sliders of a gallery-style panel. Safe to call repeatedly.
    /// Returns the number of sliders created by this call.
    pub fn init_deferred(&mut self, modal: ModalId) -> GuidebookResult<usize> {
        let mut created = 0;
        for spec in self.content.slider_specs_for(modal) {
            if self.sliders.ensure(spec)? {
                created += 1;
            }
        }
        self.initialized.insert(modal);
        tracing::debug!(modal = %modal, created, "panel controls wired");
        Ok(created)
    }

    pub fn is_initialized(&self, modal: ModalId) -> bool {
        self.initialized.contains(&modal)
    }

    // === Collapsible sections ===

    pub fn accordion(&self, modal: ModalId) -> Option<&AccordionGroup> {
        self.accordions.group(modal.as_str())
    }

    pub fn toggle_section(&mut self, modal: ModalId, category: &str) -> Option<bool> {
        self.accordions.toggle(modal.as_str(), category)
    }

    // === Gallery ===

    pub fn filter(&self) -> &GalleryFilter {
        &self.filter
    }

    pub fn select_filter(&mut self, filter: Filter) {
        self.filter.select(filter);
    }

    pub fn gallery_tabs(&self) -> &TabSet {
        &self.gallery_tabs
    }

    pub fn select_gallery_tab(&mut self, name: &str) {
        if let Err(e) = self.gallery_tabs.select(name) {
            tracing::warn!("{}", e);
        }
    }

    pub fn villa_tabs(&self) -> &TabSet {
        &self.villa_tabs
    }

    pub fn select_villa_tab(&mut self, id: &str) {
        if let Err(e) = self.villa_tabs.select(id) {
            tracing::warn!("{}", e);
        }
    }

    pub fn slider(&self, container: &str) -> Option<&Slider> {
        self.sliders.get(container)
    }

    pub fn slider_next(&mut self, container: &str) -> Option<usize> {
        self.sliders.next(container)
    }

    pub fn slider_prev(&mut self, container: &str) -> Option<usize> {
        self.sliders.prev(container)
    }

    pub fn slider_jump(&mut self, container: &str, index: usize) -> Option<usize> {
        self.sliders.jump(container, index)
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn open_lightbox(&mut self, src: &str, alt: &str) -> LightboxTicket {
        self.lightbox.open(src, alt)
    }

    pub fn activate_lightbox(&mut self, ticket: LightboxTicket) -> bool {
        self.lightbox.activate(ticket)
    }

    pub fn close_lightbox(&mut self) -> Option<LightboxTicket> {
        self.lightbox.close()
    }

    pub fn finish_lightbox(&mut self, ticket: LightboxTicket) -> bool {
        self.lightbox.finish(ticket)
    }

    /// Room card click. Rooms still under construction yield a notice to show.
    pub fn select_room(&self, room_id: &str) -> Option<Notice> {
        let room = self
            .content
            .villas
            .iter()
            .flat_map(|v| v.rooms.iter())
            .find(|r| r.id == room_id)?;
        if room.coming_soon {
            return Some(Notice::coming_soon(&room.name));
        }
        tracing::debug!("Room selected: {}", room_id);
        None
    }

    // === Hero ===

    pub fn hero(&self) -> &HeroSlideshow {
        &self.hero
    }

    pub fn advance_hero(&mut self) -> usize {
        self.hero.advance()
    }

    // === Notices ===

    pub fn notice(&self) -> Option<&Notice> {
        self.notices.current()
    }

    pub fn post_notice(&mut self, notice: Notice) -> NoticeTicket {
        self.notices.post(notice)
    }

    pub fn dismiss_notice(&mut self, ticket: NoticeTicket) -> bool {
        self.notices.dismiss(ticket)
    }
}
