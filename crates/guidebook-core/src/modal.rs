//! Modal Manager
//!
//! Tracks which overlay panels are visible and tells observers whenever the
//! "any modal open" state flips. The sticky back affordance and the page-level
//! scroll lock both hang off that single flag.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GuidebookError;

/// Identifier of an overlay panel on the guidebook page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ModalId {
    #[serde(rename = "book-now-modal")]
    BookNow,
    #[serde(rename = "reviews-modal")]
    Reviews,
    #[serde(rename = "nearby-modal")]
    Nearby,
    #[serde(rename = "emergency-modal")]
    Emergency,
    #[serde(rename = "rules-modal")]
    Rules,
    #[serde(rename = "specials-modal")]
    Specials,
    #[serde(rename = "host-favorites-modal")]
    HostFavorites,
    #[serde(rename = "gallery-modal")]
    Gallery,
    #[serde(rename = "amenities-modal")]
    Amenities,
    #[serde(rename = "prices-modal")]
    Prices,
    #[serde(rename = "rooms-modal")]
    Rooms,
}

impl ModalId {
    pub const ALL: [ModalId; 11] = [
        ModalId::BookNow,
        ModalId::Reviews,
        ModalId::Nearby,
        ModalId::Emergency,
        ModalId::Rules,
        ModalId::Specials,
        ModalId::HostFavorites,
        ModalId::Gallery,
        ModalId::Amenities,
        ModalId::Prices,
        ModalId::Rooms,
    ];

    /// Element id of the panel, e.g. `rules-modal`
    pub fn as_str(&self) -> &'static str {
        match self {
            ModalId::BookNow => "book-now-modal",
            ModalId::Reviews => "reviews-modal",
            ModalId::Nearby => "nearby-modal",
            ModalId::Emergency => "emergency-modal",
            ModalId::Rules => "rules-modal",
            ModalId::Specials => "specials-modal",
            ModalId::HostFavorites => "host-favorites-modal",
            ModalId::Gallery => "gallery-modal",
            ModalId::Amenities => "amenities-modal",
            ModalId::Prices => "prices-modal",
            ModalId::Rooms => "rooms-modal",
        }
    }

    /// Panels whose content is a collapsible category list.
    pub fn has_collapsible_content(&self) -> bool {
        matches!(self, ModalId::Rules | ModalId::Amenities)
    }

    /// Panels whose sliders and filters are wired after a short layout delay.
    pub fn has_deferred_gallery(&self) -> bool {
        matches!(self, ModalId::Gallery | ModalId::Rooms)
    }
}

impl fmt::Display for ModalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModalId {
    type Err = GuidebookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModalId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| GuidebookError::UnknownModal(s.to_string()))
    }
}

/// Result of a visibility change on one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalChange {
    pub modal: ModalId,
    pub visible: bool,
    /// "Any modal open" after the change
    pub any_open: bool,
}

type Observer = Box<dyn FnMut(bool)>;

/// Show/hide state for every registered panel.
///
/// Only panels passed to [`ModalManager::new`] exist; operations on anything
/// else are logged and ignored.
pub struct ModalManager {
    panels: BTreeMap<ModalId, bool>,
    observers: Vec<Observer>,
}

impl fmt::Debug for ModalManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalManager")
            .field("panels", &self.panels)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl ModalManager {
    pub fn new(panels: impl IntoIterator<Item = ModalId>) -> Self {
        Self {
            panels: panels.into_iter().map(|id| (id, false)).collect(),
            observers: Vec::new(),
        }
    }

    /// Register a callback fired with the new "any open" value each time it flips.
    pub fn subscribe(&mut self, observer: impl FnMut(bool) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn contains(&self, id: ModalId) -> bool {
        self.panels.contains_key(&id)
    }

    pub fn is_visible(&self, id: ModalId) -> bool {
        self.panels.get(&id).copied().unwrap_or(false)
    }

    pub fn any_open(&self) -> bool {
        self.panels.values().any(|visible| *visible)
    }

    /// Visible panels in a stable order.
    pub fn open_panels(&self) -> Vec<ModalId> {
        self.panels
            .iter()
            .filter(|(_, visible)| **visible)
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn open(&mut self, id: ModalId) -> Option<ModalChange> {
        self.set_visible(id, true)
    }

    pub fn close(&mut self, id: ModalId) -> Option<ModalChange> {
        self.set_visible(id, false)
    }

    /// Open by element id. Unknown names are a no-op.
    pub fn open_named(&mut self, name: &str) -> Option<ModalChange> {
        match name.parse::<ModalId>() {
            Ok(id) => self.open(id),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        }
    }

    /// Close every visible panel (sticky back affordance).
    pub fn close_all(&mut self) -> Vec<ModalChange> {
        self.open_panels()
            .into_iter()
            .filter_map(|id| self.close(id))
            .collect()
    }

    /// Hide `from` and show `to` without the back affordance flickering off.
    pub fn switch(&mut self, from: ModalId, to: ModalId) -> Option<ModalChange> {
        if !self.contains(to) {
            tracing::warn!("Modal not found: {}", to);
            return None;
        }
        let before = self.any_open();
        if let Some(visible) = self.panels.get_mut(&from) {
            *visible = false;
        }
        if let Some(visible) = self.panels.get_mut(&to) {
            *visible = true;
        }
        tracing::debug!(from = %from, to = %to, "switched modal");
        self.notify_if_changed(before);
        Some(ModalChange {
            modal: to,
            visible: true,
            any_open: true,
        })
    }

    fn set_visible(&mut self, id: ModalId, visible: bool) -> Option<ModalChange> {
        let before = self.any_open();
        let Some(slot) = self.panels.get_mut(&id) else {
            tracing::warn!("Modal not found: {}", id);
            return None;
        };
        *slot = visible;
        tracing::debug!(modal = %id, visible, "modal visibility changed");

        self.notify_if_changed(before);
        Some(ModalChange {
            modal: id,
            visible,
            any_open: self.any_open(),
        })
    }

    fn notify_if_changed(&mut self, before: bool) {
        let after = self.any_open();
        if before != after {
            for observer in self.observers.iter_mut() {
                observer(after);
            }
        }
    }
}

impl Default for ModalManager {
    fn default() -> Self {
        Self::new(ModalId::ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn parse_round_trips_element_ids() {
        for id in ModalId::ALL {
            assert_eq!(id.as_str().parse::<ModalId>().unwrap(), id);
        }
        assert!("spa-modal".parse::<ModalId>().is_err());
    }

    #[test]
    fn open_then_close_clears_any_open() {
        let mut modals = ModalManager::default();
        let change = modals.open(ModalId::Reviews).unwrap();
        assert!(change.visible);
        assert!(change.any_open);
        assert!(modals.is_visible(ModalId::Reviews));

        let change = modals.close(ModalId::Reviews).unwrap();
        assert!(!change.visible);
        assert!(!change.any_open);
        assert!(!modals.any_open());
    }

    #[test]
    fn closing_one_of_two_keeps_flag() {
        let mut modals = ModalManager::default();
        modals.open(ModalId::Rules);
        modals.open(ModalId::Prices);
        let change = modals.close(ModalId::Rules).unwrap();
        assert!(change.any_open);
        assert_eq!(modals.open_panels(), vec![ModalId::Prices]);
    }

    #[test]
    fn unregistered_panel_is_noop() {
        let mut modals = ModalManager::new([ModalId::Rules]);
        assert!(modals.open(ModalId::Gallery).is_none());
        assert!(modals.open_named("spa-modal").is_none());
        assert!(!modals.any_open());
    }

    #[test]
    fn observers_fire_only_on_flip() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut modals = ModalManager::default();
        modals.subscribe(move |open| sink.borrow_mut().push(open));

        modals.open(ModalId::Rules);
        modals.open(ModalId::Nearby);
        modals.close(ModalId::Rules);
        modals.close(ModalId::Nearby);

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn close_all_hides_everything() {
        let mut modals = ModalManager::default();
        modals.open(ModalId::Gallery);
        modals.open(ModalId::Emergency);
        let changes = modals.close_all();
        assert_eq!(changes.len(), 2);
        assert!(!modals.any_open());
    }

    #[test]
    fn switch_keeps_back_affordance_on() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut modals = ModalManager::default();
        modals.subscribe(move |open| sink.borrow_mut().push(open));

        modals.open(ModalId::Gallery);
        modals.switch(ModalId::Gallery, ModalId::Rooms).unwrap();

        assert!(!modals.is_visible(ModalId::Gallery));
        assert!(modals.is_visible(ModalId::Rooms));
        assert_eq!(*seen.borrow(), vec![true]);
    }
}
