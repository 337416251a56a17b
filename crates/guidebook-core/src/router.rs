//! Button Router
//!
//! Static mapping from trigger element ids to the panel each one opens.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{GuidebookError, GuidebookResult};
use crate::modal::ModalId;

/// Every trigger the page may render, with its target panel.
pub const BUTTON_ROUTES: &[(&str, ModalId)] = &[
    ("book-now-btn", ModalId::BookNow),
    ("book-now-footer-btn", ModalId::BookNow),
    ("reviews-btn", ModalId::Reviews),
    ("nearby-btn", ModalId::Nearby),
    ("emergency-btn", ModalId::Emergency),
    ("rules-btn", ModalId::Rules),
    ("specials-btn", ModalId::Specials),
    ("host-favorites", ModalId::HostFavorites),
    ("gallery-card", ModalId::Gallery),
    ("amenities-card", ModalId::Amenities),
    ("prices-card", ModalId::Prices),
    ("rooms-card", ModalId::Rooms),
];

/// Why a mapping entry could not be wired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteIssue {
    MissingTrigger(&'static str),
    MissingModal {
        trigger: &'static str,
        modal: ModalId,
    },
}

/// Routes that survived wiring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: BTreeMap<&'static str, ModalId>,
}

impl RouteTable {
    /// Resolve a click on `trigger` to its panel.
    pub fn route(&self, trigger: &str) -> GuidebookResult<ModalId> {
        self.routes
            .get(trigger)
            .copied()
            .ok_or_else(|| GuidebookError::UnknownTrigger(trigger.to_string()))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn triggers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.keys().copied()
    }
}

/// Wire every mapping entry whose trigger and panel are both present.
///
/// Absent pieces are logged and reported back; they never fail the page.
pub fn wire(
    present_triggers: &BTreeSet<&str>,
    present_modals: &BTreeSet<ModalId>,
) -> (RouteTable, Vec<RouteIssue>) {
    let mut table = RouteTable::default();
    let mut issues = Vec::new();

    for &(trigger, modal) in BUTTON_ROUTES {
        if !present_triggers.contains(trigger) {
            tracing::warn!("Button not found: {}", trigger);
            issues.push(RouteIssue::MissingTrigger(trigger));
            continue;
        }
        if !present_modals.contains(&modal) {
            tracing::warn!("Modal not found: {} (trigger {})", modal, trigger);
            issues.push(RouteIssue::MissingModal { trigger, modal });
            continue;
        }
        table.routes.insert(trigger, modal);
    }

    tracing::debug!(routes = table.len(), issues = issues.len(), "wired buttons");
    (table, issues)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_modals() -> BTreeSet<ModalId> {
        ModalId::ALL.into_iter().collect()
    }

    #[test]
    fn full_page_wires_every_route() {
        let triggers: BTreeSet<&str> = BUTTON_ROUTES.iter().map(|(t, _)| *t).collect();
        let (table, issues) = wire(&triggers, &all_modals());
        assert!(issues.is_empty());
        assert_eq!(table.len(), BUTTON_ROUTES.len());
        assert_eq!(table.route("host-favorites").unwrap(), ModalId::HostFavorites);
        assert_eq!(table.route("book-now-footer-btn").unwrap(), ModalId::BookNow);
    }

    #[test]
    fn missing_pieces_are_reported_not_fatal() {
        let triggers: BTreeSet<&str> = ["reviews-btn", "rules-btn"].into_iter().collect();
        let modals: BTreeSet<ModalId> = [ModalId::Reviews].into_iter().collect();
        let (table, issues) = wire(&triggers, &modals);

        assert_eq!(table.len(), 1);
        assert!(issues.contains(&RouteIssue::MissingModal {
            trigger: "rules-btn",
            modal: ModalId::Rules,
        }));
        assert!(issues.contains(&RouteIssue::MissingTrigger("gallery-card")));
        assert!(matches!(
            table.route("rules-btn"),
            Err(GuidebookError::UnknownTrigger(_))
        ));
    }
}
