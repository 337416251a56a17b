//! Collapsible Section Controller
//!
//! Accordion groups for the rules and amenities panels. Within one group at
//! most one section is expanded.

use std::collections::BTreeMap;

use crate::error::{GuidebookError, GuidebookResult};

/// Rotation of the disclosure indicator for an expanded section, in degrees.
pub const EXPANDED_ROTATION: u16 = 180;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub category: String,
    pub expanded: bool,
}

impl Section {
    pub fn indicator_rotation(&self) -> u16 {
        if self.expanded {
            EXPANDED_ROTATION
        } else {
            0
        }
    }
}

/// One container's sections, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionGroup {
    sections: Vec<Section>,
}

impl AccordionGroup {
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: categories
                .into_iter()
                .map(|c| Section {
                    category: c.into(),
                    expanded: false,
                })
                .collect(),
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, category: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.category == category)
    }

    pub fn is_expanded(&self, category: &str) -> bool {
        self.section(category).is_some_and(|s| s.expanded)
    }

    pub fn expanded(&self) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.expanded)
            .map(|s| s.category.as_str())
    }

    /// Header click. Returns the section's new expanded state.
    pub fn toggle(&mut self, category: &str) -> GuidebookResult<bool> {
        let idx = self
            .sections
            .iter()
            .position(|s| s.category == category)
            .ok_or_else(|| GuidebookError::UnknownCategory(category.to_string()))?;

        for (i, section) in self.sections.iter_mut().enumerate() {
            if i != idx {
                section.expanded = false;
            }
        }
        let section = &mut self.sections[idx];
        section.expanded = !section.expanded;
        tracing::debug!(category, expanded = section.expanded, "toggled section");
        Ok(section.expanded)
    }

    pub fn collapse_all(&mut self) {
        for section in self.sections.iter_mut() {
            section.expanded = false;
        }
    }
}

/// Accordion groups keyed by container, initialized at most once each.
#[derive(Debug, Clone, Default)]
pub struct AccordionRegistry {
    groups: BTreeMap<String, AccordionGroup>,
}

impl AccordionRegistry {
    /// Initialize `container` if it has not been already. Returns `true` when
    /// this call did the initialization.
    pub fn ensure<I, S>(&mut self, container: &str, categories: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.groups.contains_key(container) {
            return false;
        }
        let group = AccordionGroup::new(categories);
        tracing::debug!(container, sections = group.sections.len(), "initialized accordion");
        self.groups.insert(container.to_string(), group);
        true
    }

    pub fn is_initialized(&self, container: &str) -> bool {
        self.groups.contains_key(container)
    }

    pub fn group(&self, container: &str) -> Option<&AccordionGroup> {
        self.groups.get(container)
    }

    /// Toggle a section. Clicks on an uninitialized container or unknown
    /// category are logged and ignored.
    pub fn toggle(&mut self, container: &str, category: &str) -> Option<bool> {
        let Some(group) = self.groups.get_mut(container) else {
            tracing::warn!("Collapsible container not initialized: {}", container);
            return None;
        };
        match group.toggle(category) {
            Ok(expanded) => Some(expanded),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expanding_collapses_siblings() {
        let mut group = AccordionGroup::new(["Quiet Hours", "Pets", "Pool"]);
        assert!(group.toggle("Quiet Hours").unwrap());
        assert!(group.toggle("Pets").unwrap());
        assert!(!group.is_expanded("Quiet Hours"));
        assert_eq!(group.expanded(), Some("Pets"));
    }

    #[test]
    fn second_click_collapses() {
        let mut group = AccordionGroup::new(["Pets"]);
        group.toggle("Pets").unwrap();
        assert_eq!(group.section("Pets").unwrap().indicator_rotation(), 180);
        assert!(!group.toggle("Pets").unwrap());
        assert_eq!(group.section("Pets").unwrap().indicator_rotation(), 0);
        assert_eq!(group.expanded(), None);
    }

    #[test]
    fn unknown_category_errors() {
        let mut group = AccordionGroup::new(["Pets"]);
        assert!(matches!(
            group.toggle("Parking"),
            Err(GuidebookError::UnknownCategory(_))
        ));
    }

    #[test]
    fn ensure_is_idempotent_and_keeps_state() {
        let mut registry = AccordionRegistry::default();
        assert!(registry.ensure("rules-modal", ["Quiet Hours", "Pets"]));
        registry.toggle("rules-modal", "Pets");

        assert!(!registry.ensure("rules-modal", ["Quiet Hours", "Pets"]));
        let group = registry.group("rules-modal").unwrap();
        assert_eq!(group.sections().len(), 2);
        assert!(group.is_expanded("Pets"));
    }

    #[test]
    fn toggle_on_uninitialized_container_is_ignored() {
        let mut registry = AccordionRegistry::default();
        assert_eq!(registry.toggle("amenities-modal", "Kitchen"), None);
    }
}
