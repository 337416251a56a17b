//! Guidebook content model
//!
//! Everything the page shows: property details, trigger cards, panel bodies,
//! rule and amenity categories, gallery, villas and rooms. A built-in copy is
//! compiled in; a JSON file with the same shape can replace it.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GuidebookError, GuidebookResult};
use crate::gallery::Filter;
use crate::modal::ModalId;
use crate::share::SharePayload;
use crate::slider::SliderSpec;

/// Built-in guidebook content.
pub const BUILTIN_CONTENT: &str = include_str!("../assets/guidebook.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub location: String,
    pub tagline: String,
    /// Text sent along with the link when sharing
    pub share_text: String,
    /// Public address of the guidebook
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

/// A clickable element that opens a panel. `id` is looked up in the router.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub placement: Placement,
}

/// Where a trigger is rendered on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Quick-action row under the hero
    #[default]
    Header,
    /// Main card grid
    Card,
    Footer,
}

/// A panel whose body is plain markdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoPanel {
    pub modal: ModalId,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub src: String,
    #[serde(default)]
    pub alt: String,
    pub category: String,
}

/// Tabbed gallery section with its own slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GallerySection {
    pub name: String,
    pub label: String,
    pub images: Vec<ImageRef>,
}

impl GallerySection {
    pub fn slider_container(&self) -> String {
        format!("{}-section-slider", self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gallery {
    #[serde(default)]
    pub filters: Vec<FilterButton>,
    #[serde(default)]
    pub items: Vec<GalleryItem>,
    #[serde(default)]
    pub sections: Vec<GallerySection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterButton {
    pub filter: Filter,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<ImageRef>,
    /// Under construction; selecting it posts a notice instead
    #[serde(default)]
    pub coming_soon: bool,
}

impl Room {
    pub fn slider_container(&self) -> String {
        format!("room-{}-gallery", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Villa {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub images: Vec<ImageRef>,
    #[serde(default)]
    pub rooms: Vec<Room>,
}

impl Villa {
    pub fn slider_container(&self) -> String {
        format!("villa-{}-slider", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidebookContent {
    pub property: Property,
    #[serde(default)]
    pub hero_slides: Vec<ImageRef>,
    #[serde(default)]
    pub triggers: Vec<Trigger>,
    #[serde(default)]
    pub panels: Vec<InfoPanel>,
    #[serde(default)]
    pub rules: Vec<Category>,
    #[serde(default)]
    pub amenities: Vec<Category>,
    #[serde(default)]
    pub gallery: Gallery,
    #[serde(default)]
    pub villas: Vec<Villa>,
}

impl GuidebookContent {
    pub fn builtin() -> GuidebookResult<Self> {
        Self::from_json(BUILTIN_CONTENT)
    }

    pub fn from_json(json: &str) -> GuidebookResult<Self> {
        let content: Self = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    pub fn from_path(path: impl AsRef<Path>) -> GuidebookResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        tracing::info!("Loaded content from {:?}", path.as_ref());
        Self::from_json(&json)
    }

    /// Reject content the sliders and tabs cannot represent.
    pub fn validate(&self) -> GuidebookResult<()> {
        let mut containers = BTreeSet::new();
        for spec in self.slider_specs() {
            if spec.image_count == 0 {
                return Err(GuidebookError::Content(format!(
                    "slider '{}' has no images",
                    spec.container
                )));
            }
            if !containers.insert(spec.container.clone()) {
                return Err(GuidebookError::Content(format!(
                    "duplicate slider '{}'",
                    spec.container
                )));
            }
        }

        let mut triggers = BTreeSet::new();
        for trigger in &self.triggers {
            if !triggers.insert(trigger.id.as_str()) {
                return Err(GuidebookError::Content(format!(
                    "duplicate trigger '{}'",
                    trigger.id
                )));
            }
        }

        let mut panels = BTreeSet::new();
        for panel in &self.panels {
            if !panels.insert(panel.modal) {
                return Err(GuidebookError::Content(format!(
                    "duplicate panel '{}'",
                    panel.modal
                )));
            }
        }
        Ok(())
    }

    pub fn share_payload(&self) -> SharePayload {
        SharePayload {
            title: format!("{} - Digital Guidebook", self.property.name),
            text: self.property.share_text.clone(),
            url: self.property.url.clone(),
        }
    }

    pub fn panel(&self, modal: ModalId) -> Option<&InfoPanel> {
        self.panels.iter().find(|p| p.modal == modal)
    }

    /// Panels this content renders.
    pub fn present_modals(&self) -> BTreeSet<ModalId> {
        let mut modals: BTreeSet<ModalId> = self.panels.iter().map(|p| p.modal).collect();
        if !self.rules.is_empty() {
            modals.insert(ModalId::Rules);
        }
        if !self.amenities.is_empty() {
            modals.insert(ModalId::Amenities);
        }
        if !self.gallery.items.is_empty() || !self.gallery.sections.is_empty() {
            modals.insert(ModalId::Gallery);
        }
        if !self.villas.is_empty() {
            modals.insert(ModalId::Rooms);
        }
        modals
    }

    pub fn triggers_at(&self, placement: Placement) -> impl Iterator<Item = &Trigger> + '_ {
        self.triggers.iter().filter(move |t| t.placement == placement)
    }

    pub fn present_triggers(&self) -> BTreeSet<&str> {
        self.triggers.iter().map(|t| t.id.as_str()).collect()
    }

    /// Category names of the collapsible list shown in `modal`.
    pub fn collapsible_categories(&self, modal: ModalId) -> Vec<String> {
        let categories = match modal {
            ModalId::Rules => &self.rules,
            ModalId::Amenities => &self.amenities,
            _ => return Vec::new(),
        };
        categories.iter().map(|c| c.name.clone()).collect()
    }

    /// Every slider on the page, across the gallery and rooms panels.
    pub fn slider_specs(&self) -> Vec<SliderSpec> {
        let mut specs: Vec<SliderSpec> = self
            .gallery
            .sections
            .iter()
            .map(|s| SliderSpec::thumbnailed(s.slider_container(), s.images.len()))
            .collect();
        for villa in &self.villas {
            specs.push(SliderSpec::thumbnailed(
                villa.slider_container(),
                villa.images.len(),
            ));
            specs.extend(
                villa
                    .rooms
                    .iter()
                    .filter(|r| !r.coming_soon)
                    .map(|r| SliderSpec::dotted(r.slider_container(), r.images.len())),
            );
        }
        specs
    }

    /// Sliders wired when `modal` opens.
    pub fn slider_specs_for(&self, modal: ModalId) -> Vec<SliderSpec> {
        match modal {
            ModalId::Gallery => self
                .gallery
                .sections
                .iter()
                .map(|s| SliderSpec::thumbnailed(s.slider_container(), s.images.len()))
                .collect(),
            ModalId::Rooms => self
                .slider_specs()
                .into_iter()
                .filter(|s| s.container.starts_with("villa-") || s.container.starts_with("room-"))
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_is_valid() {
        let content = GuidebookContent::builtin().unwrap();
        assert!(!content.hero_slides.is_empty());
        assert!(content.present_modals().contains(&ModalId::Rules));
        assert!(content.present_modals().contains(&ModalId::Rooms));
        assert!(content.present_triggers().contains("gallery-card"));
        assert!(content
            .villas
            .iter()
            .flat_map(|v| v.rooms.iter())
            .any(|r| r.coming_soon));
    }

    #[test]
    fn share_payload_uses_property() {
        let content = GuidebookContent::builtin().unwrap();
        let payload = content.share_payload();
        assert!(payload.title.ends_with("Digital Guidebook"));
        assert_eq!(payload.url, content.property.url);
    }

    #[test]
    fn empty_villa_slider_is_rejected() {
        let json = r#"{
            "property": {"name": "p", "location": "l", "tagline": "t", "share_text": "s", "url": "u"},
            "villas": [{"id": "a", "name": "A", "images": []}]
        }"#;
        assert!(matches!(
            GuidebookContent::from_json(json),
            Err(GuidebookError::Content(_))
        ));
    }

    #[test]
    fn coming_soon_room_needs_no_images() {
        let json = r#"{
            "property": {"name": "p", "location": "l", "tagline": "t", "share_text": "s", "url": "u"},
            "villas": [{
                "id": "a", "name": "A",
                "images": [{"src": "a.jpg"}],
                "rooms": [{"id": "den", "name": "Den", "coming_soon": true}]
            }]
        }"#;
        let content = GuidebookContent::from_json(json).unwrap();
        assert_eq!(content.slider_specs_for(ModalId::Rooms).len(), 1);
    }

    #[test]
    fn duplicate_trigger_is_rejected() {
        let json = r#"{
            "property": {"name": "p", "location": "l", "tagline": "t", "share_text": "s", "url": "u"},
            "triggers": [
                {"id": "rules-btn", "label": "Rules"},
                {"id": "rules-btn", "label": "Rules again"}
            ]
        }"#;
        assert!(GuidebookContent::from_json(json).is_err());
    }

    #[test]
    fn bad_json_is_a_json_error() {
        assert!(matches!(
            GuidebookContent::from_json("{"),
            Err(GuidebookError::Json(_))
        ));
    }

    #[test]
    fn from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guidebook.json");
        std::fs::write(&path, BUILTIN_CONTENT).unwrap();
        let content = GuidebookContent::from_path(&path).unwrap();
        assert_eq!(content, GuidebookContent::builtin().unwrap());

        assert!(matches!(
            GuidebookContent::from_path(dir.path().join("missing.json")),
            Err(GuidebookError::Io(_))
        ));
    }
}
