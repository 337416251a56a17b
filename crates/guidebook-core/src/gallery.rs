//! Gallery filter bar and section tabs.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GuidebookError, GuidebookResult};

/// Wait after the gallery or rooms panel opens before its controls are wired,
/// so the panel content is laid out first.
pub const PANEL_INIT_DELAY: Duration = Duration::from_millis(100);

/// Filter tag carried by a filter button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    pub fn parse(tag: &str) -> Self {
        if tag == "all" {
            Filter::All
        } else {
            Filter::Category(tag.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Filter::All => "all",
            Filter::Category(c) => c,
        }
    }

    /// Visibility of an item tagged `category` under this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(c) => c == category,
        }
    }
}

impl From<String> for Filter {
    fn from(tag: String) -> Self {
        Filter::parse(&tag)
    }
}

impl From<Filter> for String {
    fn from(filter: Filter) -> Self {
        filter.as_str().to_string()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active filter of the gallery's filter bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryFilter {
    active: Filter,
}

impl GalleryFilter {
    pub fn active(&self) -> &Filter {
        &self.active
    }

    /// Whether the button tagged `tag` carries the active marker.
    pub fn is_active(&self, tag: &Filter) -> bool {
        self.active == *tag
    }

    pub fn select(&mut self, filter: Filter) {
        tracing::debug!(filter = %filter, "gallery filter selected");
        self.active = filter;
    }

    pub fn is_visible(&self, category: &str) -> bool {
        self.active.matches(category)
    }

    /// Indices of the visible items among `categories`.
    pub fn visible<'a, I>(&self, categories: I) -> Vec<usize>
    where
        I: IntoIterator<Item = &'a str>,
    {
        categories
            .into_iter()
            .enumerate()
            .filter(|(_, c)| self.is_visible(c))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Mutually exclusive named sections (gallery tabs, villa tabs).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabSet {
    tabs: Vec<String>,
    active: usize,
}

impl TabSet {
    /// First tab starts active.
    pub fn new<I, S>(tabs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tabs: tabs.into_iter().map(Into::into).collect(),
            active: 0,
        }
    }

    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }

    pub fn active(&self) -> Option<&str> {
        self.tabs.get(self.active).map(String::as_str)
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active() == Some(name)
    }

    pub fn select(&mut self, name: &str) -> GuidebookResult<()> {
        let idx = self
            .tabs
            .iter()
            .position(|t| t == name)
            .ok_or_else(|| GuidebookError::UnknownTab(name.to_string()))?;
        self.active = idx;
        tracing::debug!(tab = name, "tab selected");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_scenario_villa_then_all() {
        let items = ["villa", "farmstay", "villa", "pool"];
        let mut filter = GalleryFilter::default();
        assert_eq!(filter.visible(items), vec![0, 1, 2, 3]);

        filter.select(Filter::parse("villa"));
        assert_eq!(filter.visible(items), vec![0, 2]);
        assert!(filter.is_active(&Filter::parse("villa")));
        assert!(!filter.is_active(&Filter::All));

        filter.select(Filter::parse("all"));
        assert_eq!(filter.visible(items), vec![0, 1, 2, 3]);
    }

    #[test]
    fn filter_serde_uses_plain_tags() {
        let json = serde_json::to_string(&vec![Filter::All, Filter::parse("farmstay")]).unwrap();
        assert_eq!(json, r#"["all","farmstay"]"#);
        let back: Vec<Filter> = serde_json::from_str(&json).unwrap();
        assert_eq!(back[0], Filter::All);
    }

    #[test]
    fn tabs_are_exclusive() {
        let mut tabs = TabSet::new(["villa", "farmstay", "outdoor"]);
        assert!(tabs.is_active("villa"));
        tabs.select("outdoor").unwrap();
        assert!(tabs.is_active("outdoor"));
        assert!(!tabs.is_active("villa"));
    }

    #[test]
    fn unknown_tab_leaves_selection() {
        let mut tabs = TabSet::new(["villa"]);
        assert!(tabs.select("spa").is_err());
        assert_eq!(tabs.active(), Some("villa"));
    }

    #[test]
    fn empty_tabset_has_no_active() {
        let tabs = TabSet::new(Vec::<String>::new());
        assert_eq!(tabs.active(), None);
    }
}
