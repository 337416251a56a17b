//! Image sliders
//!
//! One slider type covers every carousel on the page. A [`SliderSpec`]
//! says which optional controls a container carries (dots, thumbnails,
//! counter); the index logic is shared.

use std::collections::BTreeMap;

use crate::error::{GuidebookError, GuidebookResult};

/// Which controls a slider container renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderSpec {
    /// Container id, unique per slider on the page
    pub container: String,
    pub image_count: usize,
    pub thumbnails: bool,
    pub dots: bool,
    pub counter: bool,
}

impl SliderSpec {
    /// Room gallery: dot-indexed, no counter.
    pub fn dotted(container: impl Into<String>, image_count: usize) -> Self {
        Self {
            container: container.into(),
            image_count,
            thumbnails: false,
            dots: true,
            counter: false,
        }
    }

    /// Villa and gallery-section sliders: thumbnails plus a counter.
    pub fn thumbnailed(container: impl Into<String>, image_count: usize) -> Self {
        Self {
            container: container.into(),
            image_count,
            thumbnails: true,
            dots: false,
            counter: true,
        }
    }
}

/// Current position over a fixed number of images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slider {
    spec: SliderSpec,
    index: usize,
}

impl Slider {
    pub fn new(spec: SliderSpec) -> GuidebookResult<Self> {
        if spec.image_count == 0 {
            return Err(GuidebookError::EmptySlider(spec.container));
        }
        Ok(Self { spec, index: 0 })
    }

    pub fn spec(&self) -> &SliderSpec {
        &self.spec
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.spec.image_count
    }

    /// Always false; empty sliders cannot be built.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether image / thumbnail / dot `i` carries the active marker.
    pub fn is_active(&self, i: usize) -> bool {
        i == self.index
    }

    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len();
        self.index
    }

    pub fn prev(&mut self) -> usize {
        self.index = (self.index + self.len() - 1) % self.len();
        self.index
    }

    /// Thumbnail or dot click.
    pub fn jump(&mut self, index: usize) -> GuidebookResult<usize> {
        if index >= self.len() {
            return Err(GuidebookError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        self.index = index;
        Ok(self.index)
    }

    /// `"{index+1} / {total}"`, or `None` when the container has no counter.
    pub fn counter_text(&self) -> Option<String> {
        self.spec
            .counter
            .then(|| format!("{} / {}", self.index + 1, self.len()))
    }
}

/// Sliders keyed by container id.
///
/// Initialization is idempotent: a container is instantiated on the first
/// [`SliderRegistry::ensure`] and left alone afterwards.
#[derive(Debug, Clone, Default)]
pub struct SliderRegistry {
    sliders: BTreeMap<String, Slider>,
}

impl SliderRegistry {
    /// Returns `Ok(true)` when this call created the slider.
    pub fn ensure(&mut self, spec: SliderSpec) -> GuidebookResult<bool> {
        if self.sliders.contains_key(&spec.container) {
            return Ok(false);
        }
        let container = spec.container.clone();
        let slider = Slider::new(spec)?;
        tracing::debug!(container = %container, images = slider.len(), "initialized slider");
        self.sliders.insert(container, slider);
        Ok(true)
    }

    pub fn get(&self, container: &str) -> Option<&Slider> {
        self.sliders.get(container)
    }

    pub fn len(&self) -> usize {
        self.sliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sliders.is_empty()
    }

    pub fn next(&mut self, container: &str) -> Option<usize> {
        self.with(container, |s| Ok(s.next()))
    }

    pub fn prev(&mut self, container: &str) -> Option<usize> {
        self.with(container, |s| Ok(s.prev()))
    }

    pub fn jump(&mut self, container: &str, index: usize) -> Option<usize> {
        self.with(container, |s| s.jump(index))
    }

    fn with(
        &mut self,
        container: &str,
        f: impl FnOnce(&mut Slider) -> GuidebookResult<usize>,
    ) -> Option<usize> {
        let Some(slider) = self.sliders.get_mut(container) else {
            tracing::warn!("Slider not initialized: {}", container);
            return None;
        };
        match f(slider) {
            Ok(index) => Some(index),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        }
    }
}
