//! Hero background slideshow.

use std::time::Duration;

/// Wait before the first rotation.
pub const HERO_START_DELAY: Duration = Duration::from_secs(1);

/// Time each slide stays up.
pub const HERO_INTERVAL: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroSlideshow {
    len: usize,
    current: usize,
}

impl HeroSlideshow {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_active(&self, slide: usize) -> bool {
        self.len > 0 && slide == self.current
    }

    /// Deactivate the current slide and activate the next one.
    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_with_wraparound() {
        let mut hero = HeroSlideshow::new(3);
        assert!(hero.is_active(0));
        assert_eq!(hero.advance(), 1);
        assert_eq!(hero.advance(), 2);
        assert_eq!(hero.advance(), 0);
        assert!(hero.is_active(0));
        assert!(!hero.is_active(2));
    }

    #[test]
    fn empty_slideshow_does_nothing() {
        let mut hero = HeroSlideshow::new(0);
        assert_eq!(hero.advance(), 0);
        assert!(!hero.is_active(0));
    }
}
