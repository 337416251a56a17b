//! Lightbox overlay lifecycle
//!
//! The overlay is inserted without its transition class, activated one tick
//! later so the CSS transition has a start state, and on close it keeps
//! rendering until the transition has played out.

use std::time::Duration;

/// Delay between inserting the overlay and applying the active class.
pub const LIGHTBOX_ACTIVATE_DELAY: Duration = Duration::from_millis(10);

/// Length of the fade/scale transition; removal waits this long after close.
pub const LIGHTBOX_TRANSITION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxPhase {
    /// In the tree, transition class not yet applied
    Inserted,
    Active,
    /// Transition class removed, waiting to be taken out of the tree
    Closing,
}

/// Identifies one opening of the lightbox. Timers carry it so a delayed
/// callback cannot act on a lightbox opened after it was scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightboxTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
struct Shown {
    src: String,
    alt: String,
    phase: LightboxPhase,
    ticket: LightboxTicket,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    shown: Option<Shown>,
    generation: u64,
}

impl Lightbox {
    /// Gallery item click. Replaces whatever is currently shown.
    pub fn open(&mut self, src: impl Into<String>, alt: impl Into<String>) -> LightboxTicket {
        self.generation += 1;
        let ticket = LightboxTicket(self.generation);
        let src = src.into();
        tracing::debug!(src = %src, "lightbox inserted");
        self.shown = Some(Shown {
            src,
            alt: alt.into(),
            phase: LightboxPhase::Inserted,
            ticket,
        });
        ticket
    }

    /// Apply the transition class. Returns false for a stale ticket.
    pub fn activate(&mut self, ticket: LightboxTicket) -> bool {
        match self.shown.as_mut() {
            Some(shown) if shown.ticket == ticket && shown.phase == LightboxPhase::Inserted => {
                shown.phase = LightboxPhase::Active;
                true
            }
            _ => false,
        }
    }

    /// Close control or backdrop click. Returns the ticket to pass to
    /// [`Lightbox::finish`] once [`LIGHTBOX_TRANSITION`] has elapsed.
    pub fn close(&mut self) -> Option<LightboxTicket> {
        let shown = self.shown.as_mut()?;
        if shown.phase == LightboxPhase::Closing {
            return None;
        }
        shown.phase = LightboxPhase::Closing;
        tracing::debug!("lightbox closing");
        Some(shown.ticket)
    }

    /// Remove the overlay after the transition. Returns false for a stale ticket.
    pub fn finish(&mut self, ticket: LightboxTicket) -> bool {
        match self.shown.as_ref() {
            Some(shown) if shown.ticket == ticket && shown.phase == LightboxPhase::Closing => {
                self.shown = None;
                true
            }
            _ => false,
        }
    }

    pub fn phase(&self) -> Option<LightboxPhase> {
        self.shown.as_ref().map(|s| s.phase)
    }

    pub fn is_present(&self) -> bool {
        self.shown.is_some()
    }

    /// Whether the overlay carries the `active` transition class.
    pub fn is_active(&self) -> bool {
        self.phase() == Some(LightboxPhase::Active)
    }

    pub fn image(&self) -> Option<(&str, &str)> {
        self.shown.as_ref().map(|s| (s.src.as_str(), s.alt.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_lifecycle() {
        let mut lightbox = Lightbox::default();
        let ticket = lightbox.open("img/pool.jpg", "Pool");
        assert_eq!(lightbox.phase(), Some(LightboxPhase::Inserted));
        assert!(!lightbox.is_active());

        assert!(lightbox.activate(ticket));
        assert!(lightbox.is_active());

        let closing = lightbox.close().unwrap();
        assert_eq!(lightbox.phase(), Some(LightboxPhase::Closing));
        assert!(lightbox.is_present());

        assert!(lightbox.finish(closing));
        assert!(!lightbox.is_present());
    }

    #[test]
    fn stale_finish_keeps_newer_overlay() {
        let mut lightbox = Lightbox::default();
        let first = lightbox.open("a.jpg", "a");
        lightbox.activate(first);
        let closing = lightbox.close().unwrap();

        let second = lightbox.open("b.jpg", "b");
        assert!(!lightbox.finish(closing));
        assert!(lightbox.activate(second));
        assert_eq!(lightbox.image(), Some(("b.jpg", "b")));
    }

    #[test]
    fn double_close_schedules_once() {
        let mut lightbox = Lightbox::default();
        lightbox.open("a.jpg", "a");
        assert!(lightbox.close().is_some());
        assert!(lightbox.close().is_none());
    }

    #[test]
    fn activate_after_close_is_ignored() {
        let mut lightbox = Lightbox::default();
        let ticket = lightbox.open("a.jpg", "a");
        lightbox.close();
        assert!(!lightbox.activate(ticket));
        assert_eq!(lightbox.phase(), Some(LightboxPhase::Closing));
    }
}
