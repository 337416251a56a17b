//! Transient notices
//!
//! A single toast slot. Posting replaces whatever is showing; each post hands
//! back a ticket so the dismissal timer of an older notice cannot take down a
//! newer one.

use std::time::Duration;

/// Widest window still treated as a phone layout, in logical pixels.
pub const MOBILE_MAX_WIDTH: f64 = 480.0;

pub const MOBILE_NOTICE_DURATION: Duration = Duration::from_secs(6);
pub const COMING_SOON_DURATION: Duration = Duration::from_secs(4);
pub const SHARE_NOTICE_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    MobileView,
    ComingSoon,
    Success,
    Failure,
}

impl NoticeKind {
    /// CSS modifier class for the toast
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::MobileView => "notice notice--mobile",
            NoticeKind::ComingSoon => "notice notice--coming-soon",
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Failure => "notice notice--failure",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub duration: Duration,
}

impl Notice {
    pub fn mobile_view() -> Self {
        Self {
            kind: NoticeKind::MobileView,
            message: "This is a mobile view. For best experience, use your mobile device."
                .to_string(),
            duration: MOBILE_NOTICE_DURATION,
        }
    }

    pub fn coming_soon(room: &str) -> Self {
        Self {
            kind: NoticeKind::ComingSoon,
            message: format!("{room} is under construction. Check back soon!"),
            duration: COMING_SOON_DURATION,
        }
    }
}

/// The mobile-view notice is shown on windows wider than a phone.
pub fn mobile_notice_applies(window_width: f64) -> bool {
    window_width > MOBILE_MAX_WIDTH
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeBoard {
    current: Option<(NoticeTicket, Notice)>,
    generation: u64,
}

impl NoticeBoard {
    pub fn post(&mut self, notice: Notice) -> NoticeTicket {
        self.generation += 1;
        let ticket = NoticeTicket(self.generation);
        tracing::info!(kind = ?notice.kind, "{}", notice.message);
        self.current = Some((ticket, notice));
        ticket
    }

    /// Dismiss the notice posted under `ticket`, if it is still showing.
    pub fn dismiss(&mut self, ticket: NoticeTicket) -> bool {
        if matches!(self.current, Some((t, _)) if t == ticket) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref().map(|(_, n)| n)
    }
}
