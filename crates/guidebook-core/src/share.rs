//! Share action
//!
//! Try the platform share sheet; fall back to copying the guidebook link to
//! the clipboard and tell the user how that went.

use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::notice::{Notice, NoticeKind, SHARE_NOTICE_DURATION};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    /// User dismissed the share sheet
    #[error("Share cancelled")]
    Cancelled,

    #[error("Share failed: {0}")]
    Failed(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// Clipboard could not be reached at all
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// Clipboard was reached but refused the text
    #[error("Clipboard rejected the copy: {0}")]
    Rejected(String),
}

/// Platform share sheet.
pub trait NativeShare {
    /// Whether the platform can share this payload at all.
    fn can_share(&self, payload: &SharePayload) -> bool;

    fn share(&self, payload: &SharePayload) -> impl Future<Output = Result<(), ShareError>>;
}

/// Host without a share sheet.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNativeShare;

impl NativeShare for NoNativeShare {
    fn can_share(&self, _payload: &SharePayload) -> bool {
        false
    }

    async fn share(&self, _payload: &SharePayload) -> Result<(), ShareError> {
        Err(ShareError::Failed("no share sheet on this platform".to_string()))
    }
}

/// A clipboard handle held only for the duration of one copy.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Opens transient clipboard handles.
pub trait ClipboardProvider {
    type Sink: ClipboardSink;

    fn open(&self) -> Result<Self::Sink, ClipboardError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
    CopyRejected(ClipboardError),
    CopyFailed(ClipboardError),
}

impl ShareOutcome {
    /// Notice to show the user. The native sheet is its own feedback.
    pub fn notice(&self) -> Option<Notice> {
        let (kind, message) = match self {
            ShareOutcome::Shared => return None,
            ShareOutcome::Copied => (
                NoticeKind::Success,
                "URL copied to clipboard! You can now share it manually.",
            ),
            ShareOutcome::CopyRejected(_) => (
                NoticeKind::Failure,
                "Unable to copy URL. Please copy the address manually.",
            ),
            ShareOutcome::CopyFailed(_) => (
                NoticeKind::Failure,
                "Unable to share. Please copy the URL manually.",
            ),
        };
        Some(Notice {
            kind,
            message: message.to_string(),
            duration: SHARE_NOTICE_DURATION,
        })
    }
}

/// Copy `url` through a handle that is released before this returns.
pub fn copy_link<C: ClipboardProvider>(clipboard: &C, url: &str) -> ShareOutcome {
    let mut sink = match clipboard.open() {
        Ok(sink) => sink,
        Err(e) => {
            tracing::error!("Failed to copy URL: {}", e);
            return ShareOutcome::CopyFailed(e);
        }
    };
    let outcome = match sink.write_text(url) {
        Ok(()) => ShareOutcome::Copied,
        Err(e @ ClipboardError::Rejected(_)) => {
            tracing::warn!("{}", e);
            ShareOutcome::CopyRejected(e)
        }
        Err(e) => {
            tracing::error!("Failed to copy URL: {}", e);
            ShareOutcome::CopyFailed(e)
        }
    };
    drop(sink);
    outcome
}

/// Native share when available and accepted, clipboard otherwise.
pub async fn share_or_copy<N, C>(payload: &SharePayload, native: &N, clipboard: &C) -> ShareOutcome
where
    N: NativeShare,
    C: ClipboardProvider,
{
    if native.can_share(payload) {
        match native.share(payload).await {
            Ok(()) => {
                tracing::info!("Shared successfully");
                return ShareOutcome::Shared;
            }
            Err(e) => tracing::info!("Error sharing: {}", e),
        }
    }
    copy_link(clipboard, &payload.url)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RefusingClipboard;
    struct RefusingSink;

    impl ClipboardSink for RefusingSink {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Rejected("read-only".to_string()))
        }
    }

    impl ClipboardProvider for RefusingClipboard {
        type Sink = RefusingSink;

        fn open(&self) -> Result<Self::Sink, ClipboardError> {
            Ok(RefusingSink)
        }
    }

    struct MissingClipboard;

    impl ClipboardProvider for MissingClipboard {
        type Sink = RefusingSink;

        fn open(&self) -> Result<Self::Sink, ClipboardError> {
            Err(ClipboardError::Unavailable("no display".to_string()))
        }
    }

    #[test]
    fn rejected_copy_reports_failure() {
        let outcome = copy_link(&RefusingClipboard, "https://example.com");
        assert!(matches!(outcome, ShareOutcome::CopyRejected(_)));
        let notice = outcome.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Failure);
        assert!(notice.message.starts_with("Unable to copy URL"));
    }

    #[test]
    fn unavailable_clipboard_reports_failure() {
        let outcome = copy_link(&MissingClipboard, "https://example.com");
        assert!(matches!(outcome, ShareOutcome::CopyFailed(_)));
        assert!(outcome.notice().unwrap().message.starts_with("Unable to share"));
    }

    #[test]
    fn shared_has_no_notice() {
        assert!(ShareOutcome::Shared.notice().is_none());
    }

    #[tokio::test]
    async fn no_native_share_falls_back() {
        let payload = SharePayload {
            title: "t".to_string(),
            text: "x".to_string(),
            url: "https://example.com".to_string(),
        };
        let outcome = share_or_copy(&payload, &NoNativeShare, &MissingClipboard).await;
        assert!(matches!(outcome, ShareOutcome::CopyFailed(_)));
    }
}
