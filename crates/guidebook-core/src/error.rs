//! Error types for the guidebook core

use thiserror::Error;

/// Main error type for guidebook interaction state
#[derive(Error, Debug)]
pub enum GuidebookError {
    /// Modal identifier is not one the page knows about
    #[error("Modal not found: {0}")]
    UnknownModal(String),

    /// Trigger identifier has no route
    #[error("Trigger not found: {0}")]
    UnknownTrigger(String),

    /// Collapsible category does not exist in its group
    #[error("Category not found: {0}")]
    UnknownCategory(String),

    /// Gallery tab does not exist
    #[error("Tab not found: {0}")]
    UnknownTab(String),

    /// A slider needs at least one image
    #[error("Slider '{0}' has no images")]
    EmptySlider(String),

    /// Slider jump target outside `0..len`
    #[error("Index {index} out of range for slider of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Content file parsed but failed validation
    #[error("Invalid content: {0}")]
    Content(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content file is not valid JSON for the content model
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using GuidebookError
pub type GuidebookResult<T> = Result<T, GuidebookError>;
