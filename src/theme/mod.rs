//! Theme for the guidebook.

mod styles;

pub use styles::GLOBAL_STYLES;
