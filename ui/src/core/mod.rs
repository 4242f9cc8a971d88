//! Pure, platform-agnostic report transformation logic.

pub mod config;
pub mod format;
pub mod position;
pub mod series;
