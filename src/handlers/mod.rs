//! HTTP handlers.

pub mod csrf;
pub mod entries;
