//! Centralized theme system for the overlay.
//!
//! This module provides:
//! - `palette` — Raw color constants
//! - `styles` — Semantic style builder functions
//! - `icons` — Glyph resolution for row icons, with ASCII-safe fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
