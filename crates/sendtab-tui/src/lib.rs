//! sendtab-tui - Terminal UI for the sendtab share overlay
//!
//! This crate provides the ratatui-based front end around `sendtab-core`:
//! the overlay modal, the reusable row view, the secondary device picker,
//! the theme, and the synchronous event loop.

pub mod overlay;
pub mod picker;
pub mod row;
pub mod runner;
pub mod theme;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use overlay::{render_overlay, OverlayState};
pub use picker::{PickerFlag, PickerState};
pub use row::OverlayRow;
pub use runner::{display_mode_for, run_overlay, OverlayOutcome};
pub use theme::icons::IconSet;
