//! # sendtab-core
//!
//! UI-framework-free core of the send-tab-to-device overlay: the display
//! mode state machine, the canonical/visible data split, and the per-row
//! rendering policy. The terminal front end lives in `sendtab-tui`.
//!
//! ## Public API
//!
//! ### Display state (`controller`)
//! - [`DisplayMode`] - `List` | `None` | `ShowDevices`
//! - [`ListController`] - owns the canonical device list and the visible-row
//!   projection; one notification per effective mutation
//! - [`VisibleItem`], [`DisplayState`]
//!
//! ### Devices (`device`)
//! - [`DeviceRecord`] - immutable name/guid/type value
//! - [`DeviceIcon`], [`classify_icon()`] - closed two-way icon classification
//!
//! ### Row rendering (`render`)
//! - [`RowRenderer`] - configures a [`RowView`] per (position, mode, item)
//! - [`TargetSelectedListener`], [`DevicePickerDialog`], [`LabelResolver`] -
//!   host collaborator seams
//!
//! ### Error handling (`error`)
//! - [`Error`], [`Result`], [`ResultExt`]
//!
//! ### Configuration (`config`)
//! - [`Settings`], [`IconMode`], device file loading
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use sendtab_core::prelude::*;
//! ```

pub mod config;
pub mod controller;
pub mod device;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod render;

// Re-export commonly used types at crate root for convenience
pub use config::{default_config_path, load_device_file, load_settings, IconMode, Settings};
pub use controller::{DisplayMode, DisplayState, ListController, VisibleItem};
pub use device::{classify_icon, DeviceIcon, DeviceRecord};
pub use error::{Error, Result, ResultExt};
pub use render::{
    DevicePickerDialog, LabelResolver, RowBackground, RowIcon, RowRenderer, RowView,
    TargetSelectedListener,
};
