//! Target device records and icon classification.

use serde::{Deserialize, Serialize};

/// A known target device the user can send a tab to.
///
/// Supplied wholesale by the host whenever the known device set changes;
/// never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeviceRecord {
    /// Human-readable device name
    pub name: String,

    /// Unique device identifier, handed back on selection
    pub guid: String,

    /// Device type string (e.g. "mobile", "desktop"); used only to pick an icon
    #[serde(default)]
    pub device_type: String,
}

impl DeviceRecord {
    pub fn new(
        name: impl Into<String>,
        guid: impl Into<String>,
        device_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            guid: guid.into(),
            device_type: device_type.into(),
        }
    }

    /// Icon class for this device.
    pub fn icon(&self) -> DeviceIcon {
        classify_icon(&self.device_type)
    }
}

/// Closed two-way icon classification for device rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceIcon {
    Mobile,
    Desktop,
}

/// Classify a device type string into its icon class.
///
/// Only `"mobile"` maps to [`DeviceIcon::Mobile`]; every other value,
/// including empty or unknown types, falls back to [`DeviceIcon::Desktop`].
/// Unknown types are not an error case.
pub fn classify_icon(device_type: &str) -> DeviceIcon {
    if device_type == "mobile" {
        DeviceIcon::Mobile
    } else {
        DeviceIcon::Desktop
    }
}
