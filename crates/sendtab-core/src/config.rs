//! Configuration file parsing
//!
//! Supports:
//! - `~/.config/sendtab/config.toml` - overlay settings (labels, icons, inline budget)
//! - device files - TOML documents with a `[[devices]]` array, fed to the demo host

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::controller::DisplayMode;
use crate::device::DeviceRecord;
use crate::error::{Error, Result, ResultExt};
use crate::render::LabelResolver;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "sendtab";

/// Icon rendering mode for terminal glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconMode {
    /// Safe characters that work in all terminals
    #[default]
    Unicode,
    /// Rich Nerd Font glyphs (requires a Nerd Font installed)
    NerdFonts,
}

/// Overlay settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    /// Label for the synthetic row in `None` mode
    #[serde(default = "default_send_label")]
    pub send_label: String,

    /// Label for the synthetic row in `ShowDevices` mode
    #[serde(default = "default_send_other_label")]
    pub send_other_label: String,

    /// Icon glyph mode
    #[serde(default)]
    pub icon_mode: IconMode,

    /// How many devices the overlay shows inline before falling back to the
    /// picker button
    #[serde(default = "default_max_inline_devices")]
    pub max_inline_devices: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            send_label: default_send_label(),
            send_other_label: default_send_other_label(),
            icon_mode: IconMode::default(),
            max_inline_devices: default_max_inline_devices(),
        }
    }
}

fn default_send_label() -> String {
    "Send tab".to_string()
}

fn default_send_other_label() -> String {
    "Send to other device…".to_string()
}

fn default_max_inline_devices() -> usize {
    4
}

impl LabelResolver for Settings {
    fn label_for(&self, mode: DisplayMode) -> String {
        match mode {
            DisplayMode::None => self.send_label.clone(),
            DisplayMode::ShowDevices => self.send_other_label.clone(),
            // List mode renders real records; no synthetic label exists.
            DisplayMode::List => String::new(),
        }
    }
}

/// Default config file path (`~/.config/sendtab/config.toml`).
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(CONFIG_DIR).join(CONFIG_FILENAME)
}

/// Load settings from the given path, or the default location.
///
/// A missing file is not an error; defaults apply. A file that exists but
/// fails to parse is [`Error::ConfigInvalid`].
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);

    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let contents = std::fs::read_to_string(&path)?;
    toml::from_str(&contents).map_err(|e| Error::config_invalid(e.to_string()))
}

/// Save settings to the given path, creating parent directories.
pub fn save_settings(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents =
        toml::to_string_pretty(settings).map_err(|e| Error::config(e.to_string()))?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// On-disk shape of a device file.
#[derive(Debug, Deserialize, Serialize)]
struct DeviceFile {
    #[serde(default)]
    devices: Vec<DeviceRecord>,
}

/// Load a device list from a TOML file with a `[[devices]]` array.
pub fn load_device_file(path: &Path) -> Result<Vec<DeviceRecord>> {
    if !path.exists() {
        return Err(Error::device_file_not_found(path));
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading device file {}", path.display()))?;
    let file: DeviceFile =
        toml::from_str(&contents).map_err(|e| Error::device_file_invalid(path, e.to_string()))?;

    tracing::info!(count = file.devices.len(), "loaded device file {}", path.display());
    Ok(file.devices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.send_label, "Send tab");
        assert_eq!(settings.send_other_label, "Send to other device…");
        assert_eq!(settings.icon_mode, IconMode::Unicode);
        assert_eq!(settings.max_inline_devices, 4);
    }

    #[test]
    fn test_settings_resolve_labels() {
        let settings = Settings::default();
        assert_eq!(settings.label_for(DisplayMode::None), "Send tab");
        assert_eq!(
            settings.label_for(DisplayMode::ShowDevices),
            "Send to other device…"
        );
    }

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_config_uses_serde_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "send_label = \"Beam it\"\n").unwrap();

        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings.send_label, "Beam it");
        assert_eq!(settings.send_other_label, "Send to other device…");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "icon_mode = \"hologram\"\n").unwrap();

        let err = load_settings(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    fn test_settings_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let settings = Settings {
            send_label: "Send".to_string(),
            icon_mode: IconMode::NerdFonts,
            max_inline_devices: 2,
            ..Settings::default()
        };

        save_settings(&settings, &path).unwrap();
        let loaded = load_settings(Some(&path)).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_device_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devices.toml");
        std::fs::write(
            &path,
            r#"
[[devices]]
name = "Phone-A"
guid = "g1"
device_type = "mobile"

[[devices]]
name = "Desk-B"
guid = "g2"
device_type = "desktop"
"#,
        )
        .unwrap();

        let devices = load_device_file(&path).unwrap();
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].name, "Phone-A");
        assert_eq!(devices[1].guid, "g2");
    }

    #[test]
    fn test_missing_device_file_is_an_error() {
        let err = load_device_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, Error::DeviceFileNotFound { .. }));
    }

    #[test]
    fn test_malformed_device_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devices.toml");
        std::fs::write(&path, "[[devices]]\nname = 42\n").unwrap();

        let err = load_device_file(&path).unwrap_err();
        assert!(matches!(err, Error::DeviceFileInvalid { .. }));
    }
}
