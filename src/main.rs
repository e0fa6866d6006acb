//! sendtab - send-tab-to-device share overlay for the terminal
//!
//! This is the demo host binary. All logic lives in the library crates.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use sendtab_core::prelude::*;
use sendtab_core::{load_device_file, load_settings, DeviceRecord, DisplayMode, Settings};
use sendtab_tui::{display_mode_for, run_overlay, OverlayOutcome};

/// Send the current tab to one of your devices
#[derive(Parser, Debug)]
#[command(name = "sendtab")]
#[command(about = "Send the current tab to one of your devices", long_about = None)]
struct Args {
    /// Path to a TOML device file with a [[devices]] array
    #[arg(value_name = "DEVICES")]
    devices: Option<PathBuf>,

    /// Force an initial display mode instead of the device-count policy
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Alternate config file path
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Every device as its own row
    List,
    /// Single send button, no device list
    None,
    /// Single button opening the device picker
    ShowDevices,
}

impl From<ModeArg> for DisplayMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::List => DisplayMode::List,
            ModeArg::None => DisplayMode::None,
            ModeArg::ShowDevices => DisplayMode::ShowDevices,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    sendtab_core::logging::init()?;

    let settings = match load_settings(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            warn!("config error, using defaults: {err}");
            eprintln!("⚠ Config error ({err}), using defaults.");
            Settings::default()
        }
    };

    let devices = match &args.devices {
        Some(path) => match load_device_file(path) {
            Ok(devices) => devices,
            Err(err) => {
                eprintln!("❌ {err}");
                eprintln!();
                eprintln!("A device file is a TOML document with entries like:");
                eprintln!("  [[devices]]");
                eprintln!("  name = \"Pixel 8\"");
                eprintln!("  guid = \"abc123\"");
                eprintln!("  device_type = \"mobile\"");
                std::process::exit(1);
            }
        },
        None => sample_devices(),
    };

    let initial_mode = args
        .mode
        .map(DisplayMode::from)
        .unwrap_or_else(|| display_mode_for(devices.len(), settings.max_inline_devices));
    info!(?initial_mode, devices = devices.len(), "opening share overlay");

    match run_overlay(devices, &settings, initial_mode)? {
        OverlayOutcome::SendTo { guid } => eprintln!("✅ Sending tab to device {guid}"),
        OverlayOutcome::ActionSelected => eprintln!("✅ Send action selected"),
        OverlayOutcome::Cancelled => eprintln!("Selection cancelled."),
    }

    Ok(())
}

/// Built-in device set used when no device file is given.
fn sample_devices() -> Vec<DeviceRecord> {
    vec![
        DeviceRecord::new("Pixel 8", "guid-pixel-8", "mobile"),
        DeviceRecord::new("Work Laptop", "guid-work-laptop", "desktop"),
        DeviceRecord::new("Home Desktop", "guid-home-desktop", "desktop"),
    ]
}
