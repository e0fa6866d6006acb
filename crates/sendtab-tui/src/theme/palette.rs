//! Color palette for the share overlay.

use ratatui::style::Color;

// --- Background layers ---
pub const POPUP_BG: Color = Color::Black; // Overlay/modal backgrounds
pub const FIRST_ROW_BG: Color = Color::DarkGray; // Distinct first-row background

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White; // Primary text
pub const TEXT_SECONDARY: Color = Color::Gray; // Secondary text
pub const TEXT_MUTED: Color = Color::DarkGray; // Muted text
pub const TEXT_BRIGHT: Color = Color::White; // Bright/emphasis text

// --- Hints ---
pub const KEY_HINT: Color = Color::Yellow; // Footer keybinding hints
