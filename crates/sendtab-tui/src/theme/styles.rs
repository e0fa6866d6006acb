//! Semantic style builders for the share overlay.

use ratatui::style::{Modifier, Style};

use super::palette;
use sendtab_core::RowBackground;

// --- Text styles ---
pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Row styles ---

/// Base style for a row, by its background slot.
pub fn row_background(background: RowBackground) -> Style {
    match background {
        RowBackground::First => Style::default()
            .fg(palette::TEXT_BRIGHT)
            .bg(palette::FIRST_ROW_BG),
        RowBackground::Standard => Style::default().fg(palette::TEXT_SECONDARY),
    }
}

/// Highlight style for the selected row.
pub fn row_selected() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::KEY_HINT)
}
