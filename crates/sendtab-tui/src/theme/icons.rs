//! Icon set for the overlay.
//!
//! Provides `IconSet` which resolves the core's opaque icon handles to
//! terminal glyphs based on `IconMode`.
//! - `IconMode::Unicode` — safe characters that work in all terminals
//! - `IconMode::NerdFonts` — rich Nerd Font glyphs (requires Nerd Font installed)

use sendtab_core::{DeviceIcon, IconMode, RowIcon};

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Resolve a row icon handle to its glyph.
    pub fn resolve(&self, icon: RowIcon) -> &'static str {
        match icon {
            RowIcon::SendTab => self.send_tab(),
            RowIcon::Device(DeviceIcon::Mobile) => self.mobile(),
            RowIcon::Device(DeviceIcon::Desktop) => self.desktop(),
        }
    }

    pub fn send_tab(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f045}", // nf-fa-share_square_o
            IconMode::Unicode => "\u{279e}",   // ➞
        }
    }

    pub fn mobile(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f3cd}", // nf-fa-mobile
            IconMode::Unicode => "[M]",
        }
    }

    pub fn desktop(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f108}", // nf-fa-desktop
            IconMode::Unicode => "[D]",
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_icons_are_non_empty() {
        let icons = IconSet::new(IconMode::Unicode);
        assert!(!icons.send_tab().is_empty());
        assert!(!icons.mobile().is_empty());
        assert!(!icons.desktop().is_empty());
    }

    #[test]
    fn test_nerd_font_icons_are_non_empty() {
        let icons = IconSet::new(IconMode::NerdFonts);
        assert!(!icons.send_tab().is_empty());
        assert!(!icons.mobile().is_empty());
        assert!(!icons.desktop().is_empty());
    }

    #[test]
    fn test_unicode_and_nerd_font_differ() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);
        assert_ne!(unicode.send_tab(), nerd.send_tab());
        assert_ne!(unicode.mobile(), nerd.mobile());
        assert_ne!(unicode.desktop(), nerd.desktop());
    }

    #[test]
    fn test_resolve_matches_slots() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.resolve(RowIcon::SendTab), icons.send_tab());
        assert_eq!(icons.resolve(RowIcon::Device(DeviceIcon::Mobile)), icons.mobile());
        assert_eq!(icons.resolve(RowIcon::Device(DeviceIcon::Desktop)), icons.desktop());
    }

    #[test]
    fn test_icon_set_is_copy() {
        let icons = IconSet::new(IconMode::Unicode);
        let copy = icons;
        assert_eq!(icons.send_tab(), copy.send_tab());
    }
}
