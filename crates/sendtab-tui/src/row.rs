//! The reusable overlay row view.

use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;

use sendtab_core::{RowBackground, RowIcon, RowView};

use crate::theme::icons::IconSet;
use crate::theme::styles;

/// Concrete [`RowView`] for the terminal overlay.
///
/// Holds exactly one activation handler at a time. The renderer clears and
/// replaces it on every render, so a recycled row never fires a stale
/// closure.
pub struct OverlayRow {
    label: String,
    icon: Option<RowIcon>,
    background: RowBackground,
    handler: Option<Box<dyn Fn()>>,
}

impl Default for OverlayRow {
    fn default() -> Self {
        Self {
            label: String::new(),
            icon: None,
            background: RowBackground::Standard,
            handler: None,
        }
    }
}

impl RowView for OverlayRow {
    fn set_label_and_icon(&mut self, label: &str, icon: RowIcon) {
        self.label = label.to_string();
        self.icon = Some(icon);
    }

    fn set_background(&mut self, background: RowBackground) {
        self.background = background;
    }

    fn clear_on_activate(&mut self) {
        self.handler = None;
    }

    fn set_on_activate(&mut self, handler: Box<dyn Fn()>) {
        self.handler = Some(handler);
    }
}

impl OverlayRow {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn background(&self) -> RowBackground {
        self.background
    }

    /// Invoke the current activation handler, if one is set.
    ///
    /// Returns whether a handler fired.
    pub fn activate(&self) -> bool {
        match &self.handler {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    /// Build the styled list item for this row.
    pub fn to_list_item(&self, selected: bool, icons: &IconSet) -> ListItem<'static> {
        let style = if selected {
            styles::row_selected()
        } else {
            styles::row_background(self.background)
        };

        let glyph = self.icon.map(|icon| icons.resolve(icon)).unwrap_or(" ");

        ListItem::new(Line::from(vec![
            Span::styled(format!(" {glyph} "), style),
            Span::styled(self.label.clone(), style),
        ]))
    }
}
