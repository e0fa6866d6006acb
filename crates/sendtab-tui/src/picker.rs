//! Secondary device picker: the longer list behind the "send to other
//! device" row.

use std::cell::Cell;
use std::rc::Rc;

use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use sendtab_core::{DevicePickerDialog, DeviceRecord, RowIcon};

use crate::overlay::centered_rect;
use crate::theme::icons::IconSet;
use crate::theme::styles;

/// Deferred open request for the picker.
///
/// The renderer installs `show()` on the ShowDevices row; the event loop
/// drains the flag after dispatch and opens the modal. Cloning shares the
/// flag.
#[derive(Clone, Default)]
pub struct PickerFlag {
    requested: Rc<Cell<bool>>,
}

impl PickerFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume a pending open request.
    pub fn take(&self) -> bool {
        self.requested.replace(false)
    }
}

impl DevicePickerDialog for PickerFlag {
    fn show(&self) {
        tracing::debug!("device picker requested");
        self.requested.set(true);
    }
}

/// Selection state for the picker list.
pub struct PickerState {
    selected: usize,
    list_state: ListState,
}

impl PickerState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            list_state,
        }
    }

    pub fn select_next(&mut self, count: usize) {
        if self.selected + 1 < count {
            self.selected += 1;
            self.list_state.select(Some(self.selected));
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.list_state.select(Some(self.selected));
        }
    }

    /// The record currently under the cursor.
    pub fn selected_record<'a>(&self, devices: &'a [DeviceRecord]) -> Option<&'a DeviceRecord> {
        devices.get(self.selected)
    }
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the picker as a modal over the overlay.
pub fn render_picker(
    frame: &mut Frame,
    devices: &[DeviceRecord],
    state: &mut PickerState,
    icons: &IconSet,
) {
    let area = frame.area();

    let modal_width = (area.width * 60 / 100).clamp(30, 50);
    let modal_height = (devices.len().max(1) as u16 + 6).min(area.height.saturating_sub(2));
    let modal_area = centered_rect(modal_width, modal_height, area);

    frame.render_widget(Clear, modal_area);

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_active())
        .title(" Choose a device ")
        .title_style(styles::accent_bold());

    let inner_area = outer_block.inner(modal_area);
    frame.render_widget(outer_block, modal_area);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Device list
        Constraint::Length(1), // Footer/help
    ])
    .split(inner_area);

    if devices.is_empty() {
        let empty = Paragraph::new("No devices known")
            .alignment(Alignment::Center)
            .style(styles::text_muted());
        frame.render_widget(empty, chunks[0]);
    } else {
        let items: Vec<ListItem> = devices
            .iter()
            .map(|record| {
                let glyph = icons.resolve(RowIcon::Device(record.icon()));
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {glyph} "), styles::text_secondary()),
                    Span::styled(record.name.clone(), styles::text_secondary()),
                ]))
            })
            .collect();

        let list = List::new(items).highlight_style(styles::row_selected());
        frame.render_stateful_widget(list, chunks[0], &mut state.list_state);
    }

    let footer = Line::from(vec![
        Span::styled("↑/↓", styles::keybinding()),
        Span::raw(" Navigate  "),
        Span::styled("Enter", styles::keybinding()),
        Span::raw(" Send  "),
        Span::styled("Esc", styles::keybinding()),
        Span::raw(" Back"),
    ]);
    frame.render_widget(
        Paragraph::new(footer).alignment(Alignment::Center),
        chunks[1],
    );
}
