//! The share overlay: a centered modal listing the controller's visible rows.

use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use sendtab_core::{ListController, RowRenderer};

use crate::row::OverlayRow;
use crate::theme::icons::IconSet;
use crate::theme::styles;

/// Selection and row cache for the overlay list.
///
/// Rows are rebuilt through the renderer only when the controller's
/// generation moves; between notifications the cached rows (and their
/// activation handlers) are reused as-is. Rebuilding passes each old row
/// back through the renderer, exercising the view-recycling contract.
pub struct OverlayState {
    selected: usize,
    list_state: ListState,
    rows: Vec<OverlayRow>,
    seen_generation: Option<u64>,
}

impl OverlayState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            list_state,
            rows: Vec::new(),
            seen_generation: None,
        }
    }

    /// Re-derive the rows from the controller if its generation moved.
    ///
    /// Returns whether the rows were rebuilt.
    pub fn sync(&mut self, controller: &ListController, renderer: &RowRenderer) -> bool {
        let generation = controller.generation();
        if self.seen_generation == Some(generation) {
            return false;
        }
        self.seen_generation = Some(generation);

        let Some(mode) = controller.mode() else {
            // No rendering contract before the first mode switch.
            self.rows.clear();
            return true;
        };

        let pool = std::mem::take(&mut self.rows);
        let mut reuse = pool.into_iter();

        self.rows = controller
            .visible_items()
            .iter()
            .enumerate()
            .map(|(position, item)| {
                renderer.render(position, mode, item, controller.dummy_label(), reuse.next())
            })
            .collect();

        // Keep the selection in range after the row set changed.
        if self.selected >= self.rows.len() {
            self.selected = self.rows.len().saturating_sub(1);
        }
        self.list_state.select(if self.rows.is_empty() {
            None
        } else {
            Some(self.selected)
        });
        true
    }

    pub fn rows(&self) -> &[OverlayRow] {
        &self.rows
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.rows.len() {
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

    pub fn select_index(&mut self, index: usize) {
        if index < self.rows.len() {
            self.selected = index;
            self.list_state.select(Some(self.selected));
        }
    }

    /// Activate the selected row's handler.
    ///
    /// Returns false when there is no row to activate.
    pub fn activate_selected(&self) -> bool {
        match self.rows.get(self.selected) {
            Some(row) => row.activate(),
            None => false,
        }
    }
}

impl Default for OverlayState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the share overlay as a centered modal.
pub fn render_overlay(frame: &mut Frame, state: &mut OverlayState, icons: &IconSet) {
    let area = frame.area();

    let modal_width = (area.width * 60 / 100).clamp(30, 50);
    let content_height = state.rows.len().max(1) as u16 + 6; // rows + chrome
    let modal_height = content_height.min(area.height.saturating_sub(2));
    let modal_area = centered_rect(modal_width, modal_height, area);

    frame.render_widget(Clear, modal_area);

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_active())
        .title(" Send to device ")
        .title_style(styles::accent_bold());

    let inner_area = outer_block.inner(modal_area);
    frame.render_widget(outer_block, modal_area);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Row list
        Constraint::Length(1), // Footer/help
    ])
    .split(inner_area);

    if state.rows.is_empty() {
        let empty = Paragraph::new("No devices available")
            .alignment(Alignment::Center)
            .style(styles::text_muted());
        frame.render_widget(empty, chunks[0]);
    } else {
        let items: Vec<ListItem> = state
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| row.to_list_item(i == state.selected, icons))
            .collect();

        let list = List::new(items);
        frame.render_stateful_widget(list, chunks[0], &mut state.list_state);
    }

    let footer = Line::from(vec![
        Span::styled("↑/↓", styles::keybinding()),
        Span::raw(" Navigate  "),
        Span::styled("Enter", styles::keybinding()),
        Span::raw(" Send  "),
        Span::styled("q", styles::keybinding()),
        Span::raw(" Close"),
    ]);
    frame.render_widget(
        Paragraph::new(footer).alignment(Alignment::Center),
        chunks[1],
    );
}

/// Center a fixed-size rect within an area, clamped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
