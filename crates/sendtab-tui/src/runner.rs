//! Interactive share overlay loop.
//!
//! Runs a synchronous crossterm poll/read loop around the overlay: the host
//! mutates the controller, the overlay re-renders when the controller's
//! generation moves, and row activation dispatches through the listener
//! traits back into an outcome for the caller.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use sendtab_core::prelude::*;
use sendtab_core::{
    DevicePickerDialog, DeviceRecord, DisplayMode, ListController, RowRenderer, Settings,
    TargetSelectedListener,
};

use crate::overlay::{render_overlay, OverlayState};
use crate::picker::{render_picker, PickerFlag, PickerState};
use crate::theme::icons::IconSet;

/// What the overlay session ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayOutcome {
    /// A target device was chosen; `guid` identifies it.
    SendTo { guid: String },
    /// The primary send action was chosen (no device list shown).
    ActionSelected,
    /// User closed the overlay without choosing anything.
    Cancelled,
}

/// Listener that parks the outcome for the event loop to collect.
struct OutcomeSink {
    outcome: Rc<RefCell<Option<OverlayOutcome>>>,
}

impl TargetSelectedListener for OutcomeSink {
    fn on_target_selected(&self, guid: &str) {
        info!(guid, "target selected");
        *self.outcome.borrow_mut() = Some(OverlayOutcome::SendTo {
            guid: guid.to_string(),
        });
    }

    fn on_action_selected(&self) {
        info!("primary send action selected");
        *self.outcome.borrow_mut() = Some(OverlayOutcome::ActionSelected);
    }
}

/// Host display policy: which mode the overlay opens in for a device count.
///
/// No devices means there is nothing to list, only the plain send button;
/// past the inline budget the overlay collapses to the picker button.
pub fn display_mode_for(device_count: usize, max_inline: usize) -> DisplayMode {
    if device_count == 0 {
        DisplayMode::None
    } else if device_count > max_inline {
        DisplayMode::ShowDevices
    } else {
        DisplayMode::List
    }
}

/// Display the share overlay and wait for the user's choice.
pub fn run_overlay(
    devices: Vec<DeviceRecord>,
    settings: &Settings,
    initial_mode: DisplayMode,
) -> Result<OverlayOutcome> {
    let outcome: Rc<RefCell<Option<OverlayOutcome>>> = Rc::new(RefCell::new(None));
    let listener = Rc::new(OutcomeSink {
        outcome: Rc::clone(&outcome),
    });
    let picker_flag = PickerFlag::new();

    let renderer = RowRenderer::new(
        Rc::clone(&listener) as Rc<dyn TargetSelectedListener>,
        Rc::new(picker_flag.clone()) as Rc<dyn DevicePickerDialog>,
    );

    let mut controller = ListController::new();
    controller.set_device_list(devices);
    controller.switch_mode(initial_mode, settings);

    let icons = IconSet::new(settings.icon_mode);
    let mut overlay = OverlayState::new();
    let mut picker: Option<PickerState> = None;

    let mut terminal = ratatui::init();

    let result = loop {
        overlay.sync(&controller, &renderer);

        terminal
            .draw(|frame| {
                render_overlay(frame, &mut overlay, &icons);
                if let Some(picker_state) = picker.as_mut() {
                    render_picker(frame, controller.device_records(), picker_state, &icons);
                }
            })
            .map_err(|e| Error::terminal(e.to_string()))?;

        if event::poll(Duration::from_millis(100)).map_err(|e| Error::terminal(e.to_string()))? {
            if let Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) = event::read().map_err(|e| Error::terminal(e.to_string()))?
            {
                let mut close_picker = false;
                match picker.as_mut() {
                    Some(picker_state) => match code {
                        KeyCode::Esc => close_picker = true,
                        KeyCode::Up | KeyCode::Char('k') => picker_state.select_previous(),
                        KeyCode::Down | KeyCode::Char('j') => {
                            picker_state.select_next(controller.device_records().len())
                        }
                        KeyCode::Enter => {
                            if let Some(record) =
                                picker_state.selected_record(controller.device_records())
                            {
                                listener.on_target_selected(&record.guid);
                            }
                        }
                        _ if is_cancel_key(code, modifiers) => break OverlayOutcome::Cancelled,
                        _ => {}
                    },
                    None => {
                        if is_cancel_key(code, modifiers) {
                            break OverlayOutcome::Cancelled;
                        }

                        match code {
                            KeyCode::Up | KeyCode::Char('k') => overlay.select_previous(),
                            KeyCode::Down | KeyCode::Char('j') => overlay.select_next(),
                            KeyCode::Enter => {
                                overlay.activate_selected();
                            }
                            // Number key quick selection
                            KeyCode::Char(c) => {
                                if let Some(index) = digit_index(c, overlay.rows().len()) {
                                    overlay.select_index(index);
                                    overlay.activate_selected();
                                }
                            }
                            _ => {}
                        }
                    }
                }

                if close_picker {
                    picker = None;
                }
            }
        }

        if picker_flag.take() {
            picker = Some(PickerState::new());
        }

        if let Some(outcome) = outcome.borrow_mut().take() {
            break outcome;
        }
    };

    ratatui::restore();
    Ok(result)
}

/// Convert a digit key to a row index (1-based keys, 1-9 only).
pub fn digit_index(key: char, row_count: usize) -> Option<usize> {
    if !key.is_ascii_digit() || key == '0' {
        return None;
    }

    let index = (key as usize) - ('1' as usize);
    if index < row_count {
        Some(index)
    } else {
        None
    }
}

/// Check if a key press is a cancellation request
pub fn is_cancel_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Esc => true,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mode_for_counts() {
        assert_eq!(display_mode_for(0, 4), DisplayMode::None);
        assert_eq!(display_mode_for(1, 4), DisplayMode::List);
        assert_eq!(display_mode_for(4, 4), DisplayMode::List);
        assert_eq!(display_mode_for(5, 4), DisplayMode::ShowDevices);
    }

    #[test]
    fn test_digit_index() {
        assert_eq!(digit_index('1', 3), Some(0));
        assert_eq!(digit_index('3', 3), Some(2));
        assert_eq!(digit_index('4', 3), None); // Out of range
        assert_eq!(digit_index('0', 3), None); // Zero not valid
        assert_eq!(digit_index('a', 3), None); // Letter not valid
    }

    #[test]
    fn test_is_cancel_key() {
        assert!(is_cancel_key(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(is_cancel_key(KeyCode::Char('Q'), KeyModifiers::NONE));
        assert!(is_cancel_key(KeyCode::Esc, KeyModifiers::NONE));
        assert!(is_cancel_key(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert!(!is_cancel_key(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(!is_cancel_key(KeyCode::Char('1'), KeyModifiers::NONE));
        assert!(!is_cancel_key(KeyCode::Enter, KeyModifiers::NONE));
    }

    #[test]
    fn test_outcome_sink_parks_latest_outcome() {
        let outcome = Rc::new(RefCell::new(None));
        let sink = OutcomeSink {
            outcome: Rc::clone(&outcome),
        };

        sink.on_action_selected();
        assert_eq!(
            outcome.borrow_mut().take(),
            Some(OverlayOutcome::ActionSelected)
        );

        sink.on_target_selected("g7");
        assert_eq!(
            outcome.borrow_mut().take(),
            Some(OverlayOutcome::SendTo {
                guid: "g7".to_string()
            })
        );
    }
}
