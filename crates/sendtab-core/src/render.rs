//! Per-row rendering policy and the collaborator seams around it.
//!
//! [`RowRenderer`] turns (position, mode, item) into a configured row view:
//! label, icon, background, and the activation behavior for that mode. The
//! actual view type, icon glyphs, and dialog surface are host concerns behind
//! the traits below.

use std::rc::Rc;

use crate::controller::{DisplayMode, VisibleItem};
use crate::device::DeviceIcon;

/// Host-supplied callback sink for row activation outcomes.
pub trait TargetSelectedListener {
    /// A concrete device row was activated in `List` mode.
    fn on_target_selected(&self, guid: &str);

    /// The synthetic send-button row was activated in `None` mode.
    fn on_action_selected(&self);
}

/// The secondary device-picker surface, shown verbatim when the
/// `ShowDevices` row is activated.
pub trait DevicePickerDialog {
    fn show(&self);
}

/// Opaque mode → display string lookup for the synthetic button rows.
pub trait LabelResolver {
    fn label_for(&self, mode: DisplayMode) -> String;
}

/// Icon handle attached to a row; glyph resolution is the host's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowIcon {
    /// Fixed send-tab icon used by both button-like modes.
    SendTab,
    /// Device-type icon used by `List` rows.
    Device(DeviceIcon),
}

/// Background style for a row. The first row of the overlay gets a distinct
/// style; every other position uses the standard one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowBackground {
    First,
    Standard,
}

/// A reusable row view.
///
/// Implementations own at most one activation handler. `set_on_activate`
/// replaces it; the renderer still clears explicitly before setting so a
/// recycled row can never accumulate stale handlers.
pub trait RowView {
    fn set_label_and_icon(&mut self, label: &str, icon: RowIcon);
    fn set_background(&mut self, background: RowBackground);
    fn clear_on_activate(&mut self);
    fn set_on_activate(&mut self, handler: Box<dyn Fn()>);
}

/// Configures one row view per (position, mode, item).
///
/// Owns no display state; reads everything per call. The listener and dialog
/// are shared single-threaded handles, cloned into each row's activation
/// handler.
pub struct RowRenderer {
    listener: Rc<dyn TargetSelectedListener>,
    dialog: Rc<dyn DevicePickerDialog>,
}

impl RowRenderer {
    pub fn new(listener: Rc<dyn TargetSelectedListener>, dialog: Rc<dyn DevicePickerDialog>) -> Self {
        Self { listener, dialog }
    }

    /// Render one row, reusing `reuse` when provided.
    ///
    /// Total over the three modes. A [`VisibleItem::Synthetic`] reaching a
    /// `List`-mode render (or a missing dummy label outside `List` mode)
    /// means the controller invariant was broken upstream and panics.
    pub fn render<V: RowView + Default>(
        &self,
        position: usize,
        mode: DisplayMode,
        item: &VisibleItem,
        dummy_label: Option<&str>,
        reuse: Option<V>,
    ) -> V {
        let mut row = reuse.unwrap_or_default();

        // The first row of the overlay has a unique style.
        if position == 0 {
            row.set_background(RowBackground::First);
        } else {
            row.set_background(RowBackground::Standard);
        }

        row.clear_on_activate();

        match mode {
            DisplayMode::List => {
                let record = match item {
                    VisibleItem::Device(record) => record,
                    VisibleItem::Synthetic => {
                        panic!("synthetic row rendered in List mode: visible items out of sync")
                    }
                };

                row.set_label_and_icon(&record.name, RowIcon::Device(record.icon()));

                let listener = Rc::clone(&self.listener);
                let guid = record.guid.clone();
                row.set_on_activate(Box::new(move || listener.on_target_selected(&guid)));
            }
            DisplayMode::None => {
                row.set_label_and_icon(self.expect_dummy_label(dummy_label), RowIcon::SendTab);

                let listener = Rc::clone(&self.listener);
                row.set_on_activate(Box::new(move || listener.on_action_selected()));
            }
            DisplayMode::ShowDevices => {
                row.set_label_and_icon(self.expect_dummy_label(dummy_label), RowIcon::SendTab);

                let dialog = Rc::clone(&self.dialog);
                row.set_on_activate(Box::new(move || dialog.show()));
            }
        }

        row
    }

    fn expect_dummy_label<'a>(&self, dummy_label: Option<&'a str>) -> &'a str {
        match dummy_label {
            Some(label) => label,
            None => panic!("button-like mode rendered without a dummy label"),
        }
    }
}
