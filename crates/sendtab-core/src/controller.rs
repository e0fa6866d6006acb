//! Display mode state machine for the send-tab overlay list.
//!
//! [`ListController`] owns the canonical device collection and the current
//! display mode, and projects the two into the visible row set. The host
//! mutates it through [`ListController::set_device_list`] and
//! [`ListController::switch_mode`] only; each effective mutation advances the
//! generation counter exactly once, and the host re-renders only when the
//! generation moves.

use tracing::debug;

use crate::device::DeviceRecord;
use crate::render::LabelResolver;

/// What the overlay list displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Every known device as its own clickable row.
    List,
    /// A single synthetic "send" button row; no device list shown.
    None,
    /// A single synthetic "send to other device" button row that opens the
    /// secondary device picker.
    ShowDevices,
}

/// One renderable row: a real device in [`DisplayMode::List`], or the single
/// synthetic button row in the other two modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisibleItem {
    Device(DeviceRecord),
    Synthetic,
}

/// The controller-owned display state.
///
/// Invariants:
/// - `mode == Some(List)` ⇒ `visible` mirrors `devices` one-to-one in order.
/// - `mode == Some(None | ShowDevices)` ⇒ `visible` is exactly one
///   [`VisibleItem::Synthetic`] and `dummy_label` is set.
/// - `devices` survives every mode switch; switching back to `List` restores
///   the full list without the host re-supplying it.
#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    /// Unset until the first `switch_mode`; no rendering contract before that.
    pub mode: Option<DisplayMode>,

    /// Canonical device collection, independent of display mode.
    pub devices: Vec<DeviceRecord>,

    /// The projection actually rendered.
    pub visible: Vec<VisibleItem>,

    /// Label for the synthetic row in the button-like modes.
    pub dummy_label: Option<String>,
}

/// Owns the display state and the transition logic between modes.
#[derive(Debug, Clone, Default)]
pub struct ListController {
    state: DisplayState,
    generation: u64,
}

impl ListController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the canonical device list.
    ///
    /// In `List` mode the visible rows are recomputed to mirror the new list
    /// and one data-changed notification is emitted. In every other mode (or
    /// before the first mode switch) the list is stored for later without
    /// touching the visible rows. An empty list is normal input.
    pub fn set_device_list(&mut self, devices: Vec<DeviceRecord>) {
        debug!(count = devices.len(), "device list replaced");
        self.state.devices = devices;

        if self.state.mode == Some(DisplayMode::List) {
            self.mirror_device_list();
            self.notify();
        }
    }

    /// The last device list supplied, independent of the current mode.
    pub fn device_records(&self) -> &[DeviceRecord] {
        &self.state.devices
    }

    /// Switch the display mode.
    ///
    /// Switching to the current mode is a no-op and emits no notification.
    /// Every other transition is legal and emits exactly one notification.
    /// The dummy label for the button-like modes is pulled from `labels` at
    /// switch time.
    pub fn switch_mode(&mut self, new_mode: DisplayMode, labels: &dyn LabelResolver) {
        if self.state.mode == Some(new_mode) {
            return;
        }

        debug!(from = ?self.state.mode, to = ?new_mode, "display mode switch");
        self.state.mode = Some(new_mode);

        match new_mode {
            DisplayMode::List => self.mirror_device_list(),
            DisplayMode::None | DisplayMode::ShowDevices => {
                self.show_dummy_row(labels.label_for(new_mode));
            }
        }

        self.notify();
    }

    /// Current display mode, if one has been set.
    pub fn mode(&self) -> Option<DisplayMode> {
        self.state.mode
    }

    /// The rows to render for the current mode.
    pub fn visible_items(&self) -> &[VisibleItem] {
        &self.state.visible
    }

    /// Label for the synthetic row; set whenever the mode is button-like.
    pub fn dummy_label(&self) -> Option<&str> {
        self.state.dummy_label.as_deref()
    }

    /// Data-changed notification counter.
    ///
    /// Advances by exactly one for each `set_device_list` or `switch_mode`
    /// call that actually alters the visible rows. Hosts re-render when the
    /// value they last observed differs, never eagerly.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Rebuild the visible rows as a one-to-one mirror of the canonical list.
    fn mirror_device_list(&mut self) {
        self.state.visible = self
            .state
            .devices
            .iter()
            .cloned()
            .map(VisibleItem::Device)
            .collect();
    }

    /// Replace the visible rows with the single synthetic button row.
    fn show_dummy_row(&mut self, label: String) {
        self.state.dummy_label = Some(label);
        self.state.visible = vec![VisibleItem::Synthetic];
    }

    fn notify(&mut self) {
        self.generation += 1;
    }
}
