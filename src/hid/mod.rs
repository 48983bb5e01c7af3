//! HID report types and the input-event → boot-report translation layer.
//!
//! The input side of the crate speaks in evdev-style triples
//! (event kind, scancode, value); this module defines that event model
//! and the submodules that turn a stream of such events into 8-byte USB
//! boot-keyboard reports:
//!
//! - [`keymap`] - static scancode → HID usage / modifier-bit tables
//! - [`keyboard`] - the [`KeyboardReport`] wire format
//! - [`encoder`] - the [`ReportEncoder`] state machine

pub mod encoder;
pub mod keyboard;
pub mod keymap;

#[cfg(test)]
mod tests;

pub use encoder::ReportEncoder;
pub use keyboard::KeyboardReport;

/// Category of an input event, as produced by the input source.
///
/// Only key events affect the report; everything else (pointer motion,
/// sync markers, switches) is accepted and ignored downstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// A key press/release (evdev `EV_KEY`).
    Key,
    /// Any other event category.
    Other,
}

/// One low-level input event.
///
/// `value` follows the evdev convention: 0 is a release, anything
/// non-zero is a press (autorepeat arrives as 2 and behaves as a press,
/// which the encoder absorbs as an already-tracked no-op).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputEvent {
    pub kind: EventKind,
    pub code: u16,
    pub value: i32,
}

impl InputEvent {
    /// Key-down event for `code`.
    pub const fn key_press(code: u16) -> Self {
        Self {
            kind: EventKind::Key,
            code,
            value: 1,
        }
    }

    /// Key-up event for `code`.
    pub const fn key_release(code: u16) -> Self {
        Self {
            kind: EventKind::Key,
            code,
            value: 0,
        }
    }

    /// Whether this event is a press (any non-zero value).
    pub const fn is_press(&self) -> bool {
        self.value != 0
    }
}
