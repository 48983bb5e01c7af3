//! Report-state encoder: folds a stream of key events into the current
//! boot-keyboard report.
//!
//! The encoder owns the one live [`KeyboardReport`] and the count of
//! occupied key slots. It is purely sequential - the gadget writer task
//! is the only caller, so there is no locking here.

use log::warn;

use super::keyboard::KeyboardReport;
use super::keymap;
use super::{EventKind, InputEvent};

/// Stateful scancode-stream → report encoder.
///
/// Invariants maintained by [`apply`](Self::apply):
/// - `keys_held <= 6`, and `keycodes[..keys_held]` holds the currently
///   tracked keys with no gaps and no duplicates; slots past `keys_held`
///   are 0.
/// - modifiers live only in the modifier byte, never in the key slots.
/// - the reserved byte is never touched.
#[derive(Debug, Default)]
pub struct ReportEncoder {
    report: KeyboardReport,
    keys_held: usize,
}

impl ReportEncoder {
    /// New encoder with an all-zero report (nothing held).
    pub const fn new() -> Self {
        Self {
            report: KeyboardReport::empty(),
            keys_held: 0,
        }
    }

    /// Read-only snapshot of the current report.
    pub fn report(&self) -> &KeyboardReport {
        &self.report
    }

    /// Number of occupied key slots (0..=6).
    pub fn keys_held(&self) -> usize {
        self.keys_held
    }

    /// Fold one input event into the report.
    ///
    /// Non-key events and unmapped scancodes leave the report untouched
    /// (the latter with a warning). Releases use swap-removal: the last
    /// occupied slot is moved into the hole, so slot order after a
    /// release is not press order. Bit-compatible with what hosts expect
    /// from a boot keyboard, which treats the slots as a set.
    pub fn apply(&mut self, event: &InputEvent) {
        if event.kind != EventKind::Key {
            return;
        }

        let mod_bit = keymap::modifier_bit_for(event.code);
        if mod_bit != 0 {
            if event.is_press() {
                self.report.modifier |= mod_bit;
            } else {
                self.report.modifier &= !mod_bit;
            }
            return;
        }

        let usage = keymap::usage_for(event.code);
        if usage == 0 {
            warn!("no HID usage mapping for scancode {}", event.code);
            return;
        }

        let held = &self.report.keycodes[..self.keys_held];
        match held.iter().position(|&k| k == usage) {
            Some(pos) => {
                if !event.is_press() {
                    // Swap-remove: keep the occupied prefix gap-free.
                    let last = self.keys_held - 1;
                    self.report.keycodes[pos] = self.report.keycodes[last];
                    self.report.keycodes[last] = 0;
                    self.keys_held -= 1;
                }
                // Press of an already-tracked key (e.g. autorepeat): no-op.
            }
            None if event.is_press() => {
                if self.keys_held < self.report.keycodes.len() {
                    self.report.keycodes[self.keys_held] = usage;
                    self.keys_held += 1;
                } else {
                    // Rollover: boot-keyboard convention is to clobber the
                    // most recent slot, not to flood the report with the
                    // phantom usage 0x01.
                    self.report.keycodes[5] = usage;
                }
            }
            None => {
                // Release of a key we never tracked (unmapped at press
                // time, or evicted by rollover): nothing to do.
            }
        }
    }
}
