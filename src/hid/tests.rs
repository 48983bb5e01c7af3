//! Unit tests for the keymap, report layout, and report encoder.
//!
//! These run on the host and verify the pure logic; the writer loop is
//! covered by `tests/integration.rs`.

use super::encoder::ReportEncoder;
use super::keyboard::{KeyboardReport, KEYBOARD_REPORT_SIZE};
use super::keymap::{modifier_bit_for, usage_for};
use super::{EventKind, InputEvent};

// Input-layer scancodes used below (linux/input-event-codes.h).
const KEY_A: u16 = 30;
const KEY_B: u16 = 48;
const KEY_C: u16 = 46;
const KEY_D: u16 = 32;
const KEY_E: u16 = 18;
const KEY_F: u16 = 33;
const KEY_G: u16 = 34;
const KEY_H: u16 = 35;
const KEY_L: u16 = 38;
const KEY_O: u16 = 24;
const KEY_LEFTSHIFT: u16 = 42;
const KEY_LEFTCTRL: u16 = 29;

// ═══════════════════════════════════════════════════════════════════════════
// Keymap Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn usage_for_letter_keys() {
    assert_eq!(usage_for(KEY_H), 11);
    assert_eq!(usage_for(KEY_E), 8);
    assert_eq!(usage_for(KEY_L), 15);
    assert_eq!(usage_for(KEY_O), 18);
    assert_eq!(usage_for(KEY_A), 4);
}

#[test]
fn usage_for_unmapped_scancodes() {
    // 84 is a hole in the kernel table; anything past the table end is
    // unmapped too.
    assert_eq!(usage_for(84), 0);
    assert_eq!(usage_for(194), 0);
    assert_eq!(usage_for(u16::MAX), 0);
}

#[test]
fn modifier_bits_are_distinct_and_cover_the_byte() {
    let codes = [29, 42, 56, 125, 97, 54, 100, 126];
    let mut seen = 0u8;
    for code in codes {
        let bit = modifier_bit_for(code);
        assert_eq!(bit.count_ones(), 1, "scancode {code}");
        assert_eq!(seen & bit, 0, "scancode {code} reuses a bit");
        seen |= bit;
    }
    assert_eq!(seen, 0xFF);
}

#[test]
fn non_modifier_scancodes_have_no_modifier_bit() {
    assert_eq!(modifier_bit_for(KEY_A), 0);
    assert_eq!(modifier_bit_for(0), 0);
    assert_eq!(modifier_bit_for(u16::MAX), 0);
}

// ═══════════════════════════════════════════════════════════════════════════
// Keyboard Report Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn keyboard_report_empty() {
    let report = KeyboardReport::empty();
    assert!(report.is_empty());
    assert_eq!(report.modifier, 0);
    assert_eq!(report.reserved, 0);
    assert_eq!(report.keycodes, [0; 6]);
}

#[test]
fn keyboard_report_serialize() {
    let report = KeyboardReport {
        modifier: 0x02,
        reserved: 0,
        keycodes: [4, 5, 6, 0, 0, 0],
    };

    let mut buf = [0u8; KEYBOARD_REPORT_SIZE];
    let written = report.serialize(&mut buf);

    assert_eq!(written, 8);
    assert_eq!(buf, [0x02, 0x00, 4, 5, 6, 0, 0, 0]);
}

#[test]
fn keyboard_report_serialize_buffer_too_small() {
    let report = KeyboardReport::empty();
    let mut small_buf = [0u8; 4];
    assert_eq!(report.serialize(&mut small_buf), 0);
}

// ═══════════════════════════════════════════════════════════════════════════
// Encoder Tests
// ═══════════════════════════════════════════════════════════════════════════

fn press(code: u16) -> InputEvent {
    InputEvent::key_press(code)
}

fn release(code: u16) -> InputEvent {
    InputEvent::key_release(code)
}

/// Currently-held usages as an order-insensitive sorted list.
fn held_set(enc: &ReportEncoder) -> Vec<u8> {
    let mut held = enc.report().keycodes[..enc.keys_held()].to_vec();
    held.sort_unstable();
    held
}

#[test]
fn non_key_events_are_ignored() {
    let mut enc = ReportEncoder::new();
    enc.apply(&InputEvent {
        kind: EventKind::Other,
        code: KEY_A,
        value: 1,
    });
    assert!(enc.report().is_empty());
    assert_eq!(enc.keys_held(), 0);
}

#[test]
fn unmapped_scancode_leaves_state_unchanged() {
    let mut enc = ReportEncoder::new();
    enc.apply(&press(KEY_A));
    let before = *enc.report();

    enc.apply(&press(84));
    enc.apply(&release(84));

    assert_eq!(*enc.report(), before);
    assert_eq!(enc.keys_held(), 1);
}

#[test]
fn modifier_press_release_roundtrip() {
    let mut enc = ReportEncoder::new();

    enc.apply(&press(KEY_LEFTSHIFT));
    assert_eq!(enc.report().modifier, 0x02);

    enc.apply(&press(KEY_LEFTCTRL));
    assert_eq!(enc.report().modifier, 0x03);

    enc.apply(&release(KEY_LEFTSHIFT));
    enc.apply(&release(KEY_LEFTCTRL));
    assert_eq!(enc.report().modifier, 0);
}

#[test]
fn modifier_press_is_idempotent() {
    let mut enc = ReportEncoder::new();
    enc.apply(&press(KEY_LEFTSHIFT));
    enc.apply(&press(KEY_LEFTSHIFT));
    assert_eq!(enc.report().modifier, 0x02);

    enc.apply(&release(KEY_LEFTSHIFT));
    assert_eq!(enc.report().modifier, 0);
}

#[test]
fn releasing_unpressed_modifier_is_harmless() {
    let mut enc = ReportEncoder::new();
    enc.apply(&release(KEY_LEFTSHIFT));
    assert!(enc.report().is_empty());
}

#[test]
fn modifiers_never_occupy_key_slots() {
    let mut enc = ReportEncoder::new();
    enc.apply(&press(KEY_LEFTSHIFT));
    assert_eq!(enc.keys_held(), 0);
    assert_eq!(enc.report().keycodes, [0; 6]);
}

#[test]
fn keys_fill_in_press_order() {
    let mut enc = ReportEncoder::new();
    for code in [KEY_A, KEY_B, KEY_C] {
        enc.apply(&press(code));
    }
    assert_eq!(enc.keys_held(), 3);
    assert_eq!(enc.report().keycodes, [4, 5, 6, 0, 0, 0]);
}

#[test]
fn repeated_press_of_tracked_key_is_a_noop() {
    let mut enc = ReportEncoder::new();
    enc.apply(&press(KEY_A));
    enc.apply(&press(KEY_A)); // autorepeat
    assert_eq!(enc.keys_held(), 1);
    assert_eq!(enc.report().keycodes, [4, 0, 0, 0, 0, 0]);
}

#[test]
fn seventh_key_clobbers_last_slot_only() {
    let mut enc = ReportEncoder::new();
    for code in [KEY_A, KEY_B, KEY_C, KEY_D, KEY_E, KEY_F] {
        enc.apply(&press(code));
    }
    assert_eq!(enc.keys_held(), 6);
    assert_eq!(enc.report().keycodes, [4, 5, 6, 7, 8, 9]);

    enc.apply(&press(KEY_G));
    assert_eq!(enc.keys_held(), 6);
    assert_eq!(enc.report().keycodes, [4, 5, 6, 7, 8, 10]);
}

#[test]
fn release_of_rollover_evicted_key_is_a_noop() {
    let mut enc = ReportEncoder::new();
    for code in [KEY_A, KEY_B, KEY_C, KEY_D, KEY_E, KEY_F, KEY_G] {
        enc.apply(&press(code));
    }
    // F's usage (9) was clobbered out of the report by G.
    enc.apply(&release(KEY_F));
    assert_eq!(enc.keys_held(), 6);
    assert_eq!(enc.report().keycodes, [4, 5, 6, 7, 8, 10]);

    enc.apply(&release(KEY_G));
    assert_eq!(enc.keys_held(), 5);
    assert_eq!(enc.report().keycodes, [4, 5, 6, 7, 8, 0]);
}

#[test]
fn release_swap_removes_and_keeps_the_rest() {
    let mut enc = ReportEncoder::new();
    for code in [KEY_A, KEY_B, KEY_C] {
        enc.apply(&press(code));
    }

    enc.apply(&release(KEY_A));

    // The last occupied slot moved into the hole; order changes but the
    // held multiset is exact.
    assert_eq!(enc.keys_held(), 2);
    assert_eq!(enc.report().keycodes, [6, 5, 0, 0, 0, 0]);
    assert_eq!(held_set(&enc), vec![5, 6]);
}

#[test]
fn press_release_roundtrip_restores_empty_report() {
    let mut enc = ReportEncoder::new();
    enc.apply(&press(KEY_A));
    assert!(!enc.report().is_empty());

    enc.apply(&release(KEY_A));
    assert!(enc.report().is_empty());
    assert_eq!(enc.keys_held(), 0);
}

#[test]
fn hello_sequence_ends_all_zero() {
    let mut enc = ReportEncoder::new();
    let events = [
        press(KEY_H),
        release(KEY_H),
        press(KEY_LEFTSHIFT),
        press(KEY_E),
        release(KEY_E),
        release(KEY_LEFTSHIFT),
        press(KEY_L),
        release(KEY_L),
        press(KEY_L),
        release(KEY_L),
        press(KEY_O),
        release(KEY_O),
    ];

    for (i, event) in events.iter().enumerate() {
        enc.apply(event);
        assert!(enc.keys_held() <= 6, "after event {i}");
        assert_eq!(enc.report().reserved, 0, "after event {i}");
    }

    assert!(enc.report().is_empty());
    assert_eq!(enc.keys_held(), 0);
}
