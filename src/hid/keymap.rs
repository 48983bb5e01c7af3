//! Static scancode → HID translation tables.
//!
//! The usage table is the Linux kernel's `hid_keyboard[]` mapping from
//! `drivers/input/hid-input.c`, inverted: indexed by input-layer scancode,
//! yielding the HID Keyboard/Keypad usage the host expects in a boot
//! report. A value of 0 means "no mapping" - callers must drop such
//! events, never write the 0 into a report.
//!
//! Modifier keys are kept out of the usage path entirely: they live in
//! the modifier bitmask byte of the report, one distinct bit each, and
//! are resolved through [`modifier_bit_for`] first.

/// Scancode → HID usage, indexed by scancode. 0 = unmapped.
const HID_USAGE_BY_SCANCODE: &[u8] = &[
    // 0..=9
    3, 41, 30, 31, 32, 33, 34, 35, 36, 37,
    // 10..=19
    38, 39, 45, 46, 42, 43, 20, 26, 8, 21,
    // 20..=29
    23, 28, 24, 12, 18, 19, 47, 48, 40, 224,
    // 30..=39
    4, 22, 7, 9, 10, 11, 13, 14, 15, 51,
    // 40..=49
    52, 53, 225, 50, 29, 27, 6, 25, 5, 17,
    // 50..=59
    16, 54, 55, 56, 229, 85, 226, 44, 57, 58,
    // 60..=69
    59, 60, 61, 62, 63, 64, 65, 66, 67, 83,
    // 70..=79
    71, 95, 96, 97, 86, 92, 93, 94, 87, 89,
    // 80..=89
    90, 91, 98, 99, 0, 148, 100, 68, 69, 135,
    // 90..=99
    146, 147, 138, 136, 139, 140, 88, 228, 84, 70,
    // 100..=109
    230, 0, 74, 82, 75, 80, 79, 77, 81, 78,
    // 110..=119
    73, 76, 0, 239, 238, 237, 102, 103, 0, 72,
    // 120..=129
    0, 133, 144, 145, 137, 227, 231, 101, 243, 121,
    // 130..=139
    118, 122, 119, 124, 116, 125, 244, 123, 117, 0,
    // 140..=149
    251, 0, 248, 0, 0, 0, 0, 0, 0, 0,
    // 150..=159
    240, 0, 249, 0, 0, 0, 0, 0, 241, 242,
    // 160..=169
    0, 236, 0, 235, 232, 234, 233, 0, 0, 0,
    // 170..=179
    0, 0, 0, 250, 0, 0, 247, 245, 246, 182,
    // 180..=189
    183, 0, 0, 104, 105, 106, 107, 108, 109, 110,
    // 190..=193
    111, 112, 113, 114,
];

/// HID usage code for `scancode`, or 0 if the key has no boot-keyboard
/// mapping (out of table range counts as unmapped).
pub fn usage_for(scancode: u16) -> u8 {
    HID_USAGE_BY_SCANCODE
        .get(scancode as usize)
        .copied()
        .unwrap_or(0)
}

/// Modifier-byte bit for `scancode`, or 0 if the key is not a modifier.
///
/// The eight physical modifiers each own one bit of report byte 0, in the
/// order fixed by the boot protocol (usages 0xE0..=0xE7).
pub fn modifier_bit_for(scancode: u16) -> u8 {
    match scancode {
        29 => 0x01,  // left ctrl
        42 => 0x02,  // left shift
        56 => 0x04,  // left alt
        125 => 0x08, // left meta
        97 => 0x10,  // right ctrl
        54 => 0x20,  // right shift
        100 => 0x40, // right alt
        126 => 0x80, // right meta
        _ => 0,
    }
}
