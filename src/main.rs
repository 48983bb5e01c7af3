//! Demo harness - types "hello" (with a shifted 'e'), then holds A/B/C
//! together to exercise multi-key reports, against a gadget device.
//!
//! Usage: `hidgadget [/dev/hidgN]` (defaults to /dev/hidg0).

use anyhow::Context;
use hidgadget::{config, HidGadget, InputEvent};

// Input-layer scancodes (linux/input-event-codes.h).
const KEY_A: u16 = 30;
const KEY_B: u16 = 48;
const KEY_C: u16 = 46;
const KEY_E: u16 = 18;
const KEY_H: u16 = 35;
const KEY_L: u16 = 38;
const KEY_O: u16 = 24;
const KEY_LEFTSHIFT: u16 = 42;

fn demo_sequence() -> Vec<InputEvent> {
    vec![
        InputEvent::key_press(KEY_H),
        InputEvent::key_release(KEY_H),
        InputEvent::key_press(KEY_LEFTSHIFT),
        InputEvent::key_press(KEY_E),
        InputEvent::key_release(KEY_E),
        InputEvent::key_press(KEY_L),
        InputEvent::key_release(KEY_L),
        InputEvent::key_release(KEY_LEFTSHIFT),
        InputEvent::key_press(KEY_L),
        InputEvent::key_release(KEY_L),
        InputEvent::key_press(KEY_O),
        InputEvent::key_release(KEY_O),
        InputEvent::key_press(KEY_A),
        InputEvent::key_press(KEY_B),
        InputEvent::key_press(KEY_C),
        InputEvent::key_release(KEY_A),
        InputEvent::key_release(KEY_B),
        InputEvent::key_release(KEY_C),
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_GADGET_PATH.to_string());

    let gadget = HidGadget::open(&path)
        .await
        .with_context(|| format!("opening {path}"))?;

    for event in demo_sequence() {
        gadget.forward_event(event).await?;
    }

    // drain() delivers the whole backlog before stopping; close() would
    // cancel immediately and could discard the tail of the sequence.
    gadget.drain().await.context("gadget writer failed")?;
    Ok(())
}
