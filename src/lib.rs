//! hidgadget - present keyboard input as a USB HID gadget keyboard.
//!
//! Translates low-level keyboard input events (scancode + press/release)
//! into byte-exact USB HID boot-keyboard reports and streams them to the
//! character device of a Linux USB gadget (`/dev/hidg0`-style), one
//! write+flush per event.
//!
//! ```no_run
//! use hidgadget::{HidGadget, InputEvent};
//!
//! # async fn run() -> Result<(), hidgadget::Error> {
//! let gadget = HidGadget::open("/dev/hidg0").await?;
//! gadget.forward_event(InputEvent::key_press(30)).await?; // 'a' down
//! gadget.forward_event(InputEvent::key_release(30)).await?; // 'a' up
//! gadget.close().await?;
//! # Ok(())
//! # }
//! ```
//!
//! The gadget device itself must already exist; configure the kernel's
//! `hid` gadget function through configfs with
//! [`hid::keyboard::KEYBOARD_REPORT_DESCRIPTOR`] as the report
//! descriptor.

pub mod config;
pub mod error;
pub mod gadget;
pub mod hid;

pub use error::Error;
pub use gadget::HidGadget;
pub use hid::{EventKind, InputEvent, KeyboardReport, ReportEncoder};
