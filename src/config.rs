//! Application-wide constants and compile-time configuration.
//!
//! Tunable parameters live here so they can be adjusted in one place.

/// Default character device exposed by the kernel's HID gadget function.
///
/// Created when the `hid` function of a configfs gadget is bound to a UDC;
/// additional keyboards appear as `/dev/hidg1`, `/dev/hidg2`, ...
pub const DEFAULT_GADGET_PATH: &str = "/dev/hidg0";

/// Depth of the bounded event queue between producers and the writer task.
///
/// Producers block (await) once the queue is full; events are never
/// dropped. The depth only bounds how far producers can run ahead of the
/// per-event write+flush cycle.
pub const EVENT_QUEUE_DEPTH: usize = 16;
