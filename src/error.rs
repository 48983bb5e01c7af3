//! Unified error type for hidgadget.
//!
//! One enum covers construction-time and loop-fatal failures. Loop-fatal
//! errors terminate the writer task and are handed back to the owner by
//! [`HidGadget::close`](crate::gadget::HidGadget::close).

use std::fmt;
use std::io;

/// Top-level error type used across the crate.
#[derive(Debug)]
pub enum Error {
    /// The gadget device could not be opened. Fatal to construction;
    /// no writer task is started.
    Open(io::Error),

    /// Writing a report to the sink failed outright.
    Write(io::Error),

    /// The sink accepted fewer than the full 8 report bytes. The gadget
    /// misbehaving this way (e.g. the function was unbound) needs external
    /// intervention, so the loop terminates rather than retrying.
    ShortWrite {
        /// Bytes the sink actually accepted.
        written: usize,
    },

    /// Flushing the sink after a write failed. Treated exactly like a
    /// short write: the device state is ambiguous, the loop terminates.
    Flush(io::Error),

    /// The writer task is gone - either closed or already terminated by a
    /// previous error. Events can no longer be forwarded.
    Closed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Open(e) => write!(f, "could not open gadget device: {e}"),
            Error::Write(e) => write!(f, "report write failed: {e}"),
            Error::ShortWrite { written } => {
                write!(f, "short report write: sink accepted {written} of 8 bytes")
            }
            Error::Flush(e) => write!(f, "report flush failed: {e}"),
            Error::Closed => write!(f, "gadget writer is closed"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Open(e) | Error::Write(e) | Error::Flush(e) => Some(e),
            _ => None,
        }
    }
}
