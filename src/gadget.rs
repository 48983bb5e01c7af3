//! Gadget writer - owns the device sink and the single writer task.
//!
//! [`HidGadget`] opens the gadget character device and spawns one task
//! that serialises everything: it is the only code that touches the
//! encoder state or the sink, so the hot path needs no locking. Producers
//! hand events over through a bounded channel and block (await) when the
//! writer falls behind; events are never dropped.
//!
//! Per event the task runs apply → write → flush to completion before
//! taking the next event, so every intermediate keyboard state is visible
//! to the USB host in order. That trades throughput for ordering, which
//! is the right trade for a keyboard.

use std::path::Path;

use log::{debug, error, info};
use tokio::fs::OpenOptions;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config;
use crate::error::Error;
use crate::hid::keyboard::KEYBOARD_REPORT_SIZE;
use crate::hid::{InputEvent, ReportEncoder};

/// Handle to a running gadget writer.
///
/// Obtained from [`open`](Self::open) (device path) or
/// [`with_sink`](Self::with_sink) (any byte sink). Dropping the handle
/// without calling [`close`](Self::close) lets the writer drain the queue
/// and stop, but discards its final status.
pub struct HidGadget {
    event_tx: mpsc::Sender<InputEvent>,
    cancel: CancellationToken,
    writer: JoinHandle<Result<(), Error>>,
}

impl HidGadget {
    /// Open the gadget character device at `path` and start the writer.
    ///
    /// Fails with [`Error::Open`] if the device cannot be opened; no task
    /// is spawned in that case.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let sink = OpenOptions::new()
            .write(true)
            .open(path)
            .await
            .map_err(Error::Open)?;
        info!("opened gadget device {}", path.display());
        Ok(Self::with_sink(sink))
    }

    /// Start a writer over an arbitrary sink.
    ///
    /// The sink is owned by the writer task for its whole lifetime and is
    /// shut down exactly once when the task exits.
    pub fn with_sink<S>(sink: S) -> Self
    where
        S: AsyncWrite + Unpin + Send + 'static,
    {
        let (event_tx, event_rx) = mpsc::channel(config::EVENT_QUEUE_DEPTH);
        let cancel = CancellationToken::new();
        let writer = tokio::spawn(write_reports(sink, event_rx, cancel.clone()));
        Self {
            event_tx,
            cancel,
            writer,
        }
    }

    /// Hand one input event to the writer.
    ///
    /// Awaits if the event queue is full (back-pressure). Returns
    /// [`Error::Closed`] once the writer has exited, e.g. after a fatal
    /// write error.
    pub async fn forward_event(&self, event: InputEvent) -> Result<(), Error> {
        self.event_tx
            .send(event)
            .await
            .map_err(|_| Error::Closed)
    }

    /// Request cancellation and return the writer's final status.
    ///
    /// Events still queued when the writer observes the cancellation are
    /// not processed; the event in flight (if any) completes first. The
    /// handle is consumed - a closed gadget cannot be reused. Use
    /// [`drain`](Self::drain) instead to deliver the backlog first.
    pub async fn close(self) -> Result<(), Error> {
        self.cancel.cancel();
        self.writer.await.unwrap_or(Err(Error::Closed))
    }

    /// Stop accepting events, deliver everything already queued, and
    /// return the writer's final status.
    ///
    /// Unlike [`close`](Self::close) this does not cancel: the writer
    /// keeps going until the queue is empty (or a write fails), so every
    /// event forwarded before the call is written to the device.
    pub async fn drain(self) -> Result<(), Error> {
        let Self {
            event_tx,
            cancel: _cancel,
            writer,
        } = self;
        // Closing the channel makes the writer's recv() return None once
        // the backlog is consumed.
        drop(event_tx);
        writer.await.unwrap_or(Err(Error::Closed))
    }
}

/// The single writer loop: one encoder, one sink, strictly one event at
/// a time in arrival order.
async fn write_reports<S>(
    mut sink: S,
    mut events: mpsc::Receiver<InputEvent>,
    cancel: CancellationToken,
) -> Result<(), Error>
where
    S: AsyncWrite + Unpin + Send + 'static,
{
    let mut encoder = ReportEncoder::new();
    let mut buf = [0u8; KEYBOARD_REPORT_SIZE];

    debug!("gadget writer started");

    let status = loop {
        // Biased so a pending cancellation wins over queued events.
        let event = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("gadget writer cancelled");
                break Ok(());
            }
            event = events.recv() => match event {
                Some(event) => event,
                // All producer handles gone: nothing left to write.
                None => break Ok(()),
            },
        };

        debug!(
            "event: code={} value={} held={}",
            event.code,
            event.value,
            encoder.keys_held()
        );

        encoder.apply(&event);
        let n = encoder.report().serialize(&mut buf);
        if let Err(e) = deliver(&mut sink, &buf[..n]).await {
            error!("gadget writer terminating: {e}");
            break Err(e);
        }
    };

    // Release the sink exactly once, on every exit path.
    let _ = sink.shutdown().await;
    status
}

/// One full report delivery: a single write that must take all 8 bytes,
/// then a flush so the state transition is durable before the next event.
async fn deliver<S>(sink: &mut S, report: &[u8]) -> Result<(), Error>
where
    S: AsyncWrite + Unpin,
{
    let written = sink.write(report).await.map_err(Error::Write)?;
    if written < report.len() {
        return Err(Error::ShortWrite { written });
    }
    sink.flush().await.map_err(Error::Flush)
}
