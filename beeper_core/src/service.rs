//! A worker thread serializing access to one controller.
//!
//! [`Beeper`] methods take `&mut self`. When several parties need the same
//! device (a command loop plus a signal handler, say), a [`BeeperService`]
//! owns the controller on a dedicated thread and cheap, cloneable
//! [`BeeperHandle`]s send it requests. Replies come back over per-request
//! bounded channels, so each caller sees the result of its own request after
//! the worker applied it.
//!
//! Safety: each service spawns exactly one thread that is automatically
//! shut down when the service is dropped, preventing thread leaks.
use crossbeam_channel as xch;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use beeper_traits::BusTransport;

use crate::error::{BeeperError, Report, Result};
use crate::{Beeper, BeeperSnapshot};

/// How long the worker waits for a request before re-checking shutdown.
const IDLE_POLL: Duration = Duration::from_millis(25);

enum Request {
    SetFrequencyHz {
        frequency_hz: u32,
        reply: xch::Sender<Result<()>>,
    },
    SetDurationMs {
        duration_ms: u32,
        reply: xch::Sender<Result<()>>,
    },
    SetMuted {
        muted: bool,
        reply: xch::Sender<()>,
    },
    Beep {
        frequency_hz: Option<u32>,
        duration_ms: Option<u32>,
        reply: xch::Sender<bool>,
    },
    Snapshot {
        reply: xch::Sender<BeeperSnapshot>,
    },
}

pub struct BeeperService {
    tx: xch::Sender<Request>,
    /// Shutdown flag for immediate response (atomic for lock-free check)
    shutdown: Arc<AtomicBool>,
    /// Join handle for graceful thread cleanup
    join_handle: Option<std::thread::JoinHandle<()>>,
}

impl BeeperService {
    pub fn spawn<T: BusTransport + Send + 'static>(mut beeper: Beeper<T>) -> Self {
        let (tx, rx) = xch::bounded::<Request>(1);
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let join_handle = std::thread::spawn(move || {
            loop {
                // Immediate shutdown check (lock-free atomic)
                if shutdown_clone.load(Ordering::Relaxed) {
                    tracing::debug!("beeper service received shutdown signal");
                    break;
                }

                match rx.recv_timeout(IDLE_POLL) {
                    Ok(req) => serve(&mut beeper, req),
                    Err(xch::RecvTimeoutError::Timeout) => {}
                    Err(xch::RecvTimeoutError::Disconnected) => {
                        tracing::debug!("all beeper handles disconnected, exiting thread");
                        break;
                    }
                }
            }
            tracing::trace!("beeper service thread exiting cleanly");
        });

        Self {
            tx,
            shutdown,
            join_handle: Some(join_handle),
        }
    }

    pub fn handle(&self) -> BeeperHandle {
        BeeperHandle {
            tx: self.tx.clone(),
        }
    }
}

impl Drop for BeeperService {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);

        // The thread exits within one IDLE_POLL, or right after finishing
        // the request it is currently serving.
        if let Some(handle) = self.join_handle.take() {
            match handle.join() {
                Ok(()) => {
                    tracing::trace!("beeper service thread joined successfully");
                }
                Err(e) => {
                    // Thread panicked; log but don't propagate (we're in Drop)
                    tracing::warn!(?e, "beeper service thread panicked during shutdown");
                }
            }
        }
    }
}

fn serve<T: BusTransport>(beeper: &mut Beeper<T>, req: Request) {
    // A send error means the requester gave up waiting; nothing to do.
    match req {
        Request::SetFrequencyHz {
            frequency_hz,
            reply,
        } => {
            let _ = reply.send(beeper.set_frequency_hz(frequency_hz));
        }
        Request::SetDurationMs { duration_ms, reply } => {
            let _ = reply.send(beeper.set_duration_ms(duration_ms));
        }
        Request::SetMuted { muted, reply } => {
            beeper.set_muted(muted);
            let _ = reply.send(());
        }
        Request::Beep {
            frequency_hz,
            duration_ms,
            reply,
        } => {
            let _ = reply.send(beeper.beep_with(frequency_hz, duration_ms));
        }
        Request::Snapshot { reply } => {
            let _ = reply.send(beeper.snapshot());
        }
    }
}

/// Client side of a [`BeeperService`]. Clone freely; all clones talk to the
/// same controller. Every method fails with [`BeeperError::ServiceStopped`]
/// once the service is gone.
#[derive(Clone)]
pub struct BeeperHandle {
    tx: xch::Sender<Request>,
}

impl BeeperHandle {
    pub fn set_frequency_hz(&self, frequency_hz: u32) -> Result<()> {
        let (reply, rx) = xch::bounded(1);
        self.tx
            .send(Request::SetFrequencyHz {
                frequency_hz,
                reply,
            })
            .map_err(|_| stopped())?;
        rx.recv().map_err(|_| stopped())?
    }

    pub fn set_duration_ms(&self, duration_ms: u32) -> Result<()> {
        let (reply, rx) = xch::bounded(1);
        self.tx
            .send(Request::SetDurationMs { duration_ms, reply })
            .map_err(|_| stopped())?;
        rx.recv().map_err(|_| stopped())?
    }

    pub fn set_muted(&self, muted: bool) -> Result<()> {
        let (reply, rx) = xch::bounded(1);
        self.tx
            .send(Request::SetMuted { muted, reply })
            .map_err(|_| stopped())?;
        rx.recv().map_err(|_| stopped())
    }

    /// Beep with the controller's current settings.
    pub fn beep(&self) -> Result<bool> {
        self.beep_with(None, None)
    }

    /// See [`Beeper::beep_with`]. The outer `Result` is service liveness;
    /// the inner bool is link health.
    pub fn beep_with(&self, frequency_hz: Option<u32>, duration_ms: Option<u32>) -> Result<bool> {
        let (reply, rx) = xch::bounded(1);
        self.tx
            .send(Request::Beep {
                frequency_hz,
                duration_ms,
                reply,
            })
            .map_err(|_| stopped())?;
        rx.recv().map_err(|_| stopped())
    }

    pub fn snapshot(&self) -> Result<BeeperSnapshot> {
        let (reply, rx) = xch::bounded(1);
        self.tx
            .send(Request::Snapshot { reply })
            .map_err(|_| stopped())?;
        rx.recv().map_err(|_| stopped())
    }
}

fn stopped() -> Report {
    Report::new(BeeperError::ServiceStopped)
}
