//! One-shot background sampling.
//!
//! Sampling large path sets can be moved off the frame loop. A request is submitted to a lazily
//! built rayon pool and answered exactly once through a [`SampleTicket`]. Dropping the ticket
//! discards the result; there is no other cancellation protocol.

use std::sync::{OnceLock, mpsc};
use std::time::Duration;

use crate::foundation::error::{SketchError, SketchResult};
use crate::path::measure::BezPathMeasure;
use crate::path::sample::{SampleOptions, SampledPath, sample_measure};

/// Result of waiting on a [`SampleTicket`].
#[derive(Debug)]
pub enum SampleOutcome {
    /// Sampling finished.
    Ready(SampledPath),
    /// The path could not be sampled, or the worker went away.
    Failed(SketchError),
    /// Nothing arrived within the timeout; the ticket may be waited on again.
    TimedOut,
}

/// Handle to one pending sampling request.
#[derive(Debug)]
pub struct SampleTicket {
    rx: mpsc::Receiver<SketchResult<SampledPath>>,
}

impl SampleTicket {
    /// Block for at most `timeout`.
    pub fn wait_timeout(&self, timeout: Duration) -> SampleOutcome {
        match self.rx.recv_timeout(timeout) {
            Ok(result) => into_outcome(result),
            Err(mpsc::RecvTimeoutError::Timeout) => SampleOutcome::TimedOut,
            Err(mpsc::RecvTimeoutError::Disconnected) => SampleOutcome::Failed(disconnected()),
        }
    }

    /// Non-blocking poll; `None` while the request is still running.
    pub fn try_take(&self) -> Option<SampleOutcome> {
        match self.rx.try_recv() {
            Ok(result) => Some(into_outcome(result)),
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => Some(SampleOutcome::Failed(disconnected())),
        }
    }

    /// Block until the request completes.
    pub fn wait(self) -> SketchResult<SampledPath> {
        self.rx.recv().map_err(|_| disconnected())?
    }
}

fn into_outcome(result: SketchResult<SampledPath>) -> SampleOutcome {
    match result {
        Ok(sampled) => SampleOutcome::Ready(sampled),
        Err(e) => SampleOutcome::Failed(e),
    }
}

fn disconnected() -> SketchError {
    SketchError::sampling("sampler worker dropped the request")
}

/// Background sampler backed by a rayon pool built on first use.
#[derive(Debug)]
pub struct SamplerPool {
    threads: Option<usize>,
    pool: OnceLock<Result<rayon::ThreadPool, String>>,
}

impl SamplerPool {
    /// Pool with `threads` workers (rayon's default when `None`). Nothing is spawned until the
    /// first request.
    pub fn new(threads: Option<usize>) -> SketchResult<Self> {
        if threads == Some(0) {
            return Err(SketchError::validation("sampler 'threads' must be >= 1 when set"));
        }
        Ok(Self {
            threads,
            pool: OnceLock::new(),
        })
    }

    /// Process-wide pool with default threading.
    pub fn shared() -> &'static SamplerPool {
        static SHARED: OnceLock<SamplerPool> = OnceLock::new();
        SHARED.get_or_init(|| SamplerPool {
            threads: None,
            pool: OnceLock::new(),
        })
    }

    /// `true` once the underlying thread pool has been built.
    pub fn is_initialized(&self) -> bool {
        self.pool.get().is_some()
    }

    // Concurrent first callers block on the same initialisation; the pool is built once.
    fn pool(&self) -> SketchResult<&rayon::ThreadPool> {
        let built = self.pool.get_or_init(|| {
            tracing::debug!(threads = ?self.threads, "building sampler pool");
            build_thread_pool(self.threads)
        });
        built
            .as_ref()
            .map_err(|e| SketchError::sampling(format!("failed to build sampler pool: {e}")))
    }

    /// Queue `d` for sampling. Malformed path data is reported as [`SampleOutcome::Failed`].
    pub fn submit(&self, d: impl Into<String>, opts: SampleOptions) -> SketchResult<SampleTicket> {
        let pool = self.pool()?;
        let (tx, rx) = mpsc::sync_channel(1);
        let d = d.into();
        pool.spawn(move || {
            let result = BezPathMeasure::parse(&d).map(|m| sample_measure(&m, opts));
            // The caller may have dropped the ticket.
            let _ = tx.send(result);
        });
        Ok(SampleTicket { rx })
    }
}

fn build_thread_pool(threads: Option<usize>) -> Result<rayon::ThreadPool, String> {
    let mut builder =
        rayon::ThreadPoolBuilder::new().thread_name(|i| format!("sketchline-sampler-{i}"));
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| e.to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/path/worker.rs"]
mod tests;
