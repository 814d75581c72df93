//! Optional instrumentation for escape-time evaluation.
//!
//! Nothing here affects results. Sinks are shared between threads, so counters
//! are atomics rather than locks.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Algebraic region test that classified a point without iterating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shortcut {
    MainCardioid,
    Period2Bulb,
}

/// What happened during one evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EscapeSample {
    /// Escape value returned to the caller (0 = bounded).
    pub value: f64,
    /// Radius-checked iterations performed. Zero when a shortcut applied.
    pub iterations: u32,
    pub shortcut: Option<Shortcut>,
}

impl EscapeSample {
    pub fn escaped(&self) -> bool {
        self.value > 0.0
    }
}

/// Receives a sample for every evaluation made by an instrumented evaluator.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, sample: &EscapeSample);
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn record(&self, _sample: &EscapeSample) {}
}

/// Logs one sample out of every `every`, and stops after `max_printed` lines.
#[derive(Debug)]
pub struct ThrottledLogSink {
    every: u64,
    max_printed: u64,
    seen: AtomicU64,
    printed: AtomicU64,
}

impl Default for ThrottledLogSink {
    fn default() -> Self {
        Self::new(1000, 1000)
    }
}

impl ThrottledLogSink {
    /// `every` of 0 is treated as 1.
    pub fn new(every: u64, max_printed: u64) -> Self {
        Self {
            every: every.max(1),
            max_printed,
            seen: AtomicU64::new(0),
            printed: AtomicU64::new(0),
        }
    }

    pub fn seen(&self) -> u64 {
        self.seen.load(Ordering::Relaxed)
    }

    pub fn printed(&self) -> u64 {
        self.printed.load(Ordering::Relaxed)
    }

    /// Count a sample and decide whether it is the one that gets logged.
    fn admit(&self) -> bool {
        if self.printed.load(Ordering::Relaxed) >= self.max_printed {
            return false;
        }
        let seen = self.seen.fetch_add(1, Ordering::Relaxed) + 1;
        if seen % self.every != 0 {
            return false;
        }
        self.printed
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |p| {
                (p < self.max_printed).then_some(p + 1)
            })
            .is_ok()
    }
}

impl DiagnosticSink for ThrottledLogSink {
    fn record(&self, sample: &EscapeSample) {
        if self.admit() {
            log::debug!(
                "escape sample #{}: value={:.4} iterations={} shortcut={:?}",
                self.seen(),
                sample.value,
                sample.iterations,
                sample.shortcut
            );
        }
    }
}
