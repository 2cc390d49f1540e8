//! generator.rs
//! Resumable chunk generation as an explicit state machine.
//! - Each resume runs one background wait and blocks on its one-shot
//!   completion signal before producing that step's label
//! - The wait worker is joined before the label is exposed, so no worker
//!   outlives its step regardless of how the generator is dropped

use std::{process, thread, time::Duration};

use crossbeam::channel::bounded;
use log::{debug, error};

/// Number of chunks one generation run produces.
pub const CHUNK_STEPS: u32 = 3;

/// Where the state machine currently stands. `Suspended(step)` means the
/// label for `step` has been produced and control is back with the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Created,
    Suspended(u32),
    Completed,
}

/// Lazily yields `"Chunk {step} from {source}"` labels, one per resume.
///
/// Driver loop: `while gen.resume() { use gen.value() }`. After the last
/// step, `resume` reports completion and the stored label is cleared.
/// Internal faults during generation (a wait worker dying before it
/// signals) terminate the process; there is no recovery path.
pub struct ChunkGenerator {
    source: String,
    latency_unit: Duration,
    phase: Phase,
    current: Option<String>,
}

impl ChunkGenerator {
    /// `latency_unit` is one simulated time unit; step `i` waits `i` units.
    pub fn new(source: &str, latency_unit: Duration) -> Self {
        Self {
            source: source.to_string(),
            latency_unit,
            phase: Phase::Created,
            current: None,
        }
    }

    /// Advance one step. Returns `true` while a fresh label is available
    /// via [`value`](Self::value), `false` once generation has completed.
    pub fn resume(&mut self) -> bool {
        match self.try_resume() {
            Ok(more) => more,
            Err(e) => {
                // Fatal channel: no partial-output guarantee beyond what
                // already reached stdout.
                error!("chunk generation fault: {e}");
                process::exit(1);
            }
        }
    }

    /// Label produced by the most recent resume, if any.
    pub fn value(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    fn try_resume(&mut self) -> Result<bool, String> {
        let step = match self.phase {
            Phase::Created => 1,
            Phase::Suspended(step) => step + 1,
            Phase::Completed => return Ok(false),
        };

        if step > CHUNK_STEPS {
            self.phase = Phase::Completed;
            self.current = None;
            return Ok(false);
        }

        // One-shot completion signal from the background wait. The wait
        // runs on its own worker; this step may only proceed once the
        // signal is observed.
        let (signal_tx, signal_rx) = bounded::<u32>(1);
        let delay = self.latency_unit * step;

        let worker = thread::Builder::new()
            .name(format!("chunk_wait_{step}"))
            .spawn(move || {
                thread::sleep(delay);
                let _ = signal_tx.send(step);
            })
            .map_err(|e| format!("failed to spawn wait worker for step {step}: {e}"))?;

        let signaled_step = signal_rx
            .recv()
            .map_err(|_| format!("wait worker for step {step} dropped its signal"))?;

        // Join eagerly: the generation state never holds a live worker
        // across a suspension point.
        worker
            .join()
            .map_err(|_| format!("wait worker for step {step} panicked"))?;

        debug!("step {signaled_step} signaled after {delay:?}");
        self.current = Some(format!("Chunk {signaled_step} from {}", self.source));
        self.phase = Phase::Suspended(step);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_UNIT: Duration = Duration::from_millis(1);

    #[test]
    fn yields_three_labels_in_order_then_completes() {
        let mut generator = ChunkGenerator::new("X", TEST_UNIT);
        assert!(generator.value().is_none());

        let mut labels = Vec::new();
        while generator.resume() {
            labels.push(generator.value().expect("label after resume").to_string());
        }

        assert_eq!(
            labels,
            vec!["Chunk 1 from X", "Chunk 2 from X", "Chunk 3 from X"]
        );
        assert!(generator.is_completed());
    }

    #[test]
    fn completed_generator_stays_completed() {
        let mut generator = ChunkGenerator::new("Source1", TEST_UNIT);
        while generator.resume() {}

        assert!(!generator.resume());
        assert!(generator.value().is_none());
        assert!(generator.is_completed());
    }

    #[test]
    fn dropping_mid_generation_leaves_no_live_worker() {
        let mut generator = ChunkGenerator::new("Source1", TEST_UNIT);
        assert!(generator.resume());
        assert_eq!(generator.value(), Some("Chunk 1 from Source1"));
        // Each resume joins its wait worker before returning, so dropping
        // here releases all generation state.
        drop(generator);
    }
}
