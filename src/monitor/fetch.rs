//! fetch.rs
//! Simulated sensor retrieval: one worker thread per fetch.
//! - Concurrent phase: callers issue all handles first, then join in issue order
//! - Fault injection: short-circuit error result without touching a worker

use std::{thread, time::Duration};

use crate::monitor::reading::SensorReading;

/// Issue one retrieval task on its own worker. The worker waits the
/// simulated transducer latency, then classifies the id. No shared
/// mutable state crosses the thread boundary; the handle carries the
/// reading back on join.
pub fn spawn_fetch(id: u32, latency: Duration) -> thread::JoinHandle<SensorReading> {
    thread::spawn(move || {
        thread::sleep(latency);
        SensorReading::classify(id)
    })
}

/// Retrieval with an explicit success-or-error result.
///
/// With `simulate_failure` set, returns the error immediately; no worker
/// is spawned. Otherwise blocks until one fetch of `id` completes and
/// wraps its reading. The result is never both: the caller routes `Ok`
/// to the renderer and `Err` to error output.
pub fn fetch_with_fault(
    simulate_failure: bool,
    id: u32,
    latency: Duration,
) -> Result<SensorReading, String> {
    if simulate_failure {
        return Err(format!("Error: Unable to retrieve data from sensor {id}"));
    }

    spawn_fetch(id, latency)
        .join()
        .map_err(|_| format!("Error: fetch worker for sensor {id} panicked"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    const TEST_LATENCY: Duration = Duration::from_millis(5);

    #[test]
    fn concurrent_fetches_collect_in_issue_order() {
        let handles: Vec<_> = (0..10u32)
            .map(|id| spawn_fetch(id, TEST_LATENCY))
            .collect();

        for (id, handle) in handles.into_iter().enumerate() {
            let reading = handle.join().expect("fetch worker panicked");
            assert_eq!(reading, SensorReading::classify(id as u32));
        }
    }

    #[test]
    fn fault_flag_short_circuits_without_fetching() {
        // Latency far beyond the assertion window: if the underlying
        // fetch ran, the elapsed check below would fail.
        let start = Instant::now();
        let result = fetch_with_fault(true, 5, Duration::from_secs(30));

        assert!(start.elapsed() < Duration::from_secs(1));
        assert_eq!(
            result,
            Err("Error: Unable to retrieve data from sensor 5".to_string())
        );
    }

    #[test]
    fn error_message_carries_the_sensor_id() {
        for id in [0u32, 7, 42] {
            let err = fetch_with_fault(true, id, TEST_LATENCY).unwrap_err();
            assert_eq!(err, format!("Error: Unable to retrieve data from sensor {id}"));
        }
    }

    #[test]
    fn unset_flag_returns_classified_reading() {
        for id in 0..6u32 {
            let result = fetch_with_fault(false, id, TEST_LATENCY);
            assert_eq!(result, Ok(SensorReading::classify(id)));
        }
    }
}
