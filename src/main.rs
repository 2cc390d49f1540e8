//! # Sensor Monitor Entry Point
//!
//! Linear demonstration run over synthetic sensors:
//! 1. Issue 10 concurrent fetches, then collect and render in issue order.
//! 2. Generate one million pressure samples and normalize them in parallel.
//! 3. Re-fetch all sensors through the fault-injecting path, with sensor 5
//!    forced to fail; successes render to stdout, the failure to stderr.
//!
//! No flags, no configuration. Diagnostics go through `log`/`RUST_LOG`;
//! program output stays on stdout/stderr.

use std::time::Duration;

use log::{error, info};
use sensor_sim::monitor::{
    fetch::{fetch_with_fault, spawn_fetch},
    normalize::{BULK_LEN, generate_bulk, normalize},
};

const SENSOR_COUNT: u32 = 10;
const FETCH_LATENCY: Duration = Duration::from_secs(1);
const FAULTY_SENSOR_ID: u32 = 5;

fn main() {
    env_logger::init();
    info!("=== SENSOR MONITOR START ===");

    // Issue every fetch before collecting any result; collection order is
    // issue order regardless of completion order.
    let handles: Vec<_> = (0..SENSOR_COUNT)
        .map(|id| spawn_fetch(id, FETCH_LATENCY))
        .collect();

    for (id, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(reading) => println!("{}", reading.render()),
            Err(_) => error!("fetch worker for sensor {id} panicked"),
        }
    }

    // Bulk normalization of the synthetic pressure data set.
    let mut pressure_data = generate_bulk(BULK_LEN);
    normalize(&mut pressure_data);
    println!("Large data set processing completed.");

    // Fault-injected retrieval: one sensor is forced to fail, the rest go
    // through the normal fetch path.
    for id in 0..SENSOR_COUNT {
        match fetch_with_fault(id == FAULTY_SENSOR_ID, id, FETCH_LATENCY) {
            Ok(reading) => println!("{}", reading.render()),
            Err(msg) => eprintln!("{msg}"),
        }
    }

    println!("Real-time data monitoring system completed.");
    info!("=== SENSOR MONITOR FINISHED ===");
}
