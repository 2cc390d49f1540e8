//! Chunk stream demonstration: lazy chunk generation (chunk_stream binary).
//!
//! Drives the generation state machine to completion, printing each label
//! as it is produced. Step `i` waits `i` simulated time units on a
//! background worker before its label becomes available; an internal
//! generation fault terminates the process with exit code 1.

use std::time::Duration;

use log::info;
use sensor_sim::chunks::generator::ChunkGenerator;

const LATENCY_UNIT: Duration = Duration::from_secs(1);

fn main() {
    env_logger::init();
    info!("=== CHUNK STREAM START ===");

    let mut generator = ChunkGenerator::new("Source1", LATENCY_UNIT);
    while generator.resume() {
        if let Some(label) = generator.value() {
            println!("{label}");
        }
    }

    info!("=== CHUNK STREAM FINISHED ===");
}
