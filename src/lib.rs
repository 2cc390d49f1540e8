//! Simulated sensor-data pipeline and lazy chunk generation.
//!
//! Two demonstration programs share this library:
//! - `sensor_monitor` (src/main.rs): concurrent fetches, per-variant
//!   rendering, parallel bulk normalization, fault-injected retrieval.
//! - `chunk_stream` (src/bin/chunk_stream.rs): resumable chunk generation
//!   driven by one-shot completion signals from background waits.

pub mod chunks;
pub mod monitor;
