//! normalize.rs
//! Bulk pressure-sample normalization over disjoint slice chunks.
//! - Generation: uniform random samples in [900, 1100]
//! - Transform: `(v - 1000) / 100`, element-wise, no ordering between elements

use log::{debug, error};
use rand::Rng;

/// Reference data set size: one million pressure samples.
pub const BULK_LEN: usize = 1_000_000;

/// Sample domain, inclusive on both ends.
pub const SAMPLE_MIN: i32 = 900;
pub const SAMPLE_MAX: i32 = 1100;

/// Generate `len` independent uniform samples in [900, 1100].
pub fn generate_bulk(len: usize) -> Vec<i32> {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| rng.random_range(SAMPLE_MIN..=SAMPLE_MAX))
        .collect()
}

/// Normalize every sample in place: `v = (v - 1000) / 100`, truncating
/// toward zero. Each element's final value depends only on its initial
/// value, so the slice is split into disjoint chunks and updated from one
/// scoped worker per chunk with no synchronization between them. Chunk
/// order and completion order carry no meaning.
pub fn normalize(data: &mut [i32]) {
    if data.is_empty() {
        return;
    }

    let workers = num_cpus::get().max(1);
    let chunk_len = data.len().div_ceil(workers);
    debug!(
        "normalizing {} samples across {} workers (chunk {})",
        data.len(),
        workers,
        chunk_len
    );

    let scope_result = crossbeam::thread::scope(|s| {
        for part in data.chunks_mut(chunk_len) {
            s.spawn(move |_| {
                for v in part {
                    *v = (*v - 1000) / 100;
                }
            });
        }
    });

    if scope_result.is_err() {
        error!("normalize worker panicked; data set may be partially normalized");
    }
}
