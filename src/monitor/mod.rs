//! Sensor monitor pipeline: classification, concurrent fetches, bulk
//! normalization, and fault-injected retrieval.

pub mod fetch;
pub mod normalize;
pub mod reading;
