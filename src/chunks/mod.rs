//! Lazy chunk generation driven by one-shot background-wait signals.

pub mod generator;
