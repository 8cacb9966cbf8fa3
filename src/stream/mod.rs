//! Channel-driven wrapper for hosts that run a session inside a pipeline.

pub mod station;

pub use station::{AggregatorStation, StreamFrame};
