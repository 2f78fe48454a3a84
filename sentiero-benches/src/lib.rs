//! Benchmark support crate for sentiero.
//!
//! Provides seeded scenario generators and parameter types used by the
//! Criterion benchmarks for cost propagation and full route planning.

pub mod error;
pub mod params;
pub mod source;
