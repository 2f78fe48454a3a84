//! Property-based tests for cost propagation and route reconstruction.
//!
//! Generates small planar graphs with varied topologies and checks both
//! strategies against a Bellman-Ford oracle, the predecessor invariants and
//! the path-cost consistency of reconstructed routes.

mod oracle;
mod properties;
mod strategies;
mod types;
