//! To-do task management for Tasklist.
//!
//! This module implements the full task lifecycle: creation with
//! store-assigned identifiers, filtered and paginated reads, full-record
//! updates keyed by id, and single or bulk deletion. Status validation is a
//! service-level policy applied before every write, never a storage
//! constraint. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
