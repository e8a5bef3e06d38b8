//! `courier-graph` — campus walkway graph and shortest-path queries.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`graph`]    | `CampusGraph` (CSR + label intern), `CampusGraphBuilder` |
//! | [`pathfind`] | `PathFinder` trait, `BfsPathFinder`, `UNREACHABLE`    |
//!
//! The graph itself is not serializable: it is rebuilt from map data at
//! startup, never persisted.

pub mod graph;
pub mod pathfind;

#[cfg(test)]
mod tests;

pub use graph::{CampusGraph, CampusGraphBuilder};
pub use pathfind::{BfsPathFinder, PathFinder, UNREACHABLE};
