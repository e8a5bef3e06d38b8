//! `courier-core` — foundational types for the campus courier simulator.
//!
//! This crate is a dependency of every other `courier-*` crate.  It
//! intentionally has no `courier-*` dependencies and minimal external ones
//! (only `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                   |
//! |--------------|--------------------------------------------|
//! | [`ids`]      | `NodeId`, `PackageId`                      |
//! | [`priority`] | `Priority` enum (urgent / normal)          |
//! | [`map`]      | `MapPoint` — presentation-layer coordinates |
//! | [`error`]    | `CourierError`, `CourierResult`            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod map;
pub mod priority;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CourierError, CourierResult};
pub use ids::{NodeId, PackageId};
pub use map::MapPoint;
pub use priority::Priority;
