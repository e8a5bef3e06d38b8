//! `courier-plan` — tour planning and delivery-time estimation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`tour`]     | `Tour`, `plan_tour` (nearest-neighbor heuristic)  |
//! | [`duration`] | `DurationParams`, `DurationBreakdown`, `format_secs` |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod duration;
pub mod tour;


pub use duration::{format_secs, DurationBreakdown, DurationParams};
pub use tour::{plan_tour, Tour};
