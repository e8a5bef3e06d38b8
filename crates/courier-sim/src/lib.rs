//! `courier-sim` — session state and dispatch orchestration.
//!
//! # Dispatch pass
//!
//! ```text
//! run_dispatch(session, graph, finder, origin, params, observer):
//!   ① Take    — the whole pending queue is consumed atomically.
//!   ② Split   — packages are grouped by priority (urgent batch first).
//!   ③ Plan    — per non-empty group: nearest-neighbor tour over the
//!               group's destinations, then a duration estimate.
//!   ④ Log     — a TripRecord is appended to the session's trip log and
//!               the observer is notified (trip, then one call per leg
//!               with the full intermediate-node path).
//! ```
//!
//! The session is a plain owned object — no globals, no interior mutability —
//! so the core stays stateless and reentrant; presentation layers own a
//! `Session` and pass it in.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use courier_graph::BfsPathFinder;
//! use courier_plan::DurationParams;
//! use courier_sim::{run_dispatch, NoopObserver, Session};
//!
//! let mut session = Session::new();
//! session.queue_package(block_d, Priority::Urgent);
//! let trips = run_dispatch(&mut session, &graph, &BfsPathFinder, hub,
//!                          &DurationParams::default(), &mut NoopObserver)?;
//! ```

pub mod dispatch;
pub mod error;
pub mod observer;
pub mod session;


pub use dispatch::run_dispatch;
pub use error::{SimError, SimResult};
pub use observer::{DispatchObserver, NoopObserver};
pub use session::{Package, Session, SessionStats, TripRecord};
