//! Dispatch observer trait for rendering and progress reporting.

use courier_core::NodeId;

use crate::session::TripRecord;

/// Callbacks invoked by [`run_dispatch`][crate::run_dispatch] as trips are
/// planned and logged.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The dispatch pass itself is synchronous
/// and atomic; animation pacing (sleeping between legs, waiting for a user
/// signal) belongs inside the implementor's [`on_leg`](Self::on_leg).
///
/// # Example — leg printer
///
/// ```rust,ignore
/// struct LegPrinter;
///
/// impl DispatchObserver for LegPrinter {
///     fn on_leg(&mut self, trip: usize, leg: usize, path: &[NodeId]) {
///         println!("trip {trip} leg {leg}: {} nodes", path.len());
///     }
/// }
/// ```
pub trait DispatchObserver {
    /// Called once per trip, right after its record lands in the trip log.
    fn on_trip_planned(&mut self, _trip_index: usize, _trip: &TripRecord) {}

    /// Called once per consecutive route pair of a planned trip.
    ///
    /// `path` is the full node sequence for that leg, intermediate blocks
    /// included, so renderers can draw the walked segments rather than a
    /// straight line between stops.  Falls back to the two endpoint nodes
    /// when the leg has no real connectivity.
    fn on_leg(&mut self, _trip_index: usize, _leg_index: usize, _path: &[NodeId]) {}

    /// Called once at the end of the pass with the number of trips logged.
    fn on_dispatch_end(&mut self, _trips_planned: usize) {}
}

/// A [`DispatchObserver`] that does nothing.  Use when you only want the
/// trip log.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}
