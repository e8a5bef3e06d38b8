//! The dispatch pass: consume the pending queue into priority-batched trips.

use courier_core::{NodeId, Priority};
use courier_graph::{CampusGraph, PathFinder};
use courier_plan::{plan_tour, DurationParams};

use crate::observer::DispatchObserver;
use crate::session::{Package, Session, TripRecord};
use crate::{SimError, SimResult};

/// Run one dispatch pass over `session`'s pending queue.
///
/// Every trip starts and ends at `origin` — the designated hub block.  The
/// queue is consumed whole; packages are grouped by priority and each
/// non-empty group becomes exactly one [`TripRecord`] — urgent first, then
/// normal, per [`Priority::ALL`].  Destinations enter the planner in queue
/// order, which fixes the nearest-neighbor tie-break for equal distances.
///
/// Returns the number of trips logged this pass, or
/// [`SimError::NothingPending`] (with the session untouched) when there is
/// nothing to dispatch.
///
/// Planning itself never fails: unreachable destinations degrade the trip's
/// tour to an [unroutable](courier_plan::Tour::is_unroutable) one, and the
/// record is logged like any other so callers can surface it.
pub fn run_dispatch<F, O>(
    session:  &mut Session,
    graph:    &CampusGraph,
    finder:   &F,
    origin:   NodeId,
    params:   &DurationParams,
    observer: &mut O,
) -> SimResult<usize>
where
    F: PathFinder,
    O: DispatchObserver,
{
    if session.pending().is_empty() {
        return Err(SimError::NothingPending);
    }

    let pending = session.take_pending();
    let mut trips_planned = 0;

    for priority in Priority::ALL {
        let group: Vec<Package> = pending
            .iter()
            .filter(|p| p.priority == priority)
            .cloned()
            .collect();
        if group.is_empty() {
            continue;
        }

        let destinations: Vec<NodeId> = group.iter().map(|p| p.destination).collect();
        let tour = plan_tour(graph, finder, origin, &destinations);
        let duration = params.estimate(tour.total_distance_m, group.len());

        let trip_index = session.log_trip(TripRecord {
            priority,
            tour,
            packages: group,
            duration,
        });
        trips_planned += 1;

        let trip = &session.trips()[trip_index];
        observer.on_trip_planned(trip_index, trip);

        // Re-derive each leg's full node sequence for renderers.
        for (leg_index, pair) in trip.tour.route.windows(2).enumerate() {
            let path = finder.shortest_path(graph, pair[0], pair[1]);
            observer.on_leg(trip_index, leg_index, &path);
        }
    }

    observer.on_dispatch_end(trips_planned);
    Ok(trips_planned)
}
