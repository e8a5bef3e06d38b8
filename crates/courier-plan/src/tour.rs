//! Closed-tour construction over a set of delivery destinations.
//!
//! `plan_tour` is a one-shot greedy nearest-neighbor heuristic: at each step
//! it walks to the closest unvisited destination, then returns to the origin.
//! No backtracking, no 2-opt improvement, no optimality claim — on campus-
//! sized destination sets the greedy result is what couriers actually walk.

use rustc_hash::FxHashSet;

use courier_core::NodeId;
use courier_graph::{CampusGraph, PathFinder};

// ── Tour ──────────────────────────────────────────────────────────────────────

/// The result of planning: a closed route and its accumulated distance.
///
/// `route` starts and ends at the origin and visits each distinct requested
/// destination exactly once in between.  `total_distance_m` sums the
/// shortest-path distances between consecutive stops, which may exceed the
/// direct-edge distances when stops are not adjacent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    /// Stop sequence, origin first and last.
    pub route: Vec<NodeId>,
    /// Total walking distance in metres; infinite for unroutable tours.
    pub total_distance_m: f64,
}

impl Tour {
    /// `true` when some destination was unreachable and the total distance
    /// degraded to infinity.  Callers must treat such a tour as unroutable
    /// rather than feeding the distance into time estimates.
    pub fn is_unroutable(&self) -> bool {
        self.total_distance_m.is_infinite()
    }

    /// Number of delivery stops (route length minus the origin bookends).
    pub fn stop_count(&self) -> usize {
        self.route.len().saturating_sub(2)
    }
}

// ── plan_tour ─────────────────────────────────────────────────────────────────

/// Plan a closed tour from `origin` through `destinations` and back.
///
/// Destinations are deduplicated (first occurrence kept) and entries equal to
/// the origin are dropped before planning.  Edge cases:
///
/// - no remaining destinations → `[origin]`, distance 0;
/// - exactly one destination `d` → `[origin, d, origin]` with the one-way
///   distance doubled (an explicit round trip, so asymmetric test graphs
///   cannot make the two legs diverge);
/// - otherwise greedy nearest-neighbor, first-encountered candidate winning
///   distance ties.
///
/// Unreachable destinations compare as infinite and are picked only once no
/// finite candidate remains; the tour is then [unroutable](Tour::is_unroutable)
/// but still complete — planning never fails.
pub fn plan_tour<F: PathFinder>(
    graph:        &CampusGraph,
    finder:       &F,
    origin:       NodeId,
    destinations: &[NodeId],
) -> Tour {
    // Dedup preserving first-occurrence order, minus the origin itself.
    let mut seen = FxHashSet::default();
    let mut remaining: Vec<NodeId> = destinations
        .iter()
        .copied()
        .filter(|&d| d != origin && seen.insert(d))
        .collect();

    if remaining.is_empty() {
        return Tour { route: vec![origin], total_distance_m: 0.0 };
    }
    if remaining.len() == 1 {
        let d = remaining[0];
        let one_way = finder.shortest_distance(graph, origin, d);
        return Tour {
            route:            vec![origin, d, origin],
            total_distance_m: 2.0 * one_way,
        };
    }

    let mut route = vec![origin];
    let mut total = 0.0;
    let mut current = origin;

    while !remaining.is_empty() {
        // Scan in current order; strict `<` keeps the first-encountered
        // candidate on ties, and seeds with index 0 so an all-unreachable
        // remainder still makes progress instead of spinning.
        let mut nearest = 0;
        let mut nearest_dist = finder.shortest_distance(graph, current, remaining[0]);
        for (i, &candidate) in remaining.iter().enumerate().skip(1) {
            let dist = finder.shortest_distance(graph, current, candidate);
            if dist < nearest_dist {
                nearest = i;
                nearest_dist = dist;
            }
        }

        let next = remaining.remove(nearest);
        route.push(next);
        total += nearest_dist;
        current = next;
    }

    // Close the loop.
    total += finder.shortest_distance(graph, current, origin);
    route.push(origin);

    Tour { route, total_distance_m: total }
}
