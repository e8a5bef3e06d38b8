//! Plain-text session report, for terminals and log panels.

use std::collections::BTreeMap;
use std::fmt::Write;

use courier_graph::CampusGraph;
use courier_plan::format_secs;
use courier_sim::Session;

fn label<'g>(graph: &'g CampusGraph, node: courier_core::NodeId) -> &'g str {
    graph.label(node).unwrap_or("?")
}

/// Render the session's trip log and counters as a multi-line report.
///
/// One block per logged trip: a header with priority, total distance and
/// estimated duration, the route as an arrow chain, the travel/service
/// breakdown, then one line per destination with its package count.  A
/// final block summarises the session counters.
pub fn session_report(session: &Session, graph: &CampusGraph) -> String {
    let mut out = String::new();

    if session.trips().is_empty() {
        out.push_str("trip log: empty\n");
    }

    for (i, trip) in session.trips().iter().enumerate() {
        let (distance, est) = if trip.tour.is_unroutable() {
            ("unroutable".to_string(), "n/a".to_string())
        } else {
            (
                format!("{:.2} m", trip.tour.total_distance_m),
                format_secs(trip.duration.total_secs),
            )
        };
        let _ = writeln!(out, "trip {i} [{}] {distance}, est {est}", trip.priority);

        let route = trip
            .tour
            .route
            .iter()
            .map(|&n| label(graph, n))
            .collect::<Vec<_>>()
            .join(" -> ");
        let _ = writeln!(out, "  route: {route}");
        if !trip.tour.is_unroutable() {
            let _ = writeln!(
                out,
                "  travel {}, service {}",
                format_secs(trip.duration.travel_secs),
                format_secs(trip.duration.service_secs),
            );
        }

        // Per-destination package counts, sorted by label for stable output.
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for p in &trip.packages {
            *counts.entry(label(graph, p.destination)).or_insert(0) += 1;
        }
        for (dest, count) in counts {
            let noun = if count == 1 { "package" } else { "packages" };
            let _ = writeln!(out, "    {dest}: {count} {noun}");
        }
    }

    let stats = session.stats();
    let _ = writeln!(out, "---");
    let _ = writeln!(
        out,
        "pending: {} ({} urgent, {} normal), {} distinct destinations",
        stats.pending_total,
        stats.pending_urgent,
        stats.pending_normal,
        stats.unique_destinations,
    );
    let total = if stats.total_estimated_secs.is_finite() {
        format_secs(stats.total_estimated_secs)
    } else {
        "n/a".to_string()
    };
    let _ = writeln!(
        out,
        "trips logged: {}, total estimated time: {total}",
        stats.trips_logged,
    );

    out
}
