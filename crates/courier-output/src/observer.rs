//! `DispatchLogObserver<W>` — bridges `DispatchObserver` to a `TripLogWriter`.

use courier_graph::CampusGraph;
use courier_sim::{DispatchObserver, TripRecord};

use crate::row::{DeliveryRow, TripRow};
use crate::writer::TripLogWriter;
use crate::OutputError;

/// A [`DispatchObserver`] that writes every logged trip (and its deliveries)
/// to any [`TripLogWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods have
/// no return value.  After the dispatch pass returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct DispatchLogObserver<'g, W: TripLogWriter> {
    writer:     W,
    graph:      &'g CampusGraph,
    last_error: Option<OutputError>,
}

impl<'g, W: TripLogWriter> DispatchLogObserver<'g, W> {
    /// Create an observer backed by `writer`; `graph` supplies block labels
    /// for the route and destination columns.
    pub fn new(writer: W, graph: &'g CampusGraph) -> Self {
        Self {
            writer,
            graph,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the dispatch pass returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the pass).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn label(&self, node: courier_core::NodeId) -> &str {
        self.graph.label(node).unwrap_or("?")
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TripLogWriter> DispatchObserver for DispatchLogObserver<'_, W> {
    fn on_trip_planned(&mut self, trip_index: usize, trip: &TripRecord) {
        let route = trip
            .tour
            .route
            .iter()
            .map(|&n| self.label(n))
            .collect::<Vec<_>>()
            .join(" -> ");

        let row = TripRow {
            trip:          trip_index as u32,
            priority:      trip.priority.as_str(),
            route,
            distance_m:    trip.tour.total_distance_m,
            travel_secs:   trip.duration.travel_secs,
            service_secs:  trip.duration.service_secs,
            total_secs:    trip.duration.total_secs,
            package_count: trip.packages.len() as u32,
        };
        let result = self.writer.write_trip(&row);
        self.store_err(result);

        let rows: Vec<DeliveryRow> = trip
            .packages
            .iter()
            .map(|p| DeliveryRow {
                package_id:  p.id.0,
                trip:        trip_index as u32,
                destination: self.label(p.destination).to_string(),
                priority:    p.priority.as_str(),
            })
            .collect();
        let result = self.writer.write_deliveries(&rows);
        self.store_err(result);
    }

    fn on_dispatch_end(&mut self, _trips_planned: usize) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
