//! Unit tests for courier-output.

#[cfg(test)]
mod helpers {
    use courier_core::Priority;
    use courier_graph::{BfsPathFinder, CampusGraph, CampusGraphBuilder};
    use courier_plan::DurationParams;
    use courier_sim::Session;

    /// Hub plus two blocks in a line: hub -100m- X -50m- Y.
    pub fn line_graph() -> CampusGraph {
        let mut b = CampusGraphBuilder::new();
        let hub = b.add_block("HUB");
        let x = b.add_block("X");
        let y = b.add_block("Y");
        b.add_walkway(hub, x, 100.0);
        b.add_walkway(x, y, 50.0);
        b.build()
    }

    /// Run one dispatch pass with two packages and the given observer.
    pub fn dispatch_two<O: courier_sim::DispatchObserver>(
        graph: &CampusGraph,
        observer: &mut O,
    ) -> Session {
        let hub = graph.block("HUB").unwrap();
        let x = graph.block("X").unwrap();
        let y = graph.block("Y").unwrap();

        let mut session = Session::new();
        session.queue_package(x, Priority::Normal);
        session.queue_package(y, Priority::Urgent);

        courier_sim::run_dispatch(
            &mut session,
            graph,
            &BfsPathFinder,
            hub,
            &DurationParams::default(),
            observer,
        )
        .unwrap();
        session
    }
}

#[cfg(test)]
mod csv_writer {
    use std::fs;

    use crate::writer::TripLogWriter;
    use crate::{CsvWriter, DeliveryRow, TripRow};

    fn trip_row() -> TripRow {
        TripRow {
            trip:          0,
            priority:      "urgent",
            route:         "HUB -> X -> HUB".to_string(),
            distance_m:    200.0,
            travel_secs:   142.86,
            service_secs:  30.0,
            total_secs:    172.86,
            package_count: 1,
        }
    }

    #[test]
    fn creates_both_files_with_headers() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.finish().unwrap();

        let trips = fs::read_to_string(dir.path().join("trips.csv")).unwrap();
        assert_eq!(
            trips.lines().next().unwrap(),
            "trip,priority,route,distance_m,travel_secs,service_secs,total_secs,package_count"
        );

        let deliveries = fs::read_to_string(dir.path().join("deliveries.csv")).unwrap();
        assert_eq!(
            deliveries.lines().next().unwrap(),
            "package_id,trip,destination,priority"
        );
    }

    #[test]
    fn writes_trip_and_delivery_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.write_trip(&trip_row()).unwrap();
        writer
            .write_deliveries(&[DeliveryRow {
                package_id:  1,
                trip:        0,
                destination: "X".to_string(),
                priority:    "urgent",
            }])
            .unwrap();
        writer.finish().unwrap();

        let trips = fs::read_to_string(dir.path().join("trips.csv")).unwrap();
        let row = trips.lines().nth(1).unwrap();
        assert_eq!(row, "0,urgent,HUB -> X -> HUB,200,142.86,30,172.86,1");

        let deliveries = fs::read_to_string(dir.path().join("deliveries.csv")).unwrap();
        assert_eq!(deliveries.lines().nth(1).unwrap(), "1,0,X,urgent");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.write_trip(&trip_row()).unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap();

        let trips = fs::read_to_string(dir.path().join("trips.csv")).unwrap();
        assert_eq!(trips.lines().count(), 2);
    }
}

#[cfg(test)]
mod observer {
    use std::fs;

    use super::helpers;
    use crate::{CsvWriter, DispatchLogObserver};

    #[test]
    fn dispatch_pass_lands_in_csv_files() {
        let dir = tempfile::tempdir().unwrap();
        let graph = helpers::line_graph();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = DispatchLogObserver::new(writer, &graph);

        helpers::dispatch_two(&graph, &mut obs);
        assert!(obs.take_error().is_none());

        let trips = fs::read_to_string(dir.path().join("trips.csv")).unwrap();
        let rows: Vec<&str> = trips.lines().skip(1).collect();
        assert_eq!(rows.len(), 2);
        // Urgent trip first; package 2 was queued to Y.
        assert!(rows[0].starts_with("0,urgent,HUB -> Y -> HUB,300"));
        assert!(rows[1].starts_with("1,normal,HUB -> X -> HUB,200"));

        let deliveries = fs::read_to_string(dir.path().join("deliveries.csv")).unwrap();
        let rows: Vec<&str> = deliveries.lines().skip(1).collect();
        assert_eq!(rows, vec!["2,0,Y,urgent", "1,1,X,normal"]);
    }

    #[test]
    fn unknown_nodes_render_as_question_mark() {
        let dir = tempfile::tempdir().unwrap();
        let graph = helpers::line_graph();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = DispatchLogObserver::new(writer, &graph);

        let mut session = courier_sim::Session::new();
        session.queue_package(courier_core::NodeId(99), courier_core::Priority::Normal);
        courier_sim::run_dispatch(
            &mut session,
            &graph,
            &courier_graph::BfsPathFinder,
            graph.block("HUB").unwrap(),
            &courier_plan::DurationParams::default(),
            &mut obs,
        )
        .unwrap();
        assert!(obs.take_error().is_none());

        let deliveries = fs::read_to_string(dir.path().join("deliveries.csv")).unwrap();
        assert_eq!(deliveries.lines().nth(1).unwrap(), "1,0,?,normal");
    }
}

#[cfg(test)]
mod report {
    use courier_sim::{NoopObserver, Session};

    use super::helpers;
    use crate::session_report;

    #[test]
    fn empty_session_reports_empty_log() {
        let graph = helpers::line_graph();
        let report = session_report(&Session::new(), &graph);
        assert!(report.starts_with("trip log: empty"));
        assert!(report.contains("pending: 0 (0 urgent, 0 normal)"));
        assert!(report.contains("trips logged: 0"));
    }

    #[test]
    fn report_lists_trips_routes_and_counts() {
        let graph = helpers::line_graph();
        let session = helpers::dispatch_two(&graph, &mut NoopObserver);
        let report = session_report(&session, &graph);

        assert!(report.contains("trip 0 [urgent]"));
        assert!(report.contains("route: HUB -> Y -> HUB"));
        assert!(report.contains("Y: 1 package"));
        assert!(report.contains("trip 1 [normal]"));
        assert!(report.contains("route: HUB -> X -> HUB"));
        assert!(report.contains("X: 1 package"));
        assert!(report.contains("trips logged: 2"));
    }

    #[test]
    fn unroutable_trip_is_flagged() {
        let graph = helpers::line_graph();
        let mut session = Session::new();
        session.queue_package(courier_core::NodeId(99), courier_core::Priority::Normal);
        courier_sim::run_dispatch(
            &mut session,
            &graph,
            &courier_graph::BfsPathFinder,
            graph.block("HUB").unwrap(),
            &courier_plan::DurationParams::default(),
            &mut NoopObserver,
        )
        .unwrap();

        let report = session_report(&session, &graph);
        assert!(report.contains("unroutable"));
    }
}
