//! campus — walking-courier delivery demo on the eight-block campus map.
//!
//! Queues a seeded random batch of packages, runs a dispatch pass with a
//! leg-by-leg console animation, writes the trip log to `output/campus/`,
//! then runs a second wave and a reset to show the session lifecycle.
//! Pass `--fast` to skip the animation pacing.

mod map;

use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use courier_core::{MapPoint, NodeId, Priority};
use courier_graph::{BfsPathFinder, CampusGraph};
use courier_output::{session_report, CsvWriter, DispatchLogObserver};
use courier_plan::{format_secs, DurationParams};
use courier_sim::{run_dispatch, DispatchObserver, NoopObserver, Session, TripRecord};

use map::{build_campus, HUB_LABEL};

// ── Constants ─────────────────────────────────────────────────────────────────

const PACKAGE_COUNT: usize = 6;
const SECOND_WAVE:   usize = 3;
const SEED:          u64   = 42;
const LEG_PACE_MS:   u64   = 250;

// ── Console observer ──────────────────────────────────────────────────────────

/// Prints each planned trip and walks its legs with a small delay, then
/// forwards every callback to the CSV-writing observer.
struct ConsoleObserver<'g, O: DispatchObserver> {
    inner: O,
    graph: &'g CampusGraph,
    pace:  Option<Duration>,
}

impl<'g, O: DispatchObserver> ConsoleObserver<'g, O> {
    fn new(inner: O, graph: &'g CampusGraph, pace: Option<Duration>) -> Self {
        Self { inner, graph, pace }
    }

    fn label(&self, node: NodeId) -> &str {
        self.graph.label(node).unwrap_or("?")
    }
}

impl<O: DispatchObserver> DispatchObserver for ConsoleObserver<'_, O> {
    fn on_trip_planned(&mut self, trip_index: usize, trip: &TripRecord) {
        let distance = if trip.tour.is_unroutable() {
            "unroutable".to_string()
        } else {
            format!("{:.2} m", trip.tour.total_distance_m)
        };
        println!(
            "trip {trip_index} [{}]: {} stops, {distance}, est {}",
            trip.priority,
            trip.tour.stop_count(),
            format_secs(trip.duration.total_secs),
        );
        self.inner.on_trip_planned(trip_index, trip);
    }

    fn on_leg(&mut self, trip_index: usize, leg_index: usize, path: &[NodeId]) {
        let walked = path
            .iter()
            .map(|&n| self.label(n))
            .collect::<Vec<_>>()
            .join(" -> ");
        println!("  leg {leg_index}: {walked}");
        if let Some(pace) = self.pace {
            thread::sleep(pace);
        }
        self.inner.on_leg(trip_index, leg_index, path);
    }

    fn on_dispatch_end(&mut self, trips_planned: usize) {
        println!("dispatch complete: {trips_planned} trip(s)");
        self.inner.on_dispatch_end(trips_planned);
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn queue_random_batch(
    session: &mut Session,
    blocks:  &[NodeId],
    rng:     &mut SmallRng,
    count:   usize,
) {
    for _ in 0..count {
        let destination = blocks[rng.gen_range(0..blocks.len())];
        let priority = if rng.gen_bool(1.0 / 3.0) {
            Priority::Urgent
        } else {
            Priority::Normal
        };
        session.queue_package(destination, priority);
    }
}

fn print_pending(session: &Session, graph: &CampusGraph) {
    for p in session.pending() {
        println!(
            "  #{} -> {} [{}]",
            p.id.0,
            graph.label(p.destination).unwrap_or("?"),
            p.priority,
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let fast = std::env::args().any(|a| a == "--fast");
    let pace = (!fast).then(|| Duration::from_millis(LEG_PACE_MS));

    println!("=== campus — courier delivery simulator ===");
    println!("Packages: {PACKAGE_COUNT} + {SECOND_WAVE}  |  Seed: {SEED}  |  Hub: {HUB_LABEL}");
    println!();

    // 1. Build the campus map.
    let (graph, positions, hub) = build_campus();
    println!(
        "Campus: {} blocks, {} walkways",
        graph.node_count(),
        graph.edge_count() / 2
    );
    for (from, to, metres) in graph.edges() {
        // Each walkway is stored twice; print it once.
        if from.0 < to.0 {
            let at: MapPoint = positions[from.index()].midpoint(positions[to.index()]);
            println!(
                "  {:<9} -- {:<9} {metres:>7.2} m  label at {at}",
                graph.label(from).unwrap_or("?"),
                graph.label(to).unwrap_or("?"),
            );
        }
    }
    println!();

    // 2. Queue a seeded random batch.
    let blocks: Vec<NodeId> = graph.nodes().filter(|&n| n != hub).collect();
    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut session = Session::new();
    queue_random_batch(&mut session, &blocks, &mut rng, PACKAGE_COUNT);

    let stats = session.stats();
    println!(
        "Pending: {} packages ({} urgent, {} normal), {} distinct destinations",
        stats.pending_total,
        stats.pending_urgent,
        stats.pending_normal,
        stats.unique_destinations,
    );
    print_pending(&session, &graph);
    println!();

    // 3. Dispatch with console animation + CSV output.
    std::fs::create_dir_all("output/campus")?;
    let writer = CsvWriter::new(Path::new("output/campus"))?;
    let csv_obs = DispatchLogObserver::new(writer, &graph);
    let mut obs = ConsoleObserver::new(csv_obs, &graph, pace);

    let t0 = Instant::now();
    run_dispatch(
        &mut session,
        &graph,
        &BfsPathFinder,
        hub,
        &DurationParams::default(),
        &mut obs,
    )?;
    println!("(planned in {:.3} ms)", t0.elapsed().as_secs_f64() * 1_000.0);
    println!();

    // 4. Second wave — the trip log only grows.
    queue_random_batch(&mut session, &blocks, &mut rng, SECOND_WAVE);
    run_dispatch(
        &mut session,
        &graph,
        &BfsPathFinder,
        hub,
        &DurationParams::default(),
        &mut obs,
    )?;
    println!();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Session report.
    println!("{}", session_report(&session, &graph));

    // 6. Reset — the log clears but package ids keep counting.
    session.reset();
    let id = session.queue_package(blocks[0], Priority::Normal);
    println!(
        "After reset: {} trips logged, next package got id {}",
        session.trips().len(),
        id.0,
    );
    let _ = run_dispatch(
        &mut session,
        &graph,
        &BfsPathFinder,
        hub,
        &DurationParams::default(),
        &mut NoopObserver,
    )?;
    println!("Trip log after post-reset dispatch: {} trip(s)", session.trips().len());
    println!();
    println!("CSV trip log written to output/campus/");

    Ok(())
}
