//! The university campus map: eight blocks and fourteen walkways.
//!
//! Distances are surveyed walking distances in metres; positions are the
//! canvas pixel coordinates the original campus plan was drawn at.

use courier_core::{MapPoint, NodeId};
use courier_graph::{CampusGraph, CampusGraphBuilder};

/// Hub block every delivery tour starts and ends at.
pub const HUB_LABEL: &str = "BLOQUE A";

/// Build the campus graph.
///
/// Returns `(graph, positions, hub)`; `positions` is indexed by `NodeId`.
pub fn build_campus() -> (CampusGraph, Vec<MapPoint>, NodeId) {
    let mut b = CampusGraphBuilder::with_capacity(8, 28);

    let a  = b.add_block("BLOQUE A");
    let bb = b.add_block("BLOQUE B");
    let c  = b.add_block("BLOQUE C");
    let d  = b.add_block("BLOQUE D");
    let e  = b.add_block("BLOQUE E");
    let f  = b.add_block("BLOQUE F");
    let g  = b.add_block("BLOQUE G");
    let r  = b.add_block("RANCHOS");

    b.add_walkway(a, bb, 110.58);
    b.add_walkway(a, c, 120.38);
    b.add_walkway(a, r, 108.58);
    b.add_walkway(bb, d, 41.06);
    b.add_walkway(bb, c, 45.34);
    b.add_walkway(c, d, 61.98);
    b.add_walkway(c, e, 78.42);
    b.add_walkway(c, f, 68.21);
    b.add_walkway(c, r, 117.48);
    b.add_walkway(d, f, 58.38);
    b.add_walkway(d, g, 114.59);
    b.add_walkway(e, f, 98.49);
    b.add_walkway(e, r, 100.54);
    b.add_walkway(f, g, 98.14);

    let positions = vec![
        MapPoint::new(400.0, 520.0), // BLOQUE A
        MapPoint::new(180.0, 480.0), // BLOQUE B
        MapPoint::new(400.0, 360.0), // BLOQUE C
        MapPoint::new(180.0, 320.0), // BLOQUE D
        MapPoint::new(620.0, 320.0), // BLOQUE E
        MapPoint::new(520.0, 200.0), // BLOQUE F
        MapPoint::new(300.0, 100.0), // BLOQUE G
        MapPoint::new(680.0, 480.0), // RANCHOS
    ];

    (b.build(), positions, a)
}
