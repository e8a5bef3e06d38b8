//! Unit tests for courier-graph.
//!
//! All tests use hand-built graphs; the `campus` helper reproduces the
//! standard 8-block campus map with its real walkway distances.

#[cfg(test)]
mod helpers {
    use courier_core::NodeId;
    use crate::{CampusGraph, CampusGraphBuilder};

    /// The standard campus map.
    ///
    /// Walkways (metres):
    ///   A-B 110.58   A-C 120.38   A-RANCHOS 108.58
    ///   B-D  41.06   B-C  45.34
    ///   C-D  61.98   C-E  78.42   C-F 68.21   C-RANCHOS 117.48
    ///   D-F  58.38   D-G 114.59
    ///   E-F  98.49   E-RANCHOS 100.54
    ///   F-G  98.14
    ///
    /// Returned ids are `[A, B, C, D, E, F, G, RANCHOS]`.
    pub fn campus() -> (CampusGraph, [NodeId; 8]) {
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

        (b.build(), [a, bb, c, d, e, f, g, r])
    }

    /// Two triangles joined only at `a`, with hop-minimal ≠ weight-minimal
    /// paths: `a→x→b` is 2 hops for 200 m while `a→c→d→b` is 3 hops for 30 m.
    pub fn uneven() -> (CampusGraph, [NodeId; 5]) {
        let mut bld = CampusGraphBuilder::new();
        let a = bld.add_block("a");
        let x = bld.add_block("x");
        let b = bld.add_block("b");
        let c = bld.add_block("c");
        let d = bld.add_block("d");
        bld.add_walkway(a, x, 100.0);
        bld.add_walkway(x, b, 100.0);
        bld.add_walkway(a, c, 10.0);
        bld.add_walkway(c, d, 10.0);
        bld.add_walkway(d, b, 10.0);
        (bld.build(), [a, x, b, c, d])
    }
}

// ── Builder & graph structure ─────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use courier_core::NodeId;
    use crate::CampusGraphBuilder;

    #[test]
    fn empty_build() {
        let g = CampusGraphBuilder::new().build();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.is_empty());
    }

    #[test]
    fn campus_dimensions() {
        let (g, _) = super::helpers::campus();
        assert_eq!(g.node_count(), 8);
        assert_eq!(g.edge_count(), 28); // 14 walkways, two entries each
    }

    #[test]
    fn add_block_is_idempotent() {
        let mut b = CampusGraphBuilder::new();
        let first = b.add_block("BLOQUE A");
        let again = b.add_block("BLOQUE A");
        assert_eq!(first, again);
        assert_eq!(b.block_count(), 1);
    }

    #[test]
    fn labels_are_case_sensitive() {
        let mut b = CampusGraphBuilder::new();
        let upper = b.add_block("BLOQUE A");
        let lower = b.add_block("bloque a");
        assert_ne!(upper, lower);
    }

    #[test]
    fn directed_only_entry() {
        let mut b = CampusGraphBuilder::new();
        let a = b.add_block("a");
        let c = b.add_block("c");
        b.add_directed_path(a, c, 100.0);
        let g = b.build();
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.direct_weight(a, c), Some(100.0));
        assert_eq!(g.direct_weight(c, a), None); // no return entry
    }

    #[test]
    fn ids_are_sequential() {
        let (_, ids) = super::helpers::campus();
        assert_eq!(ids[0], NodeId(0));
        assert_eq!(ids[7], NodeId(7));
    }
}

// ── Graph queries ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod queries {
    use courier_core::NodeId;

    #[test]
    fn label_round_trip() {
        let (g, [a, ..]) = super::helpers::campus();
        assert_eq!(g.block("BLOQUE A"), Some(a));
        assert_eq!(g.label(a), Some("BLOQUE A"));
        assert_eq!(g.block("BLOQUE Z"), None);
        assert_eq!(g.label(NodeId(99)), None);
    }

    #[test]
    fn require_block_errors_on_unknown() {
        let (g, _) = super::helpers::campus();
        assert!(g.require_block("BLOQUE D").is_ok());
        assert!(g.require_block("bloque d").is_err());
    }

    #[test]
    fn neighbors_preserve_insertion_order() {
        let (g, [a, bb, c, d, _, f, gg, r]) = super::helpers::campus();

        let of = |n| g.neighbors(n).map(|(to, _)| to).collect::<Vec<_>>();
        assert_eq!(of(a), vec![bb, c, r]);
        assert_eq!(of(bb), vec![a, d, c]);
        assert_eq!(of(gg), vec![d, f]);
    }

    #[test]
    fn walkways_are_symmetric() {
        let (g, _) = super::helpers::campus();
        for (from, to, w) in g.edges() {
            assert_eq!(g.direct_weight(to, from), Some(w));
        }
    }

    #[test]
    fn direct_weight_exact() {
        let (g, [a, bb, _, d, ..]) = super::helpers::campus();
        assert_eq!(g.direct_weight(a, bb), Some(110.58));
        assert_eq!(g.direct_weight(bb, d), Some(41.06));
        assert_eq!(g.direct_weight(a, d), None); // not directly connected
    }

    #[test]
    fn unknown_node_has_no_neighbors() {
        let (g, _) = super::helpers::campus();
        assert_eq!(g.neighbors(NodeId(99)).count(), 0);
        assert_eq!(g.degree(NodeId(99)), 0);
        assert_eq!(g.degree(NodeId::INVALID), 0);
    }
}

// ── BFS path finding ──────────────────────────────────────────────────────────

#[cfg(test)]
mod pathfind {
    use courier_core::NodeId;
    use crate::{BfsPathFinder, CampusGraphBuilder, PathFinder, UNREACHABLE};

    #[test]
    fn self_query_is_trivial() {
        let (g, [a, ..]) = super::helpers::campus();
        assert_eq!(BfsPathFinder.shortest_distance(&g, a, a), 0.0);
        assert_eq!(BfsPathFinder.shortest_path(&g, a, a), vec![a]);
    }

    #[test]
    fn direct_walkway_returns_stored_weight() {
        let (g, [a, bb, ..]) = super::helpers::campus();
        assert_eq!(BfsPathFinder.shortest_distance(&g, a, bb), 110.58);
        assert_eq!(BfsPathFinder.shortest_distance(&g, bb, a), 110.58); // symmetry
        assert_eq!(BfsPathFinder.shortest_path(&g, a, bb), vec![a, bb]);
    }

    #[test]
    fn multi_hop_distance_accumulates_weights() {
        let (g, [a, _, _, d, _, _, gg, _]) = super::helpers::campus();
        // A→D discovered through B.
        let ad = BfsPathFinder.shortest_distance(&g, a, d);
        assert!((ad - (110.58 + 41.06)).abs() < 1e-9, "got {ad}");
        // A→G discovered through B, D.
        let ag = BfsPathFinder.shortest_distance(&g, a, gg);
        assert!((ag - (110.58 + 41.06 + 114.59)).abs() < 1e-9, "got {ag}");
    }

    #[test]
    fn multi_hop_path_lists_intermediates() {
        let (g, [a, bb, _, d, _, _, gg, _]) = super::helpers::campus();
        assert_eq!(BfsPathFinder.shortest_path(&g, a, d), vec![a, bb, d]);
        assert_eq!(BfsPathFinder.shortest_path(&g, a, gg), vec![a, bb, d, gg]);
    }

    #[test]
    fn isolated_block_is_unreachable() {
        let mut b = CampusGraphBuilder::new();
        let a = b.add_block("a");
        let c = b.add_block("c");
        let z = b.add_block("isla");
        b.add_walkway(a, c, 50.0);
        let g = b.build();

        assert_eq!(BfsPathFinder.shortest_distance(&g, a, z), UNREACHABLE);
        assert_eq!(BfsPathFinder.shortest_distance(&g, z, a), UNREACHABLE);
        // Degraded two-node fallback, never an error.
        assert_eq!(BfsPathFinder.shortest_path(&g, a, z), vec![a, z]);
        // Self-query on the isolated block still works.
        assert_eq!(BfsPathFinder.shortest_distance(&g, z, z), 0.0);
    }

    #[test]
    fn out_of_range_ids_degrade_to_unreachable() {
        let (g, [a, ..]) = super::helpers::campus();
        let ghost = NodeId(99);
        assert_eq!(BfsPathFinder.shortest_distance(&g, a, ghost), UNREACHABLE);
        assert_eq!(BfsPathFinder.shortest_distance(&g, ghost, a), UNREACHABLE);
        assert_eq!(BfsPathFinder.shortest_path(&g, ghost, a), vec![ghost, a]);
    }

    #[test]
    fn hop_order_overestimates_on_uneven_weights() {
        // Pins the documented BFS limitation: the 2-hop 200 m path wins over
        // the 3-hop 30 m path because it is dequeued first.
        let (g, [a, x, b, ..]) = super::helpers::uneven();
        assert_eq!(BfsPathFinder.shortest_distance(&g, a, b), 200.0);
        assert_eq!(BfsPathFinder.shortest_path(&g, a, b), vec![a, x, b]);
    }

    #[test]
    fn direct_walkway_short_circuits_cheaper_detours() {
        // A 500 m direct walkway is reported even though a 30 m detour exists.
        let mut bld = CampusGraphBuilder::new();
        let a = bld.add_block("a");
        let b = bld.add_block("b");
        let c = bld.add_block("c");
        bld.add_walkway(a, b, 500.0);
        bld.add_walkway(a, c, 15.0);
        bld.add_walkway(c, b, 15.0);
        let g = bld.build();
        assert_eq!(BfsPathFinder.shortest_distance(&g, a, b), 500.0);
    }
}
