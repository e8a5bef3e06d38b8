//! Campus graph representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_to[ node_adj_start[n] .. node_adj_start[n+1] ]
//! ```
//!
//! with weights in the parallel `edge_weight_m` array.  Iteration over a
//! node's neighbors is a contiguous memory scan.
//!
//! # Ordering invariant
//!
//! `neighbors(n)` yields entries in the order the edges were added to the
//! builder (`build()` uses a stable sort).  That order drives the BFS
//! frontier and the tour planner's tie-break, so it is part of the observable
//! contract, not an implementation accident.
//!
//! # Labels
//!
//! Block labels are opaque, case-sensitive strings, interned to sequential
//! `NodeId`s at build time.  Lookups against labels or ids that the graph
//! does not know degrade to empty results — they never panic, so routing
//! queries on bad input fall through to the "unreachable" sentinels.

use rustc_hash::FxHashMap;

use courier_core::{CourierError, CourierResult, NodeId};

// ── CampusGraph ───────────────────────────────────────────────────────────────

/// Weighted campus walkway graph in CSR format, immutable after construction.
///
/// Undirected walkways are stored as two directed entries with equal weight,
/// so a graph built only through [`CampusGraphBuilder::add_walkway`] is
/// symmetric by construction.  Do not construct directly; use
/// [`CampusGraphBuilder`].
pub struct CampusGraph {
    /// Block label of each node.  Indexed by `NodeId`.
    labels: Vec<String>,

    /// Reverse lookup: label → `NodeId`.
    label_index: FxHashMap<String, NodeId>,

    /// CSR row pointer.  Outgoing edges of node `n` live at positions
    /// `node_adj_start[n] .. node_adj_start[n+1]`.  Length = `node_count + 1`.
    node_adj_start: Vec<u32>,

    /// Destination node of each edge, in per-source insertion order.
    edge_to: Vec<NodeId>,

    /// Walking distance of each edge in metres.
    edge_weight_m: Vec<f64>,
}

impl CampusGraph {
    /// Construct an empty graph with no blocks or walkways.
    ///
    /// Any routing query against it degrades to the unreachable sentinels.
    pub fn empty() -> Self {
        CampusGraphBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of directed entries (an undirected walkway counts twice).
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    // ── Label lookups ─────────────────────────────────────────────────────

    /// Resolve a block label to its `NodeId`, if the graph knows it.
    pub fn block(&self, label: &str) -> Option<NodeId> {
        self.label_index.get(label).copied()
    }

    /// Resolve a block label or fail with [`CourierError::UnknownBlock`].
    pub fn require_block(&self, label: &str) -> CourierResult<NodeId> {
        self.block(label)
            .ok_or_else(|| CourierError::UnknownBlock(label.to_string()))
    }

    /// The label of `node`, or `None` for ids outside this graph.
    pub fn label(&self, node: NodeId) -> Option<&str> {
        self.labels.get(node.index()).map(String::as_str)
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.labels.len()).map(|i| NodeId(i as u32))
    }

    /// Iterator over all directed entries as `(from, to, metres)`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.nodes().flat_map(move |from| {
            self.neighbors(from).map(move |(to, w)| (from, to, w))
        })
    }

    /// Iterator over the neighbors of `node` as `(neighbor, metres)`, in
    /// edge-insertion order.
    ///
    /// Empty for unknown or out-of-range nodes — an unknown block simply has
    /// no walkways, which downstream queries report as unreachable.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        let (start, end) = self.adj_range(node);
        (start..end).map(|i| (self.edge_to[i], self.edge_weight_m[i]))
    }

    /// Number of outgoing entries of `node` (0 for unknown nodes).
    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        let (start, end) = self.adj_range(node);
        end - start
    }

    /// Weight of the direct walkway entry from `a` to `b`, if one exists.
    ///
    /// Linear in `degree(a)` — fine for campus-scale adjacency.
    pub fn direct_weight(&self, a: NodeId, b: NodeId) -> Option<f64> {
        self.neighbors(a).find(|&(to, _)| to == b).map(|(_, w)| w)
    }

    fn adj_range(&self, node: NodeId) -> (usize, usize) {
        let i = node.index();
        if i + 1 >= self.node_adj_start.len() {
            return (0, 0);
        }
        (
            self.node_adj_start[i] as usize,
            self.node_adj_start[i + 1] as usize,
        )
    }
}

// ── CampusGraphBuilder ────────────────────────────────────────────────────────

/// Construct a [`CampusGraph`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts blocks and walkways in any order.  `build()` performs
/// a stable sort of edges by source node (preserving per-source insertion
/// order) and constructs the CSR arrays.
///
/// # Example
///
/// ```
/// use courier_graph::CampusGraphBuilder;
///
/// let mut b = CampusGraphBuilder::new();
/// let a = b.add_block("BLOQUE A");
/// let c = b.add_block("BLOQUE C");
/// b.add_walkway(a, c, 120.38);
/// let graph = b.build();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 2); // undirected → two entries
/// ```
pub struct CampusGraphBuilder {
    labels:      Vec<String>,
    label_index: FxHashMap<String, NodeId>,
    raw_edges:   Vec<RawEdge>,
}

struct RawEdge {
    from:     NodeId,
    to:       NodeId,
    metres:   f64,
}

impl CampusGraphBuilder {
    pub fn new() -> Self {
        Self {
            labels:      Vec::new(),
            label_index: FxHashMap::default(),
            raw_edges:   Vec::new(),
        }
    }

    /// Pre-allocate for the expected number of blocks and walkway entries.
    pub fn with_capacity(blocks: usize, edges: usize) -> Self {
        Self {
            labels:      Vec::with_capacity(blocks),
            label_index: FxHashMap::default(),
            raw_edges:   Vec::with_capacity(edges),
        }
    }

    /// Intern a block label and return its `NodeId` (sequential from 0).
    ///
    /// Labels are case-sensitive and unique: interning the same label twice
    /// returns the id assigned the first time.
    pub fn add_block(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.label_index.get(label) {
            return id;
        }
        let id = NodeId(self.labels.len() as u32);
        self.labels.push(label.to_string());
        self.label_index.insert(label.to_string(), id);
        id
    }

    /// Add a **directed** entry from `from` to `to`.
    ///
    /// Most callers want [`add_walkway`](Self::add_walkway); the directed form
    /// exists for asymmetric inputs.  `metres` must be non-negative; zero
    /// weight between distinct blocks is permitted but discouraged.
    pub fn add_directed_path(&mut self, from: NodeId, to: NodeId, metres: f64) {
        self.raw_edges.push(RawEdge { from, to, metres });
    }

    /// Add entries in **both directions** for an undirected walkway — the
    /// normal case, and the only one that keeps the graph symmetric.
    pub fn add_walkway(&mut self, a: NodeId, b: NodeId, metres: f64) {
        self.add_directed_path(a, b, metres);
        self.add_directed_path(b, a, metres);
    }

    pub fn block_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.raw_edges.len()
    }

    /// Consume the builder and produce a [`CampusGraph`].
    ///
    /// The edge sort must be stable: per-source insertion order is an
    /// observable invariant of the finished graph.
    pub fn build(self) -> CampusGraph {
        let node_count = self.labels.len();
        let edge_count = self.raw_edges.len();

        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_to:       Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_weight_m: Vec<f64>    = raw.iter().map(|e| e.metres).collect();

        // Build CSR row pointer.
        let mut node_adj_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_adj_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_adj_start[i] += node_adj_start[i - 1];
        }
        debug_assert_eq!(node_adj_start[node_count] as usize, edge_count);

        CampusGraph {
            labels:      self.labels,
            label_index: self.label_index,
            node_adj_start,
            edge_to,
            edge_weight_m,
        }
    }
}

impl Default for CampusGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
