//! Session state: the pending package queue and the trip log.

use rustc_hash::FxHashSet;

use courier_core::{NodeId, PackageId, Priority};
use courier_plan::{DurationBreakdown, Tour};

// ── Package ───────────────────────────────────────────────────────────────────

/// A queued delivery request.
///
/// Lives in the session's pending queue from the moment it is added until a
/// dispatch pass consumes it into a [`TripRecord`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Package {
    pub id:          PackageId,
    pub destination: NodeId,
    pub priority:    Priority,
}

// ── TripRecord ────────────────────────────────────────────────────────────────

/// The persisted result of planning one priority group's tour.
///
/// Immutable once logged; the trip log only ever grows until
/// [`Session::reset`] clears it wholesale.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripRecord {
    pub priority: Priority,
    pub tour:     Tour,
    /// The packages that generated this trip, in queue order.
    pub packages: Vec<Package>,
    pub duration: DurationBreakdown,
}

// ── SessionStats ──────────────────────────────────────────────────────────────

/// A point-in-time summary of the session, for stat panels and reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionStats {
    pub pending_total:        usize,
    pub pending_urgent:       usize,
    pub pending_normal:       usize,
    /// Distinct destinations among pending packages.
    pub unique_destinations:  usize,
    pub trips_logged:         usize,
    /// Sum of logged trip totals in seconds; 0 with an empty log.
    pub total_estimated_secs: f64,
}

// ── Session ───────────────────────────────────────────────────────────────────

/// In-memory session state for one simulator instance.
///
/// Package ids are assigned monotonically starting at 1 and are never reused
/// within a session, including across [`reset`](Self::reset).
#[derive(Debug)]
pub struct Session {
    pending: Vec<Package>,
    trips:   Vec<TripRecord>,
    next_id: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self { pending: Vec::new(), trips: Vec::new(), next_id: 1 }
    }

    /// Queue a package for the next dispatch pass and return its id.
    ///
    /// The destination is not validated against any graph here; an unknown
    /// node simply plans as unreachable.
    pub fn queue_package(&mut self, destination: NodeId, priority: Priority) -> PackageId {
        let id = PackageId(self.next_id);
        self.next_id += 1;
        self.pending.push(Package { id, destination, priority });
        id
    }

    /// Packages awaiting dispatch, in queue order.
    pub fn pending(&self) -> &[Package] {
        &self.pending
    }

    /// The append-only trip log, in dispatch order.
    pub fn trips(&self) -> &[TripRecord] {
        &self.trips
    }

    /// Running sum of estimated trip totals across the whole log.
    pub fn total_estimated_secs(&self) -> f64 {
        self.trips.iter().map(|t| t.duration.total_secs).sum()
    }

    /// Snapshot the session counters.
    pub fn stats(&self) -> SessionStats {
        let pending_urgent = self
            .pending
            .iter()
            .filter(|p| p.priority == Priority::Urgent)
            .count();
        let unique_destinations = self
            .pending
            .iter()
            .map(|p| p.destination)
            .collect::<FxHashSet<_>>()
            .len();

        SessionStats {
            pending_total:        self.pending.len(),
            pending_urgent,
            pending_normal:       self.pending.len() - pending_urgent,
            unique_destinations,
            trips_logged:         self.trips.len(),
            total_estimated_secs: self.total_estimated_secs(),
        }
    }

    /// Discard all pending packages and the entire trip log.
    ///
    /// The id counter is deliberately left running so ids stay unique for
    /// the lifetime of the session object.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.trips.clear();
    }

    // ── Crate-internal dispatch hooks ─────────────────────────────────────

    /// Consume the whole pending queue (dispatch phase ①).
    pub(crate) fn take_pending(&mut self) -> Vec<Package> {
        std::mem::take(&mut self.pending)
    }

    /// Append a finished trip and return its index in the log.
    pub(crate) fn log_trip(&mut self, trip: TripRecord) -> usize {
        self.trips.push(trip);
        self.trips.len() - 1
    }
}
