//! Delivery-time estimation.
//!
//! Pure arithmetic over a tour's distance and package count.  Negative inputs
//! are contract violations and deliberately not validated — callers own the
//! invariant that distances and counts are non-negative.

// ── DurationParams ────────────────────────────────────────────────────────────

/// Constants converting distance and package count into elapsed time.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DurationParams {
    /// Courier walking speed in metres per second.
    pub courier_speed_mps: f64,
    /// Hand-over time per package in seconds.
    pub service_secs_per_package: f64,
}

impl Default for DurationParams {
    /// ~5 km/h walking pace, 30 s per hand-over.
    fn default() -> Self {
        Self {
            courier_speed_mps:        1.4,
            service_secs_per_package: 30.0,
        }
    }
}

impl DurationParams {
    /// Break a trip into travel time plus per-package service time.
    pub fn estimate(&self, distance_m: f64, package_count: usize) -> DurationBreakdown {
        let travel_secs = distance_m / self.courier_speed_mps;
        let service_secs = package_count as f64 * self.service_secs_per_package;
        DurationBreakdown {
            travel_secs,
            service_secs,
            total_secs: travel_secs + service_secs,
        }
    }
}

// ── DurationBreakdown ─────────────────────────────────────────────────────────

/// Estimated elapsed time for one trip, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DurationBreakdown {
    pub total_secs:   f64,
    pub travel_secs:  f64,
    pub service_secs: f64,
}

// ── Formatting ────────────────────────────────────────────────────────────────

/// Render seconds as `"1h 5m 30s"`, `"3m 7s"`, or `"45s"`.
///
/// Sub-second remainders are truncated, matching what delivery reports show.
pub fn format_secs(secs: f64) -> String {
    let total = secs.max(0.0) as u64;
    let hours = total / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}
