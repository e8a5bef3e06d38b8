//! Plain data row types written by output backends.

/// One logged trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRow {
    /// Index of the trip in the session log (0-based).
    pub trip:          u32,
    pub priority:      &'static str,
    /// Route labels joined with ` -> `, hub first and last.
    pub route:         String,
    /// Total walking distance; `inf` for unroutable tours.
    pub distance_m:    f64,
    pub travel_secs:   f64,
    pub service_secs:  f64,
    pub total_secs:    f64,
    pub package_count: u32,
}

/// One package delivered on a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryRow {
    pub package_id:  u32,
    pub trip:        u32,
    pub destination: String,
    pub priority:    &'static str,
}
