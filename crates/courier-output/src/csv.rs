//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `trips.csv`
//! - `deliveries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TripLogWriter;
use crate::{DeliveryRow, OutputResult, TripRow};

/// Writes the trip log to two CSV files.
pub struct CsvWriter {
    trips:      Writer<File>,
    deliveries: Writer<File>,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trips = Writer::from_path(dir.join("trips.csv"))?;
        trips.write_record([
            "trip",
            "priority",
            "route",
            "distance_m",
            "travel_secs",
            "service_secs",
            "total_secs",
            "package_count",
        ])?;

        let mut deliveries = Writer::from_path(dir.join("deliveries.csv"))?;
        deliveries.write_record(["package_id", "trip", "destination", "priority"])?;

        Ok(Self { trips, deliveries })
    }
}

impl TripLogWriter for CsvWriter {
    fn write_trip(&mut self, row: &TripRow) -> OutputResult<()> {
        self.trips.write_record(&[
            row.trip.to_string(),
            row.priority.to_string(),
            row.route.clone(),
            row.distance_m.to_string(),
            row.travel_secs.to_string(),
            row.service_secs.to_string(),
            row.total_secs.to_string(),
            row.package_count.to_string(),
        ])?;
        Ok(())
    }

    fn write_deliveries(&mut self, rows: &[DeliveryRow]) -> OutputResult<()> {
        for row in rows {
            self.deliveries.write_record(&[
                row.package_id.to_string(),
                row.trip.to_string(),
                row.destination.clone(),
                row.priority.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.trips.flush()?;
        self.deliveries.flush()?;
        Ok(())
    }
}
