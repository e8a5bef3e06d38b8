//! `courier-output` — trip-log export and text reports.
//!
//! The CSV backend creates two files in the configured directory:
//!
//! | File             | One row per                         |
//! |------------------|-------------------------------------|
//! | `trips.csv`      | logged trip                         |
//! | `deliveries.csv` | package delivered on a trip         |
//!
//! Writers implement [`TripLogWriter`] and are driven by
//! [`DispatchLogObserver`], which implements `courier_sim::DispatchObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use courier_output::{CsvWriter, DispatchLogObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = DispatchLogObserver::new(writer, &graph);
//! run_dispatch(&mut session, &graph, &BfsPathFinder, hub, &params, &mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::DispatchLogObserver;
pub use report::session_report;
pub use row::{DeliveryRow, TripRow};
pub use writer::TripLogWriter;
