//! The `TripLogWriter` trait implemented by backend writers.

use crate::{DeliveryRow, OutputResult, TripRow};

/// Trait implemented by trip-log backends.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`DispatchLogObserver::take_error`](crate::DispatchLogObserver::take_error).
pub trait TripLogWriter {
    /// Write one trip row.
    fn write_trip(&mut self, row: &TripRow) -> OutputResult<()>;

    /// Write a batch of delivery rows.
    fn write_deliveries(&mut self, rows: &[DeliveryRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
