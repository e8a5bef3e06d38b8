//! Shared error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `CourierError` via `From` impls, or keep them separate.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.
//!
//! Note that routing queries themselves never error: unreachable targets are
//! reported through sentinel outputs (infinite distance, two-node fallback
//! path), so `CourierError` only covers lookup and I/O failures around the
//! core.

use thiserror::Error;

/// The top-level error type for `courier-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CourierError {
    #[error("no campus block named {0:?}")]
    UnknownBlock(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `courier-*` crates.
pub type CourierResult<T> = Result<T, CourierError>;
