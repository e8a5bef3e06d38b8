use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// A dispatch pass was requested with an empty pending queue.  The
    /// session is left untouched; callers surface this to the user.
    #[error("no packages are pending dispatch")]
    NothingPending,
}

pub type SimResult<T> = Result<T, SimError>;
