use thiserror::Error;

/// Failures of the speed-dial store contract.
///
/// Deleting a slot that has no binding is not an error; `unassign` succeeds.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database could not be reached or the query failed
    #[error("speed dial store unavailable: {0}")]
    StoreUnavailable(#[from] rusqlite::Error),

    /// The phone id does not resolve to a phone record
    #[error("no phone with id {0}")]
    InvalidReference(i64),

    /// The key is outside the assignable range 2..=9
    #[error("slot {0} cannot be assigned (use 2-9; 1 is voicemail)")]
    InvalidSlot(u8),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
