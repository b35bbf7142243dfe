use fee_oracle::OracleError;
use thiserror::Error;

/// Failure modes of fee computation and validation.
///
/// The first three variants are the fee core's own verdicts. [`Self::Oracle`]
/// carries a backend failure through unchanged; the core never interprets or
/// retries it, the caller decides whether to reject, retry, or surface it.
#[derive(Debug, Error)]
pub enum FeeError {
    /// A required request field was absent. Names the missing field.
    #[error("missing {0} input")]
    MissingInput(&'static str),
    /// The offered fee is below the accepted floor.
    #[error("fee too low")]
    FeeTooLow,
    /// The offered fee overpays past the accepted cap.
    #[error("fee too high")]
    FeeTooHigh,
    /// A gas price oracle query, storage read, or lookup deadline failed.
    #[error("gas price oracle unavailable: {0}")]
    Oracle(#[source] OracleError),
}
