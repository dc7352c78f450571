use thiserror::Error;

/// Failure taxonomy for the booking engine. Business-rule failures roll
/// the transaction back before they surface; store failures are safe to
/// retry from the caller's side.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("missing or invalid field: {0}")]
    InvalidRequest(&'static str),

    #[error("flight {0} not found")]
    FlightNotFound(String),

    #[error("booking {0} not found")]
    BookingNotFound(String),

    #[error("insufficient wallet balance: required {required_cents}, available {available_cents}")]
    InsufficientFunds {
        required_cents: i64,
        available_cents: i64,
    },

    #[error("wallet row is missing")]
    WalletNotFound,

    #[error("could not allocate a unique PNR")]
    PnrExhausted,

    #[error("store failure: {0}")]
    Store(#[from] sqlx::Error),
}
