use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use skyfare_booking::BookingError;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(anyhow::Error),
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::InvalidRequest(_) | BookingError::InsufficientFunds { .. } => {
                AppError::BadRequest(err.to_string())
            }
            BookingError::FlightNotFound(_) | BookingError::BookingNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            other => AppError::Internal(other.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(err) => {
                tracing::error!("Internal server error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_business_failures_to_statuses() {
        let cases = [
            (
                AppError::from(BookingError::InvalidRequest("passenger_name")),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::from(BookingError::InsufficientFunds {
                    required_cents: 200_000,
                    available_cents: 1_000,
                }),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::from(BookingError::FlightNotFound("FL999".into())),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::from(BookingError::BookingNotFound("PNR-NOSUCH".into())),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::from(BookingError::WalletNotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::from(BookingError::PnrExhausted),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
