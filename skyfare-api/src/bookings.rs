use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use skyfare_booking::BookingRequest;
use skyfare_core::model::{Booking, BookingStatus};
use skyfare_store::booking_repo::BookingRepository;

use crate::error::AppError;
use crate::notify;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct CreateBookingResponse {
    message: &'static str,
    pnr: String,
    amount_paid_cents: i64,
}

#[derive(Debug, Serialize)]
struct CancelBookingResponse {
    pnr: String,
    status: BookingStatus,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", get(list_bookings).post(create_booking))
        .route("/bookings/{pnr}/cancel", post(cancel_booking))
}

async fn list_bookings(State(state): State<AppState>) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = BookingRepository::list_all(&state.db.pool)
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

    Ok(Json(bookings))
}

async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<BookingRequest>,
) -> Result<Json<CreateBookingResponse>, AppError> {
    let confirmation = state.coordinator.book(&req).await?;

    // Ticket and email run detached; their outcome never reaches this caller.
    notify::spawn_post_commit(
        state.ticket_renderer.clone(),
        state.email_notifier.clone(),
        confirmation.ticket(),
        req.contact_email.clone(),
    );

    let booking = confirmation.booking;
    Ok(Json(CreateBookingResponse {
        message: "Booking successful",
        pnr: booking.pnr,
        amount_paid_cents: booking.amount_paid_cents,
    }))
}

async fn cancel_booking(
    State(state): State<AppState>,
    Path(pnr): Path<String>,
) -> Result<Json<CancelBookingResponse>, AppError> {
    let booking = state.coordinator.cancel(&pnr).await?;

    Ok(Json(CancelBookingResponse {
        pnr: booking.pnr,
        status: booking.status,
    }))
}
