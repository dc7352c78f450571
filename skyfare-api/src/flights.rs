use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use skyfare_core::model::Flight;
use skyfare_store::flight_repo::FlightRepository;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FlightSearchParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub page: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct FlightQuoteResponse {
    #[serde(flatten)]
    pub flight: Flight,
    pub current_price_cents: i64,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/flights", get(search_flights))
        .route("/flights/{id}", get(get_flight))
}

async fn search_flights(
    State(state): State<AppState>,
    Query(params): Query<FlightSearchParams>,
) -> Result<Json<Vec<FlightQuoteResponse>>, AppError> {
    let from = params.from.as_deref().unwrap_or("").trim();
    let to = params.to.as_deref().unwrap_or("").trim();
    if from.is_empty() || to.is_empty() {
        return Err(AppError::BadRequest(
            "Departure and arrival cities are required".to_string(),
        ));
    }

    let page = params.page.unwrap_or(1);

    let flights = FlightRepository::search(&state.db.pool, from, to, page)
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

    // Listing prices are quote-only; no attempt is recorded here.
    let mut results = Vec::with_capacity(flights.len());
    for flight in flights {
        let current_price_cents = state.pricer.quote(&state.db.pool, &flight.flight_id).await?;
        results.push(FlightQuoteResponse {
            flight,
            current_price_cents,
        });
    }

    Ok(Json(results))
}

async fn get_flight(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FlightQuoteResponse>, AppError> {
    let flight = FlightRepository::get(&state.db.pool, &id)
        .await
        .map_err(|e| AppError::Internal(e.into()))?
        .ok_or_else(|| AppError::NotFound(format!("flight {} not found", id)))?;

    let current_price_cents = state.pricer.quote(&state.db.pool, &flight.flight_id).await?;

    Ok(Json(FlightQuoteResponse {
        flight,
        current_price_cents,
    }))
}
