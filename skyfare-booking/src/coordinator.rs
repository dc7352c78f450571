use serde::Deserialize;
use skyfare_core::model::Booking;
use skyfare_core::notify::TicketDocument;
use skyfare_core::pnr;
use skyfare_store::booking_repo::BookingRepository;
use skyfare_store::flight_repo::FlightRepository;
use skyfare_store::wallet_repo::WalletRepository;
use sqlx::PgPool;
use tracing::info;

use crate::error::BookingError;
use crate::pricing::SurgePricer;

/// How many PNRs are minted before giving up on collisions.
const MAX_PNR_TRIES: u32 = 5;

#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    #[serde(default)]
    pub passenger_name: String,
    #[serde(default)]
    pub flight_id: String,
    #[serde(default)]
    pub contact_email: Option<String>,
}

/// A committed booking, carrying everything downstream notifiers need.
#[derive(Debug, Clone)]
pub struct BookingConfirmation {
    pub booking: Booking,
}

impl BookingConfirmation {
    pub fn ticket(&self) -> TicketDocument {
        let b = &self.booking;
        TicketDocument {
            pnr: b.pnr.clone(),
            passenger_name: b.passenger_name.clone(),
            airline: b.airline.clone().unwrap_or_default(),
            flight_id: b.flight_id.clone(),
            departure_city: b.departure_city.clone().unwrap_or_default(),
            arrival_city: b.arrival_city.clone().unwrap_or_default(),
            amount_paid_cents: b.amount_paid_cents,
            booking_time: b.booking_time,
        }
    }
}

fn validated_fields(req: &BookingRequest) -> Result<(&str, &str), BookingError> {
    let passenger_name = req.passenger_name.trim();
    if passenger_name.is_empty() {
        return Err(BookingError::InvalidRequest("passenger_name"));
    }

    let flight_id = req.flight_id.trim();
    if flight_id.is_empty() {
        return Err(BookingError::InvalidRequest("flight_id"));
    }

    Ok((passenger_name, flight_id))
}

/// Runs the booking state machine: one transaction per request, the wallet
/// row locked for its duration, debit and booking insert atomic. Either
/// both land or neither does.
pub struct BookingCoordinator {
    pool: PgPool,
    pricer: SurgePricer,
}

impl BookingCoordinator {
    pub fn new(pool: PgPool, pricer: SurgePricer) -> Self {
        Self { pool, pricer }
    }

    pub async fn book(&self, req: &BookingRequest) -> Result<BookingConfirmation, BookingError> {
        let (passenger_name, flight_id) = validated_fields(req)?;

        // Demand is recorded before any money moves; a booking that fails
        // below still counts toward the surge window.
        let price = self.pricer.quote_and_record(&self.pool, flight_id).await?;

        let mut tx = self.pool.begin().await?;

        let balance = WalletRepository::balance_for_update(&mut tx)
            .await?
            .ok_or(BookingError::WalletNotFound)?;
        if balance < price {
            // Dropping the transaction rolls back and releases the lock.
            return Err(BookingError::InsufficientFunds {
                required_cents: price,
                available_cents: balance,
            });
        }

        WalletRepository::debit(&mut tx, price).await?;

        let flight = FlightRepository::snapshot(&mut tx, flight_id)
            .await?
            .ok_or_else(|| BookingError::FlightNotFound(flight_id.to_string()))?;

        let mut booked = None;
        for _ in 0..MAX_PNR_TRIES {
            let pnr = pnr::generate();
            match BookingRepository::insert(&mut tx, &pnr, passenger_name, &flight, price).await? {
                Some(b) => {
                    booked = Some(b);
                    break;
                }
                None => info!(%pnr, "PNR collision, regenerating"),
            }
        }
        let booking = booked.ok_or(BookingError::PnrExhausted)?;

        tx.commit().await?;

        info!(
            pnr = %booking.pnr,
            flight_id,
            amount_paid_cents = booking.amount_paid_cents,
            "booking confirmed"
        );

        Ok(BookingConfirmation { booking })
    }

    /// Idempotent one-way status flip. No refund.
    pub async fn cancel(&self, pnr: &str) -> Result<Booking, BookingError> {
        let cancelled = BookingRepository::cancel(&self.pool, pnr)
            .await?
            .ok_or_else(|| BookingError::BookingNotFound(pnr.to_string()))?;

        info!(pnr = %cancelled.pnr, "booking cancelled");
        Ok(cancelled)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(passenger_name: &str, flight_id: &str) -> BookingRequest {
        BookingRequest {
            passenger_name: passenger_name.to_string(),
            flight_id: flight_id.to_string(),
            contact_email: None,
        }
    }

    #[test]
    fn rejects_blank_passenger_name() {
        let err = validated_fields(&request("   ", "FL101")).unwrap_err();
        assert!(matches!(err, BookingError::InvalidRequest("passenger_name")));
    }

    #[test]
    fn rejects_missing_flight_id() {
        let err = validated_fields(&request("Asha Rao", "")).unwrap_err();
        assert!(matches!(err, BookingError::InvalidRequest("flight_id")));
    }

    #[test]
    fn trims_accepted_fields() {
        let req = request("  Asha Rao  ", " FL101 ");
        let (name, flight) = validated_fields(&req).unwrap();
        assert_eq!(name, "Asha Rao");
        assert_eq!(flight, "FL101");
    }

    #[test]
    fn missing_body_fields_deserialize_to_empty() {
        let req: BookingRequest = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            validated_fields(&req),
            Err(BookingError::InvalidRequest("passenger_name"))
        ));
    }
}
