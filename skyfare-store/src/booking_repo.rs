use chrono::{DateTime, Utc};
use skyfare_core::model::{Booking, BookingStatus, Flight};
use sqlx::{PgConnection, PgPool};

const COLUMNS: &str = "id, pnr, passenger_name, flight_id, amount_paid_cents, booking_time, \
                       departure_city, arrival_city, airline, status";

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: i64,
    pnr: String,
    passenger_name: String,
    flight_id: String,
    amount_paid_cents: i64,
    booking_time: DateTime<Utc>,
    departure_city: Option<String>,
    arrival_city: Option<String>,
    airline: Option<String>,
    status: String,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: row.id,
            pnr: row.pnr,
            passenger_name: row.passenger_name,
            flight_id: row.flight_id,
            amount_paid_cents: row.amount_paid_cents,
            booking_time: row.booking_time,
            departure_city: row.departure_city,
            arrival_city: row.arrival_city,
            airline: row.airline,
            status: BookingStatus::parse(&row.status).unwrap_or(BookingStatus::Confirmed),
        }
    }
}

pub struct BookingRepository;

impl BookingRepository {
    /// Insert a CONFIRMED booking with route/airline snapshotted from the
    /// flight. Returns None when the PNR collided with an existing row:
    /// ON CONFLICT keeps the surrounding transaction usable, so the caller
    /// can regenerate and retry without starting over.
    pub async fn insert(
        conn: &mut PgConnection,
        pnr: &str,
        passenger_name: &str,
        flight: &Flight,
        amount_paid_cents: i64,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let row: Option<BookingRow> = sqlx::query_as(&format!(
            "INSERT INTO bookings \
                 (pnr, passenger_name, flight_id, amount_paid_cents, \
                  departure_city, arrival_city, airline, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             ON CONFLICT (pnr) DO NOTHING \
             RETURNING {COLUMNS}"
        ))
        .bind(pnr)
        .bind(passenger_name)
        .bind(&flight.flight_id)
        .bind(amount_paid_cents)
        .bind(&flight.departure_city)
        .bind(&flight.arrival_city)
        .bind(&flight.airline)
        .bind(BookingStatus::Confirmed.as_str())
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row.map(Booking::from))
    }

    /// Newest-first history. Full scan is fine at this scale.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Booking>, sqlx::Error> {
        let rows: Vec<BookingRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM bookings ORDER BY booking_time DESC, id DESC"
        ))
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }

    pub async fn find_by_pnr(pool: &PgPool, pnr: &str) -> Result<Option<Booking>, sqlx::Error> {
        let row: Option<BookingRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM bookings WHERE pnr = $1"))
                .bind(pnr)
                .fetch_optional(pool)
                .await?;

        Ok(row.map(Booking::from))
    }

    /// One-way CONFIRMED -> CANCELLED flip. Idempotent: re-cancelling
    /// rewrites the same status. None when the PNR is unknown.
    pub async fn cancel(pool: &PgPool, pnr: &str) -> Result<Option<Booking>, sqlx::Error> {
        let row: Option<BookingRow> = sqlx::query_as(&format!(
            "UPDATE bookings SET status = $1 WHERE pnr = $2 RETURNING {COLUMNS}"
        ))
        .bind(BookingStatus::Cancelled.as_str())
        .bind(pnr)
        .fetch_optional(pool)
        .await?;

        Ok(row.map(Booking::from))
    }
}
