use chrono::NaiveTime;
use skyfare_core::model::Flight;
use sqlx::{PgConnection, PgPool};

/// Page size for the public flight listing.
pub const SEARCH_PAGE_SIZE: i64 = 10;

const COLUMNS: &str = "flight_id, airline, flight_no, departure_city, arrival_city, \
                       departure_time, arrival_time, duration, base_price_cents";

#[derive(sqlx::FromRow)]
struct FlightRow {
    flight_id: String,
    airline: String,
    flight_no: Option<String>,
    departure_city: String,
    arrival_city: String,
    departure_time: Option<NaiveTime>,
    arrival_time: Option<NaiveTime>,
    duration: Option<String>,
    base_price_cents: i64,
}

impl From<FlightRow> for Flight {
    fn from(row: FlightRow) -> Self {
        Flight {
            flight_id: row.flight_id,
            airline: row.airline,
            flight_no: row.flight_no,
            departure_city: row.departure_city,
            arrival_city: row.arrival_city,
            departure_time: row.departure_time,
            arrival_time: row.arrival_time,
            duration: row.duration,
            base_price_cents: row.base_price_cents,
        }
    }
}

pub struct FlightRepository;

impl FlightRepository {
    /// Substring search over departure/arrival city, paged.
    pub async fn search(
        pool: &PgPool,
        from: &str,
        to: &str,
        page: i64,
    ) -> Result<Vec<Flight>, sqlx::Error> {
        let offset = (page.max(1) - 1) * SEARCH_PAGE_SIZE;

        let rows: Vec<FlightRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM flights \
             WHERE departure_city ILIKE '%' || $1 || '%' \
               AND arrival_city ILIKE '%' || $2 || '%' \
             ORDER BY departure_time, flight_id \
             LIMIT $3 OFFSET $4"
        ))
        .bind(from)
        .bind(to)
        .bind(SEARCH_PAGE_SIZE)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(Flight::from).collect())
    }

    pub async fn get(pool: &PgPool, flight_id: &str) -> Result<Option<Flight>, sqlx::Error> {
        let row: Option<FlightRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM flights WHERE flight_id = $1"))
                .bind(flight_id)
                .fetch_optional(pool)
                .await?;

        Ok(row.map(Flight::from))
    }

    /// Base fare only. Hot path inside the pricer.
    pub async fn base_price(
        conn: &mut PgConnection,
        flight_id: &str,
    ) -> Result<Option<i64>, sqlx::Error> {
        let row: Option<(i64,)> =
            sqlx::query_as("SELECT base_price_cents FROM flights WHERE flight_id = $1")
                .bind(flight_id)
                .fetch_optional(&mut *conn)
                .await?;

        Ok(row.map(|r| r.0))
    }

    /// Route/airline snapshot read inside the booking transaction.
    pub async fn snapshot(
        conn: &mut PgConnection,
        flight_id: &str,
    ) -> Result<Option<Flight>, sqlx::Error> {
        let row: Option<FlightRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM flights WHERE flight_id = $1"))
                .bind(flight_id)
                .fetch_optional(&mut *conn)
                .await?;

        Ok(row.map(Flight::from))
    }
}
