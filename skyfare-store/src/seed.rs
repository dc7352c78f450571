use sqlx::PgPool;
use tracing::info;

use crate::wallet_repo::WALLET_ID;

/// Opening balance for a freshly seeded wallet, in cents.
pub const SEED_WALLET_BALANCE_CENTS: i64 = 5_000_000;

// flight_id, airline, flight_no, from, to, departure, arrival, duration, base fare (cents)
const CATALOG: &[(&str, &str, &str, &str, &str, &str, &str, &str, i64)] = &[
    ("FL101", "IndiGo", "6E101", "Delhi", "Mumbai", "07:00:00", "09:05:00", "2h05m", 200_000),
    ("FL102", "Air India", "AI102", "Delhi", "Mumbai", "08:15:00", "10:30:00", "2h15m", 210_000),
    ("FL103", "Vistara", "UK103", "Delhi", "Mumbai", "09:00:00", "11:05:00", "2h05m", 220_000),
    ("FL104", "SpiceJet", "SG104", "Delhi", "Mumbai", "10:00:00", "12:05:00", "2h05m", 230_000),
    ("FL105", "Akasa", "QP105", "Delhi", "Mumbai", "11:00:00", "13:05:00", "2h05m", 240_000),
    ("FL106", "GoAir", "G8106", "Delhi", "Mumbai", "12:00:00", "14:05:00", "2h05m", 250_000),
    ("FL107", "IndiGo", "6E107", "Delhi", "Kolkata", "07:30:00", "09:50:00", "2h20m", 260_000),
    ("FL108", "SpiceJet", "SG108", "Delhi", "Kolkata", "19:30:00", "21:55:00", "2h25m", 270_000),
    ("FL109", "Vistara", "UK109", "Mumbai", "Bangalore", "06:00:00", "07:30:00", "1h30m", 280_000),
    ("FL110", "Air India", "AI110", "Mumbai", "Bangalore", "14:00:00", "15:30:00", "1h30m", 290_000),
];

/// Idempotent catalog and wallet seeding. Flight rows are upserted; an
/// existing wallet balance is left untouched.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    for f in CATALOG {
        sqlx::query(
            "INSERT INTO flights \
                 (flight_id, airline, flight_no, departure_city, arrival_city, \
                  departure_time, arrival_time, duration, base_price_cents) \
             VALUES ($1, $2, $3, $4, $5, $6::time, $7::time, $8, $9) \
             ON CONFLICT (flight_id) DO UPDATE SET \
                 airline = EXCLUDED.airline, \
                 flight_no = EXCLUDED.flight_no, \
                 departure_city = EXCLUDED.departure_city, \
                 arrival_city = EXCLUDED.arrival_city, \
                 departure_time = EXCLUDED.departure_time, \
                 arrival_time = EXCLUDED.arrival_time, \
                 duration = EXCLUDED.duration, \
                 base_price_cents = EXCLUDED.base_price_cents",
        )
        .bind(f.0)
        .bind(f.1)
        .bind(f.2)
        .bind(f.3)
        .bind(f.4)
        .bind(f.5)
        .bind(f.6)
        .bind(f.7)
        .bind(f.8)
        .execute(pool)
        .await?;
    }

    sqlx::query("INSERT INTO wallet (id, balance_cents) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING")
        .bind(WALLET_ID)
        .bind(SEED_WALLET_BALANCE_CENTS)
        .execute(pool)
        .await?;

    info!(flights = CATALOG.len(), "Catalog and wallet seeding completed");
    Ok(())
}
