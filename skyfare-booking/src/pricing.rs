use skyfare_core::SurgePolicy;
use skyfare_store::attempt_repo::AttemptRepository;
use skyfare_store::flight_repo::FlightRepository;
use sqlx::PgPool;
use tracing::debug;

use crate::error::BookingError;

/// Demand-sensitive fare computation over the append-only attempt log.
/// Price is derived at call time from the base fare and the windowed
/// attempt count; nothing price-shaped is ever written to the flight row,
/// so concurrent searchers and bookers never race on a shared price field.
#[derive(Clone)]
pub struct SurgePricer {
    policy: SurgePolicy,
}

impl SurgePricer {
    pub fn new(policy: SurgePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &SurgePolicy {
        &self.policy
    }

    /// Quote without recording demand. Search and listing path.
    pub async fn quote(&self, pool: &PgPool, flight_id: &str) -> Result<i64, BookingError> {
        let mut conn = pool.acquire().await?;

        let base = FlightRepository::base_price(&mut conn, flight_id)
            .await?
            .ok_or_else(|| BookingError::FlightNotFound(flight_id.to_string()))?;
        let attempts =
            AttemptRepository::count_in_window(&mut conn, flight_id, self.policy.window_seconds)
                .await?;

        Ok(self.policy.effective_price(base, attempts))
    }

    /// Quote for the booking path: records the attempt and counts it toward
    /// its own trigger. Insert and count share one short transaction,
    /// committed before the booking transaction begins, so the demand
    /// signal survives a booking that later fails.
    pub async fn quote_and_record(
        &self,
        pool: &PgPool,
        flight_id: &str,
    ) -> Result<i64, BookingError> {
        let mut tx = pool.begin().await?;

        let base = FlightRepository::base_price(&mut tx, flight_id)
            .await?
            .ok_or_else(|| BookingError::FlightNotFound(flight_id.to_string()))?;
        AttemptRepository::record(&mut tx, flight_id).await?;
        let attempts =
            AttemptRepository::count_in_window(&mut tx, flight_id, self.policy.window_seconds)
                .await?;

        tx.commit().await?;

        let price = self.policy.effective_price(base, attempts);
        debug!(flight_id, attempts, price_cents = price, "priced booking attempt");
        Ok(price)
    }
}
