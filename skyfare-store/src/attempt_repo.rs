use sqlx::PgConnection;

/// Append-only demand log. Rows are never updated or deleted; the surge
/// decision is a windowed count evaluated at call time.
pub struct AttemptRepository;

impl AttemptRepository {
    /// Append one attempt for this flight, stamped now().
    pub async fn record(conn: &mut PgConnection, flight_id: &str) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO pricing_attempts (flight_id) VALUES ($1)")
            .bind(flight_id)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }

    /// Attempts for this flight inside the trailing window. Concurrent
    /// inserts for other flights never contend; same-flight phantoms are
    /// tolerated.
    pub async fn count_in_window(
        conn: &mut PgConnection,
        flight_id: &str,
        window_seconds: i64,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM pricing_attempts \
             WHERE flight_id = $1 AND attempt_time > now() - make_interval(secs => $2)",
        )
        .bind(flight_id)
        .bind(window_seconds as f64)
        .fetch_one(&mut *conn)
        .await?;

        Ok(count)
    }
}
