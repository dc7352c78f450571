use sqlx::{PgConnection, PgPool};

/// The one shared wallet row.
pub const WALLET_ID: i64 = 1;

pub struct WalletRepository;

impl WalletRepository {
    /// Plain read for the wallet endpoint. No lock.
    pub async fn balance(pool: &PgPool) -> Result<Option<i64>, sqlx::Error> {
        let row: Option<(i64,)> =
            sqlx::query_as("SELECT balance_cents FROM wallet WHERE id = $1")
                .bind(WALLET_ID)
                .fetch_optional(pool)
                .await?;

        Ok(row.map(|r| r.0))
    }

    /// Row-locked read. Must run inside an open transaction; the lock is
    /// held until that transaction commits or rolls back, which is the sole
    /// mutual-exclusion point between concurrent bookings.
    pub async fn balance_for_update(conn: &mut PgConnection) -> Result<Option<i64>, sqlx::Error> {
        let row: Option<(i64,)> =
            sqlx::query_as("SELECT balance_cents FROM wallet WHERE id = $1 FOR UPDATE")
                .bind(WALLET_ID)
                .fetch_optional(&mut *conn)
                .await?;

        Ok(row.map(|r| r.0))
    }

    /// Subtract under the caller's transaction. Callers check sufficiency
    /// first, under the same lock.
    pub async fn debit(conn: &mut PgConnection, amount_cents: i64) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE wallet SET balance_cents = balance_cents - $1 WHERE id = $2")
            .bind(amount_cents)
            .bind(WALLET_ID)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }
}
