use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything the ticket artifact needs, snapshotted at commit time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketDocument {
    pub pnr: String,
    pub passenger_name: String,
    pub airline: String,
    pub flight_id: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub amount_paid_cents: i64,
    pub booking_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Produces a retrievable ticket artifact keyed by PNR. Runs after commit;
/// failures are logged by the caller and never reach the booking response.
#[async_trait]
pub trait TicketRenderer: Send + Sync {
    async fn render(
        &self,
        ticket: &TicketDocument,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}

/// Best-effort outbound mail.
#[async_trait]
pub trait EmailNotifier: Send + Sync {
    async fn send(
        &self,
        message: &EmailMessage,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
