use async_trait::async_trait;
use skyfare_core::money;
use skyfare_core::notify::{EmailMessage, EmailNotifier, TicketDocument, TicketRenderer};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Writes a plain-text ticket artifact to `<dir>/<pnr>.txt`.
pub struct FileTicketRenderer {
    dir: PathBuf,
}

impl FileTicketRenderer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl TicketRenderer for FileTicketRenderer {
    async fn render(
        &self,
        ticket: &TicketDocument,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(format!("{}.txt", ticket.pnr));

        let contents = format!(
            "Flight Ticket\n\n\
             Passenger Name: {}\n\
             Airline: {}\n\
             Flight ID: {}\n\
             Route: {} -> {}\n\
             Amount Paid: {}\n\
             PNR: {}\n\
             Booking Time: {}\n",
            ticket.passenger_name,
            ticket.airline,
            ticket.flight_id,
            ticket.departure_city,
            ticket.arrival_city,
            money::format_cents(ticket.amount_paid_cents),
            ticket.pnr,
            ticket.booking_time.to_rfc3339(),
        );

        tokio::fs::write(&path, contents).await?;
        Ok(path.to_string_lossy().into_owned())
    }
}

/// Stand-in delivery channel: logs the message instead of sending it.
pub struct LogEmailNotifier;

#[async_trait]
impl EmailNotifier for LogEmailNotifier {
    async fn send(
        &self,
        message: &EmailMessage,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        info!(
            recipient = %message.recipient,
            subject = %message.subject,
            "email dispatched"
        );
        Ok(())
    }
}

/// Fire-and-forget side effects for a committed booking. Failures are
/// logged and never re-enter the transaction or the response path.
pub fn spawn_post_commit(
    renderer: Arc<dyn TicketRenderer>,
    notifier: Arc<dyn EmailNotifier>,
    ticket: TicketDocument,
    contact_email: Option<String>,
) {
    tokio::spawn(async move {
        match renderer.render(&ticket).await {
            Ok(artifact) => info!(pnr = %ticket.pnr, artifact, "ticket rendered"),
            Err(e) => warn!(pnr = %ticket.pnr, error = %e, "ticket rendering failed"),
        }

        if let Some(recipient) = contact_email {
            let message = EmailMessage {
                recipient,
                subject: format!("Booking confirmed: {}", ticket.pnr),
                body: format!(
                    "Your booking {} for flight {} is confirmed. Amount paid: {}.",
                    ticket.pnr,
                    ticket.flight_id,
                    money::format_cents(ticket.amount_paid_cents)
                ),
            };
            if let Err(e) = notifier.send(&message).await {
                warn!(pnr = %ticket.pnr, error = %e, "email notification failed");
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn ticket() -> TicketDocument {
        TicketDocument {
            pnr: "PNR-TEST01".to_string(),
            passenger_name: "Asha Rao".to_string(),
            airline: "IndiGo".to_string(),
            flight_id: "FL101".to_string(),
            departure_city: "Delhi".to_string(),
            arrival_city: "Mumbai".to_string(),
            amount_paid_cents: 200_000,
            booking_time: Utc::now(),
        }
    }

    #[tokio::test]
    async fn renders_ticket_keyed_by_pnr() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = FileTicketRenderer::new(dir.path());

        let artifact = renderer.render(&ticket()).await.unwrap();
        assert!(artifact.ends_with("PNR-TEST01.txt"));

        let contents = tokio::fs::read_to_string(dir.path().join("PNR-TEST01.txt"))
            .await
            .unwrap();
        assert!(contents.contains("Passenger Name: Asha Rao"));
        assert!(contents.contains("Route: Delhi -> Mumbai"));
        assert!(contents.contains("Amount Paid: 2000.00"));
        assert!(contents.contains("PNR: PNR-TEST01"));
    }

    #[tokio::test]
    async fn rerender_overwrites_existing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = FileTicketRenderer::new(dir.path());

        renderer.render(&ticket()).await.unwrap();
        let mut updated = ticket();
        updated.passenger_name = "Ravi Iyer".to_string();
        renderer.render(&updated).await.unwrap();

        let contents = tokio::fs::read_to_string(dir.path().join("PNR-TEST01.txt"))
            .await
            .unwrap();
        assert!(contents.contains("Ravi Iyer"));
    }
}
