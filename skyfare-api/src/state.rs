use skyfare_booking::{BookingCoordinator, SurgePricer};
use skyfare_core::notify::{EmailNotifier, TicketRenderer};
use skyfare_store::DbClient;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DbClient>,
    pub pricer: SurgePricer,
    pub coordinator: Arc<BookingCoordinator>,
    pub ticket_renderer: Arc<dyn TicketRenderer>,
    pub email_notifier: Arc<dyn EmailNotifier>,
}
