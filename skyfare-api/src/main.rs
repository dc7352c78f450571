use std::net::SocketAddr;
use std::sync::Arc;

use skyfare_api::notify::{FileTicketRenderer, LogEmailNotifier};
use skyfare_api::{app, AppState};
use skyfare_booking::{BookingCoordinator, SurgePricer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "skyfare_api=debug,skyfare_booking=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = skyfare_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Skyfare API on port {}", config.server.port);

    let db = skyfare_store::DbClient::new(&config.database.url)
        .await
        .expect("Failed to connect to Postgres");
    db.migrate().await.expect("Failed to run migrations");
    let db = Arc::new(db);

    let pricer = SurgePricer::new(config.surge.clone());
    let coordinator = Arc::new(BookingCoordinator::new(db.pool.clone(), pricer.clone()));

    let state = AppState {
        db,
        pricer,
        coordinator,
        ticket_renderer: Arc::new(FileTicketRenderer::new(config.notify.ticket_dir.clone())),
        email_notifier: Arc::new(LogEmailNotifier),
    };

    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
