use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = skyfare_store::app_config::Config::load().expect("Failed to load config");
    let db = skyfare_store::DbClient::new(&config.database.url)
        .await
        .expect("Failed to connect to Postgres");

    db.migrate().await.expect("Failed to run migrations");
    skyfare_store::seed::run(&db.pool).await.expect("Seeding failed");
}
