use anyhow::Context;
use blockscout_service_launcher::{database, launcher::ConfigSettings};
use entrypoint_indexer_logic::{DatabaseStore, MemoryStore, Store};
use entrypoint_indexer_server::{Settings, run_indexer};
use migration::Migrator;
use std::sync::Arc;

const SERVICE_NAME: &str = "entrypoint_indexer";

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let settings = Settings::build().context("failed to read config")?;

    blockscout_service_launcher::tracing::init_logs(
        SERVICE_NAME,
        &settings.tracing,
        &settings.jaeger,
    )?;

    let store: Arc<dyn Store> = match settings.database.clone() {
        Some(database_settings) => {
            let db_connection = database::initialize_postgres::<Migrator>(&database_settings).await?;
            Arc::new(DatabaseStore::new(Arc::new(db_connection)))
        }
        None => {
            tracing::warn!("no database configured, records are kept in memory only");
            Arc::new(MemoryStore::new())
        }
    };

    run_indexer(settings, store).await
}
