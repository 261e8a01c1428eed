use crate::Settings;
use alloy::{
    providers::{Provider, ProviderBuilder},
    transports::http::reqwest::Url,
};
use anyhow::Context;
use entrypoint_indexer_logic::{EntryPointIndexer, LogFeed, Store};
use std::sync::Arc;
use tokio::time::sleep;

/// Runs the indexer forever, restarting it after `restart_delay` whenever it
/// stops. Each restart resumes from the stored checkpoint.
pub async fn run(settings: Settings, store: Arc<dyn Store>) -> Result<(), anyhow::Error> {
    let settings = settings.indexer;
    let url: Url = settings
        .rpc_url
        .parse()
        .with_context(|| format!("invalid rpc url: {}", settings.rpc_url))?;
    let client = ProviderBuilder::new().connect_http(url).erased();
    let feed = LogFeed::new(client, &settings);
    let indexer = EntryPointIndexer::new(store, settings.network.clone(), settings.start_block);
    let delay = settings.restart_delay;

    loop {
        match indexer.start(&feed).await {
            Err(err) => {
                tracing::error!(error = ?err, ?delay, "indexer failed, restarting");
            }
            Ok(_) => {
                tracing::error!(?delay, "indexer stream ended unexpectedly, restarting");
            }
        }
        sleep(delay).await;
    }
}
