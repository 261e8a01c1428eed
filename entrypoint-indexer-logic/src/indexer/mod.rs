pub mod abi;
mod correlator;
mod decoder;
pub mod feed;
mod matcher;
pub mod settings;

use crate::{
    error::IndexerError,
    repository::{self, checkpoint},
    store::Store,
    types::{
        event::{EntryPointEvent, IndexedEvent},
        log_records,
    },
};
use anyhow::Context;
use feed::{ChainClient, LogBatch, LogFeed};
use futures::{Stream, StreamExt, pin_mut};
use std::sync::Arc;
use tracing::instrument;

pub struct EntryPointIndexer {
    store: Arc<dyn Store>,
    network: String,
    start_block: u64,
}

impl EntryPointIndexer {
    pub fn new(store: Arc<dyn Store>, network: impl Into<String>, start_block: u64) -> Self {
        Self {
            store,
            network: network.into(),
            start_block,
        }
    }

    /// Block to continue from: one past the checkpoint, or the configured
    /// start block on a fresh store.
    pub async fn resume_block(&self) -> Result<u64, IndexerError> {
        let last = checkpoint::last_processed_block(self.store.as_ref(), &self.network).await?;
        Ok(last.map_or(self.start_block, |block| block + 1))
    }

    /// Applies a single event. Events must be fed in chain order.
    #[instrument(
        name = "handle_event",
        skip_all,
        level = "debug",
        fields(
            kind = event.event.name(),
            tx_hash = %event.context.transaction_hash,
            block_number = event.context.block_number,
        ),
    )]
    pub async fn handle_event(&self, event: &IndexedEvent) -> Result<(), IndexerError> {
        let store = self.store.as_ref();
        let context = &event.context;
        match &event.event {
            EntryPointEvent::UserOperation(e) => {
                correlator::handle_user_operation_event(store, e, context).await
            }
            EntryPointEvent::UserOperationRevertReason(e) => {
                correlator::handle_user_operation_revert_reason(store, e, context).await
            }
            EntryPointEvent::AccountDeployed(e) => {
                let record = log_records::AccountDeployed::new(e, context);
                Ok(repository::save(store, &record).await?)
            }
            EntryPointEvent::Deposited(e) => {
                let record = log_records::Deposited::new(e, context);
                Ok(repository::save(store, &record).await?)
            }
            EntryPointEvent::SignatureAggregatorChanged(e) => {
                let record = log_records::SignatureAggregatorChanged::new(e, context);
                Ok(repository::save(store, &record).await?)
            }
            EntryPointEvent::StakeLocked(e) => {
                let record = log_records::StakeLocked::new(e, context);
                Ok(repository::save(store, &record).await?)
            }
            EntryPointEvent::StakeUnlocked(e) => {
                let record = log_records::StakeUnlocked::new(e, context);
                Ok(repository::save(store, &record).await?)
            }
            EntryPointEvent::StakeWithdrawn(e) => {
                let record = log_records::StakeWithdrawn::new(e, context);
                Ok(repository::save(store, &record).await?)
            }
            EntryPointEvent::Withdrawn(e) => {
                let record = log_records::Withdrawn::new(e, context);
                Ok(repository::save(store, &record).await?)
            }
        }
    }

    /// Applies every event of the batch in order, then moves the checkpoint
    /// to the end of the batch range.
    #[instrument(
        name = "process_batch",
        skip_all,
        level = "info",
        fields(from_block = batch.from_block, to_block = batch.to_block),
    )]
    pub async fn process_batch(&self, batch: &LogBatch) -> Result<(), IndexerError> {
        for event in &batch.events {
            self.handle_event(event).await?;
        }
        checkpoint::set_last_processed_block(self.store.as_ref(), &self.network, batch.to_block)
            .await?;
        tracing::info!(events = batch.events.len(), "processed block range");
        Ok(())
    }

    /// Consumes batches until the stream ends or an error occurs.
    pub async fn run<S>(&self, batches: S) -> anyhow::Result<()>
    where
        S: Stream<Item = anyhow::Result<LogBatch>>,
    {
        pin_mut!(batches);
        while let Some(batch) = batches.next().await {
            let batch = batch?;
            self.process_batch(&batch).await.with_context(|| {
                format!(
                    "processing blocks {}..={}",
                    batch.from_block, batch.to_block
                )
            })?;
        }
        Ok(())
    }

    #[instrument(name = "indexer", skip_all, level = "info", fields(network = %self.network))]
    pub async fn start<C: ChainClient>(&self, feed: &LogFeed<C>) -> anyhow::Result<()> {
        let from_block = self.resume_block().await?;
        tracing::info!(from_block, "starting entry point indexer");
        self.run(feed.stream(from_block)).await
    }
}
