use crate::{
    indexer::{abi::IEntryPoint, settings::IndexerSettings},
    types::event::{EntryPointEvent, EventContext, IndexedEvent},
};
use alloy::{
    consensus::Transaction as _,
    network::Ethereum,
    primitives::{Address, B256, Bytes},
    providers::{DynProvider, Provider},
    rpc::types::{Filter, Log},
    sol_types::SolEvent,
};
use anyhow::Context;
use async_trait::async_trait;
use futures::Stream;
use std::{collections::HashMap, time::Duration};

/// Chain access needed to build indexed events.
#[async_trait]
pub trait ChainClient: Send + Sync {
    async fn latest_block(&self) -> anyhow::Result<u64>;

    async fn logs(&self, filter: &Filter) -> anyhow::Result<Vec<Log>>;

    async fn transaction_input(&self, hash: B256) -> anyhow::Result<Bytes>;

    async fn block_timestamp(&self, number: u64) -> anyhow::Result<u64>;
}

#[async_trait]
impl ChainClient for DynProvider<Ethereum> {
    async fn latest_block(&self) -> anyhow::Result<u64> {
        Ok(self.get_block_number().await?)
    }

    async fn logs(&self, filter: &Filter) -> anyhow::Result<Vec<Log>> {
        Ok(self.get_logs(filter).await?)
    }

    async fn transaction_input(&self, hash: B256) -> anyhow::Result<Bytes> {
        let tx = self
            .get_transaction_by_hash(hash)
            .await?
            .with_context(|| format!("transaction {hash} not found"))?;
        Ok(tx.input().clone())
    }

    async fn block_timestamp(&self, number: u64) -> anyhow::Result<u64> {
        let block = self
            .get_block_by_number(number.into())
            .await?
            .with_context(|| format!("block {number} not found"))?;
        Ok(block.header.timestamp)
    }
}

/// Events of one polled block range, ordered by block and log index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogBatch {
    pub from_block: u64,
    pub to_block: u64,
    pub events: Vec<IndexedEvent>,
}

fn event_signatures() -> Vec<B256> {
    vec![
        IEntryPoint::UserOperationEvent::SIGNATURE_HASH,
        IEntryPoint::UserOperationRevertReason::SIGNATURE_HASH,
        IEntryPoint::AccountDeployed::SIGNATURE_HASH,
        IEntryPoint::Deposited::SIGNATURE_HASH,
        IEntryPoint::SignatureAggregatorChanged::SIGNATURE_HASH,
        IEntryPoint::StakeLocked::SIGNATURE_HASH,
        IEntryPoint::StakeUnlocked::SIGNATURE_HASH,
        IEntryPoint::StakeWithdrawn::SIGNATURE_HASH,
        IEntryPoint::Withdrawn::SIGNATURE_HASH,
    ]
}

pub struct LogFeed<C> {
    client: C,
    entry_point: Address,
    network: String,
    block_range: u64,
    polling_interval: Duration,
}

impl<C: ChainClient> LogFeed<C> {
    pub fn new(client: C, settings: &IndexerSettings) -> Self {
        Self {
            client,
            entry_point: settings.entry_point,
            network: settings.network.clone(),
            block_range: settings.block_range.max(1),
            polling_interval: settings.polling_interval,
        }
    }

    fn filter(&self, from_block: u64, to_block: u64) -> Filter {
        Filter::new()
            .address(self.entry_point)
            .event_signature(event_signatures())
            .from_block(from_block)
            .to_block(to_block)
    }

    /// Fetches and decodes all entry-point events in `[from_block, to_block]`.
    pub async fn fetch_batch(&self, from_block: u64, to_block: u64) -> anyhow::Result<LogBatch> {
        let mut logs = self
            .client
            .logs(&self.filter(from_block, to_block))
            .await
            .context("fetching entry point logs")?;
        logs.retain(|log| !log.removed);
        logs.sort_by_key(|log| (log.block_number, log.log_index));

        let mut inputs: HashMap<B256, Bytes> = HashMap::new();
        let mut timestamps: HashMap<u64, u64> = HashMap::new();
        let mut events = Vec::with_capacity(logs.len());
        for log in logs {
            let Some(event) = EntryPointEvent::from_log(&log).context("decoding log")? else {
                tracing::trace!(topic = ?log.topic0(), "skipping unknown log");
                continue;
            };

            let transaction_hash = log
                .transaction_hash
                .context("log without transaction hash")?;
            let block_number = log.block_number.context("log without block number")?;
            let log_index = log.log_index.context("log without log index")?;
            let log_index = u32::try_from(log_index).context("log index out of range")?;

            let transaction_input = match inputs.get(&transaction_hash) {
                Some(input) => input.clone(),
                None => {
                    let input = self.client.transaction_input(transaction_hash).await?;
                    inputs.insert(transaction_hash, input.clone());
                    input
                }
            };
            let cached = log
                .block_timestamp
                .or_else(|| timestamps.get(&block_number).copied());
            let block_timestamp = match cached {
                Some(timestamp) => timestamp,
                None => {
                    let timestamp = self.client.block_timestamp(block_number).await?;
                    timestamps.insert(block_number, timestamp);
                    timestamp
                }
            };

            events.push(IndexedEvent {
                event,
                context: EventContext {
                    transaction_hash,
                    transaction_input,
                    log_index,
                    block_number,
                    block_timestamp,
                    network: self.network.clone(),
                },
            });
        }

        Ok(LogBatch {
            from_block,
            to_block,
            events,
        })
    }

    /// Endless stream of consecutive batches starting at `from_block`.
    pub fn stream(&self, from_block: u64) -> impl Stream<Item = anyhow::Result<LogBatch>> + '_ {
        async_stream::try_stream! {
            let mut cursor = from_block;
            loop {
                let head = self.client.latest_block().await.context("fetching latest block")?;
                if cursor > head {
                    tracing::debug!(cursor, head, "caught up with chain head");
                    tokio::time::sleep(self.polling_interval).await;
                    continue;
                }
                let to_block = head.min(cursor.saturating_add(self.block_range - 1));
                let batch = self.fetch_batch(cursor, to_block).await?;
                cursor = to_block + 1;
                yield batch;
            }
        }
    }
}
