use crate::indexer::feed::ChainClient;
use alloy::{
    primitives::{B256, Bytes},
    rpc::types::{Filter, Log},
};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::{collections::HashMap, sync::Arc};

/// In-memory chain with a controllable head.
#[derive(Clone, Default)]
pub struct MockChainClient {
    head: Arc<RwLock<u64>>,
    should_fail: Arc<RwLock<bool>>,
    logs: Arc<RwLock<Vec<Log>>>,
    inputs: Arc<RwLock<HashMap<B256, Bytes>>>,
    timestamps: Arc<RwLock<HashMap<u64, u64>>>,
    input_requests: Arc<RwLock<usize>>,
}

impl MockChainClient {
    pub fn new(head: u64) -> Self {
        let client = Self::default();
        client.set_head(head);
        client
    }

    pub fn set_head(&self, head: u64) {
        *self.head.write() = head;
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write() = fail;
    }

    pub fn add_log(&self, log: Log) {
        self.logs.write().push(log);
    }

    pub fn set_input(&self, hash: B256, input: Bytes) {
        self.inputs.write().insert(hash, input);
    }

    pub fn set_timestamp(&self, block_number: u64, timestamp: u64) {
        self.timestamps.write().insert(block_number, timestamp);
    }

    pub fn input_requests(&self) -> usize {
        *self.input_requests.read()
    }

    fn check(&self) -> anyhow::Result<()> {
        if *self.should_fail.read() {
            anyhow::bail!("mock chain client configured to fail");
        }
        Ok(())
    }
}

#[async_trait]
impl ChainClient for MockChainClient {
    async fn latest_block(&self) -> anyhow::Result<u64> {
        self.check()?;
        Ok(*self.head.read())
    }

    async fn logs(&self, filter: &Filter) -> anyhow::Result<Vec<Log>> {
        self.check()?;
        let from = filter.get_from_block().unwrap_or(0);
        let to = filter.get_to_block().unwrap_or(u64::MAX);
        Ok(self
            .logs
            .read()
            .iter()
            .filter(|log| {
                log.block_number
                    .is_some_and(|number| (from..=to).contains(&number))
            })
            .cloned()
            .collect())
    }

    async fn transaction_input(&self, hash: B256) -> anyhow::Result<Bytes> {
        self.check()?;
        *self.input_requests.write() += 1;
        self.inputs
            .read()
            .get(&hash)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("transaction {hash} not found"))
    }

    async fn block_timestamp(&self, number: u64) -> anyhow::Result<u64> {
        self.check()?;
        self.timestamps
            .read()
            .get(&number)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("block {number} not found"))
    }
}
