use alloy::primitives::{Address, address};
use serde::Deserialize;
use serde_with::serde_as;
use std::time;

#[serde_as]
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct IndexerSettings {
    pub rpc_url: String,

    /// Tag stored on every record and used as the checkpoint id.
    pub network: String,

    #[serde(default = "default_entry_point")]
    pub entry_point: Address,

    /// First block to index when no checkpoint exists yet.
    #[serde(default)]
    pub start_block: u64,

    #[serde(default = "default_block_range")]
    pub block_range: u64,

    #[serde(default = "default_polling_interval")]
    #[serde_as(as = "serde_with::DurationSeconds<u64>")]
    pub polling_interval: time::Duration,

    #[serde(default = "default_restart_delay")]
    #[serde_as(as = "serde_with::DurationSeconds<u64>")]
    pub restart_delay: time::Duration,
}

impl IndexerSettings {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.block_range == 0 {
            anyhow::bail!("block_range must be greater than zero");
        }
        if self.network.is_empty() {
            anyhow::bail!("network must not be empty");
        }
        Ok(())
    }
}

fn default_entry_point() -> Address {
    address!("0x5FF137D4b0FDCD49DcA30c7CF57E578a026d2789")
}

fn default_block_range() -> u64 {
    1000
}

fn default_polling_interval() -> time::Duration {
    time::Duration::from_secs(6)
}

fn default_restart_delay() -> time::Duration {
    time::Duration::from_secs(60)
}

impl Default for IndexerSettings {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:8545".to_string(),
            network: "mainnet".to_string(),
            entry_point: default_entry_point(),
            start_block: 0,
            block_range: default_block_range(),
            polling_interval: default_polling_interval(),
            restart_delay: default_restart_delay(),
        }
    }
}
