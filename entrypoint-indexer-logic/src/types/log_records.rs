//! Records copied one-to-one from entry-point logs. Each is written once,
//! keyed by the log's position in its transaction.

use crate::{
    indexer::abi::IEntryPoint,
    store::{Entity, EntityKind},
    types::{common::log_record_id, event::EventContext},
};
use alloy::primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};

macro_rules! impl_entity {
    ($record:ty, $kind:expr) => {
        impl Entity for $record {
            const KIND: EntityKind = $kind;

            fn id(&self) -> &str {
                &self.id
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDeployed {
    pub id: String,
    pub user_op_hash: B256,
    pub sender: Address,
    pub factory: Address,
    pub paymaster: Address,
    pub block_number: u64,
    pub block_timestamp: u64,
    pub transaction_hash: B256,
}

impl AccountDeployed {
    pub fn new(event: &IEntryPoint::AccountDeployed, context: &EventContext) -> Self {
        Self {
            id: log_record_id(context.transaction_hash, context.log_index),
            user_op_hash: event.userOpHash,
            sender: event.sender,
            factory: event.factory,
            paymaster: event.paymaster,
            block_number: context.block_number,
            block_timestamp: context.block_timestamp,
            transaction_hash: context.transaction_hash,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposited {
    pub id: String,
    pub account: Address,
    pub total_deposit: U256,
    pub block_number: u64,
    pub block_timestamp: u64,
    pub transaction_hash: B256,
}

impl Deposited {
    pub fn new(event: &IEntryPoint::Deposited, context: &EventContext) -> Self {
        Self {
            id: log_record_id(context.transaction_hash, context.log_index),
            account: event.account,
            total_deposit: event.totalDeposit,
            block_number: context.block_number,
            block_timestamp: context.block_timestamp,
            transaction_hash: context.transaction_hash,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureAggregatorChanged {
    pub id: String,
    pub aggregator: Address,
    pub block_number: u64,
    pub block_timestamp: u64,
    pub transaction_hash: B256,
}

impl SignatureAggregatorChanged {
    pub fn new(event: &IEntryPoint::SignatureAggregatorChanged, context: &EventContext) -> Self {
        Self {
            id: log_record_id(context.transaction_hash, context.log_index),
            aggregator: event.aggregator,
            block_number: context.block_number,
            block_timestamp: context.block_timestamp,
            transaction_hash: context.transaction_hash,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeLocked {
    pub id: String,
    pub account: Address,
    pub total_staked: U256,
    pub unstake_delay_sec: U256,
    pub block_number: u64,
    pub block_timestamp: u64,
    pub transaction_hash: B256,
}

impl StakeLocked {
    pub fn new(event: &IEntryPoint::StakeLocked, context: &EventContext) -> Self {
        Self {
            id: log_record_id(context.transaction_hash, context.log_index),
            account: event.account,
            total_staked: event.totalStaked,
            unstake_delay_sec: event.unstakeDelaySec,
            block_number: context.block_number,
            block_timestamp: context.block_timestamp,
            transaction_hash: context.transaction_hash,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeUnlocked {
    pub id: String,
    pub account: Address,
    pub withdraw_time: U256,
    pub block_number: u64,
    pub block_timestamp: u64,
    pub transaction_hash: B256,
}

impl StakeUnlocked {
    pub fn new(event: &IEntryPoint::StakeUnlocked, context: &EventContext) -> Self {
        Self {
            id: log_record_id(context.transaction_hash, context.log_index),
            account: event.account,
            withdraw_time: event.withdrawTime,
            block_number: context.block_number,
            block_timestamp: context.block_timestamp,
            transaction_hash: context.transaction_hash,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeWithdrawn {
    pub id: String,
    pub account: Address,
    pub withdraw_address: Address,
    pub amount: U256,
    pub block_number: u64,
    pub block_timestamp: u64,
    pub transaction_hash: B256,
}

impl StakeWithdrawn {
    pub fn new(event: &IEntryPoint::StakeWithdrawn, context: &EventContext) -> Self {
        Self {
            id: log_record_id(context.transaction_hash, context.log_index),
            account: event.account,
            withdraw_address: event.withdrawAddress,
            amount: event.amount,
            block_number: context.block_number,
            block_timestamp: context.block_timestamp,
            transaction_hash: context.transaction_hash,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdrawn {
    pub id: String,
    pub account: Address,
    pub withdraw_address: Address,
    pub amount: U256,
    pub block_number: u64,
    pub block_timestamp: u64,
    pub transaction_hash: B256,
}

impl Withdrawn {
    pub fn new(event: &IEntryPoint::Withdrawn, context: &EventContext) -> Self {
        Self {
            id: log_record_id(context.transaction_hash, context.log_index),
            account: event.account,
            withdraw_address: event.withdrawAddress,
            amount: event.amount,
            block_number: context.block_number,
            block_timestamp: context.block_timestamp,
            transaction_hash: context.transaction_hash,
        }
    }
}

impl_entity!(AccountDeployed, EntityKind::AccountDeployed);
impl_entity!(Deposited, EntityKind::Deposited);
impl_entity!(SignatureAggregatorChanged, EntityKind::SignatureAggregatorChanged);
impl_entity!(StakeLocked, EntityKind::StakeLocked);
impl_entity!(StakeUnlocked, EntityKind::StakeUnlocked);
impl_entity!(StakeWithdrawn, EntityKind::StakeWithdrawn);
impl_entity!(Withdrawn, EntityKind::Withdrawn);
