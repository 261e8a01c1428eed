use crate::indexer::abi::IEntryPoint;
use alloy::{
    primitives::{B256, Bytes},
    rpc::types::Log,
    sol_types::SolEvent,
};

/// Transaction and block context shared by every entry-point event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventContext {
    pub transaction_hash: B256,
    pub transaction_input: Bytes,
    pub log_index: u32,
    pub block_number: u64,
    pub block_timestamp: u64,
    pub network: String,
}

#[derive(Debug, Clone, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum EntryPointEvent {
    UserOperation(IEntryPoint::UserOperationEvent),
    UserOperationRevertReason(IEntryPoint::UserOperationRevertReason),
    AccountDeployed(IEntryPoint::AccountDeployed),
    Deposited(IEntryPoint::Deposited),
    SignatureAggregatorChanged(IEntryPoint::SignatureAggregatorChanged),
    StakeLocked(IEntryPoint::StakeLocked),
    StakeUnlocked(IEntryPoint::StakeUnlocked),
    StakeWithdrawn(IEntryPoint::StakeWithdrawn),
    Withdrawn(IEntryPoint::Withdrawn),
}

impl EntryPointEvent {
    /// Decodes a raw log by its first topic. Returns `Ok(None)` for topics
    /// that are not entry-point events handled by the indexer.
    pub fn from_log(log: &Log) -> Result<Option<Self>, alloy::sol_types::Error> {
        let event = match log.topic0() {
            Some(&IEntryPoint::UserOperationEvent::SIGNATURE_HASH) => Self::UserOperation(
                log.log_decode::<IEntryPoint::UserOperationEvent>()?
                    .inner
                    .data,
            ),
            Some(&IEntryPoint::UserOperationRevertReason::SIGNATURE_HASH) => {
                Self::UserOperationRevertReason(
                    log.log_decode::<IEntryPoint::UserOperationRevertReason>()?
                        .inner
                        .data,
                )
            }
            Some(&IEntryPoint::AccountDeployed::SIGNATURE_HASH) => Self::AccountDeployed(
                log.log_decode::<IEntryPoint::AccountDeployed>()?.inner.data,
            ),
            Some(&IEntryPoint::Deposited::SIGNATURE_HASH) => {
                Self::Deposited(log.log_decode::<IEntryPoint::Deposited>()?.inner.data)
            }
            Some(&IEntryPoint::SignatureAggregatorChanged::SIGNATURE_HASH) => {
                Self::SignatureAggregatorChanged(
                    log.log_decode::<IEntryPoint::SignatureAggregatorChanged>()?
                        .inner
                        .data,
                )
            }
            Some(&IEntryPoint::StakeLocked::SIGNATURE_HASH) => {
                Self::StakeLocked(log.log_decode::<IEntryPoint::StakeLocked>()?.inner.data)
            }
            Some(&IEntryPoint::StakeUnlocked::SIGNATURE_HASH) => {
                Self::StakeUnlocked(log.log_decode::<IEntryPoint::StakeUnlocked>()?.inner.data)
            }
            Some(&IEntryPoint::StakeWithdrawn::SIGNATURE_HASH) => Self::StakeWithdrawn(
                log.log_decode::<IEntryPoint::StakeWithdrawn>()?.inner.data,
            ),
            Some(&IEntryPoint::Withdrawn::SIGNATURE_HASH) => {
                Self::Withdrawn(log.log_decode::<IEntryPoint::Withdrawn>()?.inner.data)
            }
            _ => return Ok(None),
        };
        Ok(Some(event))
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// A decoded event together with the context it was emitted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedEvent {
    pub event: EntryPointEvent,
    pub context: EventContext,
}
