use crate::{
    error::IndexerError,
    indexer::{abi::IEntryPoint, decoder, matcher},
    repository::{
        self,
        bundle::add_to_bundle,
        registry::{register_address, register_hash},
    },
    store::Store,
    types::{
        common::hex_id,
        event::EventContext,
        registry::{AddressRole, HashRole},
        user_op::UserOp,
    },
};
use alloy::primitives::Address;
use std::ops::Range;

/// Target contract inside the account's `execute*(address,...)` call data.
const TARGET_RANGE: Range<usize> = 16..36;
/// Factory prefix of a non-empty init code.
const FACTORY_RANGE: Range<usize> = 0..20;
/// Beneficiary word of the outer `handleOps` call.
const BENEFICIARY_RANGE: Range<usize> = 48..68;

fn slice_address(
    bytes: &[u8],
    range: Range<usize>,
    field: &'static str,
) -> Result<Address, IndexerError> {
    bytes
        .get(range.clone())
        .map(Address::from_slice)
        .ok_or(IndexerError::MalformedSlice {
            field,
            start: range.start,
            end: range.end,
            len: bytes.len(),
        })
}

pub fn target_address(call_data: &[u8]) -> Result<Address, IndexerError> {
    slice_address(call_data, TARGET_RANGE, "target")
}

/// Empty init code means the account already existed.
pub fn factory_address(init_code: &[u8]) -> Result<Option<Address>, IndexerError> {
    if init_code.is_empty() {
        return Ok(None);
    }
    slice_address(init_code, FACTORY_RANGE, "factory").map(Some)
}

/// Read at a fixed position of the outer input, which holds for `handleOps`
/// only: the beneficiary is the second head word of its arguments.
pub fn beneficiary_address(input: &[u8]) -> Result<Address, IndexerError> {
    slice_address(input, BENEFICIARY_RANGE, "beneficiary")
}

#[tracing::instrument(
    name = "user_operation_event",
    skip_all,
    level = "debug",
    fields(op_hash = %event.userOpHash, tx_hash = %context.transaction_hash),
)]
pub async fn handle_user_operation_event(
    store: &dyn Store,
    event: &IEntryPoint::UserOperationEvent,
    context: &EventContext,
) -> Result<(), IndexerError> {
    let mut user_op = repository::load::<UserOp>(store, &hex_id(event.userOpHash))
        .await?
        .unwrap_or_else(|| UserOp::new(event.userOpHash));
    add_to_bundle(store, context).await?;

    user_op.transaction_hash = Some(context.transaction_hash);
    user_op.bundle = Some(hex_id(context.transaction_hash));
    user_op.input = Some(context.transaction_input.clone());
    user_op.sender = Some(event.sender);
    user_op.paymaster = Some(event.paymaster);
    user_op.nonce = Some(event.nonce);
    user_op.actual_gas_cost = Some(event.actualGasCost);
    user_op.actual_gas_used = Some(event.actualGasUsed);
    user_op.actual_gas_price = event.actualGasCost.checked_div(event.actualGasUsed);
    user_op.success = event.success;
    user_op.block_time = Some(context.block_timestamp);
    user_op.block_number = Some(context.block_number);
    user_op.network = Some(context.network.clone());

    let input = &context.transaction_input[..];
    let params = decoder::handle_ops_params(input);
    if let Some(params) = params {
        let ops = decoder::decode_user_operations(params);
        match matcher::find_by_nonce(&ops, event.nonce) {
            Some(op) => {
                let factory = factory_address(&op.initCode)?;
                user_op.target = Some(target_address(&op.callData)?);
                user_op.call_data = Some(op.callData.clone());
                user_op.factory = factory;
                user_op.beneficiary = Some(beneficiary_address(input)?);

                if let Some(factory) = factory.filter(|factory| !factory.is_zero()) {
                    register_address(store, event.sender, AddressRole::Wallet).await?;
                    register_address(store, factory, AddressRole::Factory).await?;
                }
            }
            None => {
                tracing::debug!(
                    nonce = %event.nonce,
                    batch_size = ops.len(),
                    "no batched operation matches the event nonce"
                );
            }
        }
    }

    match beneficiary_address(input) {
        Ok(beneficiary) => {
            register_address(store, beneficiary, AddressRole::Beneficiary).await?;
        }
        Err(err) if params.is_none() => {
            tracing::debug!(error = %err, "input too short to carry a beneficiary");
        }
        Err(err) => return Err(err),
    }
    if !event.paymaster.is_zero() {
        register_address(store, event.paymaster, AddressRole::Paymaster).await?;
    }
    register_hash(store, context.transaction_hash, HashRole::TransactionHash).await?;
    register_hash(store, event.userOpHash, HashRole::UserOpHash).await?;

    repository::save(store, &user_op).await?;
    Ok(())
}

#[tracing::instrument(
    name = "user_operation_revert_reason",
    skip_all,
    level = "debug",
    fields(op_hash = %event.userOpHash, tx_hash = %context.transaction_hash),
)]
pub async fn handle_user_operation_revert_reason(
    store: &dyn Store,
    event: &IEntryPoint::UserOperationRevertReason,
    context: &EventContext,
) -> Result<(), IndexerError> {
    let mut user_op = repository::load::<UserOp>(store, &hex_id(event.userOpHash))
        .await?
        .unwrap_or_else(|| UserOp::new(event.userOpHash));
    add_to_bundle(store, context).await?;

    user_op.bundle = Some(hex_id(context.transaction_hash));
    user_op.transaction_hash = Some(context.transaction_hash);
    user_op.input = Some(context.transaction_input.clone());
    user_op.sender = Some(event.sender);
    user_op.revert_reason = Some(event.revertReason.clone());
    user_op.network = Some(context.network.clone());
    user_op.success = false;

    repository::save(store, &user_op).await?;
    Ok(())
}
