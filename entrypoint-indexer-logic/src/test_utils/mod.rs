use crate::{
    indexer::abi::{IEntryPoint, UserOperation},
    types::event::EventContext,
};
use alloy::{
    primitives::{Address, B256, Bytes, U256, address},
    rpc::types::Log,
    sol_types::{SolCall, SolEvent},
};
use blockscout_service_launcher::test_database::TestDbGuard;

mod mock_chain_client;

pub use mock_chain_client::MockChainClient;

pub const ENTRY_POINT: Address = address!("0x5FF137D4b0FDCD49DcA30c7CF57E578a026d2789");

pub async fn init_db(name: &str) -> TestDbGuard {
    TestDbGuard::new::<migration::Migrator>(name).await
}

/// Input of a real mainnet `handleOps` transaction with a single operation.
pub fn handle_ops_input() -> Bytes {
    include_str!("handle_ops_input.hex").trim().parse().unwrap()
}

pub fn event_context(transaction_hash: B256, transaction_input: Bytes) -> EventContext {
    EventContext {
        transaction_hash,
        transaction_input,
        log_index: 17,
        block_number: 18_774_992,
        block_timestamp: 1_702_200_995,
        network: "mainnet".to_string(),
    }
}

pub fn user_operation(sender: Address, nonce: u64, init_code: Bytes, call_data: Bytes) -> UserOperation {
    UserOperation {
        sender,
        nonce: U256::from(nonce),
        initCode: init_code,
        callData: call_data,
        callGasLimit: U256::from(300_000),
        verificationGasLimit: U256::from(250_000),
        preVerificationGas: U256::from(23_920),
        maxFeePerGas: U256::from(1_501_000_000u64),
        maxPriorityFeePerGas: U256::from(1_500_000_000u64),
        paymasterAndData: Bytes::new(),
        signature: Bytes::from(vec![0x1b; 65]),
    }
}

pub fn encode_handle_ops(ops: Vec<UserOperation>, beneficiary: Address) -> Bytes {
    IEntryPoint::handleOpsCall { ops, beneficiary }
        .abi_encode()
        .into()
}

pub fn user_operation_event(
    user_op_hash: B256,
    sender: Address,
    paymaster: Address,
    nonce: u64,
    success: bool,
) -> IEntryPoint::UserOperationEvent {
    IEntryPoint::UserOperationEvent {
        userOpHash: user_op_hash,
        sender,
        paymaster,
        nonce: U256::from(nonce),
        success,
        actualGasCost: U256::from(6_170_000_000_000_000u64),
        actualGasUsed: U256::from(165_030u64),
    }
}

pub fn revert_event(
    user_op_hash: B256,
    sender: Address,
    nonce: u64,
    revert_reason: Bytes,
) -> IEntryPoint::UserOperationRevertReason {
    IEntryPoint::UserOperationRevertReason {
        userOpHash: user_op_hash,
        sender,
        nonce: U256::from(nonce),
        revertReason: revert_reason,
    }
}

/// Log emitted by the default entry point, as returned by `eth_getLogs`.
pub fn rpc_log<E: SolEvent>(event: &E, block_number: u64, log_index: u64, transaction_hash: B256) -> Log {
    Log {
        inner: alloy::primitives::Log {
            address: ENTRY_POINT,
            data: event.encode_log_data(),
        },
        block_number: Some(block_number),
        transaction_hash: Some(transaction_hash),
        log_index: Some(log_index),
        ..Default::default()
    }
}
