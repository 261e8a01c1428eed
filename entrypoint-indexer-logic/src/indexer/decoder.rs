use crate::indexer::abi::UserOperation;
use alloy::sol_types::SolValue;

/// Selector of `handleOps((address,uint256,bytes,bytes,uint256,uint256,uint256,uint256,uint256,bytes,bytes)[],address)`.
pub const HANDLE_OPS_SELECTOR: [u8; 4] = [0x1f, 0xad, 0x94, 0x8c];

/// Returns the call arguments if `input` is a `handleOps` call.
pub fn handle_ops_params(input: &[u8]) -> Option<&[u8]> {
    input.strip_prefix(HANDLE_OPS_SELECTOR.as_slice())
}

/// Decodes the batched operations array from `handleOps` arguments.
///
/// Malformed input decodes to an empty batch; callers treat that the same
/// as a batch without a matching operation.
pub fn decode_user_operations(params: &[u8]) -> Vec<UserOperation> {
    match Vec::<UserOperation>::abi_decode(params) {
        Ok(ops) => ops,
        Err(err) => {
            tracing::debug!(error = ?err, len = params.len(), "failed to decode batched user operations");
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        indexer::abi::IEntryPoint,
        test_utils::{encode_handle_ops, handle_ops_input, user_operation},
    };
    use alloy::{
        primitives::{Address, Bytes, U256, address},
        sol_types::SolCall,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn selector_matches_abi() {
        assert_eq!(HANDLE_OPS_SELECTOR, IEntryPoint::handleOpsCall::SELECTOR);
    }

    #[test]
    fn decodes_real_handle_ops_input() {
        let input = handle_ops_input();
        let params = handle_ops_params(&input).unwrap();

        let ops = decode_user_operations(params);

        assert_eq!(ops.len(), 1);
        let op = &ops[0];
        assert_eq!(
            op.sender,
            address!("0x3ba340bc4194d7315c6f9f19aabc5f4a5cdc2e22")
        );
        assert_eq!(op.nonce, U256::from(3));
        assert!(op.initCode.is_empty());
        assert_eq!(op.callData.len(), 708);
        assert_eq!(op.callData[..4], [0xf3, 0x43, 0x08, 0xef]);
        assert_eq!(op.callGasLimit, U256::from(300_000));
        assert_eq!(op.verificationGasLimit, U256::from(250_000));
        assert_eq!(op.preVerificationGas, U256::from(23_920));
        assert_eq!(op.maxFeePerGas, U256::from(1_501_000_000u64));
        assert_eq!(op.maxPriorityFeePerGas, U256::from(1_500_000_000u64));
        assert_eq!(
            op.paymasterAndData[..20],
            address!("0xa275da33fe068cd62510b8e3af7818ede891cdff")[..]
        );
        assert_eq!(op.signature.len(), 65);
    }

    #[test]
    fn decodes_every_operation_in_order() {
        let ops = vec![
            user_operation(Address::repeat_byte(1), 7, Bytes::new(), Bytes::new()),
            user_operation(
                Address::repeat_byte(2),
                8,
                Bytes::from(vec![0xfa; 24]),
                Bytes::from(vec![0xca; 68]),
            ),
        ];
        let input = encode_handle_ops(ops.clone(), Address::repeat_byte(9));

        assert_eq!(
            decode_user_operations(handle_ops_params(&input).unwrap()),
            ops
        );
    }

    #[test]
    fn malformed_params_decode_to_empty_batch() {
        let input = handle_ops_input();
        let params = handle_ops_params(&input).unwrap();

        assert!(decode_user_operations(&params[..100]).is_empty());
        assert!(decode_user_operations(&[]).is_empty());
        assert!(decode_user_operations(&[0xff; 64]).is_empty());
    }

    #[test]
    fn other_selectors_are_not_handle_ops() {
        assert_eq!(handle_ops_params(&[0x4b, 0x1d, 0x7c, 0xf5, 0x00]), None);
        assert_eq!(handle_ops_params(&[0x1f, 0xad]), None);
        assert_eq!(handle_ops_params(&HANDLE_OPS_SELECTOR), Some(&[][..]));
    }
}
