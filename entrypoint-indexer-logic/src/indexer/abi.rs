use alloy::sol;

sol! {
    #[derive(Debug, Default, PartialEq, Eq)]
    struct UserOperation {
        address sender;
        uint256 nonce;
        bytes initCode;
        bytes callData;
        uint256 callGasLimit;
        uint256 verificationGasLimit;
        uint256 preVerificationGas;
        uint256 maxFeePerGas;
        uint256 maxPriorityFeePerGas;
        bytes paymasterAndData;
        bytes signature;
    }

    #[derive(Debug, PartialEq, Eq)]
    interface IEntryPoint {
        event UserOperationEvent(
            bytes32 indexed userOpHash,
            address indexed sender,
            address indexed paymaster,
            uint256 nonce,
            bool success,
            uint256 actualGasCost,
            uint256 actualGasUsed
        );

        event UserOperationRevertReason(
            bytes32 indexed userOpHash,
            address indexed sender,
            uint256 nonce,
            bytes revertReason
        );

        event AccountDeployed(
            bytes32 indexed userOpHash,
            address indexed sender,
            address factory,
            address paymaster
        );

        event Deposited(address indexed account, uint256 totalDeposit);

        event SignatureAggregatorChanged(address indexed aggregator);

        event StakeLocked(address indexed account, uint256 totalStaked, uint256 unstakeDelaySec);

        event StakeUnlocked(address indexed account, uint256 withdrawTime);

        event StakeWithdrawn(address indexed account, address withdrawAddress, uint256 amount);

        event Withdrawn(address indexed account, address withdrawAddress, uint256 amount);

        function handleOps(UserOperation[] calldata ops, address payable beneficiary);
    }
}
