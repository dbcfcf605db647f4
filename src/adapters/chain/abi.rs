//! Contract ABIs - Quasar pool and ERC-20
//!
//! Bindings are generated at compile time with alloy's `sol!` macro, so
//! the contract surface is fixed when the crate is built rather than
//! selected per call.

alloy::sol! {
    /// Quasar fast-exit liquidity pool.
    interface IQuasar {
        function bondValue() external view returns (uint256);
        function safeBlockMargin() external view returns (uint256);
        function quasarOwner() external view returns (address);

        function tokenData(address token) external view returns (
            address qTokenAddress,
            uint256 exchangeRate,
            uint256 totalSupplied,
            uint256 poolSupply,
            uint256 quasarFee,
            uint256 poolFee
        );

        function obtainTicket(
            uint256 utxoPos,
            bytes rlpOutputCreationTx,
            bytes outputCreationTxInclusionProof
        ) external payable;

        function claim(
            uint256 utxoPos,
            uint256 utxoPosQuasarOwner,
            bytes rlpTxToQuasarOwner,
            bytes txToQuasarOwnerInclusionProof
        ) external;

        function ifeClaim(uint256 utxoPos, bytes inFlightClaimTx) external;

        function challengeIfeClaim(
            uint256 utxoPos,
            bytes rlpChallengeTx,
            uint16 challengeTxInputIndex,
            bytes challengeTxWitness,
            uint16 otherInputIndex,
            bytes otherInputCreationTx,
            bytes32 senderData
        ) external;

        function processIfeClaim(uint256 utxoPos) external;

        function addEthCapacity() external payable;
        function addTokenCapacity(address erc20, uint256 amount) external;
        function withdrawFunds(address token, uint256 amount) external;
        function repayOwedToken(address token, uint256 amount) external payable;
    }

    /// Standard ERC-20 surface used for approvals, qToken balances and
    /// faucet transfers.
    interface IERC20 {
        function approve(address spender, uint256 amount) external returns (bool);
        function allowance(address owner, address spender) external view returns (uint256);
        function balanceOf(address owner) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
    }
}
