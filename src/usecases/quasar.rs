//! Quasar Pool Client - One Typed Method per Contract Entry Point
//!
//! Read-only methods issue an `eth_call` and decode the result; they never
//! submit anything and can be retried freely. State-changing methods
//! encode their call data, wrap it in a `TxDetails` addressed to the pool
//! (or, for approvals, to the token) and hand it to the `TxSender`. The
//! receipt comes back untouched: the client does not interpret contract
//! logic or revert reasons.

use std::sync::Arc;

use alloy::primitives::{keccak256, Address, U256};
use alloy::sol_types::SolCall;
use tracing::{debug, info, instrument};

use super::erc20::{call_view, Erc20};
use super::tx_sender::TxSender;
use crate::adapters::chain::abi::{IERC20, IQuasar};
use crate::domain::calls::{ChallengeIfeClaim, Claim, IfeClaim, ObtainTicket, RepayOwedToken, TokenData};
use crate::domain::currency::Currency;
use crate::domain::error::Result;
use crate::domain::tx::{TxDetails, TxOptions, TxReceipt};
use crate::ports::chain_client::ChainClient;

/// Client for a deployed Quasar pool contract.
pub struct QuasarClient<C: ChainClient> {
    chain: Arc<C>,
    sender: TxSender<C>,
    /// Pool contract address; also the spender for token approvals.
    quasar: Address,
}

impl<C: ChainClient> QuasarClient<C> {
    /// Create a client for the pool at `quasar` with a default sender.
    pub fn new(chain: Arc<C>, quasar: Address) -> Self {
        let sender = TxSender::new(Arc::clone(&chain));
        Self::with_sender(chain, sender, quasar)
    }

    pub const fn with_sender(chain: Arc<C>, sender: TxSender<C>, quasar: Address) -> Self {
        Self {
            chain,
            sender,
            quasar,
        }
    }

    pub const fn address(&self) -> Address {
        self.quasar
    }

    // ── Reads ───────────────────────────────────────────────

    /// Bond (in wei) required to obtain a ticket.
    pub async fn bond_value(&self) -> Result<U256> {
        self.read(&IQuasar::bondValueCall {}).await
    }

    pub async fn safe_block_margin(&self) -> Result<U256> {
        self.read(&IQuasar::safeBlockMarginCall {}).await
    }

    pub async fn quasar_owner(&self) -> Result<Address> {
        self.read(&IQuasar::quasarOwnerCall {}).await
    }

    /// Full per-token record kept by the pool.
    pub async fn token_data(&self, currency: Currency) -> Result<TokenData> {
        let raw = self
            .read(&IQuasar::tokenDataCall {
                token: currency.address(),
            })
            .await?;

        Ok(TokenData {
            q_token: raw.qTokenAddress,
            exchange_rate: raw.exchangeRate,
            total_supplied: raw.totalSupplied,
            pool_supply: raw.poolSupply,
            quasar_fee: raw.quasarFee,
            pool_fee: raw.poolFee,
        })
    }

    /// Fee the pool charges for `currency`.
    pub async fn quasar_fee(&self, currency: Currency) -> Result<U256> {
        Ok(self.token_data(currency).await?.quasar_fee)
    }

    /// Pool-share (qToken) balance of `supplier` for `currency`.
    #[instrument(skip(self), fields(currency = %currency, supplier = %supplier))]
    pub async fn q_token_balance(&self, currency: Currency, supplier: Address) -> Result<U256> {
        let q_token = self.token_data(currency).await?.q_token;
        debug!(q_token = %q_token, "Resolved qToken contract");
        Erc20::new(Arc::clone(&self.chain), q_token)
            .balance_of(supplier)
            .await
    }

    // ── Writes ──────────────────────────────────────────────

    /// Reserve liquidity for an exit, attaching the current bond.
    #[instrument(skip(self, args, opts), fields(utxo_pos = %args.utxo_pos))]
    pub async fn obtain_ticket(&self, args: ObtainTicket, opts: &TxOptions) -> Result<TxReceipt> {
        let bond = self.bond_value().await?;
        let call = IQuasar::obtainTicketCall {
            utxoPos: args.utxo_pos,
            rlpOutputCreationTx: args.rlp_output_creation_tx,
            outputCreationTxInclusionProof: args.output_creation_tx_inclusion_proof,
        };
        self.submit(self.quasar, &call, Some(bond), opts).await
    }

    #[instrument(skip(self, args, opts), fields(utxo_pos = %args.utxo_pos))]
    pub async fn claim(&self, args: Claim, opts: &TxOptions) -> Result<TxReceipt> {
        let call = IQuasar::claimCall {
            utxoPos: args.utxo_pos,
            utxoPosQuasarOwner: args.utxo_pos_quasar_owner,
            rlpTxToQuasarOwner: args.rlp_tx_to_quasar_owner,
            txToQuasarOwnerInclusionProof: args.tx_to_quasar_owner_inclusion_proof,
        };
        self.submit(self.quasar, &call, None, opts).await
    }

    #[instrument(skip(self, args, opts), fields(utxo_pos = %args.utxo_pos))]
    pub async fn ife_claim(&self, args: IfeClaim, opts: &TxOptions) -> Result<TxReceipt> {
        let call = IQuasar::ifeClaimCall {
            utxoPos: args.utxo_pos,
            inFlightClaimTx: args.in_flight_claim_tx,
        };
        self.submit(self.quasar, &call, None, opts).await
    }

    /// Challenge an in-flight claim. The contract additionally expects
    /// `keccak256(sender)`, which is derived from `opts.from`.
    #[instrument(skip(self, args, opts), fields(utxo_pos = %args.utxo_pos))]
    pub async fn challenge_ife_claim(
        &self,
        args: ChallengeIfeClaim,
        opts: &TxOptions,
    ) -> Result<TxReceipt> {
        let call = IQuasar::challengeIfeClaimCall {
            utxoPos: args.utxo_pos,
            rlpChallengeTx: args.rlp_challenge_tx,
            challengeTxInputIndex: args.challenge_tx_input_index,
            challengeTxWitness: args.challenge_tx_witness,
            otherInputIndex: args.other_input_index,
            otherInputCreationTx: args.other_input_creation_tx,
            senderData: keccak256(opts.from),
        };
        self.submit(self.quasar, &call, None, opts).await
    }

    #[instrument(skip(self, opts))]
    pub async fn process_ife_claim(&self, utxo_pos: U256, opts: &TxOptions) -> Result<TxReceipt> {
        let call = IQuasar::processIfeClaimCall { utxoPos: utxo_pos };
        self.submit(self.quasar, &call, None, opts).await
    }

    /// Supply `value` wei of native coin to the pool.
    #[instrument(skip(self, opts), fields(value = %value))]
    pub async fn add_eth_capacity(&self, value: U256, opts: &TxOptions) -> Result<TxReceipt> {
        self.submit(self.quasar, &IQuasar::addEthCapacityCall {}, Some(value), opts)
            .await
    }

    /// Allow the pool to pull `amount` of `erc20` from the sender.
    ///
    /// Sent to the token contract, not the pool.
    #[instrument(skip(self, opts), fields(amount = %amount))]
    pub async fn approve_token(
        &self,
        erc20: Address,
        amount: U256,
        opts: &TxOptions,
    ) -> Result<TxReceipt> {
        let call = IERC20::approveCall {
            spender: self.quasar,
            amount,
        };
        self.submit(erc20, &call, None, opts).await
    }

    /// Supply `amount` of `token` to the pool. Requires a prior approval.
    #[instrument(skip(self, opts), fields(amount = %amount))]
    pub async fn add_token_capacity(
        &self,
        token: Address,
        amount: U256,
        opts: &TxOptions,
    ) -> Result<TxReceipt> {
        let call = IQuasar::addTokenCapacityCall {
            erc20: token,
            amount,
        };
        self.submit(self.quasar, &call, None, opts).await
    }

    /// Redeem `amount` qTokens of `currency` for the underlying funds.
    #[instrument(skip(self, opts), fields(currency = %currency, amount = %amount))]
    pub async fn withdraw_funds(
        &self,
        currency: Currency,
        amount: U256,
        opts: &TxOptions,
    ) -> Result<TxReceipt> {
        let call = IQuasar::withdrawFundsCall {
            token: currency.address(),
            amount,
        };
        self.submit(self.quasar, &call, None, opts).await
    }

    /// Repay a debt to the pool; native-coin repayments attach `amount`.
    #[instrument(skip(self, opts), fields(currency = %args.currency, amount = %args.amount))]
    pub async fn repay_owed_token(&self, args: RepayOwedToken, opts: &TxOptions) -> Result<TxReceipt> {
        let value = args.currency.is_native().then_some(args.amount);
        let call = IQuasar::repayOwedTokenCall {
            token: args.currency.address(),
            amount: args.amount,
        };
        self.submit(self.quasar, &call, value, opts).await
    }

    // ── Internals ───────────────────────────────────────────

    async fn read<T: SolCall>(&self, call: &T) -> Result<T::Return> {
        call_view(self.chain.as_ref(), self.quasar, call).await
    }

    async fn submit<T: SolCall>(
        &self,
        to: Address,
        call: &T,
        value: Option<U256>,
        opts: &TxOptions,
    ) -> Result<TxReceipt> {
        let mut details = TxDetails::new(opts, to, call.abi_encode());
        if let Some(value) = value {
            details = details.with_value(value);
        }

        info!(
            method = T::SIGNATURE,
            contract = %to,
            from = %opts.from,
            value = ?value,
            "Submitting contract call"
        );

        self.sender.send_tx(details, opts.private_key.as_deref()).await
    }
}
