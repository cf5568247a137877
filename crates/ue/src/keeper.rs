//! Keeper of the universal executor module.

use crate::{
    bank::BankKeeper,
    config::UeConfig,
    conversion::{convert_usd_to_pc_tokens_at_rate, ConversionError},
    error::MintPcError,
    factory::{compute_uea_calldata, EvmCallError, EvmCaller},
    resolver::{resolve_uea_account, ResolveError},
    types::UniversalAccountId,
    verifier::UtvVerifier,
};
use alloy_primitives::{Address, Bytes, U256};
use pc_common::{AccAddress, AddressCodec, AnyAddressCodec, Coin};

/// Outcome of a successful [`Keeper::mint_pc`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintReceipt {
    /// EVM address of the universal executing account.
    pub uea: Address,
    /// Native account that received the coins.
    pub recipient: AccAddress,
    /// Coins minted and delivered.
    pub minted: Coin,
}

/// Holds the module configuration and the collaborators a mint needs that
/// outlive a single transaction.
///
/// The ledger and the EVM are passed per call since both are borrowed from the
/// executing block.
#[derive(Debug, Clone)]
pub struct Keeper<V, C = AnyAddressCodec> {
    config: UeConfig,
    verifier: V,
    codec: C,
}

impl<V: UtvVerifier> Keeper<V> {
    /// Creates a keeper using the default address codec.
    pub fn new(config: UeConfig, verifier: V) -> Self {
        Self::with_codec(config, verifier, AnyAddressCodec)
    }
}

impl<V, C> Keeper<V, C>
where
    V: UtvVerifier,
    C: AddressCodec,
{
    /// Creates a keeper with a custom address codec.
    pub const fn with_codec(config: UeConfig, verifier: V, codec: C) -> Self {
        Self {
            config,
            verifier,
            codec,
        }
    }

    /// Returns the module configuration.
    pub const fn config(&self) -> &UeConfig {
        &self.config
    }

    /// Returns the foreign transaction verifier.
    pub const fn verifier(&self) -> &V {
        &self.verifier
    }

    /// Returns the address codec.
    pub const fn codec(&self) -> &C {
        &self.codec
    }

    /// Calls `computeUEA(id)` on the configured factory and returns the raw output.
    pub fn compute_uea_address<E: EvmCaller>(
        &self,
        evm: &mut E,
        evm_from: Address,
        id: &UniversalAccountId,
    ) -> Result<Bytes, EvmCallError> {
        let calldata = compute_uea_calldata(id)?;
        evm.call_contract(evm_from, self.config.factory_address, calldata)
    }

    /// Mints native coins for a verified foreign deposit and delivers them to
    /// the owner's UEA.
    ///
    /// Steps run in order and stop at the first failure. Nothing is written
    /// before the mint, but a failed transfer leaves the minted coins in the
    /// module account; run this inside [`crate::execute_atomic`] to discard
    /// them.
    pub fn mint_pc<B, E>(
        &self,
        bank: &mut B,
        evm: &mut E,
        evm_from: Address,
        id: &UniversalAccountId,
        tx_hash: &str,
    ) -> Result<MintReceipt, MintPcError>
    where
        B: BankKeeper,
        E: EvmCaller,
    {
        let chain = id.caip2();
        let locked = self
            .verifier
            .verify_and_get_locked_funds(&id.owner, tx_hash, &chain)
            .map_err(|err| {
                tracing::warn!(target: "ue::mint_pc", %tx_hash, %chain, %err, "verification failed");
                MintPcError::VerificationFailed(err)
            })?;

        let amount = convert_usd_to_pc_tokens_at_rate(
            locked.amount,
            locked.decimals,
            U256::from(self.config.usd_to_pc_rate),
        )
        .map_err(|err| {
            tracing::warn!(target: "ue::mint_pc", %tx_hash, %err, "conversion of locked funds failed");
            match err {
                ConversionError::InvalidDecimals { decimals } => {
                    MintPcError::InvalidDecimals { decimals }
                }
                ConversionError::Overflow => MintPcError::ConversionOverflow,
            }
        })?;
        tracing::debug!(
            target: "ue::mint_pc",
            usd_amount = %locked.amount,
            decimals = locked.decimals,
            %amount,
            "converted locked funds"
        );

        let ret = self
            .compute_uea_address(evm, evm_from, id)
            .map_err(|err| {
                tracing::warn!(target: "ue::mint_pc", %tx_hash, %err, "UEA computation failed");
                MintPcError::AddressComputationFailed(err)
            })?;

        let (uea, recipient) = resolve_uea_account(&self.codec, &ret).map_err(|err| {
            tracing::warn!(target: "ue::mint_pc", %tx_hash, %err, "UEA resolution failed");
            match err {
                ResolveError::MalformedReturnData { len } => {
                    MintPcError::MalformedReturnData { len }
                }
                ResolveError::AddressConversion(err) => MintPcError::AddressConversion(err),
            }
        })?;
        tracing::debug!(target: "ue::mint_pc", %uea, %recipient, "resolved UEA");

        let coin = Coin::new(self.config.base_denom.as_str(), amount);
        bank.mint_coins(&self.config.module_name, &coin)
            .map_err(|err| {
                tracing::warn!(target: "ue::mint_pc", %coin, %err, "mint failed");
                MintPcError::MintFailed(err)
            })?;

        bank.send_coins_from_module_to_account(&self.config.module_name, &recipient, &coin)
            .map_err(|err| {
                tracing::warn!(target: "ue::mint_pc", %uea, %coin, %err, "transfer after mint failed");
                MintPcError::TransferFailed(err)
            })?;

        tracing::info!(target: "ue::mint_pc", %tx_hash, %chain, %uea, %coin, "minted to UEA");

        Ok(MintReceipt {
            uea,
            recipient,
            minted: coin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        bank::BankError,
        verifier::{LockedFunds, VerifierError},
    };
    use crate::test_utils::EventCollector;
    use alloy_primitives::{address, B256};
    use tracing::Level;

    const UEA: Address = address!("0x00000000000000000000000000000000000000bb");

    #[derive(Debug)]
    struct FixedVerifier(Result<LockedFunds, VerifierError>);

    impl UtvVerifier for FixedVerifier {
        fn verify_and_get_locked_funds(
            &self,
            _owner: &str,
            _tx_hash: &str,
            _chain: &str,
        ) -> Result<LockedFunds, VerifierError> {
            self.0.clone()
        }
    }

    #[derive(Debug, Default)]
    struct RecordingBank {
        minted: Vec<Coin>,
        sent: Vec<(AccAddress, Coin)>,
        fail_mint: bool,
        fail_send: bool,
    }

    impl BankKeeper for RecordingBank {
        fn mint_coins(&mut self, _module_name: &str, coin: &Coin) -> Result<(), BankError> {
            if self.fail_mint {
                return Err(BankError::State("mint disabled".into()));
            }
            self.minted.push(coin.clone());
            Ok(())
        }

        fn send_coins_from_module_to_account(
            &mut self,
            _module_name: &str,
            recipient: &AccAddress,
            coin: &Coin,
        ) -> Result<(), BankError> {
            if self.fail_send {
                return Err(BankError::State("send disabled".into()));
            }
            self.sent.push((recipient.clone(), coin.clone()));
            Ok(())
        }
    }

    struct StubEvm {
        output: Result<Bytes, EvmCallError>,
        calls: usize,
    }

    impl StubEvm {
        fn returning(uea: Address) -> Self {
            Self {
                output: Ok(B256::left_padding_from(uea.as_slice()).0.to_vec().into()),
                calls: 0,
            }
        }
    }

    impl EvmCaller for StubEvm {
        fn call_contract(
            &mut self,
            _from: Address,
            contract: Address,
            _calldata: Bytes,
        ) -> Result<Bytes, EvmCallError> {
            assert_eq!(contract, crate::FACTORY_PROXY_ADDRESS);
            self.calls += 1;
            self.output.clone()
        }
    }

    fn account_id() -> UniversalAccountId {
        UniversalAccountId::new(
            "eip155",
            "11155111",
            "0x527f3692f5c53cfa83f7689885995606f93b6164",
        )
    }

    fn keeper(locked: Result<LockedFunds, VerifierError>) -> Keeper<FixedVerifier> {
        Keeper::new(UeConfig::default(), FixedVerifier(locked))
    }

    #[test]
    fn mints_converted_amount_to_uea() {
        let keeper = keeper(Ok(LockedFunds::new(U256::from(1_000_000u64), 6)));
        let mut bank = RecordingBank::default();
        let mut evm = StubEvm::returning(UEA);

        let receipt = keeper
            .mint_pc(&mut bank, &mut evm, Address::ZERO, &account_id(), "0xabc")
            .unwrap();

        let expected = Coin::new("upc", U256::from(10u128.pow(19)));
        assert_eq!(receipt.uea, UEA);
        assert_eq!(receipt.recipient, AccAddress::from(UEA));
        assert_eq!(receipt.minted, expected);
        assert_eq!(bank.minted, vec![expected.clone()]);
        assert_eq!(bank.sent, vec![(AccAddress::from(UEA), expected)]);
    }

    #[test]
    fn verification_failure_stops_before_factory_call() {
        let keeper = keeper(Err(VerifierError::NotFound {
            tx_hash: "0xabc".into(),
            chain: "eip155:11155111".into(),
        }));
        let mut bank = RecordingBank::default();
        let mut evm = StubEvm::returning(UEA);

        let err = keeper
            .mint_pc(&mut bank, &mut evm, Address::ZERO, &account_id(), "0xabc")
            .unwrap_err();

        assert!(matches!(err, MintPcError::VerificationFailed(VerifierError::NotFound { .. })));
        assert_eq!(evm.calls, 0);
        assert!(bank.minted.is_empty());
    }

    #[test]
    fn too_many_decimals_is_rejected() {
        let keeper = keeper(Ok(LockedFunds::new(U256::from(1u64), 19)));
        let mut bank = RecordingBank::default();
        let mut evm = StubEvm::returning(UEA);

        let err = keeper
            .mint_pc(&mut bank, &mut evm, Address::ZERO, &account_id(), "0xabc")
            .unwrap_err();

        assert_eq!(err, MintPcError::InvalidDecimals { decimals: 19 });
        assert_eq!(evm.calls, 0);
    }

    #[test]
    fn conversion_overflow_is_rejected() {
        let keeper = keeper(Ok(LockedFunds::new(U256::MAX, 0)));
        let mut bank = RecordingBank::default();
        let mut evm = StubEvm::returning(UEA);

        let err = keeper
            .mint_pc(&mut bank, &mut evm, Address::ZERO, &account_id(), "0xabc")
            .unwrap_err();

        assert_eq!(err, MintPcError::ConversionOverflow);
        assert!(bank.minted.is_empty());
    }

    #[test]
    fn factory_revert_is_reported() {
        let keeper = keeper(Ok(LockedFunds::new(U256::from(5u64), 18)));
        let mut bank = RecordingBank::default();
        let mut evm = StubEvm {
            output: Err(EvmCallError::Reverted(Bytes::new())),
            calls: 0,
        };

        let err = keeper
            .mint_pc(&mut bank, &mut evm, Address::ZERO, &account_id(), "0xabc")
            .unwrap_err();

        assert_eq!(
            err,
            MintPcError::AddressComputationFailed(EvmCallError::Reverted(Bytes::new()))
        );
        assert!(bank.minted.is_empty());
    }

    #[test]
    fn short_factory_output_is_rejected() {
        let keeper = keeper(Ok(LockedFunds::new(U256::from(5u64), 18)));
        let mut bank = RecordingBank::default();
        let mut evm = StubEvm {
            output: Ok(Bytes::from(vec![0u8; 4])),
            calls: 0,
        };

        let err = keeper
            .mint_pc(&mut bank, &mut evm, Address::ZERO, &account_id(), "0xabc")
            .unwrap_err();

        assert_eq!(err, MintPcError::MalformedReturnData { len: 4 });
        assert!(bank.minted.is_empty());
    }

    #[test]
    fn failed_transfer_is_reported_after_mint() {
        let keeper = keeper(Ok(LockedFunds::new(U256::from(5u64), 18)));
        let mut bank = RecordingBank {
            fail_send: true,
            ..Default::default()
        };
        let mut evm = StubEvm::returning(UEA);

        let err = keeper
            .mint_pc(&mut bank, &mut evm, Address::ZERO, &account_id(), "0xabc")
            .unwrap_err();

        assert!(matches!(err, MintPcError::TransferFailed(_)));
        assert_eq!(bank.minted, vec![Coin::new("upc", U256::from(50u64))]);
        assert!(bank.sent.is_empty());
    }

    #[test]
    fn zero_amount_still_mints_and_sends() {
        let keeper = keeper(Ok(LockedFunds::new(U256::ZERO, 6)));
        let mut bank = RecordingBank::default();
        let mut evm = StubEvm::returning(UEA);

        let receipt = keeper
            .mint_pc(&mut bank, &mut evm, Address::ZERO, &account_id(), "0xabc")
            .unwrap();

        assert!(receipt.minted.is_zero());
        assert_eq!(bank.minted.len(), 1);
        assert_eq!(bank.sent.len(), 1);
    }

    #[test]
    fn mint_failure_is_reported_before_transfer() {
        let keeper = keeper(Ok(LockedFunds::new(U256::from(5u64), 18)));
        let mut bank = RecordingBank {
            fail_mint: true,
            ..Default::default()
        };
        let mut evm = StubEvm::returning(UEA);

        let err = keeper
            .mint_pc(&mut bank, &mut evm, Address::ZERO, &account_id(), "0xabc")
            .unwrap_err();

        assert_eq!(err, MintPcError::MintFailed(BankError::State("mint disabled".into())));
        assert!(bank.sent.is_empty());
    }

    #[test]
    fn successful_mint_logs_resolved_uea_and_result() {
        let collector = EventCollector::default();
        let _guard = collector.as_default();

        let keeper = keeper(Ok(LockedFunds::new(U256::from(5u64), 18)));
        keeper
            .mint_pc(
                &mut RecordingBank::default(),
                &mut StubEvm::returning(UEA),
                Address::ZERO,
                &account_id(),
                "0xabc",
            )
            .unwrap();

        let resolved = collector
            .events(Level::DEBUG, "ue::mint_pc")
            .into_iter()
            .find(|e| e.message() == Some("resolved UEA"))
            .expect("resolved UEA is logged");
        assert_eq!(resolved.field("uea"), Some(UEA.to_string().as_str()));

        assert_eq!(collector.messages(Level::INFO, "ue::mint_pc"), vec!["minted to UEA"]);
        assert!(collector.events(Level::WARN, "ue::mint_pc").is_empty());
    }

    #[test]
    fn every_failing_step_logs_a_warning() {
        let short_output = || StubEvm {
            output: Ok(Bytes::from(vec![0u8; 4])),
            calls: 0,
        };
        let reverting = || StubEvm {
            output: Err(EvmCallError::Reverted(Bytes::new())),
            calls: 0,
        };
        let cases: [(LockedFunds, RecordingBank, StubEvm, &str); 6] = [
            (
                LockedFunds::new(U256::from(1u64), 19),
                RecordingBank::default(),
                StubEvm::returning(UEA),
                "conversion of locked funds failed",
            ),
            (
                LockedFunds::new(U256::MAX, 0),
                RecordingBank::default(),
                StubEvm::returning(UEA),
                "conversion of locked funds failed",
            ),
            (
                LockedFunds::new(U256::from(5u64), 18),
                RecordingBank::default(),
                reverting(),
                "UEA computation failed",
            ),
            (
                LockedFunds::new(U256::from(5u64), 18),
                RecordingBank::default(),
                short_output(),
                "UEA resolution failed",
            ),
            (
                LockedFunds::new(U256::from(5u64), 18),
                RecordingBank {
                    fail_mint: true,
                    ..Default::default()
                },
                StubEvm::returning(UEA),
                "mint failed",
            ),
            (
                LockedFunds::new(U256::from(5u64), 18),
                RecordingBank {
                    fail_send: true,
                    ..Default::default()
                },
                StubEvm::returning(UEA),
                "transfer after mint failed",
            ),
        ];

        for (locked, mut bank, mut evm, expected) in cases {
            let collector = EventCollector::default();
            let _guard = collector.as_default();

            let result = keeper(Ok(locked)).mint_pc(
                &mut bank,
                &mut evm,
                Address::ZERO,
                &account_id(),
                "0xabc",
            );

            assert!(result.is_err());
            assert_eq!(collector.messages(Level::WARN, "ue::mint_pc"), vec![expected]);
            assert!(collector.events(Level::INFO, "ue::mint_pc").is_empty());
        }
    }
}
