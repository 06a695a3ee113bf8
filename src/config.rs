multiversx_sc::imports!();

/// Construction-time parameters. All of them are set once in `init`,
/// validated there, and never mutated afterwards.
#[multiversx_sc::module]
pub trait ConfigModule {
    // ========================================================
    // Derived window arithmetic
    // ========================================================

    /// First block at which votes are accepted.
    fn voting_start_block(&self) -> u64 {
        self.start_block().get() + self.voting_delay().get()
    }

    /// Last block at which votes (and registrations) are accepted.
    fn voting_end_block(&self) -> u64 {
        self.voting_start_block() + self.voting_period().get()
    }

    fn in_voting_window(&self, block: u64) -> bool {
        block >= self.voting_start_block() && block <= self.voting_end_block()
    }

    /// Upper bound on deposits, weights and voting power. Keeps every
    /// squared term and global sum comfortably representable.
    fn max_safe_value(&self) -> BigUint {
        BigUint::from(2u32).pow(128) - BigUint::from(1u32)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue6<u64, u64, BigUint, u64, u64, u64> {
        (
            self.voting_delay().get(),
            self.voting_period().get(),
            self.quorum_shares().get(),
            self.timelock_delay().get(),
            self.grace_period().get(),
            self.start_block().get(),
        )
            .into()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    /// The underlying asset pulled on registration and paid out on
    /// redemption. EGLD or any fungible ESDT.
    #[view(getAsset)]
    #[storage_mapper("asset")]
    fn asset(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getShareName)]
    #[storage_mapper("shareName")]
    fn share_name(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(getShareSymbol)]
    #[storage_mapper("shareSymbol")]
    fn share_symbol(&self) -> SingleValueMapper<ManagedBuffer>;

    /// Blocks between the start block and the opening of the vote window.
    #[storage_mapper("votingDelay")]
    fn voting_delay(&self) -> SingleValueMapper<u64>;

    /// Length of the vote window, in blocks.
    #[storage_mapper("votingPeriod")]
    fn voting_period(&self) -> SingleValueMapper<u64>;

    /// Minimum blended funding a proposal needs to be queueable.
    #[storage_mapper("quorumShares")]
    fn quorum_shares(&self) -> SingleValueMapper<BigUint>;

    /// Seconds between queuing and the earliest redemption.
    #[storage_mapper("timelockDelay")]
    fn timelock_delay(&self) -> SingleValueMapper<u64>;

    /// Seconds after the eta during which redemption stays open.
    #[storage_mapper("gracePeriod")]
    fn grace_period(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("startBlock")]
    fn start_block(&self) -> SingleValueMapper<u64>;
}
