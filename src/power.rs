multiversx_sc::imports!();

/// Per-account voting power bookkeeping. Registration happens at most
/// once per account, and power only ever decreases afterwards.
#[multiversx_sc::module]
pub trait PowerModule {
    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getRegisteredCount)]
    fn get_registered_count(&self) -> u64 {
        self.registered().len() as u64
    }

    #[view(hasAccountVoted)]
    fn has_account_voted(&self, proposal_id: u64, account: ManagedAddress) -> bool {
        self.has_voted(proposal_id, &account).get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    /// Remaining voting power, consumed quadratically by vote weight.
    #[view(getVotingPower)]
    #[storage_mapper("votingPower")]
    fn voting_power(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("registered")]
    fn registered(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;
}
