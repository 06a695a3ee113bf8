multiversx_sc::imports!();

/// The extension surface the engine calls into for every policy
/// decision: eligibility, power computation, vote processing, quorum,
/// funding-to-shares conversion, distribution and withdrawal limits.
///
/// The default bodies implement the canonical quadratic-funding
/// strategy. A contract that inherits this module may override any
/// single hook (one-person-one-vote power, role-gated proposing, vested
/// distribution, ...) and reuse the engine unchanged.
#[multiversx_sc::module]
pub trait StrategyHooksModule:
    crate::config::ConfigModule
    + crate::power::PowerModule
    + crate::proposals::ProposalsModule
    + crate::tally::TallyModule
    + crate::vault::VaultModule
{
    /// Must be side-effect-free and reject the zero address.
    fn eligible_to_register(&self, account: &ManagedAddress) -> bool {
        !account.is_zero()
    }

    /// Canonical rule: any registered account may propose.
    fn eligible_to_propose(&self, account: &ManagedAddress) -> bool {
        self.registered().contains(account)
    }

    /// Deterministic function of the deposit; one unit of deposit buys
    /// one unit of voting power.
    fn compute_voting_power(&self, _account: &ManagedAddress, deposit: &BigUint) -> BigUint {
        deposit.clone()
    }

    /// Range check; rejects canceled and out-of-range ids.
    fn valid_proposal(&self, proposal_id: u64) -> bool {
        if proposal_id == 0 || proposal_id > self.proposal_count().get() {
            return false;
        }
        !self.proposals(proposal_id).get().canceled
    }

    /// Quadratic cost rule: a vote of weight w costs w² power. Updates
    /// the tally and returns the voter's new power, which the engine
    /// checks against the old power (power conservation).
    fn process_vote(
        &self,
        proposal_id: u64,
        _voter: &ManagedAddress,
        weight: &BigUint,
        old_power: &BigUint,
    ) -> BigUint {
        let cost = weight * weight;
        require!(&cost <= old_power, "insufficient voting power");
        self.record_vote(proposal_id, weight);
        old_power - &cost
    }

    /// Pure function of the tally: blended funding must reach the
    /// configured quorum threshold.
    fn has_quorum(&self, proposal_id: u64) -> bool {
        self.proposal_funding(proposal_id) >= self.quorum_shares().get()
    }

    /// Shares minted at queue time: the alpha-blended funding amount.
    fn funding_to_shares(&self, proposal_id: u64) -> BigUint {
        self.proposal_funding(proposal_id)
    }

    /// Stable for the life of the proposal.
    fn recipient_of(&self, proposal_id: u64) -> ManagedAddress {
        self.proposals(proposal_id).get().recipient
    }

    /// Returns true if distribution was handled here and the engine
    /// should skip its own minting. The canonical strategy never does.
    fn custom_distribution(&self, _recipient: &ManagedAddress, _shares: &BigUint) -> bool {
        false
    }

    /// Timelock and grace gate: the full share balance inside the
    /// owner's redeem window, zero strictly before and strictly after.
    fn withdraw_limit(&self, owner: &ManagedAddress) -> BigUint {
        let opens_at = self.redeemable_after(owner).get();
        if opens_at == 0 {
            return BigUint::zero();
        }
        let now = self.blockchain().get_block_timestamp();
        if now < opens_at || now > opens_at + self.grace_period().get() {
            return BigUint::zero();
        }
        self.share_balance(owner).get()
    }

    /// Called exactly once, at finalization, to fix `totalAssets`. The
    /// live balance is read here and only here, so matching funds
    /// donated before finalization are folded in atomically.
    fn total_assets_snapshot(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&self.asset().get(), 0)
    }
}
