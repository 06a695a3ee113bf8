#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod fund_proxy;
pub mod hooks;
pub mod power;
pub mod proposals;
pub mod tally;
pub mod types;
pub mod vault;

use types::{Proposal, ProposalState};

// ============================================================
// Constants
// ============================================================

/// Proposal descriptions are free text, 1..=1000 bytes.
const MAX_DESCRIPTION_LEN: usize = 1_000;

/// Basis points denominator for the redeem loss tolerance.
const BPS_DENOMINATOR: u64 = 10_000;

// ============================================================
// Contract
// ============================================================

/// A programmable allocation mechanism: depositors register voting
/// power, create funding proposals, vote under a quadratic cost rule,
/// and the resulting tallies are converted into tokenized claims on the
/// pooled assets, gated by quorum, a timelock and a grace period.
#[multiversx_sc::contract]
pub trait QuadraticFund:
    config::ConfigModule
    + power::PowerModule
    + proposals::ProposalsModule
    + tally::TallyModule
    + vault::VaultModule
    + hooks::StrategyHooksModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        share_name: ManagedBuffer,
        share_symbol: ManagedBuffer,
        voting_delay: u64,
        voting_period: u64,
        quorum_shares: BigUint,
        timelock_delay: u64,
        grace_period: u64,
        start_block: u64,
    ) {
        require!(asset.is_valid(), "invalid asset");
        require!(!share_name.is_empty(), "empty name");
        require!(!share_symbol.is_empty(), "empty symbol");
        require!(voting_delay > 0, "zero voting delay");
        require!(voting_period > 0, "zero voting period");
        require!(quorum_shares > 0u64, "zero quorum");
        require!(timelock_delay > 0, "zero timelock delay");
        require!(grace_period > 0, "zero grace period");
        require!(start_block > 0, "zero start block");

        self.asset().set(&asset);
        self.share_name().set(&share_name);
        self.share_symbol().set(&share_symbol);
        self.voting_delay().set(voting_delay);
        self.voting_period().set(voting_period);
        self.quorum_shares().set(&quorum_shares);
        self.timelock_delay().set(timelock_delay);
        self.grace_period().set(grace_period);
        self.start_block().set(start_block);

        // Pure quadratic funding until the owner blends it down.
        self.alpha_num().set(BigUint::from(1u32));
        self.alpha_den().set(BigUint::from(1u32));
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: register
    // One-time registration; the attached payment is the deposit
    // that buys voting power.
    // ========================================================

    #[endpoint(register)]
    #[payable("*")]
    fn register(&self) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_or_single_esdt();
        if payment.amount > 0u64 {
            require!(
                payment.token_identifier == self.asset().get() && payment.token_nonce == 0,
                "wrong payment token"
            );
        }
        let deposit = payment.amount;

        require!(
            self.blockchain().get_block_nonce() <= self.voting_end_block(),
            "registration closed"
        );
        require!(!self.registered().contains(&caller), "already registered");
        require!(deposit <= self.max_safe_value(), "deposit too large");
        require!(
            self.eligible_to_register(&caller),
            "not eligible to register"
        );

        let power = self.compute_voting_power(&caller, &deposit);
        require!(power <= self.max_safe_value(), "power overflow");

        self.voting_power(&caller).set(&power);
        self.registered().insert(caller.clone());
        if deposit > 0u64 {
            self.total_deposits().update(|t| *t += &deposit);
        }

        self.register_event(&caller, &deposit, &power);
    }

    // ========================================================
    // ENDPOINT: propose
    // ========================================================

    #[endpoint(propose)]
    fn propose(&self, recipient: ManagedAddress, description: ManagedBuffer) -> u64 {
        let caller = self.blockchain().get_caller();
        require!(
            self.blockchain().get_block_nonce() <= self.voting_end_block(),
            "proposal window closed"
        );
        require!(
            self.eligible_to_propose(&caller),
            "not eligible to propose"
        );
        require!(!recipient.is_zero(), "recipient is the zero address");
        require!(
            !self.used_recipients().contains(&recipient),
            "recipient already used"
        );
        let len = description.len();
        require!(
            len >= 1 && len <= MAX_DESCRIPTION_LEN,
            "invalid description length"
        );

        let proposal_id = self.next_proposal_id();
        let proposal = Proposal {
            id: proposal_id,
            proposer: caller.clone(),
            recipient: recipient.clone(),
            description: description.clone(),
            canceled: false,
            claimed: false,
            eta: 0u64,
        };
        self.proposals(proposal_id).set(&proposal);
        self.used_recipients().insert(recipient.clone());

        self.proposal_created_event(proposal_id, &caller, &recipient, &description);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: cancelProposal
    // Proposer only; permanent; a canceled proposal can never be
    // queued.
    // ========================================================

    #[endpoint(cancelProposal)]
    fn cancel_proposal(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        require!(!self.proposals(proposal_id).is_empty(), "unknown proposal");

        let mut proposal = self.proposals(proposal_id).get();
        require!(proposal.proposer == caller, "only proposer can cancel");
        require!(!proposal.canceled, "already canceled");
        require!(proposal.eta == 0, "already queued");

        proposal.canceled = true;
        self.proposals(proposal_id).set(&proposal);

        self.proposal_canceled_event(proposal_id, &caller);
    }

    // ========================================================
    // ENDPOINT: vote
    // Weight-w vote on a proposal; the strategy hook charges w²
    // power and folds the weight into the tally.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, weight: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(!self.proposals(proposal_id).is_empty(), "unknown proposal");
        require!(self.valid_proposal(proposal_id), "invalid proposal");
        require!(
            self.in_voting_window(self.blockchain().get_block_nonce()),
            "voting is closed"
        );
        require!(!self.tally_finalized().get(), "tally already finalized");
        require!(self.registered().contains(&caller), "not registered");
        require!(weight > 0u64, "weight must be positive");
        require!(weight <= self.max_safe_value(), "weight too large");
        require!(
            !self.has_voted(proposal_id, &caller).get(),
            "already voted"
        );

        let old_power = self.voting_power(&caller).get();
        let new_power = self.process_vote(proposal_id, &caller, &weight, &old_power);
        require!(new_power <= old_power, "power conservation violated");

        self.voting_power(&caller).set(&new_power);
        self.has_voted(proposal_id, &caller).set(true);

        self.vote_cast_event(proposal_id, &caller, &weight, &new_power);
    }

    // ========================================================
    // ENDPOINT: setAlpha
    // Owner may re-blend quadratic vs linear funding any time
    // before finalization freezes it.
    // ========================================================

    #[only_owner]
    #[endpoint(setAlpha)]
    fn set_alpha(&self, numerator: BigUint, denominator: BigUint) {
        require!(denominator > 0u64, "zero denominator");
        require!(numerator <= denominator, "alpha above one");
        require!(!self.tally_finalized().get(), "tally already finalized");

        self.alpha_num().set(&numerator);
        self.alpha_den().set(&denominator);

        self.alpha_set_event(&numerator, &denominator);
    }

    // ========================================================
    // ENDPOINT: applyOptimalAlpha
    // Solves for the alpha that balances the matching pool (assets
    // held beyond deposits) against total funding, and applies it.
    // ========================================================

    #[only_owner]
    #[endpoint(applyOptimalAlpha)]
    fn apply_optimal_alpha(&self) {
        require!(!self.tally_finalized().get(), "tally already finalized");

        // Everything the contract holds beyond deposits is matching
        // funds, so available = deposits + matching = live balance.
        let balance = self
            .blockchain()
            .get_sc_balance(&self.asset().get(), 0);
        let deposits = self.total_deposits().get();
        let available = if balance > deposits { balance } else { deposits };

        let (numerator, denominator) = tally::optimal_alpha(
            &available,
            &self.total_quadratic_sum().get(),
            &self.total_linear_sum().get(),
        );
        self.alpha_num().set(&numerator);
        self.alpha_den().set(&denominator);

        self.alpha_set_event(&numerator, &denominator);
    }

    // ========================================================
    // ENDPOINT: finalizeTally
    // Owner only, after the voting window. Freezes the tally and
    // snapshots totalAssets; happens exactly once.
    // ========================================================

    #[only_owner]
    #[endpoint(finalizeTally)]
    fn finalize_tally(&self) {
        require!(
            self.blockchain().get_block_nonce() > self.voting_end_block(),
            "voting period has not ended"
        );
        require!(!self.tally_finalized().get(), "tally already finalized");

        self.tally_finalized().set(true);
        let snapshot = self.total_assets_snapshot();
        self.total_assets().set(&snapshot);

        self.tally_finalized_event(&snapshot);
    }

    // ========================================================
    // ENDPOINT: queueProposal
    // Permissionless. Mints the blended funding amount as claim
    // shares to the recipient and opens its timelock window. Each
    // proposal can be queued at most once.
    // ========================================================

    #[endpoint(queueProposal)]
    fn queue_proposal(&self, proposal_id: u64) {
        require!(!self.proposals(proposal_id).is_empty(), "unknown proposal");
        require!(self.tally_finalized().get(), "tally not finalized");

        let mut proposal = self.proposals(proposal_id).get();
        require!(!proposal.canceled, "already canceled");
        require!(proposal.eta == 0, "already queued");
        require!(self.has_quorum(proposal_id), "quorum not reached");

        let shares = self.funding_to_shares(proposal_id);
        let eta = self.blockchain().get_block_timestamp() + self.timelock_delay().get();
        proposal.eta = eta;
        proposal.claimed = true;
        self.proposals(proposal_id).set(&proposal);

        let recipient = self.recipient_of(proposal_id);
        if !self.custom_distribution(&recipient, &shares) {
            self.mint_shares(&recipient, &shares);
            self.redeemable_after(&recipient).set(eta);
        }

        self.proposal_queued_event(proposal_id, eta, &shares);
    }

    // ========================================================
    // ENDPOINT: redeem
    // Burns claim shares for a proportional draw on the pooled
    // assets, inside the owner's timelock/grace window.
    // ========================================================

    #[endpoint(redeem)]
    fn redeem(
        &self,
        shares: BigUint,
        receiver: ManagedAddress,
        owner: ManagedAddress,
        max_loss_bps: u64,
    ) {
        let caller = self.blockchain().get_caller();
        require!(shares > 0u64, "zero shares");
        require!(!receiver.is_zero(), "receiver is the zero address");
        if caller != owner {
            self.spend_allowance(&owner, &caller, &shares);
        }

        let limit = self.withdraw_limit(&owner);
        require!(shares <= limit, "exceeds withdraw limit");

        let total_supply = self.total_supply().get();
        let total_assets = self.total_assets().get();
        let assets = vault::shares_to_assets(&shares, &total_assets, &total_supply);
        require!(assets > 0u64, "zero assets");

        self.burn_shares(&owner, &shares);

        // Genuine shortfall handling: pay what is actually there, book
        // the full intended amount out of totalAssets, and bound the
        // difference by the caller's loss tolerance.
        let asset = self.asset().get();
        let available = self.blockchain().get_sc_balance(&asset, 0);
        let paid = if available < assets {
            available
        } else {
            assets.clone()
        };
        let loss = &assets - &paid;
        require!(
            &loss * BPS_DENOMINATOR <= &assets * max_loss_bps,
            "loss exceeds tolerance"
        );
        self.total_assets().update(|t| *t -= &assets);

        self.send().direct(&receiver, &asset, 0, &paid);

        self.redeem_event(&owner, &receiver, &shares, &paid, &loss);
    }

    // ========================================================
    // State machine — derived on read, first match wins
    // ========================================================

    #[view(getProposalState)]
    fn proposal_state(&self, proposal_id: u64) -> ProposalState {
        require!(!self.proposals(proposal_id).is_empty(), "unknown proposal");
        let proposal = self.proposals(proposal_id).get();

        if proposal.canceled {
            return ProposalState::Canceled;
        }
        let block = self.blockchain().get_block_nonce();
        if block < self.start_block().get() {
            return ProposalState::Pending;
        }
        if self.in_voting_window(block) || !self.tally_finalized().get() {
            return ProposalState::Active;
        }
        if !self.has_quorum(proposal_id) {
            return ProposalState::Defeated;
        }
        if proposal.eta == 0 {
            // Tokenized rule: finalized, quorum met, not yet queued.
            return ProposalState::Succeeded;
        }
        if proposal.claimed {
            return ProposalState::Executed;
        }
        if self.blockchain().get_block_timestamp() > proposal.eta + self.grace_period().get() {
            return ProposalState::Expired;
        }
        ProposalState::Queued
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Proposals still in flight: voting open, or quorum-passing and
    /// waiting to be queued or redeemed.
    #[view(getActiveProposals)]
    fn get_active_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        for id in 1..=total {
            match self.proposal_state(id) {
                ProposalState::Active | ProposalState::Succeeded | ProposalState::Queued => {
                    result.push(self.proposals(id).get());
                }
                _ => {}
            }
        }
        result
    }

    #[view(getMaxRedeemable)]
    fn get_max_redeemable(&self, owner: ManagedAddress) -> BigUint {
        self.withdraw_limit(&owner)
    }

    #[view(getFundStats)]
    fn get_fund_stats(&self) -> MultiValue5<BigUint, BigUint, BigUint, u64, u64> {
        let balance = self
            .blockchain()
            .get_sc_balance(&self.asset().get(), 0);
        (
            balance,
            self.total_supply().get(),
            self.total_assets().get(),
            self.get_registered_count(),
            self.proposal_count().get(),
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("register")]
    fn register_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] deposit: &BigUint,
        power: &BigUint,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] weight: &BigUint,
        remaining_power: &BigUint,
    );

    #[event("alphaSet")]
    fn alpha_set_event(&self, #[indexed] numerator: &BigUint, denominator: &BigUint);

    #[event("tallyFinalized")]
    fn tally_finalized_event(&self, total_assets: &BigUint);

    #[event("proposalQueued")]
    fn proposal_queued_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] eta: u64,
        shares: &BigUint,
    );

    #[event("redeem")]
    fn redeem_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] receiver: &ManagedAddress,
        #[indexed] shares: &BigUint,
        #[indexed] assets: &BigUint,
        loss: &BigUint,
    );
}
