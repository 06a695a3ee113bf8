multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal State — derived lifecycle states
// ============================================================

/// A proposal's lifecycle state. Only `canceled`, `claimed` and `eta`
/// are stored; everything else is derived from block height, tally and
/// queue status at read time.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalState {
    /// Before the configured start block.
    Pending,
    /// Voting window open, or tally not yet finalized.
    Active,
    /// Proposer cancelled. Terminal; never queueable.
    Canceled,
    /// Tally finalized without reaching quorum. Terminal.
    Defeated,
    /// Quorum reached, not yet queued.
    Succeeded,
    /// Queued with an eta, claim shares not yet minted.
    Queued,
    /// Grace period elapsed after the eta. Terminal; never redeemable.
    Expired,
    /// Claim shares minted. Terminal.
    Executed,
}

// ============================================================
// Proposal — the core funding record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    /// Unique for the lifetime of the mechanism, even across cancellations.
    pub recipient: ManagedAddress<M>,
    pub description: ManagedBuffer<M>,
    pub canceled: bool,
    /// Set when claim shares are minted at queue time.
    pub claimed: bool,
    /// Earliest redeemable timestamp; 0 until queued, then fixed forever.
    pub eta: u64,
}
