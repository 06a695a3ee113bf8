multiversx_sc::imports!();

use crate::types::Proposal;

/// Proposal storage: monotonic identifiers starting at 1, the lifetime
/// recipient-uniqueness set, and the per-proposal events. Lifecycle
/// decisions live with the engine; this module only owns the records.
#[multiversx_sc::module]
pub trait ProposalsModule {
    fn next_proposal_id(&self) -> u64 {
        let id = self.proposal_count().get() + 1u64;
        self.proposal_count().set(id);
        id
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, id: u64) -> Proposal<Self::Api> {
        require!(!self.proposals(id).is_empty(), "unknown proposal");
        self.proposals(id).get()
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        if count == 0 {
            return result;
        }
        let total = self.proposal_count().get();
        if total == 0 {
            return result;
        }
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for i in start..=end {
            result.push(self.proposals(i).get());
        }
        result
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] recipient: &ManagedAddress,
        description: &ManagedBuffer,
    );

    #[event("proposalCanceled")]
    fn proposal_canceled_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getProposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    /// Every recipient ever targeted, including by proposals that were
    /// later canceled or defeated. A recipient is never reused.
    #[storage_mapper("usedRecipients")]
    fn used_recipients(&self) -> UnorderedSetMapper<ManagedAddress>;
}
