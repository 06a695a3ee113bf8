multiversx_sc::imports!();

// ============================================================
// Pure funding math
// ============================================================

/// Alpha-blended funding for one proposal:
/// `(num·weightSum² + (den−num)·costSum) / den`.
///
/// `num/den` must be a fraction in [0, 1]. At num = den this is pure
/// quadratic funding (`weightSum²`); at num = 0 it is pure linear
/// funding (`costSum`). Integer arithmetic only, floor division last.
pub fn blended_funding<M: ManagedTypeApi>(
    alpha_num: &BigUint<M>,
    alpha_den: &BigUint<M>,
    weight_sum: &BigUint<M>,
    cost_sum: &BigUint<M>,
) -> BigUint<M> {
    let quadratic = weight_sum * weight_sum;
    let blended = alpha_num * &quadratic + (alpha_den - alpha_num) * cost_sum;
    blended / alpha_den.clone()
}

/// Solves for the alpha that makes total funding exactly equal to the
/// available assets:
///
/// `α = (available − totalLinear) / (totalQuadratic − totalLinear)`
///
/// clamped to [0, 1]. Returns an exact (numerator, denominator) pair so
/// downstream share minting stays an integer ratio.
pub fn optimal_alpha<M: ManagedTypeApi>(
    available_assets: &BigUint<M>,
    total_quadratic: &BigUint<M>,
    total_linear: &BigUint<M>,
) -> (BigUint<M>, BigUint<M>) {
    let one = BigUint::from(1u32);
    // No quadratic advantage, or not even the contributions are covered.
    if total_quadratic <= total_linear || available_assets <= total_linear {
        return (BigUint::zero(), one);
    }
    if available_assets >= total_quadratic {
        return (one.clone(), one);
    }
    (
        available_assets - total_linear,
        total_quadratic - total_linear,
    )
}

// ============================================================
// Tally module
// ============================================================

/// Quadratic-funding accumulators. Per-proposal `weightSum`/`costSum`
/// and the global sums are maintained incrementally, O(1) per vote —
/// never recomputed from historical votes.
#[multiversx_sc::module]
pub trait TallyModule {
    /// Folds one accepted vote of `weight` into the per-proposal and
    /// global accumulators.
    fn record_vote(&self, proposal_id: u64, weight: &BigUint) {
        let cost = weight * weight;
        let old_weight_sum = self.weight_sum(proposal_id).get();
        let new_weight_sum = &old_weight_sum + weight;

        self.weight_sum(proposal_id).set(&new_weight_sum);
        self.cost_sum(proposal_id).update(|c| *c += &cost);
        self.total_linear_sum().update(|t| *t += &cost);

        // totalQuadraticSum tracks Σ weightSum², so replace this
        // proposal's old square with the new one.
        let old_quadratic = &old_weight_sum * &old_weight_sum;
        let new_quadratic = &new_weight_sum * &new_weight_sum;
        self.total_quadratic_sum().update(|t| {
            *t -= &old_quadratic;
            *t += &new_quadratic;
        });
    }

    /// Blended funding for one proposal at the current alpha.
    fn proposal_funding(&self, proposal_id: u64) -> BigUint {
        blended_funding(
            &self.alpha_num().get(),
            &self.alpha_den().get(),
            &self.weight_sum(proposal_id).get(),
            &self.cost_sum(proposal_id).get(),
        )
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Weight sum, cost sum and blended funding for a proposal.
    #[view(getTally)]
    fn get_tally(&self, proposal_id: u64) -> MultiValue3<BigUint, BigUint, BigUint> {
        (
            self.weight_sum(proposal_id).get(),
            self.cost_sum(proposal_id).get(),
            self.proposal_funding(proposal_id),
        )
            .into()
    }

    #[view(getAlpha)]
    fn get_alpha(&self) -> MultiValue2<BigUint, BigUint> {
        (self.alpha_num().get(), self.alpha_den().get()).into()
    }

    /// The alpha that would balance the given matching pool against the
    /// deposits collected so far. Read-only; see `applyOptimalAlpha`.
    #[view(solveOptimalAlpha)]
    fn solve_optimal_alpha(&self, matching_pool: BigUint) -> MultiValue2<BigUint, BigUint> {
        let available = self.total_deposits().get() + matching_pool;
        optimal_alpha(
            &available,
            &self.total_quadratic_sum().get(),
            &self.total_linear_sum().get(),
        )
        .into()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    /// Σ of accepted vote weights per proposal.
    #[storage_mapper("weightSum")]
    fn weight_sum(&self, proposal_id: u64) -> SingleValueMapper<BigUint>;

    /// Σ of per-vote costs (Σ weight²) per proposal.
    #[storage_mapper("costSum")]
    fn cost_sum(&self, proposal_id: u64) -> SingleValueMapper<BigUint>;

    /// Σ over all proposals of weightSum².
    #[view(getTotalQuadraticSum)]
    #[storage_mapper("totalQuadraticSum")]
    fn total_quadratic_sum(&self) -> SingleValueMapper<BigUint>;

    /// Σ over all proposals of costSum.
    #[view(getTotalLinearSum)]
    #[storage_mapper("totalLinearSum")]
    fn total_linear_sum(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("alphaNum")]
    fn alpha_num(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("alphaDen")]
    fn alpha_den(&self) -> SingleValueMapper<BigUint>;

    #[view(isTallyFinalized)]
    #[storage_mapper("tallyFinalized")]
    fn tally_finalized(&self) -> SingleValueMapper<bool>;

    /// Total underlying-asset deposits pulled in at registration. Input
    /// to the optimal-alpha solver.
    #[view(getTotalDeposits)]
    #[storage_mapper("totalDeposits")]
    fn total_deposits(&self) -> SingleValueMapper<BigUint>;
}
