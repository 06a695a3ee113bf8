multiversx_sc::imports!();

// ============================================================
// Pure conversion math
// ============================================================

/// Floor-rounding share → asset conversion. An empty vault trades 1:1.
pub fn shares_to_assets<M: ManagedTypeApi>(
    shares: &BigUint<M>,
    total_assets: &BigUint<M>,
    total_supply: &BigUint<M>,
) -> BigUint<M> {
    if *total_supply == 0u64 {
        return shares.clone();
    }
    shares * total_assets / total_supply
}

/// Floor-rounding asset → share conversion. An empty vault trades 1:1.
pub fn assets_to_shares<M: ManagedTypeApi>(
    assets: &BigUint<M>,
    total_assets: &BigUint<M>,
    total_supply: &BigUint<M>,
) -> BigUint<M> {
    if *total_supply == 0u64 || *total_assets == 0u64 {
        return assets.clone();
    }
    assets * total_supply / total_assets
}

// ============================================================
// Vault module
// ============================================================

/// The claim-share ledger: balances, allowances, total supply and the
/// tracked `totalAssets` counter.
///
/// `totalAssets` is deliberately NOT a live balance read. It is set once
/// at finalization and decremented on redemption, and nothing else may
/// change it. Conversion math on a live balance would let anyone inflate
/// the exchange rate by transferring assets straight to the contract.
#[multiversx_sc::module]
pub trait VaultModule {
    fn mint_shares(&self, to: &ManagedAddress, amount: &BigUint) {
        self.share_balance(to).update(|b| *b += amount);
        self.total_supply().update(|t| *t += amount);
        self.share_transfer_event(&ManagedAddress::zero(), to, amount);
    }

    fn burn_shares(&self, from: &ManagedAddress, amount: &BigUint) {
        self.share_balance(from).update(|b| {
            require!(&*b >= amount, "insufficient shares");
            *b -= amount;
        });
        self.total_supply().update(|t| *t -= amount);
        self.share_transfer_event(from, &ManagedAddress::zero(), amount);
    }

    fn spend_allowance(&self, owner: &ManagedAddress, spender: &ManagedAddress, amount: &BigUint) {
        self.share_allowance(owner, spender).update(|a| {
            require!(&*a >= amount, "insufficient allowance");
            *a -= amount;
        });
    }

    // ========================================================
    // ENDPOINTS — share transfers
    // ========================================================

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(!to.is_zero(), "transfer to the zero address");
        self.share_balance(&caller).update(|b| {
            require!(&*b >= &amount, "insufficient shares");
            *b -= &amount;
        });
        self.share_balance(&to).update(|b| *b += &amount);
        self.share_transfer_event(&caller, &to, &amount);
    }

    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(!spender.is_zero(), "approve to the zero address");
        self.share_allowance(&caller, &spender).set(&amount);
        self.share_approval_event(&caller, &spender, &amount);
    }

    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(!to.is_zero(), "transfer to the zero address");
        self.spend_allowance(&from, &caller, &amount);
        self.share_balance(&from).update(|b| {
            require!(&*b >= &amount, "insufficient shares");
            *b -= &amount;
        });
        self.share_balance(&to).update(|b| *b += &amount);
        self.share_transfer_event(&from, &to, &amount);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(sharesToAssets)]
    fn shares_to_assets_view(&self, shares: BigUint) -> BigUint {
        shares_to_assets(&shares, &self.total_assets().get(), &self.total_supply().get())
    }

    #[view(assetsToShares)]
    fn assets_to_shares_view(&self, assets: BigUint) -> BigUint {
        assets_to_shares(&assets, &self.total_assets().get(), &self.total_supply().get())
    }

    /// Assets per 10^18 shares at the current exchange rate.
    #[view(getSharePrice)]
    fn get_share_price(&self) -> BigUint {
        let unit = BigUint::from(10u64.pow(18));
        shares_to_assets(&unit, &self.total_assets().get(), &self.total_supply().get())
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("shareTransfer")]
    fn share_transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("shareApproval")]
    fn share_approval_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] spender: &ManagedAddress,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getShareBalance)]
    #[storage_mapper("shareBalance")]
    fn share_balance(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getShareAllowance)]
    #[storage_mapper("shareAllowance")]
    fn share_allowance(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    #[view(getTotalSupply)]
    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    /// Tracked asset counter. Fixed at finalization, reduced on
    /// redemption, never read from the live balance in conversion math.
    #[view(getTotalAssets)]
    #[storage_mapper("totalAssets")]
    fn total_assets(&self) -> SingleValueMapper<BigUint>;

    /// Start of the owner's redeem window; 0 if never a queue recipient.
    #[view(getRedeemableAfter)]
    #[storage_mapper("redeemableAfter")]
    fn redeemable_after(&self, owner: &ManagedAddress) -> SingleValueMapper<u64>;
}
