use sdk::{Address, Event, U256};
use tracing::debug;

use crate::{Erc20, TokenError, TokenStore, DECIMALS, NAME, SYMBOL};

/// Balance and allowance bookkeeping over a [TokenStore].
///
/// A `Ledger` handed out by this crate is always active: [crate::deploy] builds one from an
/// empty store and [Ledger::open] only accepts a store that has been deployed. Every operation
/// validates and computes all new values before writing any of them, so a failed operation
/// leaves the store as it found it.
#[derive(Debug, Clone)]
pub struct Ledger<S> {
    store: S,
}

impl<S: TokenStore> Ledger<S> {
    /// Wraps a store whose deployment may not have run yet. Only the deployment hook does this.
    pub(crate) fn uninitialized(store: S) -> Self {
        Ledger { store }
    }

    /// Wraps an already deployed store.
    pub fn open(store: S) -> Result<Self, TokenError> {
        if store.total_supply().is_none() {
            return Err(TokenError::NotInitialized);
        }
        Ok(Ledger { store })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Mints the entire supply to `deployer`. Succeeds once per store.
    pub fn initialize_supply(
        &mut self,
        deployer: Address,
        total_supply: U256,
    ) -> Result<Event, TokenError> {
        if self.store.total_supply().is_some() {
            return Err(TokenError::AlreadyInitialized);
        }
        if deployer.is_zero() {
            return Err(TokenError::ZeroAddress);
        }
        let credited = self
            .store
            .balance(&deployer)
            .checked_add(total_supply)
            .ok_or(TokenError::Overflow)?;

        self.store.set_total_supply(total_supply);
        self.store.set_balance(deployer, credited);

        debug!(%deployer, %total_supply, "supply initialized");
        Ok(Event::Transfer {
            from: Address::ZERO,
            to: deployer,
            amount: total_supply,
        })
    }

    /// Consumes `amount` of `spender`'s allowance over `owner`'s balance.
    pub fn spend_allowance(
        &mut self,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        let remaining = self.remaining_allowance(&owner, &spender, amount)?;
        self.store.set_allowance(owner, spender, remaining);
        Ok(())
    }

    fn remaining_allowance(
        &self,
        owner: &Address,
        spender: &Address,
        amount: U256,
    ) -> Result<U256, TokenError> {
        self.store
            .allowance(owner, spender)
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientAllowance)
    }

    /// New balances of `from` and `to` after moving `amount`, without writing them.
    fn plan_transfer(
        &self,
        from: &Address,
        to: &Address,
        amount: U256,
    ) -> Result<[(Address, U256); 2], TokenError> {
        let from_balance = self.store.balance(from);
        let debited = from_balance
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientBalance)?;
        if from == to {
            return Ok([(*from, from_balance), (*to, from_balance)]);
        }
        let credited = self
            .store
            .balance(to)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        Ok([(*from, debited), (*to, credited)])
    }

    fn apply_balances(&mut self, updates: [(Address, U256); 2]) {
        for (account, balance) in updates {
            self.store.set_balance(account, balance);
        }
    }
}

impl<S: TokenStore> Erc20 for Ledger<S> {
    fn name(&self) -> String {
        NAME.to_string()
    }

    fn symbol(&self) -> String {
        SYMBOL.to_string()
    }

    fn decimals(&self) -> u8 {
        DECIMALS
    }

    fn total_supply(&self) -> U256 {
        self.store.total_supply().unwrap_or_default()
    }

    fn balance_of(&self, owner: &Address) -> U256 {
        self.store.balance(owner)
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        self.store.allowance(owner, spender)
    }

    fn transfer(&mut self, from: Address, to: Address, amount: U256) -> Result<Event, TokenError> {
        if from.is_zero() || to.is_zero() {
            return Err(TokenError::ZeroAddress);
        }
        let updates = self.plan_transfer(&from, &to, amount)?;
        self.apply_balances(updates);

        debug!(%from, %to, %amount, "transfer");
        Ok(Event::Transfer { from, to, amount })
    }

    fn approve(
        &mut self,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> Result<Event, TokenError> {
        if owner.is_zero() || spender.is_zero() {
            return Err(TokenError::ZeroAddress);
        }
        self.store.set_allowance(owner, spender, amount);

        debug!(%owner, %spender, %amount, "approve");
        Ok(Event::Approval {
            owner,
            spender,
            amount,
        })
    }

    fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        spender: Address,
        amount: U256,
    ) -> Result<Event, TokenError> {
        if from.is_zero() || to.is_zero() {
            return Err(TokenError::ZeroAddress);
        }
        // Allowance is checked before the balance.
        let remaining = self.remaining_allowance(&from, &spender, amount)?;
        let updates = self.plan_transfer(&from, &to, amount)?;

        self.store.set_allowance(from, spender, remaining);
        self.apply_balances(updates);

        debug!(%from, %to, %spender, %amount, "transfer_from");
        Ok(Event::Transfer { from, to, amount })
    }
}
