use std::collections::BTreeMap;

use sdk::{Address, U256};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

/// Key-value storage behind a [Ledger](crate::Ledger).
///
/// Absent keys read as zero. The store does not validate anything; every invariant is enforced
/// by the ledger before it writes.
pub trait TokenStore {
    /// `None` until the deployment mint has run.
    fn total_supply(&self) -> Option<U256>;
    fn set_total_supply(&mut self, supply: U256);

    fn balance(&self, account: &Address) -> U256;
    fn set_balance(&mut self, account: Address, amount: U256);

    fn allowance(&self, owner: &Address, spender: &Address) -> U256;
    fn set_allowance(&mut self, owner: Address, spender: Address, amount: U256);
}

/// Ordered in-memory store, serializable so a host can persist it between calls.
#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    total_supply: Option<U256>,
    balances: BTreeMap<Address, U256>,
    #[serde_as(as = "Vec<(_, _)>")]
    allowances: BTreeMap<(Address, Address), U256>, // (owner, spender)
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every account that has ever held a balance entry, zero balances included.
    pub fn balances(&self) -> impl Iterator<Item = (&Address, &U256)> {
        self.balances.iter()
    }

    pub fn allowances(&self) -> impl Iterator<Item = (&(Address, Address), &U256)> {
        self.allowances.iter()
    }
}

impl TokenStore for MemoryStore {
    fn total_supply(&self) -> Option<U256> {
        self.total_supply
    }

    fn set_total_supply(&mut self, supply: U256) {
        self.total_supply = Some(supply);
    }

    fn balance(&self, account: &Address) -> U256 {
        self.balances.get(account).copied().unwrap_or_default()
    }

    fn set_balance(&mut self, account: Address, amount: U256) {
        self.balances.insert(account, amount);
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    fn set_allowance(&mut self, owner: Address, spender: Address, amount: U256) {
        self.allowances.insert((owner, spender), amount);
    }
}
