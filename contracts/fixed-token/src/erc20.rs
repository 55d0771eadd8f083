use sdk::{Address, Event, Selector, U256};

use crate::TokenError;

/// Operations the dispatcher can route a call to.
///
/// State-changing operations return the event to signal instead of emitting it, so an
/// implementation never needs access to the host. The dispatcher forwards the event once the
/// operation has succeeded.
pub trait Erc20 {
    fn name(&self) -> String;

    fn symbol(&self) -> String;

    fn decimals(&self) -> u8;

    /// Fixed amount minted at deployment, zero before it.
    fn total_supply(&self) -> U256;

    fn balance_of(&self, owner: &Address) -> U256;

    /// Remaining amount `spender` may move out of `owner`'s balance.
    fn allowance(&self, owner: &Address, spender: &Address) -> U256;

    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// * [TokenError::ZeroAddress] if `from` or `to` is the zero address.
    /// * [TokenError::InsufficientBalance] if `from` holds less than `amount`.
    fn transfer(&mut self, from: Address, to: Address, amount: U256) -> Result<Event, TokenError>;

    /// Sets the allowance of `spender` over `owner`'s balance to exactly `amount`.
    ///
    /// Moving an allowance from one non-zero value to another lets a spender who watches for the
    /// change use both values. Callers that care reset the allowance to zero first.
    ///
    /// # Errors
    ///
    /// * [TokenError::ZeroAddress] if `owner` or `spender` is the zero address.
    fn approve(
        &mut self,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> Result<Event, TokenError>;

    /// Moves `amount` from `from` to `to`, consuming `spender`'s allowance.
    ///
    /// # Errors
    ///
    /// * [TokenError::ZeroAddress] if `from` or `to` is the zero address.
    /// * [TokenError::InsufficientAllowance] if the allowance is below `amount`. Checked before
    ///   any balance.
    /// * [TokenError::InsufficientBalance] if `from` holds less than `amount`.
    fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        spender: Address,
        amount: U256,
    ) -> Result<Event, TokenError>;

    /// Handler for selectors the dispatcher does not recognize.
    fn fallback(&mut self, selector: Selector, _calldata: &[u8]) -> Result<Vec<u8>, TokenError> {
        Err(TokenError::UnknownSelector(selector))
    }
}
