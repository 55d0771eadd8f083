//! # Fixed-supply token
//!
//! A fungible token whose entire supply is minted once, to the deployer, when the contract is
//! deployed. Afterwards the only state changes are transfers and allowances; there is no mint,
//! no burn and no privileged account.
//!
//! The host talks to the contract through two separate entry points:
//!
//! - [deploy], run once per contract instance. It turns an empty store into an active [Ledger].
//! - [call], run for every external call. It routes a selector to the matching [Erc20]
//!   operation through the [dispatcher]. No selector reaches the deployment mint.
//!
//! ```
//! use fixed_token::{call, deploy, fixed_supply, MemoryStore, TokenCall};
//! use sdk::{Address, ExecutionContext};
//!
//! let deployer = Address([1; 20]);
//! let mut ctx = ExecutionContext::new(deployer);
//! let mut token = deploy(MemoryStore::new(), &mut ctx, &[]).unwrap();
//!
//! let (selector, calldata) = TokenCall::BalanceOf { owner: deployer }.encode();
//! let output = call(&mut token, &mut ctx, selector, &calldata).unwrap();
//! assert_eq!(output, fixed_supply().to_be_bytes::<32>().to_vec());
//! ```

use sdk::{Host, Selector, U256};
use tracing::info;

pub mod call;
pub mod dispatcher;
pub mod erc20;
pub mod error;
pub mod ledger;
pub mod store;

pub use call::{CallOutput, TokenCall};
pub use erc20::Erc20;
pub use error::TokenError;
pub use ledger::Ledger;
pub use store::{MemoryStore, TokenStore};

pub const NAME: &str = "Fixed Supply Token";
pub const SYMBOL: &str = "FST";
pub const DECIMALS: u8 = 18;
/// Supply in whole tokens, before scaling by [DECIMALS].
pub const SUPPLY_WHOLE_TOKENS: u64 = 21_000_000;

/// The amount minted at deployment: `21_000_000 * 10^18` base units.
pub fn fixed_supply() -> U256 {
    U256::from(SUPPLY_WHOLE_TOKENS) * U256::from(10u64).pow(U256::from(DECIMALS))
}

/// Deployment hook. The host runs it exactly once per contract instance.
///
/// Mints [fixed_supply] to the host's current caller and emits the matching `Transfer` event
/// from the zero address. The deployment input is accepted for interface compatibility and
/// ignored.
///
/// # Errors
///
/// * [TokenError::AlreadyInitialized] if `store` has already been deployed.
/// * [TokenError::ZeroAddress] if the caller is the zero address.
pub fn deploy<S, H>(store: S, host: &mut H, _input: &[u8]) -> Result<Ledger<S>, TokenError>
where
    S: TokenStore,
    H: Host + ?Sized,
{
    let deployer = host.caller();
    let mut ledger = Ledger::uninitialized(store);
    let event = ledger.initialize_supply(deployer, fixed_supply())?;
    host.emit(event);

    info!(%deployer, supply = %fixed_supply(), "{} deployed", SYMBOL);
    Ok(ledger)
}

/// Call entry point: dispatches `selector` with `calldata` on behalf of the host's caller.
pub fn call<S, H>(
    ledger: &mut Ledger<S>,
    host: &mut H,
    selector: Selector,
    calldata: &[u8],
) -> Result<Vec<u8>, TokenError>
where
    S: TokenStore,
    H: Host + ?Sized,
{
    dispatcher::dispatch(ledger, host, selector, calldata)
}
