use sdk::{CalldataWriter, Host, Selector};
use tracing::debug;

use crate::{Erc20, TokenCall, TokenError};

/// Routes a `(selector, calldata)` pair to `token` and returns the encoded result.
///
/// Unrecognized selectors go to [Erc20::fallback]. Events returned by state-changing operations
/// are handed to `host` only after the operation succeeded.
pub fn dispatch<T, H>(
    token: &mut T,
    host: &mut H,
    selector: Selector,
    calldata: &[u8],
) -> Result<Vec<u8>, TokenError>
where
    T: Erc20 + ?Sized,
    H: Host + ?Sized,
{
    match TokenCall::decode(selector, calldata)? {
        Some(call) => execute(token, host, call),
        None => {
            debug!(%selector, "no handler for selector, using fallback");
            token.fallback(selector, calldata)
        }
    }
}

/// Runs an already decoded call on behalf of `host`'s caller.
pub fn execute<T, H>(token: &mut T, host: &mut H, call: TokenCall) -> Result<Vec<u8>, TokenError>
where
    T: Erc20 + ?Sized,
    H: Host + ?Sized,
{
    let caller = host.caller();
    debug!(%caller, call = call.signature(), mutating = call.is_mutating(), "dispatching");

    let mut output = CalldataWriter::new();
    match call {
        TokenCall::Transfer { to, amount } => {
            let event = token.transfer(caller, to, amount)?;
            host.emit(event);
            output.write_bool(true);
        }
        TokenCall::Approve { spender, amount } => {
            let event = token.approve(caller, spender, amount)?;
            host.emit(event);
            output.write_bool(true);
        }
        TokenCall::TransferFrom { from, to, amount } => {
            let event = token.transfer_from(from, to, caller, amount)?;
            host.emit(event);
            output.write_bool(true);
        }
        TokenCall::BalanceOf { owner } => {
            output.write_u256(&token.balance_of(&owner));
        }
        TokenCall::Allowance { owner, spender } => {
            output.write_u256(&token.allowance(&owner, &spender));
        }
        TokenCall::TotalSupply => {
            output.write_u256(&token.total_supply());
        }
        TokenCall::Name => {
            output.write_string(&token.name())?;
        }
        TokenCall::Symbol => {
            output.write_string(&token.symbol())?;
        }
        TokenCall::Decimals => {
            output.write_u8(token.decimals());
        }
    }
    Ok(output.into_bytes())
}
