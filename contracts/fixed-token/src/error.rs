use sdk::{CodecError, Selector};
use thiserror::Error;

/// Reasons a token entry point aborts.
///
/// Every variant is a hard failure: the host rolls back the whole call and reports the
/// `Display` text as the revert reason. No entry point reports failure through its return value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("zero address is not a valid account")]
    ZeroAddress,
    #[error("insufficient balance")]
    InsufficientBalance,
    #[error("insufficient allowance")]
    InsufficientAllowance,
    #[error("token supply already initialized")]
    AlreadyInitialized,
    #[error("token supply not initialized")]
    NotInitialized,
    #[error("unknown selector {0}")]
    UnknownSelector(Selector),
    #[error("arithmetic overflow")]
    Overflow,
    #[error("malformed calldata: {0}")]
    MalformedCalldata(#[from] CodecError),
}
