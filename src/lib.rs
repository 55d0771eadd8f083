//! # tokenrun
//!
//! Local host for the [fixed_token] contract. It keeps the contract's store in a JSON file,
//! supplies the caller of each call and enforces the all-or-nothing transaction boundary the
//! contract relies on: a call that returns an error leaves neither state changes nor events.
//!
//! The contract itself lives in `contracts/fixed-token`, and the types it shares with any host
//! (addresses, selectors, the call codec and events) in `contract-sdk`.

pub mod runtime;
pub mod utils;
