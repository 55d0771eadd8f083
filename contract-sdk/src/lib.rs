//! # Token contract SDK
//!
//! This crate contains the pieces shared by a token contract and the host that runs it:
//!
//! - [Address] and [Selector], the fixed-width identifiers found on the wire.
//! - The [codec] module, which reads call arguments and writes return values.
//! - [Event], the log records a contract hands to its host.
//! - The [Host] trait and [ExecutionContext], a host that records events in memory.
//!
//! A contract exposes two entry points to its host: a deployment hook, run once per contract
//! instance, and a call entry point that receives a `(selector, calldata)` pair. The SDK does
//! not know about either; it only provides the types both sides agree on.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use sha3::{Digest, Keccak256};

pub mod caller;
pub mod codec;
pub mod event;

pub use alloy_primitives::U256;
pub use caller::{ExecutionContext, Host};
pub use codec::{CalldataReader, CalldataWriter, CodecError};
pub use event::Event;

/// Width in bytes of an [Address] on the wire.
pub const ADDRESS_LEN: usize = 20;
/// Width in bytes of a [U256] on the wire.
pub const U256_LEN: usize = 32;
/// Width in bytes of a [Selector].
pub const SELECTOR_LEN: usize = 4;

/// Account identifier.
///
/// The all-zero value is reserved as a guard value and never names a real account.
#[serde_as]
#[derive(
    Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd,
)]
pub struct Address(#[serde_as(as = "serde_with::hex::Hex")] pub [u8; ADDRESS_LEN]);

impl Address {
    pub const ZERO: Address = Address([0u8; ADDRESS_LEN]);

    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Address(bytes)
    }

    /// True when every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Address(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl FromStr for Address {
    type Err = hex::FromHexError;

    /// Parses 40 hex characters, with or without a `0x` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(strip_hex_prefix(s), &mut bytes)?;
        Ok(Address(bytes))
    }
}

/// Method identifier: the leading four bytes of the Keccak-256 hash of a canonical signature
/// such as `transfer(address,uint256)`.
#[derive(Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selector(pub [u8; SELECTOR_LEN]);

impl Selector {
    pub const fn new(bytes: [u8; SELECTOR_LEN]) -> Self {
        Selector(bytes)
    }

    /// Derives the selector of a canonical signature.
    pub fn from_signature(signature: &str) -> Self {
        let digest = Keccak256::digest(signature.as_bytes());
        let mut bytes = [0u8; SELECTOR_LEN];
        bytes.copy_from_slice(&digest[..SELECTOR_LEN]);
        Selector(bytes)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Selector({self})")
    }
}

impl FromStr for Selector {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; SELECTOR_LEN];
        hex::decode_to_slice(strip_hex_prefix(s), &mut bytes)?;
        Ok(Selector(bytes))
    }
}

/// Shorthand for [Selector::from_signature].
pub fn encode_selector(signature: &str) -> Selector {
    Selector::from_signature(signature)
}

pub(crate) fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}
