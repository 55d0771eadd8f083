use std::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::{codec::CalldataWriter, Address, ADDRESS_LEN, U256_LEN};

/// Log record emitted by a token contract.
///
/// Both variants encode as `address || address || uint256`, fixed widths, in field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Tokens moved between accounts. A `from` of [Address::ZERO] marks the deployment mint.
    Transfer {
        from: Address,
        to: Address,
        amount: U256,
    },
    Approval {
        owner: Address,
        spender: Address,
        amount: U256,
    },
}

impl Event {
    pub const ENCODED_LEN: usize = 2 * ADDRESS_LEN + U256_LEN;

    pub fn encode(&self) -> Vec<u8> {
        let (first, second, amount) = match self {
            Event::Transfer { from, to, amount } => (from, to, amount),
            Event::Approval {
                owner,
                spender,
                amount,
            } => (owner, spender, amount),
        };
        let mut writer = CalldataWriter::new();
        writer
            .write_address(first)
            .write_address(second)
            .write_u256(amount);
        writer.into_bytes()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Transfer { from, to, amount } => {
                write!(f, "Transfer(from={from}, to={to}, amount={amount})")
            }
            Event::Approval {
                owner,
                spender,
                amount,
            } => write!(
                f,
                "Approval(owner={owner}, spender={spender}, amount={amount})"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CalldataReader;

    #[test]
    fn test_transfer_encoding_layout() {
        let event = Event::Transfer {
            from: Address::ZERO,
            to: Address([7; ADDRESS_LEN]),
            amount: U256::from(42u64),
        };
        let bytes = event.encode();
        assert_eq!(bytes.len(), Event::ENCODED_LEN);

        let mut reader = CalldataReader::new(&bytes);
        assert_eq!(reader.read_address().unwrap(), Address::ZERO);
        assert_eq!(reader.read_address().unwrap(), Address([7; ADDRESS_LEN]));
        assert_eq!(reader.read_u256().unwrap(), U256::from(42u64));
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_approval_encoding_order() {
        let owner = Address([1; ADDRESS_LEN]);
        let spender = Address([2; ADDRESS_LEN]);
        let event = Event::Approval {
            owner,
            spender,
            amount: U256::MAX,
        };
        let bytes = event.encode();
        assert_eq!(&bytes[..ADDRESS_LEN], owner.as_bytes());
        assert_eq!(&bytes[ADDRESS_LEN..2 * ADDRESS_LEN], spender.as_bytes());
        assert!(bytes[2 * ADDRESS_LEN..].iter().all(|b| *b == 0xff));
    }

    #[test]
    fn test_display() {
        let event = Event::Transfer {
            from: Address::ZERO,
            to: Address::ZERO,
            amount: U256::from(5u64),
        };
        assert_eq!(
            event.to_string(),
            format!("Transfer(from={0}, to={0}, amount=5)", Address::ZERO)
        );
    }
}
