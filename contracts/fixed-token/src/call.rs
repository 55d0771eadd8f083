use std::fmt;

use sdk::{Address, CalldataReader, CalldataWriter, CodecError, Selector, U256};

/// Selectors of the recognized methods, `keccak256(signature)[..4]`.
pub mod selectors {
    use sdk::Selector;

    pub const TRANSFER: Selector = Selector::new([0xa9, 0x05, 0x9c, 0xbb]);
    pub const APPROVE: Selector = Selector::new([0x09, 0x5e, 0xa7, 0xb3]);
    pub const TRANSFER_FROM: Selector = Selector::new([0x23, 0xb8, 0x72, 0xdd]);
    pub const BALANCE_OF: Selector = Selector::new([0x70, 0xa0, 0x82, 0x31]);
    pub const ALLOWANCE: Selector = Selector::new([0xdd, 0x62, 0xed, 0x3e]);
    pub const TOTAL_SUPPLY: Selector = Selector::new([0x18, 0x16, 0x0d, 0xdd]);
    pub const NAME: Selector = Selector::new([0x06, 0xfd, 0xde, 0x03]);
    pub const SYMBOL: Selector = Selector::new([0x95, 0xd8, 0x9b, 0x41]);
    pub const DECIMALS: Selector = Selector::new([0x31, 0x3c, 0xe5, 0x67]);
}

/// A decoded inbound call. The caller is not part of the call; the host supplies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenCall {
    Transfer {
        to: Address,
        amount: U256,
    },
    Approve {
        spender: Address,
        amount: U256,
    },
    TransferFrom {
        from: Address,
        to: Address,
        amount: U256,
    },
    BalanceOf {
        owner: Address,
    },
    Allowance {
        owner: Address,
        spender: Address,
    },
    TotalSupply,
    Name,
    Symbol,
    Decimals,
}

impl TokenCall {
    pub fn signature(&self) -> &'static str {
        match self {
            TokenCall::Transfer { .. } => "transfer(address,uint256)",
            TokenCall::Approve { .. } => "approve(address,uint256)",
            TokenCall::TransferFrom { .. } => "transferFrom(address,address,uint256)",
            TokenCall::BalanceOf { .. } => "balanceOf(address)",
            TokenCall::Allowance { .. } => "allowance(address,address)",
            TokenCall::TotalSupply => "totalSupply()",
            TokenCall::Name => "name()",
            TokenCall::Symbol => "symbol()",
            TokenCall::Decimals => "decimals()",
        }
    }

    pub fn selector(&self) -> Selector {
        match self {
            TokenCall::Transfer { .. } => selectors::TRANSFER,
            TokenCall::Approve { .. } => selectors::APPROVE,
            TokenCall::TransferFrom { .. } => selectors::TRANSFER_FROM,
            TokenCall::BalanceOf { .. } => selectors::BALANCE_OF,
            TokenCall::Allowance { .. } => selectors::ALLOWANCE,
            TokenCall::TotalSupply => selectors::TOTAL_SUPPLY,
            TokenCall::Name => selectors::NAME,
            TokenCall::Symbol => selectors::SYMBOL,
            TokenCall::Decimals => selectors::DECIMALS,
        }
    }

    /// True for calls that may change state and emit events.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            TokenCall::Transfer { .. } | TokenCall::Approve { .. } | TokenCall::TransferFrom { .. }
        )
    }

    /// Decodes the arguments of a recognized selector.
    ///
    /// Returns `Ok(None)` when the selector is not one of [selectors]. Arguments are read in
    /// declared order; bytes left after the last argument are ignored.
    pub fn decode(selector: Selector, calldata: &[u8]) -> Result<Option<TokenCall>, CodecError> {
        let mut reader = CalldataReader::new(calldata);
        let call = match selector {
            selectors::TRANSFER => TokenCall::Transfer {
                to: reader.read_address()?,
                amount: reader.read_u256()?,
            },
            selectors::APPROVE => TokenCall::Approve {
                spender: reader.read_address()?,
                amount: reader.read_u256()?,
            },
            selectors::TRANSFER_FROM => TokenCall::TransferFrom {
                from: reader.read_address()?,
                to: reader.read_address()?,
                amount: reader.read_u256()?,
            },
            selectors::BALANCE_OF => TokenCall::BalanceOf {
                owner: reader.read_address()?,
            },
            selectors::ALLOWANCE => TokenCall::Allowance {
                owner: reader.read_address()?,
                spender: reader.read_address()?,
            },
            selectors::TOTAL_SUPPLY => TokenCall::TotalSupply,
            selectors::NAME => TokenCall::Name,
            selectors::SYMBOL => TokenCall::Symbol,
            selectors::DECIMALS => TokenCall::Decimals,
            _ => return Ok(None),
        };
        Ok(Some(call))
    }

    /// Selector and calldata for this call.
    pub fn encode(&self) -> (Selector, Vec<u8>) {
        let mut writer = CalldataWriter::new();
        match self {
            TokenCall::Transfer { to, amount } => {
                writer.write_address(to).write_u256(amount);
            }
            TokenCall::Approve { spender, amount } => {
                writer.write_address(spender).write_u256(amount);
            }
            TokenCall::TransferFrom { from, to, amount } => {
                writer.write_address(from).write_address(to).write_u256(amount);
            }
            TokenCall::BalanceOf { owner } => {
                writer.write_address(owner);
            }
            TokenCall::Allowance { owner, spender } => {
                writer.write_address(owner).write_address(spender);
            }
            TokenCall::TotalSupply | TokenCall::Name | TokenCall::Symbol | TokenCall::Decimals => {}
        }
        (self.selector(), writer.into_bytes())
    }

    /// Decodes the bytes returned by the dispatcher for this call.
    pub fn decode_output(&self, output: &[u8]) -> Result<CallOutput, CodecError> {
        let mut reader = CalldataReader::new(output);
        Ok(match self {
            TokenCall::Transfer { .. }
            | TokenCall::Approve { .. }
            | TokenCall::TransferFrom { .. } => CallOutput::Bool(reader.read_bool()?),
            TokenCall::BalanceOf { .. } | TokenCall::Allowance { .. } | TokenCall::TotalSupply => {
                CallOutput::Amount(reader.read_u256()?)
            }
            TokenCall::Name | TokenCall::Symbol => CallOutput::Text(reader.read_string()?),
            TokenCall::Decimals => CallOutput::Decimals(reader.read_u8()?),
        })
    }
}

/// Decoded return value of a [TokenCall].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutput {
    Bool(bool),
    Amount(U256),
    Text(String),
    Decimals(u8),
}

impl fmt::Display for CallOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallOutput::Bool(value) => write!(f, "{value}"),
            CallOutput::Amount(value) => write!(f, "{value}"),
            CallOutput::Text(value) => write!(f, "{value}"),
            CallOutput::Decimals(value) => write!(f, "{value}"),
        }
    }
}
