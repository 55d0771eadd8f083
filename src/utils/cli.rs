use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fixed_token::TokenCall;
use sdk::{encode_selector, Address, Selector, U256};
use tracing::info;

use crate::{
    log_error,
    runtime::{Receipt, StateFile},
    utils::conf::Conf,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,

    /// Config file name, without extension for format auto-detection.
    #[arg(long, global = true)]
    pub config_file: Option<String>,

    #[arg(long, global = true)]
    pub state_file: Option<String>,

    /// `full` or `json`.
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Hex address of the account making the call.
    #[arg(long, short, global = true)]
    pub caller: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// Run the deployment hook, minting the whole supply to the caller.
    Deploy,
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
    /// Dispatch a raw selector and hex calldata.
    Raw {
        selector: Selector,
        #[arg(default_value = "")]
        calldata: String,
    },
    /// Print the selector of a canonical signature, e.g. `transfer(address,uint256)`.
    Selector {
        signature: String,
    },
}

impl CliCommand {
    /// The contract call this command stands for, if it is one of the known methods.
    pub fn as_token_call(&self) -> Option<TokenCall> {
        Some(match self.clone() {
            CliCommand::Transfer { to, amount } => TokenCall::Transfer { to, amount },
            CliCommand::Approve { spender, amount } => TokenCall::Approve { spender, amount },
            CliCommand::TransferFrom { from, to, amount } => {
                TokenCall::TransferFrom { from, to, amount }
            }
            CliCommand::BalanceOf { owner } => TokenCall::BalanceOf { owner },
            CliCommand::Allowance { owner, spender } => TokenCall::Allowance { owner, spender },
            CliCommand::TotalSupply => TokenCall::TotalSupply,
            CliCommand::Name => TokenCall::Name,
            CliCommand::Symbol => TokenCall::Symbol,
            CliCommand::Decimals => TokenCall::Decimals,
            CliCommand::Deploy | CliCommand::Raw { .. } | CliCommand::Selector { .. } => {
                return None
            }
        })
    }
}

fn print_events(receipt: &Receipt) {
    for event in &receipt.events {
        println!("event: {event} data=0x{}", hex::encode(event.encode()));
    }
}

// Public because it's used in integration tests.
pub fn run_command(cli: Cli, conf: &Conf) -> Result<()> {
    if let CliCommand::Selector { signature } = &cli.command {
        println!("{}", encode_selector(signature));
        return Ok(());
    }

    let caller = conf.caller_address()?;
    let state = StateFile::new(conf.state_file.clone());

    match cli.command {
        CliCommand::Deploy => {
            let receipt = log_error!(
                state.transact(|rt| rt.deploy(caller, &[])),
                "deploying from {}",
                caller
            )?;
            info!(state_file = %state.path().display(), "token deployed");
            print_events(&receipt);
        }
        CliCommand::Raw { selector, calldata } => {
            let calldata = hex::decode(calldata.trim_start_matches("0x"))
                .context("calldata is not valid hex")?;
            let receipt = log_error!(
                state.transact(|rt| rt.call(caller, selector, &calldata)),
                "calling {}",
                selector
            )?;
            println!("result: 0x{}", hex::encode(&receipt.output));
            print_events(&receipt);
        }
        command => {
            let call = command
                .as_token_call()
                .context("command is not a contract call")?;
            let (selector, calldata) = call.encode();
            let receipt = log_error!(
                state.transact(|rt| rt.call(caller, selector, &calldata)),
                "calling {}",
                call.signature()
            )?;
            let output = call
                .decode_output(&receipt.output)
                .context("decoding call output")?;
            println!("result: {output}");
            print_events(&receipt);
        }
    }
    Ok(())
}
