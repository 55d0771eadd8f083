use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, ConfigError, Environment, File};
use sdk::Address;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "tokenrun";
pub const DEFAULT_STATE_FILE: &str = "tokenrun_state.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Conf {
    /// JSON file holding the token store between invocations.
    pub state_file: PathBuf,
    /// `full` or `json`.
    pub log_format: String,
    /// Hex address used as the caller when `--caller` is not given.
    pub caller: Option<String>,
}

impl Conf {
    /// Priority order: defaults, then the config file (optional), then `TOKENRUN_*` environment
    /// variables, then CLI overrides.
    pub fn new(
        config_file: Option<String>,
        state_file: Option<String>,
        log_format: Option<String>,
        caller: Option<String>,
    ) -> Result<Self, ConfigError> {
        let config_file = config_file.unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
        let s = Config::builder()
            .set_default("state_file", DEFAULT_STATE_FILE)?
            .set_default("log_format", "full")?
            .add_source(File::with_name(config_file.as_str()).required(false))
            .add_source(Environment::with_prefix("tokenrun"))
            .set_override_option("state_file", state_file)?
            .set_override_option("log_format", log_format)?
            .set_override_option("caller", caller)?
            .build()?;

        s.try_deserialize()
    }

    /// The configured caller, parsed.
    pub fn caller_address(&self) -> Result<Address> {
        let caller = self
            .caller
            .as_deref()
            .context("no caller configured, pass --caller or set TOKENRUN_CALLER")?;
        caller
            .parse()
            .with_context(|| format!("invalid caller address {caller}"))
    }
}
