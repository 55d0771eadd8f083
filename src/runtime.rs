//! Local host for the token contract.
//!
//! [Runtime] plays the platform's part: it owns the persisted store, supplies the caller of each
//! call and draws the transaction boundary. Every entry point runs against a copy of the store;
//! the copy replaces the current store only if the contract returned successfully, so a failed
//! call leaves neither state changes nor events behind.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use fixed_token::{Ledger, MemoryStore, TokenError};
use sdk::{Address, Event, ExecutionContext, Selector};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Outcome of a committed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub output: Vec<u8>,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Default)]
pub struct Runtime {
    store: MemoryStore,
}

impl Runtime {
    pub fn new(store: MemoryStore) -> Self {
        Runtime { store }
    }

    /// Loads the store from `path`, or starts from an empty, undeployed store when the file does
    /// not exist yet.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no state file, starting undeployed");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading state file {}", path.display()))?;
        let store = serde_json::from_str(&raw)
            .with_context(|| format!("decoding state file {}", path.display()))?;
        Ok(Runtime { store })
    }

    /// Writes the store to a temporary file next to `path`, then renames it over `path`, so the
    /// state file is either the old or the new store and never a partial write.
    pub fn save(&self, path: &Path) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.store).context("encoding state")?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir)
            .with_context(|| format!("creating temporary state file in {}", dir.display()))?;
        file.write_all(raw.as_bytes())
            .and_then(|_| file.as_file().sync_all())
            .context("writing temporary state file")?;
        file.persist(path)
            .with_context(|| format!("replacing state file {}", path.display()))?;
        debug!(path = %path.display(), "state saved");
        Ok(())
    }

    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    /// Runs the deployment hook with `caller` as deployer.
    pub fn deploy(&mut self, caller: Address, input: &[u8]) -> Result<Receipt, TokenError> {
        let mut ctx = ExecutionContext::new(caller);
        let ledger = fixed_token::deploy(self.store.clone(), &mut ctx, input)?;

        self.store = ledger.into_store();
        info!(%caller, "deployment committed");
        Ok(Receipt {
            output: Vec::new(),
            events: ctx.take_events(),
        })
    }

    /// Runs one external call as `caller`.
    pub fn call(
        &mut self,
        caller: Address,
        selector: Selector,
        calldata: &[u8],
    ) -> Result<Receipt, TokenError> {
        let mut ctx = ExecutionContext::new(caller);
        let mut ledger = Ledger::open(self.store.clone())?;
        let output = fixed_token::call(&mut ledger, &mut ctx, selector, calldata)?;

        self.store = ledger.into_store();
        Ok(Receipt {
            output,
            events: ctx.take_events(),
        })
    }
}

/// Path-bound [Runtime]: loads before the operation and saves after a successful one.
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StateFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs `op` on the loaded runtime and persists the result if `op` succeeded.
    pub fn transact<T>(
        &self,
        op: impl FnOnce(&mut Runtime) -> Result<T, TokenError>,
    ) -> Result<T> {
        let mut runtime = Runtime::load(&self.path)?;
        let value = op(&mut runtime)?;
        runtime.save(&self.path)?;
        Ok(value)
    }
}
