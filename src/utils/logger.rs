use std::str::FromStr;

use anyhow::{bail, Result};
use tracing::{level_filters::LevelFilter, Subscriber};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Macro designed to log errors
#[macro_export]
macro_rules! log_error {
    // Pattern for format string with arguments
    ($result:expr, $fmt:literal, $($arg:tt)*) => {
        match $result {
            Err(e) => {
                let ae: anyhow::Error = e.into();
                let ae = ae.context(format!($fmt, $($arg)*));
                tracing::error!(target: module_path!(), "{:#}", ae);
                Err(ae)
            }
            Ok(t) => Ok(t),
        }
    };
    // Pattern for a single expression (string or otherwise)
    ($result:expr, $context:expr) => {
        match $result {
            Err(e) => {
                let ae: anyhow::Error = e.into();
                let ae = ae.context($context);
                tracing::error!(target: module_path!(), "{:#}", ae);
                Err(ae)
            }
            Ok(t) => Ok(t),
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingMode {
    /// Human readable output
    Full,
    /// One JSON object per event
    Json,
}

impl FromStr for TracingMode {
    type Err = anyhow::Error;

    fn from_str(log_format: &str) -> Result<Self> {
        match log_format {
            "full" => Ok(TracingMode::Full),
            "json" => Ok(TracingMode::Json),
            other => bail!("unknown log format {other:?}, expected \"full\" or \"json\""),
        }
    }
}

/// Setup tracing - stderr subscriber, so stdout only carries call results.
/// Defaults to INFO unless RUST_LOG says otherwise.
pub fn setup_tracing(log_format: &str) -> Result<()> {
    let mode: TracingMode = log_format.parse()?;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()?;

    match mode {
        TracingMode::Full => register_global_subscriber(
            filter,
            tracing_subscriber::fmt::layer().with_writer(std::io::stderr),
        ),
        TracingMode::Json => register_global_subscriber(
            filter,
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        ),
    };

    Ok(())
}

fn register_global_subscriber<T, S>(filter: EnvFilter, fmt_layer: T)
where
    S: Subscriber,
    T: tracing_subscriber::Layer<S> + Send + Sync,
    tracing_subscriber::filter::Filtered<T, tracing_subscriber::EnvFilter, S>:
        tracing_subscriber::Layer<tracing_subscriber::Registry>,
{
    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}
