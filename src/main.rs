use anyhow::Result;
use clap::Parser;
use tokenrun::utils::{
    cli::{run_command, Cli},
    conf::Conf,
    logger::setup_tracing,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let conf = Conf::new(
        cli.config_file.clone(),
        cli.state_file.clone(),
        cli.log_format.clone(),
        cli.caller.clone(),
    )?;
    setup_tracing(&conf.log_format)?;

    run_command(cli, &conf)
}
