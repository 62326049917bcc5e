use anyhow::{anyhow, Context};
use clap::{CommandFactory, Parser};

use dataset_from_images::logging::init_logging;
use dataset_from_images::{run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level).map_err(|e| anyhow!(e))?;

    let config = match cli.run_config() {
        Some(config) => config,
        None => {
            Cli::command().print_help()?;
            return Ok(());
        }
    };

    run(&config).context("failed to create dataset")?;
    Ok(())
}
