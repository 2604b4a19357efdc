//! Главный исполняемый файл sqllex

use anyhow::Context;
use clap::Parser;
use sqllex::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config().context("failed to load configuration")?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    let output = cli.run(&config)?;
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
