use anyhow::Result;
use calcledger::cli::Cli;
use calcledger::logging::init_logger;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();
    init_logger(config.log_level);
    cli.run(&config)
}
