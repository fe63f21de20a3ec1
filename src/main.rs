use anyhow::Result;
use bank_kata::cli::Cli;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(format!("bank_kata={level}", level = cli.level()))
        .with_writer(std::io::stderr)
        .init();

    cli.run()
}
