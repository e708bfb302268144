//! Entry-point for the `cmdsense` binary.

use clap::Parser;
use cmdsense_cli::Cli;
use cmdsense_cli::run_main;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_main(cli).await
}
