use anyhow::*;
use apivet::{Cli, Commands};
use clap::Parser;
use tracing_log::AsTrace;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
  let cli = Cli::parse();

  tracing_subscriber::fmt()
    .with_max_level(cli.verbose.log_level_filter().as_trace())
    .init();

  match &cli.commands {
    Commands::Audit(args) => apivet::audit(args).await?,
  }

  Ok(())
}
