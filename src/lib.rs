pub mod analysis;
pub mod clients;
pub mod finding;
pub mod k8s;
pub mod output;

use std::process;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use serde::{Deserialize, Serialize};

use crate::clients::RealK8sClients;

#[derive(Parser, Debug)]
#[command(author, about, version)]
#[command(propagate_version = true)]
pub struct Cli {
  #[command(subcommand)]
  pub commands: Commands,

  #[clap(flatten)]
  pub verbose: Verbosity,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
  Audit(Audit),
}

/// Audit the cluster for objects last applied under a deprecated API version
#[derive(Args, Debug, Serialize, Deserialize)]
pub struct Audit {
  #[arg(short, long, value_enum, default_value_t)]
  pub format: output::Format,

  /// Write to file instead of stdout
  #[arg(short, long)]
  pub output: Option<String>,

  /// Write a .done marker next to the output file once results are persisted
  #[arg(long, requires = "output")]
  pub done_file: bool,
}

pub async fn audit(args: &Audit) -> Result<()> {
  let k8s_client = RealK8sClients::new().await?;

  // All checks and validations on input should happen above/before running the analysis
  let results = analysis::analyze(&k8s_client).await?;

  if let Err(err) = output::output(&results, &args.format, &args.output, args.done_file) {
    eprintln!("{err}");
    process::exit(2);
  }

  Ok(())
}
