use std::{fs::File, io::prelude::*};

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::analysis;

#[derive(Clone, Copy, Debug, Default, ValueEnum, Serialize, Deserialize)]
pub enum Format {
  /// JSON format used for logging or writing to a *.json file
  Json,
  /// Markdown format used for writing to a *.md file
  Markdown,
  /// Text format used for writing to stdout
  #[default]
  Text,
}

pub fn output(results: &analysis::Results, format: &Format, filename: &Option<String>, done_file: bool) -> Result<()> {
  let output = match format {
    Format::Json => serde_json::to_string_pretty(&results.kubernetes.deprecated_api_versions)?,
    Format::Markdown => results.to_markdown_table()?,
    Format::Text => results.to_stdout_table()?,
  };

  match filename {
    Some(filename) => {
      let mut file = File::create(filename)?;
      file.write_all(output.as_bytes())?;

      // Written only after the results file so pollers never observe partial results
      if done_file {
        let mut marker = File::create(format!("{filename}.done"))?;
        marker.write_all(filename.as_bytes())?;
      }
    }
    None => {
      println!("{output}");
    }
  }

  Ok(())
}
