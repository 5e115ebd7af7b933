use anyhow::Result;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Clone, Debug, Serialize, Deserialize, Tabled)]
#[tabled(rename_all = "UpperCase")]
pub struct Finding {
  #[tabled(rename = "CHECK")]
  pub code: Code,
  #[tabled(rename = " ")]
  pub symbol: String,
  #[tabled(skip)]
  pub remediation: Remediation,
}

impl Finding {
  pub fn new(code: Code, remediation: Remediation) -> Self {
    Self {
      code,
      symbol: remediation.symbol(),
      remediation,
    }
  }
}

/// Determines whether remediation is required or recommended
///
/// This allows for filtering of findings shown to user
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Remediation {
  /// A finding that requires the object's manifest to be migrated before the API version
  /// it was applied under stops being served by the cluster
  Required,
  /// A finding that users are encouraged to evaluate the recommendation and determine if it
  /// is applicable and whether or not to act upon that recommendation
  Recommended,
}

impl Remediation {
  pub(crate) fn symbol(&self) -> String {
    match &self {
      Remediation::Required => "❌".to_string(),
      Remediation::Recommended => "⚠️".to_string(),
    }
  }
}

impl std::fmt::Display for Remediation {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match *self {
      Remediation::Required => write!(f, "Required"),
      Remediation::Recommended => write!(f, "Recommended"),
    }
  }
}

pub trait Findings {
  fn to_markdown_table(&self, leading_whitespace: &str) -> Result<String>;
  fn to_stdout_table(&self) -> Result<String>;
}

macro_rules! impl_findings {
  ($type:ty, $empty_msg:expr) => {
    impl Findings for Vec<$type> {
      fn to_markdown_table(&self, leading_whitespace: &str) -> ::anyhow::Result<String> {
        if self.is_empty() {
          return Ok(format!("{leading_whitespace}{}", $empty_msg));
        }

        let mut table = ::tabled::Table::new(self);
        table
          .with(::tabled::settings::Remove::column(::tabled::settings::location::ByColumnName::new("CHECK")))
          .with(::tabled::settings::Margin::new(1, 0, 0, 0).fill('\t', 'x', 'x', 'x'))
          .with(::tabled::settings::Style::markdown());

        Ok(format!("{table}\n"))
      }

      fn to_stdout_table(&self) -> ::anyhow::Result<String> {
        if self.is_empty() {
          return Ok(String::new());
        }

        let mut table = ::tabled::Table::new(self);
        table.with(::tabled::settings::Style::sharp());

        Ok(format!("{table}\n"))
      }
    }
  };
}

pub(crate) use impl_findings;

/// Codes that represent the finding variants
///
/// This is useful for a few reasons:
/// 1. It would allow users to add codes to a 'ignore list' in the future, to ignore any reported findings of that code
///    type (another level of granularity of what data is is most relevant to them)
/// 2. It provides a "marker" that can be used to link to documentation for the finding, keeping the direct output
///    concise while still providing the means for a full explanation and reasoning behind the finding in one location
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Code {
  /// Workload object last applied under a deprecated API version
  K8S001,
}

impl std::fmt::Display for Code {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match *self {
      Code::K8S001 => write!(f, "K8S001"),
    }
  }
}
