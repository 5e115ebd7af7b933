use std::collections::HashMap;

use anyhow::{Result, bail};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};

/// Kubernetes workload kinds the auditor understands
///
/// Kinds without an entry in the deprecation data are valid vocabulary but are
/// never reported; looking one up simply yields no rule
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
  CronJob,
  DaemonSet,
  Deployment,
  Job,
  NetworkPolicy,
  PodSecurityPolicy,
  ReplicaSet,
  StatefulSet,
}

impl std::fmt::Display for Kind {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match *self {
      Kind::CronJob => write!(f, "CronJob"),
      Kind::DaemonSet => write!(f, "DaemonSet"),
      Kind::Deployment => write!(f, "Deployment"),
      Kind::Job => write!(f, "Job"),
      Kind::NetworkPolicy => write!(f, "NetworkPolicy"),
      Kind::PodSecurityPolicy => write!(f, "PodSecurityPolicy"),
      Kind::ReplicaSet => write!(f, "ReplicaSet"),
      Kind::StatefulSet => write!(f, "StatefulSet"),
    }
  }
}

/// Describes the deprecated API versions for a single workload kind
///
/// Each `Rule` contains the API versions, in `group/version` format, that are no
/// longer current for the kind, and the single replacement version that manifests
/// declaring one of them should be migrated to
#[derive(Clone, Debug, Deserialize)]
pub struct Rule {
  /// Kind of the objects this rule applies to
  pub kind: Kind,
  /// The deprecated API versions in `group/version` format
  pub deprecated: Vec<String>,
  /// The replacement API version
  pub replacement: String,
}

/// Contains the static map of deprecated API versions in YAML format
/// This is the source of truth for the API versions that have been identified as
/// deprecated as well as the versions objects should be migrated to
#[derive(RustEmbed)]
#[folder = "data/"]
struct Data;

/// Contains the deprecated API versions
///
/// `Deprecations` maps workload `Kind`s to their respective `Rule` for quick
/// lookup to check whether a declared API version is deprecated. Built once per
/// run and never mutated afterwards
#[derive(Debug)]
pub struct Deprecations {
  rules: HashMap<Kind, Rule>,
}

impl Deprecations {
  /// Loads the deprecation data from the embedded yaml file and builds the
  /// map of workload `Kind`s to their respective `Rule` (defined in the yaml file)
  pub fn get() -> Result<Self> {
    let deprecation_file = Data::get("deprecations.yaml").unwrap();
    let contents = std::str::from_utf8(deprecation_file.data.as_ref()).unwrap();

    Self::parse(contents)
  }

  fn parse(contents: &str) -> Result<Self> {
    let data: Vec<Rule> = serde_yaml::from_str(contents)?;

    let mut rules: HashMap<Kind, Rule> = HashMap::new();
    for rule in data {
      if rule.deprecated.contains(&rule.replacement) {
        bail!(
          "Rule for {} lists its replacement version {} as deprecated",
          rule.kind,
          rule.replacement
        );
      }

      let kind = rule.kind;
      if rules.insert(kind, rule).is_some() {
        bail!("Duplicate deprecation rule for {kind}");
      }
    }

    Ok(Deprecations { rules })
  }

  /// Returns the deprecation rule for the given kind, if one is defined
  pub fn rule(&self, kind: Kind) -> Option<&Rule> {
    self.rules.get(&kind)
  }

  /// Returns the replacement API version when the declared version is deprecated for the kind
  ///
  /// Membership is decided by exact string equality on the `group/version` literal;
  /// an empty declared version, an untracked kind, and a version the rule does not
  /// list all yield `None`
  pub fn replacement(&self, kind: Kind, declared_version: &str) -> Option<&str> {
    if declared_version.is_empty() {
      return None;
    }

    match self.rule(kind) {
      Some(rule) if rule.deprecated.iter().any(|version| version == declared_version) => {
        Some(rule.replacement.as_str())
      }
      _ => None,
    }
  }
}
