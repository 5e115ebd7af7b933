use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::{clients::K8sClients, finding::Findings, k8s};

/// Container of all findings collected
#[derive(Debug, Serialize, Deserialize)]
pub struct Results {
  pub kubernetes: k8s::KubernetesFindings,
}

impl Results {
  pub fn to_stdout_table(&self) -> Result<String> {
    let mut output = String::new();

    output.push_str(&self.kubernetes.deprecated_api_versions.to_stdout_table()?);

    Ok(output)
  }

  pub fn to_markdown_table(&self) -> Result<String> {
    let mut output = String::new();

    output.push_str(&self.kubernetes.deprecated_api_versions.to_markdown_table("")?);

    Ok(output)
  }
}

/// Analyze the cluster to collect all reported findings
pub async fn analyze(k8s: &impl K8sClients) -> Result<Results> {
  let kubernetes_findings = k8s::get_kubernetes_findings(k8s).await?;

  Ok(Results {
    kubernetes: kubernetes_findings,
  })
}
