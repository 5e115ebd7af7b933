use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::{
  clients::K8sClients,
  k8s::{
    checks::{self, K8sFindings},
    deprecation::Deprecations,
  },
};

#[derive(Debug, Serialize, Deserialize)]
pub struct KubernetesFindings {
  pub deprecated_api_versions: Vec<checks::DeprecatedApiVersion>,
}

pub async fn get_kubernetes_findings(k8s: &impl K8sClients) -> Result<KubernetesFindings> {
  let deprecations = Deprecations::get()?;
  let resources = k8s.get_resources().await?;

  let deprecated_api_versions = resources
    .iter()
    .filter_map(|resource| resource.deprecated_api_version(&deprecations))
    .collect();

  Ok(KubernetesFindings { deprecated_api_versions })
}
