use anyhow::Result;

use crate::k8s::resources::{self, StdResource};

/// Trait abstracting all Kubernetes API operations used by apivet
pub trait K8sClients {
  fn get_resources(&self) -> impl std::future::Future<Output = Result<Vec<StdResource>>> + Send;
}

/// Real Kubernetes client implementation wrapping kube-rs
pub struct RealK8sClients {
  client: kube::Client,
}

impl RealK8sClients {
  pub async fn new() -> Result<Self> {
    match kube::Client::try_default().await {
      Ok(client) => Ok(Self { client }),
      Err(e) => {
        anyhow::bail!(
          "Unable to connect to cluster: {e}\n\n\
          Ensure kubeconfig file is present and updated to connect to the cluster."
        );
      }
    }
  }
}

impl K8sClients for RealK8sClients {
  async fn get_resources(&self) -> Result<Vec<StdResource>> {
    resources::get_resources(&self.client).await
  }
}
