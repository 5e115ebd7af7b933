use anyhow::{Result, bail};

use apivet::clients::K8sClients;
use apivet::k8s::resources::StdResource;

/// Mock K8s client for testing
#[derive(Clone, Default)]
pub struct MockK8sClients {
  pub resources: Vec<StdResource>,
}

impl K8sClients for MockK8sClients {
  async fn get_resources(&self) -> Result<Vec<StdResource>> {
    Ok(self.resources.clone())
  }
}

/// Mock that returns errors for all methods
pub struct MockK8sClientsError;

impl K8sClients for MockK8sClientsError {
  async fn get_resources(&self) -> Result<Vec<StdResource>> {
    bail!("mock K8s error")
  }
}
