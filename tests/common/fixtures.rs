use apivet::k8s::Kind;
use apivet::k8s::resources::{StdMetadata, StdResource};

use super::mock_k8s::MockK8sClients;

/// Builds a minimal K8s mock with no resources
pub fn healthy_k8s() -> MockK8sClients {
  MockK8sClients::default()
}

/// Creates a StdResource with the given declared API version
pub fn make_resource(kind: Kind, name: &str, namespace: &str, declared_api_version: &str) -> StdResource {
  StdResource {
    metadata: StdMetadata {
      name: name.into(),
      namespace: namespace.into(),
      kind,
    },
    declared_api_version: declared_api_version.into(),
  }
}

/// Creates a Deployment StdResource last applied under the given API version
pub fn make_deployment(name: &str, namespace: &str, declared_api_version: &str) -> StdResource {
  make_resource(Kind::Deployment, name, namespace, declared_api_version)
}
