mod common;

use apivet::k8s::Kind;
use common::{fixtures, mock_k8s::MockK8sClients};

// ============================================================================
// Kubernetes findings
// ============================================================================

#[tokio::test]
async fn kubernetes_findings_empty() {
  let k8s = fixtures::healthy_k8s();
  let result = apivet::k8s::get_kubernetes_findings(&k8s).await.unwrap();
  assert!(result.deprecated_api_versions.is_empty());
}

#[tokio::test]
async fn kubernetes_findings_deprecated_deployment() {
  let k8s = MockK8sClients {
    resources: vec![fixtures::make_deployment("web", "default", "extensions/v1beta1")],
  };

  let result = apivet::k8s::get_kubernetes_findings(&k8s).await.unwrap();
  assert_eq!(result.deprecated_api_versions.len(), 1);

  let finding = &result.deprecated_api_versions[0];
  assert_eq!(finding.resource.name, "web");
  assert_eq!(finding.resource.namespace, "default");
  assert_eq!(finding.deprecated_api, "extensions/v1beta1");
  assert_eq!(finding.new_api, "apps/v1");
}

#[tokio::test]
async fn kubernetes_findings_current_api_versions() {
  let k8s = MockK8sClients {
    resources: vec![
      fixtures::make_deployment("web", "default", "apps/v1"),
      fixtures::make_resource(Kind::NetworkPolicy, "allow-dns", "kube-system", "networking.k8s.io/v1"),
    ],
  };

  let result = apivet::k8s::get_kubernetes_findings(&k8s).await.unwrap();
  assert!(result.deprecated_api_versions.is_empty());
}

#[tokio::test]
async fn kubernetes_findings_unannotated_resources() {
  let k8s = MockK8sClients {
    resources: vec![fixtures::make_deployment("web", "default", "")],
  };

  let result = apivet::k8s::get_kubernetes_findings(&k8s).await.unwrap();
  assert!(result.deprecated_api_versions.is_empty(), "objects without a declared version should be skipped");
}

#[tokio::test]
async fn kubernetes_findings_untracked_kind() {
  let k8s = MockK8sClients {
    resources: vec![fixtures::make_resource(Kind::Job, "migrate", "default", "apps/v1beta1")],
  };

  let result = apivet::k8s::get_kubernetes_findings(&k8s).await.unwrap();
  assert!(result.deprecated_api_versions.is_empty(), "Job objects are not tracked for deprecation");
}

#[tokio::test]
async fn kubernetes_findings_mixed_kinds() {
  let k8s = MockK8sClients {
    resources: vec![
      fixtures::make_deployment("web", "default", "apps/v1beta1"),
      fixtures::make_resource(Kind::DaemonSet, "fluentd", "logging", "extensions/v1beta1"),
      fixtures::make_resource(Kind::StatefulSet, "db", "data", "apps/v1"),
      fixtures::make_resource(Kind::PodSecurityPolicy, "restricted", "", "extensions/v1beta1"),
    ],
  };

  let result = apivet::k8s::get_kubernetes_findings(&k8s).await.unwrap();
  assert_eq!(result.deprecated_api_versions.len(), 3);

  let psp = result
    .deprecated_api_versions
    .iter()
    .find(|finding| finding.resource.kind == Kind::PodSecurityPolicy)
    .unwrap();
  assert_eq!(psp.resource.namespace, "");
  assert_eq!(psp.new_api, "policy/v1beta1");
}

// ============================================================================
// Full analysis pipeline
// ============================================================================

#[tokio::test]
async fn analyze_clean_cluster() {
  let k8s = fixtures::healthy_k8s();
  let results = apivet::analysis::analyze(&k8s).await.unwrap();
  assert!(results.kubernetes.deprecated_api_versions.is_empty());
}

#[tokio::test]
async fn analyze_cluster_with_legacy_manifests() {
  let k8s = MockK8sClients {
    resources: vec![
      fixtures::make_deployment("web", "default", "extensions/v1beta1"),
      fixtures::make_deployment("api", "backend", "apps/v1"),
    ],
  };

  let results = apivet::analysis::analyze(&k8s).await.unwrap();
  assert_eq!(
    results.kubernetes.deprecated_api_versions.len(),
    1,
    "only the legacy manifest should be reported"
  );
}

// ============================================================================
// Error paths
// ============================================================================

#[tokio::test]
async fn analyze_k8s_error_propagates() {
  use common::mock_k8s::MockK8sClientsError;

  let result = apivet::analysis::analyze(&MockK8sClientsError).await;
  assert!(result.is_err(), "should propagate K8s errors");
}
