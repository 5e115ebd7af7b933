use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::{
  finding::{self, Findings},
  k8s::{deprecation::Deprecations, resources::Resource},
};

/// K8S001 - workload object whose manifest was last applied under a deprecated API version
///
/// The object itself is served fine by the cluster; the stored manifest is what needs to be
/// migrated so that re-applying it does not target an API version that is no longer served
#[derive(Debug, Serialize, Deserialize, Tabled)]
#[tabled(rename_all = "UpperCase")]
pub struct DeprecatedApiVersion {
  #[tabled(inline)]
  #[serde(flatten)]
  pub finding: finding::Finding,

  #[tabled(inline)]
  #[serde(flatten)]
  pub resource: Resource,

  /// The deprecated API version the manifest was applied under
  #[tabled(rename = "DEPRECATED API")]
  #[serde(rename = "deprecatedAPI")]
  pub deprecated_api: String,

  /// The API version the manifest should be migrated to
  #[tabled(rename = "NEW API")]
  #[serde(rename = "newAPI")]
  pub new_api: String,
}

finding::impl_findings!(DeprecatedApiVersion, "✅ - No workload manifests were applied under a deprecated API version");

pub trait K8sFindings {
  fn get_resource(&self) -> Resource;
  /// K8S001 - check if the object's manifest was last applied under a deprecated API version
  fn deprecated_api_version(&self, deprecations: &Deprecations) -> Option<DeprecatedApiVersion>;
}
