use std::collections::BTreeMap;

use anyhow::{Result, bail};
use k8s_openapi::api::{apps, networking, policy};
use kube::{Client, ResourceExt, api::Api};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tabled::Tabled;

use crate::{
  finding,
  k8s::{
    checks::{DeprecatedApiVersion, K8sFindings},
    deprecation::{Deprecations, Kind},
  },
};

/// Annotation holding a copy of the manifest that was last applied to the object
pub const LAST_APPLIED_CONFIGURATION: &str = "kubectl.kubernetes.io/last-applied-configuration";

/// Parsed form of a resource's last applied configuration annotation
///
/// Only the declared API version is consumed; the rest of the stored manifest is ignored
#[derive(Debug, Deserialize)]
struct AppliedConfig {
  #[serde(default, rename = "apiVersion")]
  api_version: String,
}

/// Extracts the API version declared by the object's last applied configuration annotation
///
/// Returns an empty string when the annotation is absent, empty, or cannot be parsed;
/// a parse failure is logged and the object is treated as having no declared version
fn declared_api_version(name: &str, annotations: &BTreeMap<String, String>) -> String {
  let annotation = match annotations.get(LAST_APPLIED_CONFIGURATION) {
    Some(value) if !value.is_empty() => value,
    _ => return String::new(),
  };

  match serde_json::from_str::<AppliedConfig>(annotation) {
    Ok(config) => config.api_version,
    Err(err) => {
      tracing::warn!("Unable to parse last applied configuration annotation on {name}: {err}");
      String::new()
    }
  }
}

#[derive(Clone, Debug, Serialize, Deserialize, Tabled)]
#[tabled(rename_all = "UpperCase")]
pub struct Resource {
  /// Name of the resources
  pub name: String,
  /// Namespace where the resource is provisioned
  pub namespace: String,
  /// Kind of the resource
  pub kind: Kind,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StdMetadata {
  pub name: String,
  pub namespace: String,
  pub kind: Kind,
}

/// This is a generalized record used across all resource types that
/// we are inspecting for deprecated API version usage
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StdResource {
  pub metadata: StdMetadata,

  /// The API version declared by the last applied manifest; empty when the
  /// annotation is absent, empty, or unparseable
  pub declared_api_version: String,
}

impl K8sFindings for StdResource {
  fn get_resource(&self) -> Resource {
    Resource {
      name: self.metadata.name.clone(),
      namespace: self.metadata.namespace.clone(),
      kind: self.metadata.kind,
    }
  }

  fn deprecated_api_version(&self, deprecations: &Deprecations) -> Option<DeprecatedApiVersion> {
    let new_api = deprecations.replacement(self.metadata.kind, &self.declared_api_version)?;

    Some(DeprecatedApiVersion {
      finding: finding::Finding::new(finding::Code::K8S001, finding::Remediation::Required),
      resource: self.get_resource(),
      deprecated_api: self.declared_api_version.clone(),
      new_api: new_api.to_owned(),
    })
  }
}

/// Returns all instances of the resource type in the cluster as uniform records
async fn objects<K>(client: &Client, kind: Kind) -> Result<Vec<StdResource>>
where
  K: ResourceExt + Clone + std::fmt::Debug + DeserializeOwned,
  K::DynamicType: Default,
{
  let api: Api<K> = Api::all(client.clone());
  let object_list = api.list(&Default::default()).await?;

  let resources = object_list
    .items
    .iter()
    .map(|object| {
      let name = object.name_any();
      let declared_api_version = declared_api_version(&name, object.annotations());

      StdResource {
        metadata: StdMetadata {
          name,
          namespace: object.namespace().unwrap_or_default(),
          kind,
        },
        declared_api_version,
      }
    })
    .collect();

  Ok(resources)
}

/// Lists all instances of the resource type, tagged with the kind being listed
async fn list<K>(client: &Client, kind: Kind) -> (Kind, Result<Vec<StdResource>>)
where
  K: ResourceExt + Clone + std::fmt::Debug + DeserializeOwned,
  K::DynamicType: Default,
{
  (kind, objects::<K>(client, kind).await)
}

/// Folds the per-kind listing outcomes into a single collection
///
/// A failure to list one kind does not prevent auditing the others; the kind is
/// logged and skipped. Only when no kind can be listed at all does the audit abort
fn collect_listings(listings: impl IntoIterator<Item = (Kind, Result<Vec<StdResource>>)>) -> Result<Vec<StdResource>> {
  let mut resources = Vec::new();
  let mut listed = false;

  for (kind, listing) in listings {
    match listing {
      Ok(objects) => {
        listed = true;
        resources.extend(objects);
      }
      Err(err) => tracing::warn!("Unable to list {kind} resources: {err}"),
    }
  }

  if !listed {
    bail!("Unable to list any of the tracked resource kinds from the cluster");
  }

  Ok(resources)
}

/// Collects all objects of the tracked workload kinds from the cluster
pub async fn get_resources(client: &Client) -> Result<Vec<StdResource>> {
  let listings = [
    list::<networking::v1::NetworkPolicy>(client, Kind::NetworkPolicy).await,
    list::<policy::v1beta1::PodSecurityPolicy>(client, Kind::PodSecurityPolicy).await,
    list::<apps::v1::DaemonSet>(client, Kind::DaemonSet).await,
    list::<apps::v1::Deployment>(client, Kind::Deployment).await,
    list::<apps::v1::StatefulSet>(client, Kind::StatefulSet).await,
    list::<apps::v1::ReplicaSet>(client, Kind::ReplicaSet).await,
  ];

  collect_listings(listings)
}
