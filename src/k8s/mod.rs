pub mod checks;
pub mod deprecation;
pub mod findings;
pub mod resources;

pub use deprecation::Kind;
pub use findings::{KubernetesFindings, get_kubernetes_findings};
