//! Overlay pipeline errors.

use thiserror::Error;

use crate::manifest::Kind;

/// Everything that can go fatally wrong between reading a manifest and
/// producing its patched serialization. Unsupported kinds are not an error;
/// the dispatcher reports those without failing.
#[derive(Debug, Error)]
pub enum Error {
    #[error("manifest is not valid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("manifest root is not a mapping")]
    NotAMapping,

    #[error("source does not match the {kind} schema: {source}")]
    Parse {
        kind: Kind,
        source: serde_yaml::Error,
    },

    #[error("failed to serialize patched {kind} manifest: {source}")]
    Serialize {
        kind: Kind,
        source: serde_yaml::Error,
    },

    #[error("ingress overlay needs at least one entry under spec.tls")]
    MissingTls,

    #[error("ingress overlay needs at least one host under spec.tls[0].hosts")]
    MissingTlsHost,

    #[error("ingress overlay needs at least one entry under spec.rules")]
    MissingRule,
}
