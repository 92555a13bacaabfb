//! Manifest kinds, kind sniffing, and overlay dispatch.
//!
//! Sources are parsed twice: once loosely into a [`serde_yaml::Value`] to
//! read the `kind` discriminator, then strictly into the kind-specific
//! schema picked for that kind.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::error::Error;
use crate::overlay::Overrides;

pub mod configmap;
pub mod ingress;
pub mod secret;

pub use configmap::ConfigMapDoc;
pub use ingress::IngressDoc;
pub use secret::SecretDoc;

/// Kubernetes object types this tool can patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    ConfigMap,
    Secret,
    Ingress,
}

impl Kind {
    /// Map a sniffed `kind` value to a supported kind. Matching is exact;
    /// `configmap` or `CONFIGMAP` are not recognized.
    pub fn from_name(name: &str) -> Option<Kind> {
        match name {
            "ConfigMap" => Some(Kind::ConfigMap),
            "Secret" => Some(Kind::Secret),
            "Ingress" => Some(Kind::Ingress),
            _ => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::ConfigMap => "ConfigMap",
            Kind::Secret => "Secret",
            Kind::Ingress => "Ingress",
        };
        f.write_str(name)
    }
}

/// Metadata block shared by ConfigMap and Secret manifests.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub name: String,
    pub namespace: String,
}

/// Read the top-level `kind` entry without validating anything else.
///
/// Returns `Ok(None)` when the document is empty or its mapping has no
/// string `kind` entry; either way dispatch treats that as unsupported.
/// A document whose root is a sequence or scalar is a parse error, as is
/// a multi-document stream: the input must hold exactly one manifest.
pub fn sniff_kind(source: &str) -> Result<Option<String>, Error> {
    let doc: Value = serde_yaml::from_str(source)?;
    match &doc {
        Value::Null => Ok(None),
        Value::Mapping(_) => Ok(doc.get("kind").and_then(Value::as_str).map(str::to_owned)),
        _ => Err(Error::NotAMapping),
    }
}

/// Run the overlay routine for `kind` over `source`, returning the patched
/// manifest as YAML.
pub fn patch(kind: Kind, source: &str, overrides: &Overrides) -> Result<String, Error> {
    match kind {
        Kind::ConfigMap => configmap::patch(source, overrides),
        Kind::Secret => secret::patch(source, overrides),
        Kind::Ingress => ingress::patch(source, overrides),
    }
}
