//! Ingress overlay.
//!
//! `ingressHost` rewrites the first TLS host and the first rule host in
//! one step so the certificate and the route stay on the same name.
//! Both rewrites address fixed positions, so the overlay refuses
//! documents that lack them rather than writing a partial patch.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::manifest::Kind;
use crate::overlay::Overrides;

/// An Ingress manifest, reduced to the keys the overlay understands.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IngressDoc {
    pub kind: String,
    pub api_version: String,
    pub metadata: IngressMetadata,
    pub spec: IngressSpec,
}

/// Ingress metadata carries annotations instead of a namespace.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngressMetadata {
    pub name: String,
    pub annotations: Annotations,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotations {
    #[serde(rename = "ingress.bluemix.net/rewrite-path")]
    pub rewrite_path: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngressSpec {
    pub tls: Vec<IngressTls>,
    pub rules: Vec<IngressRule>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IngressTls {
    pub hosts: Vec<String>,
    pub secret_name: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngressRule {
    pub host: String,
    pub http: HttpRule,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpRule {
    pub paths: Vec<HttpPath>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpPath {
    pub path: String,
    pub backend: Backend,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Backend {
    pub service_name: String,
    pub service_port: i64,
}

/// Parse `source` as an Ingress, apply `overrides`, and reserialize.
pub fn patch(source: &str, overrides: &Overrides) -> Result<String, Error> {
    let mut doc: IngressDoc = serde_yaml::from_str(source).map_err(|source| Error::Parse {
        kind: Kind::Ingress,
        source,
    })?;
    apply(&mut doc, overrides)?;
    serde_yaml::to_string(&doc).map_err(|source| Error::Serialize {
        kind: Kind::Ingress,
        source,
    })
}

/// Replace document values from the override map.
///
/// The positional preconditions are only checked for overrides that are
/// actually set; a document with no TLS block passes through untouched
/// when neither `ingressHost` nor `secretName` is present.
pub fn apply(doc: &mut IngressDoc, overrides: &Overrides) -> Result<(), Error> {
    if let Some(host) = overrides.get("ingressHost") {
        let tls = doc.spec.tls.first_mut().ok_or(Error::MissingTls)?;
        let slot = tls.hosts.first_mut().ok_or(Error::MissingTlsHost)?;
        *slot = host.to_owned();
        let rule = doc.spec.rules.first_mut().ok_or(Error::MissingRule)?;
        rule.host = host.to_owned();
    }
    if let Some(name) = overrides.get("secretName") {
        let tls = doc.spec.tls.first_mut().ok_or(Error::MissingTls)?;
        tls.secret_name = name.to_owned();
    }
    Ok(())
}
