//! Secret overlay.
//!
//! Unlike the ConfigMap path, the metadata overrides here copy their
//! values verbatim, and `secretType` replaces the manifest `type`.
//! Data values are written exactly as given; callers are expected to
//! hand in base64 where the cluster wants it.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::manifest::{Kind, Metadata};
use crate::overlay::{overwrite, Overrides};

/// A Secret manifest, reduced to the keys the overlay understands.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecretDoc {
    pub kind: String,
    pub api_version: String,
    pub metadata: Metadata,
    #[serde(rename = "type")]
    pub type_: String,
    pub data: SecretData,
}

/// The `data` mapping. Field order here is emission order.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecretData {
    pub cloudant_password: String,
    #[serde(rename = "objectStorageAPIKey")]
    pub object_storage_api_key: String,
    pub wds_password: String,
    #[serde(rename = "appIDAdminSecret")]
    pub app_id_admin_secret: String,
    #[serde(rename = "appIDUserSecret")]
    pub app_id_user_secret: String,
    pub jwt_token_secret: String,
}

/// Parse `source` as a Secret, apply `overrides`, and reserialize.
pub fn patch(source: &str, overrides: &Overrides) -> Result<String, Error> {
    let mut doc: SecretDoc = serde_yaml::from_str(source).map_err(|source| Error::Parse {
        kind: Kind::Secret,
        source,
    })?;
    apply(&mut doc, overrides);
    serde_yaml::to_string(&doc).map_err(|source| Error::Serialize {
        kind: Kind::Secret,
        source,
    })
}

/// Replace document values from the override map.
pub fn apply(doc: &mut SecretDoc, overrides: &Overrides) {
    overwrite(&mut doc.metadata.name, overrides.get("secretMetadataName"));
    overwrite(&mut doc.metadata.namespace, overrides.get("secretMetadataNamespace"));
    overwrite(&mut doc.type_, overrides.get("secretType"));

    let data = &mut doc.data;
    overwrite(&mut data.cloudant_password, overrides.get("cloudantPassword"));
    overwrite(&mut data.object_storage_api_key, overrides.get("objectStorageAPIKey"));
    overwrite(&mut data.wds_password, overrides.get("wdsPassword"));
    overwrite(&mut data.jwt_token_secret, overrides.get("jwtTokenSecret"));
    overwrite(&mut data.app_id_admin_secret, overrides.get("appIDAdminSecret"));
    overwrite(&mut data.app_id_user_secret, overrides.get("appIDUserSecret"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> &'static str {
        r#"kind: Secret
apiVersion: v1
metadata:
  name: demo-secret
  namespace: staging
type: Opaque
data:
  cloudantPassword: aHVudGVyMg==
  wdsPassword: c3dvcmRmaXNo
"#
    }

    fn parse(output: &str) -> SecretDoc {
        serde_yaml::from_str(output).expect("patched output parses")
    }

    #[test]
    fn test_untouched_without_overrides() {
        let output = patch(sample(), &Overrides::default()).expect("patch");
        let doc = parse(&output);
        assert_eq!(doc.metadata.name, "demo-secret");
        assert_eq!(doc.type_, "Opaque");
        assert_eq!(doc.data.cloudant_password, "aHVudGVyMg==");
        assert_eq!(doc.data.wds_password, "c3dvcmRmaXNo");
    }

    #[test]
    fn test_data_fields_take_override_values() {
        let overrides: Overrides = [
            ("cloudantPassword", "bmV3LXBhc3M="),
            ("jwtTokenSecret", "dG9rZW4="),
            ("appIDUserSecret", "dXNlcg=="),
        ]
        .into_iter()
        .collect();
        let output = patch(sample(), &overrides).expect("patch");
        let doc = parse(&output);
        assert_eq!(doc.data.cloudant_password, "bmV3LXBhc3M=");
        assert_eq!(doc.data.jwt_token_secret, "dG9rZW4=");
        assert_eq!(doc.data.app_id_user_secret, "dXNlcg==");
        assert_eq!(doc.data.wds_password, "c3dvcmRmaXNo");
    }

    #[test]
    fn test_metadata_and_type_copy_literal_values() {
        let overrides: Overrides = [
            ("secretMetadataName", "wea-secret"),
            ("secretMetadataNamespace", "production"),
            ("secretType", "kubernetes.io/tls"),
        ]
        .into_iter()
        .collect();
        let output = patch(sample(), &overrides).expect("patch");
        let doc = parse(&output);
        // Copied as given, not pinned like the ConfigMap metadata.
        assert_eq!(doc.metadata.name, "wea-secret");
        assert_eq!(doc.metadata.namespace, "production");
        assert_eq!(doc.type_, "kubernetes.io/tls");
    }

    #[test]
    fn test_each_override_key_takes_its_value() {
        const DATA_KEYS: [&str; 6] = [
            "cloudantPassword",
            "objectStorageAPIKey",
            "wdsPassword",
            "appIDAdminSecret",
            "appIDUserSecret",
            "jwtTokenSecret",
        ];

        let mut overrides: Overrides = DATA_KEYS
            .into_iter()
            .map(|key| (key, format!("{key}-value")))
            .collect();
        overrides.set("secretMetadataName", "secretMetadataName-value");
        overrides.set("secretMetadataNamespace", "secretMetadataNamespace-value");
        overrides.set("secretType", "secretType-value");

        let output = patch(sample(), &overrides).expect("patch");
        let doc: serde_yaml::Value = serde_yaml::from_str(&output).expect("patched output parses");
        for key in DATA_KEYS {
            let expected = format!("{key}-value");
            assert_eq!(doc["data"][key].as_str(), Some(expected.as_str()), "override for {key}");
        }
        assert_eq!(doc["metadata"]["name"], "secretMetadataName-value");
        assert_eq!(doc["metadata"]["namespace"], "secretMetadataNamespace-value");
        assert_eq!(doc["type"], "secretType-value");
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let overrides: Overrides = [("secretType", ""), ("wdsPassword", "")]
            .into_iter()
            .collect();
        let output = patch(sample(), &overrides).expect("patch");
        let doc = parse(&output);
        assert_eq!(doc.type_, "Opaque");
        assert_eq!(doc.data.wds_password, "c3dvcmRmaXNo");
    }

    #[test]
    fn test_unknown_keys_dropped_and_schema_keys_materialized() {
        let source = r#"kind: Secret
apiVersion: v1
type: Opaque
data:
  leftoverKey: Zm9yZ290dGVu
"#;
        let output = patch(source, &Overrides::default()).expect("patch");
        assert!(!output.contains("leftoverKey"));
        assert!(output.contains("objectStorageAPIKey"));
        assert!(output.contains("jwtTokenSecret"));
    }

    #[test]
    fn test_rejects_schema_mismatch() {
        let err = patch("kind: Secret\ndata: [1, 2]\n", &Overrides::default())
            .expect_err("data must be a mapping");
        assert!(matches!(
            err,
            Error::Parse {
                kind: Kind::Secret,
                ..
            }
        ));
    }
}
