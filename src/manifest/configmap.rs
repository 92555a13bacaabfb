//! ConfigMap overlay.
//!
//! The data block carries the service endpoints and context paths the
//! deployment reads at boot. Every key can be replaced from an override
//! of the same name; the two metadata switches are presence-only and pin
//! fixed values instead of copying the override.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::manifest::{Kind, Metadata};
use crate::overlay::{overwrite, Overrides};

/// Value pinned onto `metadata.name` when `configmapMetadataName` is set.
pub const PINNED_NAME: &str = "wea-config";
/// Value pinned onto `metadata.namespace` when `configmapMetadataNamespace` is set.
pub const PINNED_NAMESPACE: &str = "default";

/// A ConfigMap manifest, reduced to the keys the overlay understands.
/// Anything else in the source document is dropped on reserialization.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigMapDoc {
    pub kind: String,
    pub api_version: String,
    pub metadata: Metadata,
    pub data: ConfigMapData,
}

/// The `data` mapping. Field order here is emission order.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigMapData {
    #[serde(rename = "cloudantDBName")]
    pub cloudant_db_name: String,
    pub cloudant_user_name: String,
    pub object_storage_end_point: String,
    #[serde(rename = "objectStorageIBMAuthEndPoint")]
    pub object_storage_ibm_auth_end_point: String,
    #[serde(rename = "objectStorageServiceInstanceID")]
    pub object_storage_service_instance_id: String,
    pub wds_end_point: String,
    #[serde(rename = "wdsEnvID")]
    pub wds_env_id: String,
    #[serde(rename = "wdsURL")]
    pub wds_url: String,
    pub wds_user_name: String,
    pub wds_version_date: String,
    #[serde(rename = "serviceNameAPIPrivate")]
    pub service_name_api_private: String,
    #[serde(rename = "servicePortAPIPrivate")]
    pub service_port_api_private: String,
    // The upstream chart really does spell the key this way.
    #[serde(rename = "servicePrctolAPIPrivate")]
    pub service_prctol_api_private: String,
    #[serde(rename = "appIDAdminTenantID")]
    pub app_id_admin_tenant_id: String,
    #[serde(rename = "appIDAdminClientID")]
    pub app_id_admin_client_id: String,
    #[serde(rename = "appIDAdminOAuthServerURL")]
    pub app_id_admin_oauth_server_url: String,
    #[serde(rename = "appIDAdminRedirectURL")]
    pub app_id_admin_redirect_url: String,
    #[serde(rename = "appIDUserTenantID")]
    pub app_id_user_tenant_id: String,
    #[serde(rename = "appIDUserClientID")]
    pub app_id_user_client_id: String,
    #[serde(rename = "appIDUserOAuthServerURL")]
    pub app_id_user_oauth_server_url: String,
    #[serde(rename = "appIDUserRedirectURL")]
    pub app_id_user_redirect_url: String,
    pub api_private_context_path: String,
    pub api_public_context_path: String,
    pub ui_admin_context_path: String,
    pub ui_end_user_context_path: String,
    pub wds_crawler_context_path: String,
    pub jwt_expires: String,
}

/// Parse `source` as a ConfigMap, apply `overrides`, and reserialize.
pub fn patch(source: &str, overrides: &Overrides) -> Result<String, Error> {
    let mut doc: ConfigMapDoc = serde_yaml::from_str(source).map_err(|source| Error::Parse {
        kind: Kind::ConfigMap,
        source,
    })?;
    apply(&mut doc, overrides);
    serde_yaml::to_string(&doc).map_err(|source| Error::Serialize {
        kind: Kind::ConfigMap,
        source,
    })
}

/// Replace document values from the override map.
pub fn apply(doc: &mut ConfigMapDoc, overrides: &Overrides) {
    // Presence-only switches: the override value itself is never copied.
    if overrides.get("configmapMetadataName").is_some() {
        doc.metadata.name = PINNED_NAME.to_owned();
    }
    if overrides.get("configmapMetadataNamespace").is_some() {
        doc.metadata.namespace = PINNED_NAMESPACE.to_owned();
    }

    let data = &mut doc.data;
    overwrite(&mut data.cloudant_db_name, overrides.get("cloudantDBName"));
    overwrite(&mut data.cloudant_user_name, overrides.get("cloudantUserName"));
    overwrite(&mut data.object_storage_end_point, overrides.get("objectStorageEndPoint"));
    overwrite(
        &mut data.object_storage_ibm_auth_end_point,
        overrides.get("objectStorageIBMAuthEndPoint"),
    );
    overwrite(
        &mut data.object_storage_service_instance_id,
        overrides.get("objectStorageServiceInstanceID"),
    );
    overwrite(&mut data.wds_end_point, overrides.get("wdsEndPoint"));
    overwrite(&mut data.wds_env_id, overrides.get("wdsEnvID"));
    overwrite(&mut data.wds_url, overrides.get("wdsURL"));
    overwrite(&mut data.wds_user_name, overrides.get("wdsUserName"));
    overwrite(&mut data.wds_version_date, overrides.get("wdsVersionDate"));
    overwrite(&mut data.service_name_api_private, overrides.get("serviceNameAPIPrivate"));
    overwrite(&mut data.service_port_api_private, overrides.get("servicePortAPIPrivate"));
    overwrite(&mut data.service_prctol_api_private, overrides.get("servicePrctolAPIPrivate"));
    overwrite(&mut data.app_id_admin_tenant_id, overrides.get("appIDAdminTenantID"));
    overwrite(&mut data.app_id_admin_client_id, overrides.get("appIDAdminClientID"));
    overwrite(&mut data.app_id_admin_oauth_server_url, overrides.get("appIDAdminOAuthServerURL"));
    overwrite(&mut data.app_id_admin_redirect_url, overrides.get("appIDAdminRedirectURL"));
    overwrite(&mut data.app_id_user_tenant_id, overrides.get("appIDUserTenantID"));
    overwrite(&mut data.app_id_user_client_id, overrides.get("appIDUserClientID"));
    overwrite(&mut data.app_id_user_oauth_server_url, overrides.get("appIDUserOAuthServerURL"));
    overwrite(&mut data.app_id_user_redirect_url, overrides.get("appIDUserRedirectURL"));
    overwrite(&mut data.api_private_context_path, overrides.get("apiPrivateContextPath"));
    overwrite(&mut data.api_public_context_path, overrides.get("apiPublicContextPath"));
    overwrite(&mut data.ui_admin_context_path, overrides.get("uiAdminContextPath"));
    overwrite(&mut data.ui_end_user_context_path, overrides.get("uiEndUserContextPath"));
    overwrite(&mut data.wds_crawler_context_path, overrides.get("wdsCrawlerContextPath"));
    overwrite(&mut data.jwt_expires, overrides.get("jwtExpires"));
}
