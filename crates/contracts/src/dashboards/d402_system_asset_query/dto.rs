use serde::{Deserialize, Serialize};

/// Base path of the per-system asset owner listing
pub const ASSET_OWNERS_PATH: &str = "/api/asset_owners";
/// Base path of the per-system cluster name listing
pub const CLUSTER_NAMES_PATH: &str = "/api/cluster_names";
/// Base path of the per-system asset query
pub const SYSTEM_ASSET_QUERY_PATH: &str = "/api/system_asset_query";

/// Fields of the asset query form, serialized as the query string of
/// `GET /api/system_asset_query/{system_id}`.
///
/// Empty strings mean "no filter" and are still sent, the same way a browser
/// serializes a form whose select sits on its placeholder option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetQueryForm {
    pub query_type: u8,
    #[serde(default)]
    pub asset_owner: String,
    #[serde(default)]
    pub cluster_name: String,
}

/// Context the server embeds into the page when rendering it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemPageContext {
    /// Key scoping every API call to one system
    pub system_id: String,
    /// Display name, also used for the export file name
    pub system_name: String,
    /// Asset data of the system, exported as-is by the download button
    #[serde(default)]
    pub assets_info: serde_json::Value,
    /// Prefix for API URLs; empty means same origin
    #[serde(default)]
    pub api_base: Option<String>,
}

impl SystemPageContext {
    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or("")
    }
}
