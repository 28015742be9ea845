use async_trait::async_trait;
use contracts::dashboards::d402_system_asset_query::{
    SystemPageContext, ASSET_OWNERS_PATH, CLUSTER_NAMES_PATH, SYSTEM_ASSET_QUERY_PATH,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Backend calls the asset query page depends on
#[async_trait(?Send)]
pub trait AssetQueryApi {
    /// Owner names of the system
    async fn fetch_asset_owners(&self) -> Result<Vec<String>, String>;

    /// Cluster names of the system, narrowed to one owner when given
    async fn fetch_cluster_names(&self, asset_owner: Option<&str>) -> Result<Vec<String>, String>;

    /// Run a query; `query` is the already serialized form
    async fn run_query(&self, query: &str) -> Result<Value, String>;
}

/// `AssetQueryApi` over HTTP, scoped to one system
#[derive(Debug, Clone)]
pub struct HttpAssetQueryApi {
    base: String,
    system_id: String,
}

impl HttpAssetQueryApi {
    pub fn new(base: impl Into<String>, system_id: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            system_id: system_id.into(),
        }
    }

    pub fn from_context(context: &SystemPageContext) -> Self {
        Self::new(context.api_base(), context.system_id.clone())
    }
}

#[async_trait(?Send)]
impl AssetQueryApi for HttpAssetQueryApi {
    async fn fetch_asset_owners(&self) -> Result<Vec<String>, String> {
        get_json(&asset_owners_url(&self.base, &self.system_id)).await
    }

    async fn fetch_cluster_names(&self, asset_owner: Option<&str>) -> Result<Vec<String>, String> {
        get_json(&cluster_names_url(&self.base, &self.system_id, asset_owner)).await
    }

    async fn run_query(&self, query: &str) -> Result<Value, String> {
        get_json(&system_asset_query_url(&self.base, &self.system_id, query)).await
    }
}

/// The backend reports failures as JSON bodies, so the status is not checked
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    log::debug!("GET {}", url);

    Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub fn asset_owners_url(base: &str, system_id: &str) -> String {
    format!("{}{}/{}", base, ASSET_OWNERS_PATH, urlencoding::encode(system_id))
}

pub fn cluster_names_url(base: &str, system_id: &str, asset_owner: Option<&str>) -> String {
    let url = format!("{}{}/{}", base, CLUSTER_NAMES_PATH, urlencoding::encode(system_id));
    match asset_owner.filter(|owner| !owner.is_empty()) {
        Some(owner) => format!("{}?asset_owner={}", url, urlencoding::encode(owner)),
        None => url,
    }
}

pub fn system_asset_query_url(base: &str, system_id: &str, query: &str) -> String {
    format!(
        "{}{}/{}?{}",
        base,
        SYSTEM_ASSET_QUERY_PATH,
        urlencoding::encode(system_id),
        query
    )
}
