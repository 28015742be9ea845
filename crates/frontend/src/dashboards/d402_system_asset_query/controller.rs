use super::api::AssetQueryApi;
use super::render::{render_results, ResultsView};
use contracts::dashboards::d402_system_asset_query::AssetQueryForm;

/// What the controller reads from and writes to the page
pub trait QueryPageView {
    /// Selected asset owner, empty for the "all owners" placeholder
    fn selected_owner(&self) -> String;

    /// Select an asset owner, empty for the placeholder
    fn select_owner(&self, owner: String);

    /// Replace every owner option after the placeholder; the selection
    /// falls back to the placeholder
    fn replace_owner_options(&self, owners: Vec<String>);

    /// Replace every cluster option after the placeholder; the selection
    /// falls back to the placeholder
    fn replace_cluster_options(&self, clusters: Vec<String>);

    /// Make the results area visible
    fn reveal_results(&self);

    /// Replace the whole content of the results area
    fn show_results(&self, results: ResultsView);
}

/// Drives the filters and the query form of the system asset page.
///
/// Requests are neither cancelled nor versioned: when two of them overlap,
/// whichever response arrives last is what the page shows.
#[derive(Debug, Clone)]
pub struct AssetQueryController<A, V> {
    api: A,
    view: V,
}

impl<A: AssetQueryApi, V: QueryPageView> AssetQueryController<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self { api, view }
    }

    /// Page-ready work; the caller wires the form submit handler once
    pub async fn initialize(&self) {
        log::debug!("d402: initializing asset query page");
        self.load_owner_filter().await;
    }

    pub async fn load_owner_filter(&self) {
        match self.api.fetch_asset_owners().await {
            Ok(owners) => {
                self.view.replace_owner_options(owners);
                self.refresh_cluster_filter().await;
            }
            Err(e) => log::error!("Failed to load asset owners: {}", e),
        }
    }

    pub async fn refresh_cluster_filter(&self) {
        let owner = self.view.selected_owner();
        let owner = Some(owner.as_str()).filter(|o| !o.is_empty());

        match self.api.fetch_cluster_names(owner).await {
            Ok(clusters) => self.view.replace_cluster_options(clusters),
            Err(e) => log::error!("Failed to load cluster names: {}", e),
        }
    }

    /// Change handler of the owner select
    pub async fn owner_changed(&self, owner: String) {
        self.view.select_owner(owner);
        self.refresh_cluster_filter().await;
    }

    pub async fn submit_query(&self, form: &AssetQueryForm) {
        self.view.show_results(ResultsView::Loading);
        self.view.reveal_results();

        let results = match self.run_form_query(form).await {
            Ok(data) => render_results(&data),
            Err(e) => ResultsView::RequestFailed(e),
        };
        self.view.show_results(results);
    }

    async fn run_form_query(&self, form: &AssetQueryForm) -> Result<serde_json::Value, String> {
        let query = serde_qs::to_string(form).map_err(|e| format!("Invalid form: {}", e))?;
        self.api.run_query(&query).await
    }
}
