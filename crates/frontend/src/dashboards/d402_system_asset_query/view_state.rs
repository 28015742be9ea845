use super::controller::QueryPageView;
use super::render::ResultsView;
use contracts::dashboards::d402_system_asset_query::{AssetQueryForm, QueryType};
use leptos::prelude::*;

/// Reactive state of the asset query page
#[derive(Clone, Copy)]
pub struct QueryPageState {
    pub query_type: RwSignal<String>,
    pub owner_options: RwSignal<Vec<String>>,
    pub selected_owner: RwSignal<String>,
    pub cluster_options: RwSignal<Vec<String>>,
    pub selected_cluster: RwSignal<String>,
    pub results: RwSignal<ResultsView>,
    pub results_visible: RwSignal<bool>,
}

impl QueryPageState {
    pub fn new() -> Self {
        Self {
            query_type: RwSignal::new(QueryType::default().code().to_string()),
            owner_options: RwSignal::new(Vec::new()),
            selected_owner: RwSignal::new(String::new()),
            cluster_options: RwSignal::new(Vec::new()),
            selected_cluster: RwSignal::new(String::new()),
            results: RwSignal::new(ResultsView::Empty),
            results_visible: RwSignal::new(false),
        }
    }

    /// Current form fields, read without tracking
    pub fn form(&self) -> AssetQueryForm {
        let query_type = self
            .query_type
            .get_untracked()
            .parse()
            .unwrap_or_else(|_| QueryType::default().code());

        AssetQueryForm {
            query_type,
            asset_owner: self.selected_owner.get_untracked(),
            cluster_name: self.selected_cluster.get_untracked(),
        }
    }
}

impl Default for QueryPageState {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryPageView for QueryPageState {
    fn selected_owner(&self) -> String {
        self.selected_owner.get_untracked()
    }

    fn select_owner(&self, owner: String) {
        self.selected_owner.set(owner);
    }

    fn replace_owner_options(&self, owners: Vec<String>) {
        self.owner_options.set(owners);
        self.selected_owner.set(String::new());
    }

    fn replace_cluster_options(&self, clusters: Vec<String>) {
        self.cluster_options.set(clusters);
        self.selected_cluster.set(String::new());
    }

    fn reveal_results(&self) {
        self.results_visible.set(true);
    }

    fn show_results(&self, results: ResultsView) {
        self.results.set(results);
    }
}
