use super::results::QueryResults;
use crate::dashboards::d402_system_asset_query::api::HttpAssetQueryApi;
use crate::dashboards::d402_system_asset_query::controller::AssetQueryController;
use crate::dashboards::d402_system_asset_query::view_state::QueryPageState;
use crate::shared::components::ui::Select;
use crate::shared::export::export_dataset;
use crate::shared::icons::icon;
use contracts::dashboards::d402_system_asset_query::{QueryType, SystemPageContext};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Asset query page of one system: filters, query form, results, export
#[component]
pub fn SystemAssetQueryPage(context: SystemPageContext) -> impl IntoView {
    let state = QueryPageState::new();
    let controller = AssetQueryController::new(HttpAssetQueryApi::from_context(&context), state);
    let system_name = context.system_name.clone();
    let context = StoredValue::new(context);

    // Load filters on mount
    let init_controller = controller.clone();
    Effect::new(move |_| {
        let controller = init_controller.clone();
        spawn_local(async move {
            controller.initialize().await;
        });
    });

    let owner_controller = controller.clone();
    let on_owner_change = Callback::new(move |owner: String| {
        let controller = owner_controller.clone();
        spawn_local(async move {
            controller.owner_changed(owner).await;
        });
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        let form = state.form();
        spawn_local(async move {
            controller.submit_query(&form).await;
        });
    };

    let on_export = move |_| {
        context.with_value(|ctx| {
            if let Err(e) = export_dataset(ctx) {
                log::error!("Failed to export dataset: {}", e);
            }
        });
    };

    let query_type_options = QueryType::ALL
        .iter()
        .map(|t| (t.code().to_string(), t.label().to_string()))
        .collect::<Vec<_>>();
    let owner_options = Signal::derive(move || {
        state
            .owner_options
            .get()
            .into_iter()
            .map(|o| (o.clone(), o))
            .collect::<Vec<_>>()
    });
    let cluster_options = Signal::derive(move || {
        state
            .cluster_options
            .get()
            .into_iter()
            .map(|c| (c.clone(), c))
            .collect::<Vec<_>>()
    });

    view! {
        <div id="d402_system_asset_query--dashboard" data-page-category="dashboard" class="page page--dashboard">
            <div class="page__header">
                <h1 class="page__title">{system_name}</h1>
                <button type="button" class="button button--secondary" on:click=on_export>
                    {icon("download")}
                    "Download data (JSON)"
                </button>
            </div>

            <div class="page__content">
                <form id="assetQueryForm" class="d402-form" on:submit=on_submit>
                    <Select
                        label="Query type"
                        id="query_type"
                        name="query_type"
                        value=state.query_type
                        options=Signal::stored(query_type_options)
                    />
                    <Select
                        label="Asset owner"
                        id="asset_owner"
                        name="asset_owner"
                        placeholder="All asset owners"
                        value=state.selected_owner
                        options=owner_options
                        on_change=on_owner_change
                    />
                    <Select
                        label="Cluster"
                        id="cluster_name"
                        name="cluster_name"
                        placeholder="All clusters"
                        value=state.selected_cluster
                        options=cluster_options
                    />
                    <button type="submit" class="button button--primary">
                        {icon("search")}
                        "Run query"
                    </button>
                </form>

                <div
                    id="query-results"
                    style:display=move || if state.results_visible.get() { "block" } else { "none" }
                >
                    <div id="results-container">
                        <QueryResults results=state.results />
                    </div>
                </div>
            </div>
        </div>
    }
}
