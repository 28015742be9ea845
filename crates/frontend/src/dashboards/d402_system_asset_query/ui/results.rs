use crate::dashboards::d402_system_asset_query::render::{
    DeviceCountSummary, ResultsView, LOADING_LABEL, NO_DATA_LABEL,
};
use leptos::prelude::*;

const ERROR_STYLE: &str =
    "background:#fed7e2;color:#b83280;padding:15px;border-radius:5px;margin-bottom:15px;";
const SUMMARY_STYLE: &str =
    "background:#e6fffa;color:#234e52;padding:15px;border-radius:5px;margin-bottom:15px;";
const TH_STYLE: &str =
    "text-align:left;padding:12px;border-bottom:1px solid #e2e8f0;background:#f7fafc;";
const TD_STYLE: &str = "padding:12px;border-bottom:1px solid #e2e8f0;";
const JSON_STYLE: &str =
    "background:#f7fafc;padding:15px;border-radius:5px;overflow:auto;font-family:monospace;";

/// Content of `#results-container`
#[component]
pub fn QueryResults(#[prop(into)] results: Signal<ResultsView>) -> impl IntoView {
    move || match results.get() {
        ResultsView::Empty => view! { <></> }.into_any(),
        ResultsView::Loading => view! {
            <div style="text-align:center;padding:20px;">{LOADING_LABEL}</div>
        }
        .into_any(),
        ResultsView::RequestFailed(message) => view! {
            <div class="d402-error" style="color:#e53e3e;padding:15px;">
                "Query failed: " {message}
            </div>
        }
        .into_any(),
        ResultsView::ServerError(message) => view! {
            <div class="d402-error" style=ERROR_STYLE>
                <strong>"Error: "</strong>
                {message}
            </div>
        }
        .into_any(),
        ResultsView::DeviceCount(summary) => device_count_view(summary),
        ResultsView::RawJson(text) => view! {
            <pre class="d402-json" style=JSON_STYLE>{text}</pre>
        }
        .into_any(),
    }
}

fn device_count_view(summary: DeviceCountSummary) -> AnyView {
    let DeviceCountSummary {
        total_devices,
        rows,
    } = summary;

    let body = if rows.is_empty() {
        view! {
            <tr>
                <td colspan="3" style="padding:12px;text-align:center;">{NO_DATA_LABEL}</td>
            </tr>
        }
        .into_any()
    } else {
        rows.into_iter()
            .map(|row| {
                view! {
                    <tr>
                        <td style=TD_STYLE>{row.cluster_name}</td>
                        <td style=TD_STYLE>{row.device_count}</td>
                        <td style=TD_STYLE>{row.asset_owner}</td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="d402-summary" style=SUMMARY_STYLE>
            <strong>"Total devices: "</strong>
            {total_devices}
        </div>
        <table class="d402-table" style="width:100%;border-collapse:collapse;margin-top:15px;">
            <thead>
                <tr>
                    <th style=TH_STYLE>"Cluster name"</th>
                    <th style=TH_STYLE>"Device count"</th>
                    <th style=TH_STYLE>"Asset owner"</th>
                </tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
    .into_any()
}
