use crate::dashboards::SystemAssetQueryPage;
use crate::shared::icons::icon;
use crate::shared::page_context::read_page_context;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    match read_page_context() {
        Ok(context) => view! { <SystemAssetQueryPage context=context /> }.into_any(),
        Err(e) => {
            log::error!("Failed to read page context: {}", e);
            view! {
                <div class="d402-error">
                    {icon("alert")}
                    <strong>"The page could not be initialized: "</strong>
                    {e}
                </div>
            }
            .into_any()
        }
    }
}
