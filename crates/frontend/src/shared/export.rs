//! File downloads generated on the client
use contracts::dashboards::d402_system_asset_query::SystemPageContext;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub const JSON_MIME_TYPE: &str = "application/json";

/// A file ready to be handed to the browser
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub content: String,
}

/// `{system_name}_data.json` holding the embedded asset data
pub fn build_dataset_export(context: &SystemPageContext) -> Result<ExportFile, String> {
    let content = serde_json::to_string_pretty(&context.assets_info)
        .map_err(|e| format!("Failed to serialize dataset: {}", e))?;

    Ok(ExportFile {
        file_name: format!("{}_data.json", context.system_name),
        mime_type: JSON_MIME_TYPE,
        content,
    })
}

/// Download the embedded asset data of the page
pub fn export_dataset(context: &SystemPageContext) -> Result<(), String> {
    let file = build_dataset_export(context)?;
    download_file(&file)
}

/// Trigger a browser download of `file`
pub fn download_file(file: &ExportFile) -> Result<(), String> {
    let blob = create_blob(&file.content, file.mime_type)?;
    download_blob(&blob, &file.file_name)
}

fn create_blob(content: &str, mime_type: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime_type);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// The anchor is removed and the URL revoked on the next timer tick so the
/// click is processed first
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    Timeout::new(0, move || {
        if let Err(e) = body.remove_child(&anchor) {
            log::warn!("Failed to remove download anchor: {:?}", e);
        }
        if let Err(e) = Url::revoke_object_url(&url) {
            log::warn!("Failed to revoke object URL: {:?}", e);
        }
    })
    .forget();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context(name: &str, assets_info: serde_json::Value) -> SystemPageContext {
        SystemPageContext {
            system_id: "s1".to_string(),
            system_name: name.to_string(),
            assets_info,
            api_base: None,
        }
    }

    #[test]
    fn test_dataset_export_name_and_content() {
        let file = build_dataset_export(&context("Sys1", json!({"a": 1}))).unwrap();

        assert_eq!(file.file_name, "Sys1_data.json");
        assert_eq!(file.mime_type, "application/json");
        let parsed: serde_json::Value = serde_json::from_str(&file.content).unwrap();
        assert_eq!(parsed, json!({"a": 1}));
    }

    #[test]
    fn test_dataset_export_is_pretty_printed() {
        let file = build_dataset_export(&context("X", json!({"a": [1, 2]}))).unwrap();
        assert_eq!(file.content, "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
    }

    #[test]
    fn test_missing_dataset_exports_null() {
        let file = build_dataset_export(&context("Empty", serde_json::Value::Null)).unwrap();
        assert_eq!(file.content, "null");
    }
}
