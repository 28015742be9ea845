//! Server-rendered page context
//!
//! The server embeds the context as JSON when it renders the page:
//!
//! ```html
//! <script type="application/json" id="system-page-context">
//!   {"system_id": "ai400-01", "system_name": "AI400", "assets_info": {...}}
//! </script>
//! ```

use contracts::dashboards::d402_system_asset_query::SystemPageContext;

pub const PAGE_CONTEXT_ELEMENT_ID: &str = "system-page-context";

/// Read the context embedded into the current document
pub fn read_page_context() -> Result<SystemPageContext, String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document object")?;

    let raw = document
        .get_element_by_id(PAGE_CONTEXT_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .ok_or_else(|| format!("Element #{} not found", PAGE_CONTEXT_ELEMENT_ID))?;

    parse_page_context(&raw)
}

pub fn parse_page_context(raw: &str) -> Result<SystemPageContext, String> {
    let context: SystemPageContext = serde_json::from_str(raw.trim())
        .map_err(|e| format!("Invalid page context: {}", e))?;

    if context.system_id.trim().is_empty() {
        return Err("Invalid page context: empty system_id".to_string());
    }

    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_page_context() {
        let raw = r#"
            {"system_id": "ai400-01", "system_name": "AI400",
             "assets_info": {"clusters": []}, "api_base": "http://127.0.0.1:5000"}
        "#;

        let context = parse_page_context(raw).unwrap();
        assert_eq!(context.system_id, "ai400-01");
        assert_eq!(context.system_name, "AI400");
        assert_eq!(context.assets_info, json!({"clusters": []}));
        assert_eq!(context.api_base(), "http://127.0.0.1:5000");
    }

    #[test]
    fn test_parse_page_context_rejects_bad_input() {
        assert!(parse_page_context("").is_err());
        assert!(parse_page_context(r#"{"system_name": "AI400"}"#).is_err());
        assert!(parse_page_context(r#"{"system_id": " ", "system_name": "AI400"}"#).is_err());
    }
}
