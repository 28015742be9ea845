//! Classification of query responses into what the results area shows.
//!
//! The backend answers with loosely shaped JSON, so everything here works on
//! `serde_json::Value` and falls back to a formatted dump for shapes it does
//! not recognise.

use serde_json::Value;

/// Label used for a missing cluster name or asset owner
pub const UNKNOWN_LABEL: &str = "unknown";
/// Label of the single row shown when a device count has no clusters
pub const NO_DATA_LABEL: &str = "no data";
/// Text shown while a query is in flight
pub const LOADING_LABEL: &str = "Loading results...";

/// Content of the results area
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultsView {
    /// Nothing submitted yet
    #[default]
    Empty,
    Loading,
    /// Transport or parse failure of the query request
    RequestFailed(String),
    /// `error` field reported by the backend
    ServerError(String),
    DeviceCount(DeviceCountSummary),
    /// Pretty-printed response for every other query type
    RawJson(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeviceCountSummary {
    pub total_devices: String,
    /// Empty when the response had no clusters; the table then shows a
    /// single `NO_DATA_LABEL` row
    pub rows: Vec<ClusterRowView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClusterRowView {
    pub cluster_name: String,
    pub device_count: String,
    pub asset_owner: String,
}

/// Turn a query response into the view shown in the results area
pub fn render_results(data: &Value) -> ResultsView {
    if let Some(error) = data.get("error").filter(|e| is_truthy(e)) {
        return ResultsView::ServerError(display_value(error));
    }

    let is_device_count = data
        .get("query_type")
        .and_then(Value::as_f64)
        .is_some_and(|t| t == 1.0);

    if is_device_count {
        return match device_count_summary(data) {
            Ok(summary) => ResultsView::DeviceCount(summary),
            Err(e) => ResultsView::RequestFailed(e),
        };
    }

    let data = normalize_numbers(data);
    ResultsView::RawJson(serde_json::to_string_pretty(&data).unwrap_or_else(|_| data.to_string()))
}

/// Whole-valued floats become integers so `10.0` is printed as `10`
fn normalize_numbers(value: &Value) -> Value {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => Value::from(f as i64),
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(normalize_numbers).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), normalize_numbers(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// A `null` cluster entry cannot be read and fails the whole rendering
fn device_count_summary(data: &Value) -> Result<DeviceCountSummary, String> {
    let total_devices = data
        .get("total_devices")
        .filter(|v| is_truthy(v))
        .map(display_value)
        .unwrap_or_else(|| "0".to_string());

    let rows = data
        .get("clusters")
        .and_then(Value::as_array)
        .map(|clusters| clusters.iter().map(cluster_row).collect::<Result<Vec<_>, _>>())
        .transpose()?
        .unwrap_or_default();

    Ok(DeviceCountSummary {
        total_devices,
        rows,
    })
}

fn cluster_row(cluster: &Value) -> Result<ClusterRowView, String> {
    if cluster.is_null() {
        return Err("Cannot read properties of null (reading 'Cluster_name')".to_string());
    }

    let label_or_unknown = |field: &str| {
        cluster
            .get(field)
            .filter(|v| is_truthy(v))
            .map(display_value)
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
    };

    Ok(ClusterRowView {
        cluster_name: label_or_unknown("Cluster_name"),
        device_count: cluster.get("Device_count").map(display_value).unwrap_or_default(),
        asset_owner: label_or_unknown("Asset_owner"),
    })
}

/// Falsy values are `null`, `false`, `0`, and the empty string
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text of a JSON value as placed into a table cell
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_device_count_with_one_cluster() {
        let data = json!({
            "query_type": 1,
            "total_devices": 3,
            "clusters": [{"Cluster_name": "c1", "Device_count": 5, "Asset_owner": "alice"}]
        });

        let ResultsView::DeviceCount(summary) = render_results(&data) else {
            panic!("expected device count view");
        };
        assert_eq!(summary.total_devices, "3");
        assert_eq!(
            summary.rows,
            vec![ClusterRowView {
                cluster_name: "c1".into(),
                device_count: "5".into(),
                asset_owner: "alice".into(),
            }]
        );
    }

    #[test]
    fn test_device_count_without_clusters() {
        let data = json!({"query_type": 1, "clusters": []});

        let ResultsView::DeviceCount(summary) = render_results(&data) else {
            panic!("expected device count view");
        };
        assert_eq!(summary.total_devices, "0");
        assert!(summary.rows.is_empty());

        let ResultsView::DeviceCount(summary) = render_results(&json!({"query_type": 1})) else {
            panic!("expected device count view");
        };
        assert!(summary.rows.is_empty());
    }

    #[test]
    fn test_device_count_fallbacks() {
        let data = json!({
            "query_type": 1,
            "total_devices": 0,
            "clusters": [{"Cluster_name": "", "Asset_owner": null}]
        });

        let ResultsView::DeviceCount(summary) = render_results(&data) else {
            panic!("expected device count view");
        };
        assert_eq!(summary.total_devices, "0");
        let row = &summary.rows[0];
        assert_eq!(row.cluster_name, UNKNOWN_LABEL);
        assert_eq!(row.asset_owner, UNKNOWN_LABEL);
        assert_eq!(row.device_count, "");
    }

    #[test]
    fn test_error_short_circuits() {
        let data = json!({"error": "bad request", "query_type": 1, "clusters": []});
        assert_eq!(
            render_results(&data),
            ResultsView::ServerError("bad request".to_string())
        );
    }

    #[test]
    fn test_empty_error_is_ignored() {
        let data = json!({"error": "", "query_type": 2});
        assert!(matches!(render_results(&data), ResultsView::RawJson(_)));
    }

    #[test]
    fn test_other_query_types_dump_json() {
        let data = json!({"query_type": 2, "foo": "bar"});

        let ResultsView::RawJson(text) = render_results(&data) else {
            panic!("expected json view");
        };
        assert!(text.contains("\"foo\": \"bar\""));
        assert!(text.contains("\n  \"query_type\": 2"));
    }

    #[test]
    fn test_missing_query_type_and_non_objects_dump_json() {
        assert!(matches!(render_results(&json!({"a": 1})), ResultsView::RawJson(_)));
        assert_eq!(
            render_results(&json!(["x"])),
            ResultsView::RawJson("[\n  \"x\"\n]".to_string())
        );
        assert_eq!(render_results(&Value::Null), ResultsView::RawJson("null".to_string()));
    }

    #[test]
    fn test_string_query_type_is_not_device_count() {
        let data = json!({"query_type": "1"});
        assert!(matches!(render_results(&data), ResultsView::RawJson(_)));
    }

    #[test]
    fn test_json_dump_prints_whole_floats_as_integers() {
        let data = json!({"query_type": 5, "cap": 10.0, "nested": [{"ratio": 0.5, "n": -3.0}]});

        let ResultsView::RawJson(text) = render_results(&data) else {
            panic!("expected json view");
        };
        assert!(text.contains("\"cap\": 10\n") || text.contains("\"cap\": 10,"));
        assert!(!text.contains("10.0"));
        assert!(text.contains("\"ratio\": 0.5"));
        assert!(text.contains("\"n\": -3"));
        assert!(!text.contains("-3.0"));
    }

    #[test]
    fn test_null_cluster_entry_fails_rendering() {
        let data = json!({"query_type": 1, "total_devices": 2, "clusters": [{"Cluster_name": "c1"}, null]});

        let ResultsView::RequestFailed(message) = render_results(&data) else {
            panic!("expected failed view");
        };
        assert!(message.contains("null"));
    }

    #[test]
    fn test_non_object_cluster_entry_renders_unknown_row() {
        let data = json!({"query_type": 1, "clusters": ["x", 7]});

        let ResultsView::DeviceCount(summary) = render_results(&data) else {
            panic!("expected device count view");
        };
        assert_eq!(summary.rows.len(), 2);
        assert!(summary
            .rows
            .iter()
            .all(|r| r.cluster_name == UNKNOWN_LABEL && r.asset_owner == UNKNOWN_LABEL));
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!(5.0)), "5");
        assert_eq!(display_value(&json!(2.5)), "2.5");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&json!([1, null, "a"])), "1,,a");
        assert_eq!(display_value(&json!({"k": 1})), "[object Object]");
    }
}
