use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Envelope every BI backend endpoint answers with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub code: i32,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: 0,
            data: Some(data),
            message: None,
        }
    }

    pub fn empty(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            data: None,
            message: Some(message.into()),
        }
    }
}

impl ApiResponse<Value> {
    /// `data` present and truthy the way the backend's JS clients read it.
    pub fn succeeded(&self) -> bool {
        self.data.as_ref().map(is_truthy).unwrap_or(false)
    }
}

pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartStatus {
    Wait,
    Running,
    Succeed,
    Failed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Chart {
    #[serde(deserialize_with = "flexible_id")]
    pub id: Option<i64>,
    pub name: Option<String>,
    pub goal: Option<String>,
    pub chart_data: Option<String>,
    pub chart_type: Option<String>,
    pub status: Option<ChartStatus>,
    pub gen_chart: Option<String>,
    pub gen_result: Option<String>,
    pub exec_message: Option<String>,
    #[serde(deserialize_with = "flexible_id")]
    pub user_id: Option<i64>,
    pub create_time: Option<String>,
    pub update_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartPage {
    pub records: Option<Vec<Chart>>,
    #[serde(deserialize_with = "flexible_id")]
    pub total: Option<i64>,
    #[serde(deserialize_with = "flexible_id")]
    pub size: Option<i64>,
    #[serde(deserialize_with = "flexible_id")]
    pub current: Option<i64>,
    #[serde(deserialize_with = "flexible_id")]
    pub pages: Option<i64>,
}

pub const DEFAULT_PAGE_SIZE: u32 = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartQuery {
    pub current: u32,
    pub page_size: u32,
    pub sort_field: String,
    pub sort_order: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
}

impl Default for ChartQuery {
    fn default() -> Self {
        Self {
            current: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort_field: "createTime".into(),
            sort_order: "desc".into(),
            name: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdRequest {
    pub id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenChartRequest {
    pub name: String,
    pub goal: String,
    pub chart_type: String,
    pub csv: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BiResponse {
    #[serde(deserialize_with = "flexible_id")]
    pub chart_id: Option<i64>,
    pub gen_chart: Option<String>,
    pub gen_result: Option<String>,
}

// The backend serializes 64-bit ids as strings to keep JS clients lossless.
fn flexible_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("id out of range: {n}"))),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid id {s:?}: {e}"))),
        Some(other) => Err(D::Error::custom(format!("unexpected id value: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chart_accepts_string_and_numeric_ids() {
        let a: Chart = serde_json::from_value(json!({ "id": "1790000000000000001" })).unwrap();
        let b: Chart = serde_json::from_value(json!({ "id": 42, "userId": null })).unwrap();
        assert_eq!(a.id, Some(1_790_000_000_000_000_001));
        assert_eq!(b.id, Some(42));
        assert_eq!(b.user_id, None);
    }

    #[test]
    fn unknown_status_does_not_fail_decoding() {
        let c: Chart = serde_json::from_value(json!({ "id": 1, "status": "paused" })).unwrap();
        assert_eq!(c.status, Some(ChartStatus::Unknown));
        let c: Chart = serde_json::from_value(json!({ "status": "succeed" })).unwrap();
        assert_eq!(c.status, Some(ChartStatus::Succeed));
    }

    #[test]
    fn page_response_decodes_backend_shape() {
        let res: ApiResponse<ChartPage> = serde_json::from_value(json!({
            "code": 0,
            "data": {
                "records": [{ "id": "7", "name": "sales", "status": "wait" }],
                "total": "11",
                "size": 4,
                "current": 1
            },
            "message": "ok"
        }))
        .unwrap();
        let page = res.data.unwrap();
        assert_eq!(page.total, Some(11));
        assert_eq!(page.records.unwrap()[0].name.as_deref(), Some("sales"));
    }

    #[test]
    fn missing_data_decodes_as_none() {
        let res: ApiResponse<ChartPage> =
            serde_json::from_value(json!({ "code": 40100, "message": "not logged in" })).unwrap();
        assert!(res.data.is_none());
    }

    #[test]
    fn query_serializes_camel_case_without_empty_name() {
        let v = serde_json::to_value(ChartQuery::default()).unwrap();
        assert_eq!(
            v,
            json!({ "current": 1, "pageSize": 4, "sortField": "createTime", "sortOrder": "desc" })
        );
    }

    #[test]
    fn truthiness_follows_js_rules() {
        for falsy in [json!(false), json!(0), json!(""), json!(null)] {
            assert!(!ApiResponse { code: 0, data: Some(falsy), message: None }.succeeded());
        }
        for truthy in [json!(true), json!(1), json!("x"), json!({}), json!([])] {
            assert!(ApiResponse { code: 0, data: Some(truthy), message: None }.succeeded());
        }
        assert!(!ApiResponse::<Value>::empty(500, "boom").succeeded());
    }
}
