use dioxus::logger::tracing::warn;
use serde_json::Value;

use crate::shared::types::{Chart, ChartStatus};

/// Drops the top-level `title` from a serialized ECharts option.
///
/// The list page labels every card with the record name already, so the
/// chart's own title would only repeat it.
pub fn strip_chart_title(gen_chart: &str) -> Result<String, serde_json::Error> {
    let mut option: Value = serde_json::from_str(gen_chart)?;
    if let Value::Object(map) = &mut option {
        map.remove("title");
    }
    serde_json::to_string(&option)
}

pub fn prepare_records(records: Vec<Chart>) -> Vec<Chart> {
    records
        .into_iter()
        .map(|mut chart| {
            if chart.status == Some(ChartStatus::Succeed) {
                if let Some(raw) = chart.gen_chart.as_deref() {
                    match strip_chart_title(raw) {
                        Ok(stripped) => chart.gen_chart = Some(stripped),
                        Err(e) => warn!(
                            "[charts] chart {:?} has an unreadable option: {e}",
                            chart.id
                        ),
                    }
                }
            }
            chart
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn succeed(gen_chart: &str) -> Chart {
        Chart {
            id: Some(1),
            status: Some(ChartStatus::Succeed),
            gen_chart: Some(gen_chart.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn title_is_removed_and_everything_else_kept() {
        let raw = json!({
            "title": { "text": "Users per day" },
            "xAxis": { "type": "category", "data": ["1", "2"] },
            "series": [{ "type": "line", "data": [10, 20], "title": "nested stays" }]
        })
        .to_string();
        let out: Value = serde_json::from_str(&strip_chart_title(&raw).unwrap()).unwrap();
        assert_eq!(
            out,
            json!({
                "xAxis": { "type": "category", "data": ["1", "2"] },
                "series": [{ "type": "line", "data": [10, 20], "title": "nested stays" }]
            })
        );
    }

    #[test]
    fn option_without_title_is_unchanged() {
        let raw = r#"{"series":[]}"#;
        assert_eq!(strip_chart_title(raw).unwrap(), raw);
    }

    #[test]
    fn only_succeeded_records_are_touched() {
        let raw = r#"{"title":{"text":"t"},"series":[]}"#;
        let mut failed = succeed(raw);
        failed.status = Some(ChartStatus::Failed);
        let out = prepare_records(vec![succeed(raw), failed]);
        assert_eq!(out[0].gen_chart.as_deref(), Some(r#"{"series":[]}"#));
        assert_eq!(out[1].gen_chart.as_deref(), Some(raw));
    }

    #[test]
    fn unreadable_option_is_left_alone() {
        let out = prepare_records(vec![succeed("option = {")]);
        assert_eq!(out[0].gen_chart.as_deref(), Some("option = {"));
    }
}
