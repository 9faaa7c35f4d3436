use dioxus::prelude::*;

use crate::charts::{status_view, ChartApi, ServerChartApi};
use crate::components::{CsvTable, EChart, StatusBanner};
use crate::routes::{NavState, Route};
use crate::shared::types::Chart;
use crate::utils::format::{chart_type_label, format_local};

/// Detail view for one chart. Uses the record handed over by the list page
/// when it matches `id` and fetches it otherwise.
#[allow(non_snake_case)]
#[component]
pub fn ChartDetail(id: i64) -> Element {
    let nav_state = use_context::<NavState>();

    let chart = use_resource(use_reactive!(|id| async move {
        if let Some(c) = nav_state.chart_for(id) {
            return Ok(c);
        }
        match ServerChartApi.get(id).await {
            Ok(res) => res.data.ok_or_else(|| {
                res.message
                    .unwrap_or_else(|| "Failed to fetch the chart".to_string())
            }),
            Err(e) => Err(format!("Failed to fetch the chart, {e}")),
        }
    }));

    let body = match &*chart.read_unchecked() {
        Some(Ok(c)) => rsx! { ChartDetailBody { chart: c.clone() } },
        Some(Err(e)) => rsx! {
            div { class: "text-center text-slate-300 py-16 space-y-2",
                p { class: "text-lg", "{e}" }
                Link { to: Route::MyChart {}, class: "text-sm text-sky-400", "Back to my charts" }
            }
        },
        None => rsx! {
            div { class: "animate-pulse space-y-3",
                div { class: "h-8 w-64 bg-slate-800 rounded" }
                div { class: "h-80 bg-slate-900 rounded-2xl" }
            }
        },
    };

    rsx! {
        div { class: "w-full max-w-5xl mx-auto space-y-6",
            {body}
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn ChartDetailBody(chart: Chart) -> Element {
    let view = status_view(&chart);
    let name = chart.name.clone().unwrap_or_default();
    let kind = chart_type_label(chart.chart_type.as_deref());
    let created = chart.create_time.as_deref().map(format_local);

    rsx! {
        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 shadow-xl p-6 space-y-4",
            div { class: "flex items-end justify-between gap-4",
                div {
                    h1 { class: "text-2xl font-semibold tracking-tight text-slate-100", "{name}" }
                    if let Some(k) = kind {
                        div { class: "text-sm text-slate-400", "{k}" }
                    }
                }
                if let Some(ts) = created {
                    time { class: "text-xs text-slate-500", "{ts}" }
                }
            }
            if let Some(goal) = &chart.goal {
                p { class: "text-sm text-slate-300", "Goal: {goal}" }
            }
            if let Some(b) = view.banner.clone() {
                StatusBanner { banner: b }
            }
            if view.show_chart {
                if let Some(opt) = chart.gen_chart.clone() {
                    EChart { option: opt, height: 420 }
                }
                div { class: "space-y-1",
                    h2 { class: "text-lg font-medium text-slate-200", "Analysis result" }
                    pre { class: "whitespace-pre-wrap text-sm text-slate-300",
                        "{chart.gen_result.clone().unwrap_or_default()}"
                    }
                }
            }
        }
        if let Some(data) = chart.chart_data.clone() {
            div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 shadow-xl p-6 space-y-3",
                h2 { class: "text-lg font-medium text-slate-200", "Raw data" }
                CsvTable { csv_data: data }
            }
        }
    }
}
