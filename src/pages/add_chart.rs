use dioxus::prelude::*;

use crate::charts::{ChartApi, ServerChartApi};
use crate::components::{use_toasts, CsvTable, EChart, Notice};
use crate::shared::types::{BiResponse, GenChartRequest};

pub const CHART_TYPES: &[&str] = &[
    "Line chart",
    "Bar chart",
    "Stacked chart",
    "Pie chart",
    "Radar chart",
];

/// Checks the form before anything goes to the server.
pub fn validate(req: &GenChartRequest) -> Result<(), &'static str> {
    if req.goal.trim().is_empty() {
        return Err("Please describe the analysis goal");
    }
    if req.csv.trim().is_empty() {
        return Err("Please provide the raw data");
    }
    if req.name.chars().count() > 100 {
        return Err("The chart name is too long");
    }
    Ok(())
}

#[allow(non_snake_case)]
#[component]
pub fn AddChart() -> Element {
    rsx! { ChartForm { asynchronous: false } }
}

#[allow(non_snake_case)]
#[component]
pub fn AddChartAsync() -> Element {
    rsx! { ChartForm { asynchronous: true } }
}

#[allow(non_snake_case)]
#[component]
fn ChartForm(asynchronous: bool) -> Element {
    let mut toasts = use_toasts();
    let mut form = use_signal(GenChartRequest::default);
    let mut submitting = use_signal(|| false);
    let mut result = use_signal(|| Option::<BiResponse>::None);

    let submit = move |_: MouseEvent| {
        let req = form.peek().clone();
        if let Err(msg) = validate(&req) {
            toasts.push(Notice::error(msg));
            return;
        }
        submitting.set(true);
        spawn(async move {
            let res = if asynchronous {
                ServerChartApi.generate_async(req).await
            } else {
                ServerChartApi.generate(req).await
            };
            match res {
                Ok(r) => match r.data {
                    Some(_) if asynchronous => {
                        toasts.push(Notice::success(
                            "Submitted, check the result under My charts",
                        ));
                        form.set(GenChartRequest::default());
                    }
                    Some(bi) => {
                        toasts.push(Notice::success("Analysis finished"));
                        result.set(Some(bi));
                    }
                    None => toasts.push(Notice::error(format!(
                        "Analysis failed, {}",
                        r.message.unwrap_or_default()
                    ))),
                },
                Err(e) => toasts.push(Notice::error(format!("Analysis failed, {e}"))),
            }
            submitting.set(false);
        });
    };

    let f = form.read().clone();
    let title = if asynchronous {
        "Smart analysis (async)"
    } else {
        "Smart analysis"
    };
    let input_cls = "w-full rounded-md border border-slate-700 bg-slate-900 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-sky-500";

    rsx! {
        div { class: "w-full max-w-5xl mx-auto grid grid-cols-1 lg:grid-cols-2 gap-6",
            div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 shadow-xl p-6 space-y-4",
                h1 { class: "text-xl font-semibold text-slate-100", "{title}" }
                label { class: "block text-sm text-slate-300", "Goal *" }
                textarea {
                    class: "{input_cls} h-24",
                    placeholder: "e.g. analyse the growth of users on the site",
                    value: "{f.goal}",
                    oninput: move |e| form.write().goal = e.value(),
                }
                label { class: "block text-sm text-slate-300", "Chart name" }
                input {
                    class: "{input_cls}",
                    value: "{f.name}",
                    oninput: move |e| form.write().name = e.value(),
                }
                label { class: "block text-sm text-slate-300", "Chart type" }
                select {
                    class: "{input_cls}",
                    value: "{f.chart_type}",
                    onchange: move |e| form.write().chart_type = e.value(),
                    option { value: "", "Any" }
                    for t in CHART_TYPES {
                        option { key: "{t}", value: "{t}", "{t}" }
                    }
                }
                label { class: "block text-sm text-slate-300", "Raw data (CSV) *" }
                textarea {
                    class: "{input_cls} h-40 font-mono",
                    placeholder: "date,users\n1,10\n2,20",
                    value: "{f.csv}",
                    oninput: move |e| form.write().csv = e.value(),
                }
                div { class: "flex gap-2 pt-2",
                    button {
                        class: "px-4 py-2 rounded-md bg-sky-600 hover:bg-sky-500 text-sm text-white disabled:opacity-50",
                        disabled: submitting(),
                        onclick: submit,
                        if submitting() { "Submitting…" } else { "Submit" }
                    }
                    button {
                        class: "px-4 py-2 rounded-md border border-slate-700 text-sm text-slate-300",
                        onclick: move |_| {
                            form.set(GenChartRequest::default());
                            result.set(None);
                        },
                        "Reset"
                    }
                }
            }
            div { class: "space-y-6",
                if !f.csv.trim().is_empty() {
                    div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 shadow-xl p-6 space-y-3",
                        h2 { class: "text-lg font-medium text-slate-200", "Data preview" }
                        CsvTable { csv_data: f.csv.clone() }
                    }
                }
                if let Some(bi) = result() {
                    div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 shadow-xl p-6 space-y-3",
                        h2 { class: "text-lg font-medium text-slate-200", "Generated chart" }
                        if let Some(opt) = bi.gen_chart.clone() {
                            EChart { option: opt }
                        }
                        h2 { class: "text-lg font-medium text-slate-200", "Analysis result" }
                        pre { class: "whitespace-pre-wrap text-sm text-slate-300",
                            "{bi.gen_result.clone().unwrap_or_default()}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(goal: &str, csv: &str) -> GenChartRequest {
        GenChartRequest {
            name: "users".into(),
            goal: goal.into(),
            chart_type: "Line chart".into(),
            csv: csv.into(),
        }
    }

    #[test]
    fn goal_and_data_are_required() {
        assert_eq!(validate(&req(" ", "a\n1")), Err("Please describe the analysis goal"));
        assert_eq!(validate(&req("growth", "\n")), Err("Please provide the raw data"));
        assert_eq!(validate(&req("growth", "a\n1")), Ok(()));
    }

    #[test]
    fn long_names_are_rejected() {
        let mut r = req("growth", "a\n1");
        r.name = "x".repeat(101);
        assert!(validate(&r).is_err());
    }
}
