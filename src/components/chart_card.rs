use dioxus::prelude::*;

use crate::charts::{status_view, Banner, BannerKind, ChartAction};
use crate::components::EChart;
use crate::shared::types::Chart;
use crate::utils::format::{chart_type_label, format_local};

#[allow(non_snake_case)]
#[component]
pub fn StatusBanner(banner: Banner) -> Element {
    let (icon, cls) = match banner.kind {
        BannerKind::Warning => ("!", "text-amber-400"),
        BannerKind::Info => ("i", "text-sky-400"),
        BannerKind::Error => ("✗", "text-red-400"),
    };
    rsx! {
        div { class: "flex flex-col items-center gap-2 py-8 text-center",
            div { class: "grid place-items-center w-12 h-12 rounded-full border-2 border-current text-xl font-bold {cls}", "{icon}" }
            div { class: "text-lg font-medium text-slate-200", "{banner.title}" }
            if let Some(msg) = &banner.message {
                div { class: "text-sm text-slate-400", "{msg}" }
            }
        }
    }
}

/// Delete button that asks for confirmation first.
#[allow(non_snake_case)]
#[component]
pub fn ConfirmDelete(on_confirm: EventHandler<()>, #[props(default)] prominent: bool) -> Element {
    let mut confirming = use_signal(|| false);
    let btn = if prominent {
        "px-3 py-1.5 rounded-md bg-red-600 hover:bg-red-500 text-white text-sm"
    } else {
        "text-xs text-red-400 hover:text-red-300"
    };

    rsx! {
        span { class: "relative inline-block",
            button { class: "{btn}", onclick: move |_| confirming.set(true), "Delete" }
            if confirming() {
                div { class: "absolute right-0 z-10 mt-2 w-56 rounded-lg border border-slate-700 bg-slate-900 p-3 text-left shadow-xl space-y-2",
                    div { class: "text-sm text-slate-200", "Delete this chart?" }
                    div { class: "text-xs text-slate-400", "This cannot be undone." }
                    div { class: "flex justify-end gap-2 pt-1",
                        button {
                            class: "px-2 py-1 text-xs rounded border border-slate-700 text-slate-300",
                            onclick: move |_| confirming.set(false),
                            "Cancel"
                        }
                        button {
                            class: "px-2 py-1 text-xs rounded bg-red-600 text-white",
                            onclick: move |_| {
                                confirming.set(false);
                                on_confirm.call(());
                            },
                            "OK"
                        }
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn ChartCard(
    chart: Chart,
    on_delete: EventHandler<i64>,
    on_retry: EventHandler<i64>,
    on_details: EventHandler<Chart>,
) -> Element {
    let view = status_view(&chart);
    let id = chart.id.unwrap_or(0);
    let name = chart.name.clone().unwrap_or_default();
    let initial = name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_else(|| "?".into());
    let description = chart_type_label(chart.chart_type.as_deref());
    let created = chart.create_time.as_deref().map(format_local);
    let has = |a: ChartAction| view.actions.contains(&a);
    let (can_delete, can_retry, can_view) = (
        has(ChartAction::Delete),
        has(ChartAction::Retry),
        has(ChartAction::ViewDetails),
    );
    let details_chart = chart.clone();

    rsx! {
        div { class: "w-full rounded-2xl border border-slate-800 bg-slate-900/60 shadow-xl p-6 space-y-4",
            div { class: "flex items-start gap-3",
                div { class: "grid place-items-center w-10 h-10 rounded-full bg-slate-800 text-slate-300 font-semibold", "{initial}" }
                div { class: "flex-1 min-w-0",
                    div { class: "text-base font-medium text-slate-100 truncate", "{name}" }
                    if let Some(d) = description {
                        div { class: "text-xs text-slate-400", "{d}" }
                    }
                }
                if let Some(ts) = created {
                    time { class: "text-xs text-slate-500", "{ts}" }
                }
            }

            if let Some(b) = view.banner.clone() {
                StatusBanner { banner: b }
            }

            if view.show_chart {
                div { class: "flex items-center gap-3 text-sm text-slate-300",
                    p { class: "flex-1", "Goal: {chart.goal.clone().unwrap_or_default()}" }
                    if can_view {
                        button {
                            class: "text-xs text-sky-400 hover:text-sky-300",
                            onclick: move |_| on_details.call(details_chart.clone()),
                            "View details"
                        }
                    }
                    if can_delete {
                        ConfirmDelete { on_confirm: move |_| on_delete.call(id) }
                    }
                }
                details { class: "rounded-lg border border-slate-800 px-3 py-2",
                    summary { class: "cursor-pointer text-sm text-slate-300", "Analysis result" }
                    pre { class: "whitespace-pre-wrap text-sm text-slate-300 pt-2",
                        "{chart.gen_result.clone().unwrap_or_default()}"
                    }
                }
                if let Some(opt) = chart.gen_chart.clone() {
                    EChart { option: opt }
                }
            } else if can_retry {
                div { class: "flex justify-center gap-3",
                    button {
                        class: "px-3 py-1.5 rounded-md bg-sky-600 hover:bg-sky-500 text-white text-sm",
                        onclick: move |_| on_retry.call(id),
                        "Regenerate"
                    }
                    if can_delete {
                        ConfirmDelete { prominent: true, on_confirm: move |_| on_delete.call(id) }
                    }
                }
            }
        }
    }
}
