use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus::logger::tracing::info;

use crate::charts::{delete_chart, refresh, retry_chart, ChartList, ServerChartApi};
use crate::components::toast::Toasts;
use crate::components::{use_toasts, ChartCard, Pagination};
use crate::routes::push_chart_detail;
use crate::shared::types::{Chart, ChartQuery};

/// Fetches `query` and replaces the shown page. Responses are applied in
/// arrival order, so a slow earlier request can overwrite a newer one.
async fn reload(mut list: Signal<ChartList>, mut toasts: Toasts, query: ChartQuery) {
    #[cfg(feature = "web")]
    info!("[my_chart] loading page {} (size {})", query.current, query.page_size);
    let mut next = list.peek().clone();
    list.write().loading = true;
    if let Some(notice) = refresh(&ServerChartApi, &mut next, &query).await {
        toasts.push(notice);
    }
    list.set(next);
}

#[allow(non_snake_case)]
#[component]
pub fn MyChart() -> Element {
    let mut toasts = use_toasts();
    let mut query = use_signal(ChartQuery::default);
    let list = use_signal(|| ChartList {
        loading: true,
        ..Default::default()
    });
    let mut search_text = use_signal(String::new);

    use_effect(move || {
        let q = query();
        spawn(async move {
            reload(list, toasts, q).await;
        });
    });

    let mut submit_search = move || {
        let next = query.peek().search(&search_text.peek());
        query.set(next);
    };

    let on_delete = move |id: i64| {
        spawn(async move {
            let out = delete_chart(&ServerChartApi, id).await;
            toasts.push(out.notice);
            if out.reload {
                reload(list, toasts, query.peek().clone()).await;
            }
        });
    };

    let on_retry = move |id: i64| {
        spawn(async move {
            let out = retry_chart(&ServerChartApi, id).await;
            toasts.push(out.notice);
            if out.reload {
                reload(list, toasts, query.peek().clone()).await;
            }
        });
    };

    let on_details = move |chart: Chart| push_chart_detail(chart);

    let state = list.read().clone();
    let q = query.read().clone();

    rsx! {
        div { class: "w-full max-w-6xl mx-auto space-y-6",
            div { class: "flex gap-2",
                input {
                    class: "flex-1 rounded-md border border-slate-700 bg-slate-900 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-sky-500",
                    r#type: "search",
                    placeholder: "Search by chart name",
                    value: "{search_text}",
                    oninput: move |e| search_text.set(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            submit_search();
                        }
                    },
                }
                button {
                    class: "px-4 py-2 rounded-md bg-sky-600 hover:bg-sky-500 text-sm text-white disabled:opacity-50",
                    disabled: state.loading,
                    onclick: move |_| submit_search(),
                    if state.loading { "Searching…" } else { "Search" }
                }
            }

            if state.loading && state.records.is_empty() {
                div { class: "grid grid-cols-1 lg:grid-cols-2 gap-4 animate-pulse",
                    for i in 0..2 {
                        div { key: "{i}", class: "h-64 rounded-2xl bg-slate-900" }
                    }
                }
            } else if state.records.is_empty() {
                div { class: "text-center text-slate-400 py-16", "No charts yet" }
            } else {
                div { class: "grid grid-cols-1 lg:grid-cols-2 gap-4",
                    for chart in state.records.iter().cloned() {
                        ChartCard {
                            key: "{chart.id.unwrap_or_default()}",
                            chart: chart.clone(),
                            on_delete,
                            on_retry,
                            on_details,
                        }
                    }
                }
            }

            Pagination {
                query: q,
                total: state.total,
                on_change: move |(page, size): (u32, u32)| {
                    let next = query.peek().paginate(page, size);
                    query.set(next);
                },
            }
        }
    }
}
