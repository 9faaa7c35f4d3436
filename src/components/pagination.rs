use dioxus::prelude::*;

use crate::shared::types::ChartQuery;

pub const PAGE_SIZES: &[u32] = &[4, 8, 12, 20];

/// Page numbers to show around `current`, with `None` as an ellipsis.
pub fn page_window(current: u32, pages: u32) -> Vec<Option<u32>> {
    if pages <= 7 {
        return (1..=pages).map(Some).collect();
    }
    let current = current.clamp(1, pages);
    let lo = current.saturating_sub(1).max(2);
    let hi = (current + 1).min(pages - 1);
    let mut out = vec![Some(1)];
    if lo > 2 {
        out.push(None);
    }
    out.extend((lo..=hi).map(Some));
    if hi < pages - 1 {
        out.push(None);
    }
    out.push(Some(pages));
    out
}

#[allow(non_snake_case)]
#[component]
pub fn Pagination(query: ChartQuery, total: u64, on_change: EventHandler<(u32, u32)>) -> Element {
    let current = query.current;
    let page_size = query.page_size;
    let pages = query.page_count(total);

    rsx! {
        div { class: "flex flex-wrap items-center justify-end gap-2 text-sm text-slate-300",
            span { class: "text-xs text-slate-500", "{total} total" }
            button {
                class: "px-2 py-1 rounded border border-slate-700 disabled:opacity-40",
                disabled: current <= 1,
                onclick: move |_| on_change.call((current.saturating_sub(1).max(1), page_size)),
                "‹"
            }
            for (i, p) in page_window(current, pages).into_iter().enumerate() {
                {
                    match p {
                        Some(n) => {
                            let cls = if n == current {
                                "border-sky-500 text-sky-300"
                            } else {
                                "border-slate-700"
                            };
                            rsx! {
                                button {
                                    key: "{i}",
                                    class: "px-2 py-1 rounded border {cls}",
                                    onclick: move |_| on_change.call((n, page_size)),
                                    "{n}"
                                }
                            }
                        }
                        None => rsx! { span { key: "{i}", class: "px-1 text-slate-500", "…" } },
                    }
                }
            }
            button {
                class: "px-2 py-1 rounded border border-slate-700 disabled:opacity-40",
                disabled: current >= pages,
                onclick: move |_| on_change.call(((current + 1).min(pages), page_size)),
                "›"
            }
            select {
                class: "rounded border border-slate-700 bg-slate-900 px-2 py-1 text-xs",
                value: "{page_size}",
                onchange: move |e| {
                    if let Ok(size) = e.value().parse::<u32>() {
                        on_change.call((1, size));
                    }
                },
                for s in PAGE_SIZES {
                    option { key: "{s}", value: "{s}", selected: *s == page_size, "{s} / page" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_ranges_list_every_page() {
        assert_eq!(page_window(1, 1), vec![Some(1)]);
        assert_eq!(page_window(3, 5), (1..=5).map(Some).collect::<Vec<_>>());
    }

    #[test]
    fn long_ranges_collapse_with_ellipses() {
        assert_eq!(
            page_window(10, 20),
            vec![Some(1), None, Some(9), Some(10), Some(11), None, Some(20)]
        );
        assert_eq!(page_window(1, 20), vec![Some(1), Some(2), None, Some(20)]);
        assert_eq!(page_window(20, 20), vec![Some(1), None, Some(19), Some(20)]);
    }

    #[test]
    fn window_follows_query_page_size() {
        let q = ChartQuery::default().paginate(2, 4);
        assert_eq!(page_window(q.current, q.page_count(9)), vec![Some(1), Some(2), Some(3)]);
        let q = q.paginate(1, 20);
        assert_eq!(page_window(q.current, q.page_count(9)), vec![Some(1)]);
    }
}
