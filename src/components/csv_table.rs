use dioxus::prelude::*;

use crate::utils::csv::parse_csv;

pub const ROWS_PER_PAGE: usize = 10;

#[allow(non_snake_case)]
#[component]
pub fn CsvTable(csv_data: String) -> Element {
    // re-parse only when the text changes
    let table = use_memo(use_reactive!(|csv_data| parse_csv(&csv_data)));
    let mut page = use_signal(|| 0usize);

    let table = table.read();
    let row_count = table.rows.len();
    let pages = row_count.div_ceil(ROWS_PER_PAGE).max(1);
    let current = (*page.read()).min(pages - 1);
    let start = current * ROWS_PER_PAGE;
    let end = (start + ROWS_PER_PAGE).min(row_count);

    rsx! {
        div { class: "w-full overflow-x-auto rounded-xl border border-slate-800",
            table { class: "min-w-full text-sm text-left",
                thead { class: "bg-slate-900 text-slate-300",
                    tr {
                        for (j, h) in table.headers.iter().enumerate() {
                            th { key: "{j}", class: "px-3 py-2 font-medium border-b border-slate-800", "{h}" }
                        }
                    }
                }
                tbody { class: "text-slate-200",
                    if row_count == 0 {
                        tr {
                            td { class: "px-3 py-6 text-center text-slate-500", colspan: "{table.headers.len().max(1)}", "No data" }
                        }
                    }
                    for i in start..end {
                        tr { key: "{i}", class: "odd:bg-slate-900/40",
                            for h in table.headers.iter() {
                                td { class: "px-3 py-1.5 border-b border-slate-800/60 tabular-nums", "{table.cell(i, h)}" }
                            }
                        }
                    }
                }
            }
        }
        if pages > 1 {
            div { class: "flex items-center justify-end gap-2 pt-2 text-xs text-slate-400",
                button {
                    class: "px-2 py-1 rounded border border-slate-700 disabled:opacity-40",
                    disabled: current == 0,
                    onclick: move |_| page.set(current.saturating_sub(1)),
                    "‹"
                }
                span { "{current + 1} / {pages}" }
                button {
                    class: "px-2 py-1 rounded border border-slate-700 disabled:opacity-40",
                    disabled: current + 1 >= pages,
                    onclick: move |_| page.set((current + 1).min(pages - 1)),
                    "›"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::{NoOpMutations, ScopeId, VirtualDom};
    use std::cell::Cell;

    thread_local! {
        static RENDERS: Cell<u32> = const { Cell::new(0) };
    }

    #[allow(non_snake_case)]
    fn DuplicateHeaders() -> Element {
        let n = RENDERS.with(|r| {
            let n = r.get();
            r.set(n + 1);
            n
        });
        rsx! { CsvTable { csv_data: format!("a,a\n{n},2") } }
    }

    #[test]
    fn duplicate_headers_rerender() {
        let mut dom = VirtualDom::new(DuplicateHeaders);
        dom.rebuild_in_place();
        for _ in 0..3 {
            dom.mark_dirty(ScopeId::APP);
            dom.render_immediate(&mut NoOpMutations);
        }
        assert!(RENDERS.with(|r| r.get()) >= 4);
    }
}
