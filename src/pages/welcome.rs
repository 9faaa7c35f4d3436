use dioxus::prelude::*;

use crate::routes::Route;

#[allow(non_snake_case)]
#[component]
pub fn Welcome() -> Element {
    rsx! {
        div { class: "w-full max-w-3xl mx-auto rounded-2xl border border-slate-800 bg-slate-900/60 shadow-xl p-8 space-y-6",
            h1 { class: "text-2xl font-semibold tracking-tight text-slate-200", "Welcome to SmartBI" }
            p { class: "text-slate-400",
                "Upload raw data, describe what you want to learn, and get a chart with a written analysis back."
            }
            div { class: "grid grid-cols-1 sm:grid-cols-3 gap-4",
                Link { to: Route::AddChart {}, class: "rounded-xl border border-slate-800 p-4 hover:border-sky-500",
                    div { class: "text-slate-200 font-medium", "Smart analysis" }
                    div { class: "text-xs text-slate-400", "Generate a chart and wait for it" }
                }
                Link { to: Route::AddChartAsync {}, class: "rounded-xl border border-slate-800 p-4 hover:border-sky-500",
                    div { class: "text-slate-200 font-medium", "Smart analysis (async)" }
                    div { class: "text-xs text-slate-400", "Queue the job and come back later" }
                }
                Link { to: Route::MyChart {}, class: "rounded-xl border border-slate-800 p-4 hover:border-sky-500",
                    div { class: "text-slate-200 font-medium", "My charts" }
                    div { class: "text-xs text-slate-400", "Browse, retry and delete your charts" }
                }
            }
        }
    }
}
