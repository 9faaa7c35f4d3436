use dioxus::prelude::*;

#[allow(non_snake_case)]
#[component]
pub fn AdminSubPage() -> Element {
    rsx! {
        div { class: "w-full max-w-3xl mx-auto rounded-2xl border border-slate-800 bg-slate-900/60 shadow-xl p-8 space-y-2",
            h1 { class: "text-2xl font-semibold tracking-tight text-slate-200", "Administration" }
            p { class: "text-sm text-slate-400", "Access to this page is checked by the backend." }
        }
    }
}
