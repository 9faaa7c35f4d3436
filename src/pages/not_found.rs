use dioxus::prelude::*;

use crate::routes::Route;

#[allow(non_snake_case)]
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 grid place-items-center p-6",
            div { class: "text-center space-y-3",
                div { class: "text-6xl font-bold text-slate-700", "404" }
                p { class: "text-slate-400", "Nothing lives at {path}" }
                Link { to: Route::Welcome {}, class: "text-sm text-sky-400", "Back home" }
            }
        }
    }
}
