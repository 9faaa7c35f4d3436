use dioxus::prelude::*;

use crate::components::Footer;
use crate::routes::{icon_glyph, menu_items, MenuItem, Route};

#[allow(non_snake_case)]
#[component]
fn MenuLink(item: MenuItem, depth: usize) -> Element {
    let pad = format!("padding-left:{}rem", depth as f32 * 0.75);
    rsx! {
        li { style: "{pad}",
            Link {
                to: item.path.to_string(),
                class: "flex items-center gap-2 rounded-md px-3 py-2 text-sm text-slate-300 hover:bg-slate-800 hover:text-slate-100",
                active_class: "bg-slate-800 text-emerald-400",
                span { class: "w-4 text-center", "{icon_glyph(item.icon)}" }
                span { "{item.name}" }
                if let Some(tag) = item.access {
                    span { class: "ml-auto text-[10px] uppercase tracking-wide text-slate-500", "{tag}" }
                }
            }
            if !item.children.is_empty() {
                ul {
                    for child in item.children.iter() {
                        MenuLink { key: "{child.path}", item: child.clone(), depth: depth + 1 }
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn AppLayout() -> Element {
    let items = menu_items();

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 flex",
            aside { class: "w-56 shrink-0 border-r border-slate-800 bg-slate-900/60 p-4 space-y-6",
                Link { to: Route::Welcome {}, class: "block text-lg font-semibold tracking-tight text-slate-100", "SmartBI" }
                nav {
                    ul { class: "space-y-1",
                        for item in items {
                            MenuLink { key: "{item.path}", item: item.clone(), depth: 0 }
                        }
                    }
                }
            }
            div { class: "flex-1 min-w-0 flex flex-col",
                main { class: "flex-1 p-6",
                    Outlet::<Route> {}
                }
                Footer {}
            }
        }
    }
}
