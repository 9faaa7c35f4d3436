use dioxus::prelude::*;

use crate::routes::Route;

// Sign-in and sign-up are owned by the account service; these pages only
// give the routes a landing spot outside the main layout.

#[allow(non_snake_case)]
#[component]
fn AccountPanel(title: String, hint: String) -> Element {
    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 grid place-items-center p-6",
            div { class: "w-full max-w-sm rounded-2xl border border-slate-800 bg-slate-900/60 shadow-xl p-8 space-y-4 text-center",
                h1 { class: "text-2xl font-semibold tracking-tight", "SmartBI" }
                h2 { class: "text-lg text-slate-300", "{title}" }
                p { class: "text-sm text-slate-400", "{hint}" }
                Link { to: Route::Welcome {}, class: "text-sm text-sky-400", "Back to the dashboard" }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn UserLogin() -> Element {
    rsx! {
        AccountPanel {
            title: "Sign in".to_string(),
            hint: "Sign in through the account service, then return here.".to_string(),
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn UserRegister() -> Element {
    rsx! {
        AccountPanel {
            title: "Create an account".to_string(),
            hint: "Register through the account service, then return here.".to_string(),
        }
    }
}
