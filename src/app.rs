use dioxus::prelude::*;

use crate::components::echart::ECHARTS_CDN;
use crate::components::toast::use_toast_provider;
use crate::components::ToastHost;
use crate::routes::{use_nav_state_provider, Route};
use crate::{FAVICON, MAIN_CSS, TAILWIND_CDN};

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    use_toast_provider();
    use_nav_state_provider();

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: MAIN_CSS }
        document::Script { src: TAILWIND_CDN.to_string() }
        document::Script { src: ECHARTS_CDN.to_string() }
        document::Meta { name: "theme-color", content: "#020618" } // slate-950
        document::Meta { name: "color-scheme", content: "dark" }
        document::Title { "SmartBI" }
        Router::<Route> {}
        ToastHost {}
    }
}
