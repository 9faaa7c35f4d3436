use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus::logger::tracing::warn;

pub const ECHARTS_CDN: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";

#[cfg(any(feature = "web", test))]
fn quoted(dom_id: &str) -> String {
    serde_json::to_string(dom_id).unwrap_or_else(|_| "\"\"".into())
}

/// Script that (re)draws `option` into the element `dom_id`, polling for up
/// to five seconds until the ECharts bundle has loaded.
#[cfg(any(feature = "web", test))]
pub fn render_script(dom_id: &str, option: &str) -> String {
    let id = quoted(dom_id);
    format!(
        r#"(function draw(tries) {{
    const el = document.getElementById({id});
    if (!el || !window.echarts) {{
        if (tries > 0) setTimeout(() => draw(tries - 1), 100);
        return;
    }}
    const chart = echarts.getInstanceByDom(el) || echarts.init(el);
    chart.setOption({option}, true);
    chart.resize();
}})(50);"#
    )
}

/// Script that releases the ECharts instance bound to `dom_id`.
#[cfg(any(feature = "web", test))]
pub fn dispose_script(dom_id: &str) -> String {
    let id = quoted(dom_id);
    format!(
        r#"(function () {{
    const el = document.getElementById({id});
    if (!el || !window.echarts) return;
    const chart = echarts.getInstanceByDom(el);
    if (chart) chart.dispose();
}})();"#
    )
}

/// Validated option JSON, or `None` when it cannot be handed to ECharts.
pub fn normalize_option(option: &str) -> Option<String> {
    let v: serde_json::Value = serde_json::from_str(option).ok()?;
    v.is_object().then(|| v.to_string())
}

#[allow(non_snake_case)]
#[component]
pub fn EChart(option: String, #[props(default = 360)] height: u32) -> Element {
    let dom_id = use_hook(|| {
        static NEXT: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(0);
        format!(
            "echart-{}",
            NEXT.fetch_add(1, std::sync::atomic::Ordering::Relaxed)
        )
    });
    let normalized = normalize_option(&option);

    #[cfg(feature = "web")]
    {
        let draw_id = dom_id.clone();
        use_effect(use_reactive!(|normalized| {
            match &normalized {
                Some(opt) => {
                    let _ = document::eval(&render_script(&draw_id, opt));
                }
                None => warn!("[echart] skipping unreadable option for #{draw_id}"),
            }
        }));
        let drop_id = dom_id.clone();
        use_drop(move || {
            let _ = document::eval(&dispose_script(&drop_id));
        });
    }

    rsx! {
        if normalized.is_some() {
            div { id: "{dom_id}", class: "w-full", style: "height:{height}px" }
        } else {
            div { class: "text-sm text-slate-400 text-center py-6", "Chart option could not be read." }
        }
    }
}
