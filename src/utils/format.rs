#[cfg(feature = "web")]
pub fn pad2(n: i32) -> String {
    if n < 10 {
        format!("0{}", n)
    } else {
        n.to_string()
    }
}

#[cfg(feature = "web")]
pub fn format_local(timestamp: &str) -> String {
    use js_sys::Date;
    let d = Date::new(&wasm_bindgen::JsValue::from_str(timestamp));
    if d.get_time().is_nan() {
        return timestamp.to_string();
    }
    let day = d.get_date() as i32;
    let month = (d.get_month() as i32) + 1;
    let year = d.get_full_year() as i32;
    let hour = d.get_hours() as i32;
    let minute = d.get_minutes() as i32;
    format!(
        "{}-{}-{} {}:{}",
        year,
        pad2(month),
        pad2(day),
        pad2(hour),
        pad2(minute)
    )
}

#[cfg(all(not(feature = "web"), feature = "server"))]
pub fn format_local(timestamp: &str) -> String {
    use chrono::{DateTime, Local};
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

#[cfg(not(any(feature = "web", feature = "server")))]
pub fn format_local(timestamp: &str) -> String {
    timestamp.to_string()
}

#[cfg(feature = "web")]
pub fn current_year() -> Option<i32> {
    Some(js_sys::Date::new_0().get_full_year() as i32)
}

#[cfg(all(not(feature = "web"), feature = "server"))]
pub fn current_year() -> Option<i32> {
    use chrono::Datelike;
    Some(chrono::Local::now().year())
}

#[cfg(not(any(feature = "web", feature = "server")))]
pub fn current_year() -> Option<i32> {
    None
}

/// `"{year} {message}"`, or just the message when the year is unknown.
pub fn copyright_line(year: Option<i32>, message: &str) -> String {
    match year {
        Some(y) => format!("{y} {message}"),
        None => message.to_string(),
    }
}

/// Card description for a chart type; nothing when the type is unset.
pub fn chart_type_label(chart_type: Option<&str>) -> Option<String> {
    match chart_type.map(str::trim) {
        Some(t) if !t.is_empty() => Some(format!("Chart type: {t}")),
        _ => None,
    }
}
