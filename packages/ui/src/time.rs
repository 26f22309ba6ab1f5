//! Timestamp rendering for notice cards.

/// Compose the card's time string: `Posted: …` alone, or
/// `Posted: … • Updated: …` once an edit timestamp exists.
pub fn time_info(created_at: &str, updated_at: Option<&str>) -> String {
    match updated_at {
        Some(updated) => format!(
            "Posted: {} • Updated: {}",
            format_timestamp(created_at),
            format_timestamp(updated)
        ),
        None => format!("Posted: {}", format_timestamp(created_at)),
    }
}

/// Render an ISO-8601 timestamp as locale-aware month/day/year hour:minute.
/// Unparseable input passes through unchanged.
#[cfg(target_arch = "wasm32")]
pub fn format_timestamp(iso: &str) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
    if date.get_time().is_nan() {
        return iso.to_string();
    }
    let options = js_sys::Object::new();
    for (key, value) in [
        ("year", "numeric"),
        ("month", "short"),
        ("day", "numeric"),
        ("hour", "2-digit"),
        ("minute", "2-digit"),
    ] {
        let _ = js_sys::Reflect::set(&options, &key.into(), &value.into());
    }
    date.to_locale_string("en-US", &options).into()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn format_timestamp(iso: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(iso)
        .map(|dt| dt.format("%b %-d, %Y, %I:%M %p").to_string())
        .unwrap_or_else(|_| iso.to_string())
}
