//! Display formatting for record fields.

/// Format a response time: "N/A" when absent or zero, "123ms" under a
/// second, "1.23s" otherwise.
pub fn format_response_time(ms: Option<u64>) -> String {
    match ms {
        None | Some(0) => "N/A".to_string(),
        Some(ms) if ms < 1000 => format!("{}ms", ms),
        Some(ms) => format!("{:.2}s", ms as f64 / 1000.0),
    }
}

/// Format an uptime percentage with two decimals.
pub fn format_uptime(uptime: Option<f64>) -> String {
    match uptime {
        Some(u) => format!("{:.2}%", u),
        None => "N/A".to_string(),
    }
}

/// Format the age of a check relative to `now_ms` ("42s ago", "5m ago").
pub fn format_age(last_check_ms: Option<i64>, now_ms: i64) -> String {
    let Some(ts) = last_check_ms else {
        return "never".to_string();
    };

    let secs = now_ms.saturating_sub(ts) / 1000;
    if secs <= 0 {
        "just now".to_string()
    } else if secs < 60 {
        format!("{}s ago", secs)
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86_400 {
        format!("{}h ago", secs / 3600)
    } else {
        format!("{}d ago", secs / 86_400)
    }
}
