/// Placeholder for metrics the backend could not determine.
pub const UNKNOWN: &str = "unknown";

/// Format a file size in whole kilobytes, rounded to nearest.
///
/// Examples: 2048 → "2 KB", 1536 → "2 KB", 511 → "unknown".
/// Absent, non-positive, and sizes that round down to 0 KB render as "unknown".
pub fn format_file_size(bytes: Option<i64>) -> String {
    let Some(bytes) = bytes.filter(|b| *b > 0) else {
        return UNKNOWN.to_string();
    };

    let kilobytes = bytes.saturating_add(512) / 1024;
    if kilobytes > 0 {
        format!("{kilobytes} KB")
    } else {
        UNKNOWN.to_string()
    }
}

pub fn format_loading_time(ms: u64) -> String {
    format!("{ms}ms")
}

pub fn format_resolution(resolution: Option<&str>) -> String {
    match resolution.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => UNKNOWN.to_string(),
    }
}
