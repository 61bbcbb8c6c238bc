use chrono::{DateTime, Datelike, FixedOffset, Offset, Utc};

/// Offset used for every timestamp shown in the document (IST, GMT+5:30).
pub const IST_OFFSET_SECONDS: i32 = 5 * 3600 + 30 * 60;

/// Suffix appended to truncated commit messages.
pub const ELLIPSIS: &str = "...";

pub fn ist() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix())
}

pub fn to_ist(ts: DateTime<Utc>) -> DateTime<FixedOffset> {
    ts.with_timezone(&ist())
}

/// `2024-05-01 03:04:05 PM`
pub fn format_activity_time(ts: DateTime<Utc>) -> String {
    to_ist(ts).format("%Y-%m-%d %I:%M:%S %p").to_string()
}

/// `01/05/2024, 15:04:05`
pub fn format_status_time(ts: DateTime<Utc>) -> String {
    to_ist(ts).format("%d/%m/%Y, %H:%M:%S").to_string()
}

/// `May 1st 2024, 3:04:05 pm`
pub fn format_footer_time(ts: DateTime<Utc>) -> String {
    let local = to_ist(ts);
    format!(
        "{} {} {}, {}",
        local.format("%B"),
        ordinal_day(local.day()),
        local.format("%Y"),
        local.format("%-I:%M:%S %P")
    )
}

pub fn ordinal_day(day: u32) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}

/// Cuts `s` to `limit` characters and appends `...` when it is longer.
/// Counting is per `char` so multi-byte messages never split a code point.
pub fn truncate_with_ellipsis(s: &str, limit: usize) -> String {
    if s.chars().count() > limit {
        let mut out: String = s.chars().take(limit).collect();
        out.push_str(ELLIPSIS);
        out
    } else {
        s.to_owned()
    }
}

pub fn first_line(s: &str) -> &str {
    s.split('\n').next().unwrap_or_default()
}

pub fn pluralize(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// `owner/name` -> `name`; names without an owner are returned as-is.
pub fn repo_short_name(full: &str) -> &str {
    full.split_once('/').map(|(_, name)| name).unwrap_or(full)
}
