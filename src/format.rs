use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

const EXCERPT_CHARS: usize = 150;
const INVALID_DATE: &str = "Invalid Date";

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Parses the API's ISO-8601 timestamps into local wall-clock time.
///
/// Naive values (no offset) are already local. Values carrying an offset are
/// converted to the server's local zone.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Relative label for a post or reply: a clock time for today, `Yesterday`
/// plus clock time for the previous day, a short date otherwise.
pub fn format_time_at(raw: &str, now: NaiveDateTime) -> String {
    let Some(stamp) = parse_timestamp(raw) else {
        return INVALID_DATE.to_string();
    };

    let today = now.date();
    let day = stamp.date();

    if day == today {
        return stamp.format("%I:%M %p").to_string();
    }

    if today.pred_opt() == Some(day) {
        return format!("Yesterday {}", stamp.format("%I:%M %p"));
    }

    if day.year() != today.year() {
        stamp.format("%b %-d, %Y").to_string()
    } else {
        stamp.format("%b %-d").to_string()
    }
}

pub fn format_blog_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(stamp) => stamp.format("%-m/%-d/%Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

pub fn excerpt(content: &str) -> String {
    match content.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}
