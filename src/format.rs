//! Display helpers shared by the views.

use chrono::{DateTime, Utc};

/// US long form, e.g. `October 18, 2026`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn member_count_label(count: usize) -> String {
    format!("{count} members")
}

/// First seven characters of a commit hash; `dev` when unknown.
pub fn short_sha(sha: &str) -> &str {
    let sha = sha.trim();
    if sha.is_empty() {
        return "dev";
    }
    sha.get(..7).unwrap_or(sha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_dates_in_long_form() {
        let date = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
        assert_eq!(format_date(&date), "October 18, 2026");
        let date = Utc.with_ymd_and_hms(2026, 3, 5, 0, 0, 0).unwrap();
        assert_eq!(format_date(&date), "March 5, 2026");
    }

    #[test]
    fn member_label_includes_zero() {
        assert_eq!(member_count_label(0), "0 members");
        assert_eq!(member_count_label(3), "3 members");
    }

    #[test]
    fn short_sha_truncates() {
        assert_eq!(short_sha("0123456789abcdef"), "0123456");
        assert_eq!(short_sha("abc"), "abc");
        assert_eq!(short_sha(""), "dev");
    }
}
