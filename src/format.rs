//! Display Formatting
//!
//! Persian labels, icons and cleaning-schedule math for locations.

use chrono::{DateTime, Utc};

use crate::models::LocationType;

/// Persian label per location type
pub fn type_label(ty: LocationType) -> &'static str {
    match ty {
        LocationType::House => "خانه",
        LocationType::Room => "اتاق",
        LocationType::Storage => "انبار",
        LocationType::Shelf => "قفسه",
        LocationType::Container => "ظرف",
        LocationType::Box => "جعبه",
        LocationType::Item => "آیتم",
        LocationType::Other => "سایر",
    }
}

/// Icon glyph per location type
pub fn type_icon(ty: LocationType) -> &'static str {
    match ty {
        LocationType::House => "🏠",
        LocationType::Room => "🚪",
        LocationType::Storage => "🏬",
        LocationType::Shelf => "📚",
        LocationType::Container => "📦",
        LocationType::Box => "🗃",
        LocationType::Item => "🏷",
        LocationType::Other => "▪",
    }
}

/// Thousands-separated Toman amount
pub fn format_currency(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('،');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-{} تومان", grouped)
    } else {
        format!("{} تومان", grouped)
    }
}

pub fn format_days(days: i64) -> String {
    format!("{} روز", days)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleaningStatus {
    /// Days remaining until the next cleaning is due
    Clean(i64),
    /// Days since the last cleaning
    NeedsCleaning(i64),
    Unknown,
}

impl CleaningStatus {
    pub fn message(&self) -> String {
        match self {
            CleaningStatus::Clean(remaining) => {
                format!("تمیز ({} تا تمیزکاری بعدی)", format_days(*remaining))
            }
            CleaningStatus::NeedsCleaning(since) => {
                format!("نیاز به تمیزکاری ({} از آخرین تمیزکاری)", format_days(*since))
            }
            CleaningStatus::Unknown => "وضعیت نامشخص".to_string(),
        }
    }
}

/// Cleaning state from the last-cleaned timestamp and the interval in days.
pub fn cleaning_status(cleaned_time: Option<&str>, cleaned_duration: u32) -> CleaningStatus {
    cleaning_status_at(cleaned_time, cleaned_duration, Utc::now())
}

fn cleaning_status_at(
    cleaned_time: Option<&str>,
    cleaned_duration: u32,
    now: DateTime<Utc>,
) -> CleaningStatus {
    let Some(cleaned_time) = cleaned_time else {
        return CleaningStatus::Unknown;
    };
    if cleaned_duration == 0 {
        return CleaningStatus::Unknown;
    }
    let Ok(cleaned) = DateTime::parse_from_rfc3339(cleaned_time) else {
        return CleaningStatus::Unknown;
    };
    let days_since = (now - cleaned.with_timezone(&Utc)).num_days();
    let interval = cleaned_duration as i64;
    if days_since >= interval {
        CleaningStatus::NeedsCleaning(days_since)
    } else {
        CleaningStatus::Clean(interval - days_since)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(50000.0), "50،000 تومان");
        assert_eq!(format_currency(1234567.0), "1،234،567 تومان");
        assert_eq!(format_currency(999.0), "999 تومان");
    }

    #[test]
    fn missing_cleaned_time_is_unknown() {
        assert_eq!(cleaning_status_at(None, 30, at(2026, 8, 28)), CleaningStatus::Unknown);
        assert_eq!(
            cleaning_status_at(Some("2026-08-01T12:00:00Z"), 0, at(2026, 8, 28)),
            CleaningStatus::Unknown
        );
        assert_eq!(
            cleaning_status_at(Some("not a date"), 30, at(2026, 8, 28)),
            CleaningStatus::Unknown
        );
    }

    #[test]
    fn overdue_interval_needs_cleaning() {
        let status = cleaning_status_at(Some("2026-08-01T12:00:00Z"), 7, at(2026, 8, 28));
        assert_eq!(status, CleaningStatus::NeedsCleaning(27));
    }

    #[test]
    fn recent_cleaning_reports_remaining_days() {
        let status = cleaning_status_at(Some("2026-08-26T12:00:00Z"), 7, at(2026, 8, 28));
        assert_eq!(status, CleaningStatus::Clean(5));
    }
}
