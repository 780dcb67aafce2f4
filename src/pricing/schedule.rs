use crate::data::models::promotion::Promotion;
use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_PROMOTION_DAYS: i64 = 30;

/// Fills in a missing start with `now` and a missing end with start + 30 days.
pub fn default_window(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = start.unwrap_or(now);
    let end = end.unwrap_or(start + Duration::days(DEFAULT_PROMOTION_DAYS));
    (start, end)
}

impl Promotion {
    /// Active, fully dated, and `start <= now <= end`.
    pub fn is_current(&self, now: DateTime<Utc>) -> bool {
        match (self.is_active, self.start_date, self.end_date) {
            (true, Some(start), Some(end)) => start <= now && now <= end,
            _ => false,
        }
    }

    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        match (self.is_active, self.start_date, self.end_date) {
            (true, Some(start), Some(_)) => start > now,
            _ => false,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match (self.is_active, self.start_date, self.end_date) {
            (true, Some(_), Some(end)) => end < now,
            _ => false,
        }
    }

    /// Whole days until the end, 0 unless the promotion is current.
    pub fn days_left(&self, now: DateTime<Utc>) -> i64 {
        match self.end_date {
            Some(end) if self.is_current(now) => (end - now).num_days().max(0),
            _ => 0,
        }
    }

    pub fn time_left_display(&self, now: DateTime<Utc>) -> String {
        let end = match self.end_date {
            Some(end) if self.is_current(now) => end,
            _ => return "inactive".to_string(),
        };

        let remaining = (end - now).num_seconds();
        let days = remaining / 86_400;
        let hours = (remaining % 86_400) / 3_600;
        let minutes = (remaining % 3_600) / 60;

        if days > 0 {
            format!("{}d {}h", days, hours)
        } else if hours > 0 {
            format!("{}h {}m", hours, minutes)
        } else {
            format!("{}m", minutes)
        }
    }
}
