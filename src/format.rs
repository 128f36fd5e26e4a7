use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Formats the time between `created_at` and `now` for display.
///
/// Counts are floored and never pluralized differently, so a post made 90
/// seconds ago is "1 minutes ago". Days are the largest unit. A `created_at`
/// in the future is "Just now".
#[must_use]
pub fn relative_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
	let seconds = (now - created_at).num_seconds();

	if seconds < MINUTE {
		"Just now".into()
	} else if seconds < HOUR {
		format!("{} minutes ago", seconds / MINUTE)
	} else if seconds < DAY {
		format!("{} hours ago", seconds / HOUR)
	} else {
		format!("{} days ago", seconds / DAY)
	}
}
