//! Due-date and status classification for chores.
//!
//! Everything here is a pure function of a chore snapshot and an explicit
//! `now`, so the scheduling rules can be tested without touching the clock.
//! Calendar-day boundaries are local midnight.

use crate::models::{Chore, ChoreStatus, CompletionProgress, Frequency};
use chrono::{DateTime, Duration, Local, TimeZone};

/// Result of recording a completion event. Applied back onto the chore by the
/// mutation flow; completions themselves are recorded separately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionUpdate {
    pub last_completed: DateTime<Local>,
    pub next_due_date: DateTime<Local>,
    pub completed_today: u32,
}

impl CompletionUpdate {
    pub fn apply_to(self, chore: &mut Chore) {
        chore.last_completed = Some(self.last_completed);
        chore.next_due_date = self.next_due_date;
        chore.completed_today = self.completed_today;
    }
}

/// Next due timestamp for a chore, offset from the last completion (or an
/// explicit override, or the creation time when never completed).
pub fn next_due_date(
    chore: &Chore,
    last_completed: Option<DateTime<Local>>,
    now: DateTime<Local>,
) -> DateTime<Local> {
    let base = last_completed
        .or(chore.last_completed)
        .unwrap_or(chore.created_at);

    match chore.frequency {
        Frequency::Daily => base + Duration::hours(24),
        Frequency::MultipleDaily => match chore.completions_per_day {
            Some(per_day) => base + completion_interval(per_day),
            None => base + Duration::hours(24),
        },
        Frequency::Weekly => base + Duration::days(7),
        Frequency::BiWeekly => base + Duration::days(14),
        Frequency::Monthly => base + Duration::days(30),
        Frequency::Quarterly => base + Duration::days(90),
        // Effectively "never due".
        Frequency::AsNeeded => now + Duration::days(365),
    }
}

pub fn is_overdue(chore: &Chore, now: DateTime<Local>) -> bool {
    match (chore.frequency, chore.completions_per_day) {
        (Frequency::MultipleDaily, Some(per_day)) => {
            let today = now.date_naive();

            // A new day has started with zero completions so far.
            if let Some(last) = chore.last_completed {
                if last.date_naive() < today {
                    return true;
                }
            }

            if chore.completed_today < per_day {
                return match chore.last_completed {
                    Some(last) => hours_between(last, now) > expected_interval_hours(per_day),
                    None => true,
                };
            }

            // Today's quota is met.
            false
        }
        _ => now > chore.next_due_date,
    }
}

pub fn is_due_soon(chore: &Chore, now: DateTime<Local>) -> bool {
    match (chore.frequency, chore.completions_per_day) {
        (Frequency::MultipleDaily, Some(per_day)) => {
            let last = chore.last_completed.unwrap_or(chore.created_at);
            let elapsed = hours_between(last, now);
            let expected = expected_interval_hours(per_day);
            elapsed >= expected - 1.0 && elapsed < expected
        }
        _ => {
            let remaining = chore.next_due_date - now;
            let days = (remaining.num_milliseconds() as f64 / MILLIS_PER_DAY).ceil() as i64;
            (0..=2).contains(&days)
        }
    }
}

/// Overdue takes precedence over due-soon; exactly one state holds.
pub fn status(chore: &Chore, now: DateTime<Local>) -> ChoreStatus {
    if is_overdue(chore, now) {
        ChoreStatus::Overdue
    } else if is_due_soon(chore, now) {
        ChoreStatus::DueSoon
    } else {
        ChoreStatus::OnTime
    }
}

/// Today's completion progress. Multiple Daily chores report against their
/// per-day quota (over-completion is representable and reported as > 100%);
/// everything else is binary ever-completed.
pub fn completion_progress(chore: &Chore) -> CompletionProgress {
    match (chore.frequency, chore.completions_per_day) {
        (Frequency::MultipleDaily, Some(per_day)) => {
            let completed = chore.completed_today;
            let percentage =
                ((f64::from(completed) / f64::from(per_day)) * 100.0).round() as i64;
            CompletionProgress {
                completed,
                total: per_day,
                percentage,
            }
        }
        _ => {
            let done = chore.last_completed.is_some();
            CompletionProgress {
                completed: u32::from(done),
                total: 1,
                percentage: if done { 100 } else { 0 },
            }
        }
    }
}

/// State update for a completion happening at `at`. The same-day counter is
/// reset to 1 on the first completion of a new calendar day and incremented
/// otherwise. Non-Multiple-Daily chores always come due again a flat 24 hours
/// later regardless of declared frequency, matching the behavior this app has
/// always shipped with.
pub fn record_completion(chore: &Chore, at: DateTime<Local>) -> CompletionUpdate {
    let today = at.date_naive();

    let completed_today = match chore.last_completed {
        Some(last) if last.date_naive() < today => 1,
        Some(_) => chore.completed_today + 1,
        None => 1,
    };

    let next_due_date = match (chore.frequency, chore.completions_per_day) {
        (Frequency::MultipleDaily, Some(per_day)) => {
            if completed_today >= per_day {
                start_of_next_day(at)
            } else {
                at + completion_interval(per_day)
            }
        }
        _ => at + Duration::hours(24),
    };

    CompletionUpdate {
        last_completed: at,
        next_due_date,
        completed_today,
    }
}

const MILLIS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

fn expected_interval_hours(per_day: u32) -> f64 {
    24.0 / f64::from(per_day.max(1))
}

fn completion_interval(per_day: u32) -> Duration {
    Duration::milliseconds((expected_interval_hours(per_day) * 3_600_000.0) as i64)
}

fn hours_between(earlier: DateTime<Local>, later: DateTime<Local>) -> f64 {
    (later - earlier).num_milliseconds() as f64 / 3_600_000.0
}

fn start_of_next_day(at: DateTime<Local>) -> DateTime<Local> {
    (at.date_naive() + Duration::days(1))
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| Local.from_local_datetime(&midnight).earliest())
        .unwrap_or_else(|| at + Duration::hours(24))
}
