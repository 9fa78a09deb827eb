//! Pure conflict checks over showtime slots.
//!
//! Every function here takes a snapshot of existing slots plus a candidate
//! and computes a verdict. Nothing is fetched, cached or mutated, so the
//! scheduler can re-run the same checks on drafts, on fresh server state, or
//! inside tests without setup.

use chrono::{Duration, NaiveDate};

use crate::error::{GapViolation, ScheduleError};
use crate::models::TimeSlot;

/// Returns the first existing slot the candidate overlaps, if any.
/// Intervals are half-open, so back-to-back slots sharing an endpoint do
/// not overlap. Slots in other rooms or on other dates are ignored.
pub fn find_overlap(existing: &[TimeSlot], candidate: &TimeSlot) -> Option<TimeSlot> {
    existing.iter().find(|slot| slot.overlaps(candidate)).copied()
}

pub fn has_overlap(existing: &[TimeSlot], candidate: &TimeSlot) -> bool {
    find_overlap(existing, candidate).is_some()
}

/// Checks the cleaning/turnaround gap between the candidate and every slot
/// sharing its room and date.
///
/// For each sibling two signed distances are measured: the idle time after
/// the sibling ends (`lead`) and the idle time before it starts (`tail`).
/// Whichever is larger is the candidate's actual clearance from that
/// sibling; if even that is below `min_gap` the pair is too close, and the
/// larger side names the direction in the report. This covers a candidate
/// before the sibling, after it, and the degenerate overlapping cases where
/// both distances are negative.
pub fn find_gap_violation(
    existing: &[TimeSlot],
    candidate: &TimeSlot,
    min_gap: Duration,
) -> Option<GapViolation> {
    for slot in existing.iter().filter(|s| s.same_screen(candidate)) {
        let lead = candidate.start_time - slot.end_time;
        let tail = slot.start_time - candidate.end_time;
        if lead.max(tail) >= min_gap {
            continue;
        }
        return Some(if lead >= tail {
            GapViolation::TooSoonAfter {
                sibling_end: slot.end_time,
                gap_minutes: lead.num_minutes(),
                required_minutes: min_gap.num_minutes(),
            }
        } else {
            GapViolation::TooCloseBefore {
                sibling_start: slot.start_time,
                gap_minutes: tail.num_minutes(),
                required_minutes: min_gap.num_minutes(),
            }
        });
    }
    None
}

/// A screening must be long enough to play the whole movie and no longer
/// than the runtime plus the trailer/ad buffer.
pub fn validate_duration(
    scheduled: Duration,
    movie_minutes: i32,
    buffer: Duration,
) -> Result<(), ScheduleError> {
    let runtime = Duration::minutes(i64::from(movie_minutes));
    if scheduled < runtime {
        return Err(ScheduleError::DurationTooShort {
            scheduled_minutes: scheduled.num_minutes(),
            movie_minutes: i64::from(movie_minutes),
        });
    }
    if scheduled > runtime + buffer {
        return Err(ScheduleError::DurationTooLong {
            scheduled_minutes: scheduled.num_minutes(),
            max_minutes: (runtime + buffer).num_minutes(),
        });
    }
    Ok(())
}

/// A show date must not precede the movie's release date, nor lie in the
/// past. The release check wins when both fail.
pub fn validate_show_date(
    show_date: NaiveDate,
    release_date: NaiveDate,
    today: NaiveDate,
) -> Result<(), ScheduleError> {
    if show_date < release_date {
        return Err(ScheduleError::ReleaseDateViolation {
            show_date,
            release_date,
        });
    }
    if show_date < today {
        return Err(ScheduleError::ShowDateInPast { show_date });
    }
    Ok(())
}
