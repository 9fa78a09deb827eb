//! The composite validation run on every candidate showtime.

use chrono::{Duration, NaiveDateTime};

use crate::config::SchedulingConfig;
use crate::error::ScheduleError;
use crate::models::{Movie, Showtime, ShowtimeDraft, TimeSlot};
use crate::scheduling::conflicts;

/// Bundles the tunable scheduling rules and applies them in a fixed order.
///
/// Checks run cheapest-first and stop at the first failure, so the caller
/// always gets exactly one error per draft:
///
/// 1. lead time (the showtime must start far enough in the future)
/// 2. show date against the release date and today
/// 3. slot duration against the movie runtime and buffer
/// 4. overlap against persisted showtimes, then pending drafts
/// 5. turnaround gap, same order
#[derive(Debug, Clone)]
pub struct SchedulePolicy {
    min_gap: Duration,
    buffer: Duration,
    min_lead: Duration,
}

impl SchedulePolicy {
    pub fn new(min_gap_minutes: i64, buffer_minutes: i64, min_lead_minutes: i64) -> Self {
        Self {
            min_gap: Duration::minutes(min_gap_minutes),
            buffer: Duration::minutes(buffer_minutes),
            min_lead: Duration::minutes(min_lead_minutes),
        }
    }

    pub fn from_config(config: &SchedulingConfig) -> Self {
        Self::new(
            config.min_gap_minutes,
            config.buffer_minutes,
            config.min_lead_minutes,
        )
    }

    pub fn min_gap(&self) -> Duration {
        self.min_gap
    }

    /// Validates one draft against a snapshot of persisted showtimes and the
    /// drafts queued before it. `now` is injected so callers and tests agree
    /// on what "the future" means.
    pub fn validate_draft(
        &self,
        draft: &ShowtimeDraft,
        movie: &Movie,
        persisted: &[Showtime],
        pending: &[ShowtimeDraft],
        now: NaiveDateTime,
    ) -> Result<(), ScheduleError> {
        let candidate = draft.slot();

        let lead = candidate.starts_at() - now;
        if lead < self.min_lead {
            return Err(ScheduleError::LeadTimeViolation {
                required_minutes: self.min_lead.num_minutes(),
                actual_minutes: lead.num_minutes(),
            });
        }

        conflicts::validate_show_date(candidate.show_date, movie.release_date, now.date())?;
        conflicts::validate_duration(candidate.duration(), movie.duration_minutes, self.buffer)?;

        // persisted first so the error points at server state when both hit
        let siblings: Vec<TimeSlot> = persisted
            .iter()
            .map(Showtime::slot)
            .chain(pending.iter().map(ShowtimeDraft::slot))
            .collect();

        if let Some(hit) = conflicts::find_overlap(&siblings, &candidate) {
            return Err(ScheduleError::Overlap {
                show_date: hit.show_date,
                start: hit.start_time,
                end: hit.end_time,
            });
        }
        if let Some(violation) = conflicts::find_gap_violation(&siblings, &candidate, self.min_gap)
        {
            return Err(ScheduleError::InsufficientGap(violation));
        }

        Ok(())
    }
}
