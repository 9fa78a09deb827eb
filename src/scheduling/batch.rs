//! The scheduler's staging area for multi-showtime submissions.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::ScheduleError;
use crate::models::{Movie, Showtime, ShowtimeDraft};
use crate::scheduling::policy::SchedulePolicy;

/// An ordered list of drafts that have each passed the full policy against
/// the persisted schedule *and* the drafts queued before them. Invalid
/// drafts never enter, so the batch itself is always internally consistent.
#[derive(Debug, Default)]
pub struct ScheduleBatch {
    drafts: Vec<ShowtimeDraft>,
}

impl ScheduleBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the draft and appends it. On error the batch is unchanged.
    pub fn try_add(
        &mut self,
        draft: ShowtimeDraft,
        movie: &Movie,
        persisted: &[Showtime],
        policy: &SchedulePolicy,
        now: NaiveDateTime,
    ) -> Result<(), ScheduleError> {
        policy.validate_draft(&draft, movie, persisted, &self.drafts, now)?;
        debug!(
            room_id = draft.room_id,
            show_date = %draft.show_date,
            start_time = %draft.start_time,
            "Draft showtime added to batch"
        );
        self.drafts.push(draft);
        Ok(())
    }

    /// Removes the draft at `index`, or returns `None` when out of range.
    /// Later drafts stay valid: removing a neighbor only widens gaps.
    pub fn remove(&mut self, index: usize) -> Option<ShowtimeDraft> {
        if index < self.drafts.len() {
            Some(self.drafts.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.drafts.clear();
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    pub fn drafts(&self) -> &[ShowtimeDraft] {
        &self.drafts
    }

    pub fn into_drafts(self) -> Vec<ShowtimeDraft> {
        self.drafts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn policy() -> SchedulePolicy {
        SchedulePolicy::new(15, 30, 60)
    }

    fn movie() -> Movie {
        Movie {
            id: 7,
            title: "Interstate 60".to_string(),
            duration_minutes: 120,
            release_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    fn draft(start: (u32, u32), end: (u32, u32)) -> ShowtimeDraft {
        ShowtimeDraft {
            room_id: 1,
            movie_id: 7,
            show_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            base_price: 12.5,
        }
    }

    #[test]
    fn queued_drafts_guard_against_each_other() {
        let mut batch = ScheduleBatch::new();

        batch
            .try_add(draft((10, 0), (12, 15)), &movie(), &[], &policy(), now())
            .unwrap();
        assert_eq!(batch.len(), 1);

        // second draft collides with the first even though the server has
        // nothing persisted yet
        let err = batch
            .try_add(draft((11, 0), (13, 15)), &movie(), &[], &policy(), now())
            .unwrap_err();
        assert!(matches!(err, ScheduleError::Overlap { .. }));
        assert_eq!(batch.len(), 1);

        // far enough after the first, goes in
        batch
            .try_add(draft((12, 30), (14, 45)), &movie(), &[], &policy(), now())
            .unwrap();
        assert_eq!(batch.len(), 2);
    }

    #[test]
    fn remove_and_clear() {
        let mut batch = ScheduleBatch::new();
        batch
            .try_add(draft((10, 0), (12, 15)), &movie(), &[], &policy(), now())
            .unwrap();
        batch
            .try_add(draft((12, 30), (14, 45)), &movie(), &[], &policy(), now())
            .unwrap();

        assert!(batch.remove(5).is_none());
        let removed = batch.remove(0).unwrap();
        assert_eq!(removed.start_time, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(batch.len(), 1);

        batch.clear();
        assert!(batch.is_empty());
    }
}
