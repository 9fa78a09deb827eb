use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A showtime already persisted by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Showtime {
    pub id: i64,
    pub room_id: i64,
    pub movie_id: i64,
    pub show_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub base_price: f64,
}

/// A showtime the scheduler has validated locally but not yet submitted.
/// Same shape as [`Showtime`] minus the server-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowtimeDraft {
    pub room_id: i64,
    pub movie_id: i64,
    pub show_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub base_price: f64,
}

/// The scheduling view of a showtime: just where and when, with the
/// half-open interval `[start_time, end_time)` on one room and date.
/// Showtimes never cross midnight, so times compare directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSlot {
    pub room_id: i64,
    pub show_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl TimeSlot {
    /// True when both slots compete for the same room on the same date.
    pub fn same_screen(&self, other: &TimeSlot) -> bool {
        self.room_id == other.room_id && self.show_date == other.show_date
    }

    /// Half-open interval intersection: a slot ending at 12:00 does not
    /// overlap one starting at 12:00.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.same_screen(other)
            && self.start_time < other.end_time
            && other.start_time < self.end_time
    }

    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    pub fn starts_at(&self) -> NaiveDateTime {
        self.show_date.and_time(self.start_time)
    }
}

impl Showtime {
    pub fn slot(&self) -> TimeSlot {
        TimeSlot {
            room_id: self.room_id,
            show_date: self.show_date,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

impl ShowtimeDraft {
    pub fn slot(&self) -> TimeSlot {
        TimeSlot {
            room_id: self.room_id,
            show_date: self.show_date,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}
