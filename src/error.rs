//! Validation error taxonomy for the layout and scheduling cores.
//!
//! Every check in this crate reports failures as structured values instead of
//! panicking: the caller shows one message per failure and halts the
//! operation. None of these are retryable — they are deterministic content
//! errors, and `ServerConflict` (the backend's authoritative 409 verdict)
//! means the user has to pick a different slot.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use thiserror::Error;

use crate::backend_client::BackendError;

/// Failures while generating or mutating a room's seat grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error(
        "seat grid {rows}x{columns} is out of bounds (allowed 1..={max_rows} rows, 1..={max_columns} columns)"
    )]
    InvalidDimensions {
        rows: i32,
        columns: i32,
        max_rows: i32,
        max_columns: i32,
    },

    /// Two enabled seats in one row share a number. The renumberer makes this
    /// impossible, so hitting it means some caller bypassed it.
    #[error("duplicate seat number {seat_number} in row {seat_row}")]
    DuplicateNumbering { seat_row: String, seat_number: i32 },

    #[error("seat {seat_id} not found in this layout")]
    SeatNotFound { seat_id: i64 },

    #[error("seat {seat_id} is disabled; enable it before changing its type")]
    SeatDisabled { seat_id: i64 },
}

/// Which side of a neighboring showtime the candidate crowds.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GapViolation {
    #[error(
        "starts only {gap_minutes} minutes after the previous showtime ends at {sibling_end} ({required_minutes} required)"
    )]
    TooSoonAfter {
        sibling_end: NaiveTime,
        gap_minutes: i64,
        required_minutes: i64,
    },

    #[error(
        "ends only {gap_minutes} minutes before the next showtime starts at {sibling_start} ({required_minutes} required)"
    )]
    TooCloseBefore {
        sibling_start: NaiveTime,
        gap_minutes: i64,
        required_minutes: i64,
    },
}

/// Failures while validating or submitting a candidate showtime.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error(
        "showtime must start at least {required_minutes} minutes from now (this one starts in {actual_minutes})"
    )]
    LeadTimeViolation {
        required_minutes: i64,
        actual_minutes: i64,
    },

    #[error("show date {show_date} is before the movie's release date {release_date}")]
    ReleaseDateViolation {
        show_date: NaiveDate,
        release_date: NaiveDate,
    },

    #[error("show date {show_date} is in the past")]
    ShowDateInPast { show_date: NaiveDate },

    #[error(
        "screening slot of {scheduled_minutes} minutes is shorter than the {movie_minutes}-minute runtime"
    )]
    DurationTooShort {
        scheduled_minutes: i64,
        movie_minutes: i64,
    },

    #[error(
        "screening slot of {scheduled_minutes} minutes exceeds the runtime plus trailer buffer (at most {max_minutes})"
    )]
    DurationTooLong {
        scheduled_minutes: i64,
        max_minutes: i64,
    },

    #[error("overlaps an existing showtime in this room ({start}-{end} on {show_date})")]
    Overlap {
        show_date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    },

    #[error("{0}")]
    InsufficientGap(GapViolation),

    /// The backend rejected the slot with a 409 after the client-side checks
    /// passed (stale snapshot or a concurrent scheduler). Fatal to this
    /// submission; never retried silently.
    #[error("schedule conflict reported by the server: {message}")]
    ServerConflict { message: String },

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Failures on an expired or inconsistent reservation session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("reservation session expired at {expired_at}")]
    Expired { expired_at: DateTime<Utc> },

    #[error("seat {seat_id} is disabled and cannot be held")]
    SeatDisabled { seat_id: i64 },

    #[error("seat {seat_id} is already held in this session")]
    AlreadyHeld { seat_id: i64 },

    #[error("seat {seat_id} is not held in this session")]
    NotHeld { seat_id: i64 },
}
