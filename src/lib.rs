//! Seat layout and showtime scheduling core for a cinema ticketing platform.
//!
//! The admin-facing flows live here as a library: generating and editing a
//! room's seat grid ([`layout`]), validating candidate showtimes against the
//! scheduling rules ([`scheduling`]), holding seats during checkout
//! ([`session`]), and talking to the ticketing backend that persists it all
//! ([`backend_client`], [`services`]).
//!
//! All validation is pure and snapshot-based; the backend stays the final
//! arbiter and its 409 answers are never overridden locally.

pub mod backend_client;
pub mod config;
pub mod error;
pub mod layout;
pub mod models;
pub mod scheduling;
pub mod services;
pub mod session;

pub use backend_client::{BackendClient, BackendError};
pub use config::Config;
pub use error::{GapViolation, LayoutError, ScheduleError, SessionError};
pub use models::{Movie, Room, RoomCreateRequest, Seat, Showtime, ShowtimeDraft, TimeSlot};
pub use scheduling::{ScheduleBatch, SchedulePolicy};
pub use services::{spawn_refresher, RefreshHandle, ScheduleSnapshot, SubmissionService};
pub use session::ReservationSession;
