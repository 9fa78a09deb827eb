//! Short-lived seat holds during checkout.
//!
//! A session is a client-side object with an explicit expiry instant; every
//! operation takes `now` and refuses to run once the deadline has passed.
//! Holding a seat here does not reserve it on the backend, it only keeps the
//! checkout flow honest about which seats the user picked and for how long
//! the picks stay fresh.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::SessionError;
use crate::models::Seat;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationSession {
    pub id: Uuid,
    pub room_id: i64,
    pub showtime_id: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    held: Vec<i64>,
}

impl ReservationSession {
    pub fn new(room_id: i64, showtime_id: i64, ttl: Duration, now: DateTime<Utc>) -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            room_id,
            showtime_id,
            created_at: now,
            expires_at: now + ttl,
            held: Vec::new(),
        };
        debug!(
            session_id = %session.id,
            showtime_id,
            expires_at = %session.expires_at,
            "Reservation session opened"
        );
        session
    }

    /// Expired from the deadline onward: at `expires_at` the session is
    /// already dead.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.expires_at - now).max(Duration::zero())
    }

    /// Adds a seat to the hold list. The seat must be enabled and not
    /// already held.
    pub fn hold_seat(&mut self, seat: &Seat, now: DateTime<Utc>) -> Result<(), SessionError> {
        self.ensure_active(now)?;
        if !seat.is_enabled {
            return Err(SessionError::SeatDisabled { seat_id: seat.id });
        }
        if self.held.contains(&seat.id) {
            return Err(SessionError::AlreadyHeld { seat_id: seat.id });
        }
        self.held.push(seat.id);
        Ok(())
    }

    pub fn release_seat(&mut self, seat_id: i64, now: DateTime<Utc>) -> Result<(), SessionError> {
        self.ensure_active(now)?;
        match self.held.iter().position(|&id| id == seat_id) {
            Some(index) => {
                self.held.remove(index);
                Ok(())
            }
            None => Err(SessionError::NotHeld { seat_id }),
        }
    }

    /// Slides the expiry forward from `now`. Only a live session can renew;
    /// an expired one has to be reopened.
    pub fn touch(&mut self, ttl: Duration, now: DateTime<Utc>) -> Result<(), SessionError> {
        self.ensure_active(now)?;
        self.expires_at = now + ttl;
        Ok(())
    }

    /// Seat ids in the order they were picked.
    pub fn held_seats(&self) -> &[i64] {
        &self.held
    }

    fn ensure_active(&self, now: DateTime<Utc>) -> Result<(), SessionError> {
        if self.is_expired(now) {
            return Err(SessionError::Expired {
                expired_at: self.expires_at,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn ttl() -> Duration {
        Duration::minutes(5)
    }

    fn seat(id: i64, enabled: bool) -> Seat {
        Seat {
            id,
            seat_row: "A".to_string(),
            seat_number: id as i32,
            is_enabled: enabled,
            type_id: 1,
        }
    }

    #[test]
    fn holds_and_releases_enabled_seats() {
        let mut session = ReservationSession::new(1, 10, ttl(), t0());

        session.hold_seat(&seat(1, true), t0()).unwrap();
        session.hold_seat(&seat(2, true), t0()).unwrap();
        assert_eq!(session.held_seats(), [1, 2]);

        session.release_seat(1, t0()).unwrap();
        assert_eq!(session.held_seats(), [2]);
    }

    #[test]
    fn rejects_disabled_and_duplicate_holds() {
        let mut session = ReservationSession::new(1, 10, ttl(), t0());

        assert_eq!(
            session.hold_seat(&seat(1, false), t0()),
            Err(SessionError::SeatDisabled { seat_id: 1 })
        );

        session.hold_seat(&seat(2, true), t0()).unwrap();
        assert_eq!(
            session.hold_seat(&seat(2, true), t0()),
            Err(SessionError::AlreadyHeld { seat_id: 2 })
        );
    }

    #[test]
    fn releasing_an_unheld_seat_fails() {
        let mut session = ReservationSession::new(1, 10, ttl(), t0());
        assert_eq!(
            session.release_seat(9, t0()),
            Err(SessionError::NotHeld { seat_id: 9 })
        );
    }

    #[test]
    fn expires_exactly_at_the_deadline() {
        let mut session = ReservationSession::new(1, 10, ttl(), t0());
        let deadline = t0() + ttl();

        assert!(!session.is_expired(deadline - Duration::seconds(1)));
        assert!(session.is_expired(deadline));
        assert_eq!(session.remaining(deadline + Duration::minutes(1)), Duration::zero());

        assert_eq!(
            session.hold_seat(&seat(1, true), deadline),
            Err(SessionError::Expired {
                expired_at: deadline
            })
        );
    }

    #[test]
    fn touch_slides_the_expiry() {
        let mut session = ReservationSession::new(1, 10, ttl(), t0());
        let later = t0() + Duration::minutes(4);

        session.touch(ttl(), later).unwrap();
        assert!(!session.is_expired(t0() + Duration::minutes(8)));
        assert_eq!(session.expires_at, later + ttl());

        // a dead session cannot renew itself
        let after_expiry = later + ttl();
        assert!(matches!(
            session.touch(ttl(), after_expiry),
            Err(SessionError::Expired { .. })
        ));
    }
}
