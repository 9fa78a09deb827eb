//! backend_client.rs
//!
//! Typed client for the ticketing backend's REST API.
//!
//! Every mutation ships a validated payload and every response is decoded
//! into the crate's models. A 409 from the showtime endpoints is surfaced as
//! [`BackendError::Conflict`]: the server is the final arbiter for slot
//! collisions, and the client never retries one on its own.

use std::time::Duration;

use chrono::{NaiveDate, NaiveTime};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::config::BackendConfig;
use crate::error::LayoutError;
use crate::layout;
use crate::models::{Room, RoomCreateRequest, Seat, Showtime, ShowtimeDraft, TimeSlot};

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request payload failed validation: {0}")]
    Payload(#[from] validator::ValidationErrors),

    /// A layout was about to leave the client with broken numbering.
    #[error("seat numbering integrity check failed: {0}")]
    Integrity(#[from] LayoutError),

    /// 409 from the server: the slot is already taken.
    #[error("schedule conflict: {message}")]
    Conflict { message: String },

    #[error("unexpected status {status} from backend")]
    UnexpectedStatus { status: StatusCode },
}

/// 409 bodies come back as either a bare string or a JSON envelope.
#[derive(Debug, Deserialize)]
struct ConflictBody {
    error: Option<String>,
    message: Option<String>,
}

/// Query string for `GET /showtimes`. Without times it lists a room's day;
/// with them the server checks the exact slot and answers 409 when taken.
#[derive(Debug, Serialize)]
struct ShowtimeQuery {
    room_id: i64,
    show_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_time: Option<NaiveTime>,
}

#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn from_config(config: &BackendConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET /rooms/{id}/seats
    pub async fn fetch_room_seats(&self, room_id: i64) -> Result<Vec<Seat>, BackendError> {
        debug!("Fetching seat layout for room {}", room_id);
        let response = self
            .client
            .get(format!("{}/rooms/{}/seats", self.base_url, room_id))
            .send()
            .await?;
        Ok(Self::expect_success(response).await?.json().await?)
    }

    /// POST /rooms with the full generated layout.
    pub async fn create_room(&self, request: &RoomCreateRequest) -> Result<Room, BackendError> {
        request.validate()?;
        layout::verify_numbering(&request.seats)?;

        info!(
            "Creating room '{}' with {} seats",
            request.name,
            request.seats.len()
        );
        let response = self
            .client
            .post(format!("{}/rooms", self.base_url))
            .json(request)
            .send()
            .await?;
        Ok(Self::expect_success(response).await?.json().await?)
    }

    /// PUT /seats after local toggles or type changes.
    pub async fn update_seats(&self, seats: &[Seat]) -> Result<(), BackendError> {
        layout::verify_numbering(seats)?;

        debug!("Updating {} seats", seats.len());
        let response = self
            .client
            .put(format!("{}/seats", self.base_url))
            .json(&seats)
            .send()
            .await?;
        Self::expect_success(response).await?;
        Ok(())
    }

    /// GET /showtimes for one room and date.
    pub async fn list_showtimes(
        &self,
        room_id: i64,
        show_date: NaiveDate,
    ) -> Result<Vec<Showtime>, BackendError> {
        let query = ShowtimeQuery {
            room_id,
            show_date,
            start_time: None,
            end_time: None,
        };
        let response = self
            .client
            .get(format!("{}/showtimes", self.base_url))
            .query(&query)
            .send()
            .await?;
        Ok(Self::expect_success(response).await?.json().await?)
    }

    /// GET /showtimes with the full slot: the server's authoritative
    /// duplicate check. `Ok(())` means the slot was free at this instant.
    pub async fn check_slot(&self, slot: &TimeSlot) -> Result<(), BackendError> {
        let query = ShowtimeQuery {
            room_id: slot.room_id,
            show_date: slot.show_date,
            start_time: Some(slot.start_time),
            end_time: Some(slot.end_time),
        };
        let response = self
            .client
            .get(format!("{}/showtimes", self.base_url))
            .query(&query)
            .send()
            .await?;
        Self::expect_success(response).await?;
        Ok(())
    }

    /// POST /showtimes with the whole batch.
    pub async fn create_showtimes(
        &self,
        drafts: &[ShowtimeDraft],
    ) -> Result<Vec<Showtime>, BackendError> {
        info!("Submitting {} showtimes", drafts.len());
        let response = self
            .client
            .post(format!("{}/showtimes", self.base_url))
            .json(&drafts)
            .send()
            .await?;
        Ok(Self::expect_success(response).await?.json().await?)
    }

    async fn expect_success(response: Response) -> Result<Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::CONFLICT {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ConflictBody>(&body) {
                Ok(parsed) => parsed.error.or(parsed.message).unwrap_or(body),
                Err(_) if body.is_empty() => "showtime slot already taken".to_string(),
                Err(_) => body,
            };
            warn!("Backend reported a schedule conflict: {}", message);
            return Err(BackendError::Conflict { message });
        }
        Err(BackendError::UnexpectedStatus { status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;

    fn client() -> BackendClient {
        // never reached by these tests: payload checks fail before any I/O
        BackendClient::from_config(&BackendConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout_seconds: 1,
        })
    }

    #[tokio::test]
    async fn create_room_rejects_invalid_payload_before_sending() {
        let request = RoomCreateRequest {
            name: String::new(),
            rows_count: 2,
            columns_count: 2,
            seats: layout::generate_seats(2, 2, &LayoutConfig::default()).unwrap(),
        };
        let err = client().create_room(&request).await.unwrap_err();
        assert!(matches!(err, BackendError::Payload(_)));
    }

    #[tokio::test]
    async fn update_seats_rejects_broken_numbering_before_sending() {
        let mut seats = layout::generate_seats(1, 3, &LayoutConfig::default()).unwrap();
        seats[2].seat_number = 2;

        let err = client().update_seats(&seats).await.unwrap_err();
        assert!(matches!(
            err,
            BackendError::Integrity(LayoutError::DuplicateNumbering { .. })
        ));
    }
}
