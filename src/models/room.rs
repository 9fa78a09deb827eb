use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Seat;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub rows_count: i32,
    pub columns_count: i32,
}

/// Payload for `POST /rooms`: a freshly generated (and possibly edited)
/// layout. Validated before it leaves the client.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RoomCreateRequest {
    #[validate(length(min = 1, max = 64, message = "room name must be 1-64 characters"))]
    pub name: String,
    #[validate(range(min = 1, max = 20, message = "rows must be between 1 and 20"))]
    pub rows_count: i32,
    #[validate(range(min = 1, max = 20, message = "columns must be between 1 and 20"))]
    pub columns_count: i32,
    pub seats: Vec<Seat>,
}
