use serde::{Deserialize, Serialize};

/// One seat in a room's grid.
///
/// `id` is the creation identity and never changes; within a row it defines
/// the canonical left-to-right order. `seat_number` is the public label and
/// is only meaningful while `is_enabled` is true — disabled seats keep their
/// last number until the row is renumbered again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: i64,
    pub seat_row: String,
    pub seat_number: i32,
    pub is_enabled: bool,
    pub type_id: i64,
}
