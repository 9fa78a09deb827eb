//! Seat grid generation and renumbering.
//!
//! A room's layout is a dense row-major grid at creation time. Operators then
//! disable individual seats (pillars, wheelchair clearance, broken chairs),
//! and the renumberer keeps the visible numbers contiguous per row so the
//! printed tickets never skip a seat.

use std::collections::{BTreeMap, HashSet};

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::models::Seat;

/// Spreadsheet-style row label for a zero-based row index: `A..Z`, then
/// `AA`, `AB`, and so on (bijective base-26, no upper limit).
pub fn row_label(index: i32) -> String {
    let mut n = i64::from(index) + 1;
    let mut digits = Vec::new();
    while n > 0 {
        n -= 1;
        digits.push((b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    digits.iter().rev().collect()
}

/// Builds a full `rows x columns` grid of enabled seats in row-major order.
///
/// Ids start at 1 and increase along the walk, so within every row the id
/// order is the physical left-to-right order; the renumberer relies on that.
pub fn generate_seats(
    rows: i32,
    columns: i32,
    config: &LayoutConfig,
) -> Result<Vec<Seat>, LayoutError> {
    if rows < 1 || columns < 1 || rows > config.max_rows || columns > config.max_columns {
        return Err(LayoutError::InvalidDimensions {
            rows,
            columns,
            max_rows: config.max_rows,
            max_columns: config.max_columns,
        });
    }

    let mut seats = Vec::with_capacity((rows * columns) as usize);
    let mut next_id: i64 = 1;
    for row in 0..rows {
        let label = row_label(row);
        for number in 1..=columns {
            seats.push(Seat {
                id: next_id,
                seat_row: label.clone(),
                seat_number: number,
                is_enabled: true,
                type_id: config.default_seat_type_id,
            });
            next_id += 1;
        }
    }
    Ok(seats)
}

/// Reassigns `seat_number` so that in every row the enabled seats count
/// 1, 2, 3, ... in id order. Disabled seats are skipped and keep whatever
/// number they had. Safe to call any number of times.
pub fn recompute_numbers(seats: &mut [Seat]) {
    let mut rows: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (idx, seat) in seats.iter().enumerate() {
        rows.entry(seat.seat_row.clone()).or_default().push(idx);
    }

    for indices in rows.values_mut() {
        // id order is the creation order, independent of slice order
        indices.sort_by_key(|&i| seats[i].id);
        let mut next = 1;
        for &i in indices.iter() {
            if seats[i].is_enabled {
                seats[i].seat_number = next;
                next += 1;
            }
        }
    }
}

/// Flips a seat between enabled and disabled, then renumbers the grid.
/// Returns the seat's new state.
pub fn toggle_seat(seats: &mut [Seat], seat_id: i64) -> Result<bool, LayoutError> {
    let seat = seats
        .iter_mut()
        .find(|s| s.id == seat_id)
        .ok_or(LayoutError::SeatNotFound { seat_id })?;
    seat.is_enabled = !seat.is_enabled;
    let now_enabled = seat.is_enabled;

    recompute_numbers(seats);
    Ok(now_enabled)
}

/// Changes a seat's pricing category. Numbering is untouched, but the seat
/// must exist and be enabled.
pub fn set_seat_type(seats: &mut [Seat], seat_id: i64, type_id: i64) -> Result<(), LayoutError> {
    let seat = seats
        .iter_mut()
        .find(|s| s.id == seat_id)
        .ok_or(LayoutError::SeatNotFound { seat_id })?;
    if !seat.is_enabled {
        return Err(LayoutError::SeatDisabled { seat_id });
    }
    seat.type_id = type_id;
    Ok(())
}

/// Checks that no two enabled seats in the same row share a number. Run
/// before any layout leaves for the backend.
pub fn verify_numbering(seats: &[Seat]) -> Result<(), LayoutError> {
    let mut seen: HashSet<(&str, i32)> = HashSet::new();
    for seat in seats.iter().filter(|s| s.is_enabled) {
        if !seen.insert((seat.seat_row.as_str(), seat.seat_number)) {
            return Err(LayoutError::DuplicateNumbering {
                seat_row: seat.seat_row.clone(),
                seat_number: seat.seat_number,
            });
        }
    }
    Ok(())
}
