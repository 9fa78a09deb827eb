pub mod movie;
pub mod room;
pub mod seat;
pub mod showtime;

pub use movie::Movie;
pub use room::{Room, RoomCreateRequest};
pub use seat::Seat;
pub use showtime::{Showtime, ShowtimeDraft, TimeSlot};
