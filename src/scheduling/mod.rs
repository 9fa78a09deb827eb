pub mod batch;
pub mod conflicts;
pub mod policy;

pub use batch::ScheduleBatch;
pub use conflicts::{
    find_gap_violation, find_overlap, has_overlap, validate_duration, validate_show_date,
};
pub use policy::SchedulePolicy;
