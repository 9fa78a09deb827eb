pub mod refresh;
pub mod submission;

pub use refresh::{spawn_refresher, RefreshHandle, ScheduleSnapshot};
pub use submission::SubmissionService;
