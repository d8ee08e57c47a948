mod ids;
mod profile;
mod report;
mod space;

pub use ids::{ReportId, SpaceId, UserId};
pub use profile::{DEFAULT_PROFILE_NAME, UserProfile};
pub use report::{ProgressReport, ReportPatch};
pub use space::{Space, SpacePatch, SpaceStats};
