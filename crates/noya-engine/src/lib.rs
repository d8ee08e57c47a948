// Engine module - derived views over stored documents
// This layer sits between raw records (types/store) and CLI presentation.
// Everything here is pure: callers fetch, the engine derives.

mod reports;
mod space_list;

pub use reports::{ReportTimeline, sort_reports};
pub use space_list::{SpaceListSummary, SpaceSummary, build_space_list, sort_spaces};
