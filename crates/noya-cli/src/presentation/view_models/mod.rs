pub mod auth;
pub mod common;
pub mod guidance;
pub mod profile;
pub mod report;
pub mod result;
pub mod space;

use std::fmt;

pub use auth::{AuthAction, AuthViewModel};
pub use common::{DateStyle, Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode};
pub use guidance::GuidanceViewModel;
pub use profile::ProfileViewModel;
pub use report::{ReportAction, ReportChangeViewModel, ReportEntryViewModel, ReportListViewModel};
pub use result::CommandResultViewModel;
pub use space::{
    SpaceAction, SpaceChangeViewModel, SpaceDetailViewModel, SpaceEntryViewModel,
    SpaceListViewModel,
};

/// Bridge from a view model to the `fmt::Display` view that lays it out.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
