use noya_types::Timestamp;
use serde::Serialize;
use std::fmt;

use super::{CreateView, DateStyle, ReportEntryViewModel, ViewMode};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct SpaceEntryViewModel {
    pub id: String,
    pub id_short: String,
    pub path: String,
    pub name: String,
    pub description: String,
    pub pinned: bool,
    pub created_at: Timestamp,
    pub last_updated: Timestamp,
    pub progress_count: usize,
}

#[derive(Debug, Serialize)]
pub struct SpaceListViewModel {
    pub spaces: Vec<SpaceEntryViewModel>,
    pub pinned_count: usize,
    pub total_reports: usize,
    pub last_activity: Option<Timestamp>,

    #[serde(skip)]
    pub dates: DateStyle,
}

#[derive(Debug, Serialize)]
pub struct SpaceDetailViewModel {
    pub space: SpaceEntryViewModel,
    /// Newest first, at most a handful
    pub recent_reports: Vec<ReportEntryViewModel>,

    #[serde(skip)]
    pub dates: DateStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceAction {
    Created,
    Updated,
    Pinned,
    Unpinned,
    Deleted,
}

#[derive(Debug, Serialize)]
pub struct SpaceChangeViewModel {
    pub action: SpaceAction,
    pub space_id: String,
    pub id_short: String,
    pub name: String,
    pub pinned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reports_deleted: Option<usize>,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for SpaceListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::space::SpaceListView;
        Box::new(SpaceListView::new(self, mode))
    }
}

impl CreateView for SpaceDetailViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::space::SpaceDetailView;
        Box::new(SpaceDetailView::new(self, mode))
    }
}

impl CreateView for SpaceChangeViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::space::SpaceChangeView;
        Box::new(SpaceChangeView::new(self, mode))
    }
}

// --------------------------------------------------------
// Display Trait (default rendering)
// --------------------------------------------------------

impl fmt::Display for SpaceListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(ViewMode::default()))
    }
}

impl fmt::Display for SpaceDetailViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(ViewMode::default()))
    }
}
