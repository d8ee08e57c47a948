use noya_types::Timestamp;
use serde::Serialize;
use std::fmt;

use super::{CreateView, DateStyle, ViewMode};

#[derive(Debug, Clone, Serialize)]
pub struct ReportEntryViewModel {
    pub id: String,
    pub id_short: String,
    pub path: String,
    pub date: Timestamp,
    pub progress: String,
    pub next_step: String,
    pub markdown_note: String,
    pub has_note: bool,
    pub edited: bool,
    pub last_modified: Option<Timestamp>,
}

#[derive(Debug, Serialize)]
pub struct ReportListViewModel {
    pub space_id: String,
    pub space_name: String,
    pub reports: Vec<ReportEntryViewModel>,
    pub edited_count: usize,
    pub noted_count: usize,
    pub first_date: Option<Timestamp>,
    pub last_date: Option<Timestamp>,

    #[serde(skip)]
    pub dates: DateStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportAction {
    Added,
    Edited,
    Annotated,
    NoteCleared,
    NoteUnchanged,
    Deleted,
}

#[derive(Debug, Serialize)]
pub struct ReportChangeViewModel {
    pub action: ReportAction,
    pub space_id: String,
    pub report: ReportEntryViewModel,

    #[serde(skip)]
    pub dates: DateStyle,
}

impl CreateView for ReportListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::report::ReportListView;
        Box::new(ReportListView::new(self, mode))
    }
}

impl CreateView for ReportChangeViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::report::ReportChangeView;
        Box::new(ReportChangeView::new(self, mode))
    }
}

impl fmt::Display for ReportListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(ViewMode::default()))
    }
}
