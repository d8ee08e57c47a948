use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

/// What `noya` without a subcommand shows.
#[derive(Debug, Serialize)]
pub struct GuidanceViewModel {
    pub data_dir: String,
    pub signed_in: bool,
    pub user_name: Option<String>,
    pub space_count: usize,
}

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::guidance::GuidanceView;
        Box::new(GuidanceView::new(self, mode))
    }
}
