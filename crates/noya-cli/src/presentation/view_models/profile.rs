use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct ProfileViewModel {
    pub uid: String,
    pub name: String,
    pub email: String,
    pub renamed: bool,
}

impl CreateView for ProfileViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::profile::ProfileView;
        Box::new(ProfileView::new(self, mode))
    }
}
