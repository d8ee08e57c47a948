use noya_types::Timestamp;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthAction {
    SignedUp,
    SignedIn,
    SignedOut,
    Current,
}

#[derive(Debug, Serialize)]
pub struct AuthViewModel {
    pub action: AuthAction,
    pub signed_in: bool,
    pub uid: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    /// `password` or the federated provider
    pub method: Option<String>,
    pub signed_in_at: Option<Timestamp>,
}

impl CreateView for AuthViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::auth::AuthView;
        Box::new(AuthView::new(self, mode))
    }
}
