use std::fmt;

use crate::presentation::view_models::{ProfileViewModel, ViewMode};

pub struct ProfileView<'a> {
    data: &'a ProfileViewModel,
    mode: ViewMode,
}

impl<'a> ProfileView<'a> {
    pub fn new(data: &'a ProfileViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for ProfileView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => writeln!(f, "{}", self.data.name),
            _ => {
                if self.data.email.is_empty() {
                    writeln!(f, "{}", self.data.name)?;
                } else {
                    writeln!(f, "{} <{}>", self.data.name, self.data.email)?;
                }
                writeln!(f, "  uid: {}", self.data.uid)
            }
        }
    }
}
