use std::fmt;

use crate::presentation::view_models::{GuidanceViewModel, ViewMode};

pub struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
    mode: ViewMode,
}

impl<'a> GuidanceView<'a> {
    pub fn new(data: &'a GuidanceViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", self.data.data_dir);
        }

        writeln!(f, "noya - research progress tracker")?;
        writeln!(f)?;
        writeln!(f, "Data directory: {}", self.data.data_dir)?;

        match &self.data.user_name {
            Some(name) if self.data.signed_in => writeln!(
                f,
                "Signed in as {} ({} spaces)",
                name, self.data.space_count
            ),
            _ if self.data.signed_in => {
                writeln!(f, "Signed in ({} spaces)", self.data.space_count)
            }
            _ => writeln!(f, "Not signed in"),
        }
    }
}
