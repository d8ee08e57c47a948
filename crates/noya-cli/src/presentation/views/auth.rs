use std::fmt;

use crate::presentation::formatters::time;
use crate::presentation::view_models::{AuthAction, AuthViewModel, ViewMode};

pub struct AuthView<'a> {
    data: &'a AuthViewModel,
    mode: ViewMode,
}

impl<'a> AuthView<'a> {
    pub fn new(data: &'a AuthViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for AuthView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;

        if !data.signed_in {
            return match data.action {
                AuthAction::SignedOut => writeln!(f, "Signed out."),
                _ => writeln!(f, "Not signed in."),
            };
        }

        let uid = data.uid.as_deref().unwrap_or_default();
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", uid);
        }

        let name = data.name.as_deref().unwrap_or("(no profile)");
        match data.email.as_deref() {
            Some(email) if !email.is_empty() => writeln!(f, "{} <{}>", name, email)?,
            _ => writeln!(f, "{}", name)?,
        }

        if self.mode == ViewMode::Compact {
            return Ok(());
        }

        writeln!(f, "  uid:    {}", uid)?;
        if let Some(method) = &data.method {
            writeln!(f, "  method: {}", method)?;
        }
        if self.mode == ViewMode::Verbose
            && let Some(since) = &data.signed_in_at
        {
            writeln!(f, "  since:  {}", time::format_datetime(since))?;
        }
        Ok(())
    }
}
