mod profiles;
mod reports;
mod spaces;
mod workspace;

pub use profiles::ProfileOps;
pub use reports::{NewReport, ReportOps};
pub use spaces::{SpaceDeletion, SpaceOps};
pub use workspace::Noya;

use crate::{Error, Result};

/// Shortest id prefix accepted when resolving by prefix.
pub const MIN_ID_PREFIX_LEN: usize = 4;

fn check_id_prefix(kind: &str, input: &str) -> Result<()> {
    if input.chars().count() < MIN_ID_PREFIX_LEN {
        return Err(Error::InvalidInput(format!(
            "{} id prefix '{}' is too short (use at least {} characters)",
            kind, input, MIN_ID_PREFIX_LEN
        )));
    }
    Ok(())
}
