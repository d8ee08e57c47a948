//! Live-subscription reads.
//!
//! A [`LiveQuery`] emits a full snapshot when it starts and a fresh one after
//! every relevant [`Change`]. Changes arrive from the in-process
//! [`ChangeBus`] and, optionally, from polling the database file for writes
//! made by other processes.

mod bus;
mod query;

pub use bus::{Change, ChangeBus};
pub use query::{LiveEvent, LiveQuery};

use noya_engine::SpaceSummary;
use noya_types::ProgressReport;

/// The signed-in user's space list, pinned first then newest.
pub type SpaceListQuery = LiveQuery<Vec<SpaceSummary>>;

/// One space's reports, date descending.
pub type ReportListQuery = LiveQuery<Vec<ProgressReport>>;
