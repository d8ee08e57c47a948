use serde::{Deserialize, Serialize};

use super::{SpaceId, UserId};
use crate::Timestamp;

/// Stored fields of a research space.
///
/// Report count and last-updated time are not stored here; they are derived
/// at read time by the list builder in `noya-engine`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub id: SpaceId,
    pub owner: UserId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub pinned: bool,
}

/// Field-level edit of a space (name and description are always written together).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpacePatch {
    pub name: String,
    pub description: String,
}

/// Per-space aggregate over its progress reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceStats {
    pub report_count: usize,
    /// Date of the most recent report, if any
    pub latest_report: Option<Timestamp>,
}
