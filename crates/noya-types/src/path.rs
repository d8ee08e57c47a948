use std::fmt;
use std::str::FromStr;

use crate::{Error, ReportId, Result, SpaceId, UserId};

const USERS: &str = "users";
const SPACES: &str = "spaces";
const PROGRESS_REPORTS: &str = "progress_reports";

/// Hierarchical address of a document:
/// `users/{uid}/spaces/{spaceId}/progress_reports/{reportId}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocPath {
    User(UserId),
    Space(UserId, SpaceId),
    Report(UserId, SpaceId, ReportId),
}

impl DocPath {
    pub fn parse(path: &str) -> Result<Self> {
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        let invalid = || Error::InvalidPath(path.to_string());

        if segments.iter().any(|s| s.is_empty()) {
            return Err(invalid());
        }

        match segments.as_slice() {
            [USERS, uid] => Ok(DocPath::User(UserId::from(*uid))),
            [USERS, uid, SPACES, space] => {
                Ok(DocPath::Space(UserId::from(*uid), SpaceId::from(*space)))
            }
            [USERS, uid, SPACES, space, PROGRESS_REPORTS, report] => Ok(DocPath::Report(
                UserId::from(*uid),
                SpaceId::from(*space),
                ReportId::from(*report),
            )),
            _ => Err(invalid()),
        }
    }

    pub fn uid(&self) -> &UserId {
        match self {
            DocPath::User(uid) | DocPath::Space(uid, _) | DocPath::Report(uid, _, _) => uid,
        }
    }

    pub fn space_id(&self) -> Option<&SpaceId> {
        match self {
            DocPath::User(_) => None,
            DocPath::Space(_, space) | DocPath::Report(_, space, _) => Some(space),
        }
    }

    pub fn report_id(&self) -> Option<&ReportId> {
        match self {
            DocPath::Report(_, _, report) => Some(report),
            _ => None,
        }
    }
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocPath::User(uid) => write!(f, "{}/{}", USERS, uid),
            DocPath::Space(uid, space) => write!(f, "{}/{}/{}/{}", USERS, uid, SPACES, space),
            DocPath::Report(uid, space, report) => write!(
                f,
                "{}/{}/{}/{}/{}/{}",
                USERS, uid, SPACES, space, PROGRESS_REPORTS, report
            ),
        }
    }
}

impl FromStr for DocPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DocPath::parse(s)
    }
}
