use serde::{Deserialize, Serialize};

use super::UserId;

/// Name given to federated accounts whose provider supplied no display name
pub const DEFAULT_PROFILE_NAME: &str = "Noya User";

/// Account profile stored at `users/{uid}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub uid: UserId,
    pub name: String,
    pub email: String,
}
