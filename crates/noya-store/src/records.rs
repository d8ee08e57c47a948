use noya_types::{Timestamp, UserId};

/// Email/password credential of a local account.
///
/// Only the password hash is stored; hashing happens in the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    /// Normalized (lowercase) email, unique.
    pub email: String,
    pub uid: UserId,
    /// PHC string (`$argon2id$...`), salt included.
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// Link between an external identity provider subject and a local account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederatedIdentityRecord {
    /// Provider name (google, github, ...).
    pub provider: String,
    /// Stable subject id issued by the provider.
    pub subject: String,
    pub uid: UserId,
    pub email: Option<String>,
    pub linked_at: Timestamp,
}
