//! Local identity provider.
//!
//! Email/password accounts keep an Argon2id PHC string; federated accounts
//! are linked by `(provider, subject)`. Both end in a `UserProfile` row,
//! created on first sign-in.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use noya_store::{CredentialRecord, Database, FederatedIdentityRecord};
use noya_types::{DEFAULT_PROFILE_NAME, UserId, UserProfile, now};

use crate::{Error, Result};

pub const MIN_PASSWORD_LEN: usize = 6;

const INVALID_CREDENTIALS: &str = "invalid email or password";

/// Identity asserted by an external provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederatedSignIn {
    pub provider: String,
    pub subject: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

pub struct AuthService<'a> {
    db: &'a Database,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Create an email/password account and its profile.
    pub fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<UserProfile> {
        let email = normalize_email(email)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidInput("name must not be empty".to_string()));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(Error::Auth(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        if self.db.get_credential(&email)?.is_some() {
            return Err(Error::Auth(format!("an account already exists for '{}'", email)));
        }

        let uid = UserId::generate();
        self.db.insert_credential(&CredentialRecord {
            email: email.clone(),
            uid: uid.clone(),
            password_hash: hash_password(password)?,
            created_at: now(),
        })?;

        let profile = UserProfile {
            uid,
            name: name.to_string(),
            email,
        };
        self.db.upsert_profile(&profile)?;

        tracing::info!(uid = %profile.uid, "account created");
        Ok(profile)
    }

    /// Verify email/password. Unknown email and wrong password fail the same way.
    pub fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile> {
        let email = normalize_email(email).map_err(|_| invalid_credentials())?;
        let credential = self
            .db
            .get_credential(&email)?
            .ok_or_else(invalid_credentials)?;

        if !verify_password(password, &credential.password_hash) {
            tracing::debug!("password mismatch");
            return Err(invalid_credentials());
        }

        self.ensure_profile(&credential.uid, None, &credential.email)
    }

    /// Find or create the account linked to a provider subject.
    ///
    /// An existing profile is never overwritten.
    pub fn sign_in_federated(&self, identity: &FederatedSignIn) -> Result<UserProfile> {
        let provider = identity.provider.trim().to_lowercase();
        let subject = identity.subject.trim();
        if provider.is_empty() || subject.is_empty() {
            return Err(Error::InvalidInput(
                "provider and subject must not be empty".to_string(),
            ));
        }
        let email = identity
            .email
            .as_deref()
            .map(normalize_email)
            .transpose()?;

        let uid = match self.db.get_federated_identity(&provider, subject)? {
            Some(linked) => linked.uid,
            None => {
                let uid = UserId::generate();
                self.db.link_federated_identity(&FederatedIdentityRecord {
                    provider: provider.clone(),
                    subject: subject.to_string(),
                    uid: uid.clone(),
                    email: email.clone(),
                    linked_at: now(),
                })?;
                tracing::info!(%uid, provider = %provider, "federated identity linked");
                uid
            }
        };

        self.ensure_profile(
            &uid,
            identity.display_name.as_deref(),
            email.as_deref().unwrap_or_default(),
        )
    }

    fn ensure_profile(
        &self,
        uid: &UserId,
        display_name: Option<&str>,
        email: &str,
    ) -> Result<UserProfile> {
        let name = display_name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_PROFILE_NAME);

        let candidate = UserProfile {
            uid: uid.clone(),
            name: name.to_string(),
            email: email.to_string(),
        };
        if self.db.insert_profile_if_absent(&candidate)? {
            tracing::info!(%uid, "profile created on first sign-in");
        }

        self.db
            .get_profile(uid)?
            .ok_or_else(|| Error::NotFound(format!("profile for user '{}'", uid)))
    }
}

fn invalid_credentials() -> Error {
    Error::Auth(INVALID_CREDENTIALS.to_string())
}

fn normalize_email(email: &str) -> Result<String> {
    let email = email.trim().to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(Error::InvalidInput(format!("'{}' is not an email address", email))),
    }
}

fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| Error::Auth(format!("failed to hash password: {}", err)))
}

fn verify_password(password: &str, stored: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(err) => {
            tracing::warn!(error = %err, "stored password hash is not a PHC string");
            false
        }
    }
}
