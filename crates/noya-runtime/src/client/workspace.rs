use crate::auth::{AuthService, FederatedSignIn};
use crate::client::{ProfileOps, ReportOps, SpaceOps};
use crate::config::Config;
use crate::live::{ChangeBus, LiveQuery, ReportListQuery, SpaceListQuery};
use crate::session::{Session, SessionStore};
use crate::{Error, Result};
use noya_store::Database;
use noya_types::{SpaceId, UserId, UserProfile, now};
use std::path::{Path, PathBuf};

const PASSWORD_METHOD: &str = "password";

/// Entry point: one workspace (data dir + database) and the signed-in user.
pub struct Noya {
    db: Database,
    db_path: Option<PathBuf>,
    config: Config,
    bus: ChangeBus,
    sessions: Option<SessionStore>,
    session: Option<Session>,
}

impl Noya {
    pub fn open(data_dir: &Path) -> Result<Self> {
        let config_path = data_dir.join("config.toml");
        let config = Config::load_from(&config_path)?;
        Self::open_with_config(data_dir, config)
    }

    pub fn open_with_config(data_dir: &Path, config: Config) -> Result<Self> {
        let db_path = config.database_path(data_dir);
        let db = Database::open(&db_path)?;

        let sessions = SessionStore::new(data_dir);
        let session = sessions.load()?;
        if let Some(session) = &session {
            tracing::debug!(uid = %session.uid, "restored session");
        }

        Ok(Self {
            db,
            db_path: Some(db_path),
            config,
            bus: ChangeBus::new(),
            sessions: Some(sessions),
            session,
        })
    }

    /// Throwaway workspace: nothing persists, live queries are unavailable.
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            db: Database::open_in_memory()?,
            db_path: None,
            config: Config::default(),
            bus: ChangeBus::new(),
            sessions: None,
            session: None,
        })
    }

    // Identity

    pub fn sign_up(&mut self, name: &str, email: &str, password: &str) -> Result<UserProfile> {
        let profile = AuthService::new(&self.db).sign_up(name, email, password)?;
        self.start_session(&profile, PASSWORD_METHOD)?;
        Ok(profile)
    }

    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<UserProfile> {
        let profile = AuthService::new(&self.db).sign_in(email, password)?;
        self.start_session(&profile, PASSWORD_METHOD)?;
        Ok(profile)
    }

    pub fn sign_in_federated(&mut self, identity: &FederatedSignIn) -> Result<UserProfile> {
        let profile = AuthService::new(&self.db).sign_in_federated(identity)?;
        let method = identity.provider.trim().to_lowercase();
        self.start_session(&profile, &method)?;
        Ok(profile)
    }

    /// Returns the session that was cleared, if any.
    pub fn sign_out(&mut self) -> Result<Option<Session>> {
        if let Some(store) = &self.sessions {
            store.clear()?;
        }
        let previous = self.session.take();
        if let Some(session) = &previous {
            tracing::info!(uid = %session.uid, "signed out");
        }
        Ok(previous)
    }

    pub fn current_user(&self) -> Option<&UserId> {
        self.session.as_ref().map(|s| &s.uid)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn require_user(&self) -> Result<&UserId> {
        self.current_user().ok_or(Error::NotSignedIn)
    }

    fn start_session(&mut self, profile: &UserProfile, method: &str) -> Result<()> {
        let session = Session {
            uid: profile.uid.clone(),
            email: profile.email.clone(),
            method: method.to_string(),
            signed_in_at: now(),
        };
        if let Some(store) = &self.sessions {
            store.save(&session)?;
        }
        tracing::info!(uid = %session.uid, method, "signed in");
        self.session = Some(session);
        Ok(())
    }

    // Scoped operations

    pub fn profiles(&self) -> Result<ProfileOps<'_>> {
        let uid = self.require_user()?.clone();
        Ok(ProfileOps::new(&self.db, uid, &self.bus))
    }

    pub fn spaces(&self) -> Result<SpaceOps<'_>> {
        let uid = self.require_user()?.clone();
        Ok(SpaceOps::new(&self.db, uid, &self.bus))
    }

    pub fn reports(&self) -> Result<ReportOps<'_>> {
        let uid = self.require_user()?.clone();
        Ok(ReportOps::new(&self.db, uid, &self.bus))
    }

    // Live queries

    /// Space list of the signed-in user, rebuilt on every change.
    pub fn watch_spaces(&self) -> Result<SpaceListQuery> {
        let uid = self.require_user()?.clone();
        let db_path = self.live_database_path()?;
        let relevant_uid = uid.clone();

        LiveQuery::start(
            "spaces",
            db_path,
            &self.bus,
            &self.config.watch,
            move |change| change.affects_spaces_of(&relevant_uid),
            move |db| SpaceOps::fetch_space_list(db, &uid),
        )
    }

    /// Reports of one space, date descending, rebuilt on every change.
    pub fn watch_reports(&self, space_id: &SpaceId) -> Result<ReportListQuery> {
        let uid = self.require_user()?.clone();
        let db_path = self.live_database_path()?;
        let space_id = space_id.clone();

        if self.db.get_space(&uid, &space_id)?.is_none() {
            return Err(Error::NotFound(format!("space '{}'", space_id)));
        }

        let relevant_uid = uid.clone();
        let relevant_space = space_id.clone();
        LiveQuery::start(
            "reports",
            db_path,
            &self.bus,
            &self.config.watch,
            move |change| change.affects_reports_of(&relevant_uid, &relevant_space),
            move |db| ReportOps::fetch_reports(db, &uid, &space_id),
        )
    }

    fn live_database_path(&self) -> Result<&Path> {
        self.db_path.as_deref().ok_or_else(|| {
            Error::Watch("live queries need a file-backed workspace".to_string())
        })
    }

    // Accessors

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn database_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn change_bus(&self) -> &ChangeBus {
        &self.bus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_operations_require_sign_in() {
        let noya = Noya::open_in_memory().unwrap();
        assert!(matches!(noya.spaces().err(), Some(Error::NotSignedIn)));
        assert!(matches!(noya.reports().err(), Some(Error::NotSignedIn)));
        assert!(matches!(noya.profiles().err(), Some(Error::NotSignedIn)));
    }

    #[test]
    fn test_session_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let uid = {
            let mut noya = Noya::open(dir.path()).unwrap();
            noya.sign_up("Ada", "ada@example.com", "secret1").unwrap().uid
        };

        let mut reopened = Noya::open(dir.path()).unwrap();
        assert_eq!(reopened.current_user(), Some(&uid));
        assert_eq!(reopened.session().map(|s| s.method.as_str()), Some("password"));

        let cleared = reopened.sign_out().unwrap();
        assert_eq!(cleared.map(|s| s.uid), Some(uid));
        assert!(Noya::open(dir.path()).unwrap().current_user().is_none());
    }

    #[test]
    fn test_live_queries_need_a_file() {
        let mut noya = Noya::open_in_memory().unwrap();
        noya.sign_up("Ada", "ada@example.com", "secret1").unwrap();
        assert!(matches!(noya.watch_spaces().err(), Some(Error::Watch(_))));
    }

    #[test]
    fn test_custom_database_file_name() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.store.file_name = "research.db".to_string();

        let noya = Noya::open_with_config(dir.path(), config).unwrap();
        assert_eq!(noya.database_path(), Some(dir.path().join("research.db").as_path()));
        assert!(dir.path().join("research.db").exists());
    }
}
