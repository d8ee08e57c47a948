use std::collections::HashMap;
use std::path::{Path, PathBuf};

use noya_types::{
    ProgressReport, ReportId, ReportPatch, Space, SpaceId, SpacePatch, SpaceStats, Timestamp,
    UserId, UserProfile,
};
use rusqlite::Connection;

use crate::queries;
use crate::records::{CredentialRecord, FederatedIdentityRecord};
use crate::{Result, schema};

pub struct Database {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;
        let db = Self {
            conn,
            path: Some(db_path.to_path_buf()),
        };
        db.init_schema()?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn, path: None };
        db.init_schema()?;
        Ok(db)
    }

    pub fn init_schema(&self) -> Result<()> {
        schema::init_schema(&self.conn)
    }

    pub fn schema_version(&self) -> Result<i32> {
        schema::schema_version(&self.conn)
    }

    /// Backing file, `None` for in-memory databases.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    // Profiles

    pub fn upsert_profile(&self, profile: &UserProfile) -> Result<()> {
        queries::profile::upsert(&self.conn, profile)
    }

    pub fn insert_profile_if_absent(&self, profile: &UserProfile) -> Result<bool> {
        queries::profile::insert_if_absent(&self.conn, profile)
    }

    pub fn get_profile(&self, uid: &UserId) -> Result<Option<UserProfile>> {
        queries::profile::get(&self.conn, uid)
    }

    pub fn rename_profile(&self, uid: &UserId, name: &str) -> Result<bool> {
        queries::profile::rename(&self.conn, uid, name)
    }

    // Identity

    pub fn insert_credential(&self, credential: &CredentialRecord) -> Result<()> {
        queries::account::insert_credential(&self.conn, credential)
    }

    pub fn get_credential(&self, email: &str) -> Result<Option<CredentialRecord>> {
        queries::account::get_credential(&self.conn, email)
    }

    pub fn link_federated_identity(&self, identity: &FederatedIdentityRecord) -> Result<()> {
        queries::account::insert_federated(&self.conn, identity)
    }

    pub fn get_federated_identity(
        &self,
        provider: &str,
        subject: &str,
    ) -> Result<Option<FederatedIdentityRecord>> {
        queries::account::get_federated(&self.conn, provider, subject)
    }

    // Spaces

    pub fn insert_space(&self, space: &Space) -> Result<()> {
        queries::space::insert(&self.conn, space)
    }

    pub fn get_space(&self, owner: &UserId, id: &SpaceId) -> Result<Option<Space>> {
        queries::space::get(&self.conn, owner, id)
    }

    pub fn list_spaces(&self, owner: &UserId) -> Result<Vec<Space>> {
        queries::space::list(&self.conn, owner)
    }

    pub fn find_spaces_by_prefix(&self, owner: &UserId, prefix: &str) -> Result<Vec<SpaceId>> {
        queries::space::find_by_prefix(&self.conn, owner, prefix)
    }

    pub fn update_space(&self, owner: &UserId, id: &SpaceId, patch: &SpacePatch) -> Result<bool> {
        queries::space::update(&self.conn, owner, id, patch)
    }

    pub fn set_space_pinned(&self, owner: &UserId, id: &SpaceId, pinned: bool) -> Result<bool> {
        queries::space::set_pinned(&self.conn, owner, id, pinned)
    }

    pub fn delete_space(&self, owner: &UserId, id: &SpaceId) -> Result<bool> {
        queries::space::delete(&self.conn, owner, id)
    }

    // Progress reports

    pub fn insert_report(&self, owner: &UserId, report: &ProgressReport) -> Result<()> {
        queries::report::insert(&self.conn, owner, report)
    }

    pub fn get_report(
        &self,
        owner: &UserId,
        space_id: &SpaceId,
        id: &ReportId,
    ) -> Result<Option<ProgressReport>> {
        queries::report::get(&self.conn, owner, space_id, id)
    }

    pub fn list_reports(&self, owner: &UserId, space_id: &SpaceId) -> Result<Vec<ProgressReport>> {
        queries::report::list(&self.conn, owner, space_id)
    }

    pub fn latest_report(
        &self,
        owner: &UserId,
        space_id: &SpaceId,
    ) -> Result<Option<ProgressReport>> {
        queries::report::latest(&self.conn, owner, space_id)
    }

    pub fn count_reports(&self, owner: &UserId, space_id: &SpaceId) -> Result<usize> {
        queries::report::count(&self.conn, owner, space_id)
    }

    pub fn report_stats(&self, owner: &UserId) -> Result<HashMap<SpaceId, SpaceStats>> {
        queries::report::stats_by_space(&self.conn, owner)
    }

    pub fn list_report_ids(&self, owner: &UserId, space_id: &SpaceId) -> Result<Vec<ReportId>> {
        queries::report::list_ids(&self.conn, owner, space_id)
    }

    pub fn find_reports_by_prefix(
        &self,
        owner: &UserId,
        space_id: &SpaceId,
        prefix: &str,
    ) -> Result<Vec<ReportId>> {
        queries::report::find_by_prefix(&self.conn, owner, space_id, prefix)
    }

    pub fn update_report(
        &self,
        owner: &UserId,
        space_id: &SpaceId,
        id: &ReportId,
        patch: &ReportPatch,
        modified_at: &Timestamp,
    ) -> Result<bool> {
        queries::report::update(&self.conn, owner, space_id, id, patch, modified_at)
    }

    pub fn delete_report(&self, owner: &UserId, space_id: &SpaceId, id: &ReportId) -> Result<bool> {
        queries::report::delete(&self.conn, owner, space_id, id)
    }

    pub fn count_orphan_reports(&self, owner: &UserId) -> Result<usize> {
        queries::report::count_orphans(&self.conn, owner)
    }
}
