use crate::live::{Change, ChangeBus};
use crate::{Error, Result};
use noya_store::Database;
use noya_types::{UserId, UserProfile};

pub struct ProfileOps<'a> {
    db: &'a Database,
    uid: UserId,
    bus: &'a ChangeBus,
}

impl<'a> ProfileOps<'a> {
    pub fn new(db: &'a Database, uid: UserId, bus: &'a ChangeBus) -> Self {
        Self { db, uid, bus }
    }

    pub fn get(&self) -> Result<Option<UserProfile>> {
        Ok(self.db.get_profile(&self.uid)?)
    }

    pub fn rename(&self, name: &str) -> Result<UserProfile> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidInput("name must not be empty".to_string()));
        }

        if !self.db.rename_profile(&self.uid, name)? {
            return Err(Error::NotFound(format!("profile for user '{}'", self.uid)));
        }
        tracing::info!(uid = %self.uid, "profile renamed");
        self.bus.publish(Change::Profile {
            uid: self.uid.clone(),
        });

        self.get()?
            .ok_or_else(|| Error::NotFound(format!("profile for user '{}'", self.uid)))
    }
}
