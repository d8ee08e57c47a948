use super::check_id_prefix;
use crate::live::{Change, ChangeBus};
use crate::{Error, Result};
use noya_engine::{SpaceSummary, build_space_list};
use noya_store::Database;
use noya_types::{DocPath, Space, SpaceId, SpacePatch, SpaceStats, UserId, now};
use serde::Serialize;

/// Outcome of a cascading space delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpaceDeletion {
    pub space_id: SpaceId,
    pub name: String,
    pub reports_deleted: usize,
}

/// Space operations scoped to one user.
pub struct SpaceOps<'a> {
    db: &'a Database,
    uid: UserId,
    bus: &'a ChangeBus,
}

impl<'a> SpaceOps<'a> {
    pub fn new(db: &'a Database, uid: UserId, bus: &'a ChangeBus) -> Self {
        Self { db, uid, bus }
    }

    /// Full rebuild of the space list: fetch spaces and per-space report
    /// stats, then hand both to the list builder.
    pub(crate) fn fetch_space_list(db: &Database, uid: &UserId) -> Result<Vec<SpaceSummary>> {
        let spaces = db.list_spaces(uid)?;
        let stats = db.report_stats(uid)?;
        tracing::debug!(%uid, spaces = spaces.len(), "rebuilding space list");
        Ok(build_space_list(spaces, &stats))
    }

    pub fn list(&self) -> Result<Vec<SpaceSummary>> {
        Self::fetch_space_list(self.db, &self.uid)
    }

    /// Stored fields only.
    pub fn get(&self, id: &SpaceId) -> Result<Space> {
        self.db
            .get_space(&self.uid, id)?
            .ok_or_else(|| not_found(id))
    }

    /// One space with its derived fields.
    pub fn summary(&self, id: &SpaceId) -> Result<SpaceSummary> {
        let space = self.get(id)?;
        let stats = SpaceStats {
            report_count: self.db.count_reports(&self.uid, id)?,
            latest_report: self.db.latest_report(&self.uid, id)?.map(|r| r.date),
        };
        Ok(SpaceSummary::from_space(space, stats))
    }

    pub fn create(&self, name: &str, description: &str) -> Result<Space> {
        let space = Space {
            id: SpaceId::generate(),
            owner: self.uid.clone(),
            name: validate_name(name)?,
            description: description.trim().to_string(),
            created_at: now(),
            pinned: false,
        };

        self.db.insert_space(&space)?;
        tracing::info!(uid = %self.uid, space_id = %space.id, "space created");
        self.publish(&space.id);

        Ok(space)
    }

    pub fn update(&self, id: &SpaceId, name: &str, description: &str) -> Result<Space> {
        let patch = SpacePatch {
            name: validate_name(name)?,
            description: description.trim().to_string(),
        };

        if !self.db.update_space(&self.uid, id, &patch)? {
            return Err(not_found(id));
        }
        tracing::info!(uid = %self.uid, space_id = %id, "space updated");
        self.publish(id);

        self.get(id)
    }

    /// Flip `pinned` based on the value currently stored.
    pub fn toggle_pin(&self, id: &SpaceId) -> Result<Space> {
        let current = self.get(id)?;
        let pinned = !current.pinned;

        self.db.set_space_pinned(&self.uid, id, pinned)?;
        tracing::info!(uid = %self.uid, space_id = %id, pinned, "space pin toggled");
        self.publish(id);

        Ok(Space { pinned, ..current })
    }

    /// Delete every report of the space, then the space itself.
    ///
    /// Each delete is its own write; a failure part-way leaves the space
    /// with fewer reports and the error is returned.
    pub fn delete(&self, id: &SpaceId) -> Result<SpaceDeletion> {
        let space = self.get(id)?;

        let mut reports_deleted = 0;
        for report_id in self.db.list_report_ids(&self.uid, id)? {
            if self.db.delete_report(&self.uid, id, &report_id)? {
                reports_deleted += 1;
            }
        }

        if !self.db.delete_space(&self.uid, id)? {
            return Err(not_found(id));
        }
        tracing::info!(
            uid = %self.uid,
            space_id = %id,
            reports_deleted,
            "space deleted"
        );
        self.publish(id);

        Ok(SpaceDeletion {
            space_id: space.id,
            name: space.name,
            reports_deleted,
        })
    }

    /// Resolve user input to a space id: a full id, a unique id prefix, or a
    /// `users/{uid}/spaces/{id}` path.
    pub fn resolve(&self, input: &str) -> Result<SpaceId> {
        let input = input.trim();
        if input.is_empty() {
            return Err(Error::InvalidInput("space id must not be empty".to_string()));
        }

        if input.contains('/') {
            let path = DocPath::parse(input)?;
            let space_id = path.space_id().ok_or_else(|| {
                Error::InvalidInput(format!("'{}' does not address a space", input))
            })?;
            if path.uid() != &self.uid {
                return Err(not_found(space_id));
            }
            return self.get(space_id).map(|s| s.id);
        }

        let exact = SpaceId::from(input);
        if self.db.get_space(&self.uid, &exact)?.is_some() {
            return Ok(exact);
        }

        check_id_prefix("space", input)?;
        let mut matches = self.db.find_spaces_by_prefix(&self.uid, input)?;
        match matches.len() {
            0 => Err(Error::NotFound(format!("space '{}'", input))),
            1 => Ok(matches.remove(0)),
            _ => Err(Error::InvalidInput(format!(
                "space id prefix '{}' is ambiguous",
                input
            ))),
        }
    }

    pub fn uid(&self) -> &UserId {
        &self.uid
    }

    fn publish(&self, space_id: &SpaceId) {
        self.bus.publish(Change::Space {
            uid: self.uid.clone(),
            space_id: space_id.clone(),
        });
    }
}

fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::InvalidInput("space name must not be empty".to_string()));
    }
    Ok(name.to_string())
}

fn not_found(id: &SpaceId) -> Error {
    Error::NotFound(format!("space '{}'", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use noya_types::UserProfile;

    fn setup() -> (Database, ChangeBus, UserId) {
        let db = Database::open_in_memory().unwrap();
        let uid = UserId::from("u1");
        db.upsert_profile(&UserProfile {
            uid: uid.clone(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        })
        .unwrap();
        (db, ChangeBus::new(), uid)
    }

    #[test]
    fn test_create_defaults() {
        let (db, bus, uid) = setup();
        let ops = SpaceOps::new(&db, uid.clone(), &bus);

        let space = ops.create("  Thesis  ", " chapter 3 ").unwrap();

        assert_eq!(space.name, "Thesis");
        assert_eq!(space.description, "chapter 3");
        assert!(!space.pinned);
        assert_eq!(space.owner, uid);
        assert_eq!(ops.get(&space.id).unwrap(), space);
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let (db, bus, uid) = setup();
        let ops = SpaceOps::new(&db, uid, &bus);
        assert!(matches!(
            ops.create("   ", "").unwrap_err(),
            Error::InvalidInput(_)
        ));
    }

    #[test]
    fn test_toggle_pin_twice_restores() {
        let (db, bus, uid) = setup();
        let ops = SpaceOps::new(&db, uid, &bus);
        let space = ops.create("Thesis", "").unwrap();

        assert!(ops.toggle_pin(&space.id).unwrap().pinned);
        assert!(!ops.toggle_pin(&space.id).unwrap().pinned);
        assert!(!ops.get(&space.id).unwrap().pinned);
    }

    #[test]
    fn test_writes_publish_changes() {
        let (db, bus, uid) = setup();
        let rx = bus.subscribe();
        let ops = SpaceOps::new(&db, uid.clone(), &bus);

        let space = ops.create("Thesis", "").unwrap();
        ops.update(&space.id, "Thesis v2", "").unwrap();
        ops.toggle_pin(&space.id).unwrap();
        ops.delete(&space.id).unwrap();

        let expected = Change::Space {
            uid,
            space_id: space.id,
        };
        let received: Vec<Change> = rx.try_iter().collect();
        assert_eq!(received, vec![expected; 4]);
    }

    #[test]
    fn test_resolve_by_prefix_and_path() {
        let (db, bus, uid) = setup();
        let ops = SpaceOps::new(&db, uid.clone(), &bus);
        let space = ops.create("Thesis", "").unwrap();

        assert_eq!(ops.resolve(space.id.as_str()).unwrap(), space.id);
        assert_eq!(ops.resolve(space.id.short()).unwrap(), space.id);

        let path = DocPath::Space(uid, space.id.clone()).to_string();
        assert_eq!(ops.resolve(&path).unwrap(), space.id);

        let foreign = DocPath::Space(UserId::from("u2"), space.id.clone()).to_string();
        assert!(matches!(ops.resolve(&foreign).unwrap_err(), Error::NotFound(_)));
        assert!(matches!(ops.resolve("zzzz").unwrap_err(), Error::NotFound(_)));
    }

    #[test]
    fn test_resolve_rejects_wildcards_and_short_prefixes() {
        let (db, bus, uid) = setup();
        let ops = SpaceOps::new(&db, uid, &bus);
        let space = ops.create("Thesis", "").unwrap();

        for input in ["%", "_", "%%"] {
            assert!(matches!(ops.resolve(input).unwrap_err(), Error::InvalidInput(_)));
        }
        assert!(matches!(ops.resolve("%%%%").unwrap_err(), Error::NotFound(_)));
        assert!(matches!(ops.resolve("____").unwrap_err(), Error::NotFound(_)));
        assert!(matches!(
            ops.resolve(&space.id.as_str()[..3]).unwrap_err(),
            Error::InvalidInput(_)
        ));
        assert!(ops.get(&space.id).is_ok());
    }

    #[test]
    fn test_update_missing_space_is_not_found() {
        let (db, bus, uid) = setup();
        let ops = SpaceOps::new(&db, uid, &bus);
        let err = ops
            .update(&SpaceId::from("missing"), "Name", "")
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
