use super::check_id_prefix;
use crate::live::{Change, ChangeBus};
use crate::{Error, Result};
use noya_engine::{ReportTimeline, sort_reports};
use noya_store::Database;
use noya_types::{
    DocPath, ProgressReport, ReportId, ReportPatch, SpaceId, Timestamp, UserId, now,
};

/// Fields supplied when adding a report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewReport {
    pub progress: String,
    pub next_step: String,
    /// `None` stamps the current time
    pub date: Option<Timestamp>,
}

/// Progress report operations scoped to one user.
pub struct ReportOps<'a> {
    db: &'a Database,
    uid: UserId,
    bus: &'a ChangeBus,
}

impl<'a> ReportOps<'a> {
    pub fn new(db: &'a Database, uid: UserId, bus: &'a ChangeBus) -> Self {
        Self { db, uid, bus }
    }

    pub(crate) fn fetch_reports(
        db: &Database,
        uid: &UserId,
        space_id: &SpaceId,
    ) -> Result<Vec<ProgressReport>> {
        let mut reports = db.list_reports(uid, space_id)?;
        sort_reports(&mut reports);
        Ok(reports)
    }

    /// All reports of a space, date descending.
    pub fn list(&self, space_id: &SpaceId) -> Result<Vec<ProgressReport>> {
        self.ensure_space(space_id)?;
        Self::fetch_reports(self.db, &self.uid, space_id)
    }

    pub fn timeline(&self, space_id: &SpaceId) -> Result<ReportTimeline> {
        Ok(ReportTimeline::build(self.list(space_id)?))
    }

    pub fn get(&self, space_id: &SpaceId, id: &ReportId) -> Result<ProgressReport> {
        self.db
            .get_report(&self.uid, space_id, id)?
            .ok_or_else(|| not_found(id))
    }

    pub fn add(&self, space_id: &SpaceId, new: NewReport) -> Result<ProgressReport> {
        self.ensure_space(space_id)?;

        let report = ProgressReport {
            id: ReportId::generate(),
            space_id: space_id.clone(),
            date: new.date.unwrap_or_else(now),
            progress: new.progress.trim().to_string(),
            next_step: new.next_step.trim().to_string(),
            markdown_note: String::new(),
            last_modified: None,
        };

        self.db.insert_report(&self.uid, &report)?;
        tracing::info!(
            uid = %self.uid,
            space_id = %space_id,
            report_id = %report.id,
            "progress report added"
        );
        self.publish(space_id, &report.id);

        Ok(report)
    }

    /// Apply `patch` and stamp `last_modified`, even when nothing else changed.
    pub fn edit(
        &self,
        space_id: &SpaceId,
        id: &ReportId,
        patch: ReportPatch,
    ) -> Result<ProgressReport> {
        let patch = patch.normalized();
        let modified_at = now();

        if !self
            .db
            .update_report(&self.uid, space_id, id, &patch, &modified_at)?
        {
            return Err(not_found(id));
        }
        tracing::info!(
            uid = %self.uid,
            space_id = %space_id,
            report_id = %id,
            "progress report edited"
        );
        self.publish(space_id, id);

        self.get(space_id, id)
    }

    /// Set the markdown note; an empty note clears it.
    ///
    /// Saving the note that is already stored is a no-op and leaves
    /// `last_modified` alone.
    pub fn annotate(
        &self,
        space_id: &SpaceId,
        id: &ReportId,
        note: &str,
    ) -> Result<ProgressReport> {
        let current = self.get(space_id, id)?;
        let note = note.trim();
        if note == current.markdown_note.trim() {
            tracing::debug!(report_id = %id, "note unchanged");
            return Ok(current);
        }

        self.edit(space_id, id, ReportPatch::note(note))
    }

    pub fn delete(&self, space_id: &SpaceId, id: &ReportId) -> Result<ProgressReport> {
        let report = self.get(space_id, id)?;

        if !self.db.delete_report(&self.uid, space_id, id)? {
            return Err(not_found(id));
        }
        tracing::info!(
            uid = %self.uid,
            space_id = %space_id,
            report_id = %id,
            "progress report deleted"
        );
        self.publish(space_id, id);

        Ok(report)
    }

    /// Resolve user input to a report id within `space_id`: a full id, a
    /// unique prefix, or a full report path.
    pub fn resolve(&self, space_id: &SpaceId, input: &str) -> Result<ReportId> {
        let input = input.trim();
        if input.is_empty() {
            return Err(Error::InvalidInput("report id must not be empty".to_string()));
        }

        if input.contains('/') {
            let path = DocPath::parse(input)?;
            let report_id = path.report_id().ok_or_else(|| {
                Error::InvalidInput(format!("'{}' does not address a progress report", input))
            })?;
            if path.uid() != &self.uid || path.space_id() != Some(space_id) {
                return Err(not_found(report_id));
            }
            return self.get(space_id, report_id).map(|r| r.id);
        }

        let exact = ReportId::from(input);
        if self.db.get_report(&self.uid, space_id, &exact)?.is_some() {
            return Ok(exact);
        }

        check_id_prefix("report", input)?;
        let mut matches = self.db.find_reports_by_prefix(&self.uid, space_id, input)?;
        match matches.len() {
            0 => Err(Error::NotFound(format!("progress report '{}'", input))),
            1 => Ok(matches.remove(0)),
            _ => Err(Error::InvalidInput(format!(
                "report id prefix '{}' is ambiguous",
                input
            ))),
        }
    }

    fn ensure_space(&self, space_id: &SpaceId) -> Result<()> {
        match self.db.get_space(&self.uid, space_id)? {
            Some(_) => Ok(()),
            None => Err(Error::NotFound(format!("space '{}'", space_id))),
        }
    }

    fn publish(&self, space_id: &SpaceId, report_id: &ReportId) {
        self.bus.publish(Change::Report {
            uid: self.uid.clone(),
            space_id: space_id.clone(),
            report_id: report_id.clone(),
        });
    }
}

fn not_found(id: &ReportId) -> Error {
    Error::NotFound(format!("progress report '{}'", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::SpaceOps;
    use chrono::{TimeZone, Utc};

    fn setup() -> (Database, ChangeBus, UserId, SpaceId) {
        let db = Database::open_in_memory().unwrap();
        let bus = ChangeBus::new();
        let uid = UserId::from("u1");
        let space = SpaceOps::new(&db, uid.clone(), &bus)
            .create("Thesis", "")
            .unwrap();
        (db, bus, uid, space.id)
    }

    fn new_report(progress: &str, day: u32) -> NewReport {
        NewReport {
            progress: progress.to_string(),
            next_step: " next ".to_string(),
            date: Some(Utc.with_ymd_and_hms(2025, 4, day, 0, 0, 0).unwrap()),
        }
    }

    #[test]
    fn test_add_sets_defaults_and_trims() {
        let (db, bus, uid, space_id) = setup();
        let ops = ReportOps::new(&db, uid, &bus);

        let report = ops.add(&space_id, new_report("  wrote intro  ", 3)).unwrap();

        assert_eq!(report.progress, "wrote intro");
        assert_eq!(report.next_step, "next");
        assert_eq!(report.markdown_note, "");
        assert_eq!(report.last_modified, None);
        assert_eq!(ops.get(&space_id, &report.id).unwrap(), report);
    }

    #[test]
    fn test_add_to_missing_space_fails() {
        let (db, bus, uid, _) = setup();
        let ops = ReportOps::new(&db, uid, &bus);
        let err = ops
            .add(&SpaceId::from("missing"), new_report("x", 1))
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_list_is_date_descending() {
        let (db, bus, uid, space_id) = setup();
        let ops = ReportOps::new(&db, uid, &bus);
        ops.add(&space_id, new_report("first", 1)).unwrap();
        ops.add(&space_id, new_report("third", 20)).unwrap();
        ops.add(&space_id, new_report("second", 9)).unwrap();

        let progress: Vec<String> = ops
            .list(&space_id)
            .unwrap()
            .into_iter()
            .map(|r| r.progress)
            .collect();
        assert_eq!(progress, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_edit_always_stamps_last_modified() {
        let (db, bus, uid, space_id) = setup();
        let ops = ReportOps::new(&db, uid, &bus);
        let report = ops.add(&space_id, new_report("draft", 2)).unwrap();

        let edited = ops
            .edit(&space_id, &report.id, ReportPatch::default())
            .unwrap();

        assert!(edited.last_modified.is_some());
        assert_eq!(edited.progress, "draft");
    }

    #[test]
    fn test_annotate_and_clear_note() {
        let (db, bus, uid, space_id) = setup();
        let ops = ReportOps::new(&db, uid, &bus);
        let report = ops.add(&space_id, new_report("draft", 2)).unwrap();

        let noted = ops.annotate(&space_id, &report.id, "  **key** result \n").unwrap();
        assert_eq!(noted.markdown_note, "**key** result");
        assert!(noted.is_edited());

        let same = ops.annotate(&space_id, &report.id, "**key** result").unwrap();
        assert_eq!(same.last_modified, noted.last_modified);

        let cleared = ops.annotate(&space_id, &report.id, "").unwrap();
        assert!(!cleared.has_note());
    }

    #[test]
    fn test_delete_returns_removed_report() {
        let (db, bus, uid, space_id) = setup();
        let ops = ReportOps::new(&db, uid, &bus);
        let report = ops.add(&space_id, new_report("draft", 2)).unwrap();

        assert_eq!(ops.delete(&space_id, &report.id).unwrap().id, report.id);
        assert!(matches!(
            ops.delete(&space_id, &report.id).unwrap_err(),
            Error::NotFound(_)
        ));
    }

    #[test]
    fn test_resolve_treats_wildcards_literally() {
        let (db, bus, uid, space_id) = setup();
        let ops = ReportOps::new(&db, uid, &bus);
        let report = ops.add(&space_id, new_report("draft", 2)).unwrap();

        assert_eq!(ops.resolve(&space_id, report.id.short()).unwrap(), report.id);
        assert!(matches!(
            ops.resolve(&space_id, "_").unwrap_err(),
            Error::InvalidInput(_)
        ));
        assert!(matches!(
            ops.resolve(&space_id, "%%%%").unwrap_err(),
            Error::NotFound(_)
        ));
    }
}
