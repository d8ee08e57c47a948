use std::collections::HashMap;

use noya_types::{
    ProgressReport, ReportId, ReportPatch, SpaceId, SpaceStats, Timestamp, UserId,
    format_timestamp,
};
use rusqlite::{Connection, OptionalExtension, Row, params};

use super::{opt_ts_column, prefix_pattern, ts_column};
use crate::Result;

const REPORT_COLUMNS: &str =
    "id, space_id, date, progress, next_step, markdown_note, last_modified";

fn map_report(row: &Row<'_>) -> rusqlite::Result<ProgressReport> {
    Ok(ProgressReport {
        id: ReportId::from(row.get::<_, String>(0)?),
        space_id: SpaceId::from(row.get::<_, String>(1)?),
        date: ts_column(row, 2)?,
        progress: row.get(3)?,
        next_step: row.get(4)?,
        markdown_note: row.get(5)?,
        last_modified: opt_ts_column(row, 6)?,
    })
}

pub fn insert(conn: &Connection, owner: &UserId, report: &ProgressReport) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO progress_reports (id, space_id, owner_uid, date, progress, next_step,
                                      markdown_note, last_modified)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
        "#,
        params![
            report.id.as_str(),
            report.space_id.as_str(),
            owner.as_str(),
            format_timestamp(&report.date),
            &report.progress,
            &report.next_step,
            &report.markdown_note,
            report.last_modified.as_ref().map(format_timestamp)
        ],
    )?;

    Ok(())
}

pub fn get(
    conn: &Connection,
    owner: &UserId,
    space_id: &SpaceId,
    id: &ReportId,
) -> Result<Option<ProgressReport>> {
    let query = format!(
        "SELECT {} FROM progress_reports WHERE owner_uid = ?1 AND space_id = ?2 AND id = ?3",
        REPORT_COLUMNS
    );
    let result = conn
        .query_row(
            &query,
            [owner.as_str(), space_id.as_str(), id.as_str()],
            map_report,
        )
        .optional()?;

    Ok(result)
}

/// All reports of a space, newest report date first.
pub fn list(conn: &Connection, owner: &UserId, space_id: &SpaceId) -> Result<Vec<ProgressReport>> {
    let query = format!(
        r#"
        SELECT {}
        FROM progress_reports
        WHERE owner_uid = ?1 AND space_id = ?2
        ORDER BY date DESC, id ASC
        "#,
        REPORT_COLUMNS
    );

    let mut stmt = conn.prepare(&query)?;
    let reports = stmt
        .query_map([owner.as_str(), space_id.as_str()], map_report)?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(reports)
}

pub fn latest(
    conn: &Connection,
    owner: &UserId,
    space_id: &SpaceId,
) -> Result<Option<ProgressReport>> {
    let query = format!(
        r#"
        SELECT {}
        FROM progress_reports
        WHERE owner_uid = ?1 AND space_id = ?2
        ORDER BY date DESC, id ASC
        LIMIT 1
        "#,
        REPORT_COLUMNS
    );
    let result = conn
        .query_row(&query, [owner.as_str(), space_id.as_str()], map_report)
        .optional()?;

    Ok(result)
}

pub fn count(conn: &Connection, owner: &UserId, space_id: &SpaceId) -> Result<usize> {
    let count: i64 = conn.query_row(
        r#"
        SELECT COUNT(*)
        FROM progress_reports
        WHERE owner_uid = ?1 AND space_id = ?2
        "#,
        [owner.as_str(), space_id.as_str()],
        |row| row.get(0),
    )?;

    Ok(count as usize)
}

/// Count and latest report date for every space of an owner that has reports.
pub fn stats_by_space(conn: &Connection, owner: &UserId) -> Result<HashMap<SpaceId, SpaceStats>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT space_id, COUNT(*), MAX(date)
        FROM progress_reports
        WHERE owner_uid = ?1
        GROUP BY space_id
        "#,
    )?;

    let stats = stmt
        .query_map([owner.as_str()], |row| {
            let count: i64 = row.get(1)?;
            Ok((
                SpaceId::from(row.get::<_, String>(0)?),
                SpaceStats {
                    report_count: count as usize,
                    latest_report: opt_ts_column(row, 2)?,
                },
            ))
        })?
        .collect::<std::result::Result<HashMap<_, _>, rusqlite::Error>>()?;

    Ok(stats)
}

pub fn list_ids(conn: &Connection, owner: &UserId, space_id: &SpaceId) -> Result<Vec<ReportId>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT id
        FROM progress_reports
        WHERE owner_uid = ?1 AND space_id = ?2
        "#,
    )?;

    let ids = stmt
        .query_map([owner.as_str(), space_id.as_str()], |row| {
            Ok(ReportId::from(row.get::<_, String>(0)?))
        })?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(ids)
}

pub fn find_by_prefix(
    conn: &Connection,
    owner: &UserId,
    space_id: &SpaceId,
    prefix: &str,
) -> Result<Vec<ReportId>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT id
        FROM progress_reports
        WHERE owner_uid = ?1 AND space_id = ?2 AND id LIKE ?3 ESCAPE '\'
        LIMIT 2
        "#,
    )?;

    if prefix.is_empty() {
        return Ok(Vec::new());
    }

    let pattern = prefix_pattern(prefix);
    let ids = stmt
        .query_map(
            [owner.as_str(), space_id.as_str(), pattern.as_str()],
            |row| Ok(ReportId::from(row.get::<_, String>(0)?)),
        )?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(ids)
}

/// Apply a field-level patch and stamp `last_modified`.
pub fn update(
    conn: &Connection,
    owner: &UserId,
    space_id: &SpaceId,
    id: &ReportId,
    patch: &ReportPatch,
    modified_at: &Timestamp,
) -> Result<bool> {
    let changed = conn.execute(
        r#"
        UPDATE progress_reports
        SET progress = COALESCE(?4, progress),
            next_step = COALESCE(?5, next_step),
            markdown_note = COALESCE(?6, markdown_note),
            date = COALESCE(?7, date),
            last_modified = ?8
        WHERE owner_uid = ?1 AND space_id = ?2 AND id = ?3
        "#,
        params![
            owner.as_str(),
            space_id.as_str(),
            id.as_str(),
            &patch.progress,
            &patch.next_step,
            &patch.markdown_note,
            patch.date.as_ref().map(format_timestamp),
            format_timestamp(modified_at)
        ],
    )?;

    Ok(changed > 0)
}

pub fn delete(
    conn: &Connection,
    owner: &UserId,
    space_id: &SpaceId,
    id: &ReportId,
) -> Result<bool> {
    let changed = conn.execute(
        "DELETE FROM progress_reports WHERE owner_uid = ?1 AND space_id = ?2 AND id = ?3",
        params![owner.as_str(), space_id.as_str(), id.as_str()],
    )?;

    Ok(changed > 0)
}

/// Reports of an owner whose space no longer exists.
pub fn count_orphans(conn: &Connection, owner: &UserId) -> Result<usize> {
    let count: i64 = conn.query_row(
        r#"
        SELECT COUNT(*)
        FROM progress_reports r
        LEFT JOIN spaces s ON s.id = r.space_id AND s.owner_uid = r.owner_uid
        WHERE r.owner_uid = ?1 AND s.id IS NULL
        "#,
        [owner.as_str()],
        |row| row.get(0),
    )?;

    Ok(count as usize)
}
