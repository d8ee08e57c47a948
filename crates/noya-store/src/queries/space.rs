use noya_types::{Space, SpaceId, SpacePatch, UserId, format_timestamp};
use rusqlite::{Connection, OptionalExtension, Row, params};

use super::{prefix_pattern, ts_column};
use crate::Result;

const SPACE_COLUMNS: &str = "id, owner_uid, name, description, created_at, pinned";

fn map_space(row: &Row<'_>) -> rusqlite::Result<Space> {
    Ok(Space {
        id: SpaceId::from(row.get::<_, String>(0)?),
        owner: UserId::from(row.get::<_, String>(1)?),
        name: row.get(2)?,
        description: row.get(3)?,
        created_at: ts_column(row, 4)?,
        pinned: row.get(5)?,
    })
}

pub fn insert(conn: &Connection, space: &Space) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO spaces (id, owner_uid, name, description, created_at, pinned)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
        params![
            space.id.as_str(),
            space.owner.as_str(),
            &space.name,
            &space.description,
            format_timestamp(&space.created_at),
            space.pinned
        ],
    )?;

    Ok(())
}

pub fn get(conn: &Connection, owner: &UserId, id: &SpaceId) -> Result<Option<Space>> {
    let query = format!(
        "SELECT {} FROM spaces WHERE owner_uid = ?1 AND id = ?2",
        SPACE_COLUMNS
    );
    let result = conn
        .query_row(&query, [owner.as_str(), id.as_str()], map_space)
        .optional()?;

    Ok(result)
}

/// All spaces of one owner, pinned first then newest first.
pub fn list(conn: &Connection, owner: &UserId) -> Result<Vec<Space>> {
    let query = format!(
        r#"
        SELECT {}
        FROM spaces
        WHERE owner_uid = ?1
        ORDER BY pinned DESC, created_at DESC, id ASC
        "#,
        SPACE_COLUMNS
    );

    let mut stmt = conn.prepare(&query)?;
    let spaces = stmt
        .query_map([owner.as_str()], map_space)?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(spaces)
}

/// Resolve a space by id prefix. Returns every match (0, 1, or ambiguous).
pub fn find_by_prefix(conn: &Connection, owner: &UserId, prefix: &str) -> Result<Vec<SpaceId>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT id
        FROM spaces
        WHERE owner_uid = ?1 AND id LIKE ?2 ESCAPE '\'
        LIMIT 2
        "#,
    )?;

    if prefix.is_empty() {
        return Ok(Vec::new());
    }

    let pattern = prefix_pattern(prefix);
    let ids = stmt
        .query_map([owner.as_str(), pattern.as_str()], |row| {
            Ok(SpaceId::from(row.get::<_, String>(0)?))
        })?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(ids)
}

pub fn update(conn: &Connection, owner: &UserId, id: &SpaceId, patch: &SpacePatch) -> Result<bool> {
    let changed = conn.execute(
        r#"
        UPDATE spaces
        SET name = ?3, description = ?4
        WHERE owner_uid = ?1 AND id = ?2
        "#,
        params![owner.as_str(), id.as_str(), &patch.name, &patch.description],
    )?;

    Ok(changed > 0)
}

pub fn set_pinned(conn: &Connection, owner: &UserId, id: &SpaceId, pinned: bool) -> Result<bool> {
    let changed = conn.execute(
        "UPDATE spaces SET pinned = ?3 WHERE owner_uid = ?1 AND id = ?2",
        params![owner.as_str(), id.as_str(), pinned],
    )?;

    Ok(changed > 0)
}

/// Delete the space row only. Reports are removed separately by the caller.
pub fn delete(conn: &Connection, owner: &UserId, id: &SpaceId) -> Result<bool> {
    let changed = conn.execute(
        "DELETE FROM spaces WHERE owner_uid = ?1 AND id = ?2",
        params![owner.as_str(), id.as_str()],
    )?;

    Ok(changed > 0)
}
