use noya_types::{UserId, UserProfile};
use rusqlite::{Connection, OptionalExtension, params};

use crate::Result;

/// Insert a profile, or refresh name/email if the uid already exists.
pub fn upsert(conn: &Connection, profile: &UserProfile) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO users (uid, name, email)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(uid) DO UPDATE SET
            name = ?2,
            email = ?3
        "#,
        params![profile.uid.as_str(), &profile.name, &profile.email],
    )?;

    Ok(())
}

/// Insert a profile only if none exists for the uid. Returns true if inserted.
pub fn insert_if_absent(conn: &Connection, profile: &UserProfile) -> Result<bool> {
    let inserted = conn.execute(
        r#"
        INSERT INTO users (uid, name, email)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(uid) DO NOTHING
        "#,
        params![profile.uid.as_str(), &profile.name, &profile.email],
    )?;

    Ok(inserted > 0)
}

pub fn get(conn: &Connection, uid: &UserId) -> Result<Option<UserProfile>> {
    let result = conn
        .query_row(
            r#"
            SELECT uid, name, email
            FROM users
            WHERE uid = ?1
            "#,
            [uid.as_str()],
            |row| {
                Ok(UserProfile {
                    uid: UserId::from(row.get::<_, String>(0)?),
                    name: row.get(1)?,
                    email: row.get(2)?,
                })
            },
        )
        .optional()?;

    Ok(result)
}

pub fn rename(conn: &Connection, uid: &UserId, name: &str) -> Result<bool> {
    let changed = conn.execute(
        "UPDATE users SET name = ?2 WHERE uid = ?1",
        params![uid.as_str(), name],
    )?;

    Ok(changed > 0)
}
