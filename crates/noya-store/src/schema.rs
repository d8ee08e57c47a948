use rusqlite::Connection;

use crate::{Error, Result};

// Schema version (increment when adding a migration)
pub const SCHEMA_VERSION: i32 = 3;

// NOTE: Document layout
//
// The hierarchy users/{uid}/spaces/{id}/progress_reports/{id} is flattened
// into one table per collection. Child tables carry owner_uid so every read
// and write can be scoped to a single user without joins.
//
// There are no FOREIGN KEY cascades: deleting a space is a sequence of
// single-row writes issued by the caller (reports first, then the space).
//
// Timestamps are fixed-width RFC 3339 TEXT, so ORDER BY on them is
// chronological.
//
// Unlike a rebuildable index, this file holds user data, so migrations are
// applied in order and never drop tables.

const MIGRATION_V1_DOCUMENTS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        uid TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS spaces (
        id TEXT PRIMARY KEY,
        owner_uid TEXT NOT NULL,
        name TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        created_at TEXT NOT NULL,
        pinned BOOLEAN NOT NULL DEFAULT 0
    );

    CREATE TABLE IF NOT EXISTS progress_reports (
        id TEXT PRIMARY KEY,
        space_id TEXT NOT NULL,
        owner_uid TEXT NOT NULL,
        date TEXT NOT NULL,
        progress TEXT NOT NULL DEFAULT '',
        next_step TEXT NOT NULL DEFAULT '',
        markdown_note TEXT NOT NULL DEFAULT '',
        last_modified TEXT
    );

    CREATE INDEX IF NOT EXISTS idx_spaces_owner ON spaces(owner_uid, pinned DESC, created_at DESC);
    CREATE INDEX IF NOT EXISTS idx_reports_space ON progress_reports(owner_uid, space_id, date DESC);
"#;

const MIGRATION_V2_IDENTITY: &str = r#"
    CREATE TABLE IF NOT EXISTS credentials (
        email TEXT PRIMARY KEY,
        uid TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        salt TEXT NOT NULL,
        created_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS federated_identities (
        provider TEXT NOT NULL,
        subject TEXT NOT NULL,
        uid TEXT NOT NULL,
        email TEXT,
        linked_at TEXT NOT NULL,
        PRIMARY KEY (provider, subject)
    );

    CREATE INDEX IF NOT EXISTS idx_federated_uid ON federated_identities(uid);
"#;

// Password hashes become self-describing PHC strings with the salt embedded.
// Digests written before v3 no longer verify.
const MIGRATION_V3_PHC_PASSWORDS: &str = r#"
    ALTER TABLE credentials DROP COLUMN salt;
"#;

const MIGRATIONS: &[(i32, &str)] = &[
    (1, MIGRATION_V1_DOCUMENTS),
    (2, MIGRATION_V2_IDENTITY),
    (3, MIGRATION_V3_PHC_PASSWORDS),
];

pub fn schema_version(conn: &Connection) -> Result<i32> {
    Ok(conn.query_row("PRAGMA user_version", [], |row| row.get(0))?)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    let current_version = schema_version(conn)?;

    if current_version > SCHEMA_VERSION {
        return Err(Error::UnsupportedSchemaVersion {
            found: current_version,
            supported: SCHEMA_VERSION,
        });
    }

    for (version, sql) in MIGRATIONS {
        if *version <= current_version {
            continue;
        }
        tracing::debug!(version, "applying schema migration");
        conn.execute_batch(sql)?;
        conn.execute(&format!("PRAGMA user_version = {}", version), [])?;
    }

    Ok(())
}
