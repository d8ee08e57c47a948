use noya_types::{UserId, format_timestamp};
use rusqlite::{Connection, OptionalExtension, params};

use super::ts_column;
use crate::{
    Error, Result,
    records::{CredentialRecord, FederatedIdentityRecord},
};

pub fn insert_credential(conn: &Connection, credential: &CredentialRecord) -> Result<()> {
    let result = conn.execute(
        r#"
        INSERT INTO credentials (email, uid, password_hash, created_at)
        VALUES (?1, ?2, ?3, ?4)
        "#,
        params![
            &credential.email,
            credential.uid.as_str(),
            &credential.password_hash,
            format_timestamp(&credential.created_at)
        ],
    );

    match result {
        Ok(_) => Ok(()),
        Err(rusqlite::Error::SqliteFailure(err, _))
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Err(Error::Query(format!(
                "an account already exists for '{}'",
                credential.email
            )))
        }
        Err(err) => Err(err.into()),
    }
}

pub fn get_credential(conn: &Connection, email: &str) -> Result<Option<CredentialRecord>> {
    let result = conn
        .query_row(
            r#"
            SELECT email, uid, password_hash, created_at
            FROM credentials
            WHERE email = ?1
            "#,
            [email],
            |row| {
                Ok(CredentialRecord {
                    email: row.get(0)?,
                    uid: UserId::from(row.get::<_, String>(1)?),
                    password_hash: row.get(2)?,
                    created_at: ts_column(row, 3)?,
                })
            },
        )
        .optional()?;

    Ok(result)
}

pub fn insert_federated(conn: &Connection, identity: &FederatedIdentityRecord) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO federated_identities (provider, subject, uid, email, linked_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        ON CONFLICT(provider, subject) DO UPDATE SET
            email = COALESCE(?4, email)
        "#,
        params![
            &identity.provider,
            &identity.subject,
            identity.uid.as_str(),
            &identity.email,
            format_timestamp(&identity.linked_at)
        ],
    )?;

    Ok(())
}

pub fn get_federated(
    conn: &Connection,
    provider: &str,
    subject: &str,
) -> Result<Option<FederatedIdentityRecord>> {
    let result = conn
        .query_row(
            r#"
            SELECT provider, subject, uid, email, linked_at
            FROM federated_identities
            WHERE provider = ?1 AND subject = ?2
            "#,
            [provider, subject],
            |row| {
                Ok(FederatedIdentityRecord {
                    provider: row.get(0)?,
                    subject: row.get(1)?,
                    uid: UserId::from(row.get::<_, String>(2)?),
                    email: row.get(3)?,
                    linked_at: ts_column(row, 4)?,
                })
            },
        )
        .optional()?;

    Ok(result)
}
