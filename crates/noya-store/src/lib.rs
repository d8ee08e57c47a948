// SQLite document store
// Keeps the users/{uid}/spaces/{id}/progress_reports/{id} hierarchy as
// owner-scoped tables; every query filters by owner uid.

mod db;
mod error;
mod queries;
mod records;
mod schema;

// Public API
pub use db::Database;
pub use error::{Error, Result};
pub use records::{CredentialRecord, FederatedIdentityRecord};
pub use schema::SCHEMA_VERSION;
