pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod live;
pub mod session;

pub use auth::{FederatedSignIn, MIN_PASSWORD_LEN};
pub use client::{
    MIN_ID_PREFIX_LEN, NewReport, Noya, ProfileOps, ReportOps, SpaceDeletion, SpaceOps,
};
pub use config::{Config, DisplayConfig, StoreConfig, WatchConfig, resolve_workspace_path};
pub use error::{Error, Result};
pub use live::{Change, ChangeBus, LiveEvent, LiveQuery, ReportListQuery, SpaceListQuery};
pub use session::{Session, SessionStore};
