pub mod auth;
pub mod guidance;
pub mod profile;
pub mod report;
pub mod space;
