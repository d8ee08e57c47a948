mod auth;
mod guidance;
mod profile;
mod report;
mod space;

pub use auth::present_auth;
pub use guidance::present_guidance;
pub use profile::present_profile;
pub use report::{present_report_change, present_report_list, report_entry};
pub use space::{
    present_space_change, present_space_deleted, present_space_detail, present_space_list,
    space_entry,
};
