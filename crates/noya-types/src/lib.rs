pub mod domain;
pub mod error;
pub mod path;
mod util;

pub use domain::*;
pub use error::{Error, Result};
pub use path::DocPath;
pub use util::*;
