//! # Presentation Layer
//!
//! MVVM-style output for the CLI. Data flows one way:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                  ==(Text)==> [ View ]
//! ```
//!
//! ## Rules
//!
//! * **ViewModels hold raw data.** Timestamps stay timestamps, counts stay
//!   numbers. JSON output is an API.
//! * **ViewMode is density, not shape.** Minimal prints ids for scripts,
//!   Compact one line per item, Standard is the human default, Verbose adds
//!   full ids, paths and edit times.
//! * **JSON ignores ViewMode.** `--format json` always dumps the full
//!   `CommandResultViewModel`.
//!
//! ## Where does code go?
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | `view_models/` |
//! | Count, group, pick suggestions | `presenters/` |
//! | Hide something in Compact mode | `views/` |
//! | Format a date as "3 days ago" | `formatters/` |
//! | Switch between JSON and text | `renderers/` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel,
    common::{DateStyle, OutputFormat, ViewMode},
};
