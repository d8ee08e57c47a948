// NOTE: noya CLI layout
//
// Every command goes handler -> runtime (noya-runtime) -> presenter ->
// view model -> renderer. Handlers never print directly; they hand a
// CommandResultViewModel to the renderer, which decides between JSON and
// text. Text density follows ViewMode (--quiet/--compact/--verbose).
//
// The signed-in user is read from session.toml on every invocation, so
// each command is a fresh process with no shared state besides the data dir.

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{
    AuthCommand, Cli, Commands, LogLevel, OutputFormat, ProfileCommand, ReportCommand,
    SpaceCommand,
};
pub use commands::run;
pub use logging::init_logging;
