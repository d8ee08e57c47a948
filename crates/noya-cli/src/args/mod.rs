// NOTE: Command Organization
//
// Commands are namespaced by the document they act on (auth, profile, space,
// report). Ids may be given in full, as a unique prefix (like a git hash),
// or as a document path such as `users/<uid>/spaces/<id>`.

mod commands;
mod common;
mod enums;
pub mod hints;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "noya")]
#[command(about = "Track research spaces and dated progress reports", long_about = None)]
#[command(version)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Data directory (default: $NOYA_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
