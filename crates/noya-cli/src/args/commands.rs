use super::common::ViewModeArgs;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Sign up, sign in and manage the local session")]
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },

    #[command(about = "Show or rename the signed-in user's profile")]
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },

    #[command(about = "Manage research spaces")]
    Space {
        #[command(subcommand)]
        command: SpaceCommand,
    },

    #[command(about = "Manage progress reports within a space")]
    Report {
        #[command(subcommand)]
        command: ReportCommand,
    },
}

#[derive(Subcommand)]
pub enum AuthCommand {
    #[command(about = "Create an email/password account and sign in")]
    Signup {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// Read from stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },

    #[command(about = "Sign in with email and password")]
    Signin {
        #[arg(long)]
        email: String,

        /// Read from stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },

    #[command(about = "Sign in with an identity asserted by an external provider")]
    SigninFederated {
        /// Provider name (e.g. google)
        #[arg(long)]
        provider: String,

        /// Stable account id at the provider
        #[arg(long)]
        subject: String,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        display_name: Option<String>,
    },

    #[command(about = "Forget the local session")]
    Signout,

    #[command(about = "Show the signed-in user")]
    Whoami,
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    #[command(about = "Show the profile of the signed-in user")]
    Show,

    #[command(about = "Change the display name")]
    Rename { name: String },
}

#[derive(Subcommand)]
pub enum SpaceCommand {
    #[command(about = "List spaces, pinned first then newest")]
    List {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Create a space")]
    Create {
        name: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    #[command(about = "Show one space with its latest reports")]
    Show {
        /// Space id, id prefix, or document path
        space: String,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Change a space's name and description")]
    Edit {
        space: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    #[command(about = "Delete a space and all of its reports")]
    Delete { space: String },

    #[command(about = "Toggle the pinned flag")]
    Pin { space: String },

    #[command(about = "Print the space list now and after every change")]
    Watch {
        /// Stop after this many snapshots
        #[arg(long)]
        count: Option<usize>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },
}

#[derive(Subcommand)]
pub enum ReportCommand {
    #[command(about = "List a space's reports, newest first")]
    List {
        space: String,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Add a progress report")]
    Add {
        space: String,

        #[arg(long)]
        progress: String,

        #[arg(long, default_value = "")]
        next_step: String,

        /// YYYY-MM-DD or RFC 3339 (default: now)
        #[arg(long)]
        date: Option<String>,
    },

    #[command(about = "Edit a report; marks it as edited")]
    Edit {
        space: String,
        report: String,

        #[arg(long)]
        progress: Option<String>,

        #[arg(long)]
        next_step: Option<String>,

        /// YYYY-MM-DD or RFC 3339
        #[arg(long)]
        date: Option<String>,
    },

    #[command(about = "Set or clear a report's markdown note")]
    Note {
        space: String,
        report: String,

        /// Markdown note (use --clear to erase it)
        note: Option<String>,

        #[arg(long, conflicts_with = "note")]
        clear: bool,
    },

    #[command(about = "Delete a single report")]
    Delete { space: String, report: String },

    #[command(about = "Print a space's reports now and after every change")]
    Watch {
        space: String,

        /// Stop after this many snapshots
        #[arg(long)]
        count: Option<usize>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },
}
