use super::args::{AuthCommand, Cli, Commands, ProfileCommand, ReportCommand, SpaceCommand};
use super::handlers::{self, HandlerContext};
use crate::presentation::DateStyle;
use anyhow::Result;
use noya_runtime::{FederatedSignIn, Noya, resolve_workspace_path};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let mut workspace = Noya::open(&data_dir)?;
    tracing::debug!(data_dir = %data_dir.display(), "workspace opened");

    let format = cli.format;
    let dates = DateStyle::from(&workspace.config().display);

    let Some(command) = cli.command else {
        let ctx = HandlerContext::standard(format, dates);
        return handlers::guidance::handle(&workspace, &data_dir, &ctx);
    };

    match command {
        Commands::Auth { command } => {
            let ctx = HandlerContext::standard(format, dates);

            match command {
                AuthCommand::Signup {
                    name,
                    email,
                    password,
                } => handlers::auth::handle_signup(&mut workspace, &name, &email, password, &ctx),
                AuthCommand::Signin { email, password } => {
                    handlers::auth::handle_signin(&mut workspace, &email, password, &ctx)
                }
                AuthCommand::SigninFederated {
                    provider,
                    subject,
                    email,
                    display_name,
                } => {
                    let identity = FederatedSignIn {
                        provider,
                        subject,
                        email,
                        display_name,
                    };
                    handlers::auth::handle_signin_federated(&mut workspace, identity, &ctx)
                }
                AuthCommand::Signout => handlers::auth::handle_signout(&mut workspace, &ctx),
                AuthCommand::Whoami => handlers::auth::handle_whoami(&workspace, &ctx),
            }
        }

        Commands::Profile { command } => {
            let ctx = HandlerContext::standard(format, dates);

            match command {
                ProfileCommand::Show => handlers::profile::handle_show(&workspace, &ctx),
                ProfileCommand::Rename { name } => {
                    handlers::profile::handle_rename(&workspace, &name, &ctx)
                }
            }
        }

        Commands::Space { command } => match command {
            SpaceCommand::List { view_mode } => {
                let ctx = HandlerContext::new(format, &view_mode, dates);
                handlers::space::handle_list(&workspace, &ctx)
            }
            SpaceCommand::Create { name, description } => {
                let ctx = HandlerContext::standard(format, dates);
                handlers::space::handle_create(&workspace, &name, &description, &ctx)
            }
            SpaceCommand::Show { space, view_mode } => {
                let ctx = HandlerContext::new(format, &view_mode, dates);
                handlers::space::handle_show(&workspace, &space, &ctx)
            }
            SpaceCommand::Edit {
                space,
                name,
                description,
            } => {
                let ctx = HandlerContext::standard(format, dates);
                handlers::space::handle_edit(&workspace, &space, name, description, &ctx)
            }
            SpaceCommand::Delete { space } => {
                let ctx = HandlerContext::standard(format, dates);
                handlers::space::handle_delete(&workspace, &space, &ctx)
            }
            SpaceCommand::Pin { space } => {
                let ctx = HandlerContext::standard(format, dates);
                handlers::space::handle_pin(&workspace, &space, &ctx)
            }
            SpaceCommand::Watch { count, view_mode } => {
                let ctx = HandlerContext::new(format, &view_mode, dates);
                handlers::watch::handle_spaces(&workspace, count, &ctx)
            }
        },

        Commands::Report { command } => match command {
            ReportCommand::List { space, view_mode } => {
                let ctx = HandlerContext::new(format, &view_mode, dates);
                handlers::report::handle_list(&workspace, &space, &ctx)
            }
            ReportCommand::Add {
                space,
                progress,
                next_step,
                date,
            } => {
                let ctx = HandlerContext::standard(format, dates);
                handlers::report::handle_add(&workspace, &space, progress, next_step, date, &ctx)
            }
            ReportCommand::Edit {
                space,
                report,
                progress,
                next_step,
                date,
            } => {
                let ctx = HandlerContext::standard(format, dates);
                handlers::report::handle_edit(
                    &workspace, &space, &report, progress, next_step, date, &ctx,
                )
            }
            ReportCommand::Note {
                space,
                report,
                note,
                clear,
            } => {
                let ctx = HandlerContext::standard(format, dates);
                handlers::report::handle_note(&workspace, &space, &report, note, clear, &ctx)
            }
            ReportCommand::Delete { space, report } => {
                let ctx = HandlerContext::standard(format, dates);
                handlers::report::handle_delete(&workspace, &space, &report, &ctx)
            }
            ReportCommand::Watch {
                space,
                count,
                view_mode,
            } => {
                let ctx = HandlerContext::new(format, &view_mode, dates);
                handlers::watch::handle_reports(&workspace, &space, count, &ctx)
            }
        },
    }
}
