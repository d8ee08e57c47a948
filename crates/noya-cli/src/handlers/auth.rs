use super::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::AuthAction;
use anyhow::{Context, Result, bail};
use is_terminal::IsTerminal;
use noya_runtime::{FederatedSignIn, Noya};
use std::io::{BufRead, Write};

pub fn handle_signup(
    workspace: &mut Noya,
    name: &str,
    email: &str,
    password: Option<String>,
    ctx: &HandlerContext,
) -> Result<()> {
    let password = read_password(password)?;
    let profile = workspace.sign_up(name, email, &password)?;

    let view_model =
        presenters::present_auth(AuthAction::SignedUp, workspace.session(), Some(&profile));
    ctx.render(view_model)
}

pub fn handle_signin(
    workspace: &mut Noya,
    email: &str,
    password: Option<String>,
    ctx: &HandlerContext,
) -> Result<()> {
    let password = read_password(password)?;
    let profile = workspace.sign_in(email, &password)?;

    let view_model =
        presenters::present_auth(AuthAction::SignedIn, workspace.session(), Some(&profile));
    ctx.render(view_model)
}

pub fn handle_signin_federated(
    workspace: &mut Noya,
    identity: FederatedSignIn,
    ctx: &HandlerContext,
) -> Result<()> {
    let profile = workspace.sign_in_federated(&identity)?;

    let view_model =
        presenters::present_auth(AuthAction::SignedIn, workspace.session(), Some(&profile));
    ctx.render(view_model)
}

pub fn handle_signout(workspace: &mut Noya, ctx: &HandlerContext) -> Result<()> {
    workspace.sign_out()?;
    ctx.render(presenters::present_auth(AuthAction::SignedOut, None, None))
}

pub fn handle_whoami(workspace: &Noya, ctx: &HandlerContext) -> Result<()> {
    let profile = match workspace.session() {
        Some(_) => workspace.profiles()?.get()?,
        None => None,
    };

    let view_model =
        presenters::present_auth(AuthAction::Current, workspace.session(), profile.as_ref());
    ctx.render(view_model)
}

/// Use the flag value, otherwise read one line from stdin.
fn read_password(password: Option<String>) -> Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprint!("Password: ");
        std::io::stderr().flush()?;
    }

    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;

    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        bail!("no password given (use --password or pipe it on stdin)");
    }
    Ok(password)
}
