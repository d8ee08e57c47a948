use crate::args::hints::cmd;
use crate::presentation::view_models::{
    AuthAction, AuthViewModel, CommandResultViewModel, Guidance, StatusBadge,
};
use noya_runtime::Session;
use noya_types::UserProfile;

pub fn present_auth(
    action: AuthAction,
    session: Option<&Session>,
    profile: Option<&UserProfile>,
) -> CommandResultViewModel<AuthViewModel> {
    let content = AuthViewModel {
        action,
        signed_in: session.is_some(),
        uid: session.map(|s| s.uid.to_string()),
        name: profile.map(|p| p.name.clone()),
        email: profile
            .map(|p| p.email.clone())
            .or_else(|| session.map(|s| s.email.clone())),
        method: session.map(|s| s.method.clone()),
        signed_in_at: session.map(|s| s.signed_in_at),
    };

    let result = CommandResultViewModel::new(content);

    match (action, session) {
        (AuthAction::SignedUp, Some(_)) => result
            .with_badge(StatusBadge::success("Account created"))
            .with_suggestion(
                Guidance::new("Create your first research space").with_command(cmd::SPACE_CREATE),
            ),
        (AuthAction::SignedIn, Some(_)) => result
            .with_badge(StatusBadge::success("Signed in"))
            .with_suggestion(Guidance::new("See your spaces").with_command(cmd::SPACE_LIST)),
        (AuthAction::SignedOut, _) => result.with_badge(StatusBadge::success("Signed out")),
        (_, None) => result
            .with_badge(StatusBadge::warning("Not signed in"))
            .with_suggestion(Guidance::new("Sign in").with_command(cmd::AUTH_SIGNIN))
            .with_suggestion(Guidance::new("Or create an account").with_command(cmd::AUTH_SIGNUP)),
        (AuthAction::Current, Some(_)) => result,
    }
}
