use crate::args::hints::cmd;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, GuidanceViewModel};

pub fn present_guidance(
    data_dir: String,
    user_name: Option<String>,
    signed_in: bool,
    space_count: usize,
) -> CommandResultViewModel<GuidanceViewModel> {
    let content = GuidanceViewModel {
        data_dir,
        signed_in,
        user_name,
        space_count,
    };

    let result = CommandResultViewModel::new(content);

    if !signed_in {
        return result
            .with_suggestion(Guidance::new("Create an account").with_command(cmd::AUTH_SIGNUP))
            .with_suggestion(Guidance::new("Or sign in").with_command(cmd::AUTH_SIGNIN));
    }

    if space_count == 0 {
        return result.with_suggestion(
            Guidance::new("Create your first research space").with_command(cmd::SPACE_CREATE),
        );
    }

    result
        .with_suggestion(Guidance::new("List your spaces").with_command(cmd::SPACE_LIST))
        .with_suggestion(Guidance::new("Follow changes live").with_command(cmd::SPACE_WATCH))
}
