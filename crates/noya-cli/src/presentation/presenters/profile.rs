use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, ProfileViewModel, StatusBadge,
};
use noya_types::UserProfile;

pub fn present_profile(
    profile: &UserProfile,
    renamed: bool,
) -> CommandResultViewModel<ProfileViewModel> {
    let content = ProfileViewModel {
        uid: profile.uid.to_string(),
        name: profile.name.clone(),
        email: profile.email.clone(),
        renamed,
    };

    let result = CommandResultViewModel::new(content);
    if renamed {
        result.with_badge(StatusBadge::success("Profile renamed"))
    } else {
        result.with_suggestion(
            Guidance::new("Change your display name").with_command(cmd::PROFILE_RENAME),
        )
    }
}
