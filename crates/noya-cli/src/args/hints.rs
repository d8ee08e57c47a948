pub mod cmd {
    // Auth commands
    pub const AUTH_SIGNUP: &str = "noya auth signup --name <NAME> --email <EMAIL>";
    pub const AUTH_SIGNIN: &str = "noya auth signin --email <EMAIL>";

    // Profile commands
    pub const PROFILE_RENAME: &str = "noya profile rename <NAME>";

    // Space commands
    pub const SPACE_LIST: &str = "noya space list";
    pub const SPACE_CREATE: &str = "noya space create <NAME>";
    pub const SPACE_WATCH: &str = "noya space watch";
}

pub mod fmt {
    pub fn space_show(space_id: &str) -> String {
        format!("noya space show {}", space_id)
    }

    pub fn space_pin(space_id: &str) -> String {
        format!("noya space pin {}", space_id)
    }

    pub fn report_add(space_id: &str) -> String {
        format!("noya report add {} --progress <TEXT>", space_id)
    }

    pub fn report_list(space_id: &str) -> String {
        format!("noya report list {}", space_id)
    }

    pub fn report_note(space_id: &str, report_id: &str) -> String {
        format!("noya report note {} {} <NOTE>", space_id, report_id)
    }
}
