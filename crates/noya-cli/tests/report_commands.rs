//! Progress report add / list / edit / note / delete through the CLI.

use anyhow::Result;
use noya_testing::TestWorld;
use noya_testing::assertions::{
    assert_report_count, assert_report_progress, assert_reports_belong_to,
};

struct Fixture {
    world: TestWorld,
    uid: String,
    space: String,
}

fn fixture() -> Result<Fixture> {
    let world = TestWorld::new();
    let uid = world.signup("Ada", "ada@example.com")?;
    let space = world.create_space("Thesis")?;
    Ok(Fixture { world, uid, space })
}

#[test]
fn test_list_is_newest_first() -> Result<()> {
    let Fixture { world, uid, space } = fixture()?;
    world.add_report(&space, "middle", "2024-02-01")?;
    world.add_report(&space, "oldest", "2024-01-01")?;
    world.add_report(&space, "newest", "2024-03-01")?;

    let json = world.run_json(&["report", "list", &space])?.json()?;
    assert_report_progress(&json, &["newest", "middle", "oldest"])?;
    assert_reports_belong_to(&json, &uid, &space)?;
    assert_eq!(json["content"]["space_name"], "Thesis");

    Ok(())
}

#[test]
fn test_add_trims_and_starts_unedited() -> Result<()> {
    let Fixture { world, space, .. } = fixture()?;

    let result = world.run_json(&[
        "report",
        "add",
        &space,
        "--progress",
        "  ran the baseline  ",
        "--next-step",
        " tune lr ",
    ])?;
    assert!(result.success(), "{}", result.stderr());

    let json = result.json()?;
    let report = &json["content"]["report"];
    assert_eq!(json["content"]["action"], "added");
    assert_eq!(report["progress"], "ran the baseline");
    assert_eq!(report["next_step"], "tune lr");
    assert_eq!(report["markdown_note"], "");
    assert_eq!(report["edited"], false);
    assert!(report["last_modified"].is_null());

    Ok(())
}

#[test]
fn test_add_rejects_bad_date() -> Result<()> {
    let Fixture { world, space, .. } = fixture()?;

    let result = world.run(&[
        "report", "add", &space, "--progress", "x", "--date", "yesterday",
    ])?;
    assert!(!result.success());
    assert!(result.stderr().contains("Error:"));

    Ok(())
}

#[test]
fn test_edit_marks_report_as_edited() -> Result<()> {
    let Fixture { world, space, .. } = fixture()?;
    let report = world.add_report(&space, "draft", "2024-01-01")?;

    let edit = world.run_json(&[
        "report",
        "edit",
        &space,
        &report[..8],
        "--progress",
        "final",
    ])?;
    assert!(edit.success(), "{}", edit.stderr());

    let json = edit.json()?;
    assert_eq!(json["content"]["action"], "edited");
    assert_eq!(json["content"]["report"]["progress"], "final");
    assert_eq!(json["content"]["report"]["edited"], true);
    assert!(json["content"]["report"]["last_modified"].is_string());

    let text = world.run(&["report", "list", &space])?;
    assert!(text.stdout().contains("(Edited)"));

    let list = world.run_json(&["report", "list", &space])?.json()?;
    assert_eq!(list["content"]["edited_count"], 1);

    Ok(())
}

#[test]
fn test_edit_requires_a_field() -> Result<()> {
    let Fixture { world, space, .. } = fixture()?;
    let report = world.add_report(&space, "draft", "2024-01-01")?;

    let result = world.run(&["report", "edit", &space, &report])?;
    assert!(!result.success());
    assert!(result.stderr().contains("nothing to change"));

    Ok(())
}

#[test]
fn test_note_set_unchanged_and_clear() -> Result<()> {
    let Fixture { world, space, .. } = fixture()?;
    let report = world.add_report(&space, "draft", "2024-01-01")?;

    let set = world.run_json(&["report", "note", &space, &report, "# Findings"])?;
    assert!(set.success(), "{}", set.stderr());
    let set = set.json()?;
    assert_eq!(set["content"]["action"], "annotated");
    assert_eq!(set["content"]["report"]["markdown_note"], "# Findings");
    assert_eq!(set["content"]["report"]["has_note"], true);
    let stamped = set["content"]["report"]["last_modified"].clone();

    let again = world
        .run_json(&["report", "note", &space, &report, "# Findings"])?
        .json()?;
    assert_eq!(again["content"]["action"], "note_unchanged");
    assert_eq!(again["content"]["report"]["last_modified"], stamped);

    let clear = world
        .run_json(&["report", "note", &space, &report, "--clear"])?
        .json()?;
    assert_eq!(clear["content"]["action"], "note_cleared");
    assert_eq!(clear["content"]["report"]["has_note"], false);

    let missing = world.run(&["report", "note", &space, &report])?;
    assert!(!missing.success());

    Ok(())
}

#[test]
fn test_delete_removes_single_report() -> Result<()> {
    let Fixture { world, space, .. } = fixture()?;
    let keep = world.add_report(&space, "keep", "2024-01-01")?;
    let doomed = world.add_report(&space, "drop", "2024-01-02")?;

    let result = world.run_json(&["report", "delete", &space, &doomed])?;
    assert!(result.success(), "{}", result.stderr());
    assert_eq!(result.json()?["content"]["action"], "deleted");

    let json = world.run_json(&["report", "list", &space])?.json()?;
    assert_report_count(&json, 1)?;
    assert_eq!(json["content"]["reports"][0]["id"], keep.as_str());

    let again = world.run(&["report", "delete", &space, &doomed])?;
    assert!(!again.success());

    Ok(())
}

#[test]
fn test_reports_stay_in_their_space() -> Result<()> {
    let Fixture { world, space, .. } = fixture()?;
    let other = world.create_space("Side project")?;
    let report = world.add_report(&space, "thesis work", "2024-01-01")?;

    let json = world.run_json(&["report", "list", &other])?.json()?;
    assert_report_count(&json, 0)?;
    assert_eq!(json["badge"]["label"], "No reports in 'Side project'");

    let cross = world.run(&["report", "delete", &other, &report])?;
    assert!(!cross.success());

    Ok(())
}
