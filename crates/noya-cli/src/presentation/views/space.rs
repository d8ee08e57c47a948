use std::fmt;

use super::report::write_report_line;
use crate::presentation::formatters::{text, time};
use crate::presentation::view_models::{
    SpaceAction, SpaceChangeViewModel, SpaceDetailViewModel, SpaceListViewModel, ViewMode,
};

const NAME_COMPACT_WIDTH: usize = 28;
const DESCRIPTION_PREVIEW_LENGTH: usize = 80;
const PIN: &str = "📌";

// --------------------------------------------------------
// Space List View
// --------------------------------------------------------

pub struct SpaceListView<'a> {
    data: &'a SpaceListViewModel,
    mode: ViewMode,
}

impl<'a> SpaceListView<'a> {
    pub fn new(data: &'a SpaceListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for space in &self.data.spaces {
            writeln!(f, "{}", space.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.spaces.is_empty() {
            return writeln!(f, "No spaces yet.");
        }

        for space in &self.data.spaces {
            let marker = if space.pinned { "*" } else { " " };
            writeln!(
                f,
                "{} {}  {:<width$}  {:>4}  {}",
                marker,
                space.id_short,
                text::truncate(&space.name, NAME_COMPACT_WIDTH),
                space.progress_count,
                time::format_date(&space.last_updated, &self.data.dates),
                width = NAME_COMPACT_WIDTH
            )?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.spaces.is_empty() {
            return writeln!(f, "No spaces yet.");
        }

        for (i, space) in self.data.spaces.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", space.name)?;
            if space.pinned {
                write!(f, "  {}", PIN)?;
            }
            writeln!(f)?;
            writeln!(
                f,
                "  {}  ·  {}  ·  updated {}",
                space.id_short,
                text::pluralize(space.progress_count, "report"),
                time::format_date(&space.last_updated, &self.data.dates)
            )?;
            if !space.description.is_empty() {
                writeln!(
                    f,
                    "  {}",
                    text::one_line(&space.description, DESCRIPTION_PREVIEW_LENGTH)
                )?;
            }
        }
        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.spaces.is_empty() {
            return writeln!(f, "No spaces yet.");
        }

        for (i, space) in self.data.spaces.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", space.name)?;
            writeln!(f, "  id:          {}", space.id)?;
            writeln!(f, "  path:        {}", space.path)?;
            writeln!(f, "  pinned:      {}", if space.pinned { "yes" } else { "no" })?;
            writeln!(f, "  created:     {}", time::format_datetime(&space.created_at))?;
            writeln!(f, "  updated:     {}", time::format_datetime(&space.last_updated))?;
            writeln!(f, "  reports:     {}", space.progress_count)?;
            if !space.description.is_empty() {
                writeln!(f, "  description:")?;
                writeln!(f, "{}", text::indent(&space.description, "    "))?;
            }
        }
        Ok(())
    }
}

impl<'a> fmt::Display for SpaceListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}

// --------------------------------------------------------
// Space Detail View
// --------------------------------------------------------

pub struct SpaceDetailView<'a> {
    data: &'a SpaceDetailViewModel,
    mode: ViewMode,
}

impl<'a> SpaceDetailView<'a> {
    pub fn new(data: &'a SpaceDetailViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_detail(&self, f: &mut fmt::Formatter, verbose: bool) -> fmt::Result {
        let space = &self.data.space;
        let dates = &self.data.dates;

        write!(f, "{}", space.name)?;
        if space.pinned {
            write!(f, "  {}", PIN)?;
        }
        writeln!(f)?;
        if !space.description.is_empty() {
            writeln!(f, "{}", text::indent(&space.description, "  "))?;
        }
        writeln!(f)?;

        if verbose {
            writeln!(f, "  id:       {}", space.id)?;
            writeln!(f, "  path:     {}", space.path)?;
            writeln!(f, "  created:  {}", time::format_datetime(&space.created_at))?;
            writeln!(f, "  updated:  {}", time::format_datetime(&space.last_updated))?;
        } else {
            writeln!(f, "  id:       {}", space.id_short)?;
            writeln!(f, "  created:  {}", time::format_date(&space.created_at, dates))?;
            writeln!(f, "  updated:  {}", time::format_date(&space.last_updated, dates))?;
        }
        writeln!(f, "  reports:  {}", space.progress_count)?;

        writeln!(f)?;
        if self.data.recent_reports.is_empty() {
            return writeln!(f, "No progress reports yet.");
        }
        writeln!(f, "Recent reports:")?;
        for report in &self.data.recent_reports {
            write!(f, "  ")?;
            write_report_line(f, report, dates)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for SpaceDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let space = &self.data.space;
        match self.mode {
            ViewMode::Minimal => writeln!(f, "{}", space.id),
            ViewMode::Compact => writeln!(
                f,
                "{}  {}  {}  updated {}",
                space.id_short,
                space.name,
                text::pluralize(space.progress_count, "report"),
                time::format_date(&space.last_updated, &self.data.dates)
            ),
            ViewMode::Standard => self.render_detail(f, false),
            ViewMode::Verbose => self.render_detail(f, true),
        }
    }
}

// --------------------------------------------------------
// Space Change View
// --------------------------------------------------------

pub struct SpaceChangeView<'a> {
    data: &'a SpaceChangeViewModel,
    mode: ViewMode,
}

impl<'a> SpaceChangeView<'a> {
    pub fn new(data: &'a SpaceChangeViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for SpaceChangeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", self.data.space_id);
        }

        let id = if self.mode == ViewMode::Verbose {
            &self.data.space_id
        } else {
            &self.data.id_short
        };
        write!(f, "{}  {}", id, self.data.name)?;
        if self.data.pinned {
            write!(f, "  {}", PIN)?;
        }
        writeln!(f)?;

        if self.data.action == SpaceAction::Deleted
            && let Some(count) = self.data.reports_deleted
        {
            writeln!(f, "  {} deleted with it", text::pluralize(count, "report"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{DateStyle, SpaceEntryViewModel};
    use chrono::{TimeZone, Utc};

    fn entry(id: &str, name: &str, pinned: bool, count: usize) -> SpaceEntryViewModel {
        let created = Utc.with_ymd_and_hms(2025, 1, 10, 8, 30, 0).unwrap();
        SpaceEntryViewModel {
            id: id.to_string(),
            id_short: id[..8].to_string(),
            path: format!("users/u1/spaces/{}", id),
            name: name.to_string(),
            description: String::new(),
            pinned,
            created_at: created,
            last_updated: Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap(),
            progress_count: count,
        }
    }

    fn list() -> SpaceListViewModel {
        let mut thesis = entry("11111111-aaaa", "Thesis", true, 3);
        thesis.description = "Chapter drafts\nand figures".to_string();
        SpaceListViewModel {
            spaces: vec![thesis, entry("22222222-bbbb", "Reading group", false, 1)],
            pinned_count: 1,
            total_reports: 4,
            last_activity: None,
            dates: DateStyle::default(),
        }
    }

    #[test]
    fn test_standard_list() {
        let data = list();
        let out = SpaceListView::new(&data, ViewMode::Standard).to_string();
        insta::assert_snapshot!(out, @r"
        Thesis  📌
          11111111  ·  3 reports  ·  updated 2025-02-01
          Chapter drafts and figures

        Reading group
          22222222  ·  1 report  ·  updated 2025-02-01
        ");
    }

    #[test]
    fn test_compact_list_marks_pinned() {
        let data = list();
        let out = SpaceListView::new(&data, ViewMode::Compact).to_string();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("* 11111111  Thesis"));
        assert!(lines[1].starts_with("  22222222  Reading group"));
        assert!(lines[0].ends_with("   3  2025-02-01"));
    }

    #[test]
    fn test_minimal_list_prints_ids() {
        let data = list();
        let out = SpaceListView::new(&data, ViewMode::Minimal).to_string();
        assert_eq!(out, "11111111-aaaa\n22222222-bbbb\n");
    }

    #[test]
    fn test_deleted_change_mentions_cascade() {
        let data = SpaceChangeViewModel {
            action: SpaceAction::Deleted,
            space_id: "11111111-aaaa".to_string(),
            id_short: "11111111".to_string(),
            name: "Thesis".to_string(),
            pinned: false,
            reports_deleted: Some(2),
        };
        let out = SpaceChangeView::new(&data, ViewMode::Standard).to_string();
        assert_eq!(out, "11111111  Thesis\n  2 reports deleted with it\n");
    }
}
