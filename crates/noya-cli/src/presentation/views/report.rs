use std::fmt;

use crate::presentation::formatters::{text, time};
use crate::presentation::view_models::{
    DateStyle, ReportAction, ReportChangeViewModel, ReportEntryViewModel, ReportListViewModel,
    ViewMode,
};

const PROGRESS_PREVIEW_LENGTH: usize = 60;
const EDITED_MARKER: &str = "(Edited)";

// --------------------------------------------------------
// Single report (shared by list, detail and change views)
// --------------------------------------------------------

pub(crate) fn write_report_line(
    f: &mut fmt::Formatter,
    report: &ReportEntryViewModel,
    dates: &DateStyle,
) -> fmt::Result {
    write!(
        f,
        "{}  {}  {}",
        time::format_date(&report.date, dates),
        report.id_short,
        text::one_line(&report.progress, PROGRESS_PREVIEW_LENGTH)
    )?;
    if report.edited {
        write!(f, " {}", EDITED_MARKER)?;
    }
    if report.has_note {
        write!(f, " 📝")?;
    }
    writeln!(f)
}

pub(crate) fn write_report_block(
    f: &mut fmt::Formatter,
    report: &ReportEntryViewModel,
    dates: &DateStyle,
    verbose: bool,
) -> fmt::Result {
    write!(f, "{}  {}", time::format_date(&report.date, dates), report.id_short)?;
    if report.edited {
        write!(f, "  {}", EDITED_MARKER)?;
    }
    writeln!(f)?;

    if verbose {
        writeln!(f, "  id:   {}", report.id)?;
        writeln!(f, "  path: {}", report.path)?;
        if let Some(modified) = &report.last_modified {
            writeln!(f, "  last modified: {}", time::format_datetime(modified))?;
        }
    }

    writeln!(f, "  Progress:")?;
    writeln!(f, "{}", text::indent(&report.progress, "    "))?;

    if !report.next_step.is_empty() {
        writeln!(f, "  Next step:")?;
        writeln!(f, "{}", text::indent(&report.next_step, "    "))?;
    }

    if report.has_note {
        writeln!(f, "  Note:")?;
        writeln!(f, "{}", text::indent(&report.markdown_note, "    "))?;
    }

    Ok(())
}

// --------------------------------------------------------
// Report List View
// --------------------------------------------------------

pub struct ReportListView<'a> {
    data: &'a ReportListViewModel,
    mode: ViewMode,
}

impl<'a> ReportListView<'a> {
    pub fn new(data: &'a ReportListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for report in &self.data.reports {
            writeln!(f, "{}", report.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.reports.is_empty() {
            return writeln!(f, "No progress reports yet.");
        }
        for report in &self.data.reports {
            write_report_line(f, report, &self.data.dates)?;
        }
        Ok(())
    }

    fn render_blocks(&self, f: &mut fmt::Formatter, verbose: bool) -> fmt::Result {
        writeln!(f, "{}", self.data.space_name)?;
        writeln!(f)?;

        if self.data.reports.is_empty() {
            return writeln!(f, "No progress reports yet.");
        }

        for (i, report) in self.data.reports.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write_report_block(f, report, &self.data.dates, verbose)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for ReportListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_blocks(f, false),
            ViewMode::Verbose => self.render_blocks(f, true),
        }
    }
}

// --------------------------------------------------------
// Report Change View
// --------------------------------------------------------

pub struct ReportChangeView<'a> {
    data: &'a ReportChangeViewModel,
    mode: ViewMode,
}

impl<'a> ReportChangeView<'a> {
    pub fn new(data: &'a ReportChangeViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for ReportChangeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let report = &self.data.report;
        match self.mode {
            ViewMode::Minimal => writeln!(f, "{}", report.id),
            ViewMode::Compact => write_report_line(f, report, &self.data.dates),
            ViewMode::Standard | ViewMode::Verbose => {
                if self.data.action == ReportAction::Deleted {
                    return write_report_line(f, report, &self.data.dates);
                }
                write_report_block(f, report, &self.data.dates, self.mode == ViewMode::Verbose)
            }
        }
    }
}
