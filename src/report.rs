use crate::types::Summary;
use colored::Colorize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

const HEADER_STAMP: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
const FILE_STAMP: &[BorrowedFormatItem<'_>] =
    format_description!("[year][month][day]_[hour][minute][second]");

/// One timestamp per run, shared by the header and the file name. Local
/// time when the offset is available, UTC otherwise.
pub fn run_timestamp() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Line buffer for the report file. Error paths append their single line
/// and write; the happy path appends warnings and the summary section.
#[derive(Debug, Clone)]
pub struct Report {
    timestamp: OffsetDateTime,
    lines: Vec<String>,
}

impl Report {
    pub fn new(timestamp: OffsetDateTime) -> Self {
        let stamp = timestamp.format(HEADER_STAMP).unwrap_or_default();
        Self {
            timestamp,
            lines: vec![format!("Integration Test Run: {stamp}"), String::new()],
        }
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn push_summary(&mut self, summary: &Summary) {
        self.lines.push(format!("Total tests run: {}", summary.total));
        self.lines.push(format!("Passed: {}", summary.passed));
        self.lines.push(format!("Failed: {}", summary.failed));
        self.lines.push(String::new());
        if summary.failed > 0 {
            self.lines.push("Failed Tests:".to_string());
            for result in summary.results.iter().filter(|r| !r.passed()) {
                self.lines.push(format!(
                    "  - Category: {}, Prompt: \"{}\", Reason: {}",
                    result.category,
                    result.prompt,
                    result.reason.as_deref().unwrap_or_default()
                ));
            }
        }
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    pub fn file_name(&self) -> String {
        let stamp = self.timestamp.format(FILE_STAMP).unwrap_or_default();
        format!("integration_test_report_{stamp}.txt")
    }

    /// Whole-file write; the report is never appended to.
    pub fn write_to(&self, dir: &Path) -> io::Result<PathBuf> {
        let path = dir.join(self.file_name());
        fs::write(&path, self.render())?;
        Ok(path)
    }
}

pub fn render_console(summary: &Summary) -> String {
    let mut out = String::new();
    let header = format!(
        "Total tests run: {}, Passed: {}, Failed: {}",
        summary.total,
        summary.passed.to_string().green(),
        if summary.failed > 0 {
            summary.failed.to_string().red().bold().to_string()
        } else {
            summary.failed.to_string().green().to_string()
        }
    );
    out.push_str(&header);
    out.push('\n');
    for result in &summary.results {
        if result.passed() {
            out.push_str(&format!(
                "{} {}: \"{}\"\n",
                "[OK]".green().bold(),
                result.category.green(),
                result.prompt
            ));
        } else {
            out.push_str(&format!(
                "{} {}: \"{}\"\n",
                "[FAIL]".red().bold(),
                result.category.red().bold(),
                result.prompt
            ));
            if let Some(reason) = &result.reason {
                out.push_str(&format!("  {} {}\n", "reason:".bold(), reason.red()));
            }
        }
    }
    out
}

pub fn print_console(summary: &Summary) {
    print!("{}", render_console(summary));
}
