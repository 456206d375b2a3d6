//! Output formatting for the run summary

use crate::driver::{RunReport, TargetReport};
use crate::error::{Error, Result};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, presets::UTF8_FULL,
};
use std::io::Write;
use std::path::Path;

/// Output format for the run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table output
    #[default]
    Human,
    /// JSON output
    Json,
    /// No output (silent mode)
    None,
}

/// Output the run summary
pub fn output_report<W: Write>(
    report: &RunReport,
    format: OutputFormat,
    writer: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Human => output_human(report, writer),
        OutputFormat::Json => output_json(report, writer),
        OutputFormat::None => Ok(()),
    }
}

/// Output JSON format
fn output_json<W: Write>(report: &RunReport, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer).map_err(Error::OutputFailed)?;
    Ok(())
}

/// Output human-readable table format
fn output_human<W: Write>(report: &RunReport, writer: &mut W) -> Result<()> {
    // Nothing scraped: the error lines already said why
    if report.targets.is_empty() {
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("Target").add_attribute(Attribute::Bold),
            Cell::new("Endpoints").add_attribute(Attribute::Bold),
            Cell::new("Hrefs").add_attribute(Attribute::Bold),
            Cell::new("Files").add_attribute(Attribute::Bold),
        ]);

    for target in &report.targets {
        add_target_row(&mut table, target);
    }

    writeln!(writer, "{}", table).map_err(Error::OutputFailed)?;

    if !report.failures.is_empty() {
        writeln!(writer, "{} target(s) skipped", report.failures.len())
            .map_err(Error::OutputFailed)?;
    }
    Ok(())
}

/// Add a row for a scraped target to the table
fn add_target_row(table: &mut Table, target: &TargetReport) {
    let files_cell = match &target.files {
        Some(files) => Cell::new(format!(
            "{}\n{}",
            file_name(&files.endpoints),
            file_name(&files.hrefs)
        )),
        None => Cell::new("not written")
            .fg(Color::Red)
            .set_alignment(CellAlignment::Center),
    };

    table.add_row(vec![
        Cell::new(target.index).set_alignment(CellAlignment::Right),
        Cell::new(&target.target),
        Cell::new(target.endpoints).set_alignment(CellAlignment::Right),
        Cell::new(target.hrefs).set_alignment(CellAlignment::Right),
        files_cell,
    ]);
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::Failure;
    use crate::writer::OutputFiles;

    fn report() -> RunReport {
        RunReport {
            targets: vec![TargetReport {
                index: 0,
                target: "https://example.com".to_string(),
                endpoints: 12,
                hrefs: 3,
                files: Some(OutputFiles::for_index(Path::new("out"), 0)),
            }],
            failures: vec![Failure {
                target: "https://down.test".to_string(),
                error: "HTTP request failed: refused".to_string(),
            }],
            write_error: None,
        }
    }

    #[test]
    fn human_table() {
        let mut buf = Vec::new();
        output_report(&report(), OutputFormat::Human, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("https://example.com"));
        assert!(text.contains("endpoints_0.txt"));
        assert!(text.contains("href_urls_0.txt"));
        assert!(text.contains("1 target(s) skipped"));
    }

    #[test]
    fn json_summary() {
        let mut buf = Vec::new();
        output_report(&report(), OutputFormat::Json, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["targets"][0]["endpoints"], 12);
        assert_eq!(value["failures"][0]["target"], "https://down.test");
        assert!(value["write_error"].is_null());
    }

    #[test]
    fn none_is_silent() {
        let mut buf = Vec::new();
        output_report(&report(), OutputFormat::None, &mut buf).unwrap();
        assert!(buf.is_empty());
    }
}
