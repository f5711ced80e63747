//! Markdown report assembly: timer summary tables plus per-backend
//! detail tables, rendered deterministically and written in one shot.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use log::info;

use crate::backend::Value;
use crate::core::BenchError;

/// Unit a timer table is rendered in. Chosen by the caller per scenario,
/// never auto-detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Millis,
}

impl TimeUnit {
    fn label(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "Time (seconds)",
            TimeUnit::Millis => "Time (milliseconds)",
        }
    }

    fn scale(self, secs: f64) -> f64 {
        match self {
            TimeUnit::Seconds => secs,
            TimeUnit::Millis => secs * 1000.0,
        }
    }
}

enum Section {
    Timer {
        heading: String,
        unit: TimeUnit,
        rows: Vec<(String, f64)>,
    },
    Detail {
        heading: String,
        columns: Vec<String>,
        precision: usize,
        rows: Vec<Vec<Value>>,
    },
}

/// Accumulates sections in insertion order; `render` is deterministic and
/// `write_to` fully overwrites the destination.
pub struct ReportBuilder {
    sections: Vec<Section>,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Add a timer table. `rows` pair backend names with mean durations
    /// in seconds; rendering scales them to `unit` at two decimals.
    pub fn add_timer(&mut self, heading: &str, unit: TimeUnit, rows: Vec<(String, f64)>) {
        self.sections.push(Section::Timer {
            heading: heading.to_string(),
            unit,
            rows,
        });
    }

    /// Add a detail table. Real-valued cells render at `precision`
    /// decimals; integer and text cells render plainly.
    pub fn add_detail(
        &mut self,
        heading: &str,
        columns: &[&str],
        precision: usize,
        rows: Vec<Vec<Value>>,
    ) {
        self.sections.push(Section::Detail {
            heading: heading.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            precision,
            rows,
        });
    }

    pub fn render(&self) -> String {
        let mut doc = String::from("# Results\n");
        for section in &self.sections {
            match section {
                Section::Timer {
                    heading,
                    unit,
                    rows,
                } => {
                    doc.push('\n');
                    let _ = writeln!(doc, "## {heading}");
                    write_table_header(&mut doc, &["Method", unit.label()]);
                    for (backend, secs) in rows {
                        let _ = writeln!(doc, "| {backend} | {:.2} |", unit.scale(*secs));
                    }
                }
                Section::Detail {
                    heading,
                    columns,
                    precision,
                    rows,
                } => {
                    doc.push('\n');
                    let _ = writeln!(doc, "## {heading}");
                    let headers: Vec<&str> = columns.iter().map(String::as_str).collect();
                    write_table_header(&mut doc, &headers);
                    for row in rows {
                        let cells: Vec<String> =
                            row.iter().map(|v| v.render(*precision)).collect();
                        let _ = writeln!(doc, "| {} |", cells.join(" | "));
                    }
                }
            }
        }
        doc
    }

    /// Render and write the document, fully replacing anything at `path`.
    pub fn write_to(&self, path: &Path) -> Result<(), BenchError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.render())?;
        info!("Wrote report to {}", path.display());
        Ok(())
    }
}

fn write_table_header(doc: &mut String, headers: &[&str]) {
    let _ = writeln!(doc, "| {} |", headers.join(" | "));
    let dashes: Vec<String> = headers.iter().map(|h| "-".repeat(h.len())).collect();
    let _ = writeln!(doc, "| {} |", dashes.join(" | "));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> ReportBuilder {
        let mut report = ReportBuilder::new();
        report.add_timer(
            "Timer",
            TimeUnit::Seconds,
            vec![
                ("duckdb".to_string(), 0.03),
                ("sqlite".to_string(), 0.05),
            ],
        );
        report
    }

    #[test]
    fn test_timer_rows_two_decimals_declared_order() {
        let rendered = sample_report().render();
        assert!(rendered.starts_with("# Results\n"));
        assert!(rendered.contains("## Timer\n"));
        assert!(rendered.contains("| Method | Time (seconds) |\n"));
        let duck = rendered.find("| duckdb | 0.03 |").unwrap();
        let sqlite = rendered.find("| sqlite | 0.05 |").unwrap();
        assert!(duck < sqlite);
    }

    #[test]
    fn test_render_is_deterministic() {
        let report = sample_report();
        assert_eq!(report.render(), report.render());
    }

    #[test]
    fn test_millis_scaling() {
        let mut report = ReportBuilder::new();
        report.add_timer(
            "Timer (Incremental Updates)",
            TimeUnit::Millis,
            vec![("duckdb".to_string(), 0.00153)],
        );
        let rendered = report.render();
        assert!(rendered.contains("| Method | Time (milliseconds) |"));
        assert!(rendered.contains("| duckdb | 1.53 |"));
    }

    #[test]
    fn test_detail_precision() {
        let mut report = ReportBuilder::new();
        report.add_detail(
            "Duckdb",
            &["home_team", "avg(two_point_attempt)"],
            8,
            vec![vec![
                Value::Text("ARI".to_string()),
                Value::Real(0.001234567891),
            ]],
        );
        let rendered = report.render();
        assert!(rendered.contains("| home_team | avg(two_point_attempt) |"));
        assert!(rendered.contains("| --------- | ---------------------- |"));
        assert!(rendered.contains("| ARI | 0.00123457 |"));
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.md");
        std::fs::write(&path, "stale content").unwrap();
        sample_report().write_to(&path).unwrap();
        let body = std::fs::read_to_string(&path).unwrap();
        assert!(!body.contains("stale content"));
        assert!(body.contains("| duckdb | 0.03 |"));
    }
}
