use crate::types::SelectionReport;
use colored::*;
use std::path::Path;
use thiserror::Error;

const BOX_TL: &str = "╭";
const BOX_TR: &str = "╮";
const BOX_BL: &str = "╰";
const BOX_BR: &str = "╯";
const BOX_H: &str = "─";
const BOX_V: &str = "│";
const BOX_LT: &str = "├";
const BOX_RT: &str = "┤";

const WIDTH: usize = 48;
const VALUES_PER_ROW: usize = 6;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

pub struct TerminalRenderer {
    use_color: bool,
}

impl TerminalRenderer {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn render(&self, report: &SelectionReport) {
        print!("{}", self.format(report));
    }

    pub fn format(&self, report: &SelectionReport) -> String {
        let mut lines = vec![
            self.border(BOX_TL, BOX_TR),
            self.line(&format!("Top {} of {}", report.k, report.source), "cyan", true),
            self.border(BOX_LT, BOX_RT),
            self.line(
                &format!(
                    "scanned {}  kept {}  replaced {}  dropped {}",
                    report.stats.scanned,
                    report.values.len(),
                    report.stats.replaced,
                    report.stats.discarded
                ),
                "white",
                false,
            ),
        ];

        match report.verified {
            Some(true) => lines.push(self.line("reference check: match", "green", true)),
            Some(false) => lines.push(self.line("reference check: MISMATCH", "red", true)),
            None => {}
        }

        lines.push(self.border(BOX_BL, BOX_BR));

        if report.values.is_empty() {
            lines.push(format!("  {}", self.colorize("(no values)", "bright_black", false)));
        }
        for row in report.values.chunks(VALUES_PER_ROW) {
            let cells: Vec<String> = row.iter().map(|v| format!("{:>7}", v)).collect();
            lines.push(format!("  {}", self.colorize(&cells.join(" "), "yellow", false)));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    fn border(&self, left: &str, right: &str) -> String {
        format!(
            "{}{}{}",
            self.colorize(left, "bright_black", false),
            self.colorize(&BOX_H.repeat(WIDTH), "bright_black", false),
            self.colorize(right, "bright_black", false)
        )
    }

    fn line(&self, text: &str, color: &str, bold: bool) -> String {
        let padding = WIDTH.saturating_sub(text.chars().count() + 1);
        format!(
            "{} {}{}{}",
            self.colorize(BOX_V, "bright_black", false),
            self.colorize(text, color, bold),
            " ".repeat(padding),
            self.colorize(BOX_V, "bright_black", false)
        )
    }

    fn colorize(&self, text: &str, color: &str, bold: bool) -> String {
        if !self.use_color {
            return text.to_string();
        }

        let colored = match color {
            "red" => text.red(),
            "green" => text.green(),
            "yellow" => text.yellow(),
            "cyan" => text.cyan(),
            "white" => text.white(),
            "bright_black" => text.bright_black(),
            _ => text.normal(),
        };

        if bold {
            colored.bold().to_string()
        } else {
            colored.to_string()
        }
    }
}

pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        report: &SelectionReport,
        output_file: Option<&Path>,
    ) -> Result<(), OutputError> {
        let json = serde_json::to_string_pretty(report)?;

        if let Some(path) = output_file {
            std::fs::write(path, json)?;
            tracing::info!(path = %path.display(), "report written");
        } else {
            println!("{}", json);
        }

        Ok(())
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}
