//! Renderer module
//!
//! Renders a MatchTally to different output formats: table, json, jsonl

use crate::words::tally::MatchTally;
use std::io::Write;

/// Width of the predefined word column
pub const WORD_COLUMN_WIDTH: usize = 20;

/// Width of the match count column
pub const COUNT_COLUMN_WIDTH: usize = 15;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Jsonl,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "jsonl" => Ok(OutputFormat::Jsonl),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Renderer for match tallies
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render a tally to a string without a trailing newline
    pub fn render(&self, tally: &MatchTally) -> String {
        match self.format {
            OutputFormat::Table => render_table(tally),
            OutputFormat::Json => self.render_json(tally),
            OutputFormat::Jsonl => self.render_jsonl(tally),
        }
    }

    /// Render to a writer, terminated by a newline
    pub fn render_to<W: Write>(&self, tally: &MatchTally, mut writer: W) -> std::io::Result<()> {
        let output = self.render(tally);
        writeln!(writer, "{}", output)
    }

    fn render_json(&self, tally: &MatchTally) -> String {
        serde_json::to_string(tally.rows()).expect("word count rows serialize to JSON")
    }

    fn render_jsonl(&self, tally: &MatchTally) -> String {
        tally
            .rows()
            .iter()
            .map(|row| serde_json::to_string(row).expect("word count row serializes to JSON"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render the fixed-width two-column table
pub fn render_table(tally: &MatchTally) -> String {
    let mut lines = Vec::with_capacity(tally.len() + 1);
    lines.push(table_row("Predefined word", "Match count"));
    for row in tally.rows() {
        lines.push(table_row(&row.word, row.count));
    }
    lines.join("\n")
}

fn table_row(word: &str, count: impl std::fmt::Display) -> String {
    format!(
        "{:<word_width$} {:<count_width$}",
        word,
        count.to_string(),
        word_width = WORD_COLUMN_WIDTH,
        count_width = COUNT_COLUMN_WIDTH
    )
}
