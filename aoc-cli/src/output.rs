//! Console rendering of the report table

use crate::aggregator::ReportRow;
use std::io::{self, Write};

/// Column headers, in display order
pub const HEADERS: [&str; 5] = [
    "Day",
    "Part A | Answer",
    "Part A | Elapsed Time (ms)",
    "Part B | Answer",
    "Part B | Elapsed Time (ms)",
];

/// ANSI sequence that clears the terminal and homes the cursor
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Output formatter for report tables
pub struct OutputFormatter {
    clear_screen: bool,
}

impl OutputFormatter {
    /// Create a new output formatter; `clear_screen` wipes the progress lines first
    pub fn new(clear_screen: bool) -> Self {
        Self { clear_screen }
    }

    /// Print the table to standard output
    pub fn print_report(&self, rows: &[ReportRow]) -> io::Result<()> {
        self.write_report(&mut io::stdout().lock(), rows)
    }

    /// Write the table, preceded by the clear-screen sequence when enabled
    pub fn write_report<W: Write>(&self, out: &mut W, rows: &[ReportRow]) -> io::Result<()> {
        if self.clear_screen {
            out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        out.write_all(render_table(rows).as_bytes())?;
        out.flush()
    }
}

/// Render rows as a table with rounded borders. Columns are as wide as their widest cell.
pub fn render_table(rows: &[ReportRow]) -> String {
    let body: Vec<[String; 5]> = rows
        .iter()
        .map(|row| {
            [
                row.day.to_string(),
                row.a.answer.clone(),
                row.a.elapsed_ms().to_string(),
                row.b.answer.clone(),
                row.b.elapsed_ms().to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&border(&widths, '╭', '┬', '╮'));
    out.push_str(&line(&widths, HEADERS.iter().copied()));
    out.push_str(&border(&widths, '├', '┼', '┤'));
    for cells in &body {
        out.push_str(&line(&widths, cells.iter().map(String::as_str)));
    }
    out.push_str(&border(&widths, '╰', '┴', '╯'));
    out
}

fn border(widths: &[usize], left: char, joint: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{left}{}{right}\n", segments.join(&joint.to_string()))
}

fn line<'a>(widths: &[usize], cells: impl Iterator<Item = &'a str>) -> String {
    let padded: Vec<String> = widths
        .iter()
        .zip(cells)
        .map(|(w, cell)| format!(" {}{} ", cell, " ".repeat(w - cell.chars().count())))
        .collect();
    format!("│{}│\n", padded.join("│"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::ExecutionRecord;
    use aoc_solver::{Part, PuzzleId};
    use std::time::Duration;

    fn row(day: u8, a: &str, b: &str) -> ReportRow {
        let record = |part, answer: &str, ms| ExecutionRecord {
            id: PuzzleId::new(2024, day),
            part,
            answer: answer.to_string(),
            elapsed: Duration::from_millis(ms),
        };
        ReportRow {
            day,
            a: record(Part::A, a, 3),
            b: record(Part::B, b, 1250),
        }
    }

    #[test]
    fn test_render_table_layout() {
        let table = render_table(&[row(6, "41", "6"), row(13, "480", "875318608908")]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with('╭') && lines[0].ends_with('╮'));
        assert!(lines[1].contains("Part A | Elapsed Time (ms)"));
        assert!(lines[2].starts_with('├'));
        assert_eq!(
            lines[4],
            "│ 13  │ 480             │ 3                          │ 875318608908    │ 1250                       │"
        );
        assert!(lines[5].starts_with('╰') && lines[5].ends_with('╯'));

        // Every line has the same display width
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_wide_answers_stretch_their_column() {
        let long = "x".repeat(40);
        let table = render_table(&[row(1, &long, "1")]);
        let header = table.lines().nth(1).unwrap();
        let answer_cell = header.split('│').nth(2).unwrap();
        assert_eq!(answer_cell.chars().count(), 42);
        assert_eq!(answer_cell.trim(), "Part A | Answer");
    }

    #[test]
    fn test_write_report_clears_screen_first() {
        let mut out = Vec::new();
        OutputFormatter::new(true)
            .write_report(&mut out, &[row(6, "41", "6")])
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\x1b[2J\x1b[H╭"));

        let mut out = Vec::new();
        OutputFormatter::new(false).write_report(&mut out, &[]).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with('╭'));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_reported() {
        let err = OutputFormatter::new(false)
            .write_report(&mut BrokenPipe, &[row(1, "1", "2")])
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
