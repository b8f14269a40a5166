//! Collection and ordering of per-part execution records
//!
//! Records may be added in any order; [`Report::rows`] sorts them by day and pairs each day's
//! part A and part B records into one table row.

use crate::error::ReportError;
use aoc_solver::{Part, PuzzleId};
use itertools::Itertools;
use std::time::Duration;

/// Key for ordering records (year, day, part) - ordered ascending
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: Part,
}

impl From<&ExecutionRecord> for ResultKey {
    fn from(r: &ExecutionRecord) -> Self {
        Self {
            year: r.id.year,
            day: r.id.day,
            part: r.part,
        }
    }
}

/// Outcome of running one part of one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRecord {
    pub id: PuzzleId,
    pub part: Part,
    pub answer: String,
    pub elapsed: Duration,
}

impl ExecutionRecord {
    /// Elapsed time in whole milliseconds, as shown in the report
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

/// One table row: a day with both of its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub day: u8,
    pub a: ExecutionRecord,
    pub b: ExecutionRecord,
}

/// Records gathered while running a report
#[derive(Debug, Default, Clone)]
pub struct Report {
    records: Vec<ExecutionRecord>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ExecutionRecord) {
        self.records.push(record);
    }

    /// Records in insertion order
    pub fn records(&self) -> &[ExecutionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows ascending by day, regardless of the order records were added in
    ///
    /// # Returns
    /// * `Err(ReportError::IncompleteDay)` - A day lacks its part A or part B record
    /// * `Err(ReportError::DuplicatePart)` - A day has two records for the same part
    pub fn rows(&self) -> Result<Vec<ReportRow>, ReportError> {
        let sorted = self
            .records
            .iter()
            .sorted_by_key(|r| ResultKey::from(*r))
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        for (day, group) in &sorted.into_iter().chunk_by(|r| r.id.day) {
            let (mut a, mut b) = (None, None);
            for record in group {
                let slot = match record.part {
                    Part::A => &mut a,
                    Part::B => &mut b,
                };
                if slot.replace(record.clone()).is_some() {
                    return Err(ReportError::DuplicatePart {
                        day,
                        part: record.part,
                    });
                }
            }
            match (a, b) {
                (Some(a), Some(b)) => rows.push(ReportRow { day, a, b }),
                (None, _) => {
                    return Err(ReportError::IncompleteDay {
                        day,
                        missing: Part::A,
                    });
                }
                (_, None) => {
                    return Err(ReportError::IncompleteDay {
                        day,
                        missing: Part::B,
                    });
                }
            }
        }
        Ok(rows)
    }
}
