//! Disk Fragmenter: compact a dense disk map and compute the filesystem checksum

use anyhow::anyhow;
use aoc_solver::{AutoRegisterSolver, SolveError, Solver};

use crate::utils::invalid_format;

#[derive(Debug, Default, AutoRegisterSolver)]
#[aoc(year = 2024, day = 9)]
pub struct DiskFragmenter;

/// A contiguous run of blocks starting at `start`
#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    len: usize,
}

/// Files (indexed by id) and free gaps, in disk order
fn parse(input: &[String]) -> anyhow::Result<(Vec<Span>, Vec<Span>)> {
    let map = input
        .iter()
        .find(|line| !line.trim().is_empty())
        .ok_or_else(|| anyhow!("empty disk map"))?;

    let mut files = Vec::new();
    let mut gaps = Vec::new();
    let mut cursor = 0;
    for (i, c) in map.trim().chars().enumerate() {
        let len = c
            .to_digit(10)
            .ok_or_else(|| anyhow!("unexpected character {:?} at {}", c, i + 1))?
            as usize;
        let span = Span { start: cursor, len };
        if i % 2 == 0 {
            files.push(span);
        } else {
            gaps.push(span);
        }
        cursor += len;
    }
    Ok((files, gaps))
}

fn checksum(files: &[Span]) -> u64 {
    files
        .iter()
        .enumerate()
        .flat_map(|(id, span)| (span.start..span.start + span.len).map(move |b| (id * b) as u64))
        .sum()
}

impl Solver for DiskFragmenter {
    /// Move single blocks from the end into the leftmost free block
    fn part_a(&self, input: &[String]) -> Result<String, SolveError> {
        let (files, _) = parse(input).map_err(invalid_format)?;

        let total = files.last().map_or(0, |f| f.start + f.len);
        let mut blocks: Vec<Option<usize>> = vec![None; total];
        for (id, span) in files.iter().enumerate() {
            blocks[span.start..span.start + span.len].fill(Some(id));
        }

        let (mut free, mut last) = (0, total);
        loop {
            while free < last && blocks[free].is_some() {
                free += 1;
            }
            while last > free && blocks[last - 1].is_none() {
                last -= 1;
            }
            if free + 1 >= last {
                break;
            }
            blocks.swap(free, last - 1);
        }

        let sum: u64 = blocks
            .iter()
            .enumerate()
            .filter_map(|(pos, id)| id.map(|id| (pos * id) as u64))
            .sum();
        Ok(sum.to_string())
    }

    /// Move whole files, highest id first, into the leftmost gap that fits
    fn part_b(&self, input: &[String]) -> Result<String, SolveError> {
        let (mut files, mut gaps) = parse(input).map_err(invalid_format)?;

        for file in files.iter_mut().rev() {
            let Span { start, len } = *file;
            if let Some(gap) = gaps
                .iter_mut()
                .take_while(|gap| gap.start < start)
                .find(|gap| gap.len >= len)
            {
                file.start = gap.start;
                gap.start += file.len;
                gap.len -= file.len;
            }
        }
        Ok(checksum(&files).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::lines;

    #[test]
    fn test_example() {
        let input = lines("2333133121414131402");
        assert_eq!(DiskFragmenter.part_a(&input).unwrap(), "1928");
        assert_eq!(DiskFragmenter.part_b(&input).unwrap(), "2858");
    }

    #[test]
    fn test_small_map() {
        // 0..111....22222 compacts to 022111222
        let input = lines("12345");
        assert_eq!(DiskFragmenter.part_a(&input).unwrap(), "60");
    }

    #[test]
    fn test_rejects_non_digit() {
        let err = DiskFragmenter.part_a(&lines("12a4")).unwrap_err();
        assert!(matches!(err, SolveError::Parse(_)));
    }
}
