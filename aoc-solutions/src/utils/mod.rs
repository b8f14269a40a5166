//! Helpers shared by several solutions

pub mod dp_cache;
pub mod grid;

use aoc_solver::ParseError;

pub use grid::{Direction, Grid, Pos};

/// Convert an `anyhow` parse failure into the solver contract's format error
pub fn invalid_format(err: anyhow::Error) -> ParseError {
    ParseError::InvalidFormat(format!("{err:#}"))
}

/// Split input at its first blank line
///
/// Several puzzles put two sections in one fixture; a fixture without the separator is
/// rejected as malformed.
pub fn split_sections(input: &[String]) -> Result<(&[String], &[String]), ParseError> {
    let blank = input
        .iter()
        .position(|line| line.trim().is_empty())
        .ok_or_else(|| ParseError::InvalidFormat("missing blank line between sections".into()))?;
    Ok((&input[..blank], &input[blank + 1..]))
}

#[cfg(test)]
pub(crate) fn lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_split_sections() {
        let input = lines("a\nb\n\nc");
        let (head, tail) = split_sections(&input).unwrap();
        assert_eq!(head, ["a", "b"]);
        assert_eq!(tail, ["c"]);

        let err = split_sections(&lines("a\nb")).unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(_)));
    }

    fn section() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[#.@O<>v^0-9a-z]{1,12}", 0..8)
    }

    proptest! {
        /// Two sections joined by one blank line split back into exactly those sections
        #[test]
        fn prop_split_sections_inverts_join(head in section(), tail in section()) {
            let mut input = head.clone();
            input.push(String::new());
            input.extend(tail.iter().cloned());

            let (left, right) = split_sections(&input).unwrap();
            prop_assert_eq!(left, head.as_slice());
            prop_assert_eq!(right, tail.as_slice());
        }

        /// Without any blank line the input is always rejected as malformed
        #[test]
        fn prop_split_sections_requires_separator(head in section()) {
            prop_assert!(matches!(
                split_sections(&head),
                Err(ParseError::InvalidFormat(_))
            ));
        }

        /// Rectangular input parses with its own dimensions and cell contents
        #[test]
        fn prop_grid_parse_keeps_cells(
            (width, rows) in (1usize..10).prop_flat_map(|w| {
                (Just(w), prop::collection::vec(prop::collection::vec(b'!'..=b'~', w), 1..10))
            })
        ) {
            let lines: Vec<String> = rows
                .iter()
                .map(|r| String::from_utf8(r.clone()).unwrap())
                .collect();
            let grid = Grid::parse(&lines).unwrap();

            prop_assert_eq!(grid.width(), width);
            prop_assert_eq!(grid.height(), rows.len());
            for (row, cells) in rows.iter().enumerate() {
                for (col, &cell) in cells.iter().enumerate() {
                    prop_assert_eq!(grid.get(Pos::new(row, col)), Some(cell));
                }
            }
        }
    }
}
