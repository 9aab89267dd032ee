//! Puzzle instances: the immutable targets and hints parsed from the input.

use std::io::BufRead;

use crate::board::{Board, Glyph, SIZE};
use crate::errors::ParseError;

/// One partial-cell hint from the input: this square holds this glyph.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hint {
    /// Hinted row.
    pub row: u8,
    /// Hinted column.
    pub col: u8,
    /// Glyph the square must hold.
    pub glyph: Glyph,
}

/// A parsed instance: required ship cells per line plus the hint queue.
///
/// The instance never changes while it is being solved; boards carry only an
/// index into the hint queue. Hints are consumed strictly in order.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Puzzle {
    row_targets: [u8; SIZE],
    col_targets: [u8; SIZE],
    hints: Vec<Hint>,
}

impl Puzzle {
    /// Creates an instance from its parts.
    pub fn new(row_targets: [u8; SIZE], col_targets: [u8; SIZE], hints: Vec<Hint>) -> Puzzle {
        Puzzle {
            row_targets,
            col_targets,
            hints,
        }
    }

    /// Parses an instance from a `&str`. See the crate documentation for an
    /// example of the expected format.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Puzzle, ParseError> {
        Puzzle::from_reader(s.as_bytes())
    }

    /// Parses an instance from a reader.
    ///
    /// Expects a row-counts line, a column-counts line, a hint-count line and
    /// one line per hint. The leading label of each labeled line is skipped
    /// without being inspected.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Puzzle, ParseError> {
        let mut lines = reader.lines().map(|line| line.unwrap_or_default());

        let row_line = lines.next().ok_or(ParseError::MissingLine(1))?;
        let row_targets = parse_counts(&row_line, 1)?;
        let col_line = lines.next().ok_or(ParseError::MissingLine(2))?;
        let col_targets = parse_counts(&col_line, 2)?;

        let count_line = lines.next().ok_or(ParseError::MissingLine(3))?;
        let token = count_line.trim();
        let hint_count: usize = token.parse().map_err(|_| ParseError::InvalidNumber {
            line: 3,
            token: token.to_string(),
        })?;

        let mut hints = Vec::with_capacity(hint_count.min(SIZE * SIZE));
        for i in 0..hint_count {
            let line_nr = 4 + i as u32;
            let line = lines.next().ok_or(ParseError::MissingLine(line_nr))?;
            hints.push(parse_hint(&line, line_nr)?);
        }

        Ok(Puzzle {
            row_targets,
            col_targets,
            hints,
        })
    }

    /// Required ship cells per row.
    pub fn row_targets(&self) -> &[u8; SIZE] {
        &self.row_targets
    }

    /// Required ship cells per column.
    pub fn col_targets(&self) -> &[u8; SIZE] {
        &self.col_targets
    }

    /// The hint queue, in input order.
    pub fn hints(&self) -> &[Hint] {
        &self.hints
    }

    /// A fresh board for this instance, with empty lines already watered.
    pub fn initial_board(&self) -> Board {
        Board::new(&self.row_targets, &self.col_targets)
    }

    /// Solves the instance, picking the search strategy from the hint count.
    /// Returns `None` when the search space holds no solution.
    pub fn solve(&self) -> Option<Board> {
        crate::solver::Bimaru::new(self.clone()).solve()
    }
}

fn parse_counts(line: &str, line_nr: u32) -> Result<[u8; SIZE], ParseError> {
    let mut counts = [0u8; SIZE];
    let mut tokens = line.split_whitespace().skip(1);
    for slot in counts.iter_mut() {
        let token = tokens.next().ok_or(ParseError::MissingCounts(line_nr))?;
        let value: u8 = token.parse().map_err(|_| ParseError::InvalidNumber {
            line: line_nr,
            token: token.to_string(),
        })?;
        if value as usize > SIZE {
            return Err(ParseError::CountOutOfRange {
                line: line_nr,
                value,
            });
        }
        *slot = value;
    }
    Ok(counts)
}

fn parse_hint(line: &str, line_nr: u32) -> Result<Hint, ParseError> {
    let mut tokens = line.split_whitespace().skip(1);
    let row_token = tokens.next().ok_or(ParseError::MalformedHint(line_nr))?;
    let col_token = tokens.next().ok_or(ParseError::MalformedHint(line_nr))?;
    let token = tokens.next().ok_or(ParseError::MalformedHint(line_nr))?;
    let row: u8 = row_token
        .parse()
        .map_err(|_| ParseError::MalformedHint(line_nr))?;
    let col: u8 = col_token
        .parse()
        .map_err(|_| ParseError::MalformedHint(line_nr))?;

    let mut chars = token.chars();
    let glyph = match (chars.next(), chars.next()) {
        (Some(ch), None) => Glyph::from_char(ch),
        _ => None,
    }
    .ok_or_else(|| ParseError::InvalidGlyph {
        line: line_nr,
        found: token.to_string(),
    })?;

    if row as usize >= SIZE || col as usize >= SIZE {
        return Err(ParseError::HintOutOfRange {
            line: line_nr,
            row,
            col,
        });
    }
    Ok(Hint { row, col, glyph })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_instance() {
        let text = "\
ROW 2 3 2 2 3 0 1 3 2 2
COLUMN 6 0 1 0 2 1 3 1 2 4
2
HINT 0 0 T
HINT 9 9 W
";
        let puzzle = Puzzle::from_str(text).unwrap();
        assert_eq!(puzzle.row_targets(), &[2, 3, 2, 2, 3, 0, 1, 3, 2, 2]);
        assert_eq!(puzzle.col_targets(), &[6, 0, 1, 0, 2, 1, 3, 1, 2, 4]);
        assert_eq!(
            puzzle.hints(),
            &[
                Hint { row: 0, col: 0, glyph: Glyph::Top },
                Hint { row: 9, col: 9, glyph: Glyph::Water },
            ]
        );
    }

    #[test]
    fn short_counts_line_is_rejected() {
        let text = "ROW 1 2 3\nCOLUMN 0 0 0 0 0 0 0 0 0 0\n0\n";
        assert_eq!(
            Puzzle::from_str(text),
            Err(ParseError::MissingCounts(1))
        );
    }

    #[test]
    fn non_numeric_count_is_rejected() {
        let text = "ROW 1 2 x 0 0 0 0 0 0 0\nCOLUMN 0 0 0 0 0 0 0 0 0 0\n0\n";
        assert_eq!(
            Puzzle::from_str(text),
            Err(ParseError::InvalidNumber {
                line: 1,
                token: "x".to_string()
            })
        );
    }

    #[test]
    fn oversized_count_is_rejected() {
        let text = "ROW 11 0 0 0 0 0 0 0 0 0\nCOLUMN 0 0 0 0 0 0 0 0 0 0\n0\n";
        assert_eq!(
            Puzzle::from_str(text),
            Err(ParseError::CountOutOfRange { line: 1, value: 11 })
        );
    }

    #[test]
    fn bad_glyph_is_rejected() {
        let text = "\
ROW 0 0 0 0 0 0 0 0 0 0
COLUMN 0 0 0 0 0 0 0 0 0 0
1
HINT 0 0 X
";
        assert_eq!(
            Puzzle::from_str(text),
            Err(ParseError::InvalidGlyph {
                line: 4,
                found: "X".to_string()
            })
        );
    }

    #[test]
    fn out_of_range_hint_is_rejected() {
        let text = "\
ROW 0 0 0 0 0 0 0 0 0 0
COLUMN 0 0 0 0 0 0 0 0 0 0
1
HINT 3 10 C
";
        assert_eq!(
            Puzzle::from_str(text),
            Err(ParseError::HintOutOfRange {
                line: 4,
                row: 3,
                col: 10
            })
        );
    }

    #[test]
    fn missing_hint_line_is_rejected() {
        let text = "\
ROW 0 0 0 0 0 0 0 0 0 0
COLUMN 0 0 0 0 0 0 0 0 0 0
2
HINT 0 0 W
";
        assert_eq!(Puzzle::from_str(text), Err(ParseError::MissingLine(5)));
    }
}
