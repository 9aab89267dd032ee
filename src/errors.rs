//! Errors for [`Puzzle`](crate::Puzzle) parsing.

/// Error returned when an instance cannot be parsed.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The input ended before the expected line.
    #[error("line {0} is missing")]
    MissingLine(u32),
    /// A counts line did not hold a label followed by 10 counts.
    #[error("line {0} should hold a label and 10 counts")]
    MissingCounts(u32),
    /// A token that should have been a number was not one.
    #[error("line {line} contains the invalid number `{token}`")]
    InvalidNumber {
        /// 1-based input line.
        line: u32,
        /// The offending token.
        token: String,
    },
    /// A line count exceeds the line length.
    #[error("line {line}: a line of 10 cells cannot hold {value} ship cells")]
    CountOutOfRange {
        /// 1-based input line.
        line: u32,
        /// The offending count.
        value: u8,
    },
    /// A hint line did not hold a label, two coordinates and a glyph.
    #[error("line {0} should hold `HINT <row> <col> <glyph>`")]
    MalformedHint(u32),
    /// A hint glyph outside `T B L R M C W`.
    #[error("line {line} contains the invalid hint glyph `{found}`")]
    InvalidGlyph {
        /// 1-based input line.
        line: u32,
        /// The offending token.
        found: String,
    },
    /// A hint addressed a cell outside the grid.
    #[error("line {line}: hint position ({row}, {col}) is outside the grid")]
    HintOutOfRange {
        /// 1-based input line.
        line: u32,
        /// Hinted row.
        row: u8,
        /// Hinted column.
        col: u8,
    },
}
