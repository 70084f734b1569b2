use std::fmt::Write;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::{BoardConfigError, TopOut, core::piece::Orientation};

/// Row bitmasks of a piece after shifting it to its target column.
///
/// No tetromino orientation is taller than 4 rows, so the buffer is
/// stack-allocated.
pub type PieceRows = ArrayVec<u32, 4>;

/// Result of committing a piece placement with [`Board::apply`].
///
/// `landing_height` and `piece_rows` feed the feature extraction for the
/// placement that produced this outcome; `rows_removed` feeds the session
/// counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    landing_height: usize,
    piece_rows: PieceRows,
    rows_removed: usize,
}

impl MoveOutcome {
    /// Board row index at which the bottom row of the piece came to rest.
    #[must_use]
    pub fn landing_height(&self) -> usize {
        self.landing_height
    }

    /// The shifted orientation rows that were merged into the board.
    #[must_use]
    pub fn piece_rows(&self) -> &[u32] {
        &self.piece_rows
    }

    /// Number of full rows removed by this placement.
    #[must_use]
    pub fn rows_removed(&self) -> usize {
        self.rows_removed
    }
}

/// Bitboard for fast collision detection and line clearing.
///
/// The board is an ordered sequence of `u32` row bitmasks, one per row,
/// with index 0 at the bottom and index `num_rows - 1` at the top. Bit
/// `j` of a row is set iff column `j` is occupied, so a row equal to
/// `full_row_mask()` (all `num_columns` low bits set) is complete.
///
/// Dimensions are fixed at construction. Because each row is a single
/// `u32` word, the board supports at most 32 columns; configurations
/// outside the supported range are rejected by [`Board::new`] instead of
/// silently wrapping bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<u32>,
    num_columns: usize,
    full_row: u32,
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Rows as "000,201,3ff,..." (comma-separated hex, bottom row first)
        let mut rows = String::with_capacity(self.rows.len() * 4);
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                rows.push(',');
            }
            write!(&mut rows, "{row:x}").unwrap();
        }
        let repr = BoardRepr {
            columns: self.num_columns,
            rows,
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let repr = BoardRepr::deserialize(deserializer)?;
        let rows: Vec<u32> = repr
            .rows
            .split(',')
            .enumerate()
            .map(|(i, hex)| {
                u32::from_str_radix(hex, 16).map_err(|e| {
                    serde::de::Error::custom(format!("invalid hex at row {i}: {hex} ({e})"))
                })
            })
            .collect::<Result<_, _>>()?;

        Board::from_rows(repr.columns, rows).map_err(serde::de::Error::custom)
    }
}

#[derive(Serialize, Deserialize)]
struct BoardRepr {
    columns: usize,
    rows: String,
}

impl Board {
    /// Minimum column count: the widest orientation spans 4 columns.
    pub const MIN_COLUMNS: usize = 4;
    /// Maximum column count representable in a `u32` row word.
    pub const MAX_COLUMNS: usize = 32;
    /// Minimum row count: the tallest orientation spans 4 rows.
    pub const MIN_ROWS: usize = 4;

    /// Creates an empty board with the given dimensions.
    pub fn new(num_columns: usize, num_rows: usize) -> Result<Self, BoardConfigError> {
        if num_columns < Self::MIN_COLUMNS {
            return Err(BoardConfigError::TooFewColumns {
                min: Self::MIN_COLUMNS,
                got: num_columns,
            });
        }
        if num_columns > Self::MAX_COLUMNS {
            return Err(BoardConfigError::TooManyColumns {
                max: Self::MAX_COLUMNS,
                got: num_columns,
            });
        }
        if num_rows < Self::MIN_ROWS {
            return Err(BoardConfigError::TooFewRows {
                min: Self::MIN_ROWS,
                got: num_rows,
            });
        }
        let full_row = u32::MAX >> (u32::BITS as usize - num_columns);
        Ok(Self {
            rows: vec![0; num_rows],
            num_columns,
            full_row,
        })
    }

    /// Creates a board with the given column count and pre-filled row
    /// bitmasks, bottom row first.
    ///
    /// Dimensions are validated like [`Board::new`], and every row must fit
    /// within the column count.
    pub fn from_rows(num_columns: usize, rows: Vec<u32>) -> Result<Self, BoardConfigError> {
        let mut board = Self::new(num_columns, rows.len())?;
        for (index, &value) in rows.iter().enumerate() {
            if value & !board.full_row != 0 {
                return Err(BoardConfigError::RowOutOfRange {
                    index,
                    value,
                    columns: num_columns,
                });
            }
        }
        board.rows = rows;
        Ok(board)
    }

    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Row bitmasks, bottom row first. Read-only projection for renderers
    /// and feature extraction.
    #[must_use]
    pub fn rows(&self) -> &[u32] {
        &self.rows
    }

    /// Bitmask of the row at index `y` (0 = bottom).
    #[must_use]
    pub fn row(&self, y: usize) -> u32 {
        self.rows[y]
    }

    /// The bit pattern of a completed row: all `num_columns` low bits set.
    #[must_use]
    pub fn full_row_mask(&self) -> u32 {
        self.full_row
    }

    #[must_use]
    pub fn is_cell_occupied(&self, column: usize, row: usize) -> bool {
        (self.rows[row] >> column) & 1 != 0
    }

    /// Shifts an orientation's rows to the given column.
    ///
    /// The caller must keep `column + orientation.width()` within the
    /// board; the move search enumerates only columns that satisfy this.
    #[must_use]
    pub fn shifted_piece(&self, orientation: &Orientation, column: usize) -> PieceRows {
        debug_assert!(column + orientation.width() <= self.num_columns);
        orientation.rows().iter().map(|row| row << column).collect()
    }

    /// Returns the row at which a falling piece comes to rest.
    ///
    /// Scans candidate landing rows from the top down; the first row where
    /// any piece row overlaps an occupied board row places the piece one
    /// row above it. With no collision at all the piece rests on row 0.
    #[must_use]
    pub fn placement_row(&self, piece_rows: &[u32]) -> usize {
        let top = self.rows.len() - piece_rows.len();
        for row in (0..=top).rev() {
            for (i, &piece_row) in piece_rows.iter().enumerate() {
                if self.rows[row + i] & piece_row != 0 {
                    return row + 1;
                }
            }
        }
        0
    }

    /// Merges a shifted piece into the board at `placement_row` and clears
    /// any completed rows.
    ///
    /// If the piece would extend above the top of the board, returns
    /// [`TopOut`] and leaves the board untouched. Otherwise each removed
    /// full row shifts the rows above it down and a fresh empty row is
    /// appended at the top, keeping the row count constant.
    pub fn apply(
        &mut self,
        piece_rows: PieceRows,
        placement_row: usize,
    ) -> Result<MoveOutcome, TopOut> {
        if placement_row + piece_rows.len() > self.rows.len() {
            return Err(TopOut);
        }

        for (i, &piece_row) in piece_rows.iter().enumerate() {
            self.rows[placement_row + i] |= piece_row;
        }

        let mut rows_removed = 0;
        let mut i = 0;
        while i < piece_rows.len() {
            if self.rows[placement_row + i] == self.full_row {
                self.rows.remove(placement_row + i);
                self.rows.push(0);
                // Removal shifted the next row into slot i; re-examine it
                // before advancing.
                rows_removed += 1;
            } else {
                i += 1;
            }
        }

        Ok(MoveOutcome {
            landing_height: placement_row,
            piece_rows,
            rows_removed,
        })
    }

    /// Creates a `Board` from ASCII art for testing.
    ///
    /// `'#'` is an occupied cell, `'.'` an empty cell. Lines are given top
    /// row first and every line must have the same width.
    ///
    /// # Panics
    ///
    /// Panics on ragged lines or dimensions outside the supported range.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let lines: Vec<&str> = art.lines().filter(|line| !line.trim().is_empty()).collect();
        let cells: Vec<Vec<bool>> = lines
            .iter()
            .map(|line| {
                line.chars()
                    .filter_map(|c| match c {
                        '#' => Some(true),
                        '.' => Some(false),
                        _ => None,
                    })
                    .collect()
            })
            .collect();

        let num_columns = cells.first().map_or(0, Vec::len);
        for (y, row) in cells.iter().enumerate() {
            assert_eq!(
                row.len(),
                num_columns,
                "Each row must have exactly {num_columns} cells, got {} at row {y}",
                row.len(),
            );
        }

        let mut board = Self::new(num_columns, cells.len()).unwrap();
        for (y, row) in cells.iter().rev().enumerate() {
            for (x, &occupied) in row.iter().enumerate() {
                if occupied {
                    board.rows[y] |= 1 << x;
                }
            }
        }
        board
    }
}
