use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

/// One rotation of a tetromino, encoded as row bitmasks.
///
/// Rows are ordered bottom first, matching the board's row order. Bit `j`
/// of a row mask is set iff column `j` (within the piece's own bounding
/// box) is occupied; bit order runs low-to-high as column `0..width`.
///
/// Orientations are defined once in a static catalog and shared read-only
/// across all simulations; `height` always equals `rows.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientation {
    rows: &'static [u32],
    width: usize,
}

impl Orientation {
    const fn new(rows: &'static [u32], width: usize) -> Self {
        Self { rows, width }
    }

    /// Row bitmasks, bottom row first.
    #[must_use]
    pub fn rows(&self) -> &'static [u32] {
        self.rows
    }

    /// Number of columns spanned by the piece.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows spanned by the piece.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// Enum representing the type of piece.
///
/// The discriminant order (I, T, O, J, L, S, Z) is the catalog order: move
/// search iterates orientations in this order and resolves score ties in
/// favor of the earliest candidate, so the order is part of the engine's
/// observable behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// T-piece.
    T = 1,
    /// O-piece.
    O = 2,
    /// J-piece.
    J = 3,
    /// L-piece.
    L = 4,
    /// S-piece.
    S = 5,
    /// Z-piece.
    Z = 6,
}

impl Serialize for PieceKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_char(self.as_char())
    }
}

impl<'de> Deserialize<'de> for PieceKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let c = char::deserialize(deserializer)?;
        PieceKind::from_char(c)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid piece kind: {c}")))
    }
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        match rng.random_range(0..=6) {
            0 => PieceKind::I,
            1 => PieceKind::T,
            2 => PieceKind::O,
            3 => PieceKind::J,
            4 => PieceKind::L,
            5 => PieceKind::S,
            _ => PieceKind::Z,
        }
    }
}

impl PieceKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    /// All piece kinds in catalog order.
    pub const ALL: [PieceKind; PieceKind::LEN] = [
        PieceKind::I,
        PieceKind::T,
        PieceKind::O,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Returns the distinct rotational orientations of this piece.
    ///
    /// The O-piece has 1 orientation, I/S/Z have 2, and T/J/L have 4.
    /// The returned slice order is fixed and load-bearing for the move
    /// search tie-break.
    #[must_use]
    pub fn orientations(self) -> &'static [Orientation] {
        PIECE_ORIENTATIONS[self as usize]
    }

    /// Returns the single character representation of this piece kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use tetropilot_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_char(), 'I');
    /// assert_eq!(PieceKind::T.as_char(), 'T');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::T => 'T',
            PieceKind::O => 'O',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
        }
    }

    /// Parses a piece kind from a single character.
    ///
    /// # Examples
    ///
    /// ```
    /// use tetropilot_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_char('I'), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_char('X'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(PieceKind::I),
            'T' => Some(PieceKind::T),
            'O' => Some(PieceKind::O),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            _ => None,
        }
    }
}

/// Static tetromino catalog.
///
/// Row masks are written bottom row first with bit 0 as the leftmost
/// column, so `0b110` occupies columns 1 and 2. The per-piece orientation
/// order is fixed; it defines the move search's tie-break preference.
const PIECE_ORIENTATIONS: [&[Orientation]; PieceKind::LEN] = [
    // I-piece:
    //   #
    //   #        ####
    //   #
    //   #
    &[
        Orientation::new(&[0b1, 0b1, 0b1, 0b1], 1),
        Orientation::new(&[0b1111], 4),
    ],
    // T-piece:
    //   #      #     .#    ###
    //   ##    ###    ##     #
    //   #            .#
    &[
        Orientation::new(&[0b01, 0b11, 0b01], 2),
        Orientation::new(&[0b111, 0b010], 3),
        Orientation::new(&[0b10, 0b11, 0b10], 2),
        Orientation::new(&[0b010, 0b111], 3),
    ],
    // O-piece:
    //   ##
    //   ##
    &[Orientation::new(&[0b11, 0b11], 2)],
    // J-piece:
    //   #      .#    ###    ##
    //   ###    .#    ..#    #
    //          ##           #
    &[
        Orientation::new(&[0b111, 0b001], 3),
        Orientation::new(&[0b11, 0b10, 0b10], 2),
        Orientation::new(&[0b100, 0b111], 3),
        Orientation::new(&[0b01, 0b01, 0b11], 2),
    ],
    // L-piece:
    //   ###    #     ..#    ##
    //   #      #     ###    .#
    //          ##           .#
    &[
        Orientation::new(&[0b001, 0b111], 3),
        Orientation::new(&[0b11, 0b01, 0b01], 2),
        Orientation::new(&[0b111, 0b100], 3),
        Orientation::new(&[0b10, 0b10, 0b11], 2),
    ],
    // S-piece:
    //   #      .##
    //   ##     ##
    //   .#
    &[
        Orientation::new(&[0b10, 0b11, 0b01], 2),
        Orientation::new(&[0b011, 0b110], 3),
    ],
    // Z-piece:
    //   .#     ##
    //   ##     .##
    //   #
    &[
        Orientation::new(&[0b01, 0b11, 0b10], 2),
        Orientation::new(&[0b110, 0b011], 3),
    ],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_counts() {
        assert_eq!(PieceKind::I.orientations().len(), 2);
        assert_eq!(PieceKind::T.orientations().len(), 4);
        assert_eq!(PieceKind::O.orientations().len(), 1);
        assert_eq!(PieceKind::J.orientations().len(), 4);
        assert_eq!(PieceKind::L.orientations().len(), 4);
        assert_eq!(PieceKind::S.orientations().len(), 2);
        assert_eq!(PieceKind::Z.orientations().len(), 2);
    }

    #[test]
    fn test_every_orientation_is_consistent() {
        for kind in PieceKind::ALL {
            for orientation in kind.orientations() {
                assert!(!orientation.rows().is_empty());
                assert!(orientation.height() == orientation.rows().len());

                let width_mask = (1u32 << orientation.width()) - 1;
                let mut union = 0;
                for &row in orientation.rows() {
                    assert_ne!(row, 0, "{kind:?} has an empty orientation row");
                    assert_eq!(
                        row & !width_mask,
                        0,
                        "{kind:?} row {row:#b} exceeds width {}",
                        orientation.width()
                    );
                    union |= row;
                }
                // The bounding box is tight: every column in 0..width is used.
                assert_eq!(union, width_mask, "{kind:?} declares an unused column");
            }
        }
    }

    #[test]
    fn test_every_orientation_has_four_cells() {
        for kind in PieceKind::ALL {
            for orientation in kind.orientations() {
                let cells: u32 = orientation.rows().iter().map(|row| row.count_ones()).sum();
                assert_eq!(cells, 4, "{kind:?} orientation is not a tetromino");
            }
        }
    }

    #[test]
    fn test_spawn_shapes() {
        // Spot-check the first catalog entry of each piece.
        assert_eq!(PieceKind::I.orientations()[0].rows(), &[1, 1, 1, 1]);
        assert_eq!(PieceKind::T.orientations()[0].rows(), &[0b01, 0b11, 0b01]);
        assert_eq!(PieceKind::O.orientations()[0].rows(), &[0b11, 0b11]);
        assert_eq!(PieceKind::J.orientations()[0].rows(), &[0b111, 0b001]);
        assert_eq!(PieceKind::L.orientations()[0].rows(), &[0b001, 0b111]);
        assert_eq!(PieceKind::S.orientations()[0].rows(), &[0b10, 0b11, 0b01]);
        assert_eq!(PieceKind::Z.orientations()[0].rows(), &[0b01, 0b11, 0b10]);
    }

    #[test]
    fn test_piece_kind_char_conversion() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_char(kind.as_char()), Some(kind));
        }
        assert_eq!(PieceKind::from_char('X'), None);
        assert_eq!(PieceKind::from_char('i'), None);
    }

    #[test]
    fn test_piece_kind_serialization() {
        let serialized = serde_json::to_string(&PieceKind::S).unwrap();
        assert_eq!(serialized, "\"S\"");

        let deserialized: PieceKind = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, PieceKind::S);

        assert!(serde_json::from_str::<PieceKind>("\"X\"").is_err());
    }
}
