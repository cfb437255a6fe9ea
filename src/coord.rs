//! Sticker addressing. Every sticker of an N×N×N cube has a flat index in `0..6 * N * N`, laid out
//! face by face (in `Face` order), then row by row, then column by column.

use crate::cube::Face;
use crate::error::TryFromIntToEnumError;

/// The position of a single sticker: a face together with a row and column on that face's grid.
/// Rows and columns are counted from the top left corner of the face as seen from outside the
/// cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub struct Coord {
    pub face: Face,
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a coordinate.
    pub const fn new(face: Face, row: usize, col: usize) -> Self {
        Coord { face, row, col }
    }

    /// The flat index of this coordinate on a cube of dimension `n`.
    ///
    /// # Panics
    /// If the row or column does not fit on an `n`×`n` face.
    pub fn index(self, n: usize) -> usize {
        sticker_index(self.face, self.row, self.col, n)
    }

    /// Recover a coordinate from its flat index on a cube of dimension `n`.
    ///
    /// # Panics
    /// If `idx` is not smaller than `6 * n * n`.
    pub fn from_index(idx: usize, n: usize) -> Self {
        let area = n * n;
        let face = idx
            .checked_div(area)
            .and_then(|f| u8::try_from(f).ok())
            .ok_or(TryFromIntToEnumError::OutOfBounds)
            .and_then(Face::try_from);
        let Ok(face) = face else {
            panic!("sticker index {idx} out of range for a {n}x{n}x{n} cube");
        };
        let rem = idx % area;
        Coord {
            face,
            row: rem / n,
            col: rem % n,
        }
    }
}

/// Compute `face * n^2 + row * n + col`.
///
/// # Panics
/// If the row or column does not fit on an `n`×`n` face.
pub fn sticker_index(face: Face, row: usize, col: usize, n: usize) -> usize {
    assert!(row < n && col < n, "({row}, {col}) is not on a {n}x{n} face");
    face as usize * n * n + row * n + col
}
