//! An N×N×N cube represented by its stickers, along with the machinery used to turn it.
//!
//! Faces are stored in the order U, R, F, D, L, B. Each face is a row-major grid seen from
//! outside the cube, oriented so that
//! - U has row 0 along the B edge and column 0 along the L edge,
//! - D has row 0 along the F edge and column 0 along the L edge,
//! - F, R, B and L have row 0 along the U edge, and column 0 along the L, F, R and B edge
//!   respectively.

pub mod axis;
pub mod cache;
pub mod moves;
pub mod permutation;
mod ring;

use crate::coord::sticker_index;
use crate::error::TryFromIntToEnumError;
use permutation::Permutation;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// A face of the cube, in the order faces are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Face {
    /// Up
    U,
    /// Right
    R,
    /// Front
    F,
    /// Down
    D,
    /// Left
    L,
    /// Back
    B,
}

impl Face {
    /// Every face, in storage order.
    pub const ARRAY: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

    /// The face on the other side of the cube.
    pub fn opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::R => Face::L,
            Face::F => Face::B,
            Face::D => Face::U,
            Face::L => Face::R,
            Face::B => Face::F,
        }
    }
}

impl TryFrom<u8> for Face {
    type Error = TryFromIntToEnumError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Face::ARRAY
            .get(n as usize)
            .copied()
            .ok_or(TryFromIntToEnumError::OutOfBounds)
    }
}

/// The colour of a sticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Green,
    Blue,
}

impl Color {
    /// Every colour.
    pub const ARRAY: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Red,
        Color::Orange,
        Color::Green,
        Color::Blue,
    ];

    /// The single letter used for this colour in text formats.
    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }

    /// Read a colour from its letter. Lowercase letters are not accepted.
    pub fn from_letter(c: char) -> Option<Color> {
        Color::ARRAY.into_iter().find(|col| col.letter() == c)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// How a permutation is written into a cube's sticker array.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplyStrategy {
    /// Copy the stickers, then scatter each one to its destination.
    #[default]
    Scatter,
    /// Follow each cycle of the permutation, rotating stickers without a second buffer.
    InPlace,
}

/// An N×N×N cube. The dimension is fixed when the cube is made.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    size: usize,
    stickers: Box<[Color]>,
}

impl Cube {
    /// The colour of each face of a solved cube in the canonical orientation (yellow up, blue
    /// front), indexed by `Face`.
    pub const SOLVED_COLORS: [Color; 6] = [
        Color::Yellow,
        Color::Red,
        Color::Blue,
        Color::White,
        Color::Orange,
        Color::Green,
    ];

    /// A solved cube of dimension `size`.
    ///
    /// # Panics
    /// If `size < 2`.
    pub fn new(size: usize) -> Cube {
        assert!(size >= 2, "a cube must be at least 2x2x2, got {size}");
        let stickers = Cube::SOLVED_COLORS
            .iter()
            .flat_map(|&c| std::iter::repeat(c).take(size * size))
            .collect();
        Cube { size, stickers }
    }

    /// Build a cube directly from its sticker array. The caller is responsible for the colour
    /// counts being valid.
    pub(crate) fn from_stickers(size: usize, stickers: Box<[Color]>) -> Cube {
        debug_assert!(size >= 2);
        debug_assert_eq!(stickers.len(), 6 * size * size);
        Cube { size, stickers }
    }

    /// The dimension of the cube.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The colour of a single sticker.
    ///
    /// # Panics
    /// If the row or column is off the face.
    pub fn sticker(&self, face: Face, row: usize, col: usize) -> Color {
        self.stickers[sticker_index(face, row, col, self.size)]
    }

    /// The stickers of one face, row-major.
    pub fn face(&self, face: Face) -> &[Color] {
        let area = self.size * self.size;
        let start = face as usize * area;
        &self.stickers[start..start + area]
    }

    /// Whether every face is a single colour.
    pub fn is_solved(&self) -> bool {
        Face::ARRAY.iter().all(|&f| {
            let face = self.face(f);
            face.iter().all(|&c| c == face[0])
        })
    }

    /// How many stickers of each colour the cube has, indexed as `Color::ARRAY`.
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for &c in self.stickers.iter() {
            counts[c as usize] += 1;
        }
        counts
    }

    /// Move every sticker to the destination the permutation gives it.
    pub fn apply_permutation(&mut self, perm: &Permutation, strategy: ApplyStrategy) {
        match strategy {
            ApplyStrategy::Scatter => self.stickers = perm.scatter(&self.stickers),
            ApplyStrategy::InPlace => perm.permute_in_place(&mut self.stickers),
        }
    }
}

impl std::fmt::Debug for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cube({}x{}x{})\n{}", self.size, self.size, self.size, self)
    }
}

/// Prints each face as a grid of colour letters, under a heading naming the face.
impl std::fmt::Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for face in Face::ARRAY {
            writeln!(f, "{face:?}:")?;
            for row in self.face(face).chunks(self.size) {
                let line: Vec<String> = row.iter().map(Color::to_string).collect();
                writeln!(f, "{}", line.join(" "))?;
            }
        }
        Ok(())
    }
}
