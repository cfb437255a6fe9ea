//! CFEN, a compact text format for cube states and patterns.
//!
//! A CFEN string looks like `YB|Y9/R9/B9/W9/O9/G9`: the up and front colours of the frame it is
//! written in, then the six faces in the order U, R, F, D, L, B, each run-length coded row by row.
//! A `?` sticker matches any colour, which makes CFEN useful for describing patterns to look for
//! as well as full states.

mod orientation;
mod rle;

pub use orientation::Orientation;

use crate::cube::{Color, Cube, Face};
use crate::error::DimensionMismatch;

use std::str::FromStr;
use thiserror::Error;

/// A CFEN sticker: a colour, or a wildcard matching every colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CfenSticker {
    /// A sticker of this colour.
    Color(Color),
    /// Any sticker at all, written `?`.
    Wildcard,
}

impl CfenSticker {
    /// The letter this sticker is written with.
    pub fn letter(self) -> char {
        match self {
            CfenSticker::Color(c) => c.letter(),
            CfenSticker::Wildcard => '?',
        }
    }

    /// Read a sticker from its letter.
    pub fn from_letter(c: char) -> Option<CfenSticker> {
        match c {
            '?' => Some(CfenSticker::Wildcard),
            c => Color::from_letter(c).map(CfenSticker::Color),
        }
    }

    /// Whether a sticker of colour `c` fits this one.
    pub fn matches(self, c: Color) -> bool {
        match self {
            CfenSticker::Color(s) => s == c,
            CfenSticker::Wildcard => true,
        }
    }
}

impl From<Color> for CfenSticker {
    fn from(c: Color) -> Self {
        CfenSticker::Color(c)
    }
}

/// One face of a CFEN state, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CfenFace {
    size: usize,
    stickers: Vec<CfenSticker>,
}

impl CfenFace {
    /// The dimension of the face.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The stickers of the face, row-major.
    pub fn stickers(&self) -> &[CfenSticker] {
        &self.stickers
    }

    /// The sticker at the given row and column.
    ///
    /// # Panics
    /// If the row or column is off the face.
    pub fn sticker(&self, row: usize, col: usize) -> CfenSticker {
        assert!(row < self.size && col < self.size);
        self.stickers[row * self.size + col]
    }
}

/// A parsed CFEN string. Every face has the same dimension, which is at least 2.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CfenState {
    orientation: Orientation,
    faces: [CfenFace; 6],
}

/// Why a CFEN string or state was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CfenError {
    /// The string does not have exactly one `|`.
    #[error("expected `orientation|faces`, found {0} field(s)")]
    FieldCount(usize),
    /// The orientation is not two letters.
    #[error("orientation must be 2 colours, found {0} character(s)")]
    OrientationLength(usize),
    /// The orientation holds something other than a colour.
    #[error("`{0}` is not an orientation colour")]
    InvalidColor(char),
    /// There are not exactly six faces.
    #[error("expected 6 faces separated by `/`, found {0}")]
    FaceCount(usize),
    /// A face has no stickers.
    #[error("face {0} is empty")]
    EmptyFace(usize),
    /// A character that is neither a sticker letter nor part of a count.
    #[error("unexpected `{found}` at position {position}")]
    UnexpectedChar {
        /// The character.
        found: char,
        /// Its byte offset in the string.
        position: usize,
    },
    /// A run with a count of zero.
    #[error("zero run length at position {position}")]
    ZeroCount {
        /// Byte offset of the count.
        position: usize,
    },
    /// A run (or a face) too long to count.
    #[error("run length at position {position} is too large")]
    CountOverflow {
        /// Byte offset of the count.
        position: usize,
    },
    /// The first face's sticker count is not the square of a dimension of at least 2.
    #[error("the first face has {0} stickers, which is not N*N for any N >= 2")]
    NotSquare(usize),
    /// The state describes a cube larger than `MAX_SIZE`.
    #[error("a {size}x{size}x{size} cube is larger than the maximum of {max}")]
    TooLarge {
        /// The dimension described.
        size: usize,
        /// `MAX_SIZE`.
        max: usize,
    },
    /// A face does not have as many stickers as the first one.
    #[error("face {face} has {found} stickers, expected {expected}")]
    FaceSize {
        /// The slot of the face.
        face: usize,
        /// Stickers on the first face.
        expected: usize,
        /// Stickers on this face.
        found: usize,
    },
    /// The cube and the state are of different dimensions.
    #[error(transparent)]
    DimensionMismatch(#[from] DimensionMismatch),
    /// Cubes cannot be converted to or from this frame.
    #[error("orientation {0} is not supported")]
    UnsupportedOrientation(Orientation),
    /// A pattern with wildcards cannot become a cube.
    #[error("state contains wildcards")]
    WildcardInState,
    /// The state does not have N*N stickers of some colour.
    #[error("state has {found} {color:?} stickers, expected {expected}")]
    ColorCount {
        /// The colour.
        color: Color,
        /// How many stickers of it there should be.
        expected: usize,
        /// How many there are.
        found: usize,
    },
}

/// The integer square root of `x`, if `x` is a perfect square.
fn exact_sqrt(x: usize) -> Option<usize> {
    // Start from the float estimate and correct it, since large values lose precision.
    let mut r = (x as f64).sqrt() as usize;
    while r.checked_mul(r).map_or(true, |sq| sq > x) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= x) {
        r += 1;
    }
    (r * r == x).then_some(r)
}

fn parse_orientation(s: &str) -> Result<Orientation, CfenError> {
    let letters: Vec<char> = s.chars().collect();
    let [up, front] = letters[..] else {
        return Err(CfenError::OrientationLength(letters.len()));
    };
    let color = |c| Color::from_letter(c).ok_or(CfenError::InvalidColor(c));
    Ok(Orientation::new(color(up)?, color(front)?))
}

/// The largest cube dimension a CFEN string may describe.
pub const MAX_SIZE: usize = 1024;

/// A CFEN string whose sizes have been checked but whose runs are not expanded yet.
struct Scanned {
    orientation: Orientation,
    size: usize,
    runs: [Vec<(CfenSticker, usize)>; 6],
}

fn scan(s: &str) -> Result<Scanned, CfenError> {
    let fields: Vec<&str> = s.split('|').collect();
    let [frame, faces] = fields[..] else {
        return Err(CfenError::FieldCount(fields.len()));
    };
    let orientation = parse_orientation(frame)?;

    let texts: Vec<&str> = faces.split('/').collect();
    let texts: [&str; 6] = texts
        .try_into()
        .map_err(|t: Vec<&str>| CfenError::FaceCount(t.len()))?;

    let mut offset = frame.len() + 1;
    let mut runs: [Vec<(CfenSticker, usize)>; 6] = Default::default();
    let mut totals = [0; 6];
    for (slot, text) in texts.iter().enumerate() {
        if text.is_empty() {
            return Err(CfenError::EmptyFace(slot));
        }
        runs[slot] = rle::decode(text, offset)?;
        totals[slot] = runs[slot]
            .iter()
            .try_fold(0usize, |acc, &(_, n)| acc.checked_add(n))
            .ok_or(CfenError::CountOverflow { position: offset })?;
        offset += text.len() + 1;
    }

    let area = totals[0];
    let size = match exact_sqrt(area) {
        Some(n) if n >= 2 => n,
        _ => return Err(CfenError::NotSquare(area)),
    };
    if size > MAX_SIZE {
        return Err(CfenError::TooLarge {
            size,
            max: MAX_SIZE,
        });
    }
    for (slot, &total) in totals.iter().enumerate().skip(1) {
        if total != area {
            return Err(CfenError::FaceSize {
                face: slot,
                expected: area,
                found: total,
            });
        }
    }

    Ok(Scanned {
        orientation,
        size,
        runs,
    })
}

impl FromStr for CfenState {
    type Err = CfenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Scanned {
            orientation,
            size,
            runs,
        } = scan(s)?;

        let faces = runs.map(|runs| {
            let mut stickers = Vec::with_capacity(size * size);
            for (sticker, n) in runs {
                stickers.extend(std::iter::repeat(sticker).take(n));
            }
            CfenFace { size, stickers }
        });

        Ok(CfenState { orientation, faces })
    }
}

impl std::fmt::Display for CfenState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = format!("{}|", self.orientation);
        for (slot, face) in self.faces.iter().enumerate() {
            if slot > 0 {
                out.push('/');
            }
            rle::encode(&face.stickers, &mut out);
        }
        f.write_str(&out)
    }
}

impl CfenState {
    /// The frame this state is written in.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The dimension of the cube this state describes.
    pub fn size(&self) -> usize {
        self.faces[0].size
    }

    /// The face in the given slot. Slots are named by the faces of the state's own frame, so
    /// `face(Face::U)` is the face with the state's up colour in the middle.
    pub fn face(&self, slot: Face) -> &CfenFace {
        &self.faces[slot as usize]
    }

    /// Whether any sticker is a wildcard.
    pub fn has_wildcards(&self) -> bool {
        self.faces
            .iter()
            .any(|f| f.stickers.contains(&CfenSticker::Wildcard))
    }

    /// Describe `cube` in the given frame.
    pub fn from_cube(cube: &Cube, orientation: Orientation) -> Result<CfenState, CfenError> {
        Ok(CfenState::from_frame(cube, orientation, orientation.frame()?))
    }

    fn from_frame(cube: &Cube, orientation: Orientation, frame: [Face; 6]) -> CfenState {
        let faces = frame.map(|face| CfenFace {
            size: cube.size(),
            stickers: cube.face(face).iter().map(|&c| c.into()).collect(),
        });
        CfenState { orientation, faces }
    }

    /// Build the cube this state describes.
    pub fn to_cube(&self) -> Result<Cube, CfenError> {
        let frame = self.orientation.frame()?;
        let n = self.size();
        let area = n * n;

        let mut stickers = vec![Color::White; 6 * area].into_boxed_slice();
        for (face, &internal) in self.faces.iter().zip(frame.iter()) {
            let start = internal as usize * area;
            for (dst, s) in stickers[start..start + area].iter_mut().zip(&face.stickers) {
                *dst = match *s {
                    CfenSticker::Color(c) => c,
                    CfenSticker::Wildcard => return Err(CfenError::WildcardInState),
                };
            }
        }

        let cube = Cube::from_stickers(n, stickers);
        let counts = cube.color_counts();
        for color in Color::ARRAY {
            let found = counts[color as usize];
            if found != area {
                return Err(CfenError::ColorCount {
                    color,
                    expected: area,
                    found,
                });
            }
        }
        Ok(cube)
    }

    /// Whether `cube` fits this pattern, read in the pattern's own frame. Wildcards match any
    /// colour.
    pub fn matches_cube(&self, cube: &Cube) -> Result<bool, CfenError> {
        if cube.size() != self.size() {
            return Err(DimensionMismatch {
                expected: self.size(),
                found: cube.size(),
            }
            .into());
        }
        let frame = self.orientation.frame()?;
        Ok(self.faces.iter().zip(frame).all(|(face, internal)| {
            face.stickers
                .iter()
                .zip(cube.face(internal))
                .all(|(s, &c)| s.matches(c))
        }))
    }
}

/// Parse a CFEN string.
pub fn parse_cfen(s: &str) -> Result<CfenState, CfenError> {
    s.parse()
}

/// The CFEN string of `cube`, in the yellow up, blue front frame.
pub fn generate_cfen(cube: &Cube) -> String {
    CfenState::from_frame(cube, Orientation::CANONICAL, orientation::CANONICAL_FRAME).to_string()
}

/// Check that a CFEN string parses, without building its faces.
pub fn validate_cfen(s: &str) -> Result<(), CfenError> {
    scan(s).map(|_| ())
}
