//! The frame a CFEN string is written in.

use super::CfenError;
use crate::cube::{Color, Face};

/// The face each slot holds in the canonical frame.
pub(super) const CANONICAL_FRAME: [Face; 6] =
    [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

/// The colours on the up and front faces of the frame a CFEN string is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Orientation {
    /// The colour facing up.
    pub up: Color,
    /// The colour facing the viewer.
    pub front: Color,
}

impl Orientation {
    /// Yellow up, blue front: the frame a solved `Cube` is built in.
    pub const CANONICAL: Orientation = Orientation::new(Color::Yellow, Color::Blue);

    /// The frames a CFEN string can be converted in, with the internal face each CFEN slot holds.
    const FRAMES: [(Orientation, [Face; 6]); 4] = [
        (Orientation::CANONICAL, CANONICAL_FRAME),
        (
            Orientation::new(Color::White, Color::Green),
            [Face::D, Face::L, Face::B, Face::U, Face::R, Face::F],
        ),
        (
            Orientation::new(Color::White, Color::Blue),
            [Face::D, Face::R, Face::F, Face::U, Face::L, Face::B],
        ),
        (
            Orientation::new(Color::Yellow, Color::Green),
            [Face::U, Face::L, Face::B, Face::D, Face::R, Face::F],
        ),
    ];

    /// An orientation from its up and front colours.
    pub const fn new(up: Color, front: Color) -> Self {
        Orientation { up, front }
    }

    /// For each CFEN face slot, the internal face it holds in this frame.
    pub fn frame(self) -> Result<[Face; 6], CfenError> {
        Orientation::FRAMES
            .iter()
            .find(|(o, _)| *o == self)
            .map(|&(_, frame)| frame)
            .ok_or(CfenError::UnsupportedOrientation(self))
    }

    /// Whether cubes can be converted to and from this frame.
    pub fn is_supported(self) -> bool {
        self.frame().is_ok()
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::CANONICAL
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.up, self.front)
    }
}
