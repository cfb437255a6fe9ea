//! The three axes a cube turns about.

use super::moves::MoveFamily;
use super::Face;

/// An axis of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Front-Back axis
    FB,
    /// Left-Right axis
    LR,
    /// Up-Down axis
    UD,
}

impl Face {
    /// The axis through this face and its opposite.
    pub fn axis(self) -> Axis {
        match self {
            Face::U | Face::D => Axis::UD,
            Face::R | Face::L => Axis::LR,
            Face::F | Face::B => Axis::FB,
        }
    }
}

impl MoveFamily {
    /// The axis moves of this family turn about. Moves about the same axis always commute.
    pub fn axis(self) -> Axis {
        self.ring_face().axis()
    }
}
