//! Moves of an N×N×N cube, and applying them.

use super::cache::{PermKey, PermutationCache};
use super::{ApplyStrategy, Cube, Face};
use crate::moves::{Cancellation, MoveSequence};

use log::trace;
use thiserror::Error;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// Represents each family of move. Note that `CubeMove` uses this along with a layer, a wide flag
/// and a counter to represent moves such as `R2`, `Uw'` or `M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum MoveFamily {
    /// Right face
    R,
    /// Left face
    L,
    /// Up face
    U,
    /// Down face
    D,
    /// Front face
    F,
    /// Back face
    B,
    /// Middle slice, turning like L
    M,
    /// Equatorial slice, turning like D
    E,
    /// Standing slice, turning like F
    S,
    /// Whole cube rotation, turning like R
    X,
    /// Whole cube rotation, turning like U
    Y,
    /// Whole cube rotation, turning like F
    Z,
}

/// The three kinds of move family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Turns of layers counted from one face (R, L, U, D, F, B).
    Face,
    /// Turns of the middle layer only (M, E, S).
    Slice,
    /// Turns of every layer at once (x, y, z).
    Rotation,
}

impl MoveFamily {
    /// Every move family.
    pub const ARRAY: [MoveFamily; 12] = [
        MoveFamily::R,
        MoveFamily::L,
        MoveFamily::U,
        MoveFamily::D,
        MoveFamily::F,
        MoveFamily::B,
        MoveFamily::M,
        MoveFamily::E,
        MoveFamily::S,
        MoveFamily::X,
        MoveFamily::Y,
        MoveFamily::Z,
    ];

    /// Whether this family turns a face, a slice, or the whole cube.
    pub fn kind(self) -> MoveKind {
        use MoveFamily as MF;
        match self {
            MF::R | MF::L | MF::U | MF::D | MF::F | MF::B => MoveKind::Face,
            MF::M | MF::E | MF::S => MoveKind::Slice,
            MF::X | MF::Y | MF::Z => MoveKind::Rotation,
        }
    }

    /// The face this family turns in the same direction as. Layers of a move are counted from this
    /// face.
    pub fn ring_face(self) -> Face {
        use MoveFamily as MF;
        match self {
            MF::R | MF::X => Face::R,
            MF::L | MF::M => Face::L,
            MF::U | MF::Y => Face::U,
            MF::D | MF::E => Face::D,
            MF::F | MF::S | MF::Z => Face::F,
            MF::B => Face::B,
        }
    }

    /// The letter used for this family in move notation.
    pub fn letter(self) -> char {
        use MoveFamily as MF;
        match self {
            MF::R => 'R',
            MF::L => 'L',
            MF::U => 'U',
            MF::D => 'D',
            MF::F => 'F',
            MF::B => 'B',
            MF::M => 'M',
            MF::E => 'E',
            MF::S => 'S',
            MF::X => 'x',
            MF::Y => 'y',
            MF::Z => 'z',
        }
    }

    /// The family written with the given letter, if any.
    pub fn from_letter(c: char) -> Option<MoveFamily> {
        MoveFamily::ARRAY.into_iter().find(|f| f.letter() == c)
    }
}

impl From<Face> for MoveFamily {
    fn from(face: Face) -> Self {
        match face {
            Face::U => MoveFamily::U,
            Face::R => MoveFamily::R,
            Face::F => MoveFamily::F,
            Face::D => MoveFamily::D,
            Face::L => MoveFamily::L,
            Face::B => MoveFamily::B,
        }
    }
}

impl std::fmt::Display for MoveFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Stores a move family, layer, wide flag and counter. An anti-clockwise move will have a count
/// of 3.
///
/// `layer` is the depth of the turned layer below the family's face (0 is the outer layer) and is
/// only meaningful for face turns; `wide` additionally turns the layer beneath it.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub struct CubeMove {
    pub family: MoveFamily,
    pub layer: usize,
    pub wide: bool,
    pub count: u8,
}

impl CubeMove {
    /// An outer layer (or slice, or rotation) move.
    pub const fn new(family: MoveFamily, count: u8) -> Self {
        CubeMove {
            family,
            layer: 0,
            wide: false,
            count,
        }
    }

    /// A wide move, turning the outer two layers of a face.
    pub const fn wide(family: MoveFamily, count: u8) -> Self {
        CubeMove {
            family,
            layer: 0,
            wide: true,
            count,
        }
    }

    /// A move of a single inner layer of a face, e.g. `2R` is `inner(MoveFamily::R, 1, 1)`.
    pub const fn inner(family: MoveFamily, layer: usize, count: u8) -> Self {
        CubeMove {
            family,
            layer,
            wide: false,
            count,
        }
    }

    /// The layers this move turns on a cube of dimension `n`, counted from the family's
    /// `ring_face`. Slice moves turn layer `n / 2`, which on even cubes is the middle layer further
    /// from the ring face.
    pub fn layers(self, n: usize) -> Result<Vec<usize>, MoveError> {
        if !(1..=3).contains(&self.count) {
            return Err(MoveError::InvalidCount(self.count));
        }
        let kind = self.family.kind();
        if kind != MoveKind::Face {
            if self.wide {
                return Err(MoveError::WideNotAllowed(self.family));
            }
            if self.layer != 0 {
                return Err(MoveError::InnerLayerNotAllowed(self.family));
            }
        }
        match kind {
            MoveKind::Face => {
                let last = self.layer + usize::from(self.wide);
                if last >= n {
                    return Err(MoveError::LayerOutOfRange {
                        family: self.family,
                        layer: last,
                        size: n,
                    });
                }
                Ok((self.layer..=last).collect())
            }
            MoveKind::Slice if n < 3 => Err(MoveError::SliceNeedsCenter(self.family, n)),
            MoveKind::Slice => Ok(vec![n / 2]),
            MoveKind::Rotation => Ok((0..n).collect()),
        }
    }
}

impl crate::moves::Move for CubeMove {
    fn inverse(self) -> Self {
        Self {
            count: 4u8.wrapping_sub(self.count).rem_euclid(4),
            ..self
        }
    }

    fn commutes_with(&self, b: &Self) -> bool {
        self.family.axis() == b.family.axis()
    }

    fn cancel(self, b: Self) -> Cancellation<Self> {
        if self.family == b.family && self.layer == b.layer && self.wide == b.wide {
            let count = (self.count + b.count) % 4;
            if count == 0 {
                Cancellation::NoMove
            } else {
                Cancellation::OneMove(CubeMove { count, ..self })
            }
        } else {
            Cancellation::TwoMove(self, b)
        }
    }
}

impl std::fmt::Display for CubeMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.layer > 0 {
            write!(f, "{}", self.layer + 1)?;
        }
        write!(f, "{}", self.family)?;
        if self.wide {
            write!(f, "w")?;
        }
        match self.count {
            1 => Ok(()),
            3 => write!(f, "'"),
            c => write!(f, "{c}"),
        }
    }
}

// Printing moves as notation is much more readable than the derived debug output.
impl std::fmt::Debug for CubeMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

/// Create a move by specifying a move family and move count, e.g. `mv!(R, 3)` for `R'`. Write
/// `mv!(R w, 2)` for the wide move `Rw2`.
#[macro_export]
macro_rules! mv {
    ($family:ident, $count:expr) => {
        $crate::cube::moves::CubeMove::new($crate::cube::moves::MoveFamily::$family, $count)
    };
    ($family:ident w, $count:expr) => {
        $crate::cube::moves::CubeMove::wide($crate::cube::moves::MoveFamily::$family, $count)
    };
}

/// A move that cannot be made on a particular cube.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Slice moves need a middle layer that is not an outer layer.
    #[error("{0} moves need a middle layer, which a {1}x{1}x{1} cube does not have")]
    SliceNeedsCenter(MoveFamily, usize),
    /// The move turns a layer deeper than the cube has.
    #[error("layer {layer} of {family} does not exist on a {size}x{size}x{size} cube")]
    LayerOutOfRange {
        /// The family of the move.
        family: MoveFamily,
        /// The deepest layer the move would turn.
        layer: usize,
        /// The dimension of the cube.
        size: usize,
    },
    /// Only face turns can be wide.
    #[error("{0} moves cannot be wide")]
    WideNotAllowed(MoveFamily),
    /// Slice moves and rotations always turn the layers they are defined by.
    #[error("{0} moves cannot be given an inner layer")]
    InnerLayerNotAllowed(MoveFamily),
    /// The move is not 1, 2 or 3 quarter turns.
    #[error("a move must be 1, 2 or 3 quarter turns, got {0}")]
    InvalidCount(u8),
}

impl Cube {
    /// Apply an algorithm to a cube. Every move is checked before any is made, so on error the
    /// cube is left as it was.
    pub fn apply_moves(&mut self, mvs: &MoveSequence<CubeMove>) -> Result<(), MoveError> {
        for mv in mvs.iter() {
            mv.layers(self.size)?;
        }
        for &mv in mvs.iter() {
            self.apply_move(mv)?;
        }
        Ok(())
    }

    /// Apply a move to a cube.
    pub fn apply_move(&mut self, mv: CubeMove) -> Result<(), MoveError> {
        self.apply_move_with(mv, ApplyStrategy::default())
    }

    /// Apply a move to a cube, writing the stickers with the given strategy.
    pub fn apply_move_with(
        &mut self,
        mv: CubeMove,
        strategy: ApplyStrategy,
    ) -> Result<(), MoveError> {
        self.apply_move_cached(mv, PermutationCache::global(), strategy)
    }

    /// Apply a move to a cube, taking permutations from the given cache instead of the shared
    /// one.
    pub fn apply_move_cached(
        &mut self,
        mv: CubeMove,
        cache: &PermutationCache,
        strategy: ApplyStrategy,
    ) -> Result<(), MoveError> {
        let layers = mv.layers(self.size)?;
        trace!("applying {mv} to layers {layers:?} of a {0}x{0}x{0} cube", self.size);
        for layer in layers {
            let perm = cache.get(PermKey {
                size: self.size,
                family: mv.family,
                layer,
                quarter_turns: mv.count,
            });
            self.apply_permutation(&perm, strategy);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::Color;
    use crate::moves::Move;

    use proptest::collection::vec;
    use proptest::prelude::*;

    prop_compose! {
        /// Any move that can be made on a cube of at least 3x3x3.
        fn any_move()(
            family in any::<MoveFamily>(),
            wide in any::<bool>(),
            count in 1..=3u8,
        ) -> CubeMove {
            CubeMove {
                family,
                layer: 0,
                wide: wide && family.kind() == MoveKind::Face,
                count,
            }
        }
    }

    #[test]
    fn b_loop() {
        for n in 2..=6 {
            let mut cube = Cube::new(n);
            for _ in 0..4 {
                cube.apply_move(mv!(B, 1)).unwrap();
            }
            assert!(cube.is_solved());
        }
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        for n in 2..=5 {
            for family in MoveFamily::ARRAY {
                if family.kind() == MoveKind::Slice && n < 3 {
                    continue;
                }
                let mut scrambled = Cube::new(n);
                for mv in [mv!(R, 1), mv!(U, 2), mv!(F, 3), mv!(L w, 1), mv!(D, 1)] {
                    scrambled.apply_move(mv).unwrap();
                }
                let mut cube = scrambled.clone();
                for _ in 0..4 {
                    cube.apply_move(CubeMove::new(family, 1)).unwrap();
                }
                assert_eq!(cube, scrambled, "{family} on {n}x{n}x{n}");
            }
        }
    }

    #[test]
    fn r_moves_front_to_up() {
        let mut cube = Cube::new(3);
        cube.apply_move(mv!(R, 1)).unwrap();
        for row in 0..3 {
            assert_eq!(cube.sticker(Face::U, row, 2), Color::Blue);
            assert_eq!(cube.sticker(Face::B, row, 0), Color::Yellow);
            assert_eq!(cube.sticker(Face::D, row, 2), Color::Green);
            assert_eq!(cube.sticker(Face::F, row, 2), Color::White);
            assert_eq!(cube.sticker(Face::U, row, 1), Color::Yellow);
        }
        assert_eq!(cube.face(Face::R), &[Color::Red; 9]);
        assert_eq!(cube.face(Face::L), &[Color::Orange; 9]);
    }

    #[test]
    fn u_moves_front_to_left() {
        let mut cube = Cube::new(3);
        cube.apply_move(mv!(U, 1)).unwrap();
        for col in 0..3 {
            assert_eq!(cube.sticker(Face::L, 0, col), Color::Blue);
            assert_eq!(cube.sticker(Face::B, 0, col), Color::Orange);
            assert_eq!(cube.sticker(Face::R, 0, col), Color::Green);
            assert_eq!(cube.sticker(Face::F, 0, col), Color::Red);
        }
        assert_eq!(cube.face(Face::D), &[Color::White; 9]);
    }

    #[test]
    fn wide_and_inner_layers_on_4x4() {
        let mut wide = Cube::new(4);
        wide.apply_move(mv!(R w, 1)).unwrap();
        let mut layered = Cube::new(4);
        layered.apply_move(mv!(R, 1)).unwrap();
        layered.apply_move(CubeMove::inner(MoveFamily::R, 1, 1)).unwrap();
        assert_eq!(wide, layered);

        // The two left columns of the front are untouched, the two right ones came from D.
        for row in 0..4 {
            assert_eq!(wide.sticker(Face::F, row, 0), Color::Blue);
            assert_eq!(wide.sticker(Face::F, row, 1), Color::Blue);
            assert_eq!(wide.sticker(Face::F, row, 2), Color::White);
            assert_eq!(wide.sticker(Face::F, row, 3), Color::White);
        }
    }

    #[test]
    fn slice_on_3x3() {
        let mut cube = Cube::new(3);
        cube.apply_move(mv!(M, 1)).unwrap();
        // M follows L: the U centre column moves to F.
        for row in 0..3 {
            assert_eq!(cube.sticker(Face::F, row, 1), Color::Yellow);
            assert_eq!(cube.sticker(Face::F, row, 0), Color::Blue);
        }
        assert!(!cube.is_solved());
    }

    #[test]
    fn slice_is_rotation_minus_faces() {
        // M turns like L, so on a 3x3x3 it is x' R L'.
        let mut slice = Cube::new(3);
        slice.apply_move(mv!(M, 1)).unwrap();
        let mut composed = Cube::new(3);
        for mv in [mv!(X, 3), mv!(R, 1), mv!(L, 3)] {
            composed.apply_move(mv).unwrap();
        }
        assert_eq!(slice, composed);
    }

    #[test]
    fn rotations_keep_cube_solved() {
        for n in 2..=5 {
            for family in [MoveFamily::X, MoveFamily::Y, MoveFamily::Z] {
                let mut cube = Cube::new(n);
                cube.apply_move(CubeMove::new(family, 1)).unwrap();
                assert!(cube.is_solved());
                assert_ne!(cube, Cube::new(n));
            }
        }
        let mut cube = Cube::new(3);
        cube.apply_move(mv!(X, 1)).unwrap();
        assert_eq!(cube.face(Face::U), &[Color::Blue; 9]);
        assert_eq!(cube.face(Face::R), &[Color::Red; 9]);
    }

    #[test]
    fn rejected_moves() {
        let mut cube = Cube::new(2);
        assert_eq!(
            cube.apply_move(mv!(M, 1)),
            Err(MoveError::SliceNeedsCenter(MoveFamily::M, 2))
        );
        assert_eq!(
            cube.apply_move(CubeMove {
                family: MoveFamily::R,
                layer: 1,
                wide: true,
                count: 1
            }),
            Err(MoveError::LayerOutOfRange {
                family: MoveFamily::R,
                layer: 2,
                size: 2
            })
        );
        assert_eq!(
            cube.apply_move(mv!(X w, 1)),
            Err(MoveError::WideNotAllowed(MoveFamily::X))
        );
        assert_eq!(
            cube.apply_move(CubeMove::inner(MoveFamily::E, 1, 1)),
            Err(MoveError::InnerLayerNotAllowed(MoveFamily::E))
        );
        assert_eq!(
            cube.apply_move(mv!(R, 4)),
            Err(MoveError::InvalidCount(4))
        );
        assert_eq!(
            MoveError::SliceNeedsCenter(MoveFamily::S, 2).to_string(),
            "S moves need a middle layer, which a 2x2x2 cube does not have"
        );
        assert!(cube.is_solved());
    }

    #[test]
    fn failed_sequence_changes_nothing() {
        let mut cube = Cube::new(2);
        let alg = MoveSequence(vec![mv!(R, 1), mv!(U, 1), mv!(E, 1)]);
        assert!(cube.apply_moves(&alg).is_err());
        assert!(cube.is_solved());
    }

    #[test]
    fn display() {
        assert_eq!(mv!(R, 1).to_string(), "R");
        assert_eq!(mv!(U, 3).to_string(), "U'");
        assert_eq!(mv!(F, 2).to_string(), "F2");
        assert_eq!(mv!(L w, 3).to_string(), "Lw'");
        assert_eq!(mv!(Y, 2).to_string(), "y2");
        assert_eq!(CubeMove::inner(MoveFamily::R, 2, 1).to_string(), "3R");
        assert_eq!(format!("{:?}", mv!(S, 3)), "S'");
        assert_eq!(MoveFamily::from(Face::B).to_string(), "B");
        assert_eq!(MoveFamily::from_letter('z'), Some(MoveFamily::Z));
    }

    proptest! {
        #[test]
        fn inverse_apply(mvs in vec(any_move(), 50..80).prop_map(MoveSequence), n in 3..6usize) {
            let mut cube = Cube::new(n);
            cube.apply_moves(&mvs).unwrap();
            cube.apply_moves(&mvs.inverse()).unwrap();
            prop_assert!(cube.is_solved());
            prop_assert_eq!(cube, Cube::new(n));
        }

        #[test]
        fn move_then_inverse(mv in any_move(), n in 3..6usize, setup in vec(any_move(), 0..10)) {
            let mut cube = Cube::new(n);
            cube.apply_moves(&MoveSequence(setup)).unwrap();
            let before = cube.clone();
            cube.apply_move(mv).unwrap();
            cube.apply_move(mv.inverse()).unwrap();
            prop_assert_eq!(cube, before);
        }

        #[test]
        fn strategies_agree(mvs in vec(any_move(), 0..30), n in 3..6usize) {
            let mut scatter = Cube::new(n);
            let mut in_place = Cube::new(n);
            for &mv in &mvs {
                scatter.apply_move_with(mv, ApplyStrategy::Scatter).unwrap();
                in_place.apply_move_with(mv, ApplyStrategy::InPlace).unwrap();
            }
            prop_assert_eq!(scatter, in_place);
        }

        #[test]
        fn colour_counts_preserved(mvs in vec(any_move(), 0..30), n in 3..6usize) {
            let mut cube = Cube::new(n);
            cube.apply_moves(&MoveSequence(mvs)).unwrap();
            prop_assert_eq!(cube.color_counts(), [n * n; 6]);
        }

        #[test]
        fn cancel_same_moves(mvs in vec(any_move(), 0..20).prop_map(MoveSequence)) {
            let cancelled = mvs.clone().cancel();
            prop_assert!(cancelled.len() <= mvs.len());
            let mut a = Cube::new(4);
            a.apply_moves(&mvs).unwrap();
            let mut b = Cube::new(4);
            b.apply_moves(&cancelled).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn cancel_idempotent(mvs in vec(any_move(), 0..20).prop_map(MoveSequence)) {
            let cancelled = mvs.clone().cancel();
            prop_assert_eq!(cancelled.clone().cancel(), cancelled);
        }

        #[test]
        fn invert_cancels(mvs in vec(any_move(), 0..20).prop_map(MoveSequence)) {
            let cancelled = mvs.clone().cancel();
            prop_assert!(cancelled.clone().append(cancelled.inverse()).cancel().is_empty());
        }
    }
}
