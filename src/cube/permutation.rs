//! Sticker permutations. A permutation of a cube of dimension N is an array of length 6N² whose
//! entry `i` is the index the sticker currently at index `i` is moved to.

use super::moves::{MoveFamily, MoveKind};
use super::ring::ring;
use super::Face;
use crate::coord::sticker_index;

/// A bijection on the sticker indices of a cube.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation(Box<[usize]>);

impl Permutation {
    /// The permutation that leaves every one of `len` stickers where it is.
    pub fn identity(len: usize) -> Self {
        Permutation((0..len).collect())
    }

    /// Build the permutation for turning one layer of a cube of dimension `n` by `quarter_turns`
    /// clockwise quarter turns.
    ///
    /// `layer` is measured from the face whose ring the family uses (see `MoveFamily::ring_face`),
    /// so slice families must be given their middle layer and rotations are built one layer at a
    /// time. For face turns and rotations, the outermost layer also rotates the grid of the face
    /// it lies on, and the innermost layer rotates the grid of the opposite face the other way.
    /// Slice turns never rotate a face grid.
    ///
    /// # Panics
    /// If `layer >= n` or `quarter_turns` is not in `1..=3`.
    pub fn build(n: usize, family: MoveFamily, layer: usize, quarter_turns: u8) -> Self {
        assert!(
            (1..=3).contains(&quarter_turns),
            "{quarter_turns} is not a quarter turn count"
        );
        let q = quarter_turns as usize;
        let face = family.ring_face();
        let mut perm: Vec<usize> = (0..6 * n * n).collect();

        let indices: Vec<usize> = ring(face, n, layer)
            .into_iter()
            .map(|c| c.index(n))
            .collect();
        let shift = q * indices.len() / 4;
        for (i, &src) in indices.iter().enumerate() {
            perm[src] = indices[(i + shift) % indices.len()];
        }

        if family.kind() != MoveKind::Slice {
            if layer == 0 {
                rotate_face_grid(&mut perm, face, n, q);
            }
            if layer == n - 1 {
                rotate_face_grid(&mut perm, face.opposite(), n, 4 - q);
            }
        }

        Permutation(perm.into_boxed_slice())
    }

    /// The number of stickers this permutation acts on.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this permutation acts on no stickers at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Where the sticker at `src` is sent.
    pub fn destination(&self, src: usize) -> usize {
        self.0[src]
    }

    /// The destinations, indexed by source.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Whether every index appears exactly once as a destination.
    pub fn is_bijection(&self) -> bool {
        let mut seen = vec![false; self.len()];
        for &d in self.0.iter() {
            if d >= seen.len() || seen[d] {
                return false;
            }
            seen[d] = true;
        }
        true
    }

    /// The permutation undoing this one.
    pub fn inverse(&self) -> Permutation {
        let mut inv = vec![0; self.len()];
        for (src, &dst) in self.0.iter().enumerate() {
            inv[dst] = src;
        }
        Permutation(inv.into_boxed_slice())
    }

    /// Copy `src` into a new buffer with every element moved to its destination.
    pub(crate) fn scatter<T: Copy>(&self, src: &[T]) -> Box<[T]> {
        debug_assert_eq!(src.len(), self.len());
        let mut out: Box<[T]> = src.into();
        for (s, &d) in self.0.iter().enumerate() {
            out[d] = src[s];
        }
        out
    }

    /// Move every element of `xs` to its destination by walking each cycle once.
    pub(crate) fn permute_in_place<T>(&self, xs: &mut [T]) {
        debug_assert_eq!(xs.len(), self.len());
        let mut visited = vec![false; xs.len()];
        for start in 0..xs.len() {
            if visited[start] {
                continue;
            }
            visited[start] = true;
            // xs[start] always holds the element that belongs at the next index in the cycle.
            let mut j = self.0[start];
            while j != start {
                xs.swap(start, j);
                visited[j] = true;
                j = self.0[j];
            }
        }
    }
}

/// Send each sticker of `face` to where `q` clockwise quarter turns of the face grid take it.
fn rotate_face_grid(perm: &mut [usize], face: Face, n: usize, q: usize) {
    for row in 0..n {
        for col in 0..n {
            let (r, c) = match q % 4 {
                1 => (col, n - 1 - row),
                2 => (n - 1 - row, n - 1 - col),
                3 => (n - 1 - col, row),
                _ => (row, col),
            };
            perm[sticker_index(face, row, col, n)] = sticker_index(face, r, c, n);
        }
    }
}
