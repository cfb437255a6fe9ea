//! Ring generation. Turning one layer of the cube moves the stickers on the four faces around it in
//! a single cycle; a ring lists those stickers in cycle order.
//!
//! The rings are described by `RINGS`: for every face, the four segments of the ring listed in the
//! order stickers travel during one clockwise quarter turn of that face. A sticker at position `j`
//! of one segment moves to position `j` of the next segment, so a quarter turn always shifts the
//! ring by exactly one segment, whatever the dimension.

use super::Face;
use crate::coord::Coord;

/// Whether a segment runs along a row or down a column of its face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    Row,
    Col,
}

/// Which row/column a segment uses for layer `k`: `Near` is index `k`, `Far` is `n - 1 - k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Depth {
    Near,
    Far,
}

/// The direction a segment is walked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Walk {
    Forward,
    Reverse,
}

#[derive(Debug, Clone, Copy)]
struct Segment {
    face: Face,
    line: Line,
    depth: Depth,
    walk: Walk,
}

const fn seg(face: Face, line: Line, depth: Depth, walk: Walk) -> Segment {
    Segment {
        face,
        line,
        depth,
        walk,
    }
}

use Depth::{Far, Near};
use Line::{Col, Row};
use Walk::{Forward as Fwd, Reverse as Rev};

/// Ring segments for each turned face, indexed by `Face`.
const RINGS: [[Segment; 4]; 6] = [
    // U
    [
        seg(Face::F, Row, Near, Fwd),
        seg(Face::L, Row, Near, Fwd),
        seg(Face::B, Row, Near, Fwd),
        seg(Face::R, Row, Near, Fwd),
    ],
    // R
    [
        seg(Face::F, Col, Far, Fwd),
        seg(Face::U, Col, Far, Fwd),
        seg(Face::B, Col, Near, Rev),
        seg(Face::D, Col, Far, Fwd),
    ],
    // F
    [
        seg(Face::U, Row, Far, Fwd),
        seg(Face::R, Col, Near, Fwd),
        seg(Face::D, Row, Near, Rev),
        seg(Face::L, Col, Far, Rev),
    ],
    // D
    [
        seg(Face::F, Row, Far, Fwd),
        seg(Face::R, Row, Far, Fwd),
        seg(Face::B, Row, Far, Fwd),
        seg(Face::L, Row, Far, Fwd),
    ],
    // L
    [
        seg(Face::U, Col, Near, Fwd),
        seg(Face::F, Col, Near, Fwd),
        seg(Face::D, Col, Near, Fwd),
        seg(Face::B, Col, Far, Rev),
    ],
    // B
    [
        seg(Face::U, Row, Near, Fwd),
        seg(Face::L, Col, Near, Rev),
        seg(Face::D, Row, Far, Rev),
        seg(Face::R, Col, Far, Fwd),
    ],
];

impl Segment {
    fn coords(self, n: usize, k: usize) -> impl Iterator<Item = Coord> {
        let fixed = match self.depth {
            Near => k,
            Far => n - 1 - k,
        };
        (0..n).map(move |j| {
            let i = match self.walk {
                Fwd => j,
                Rev => n - 1 - j,
            };
            match self.line {
                Row => Coord::new(self.face, fixed, i),
                Col => Coord::new(self.face, i, fixed),
            }
        })
    }
}

/// The ring of stickers moved by turning layer `k` (0 is the outer layer) of the given face on a
/// cube of dimension `n`. The result has length `4 * n`.
pub(crate) fn ring(face: Face, n: usize, k: usize) -> Vec<Coord> {
    assert!(k < n, "layer {k} does not exist on a {n}x{n}x{n} cube");
    RINGS[face as usize]
        .iter()
        .flat_map(|s| s.coords(n, k))
        .collect()
}
