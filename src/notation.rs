//! Reading moves written in the usual cube notation, e.g. `R U R' U'` or `Rw2 M' y`.
//!
//! Each whitespace separated token is a move letter, optionally followed by `w` (face turns only)
//! and then optionally by `2` or `'`. Face turns may also start with a 1-based layer number, so
//! `2R` turns the layer under the R face and `3Rw` turns the third and fourth layers. Tokens are
//! read by a small state machine, one character at a time.

use crate::cube::moves::{CubeMove, MoveFamily, MoveKind};
use crate::moves::MoveSequence;

use std::str::FromStr;
use thiserror::Error;

/// A token that is not a valid move.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid move `{token}`: {kind}")]
pub struct ParseMoveError {
    /// The whole offending token.
    pub token: String,
    /// What is wrong with it.
    pub kind: ParseMoveErrorKind,
}

/// The ways a move token can be malformed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseMoveErrorKind {
    /// There was no move letter.
    #[error("missing move")]
    Empty,
    /// The token does not start with a move letter.
    #[error("`{0}` is not a move")]
    UnknownMove(char),
    /// `w` followed a letter that has no wide form.
    #[error("`{0}` moves cannot be wide")]
    WideNotAllowed(char),
    /// A layer number on a slice move or rotation.
    #[error("`{0}` moves cannot be given a layer")]
    LayerNotAllowed(char),
    /// A layer number of zero, or one too large to store.
    #[error("invalid layer number")]
    InvalidLayer,
    /// A second `w`, `2` or `'`.
    #[error("`{0}` repeats a modifier")]
    RepeatedModifier(char),
    /// Anything else after the move.
    #[error("unexpected `{0}`")]
    UnexpectedChar(char),
}

#[derive(Debug, Clone, Copy)]
enum State {
    Start,
    /// Read some digits of a 1-based layer number.
    Layer(usize),
    Letter(MoveFamily),
    Wide(MoveFamily),
    Done,
}

/// Read a single move token. Whitespace is not allowed.
fn parse_token(token: &str) -> Result<CubeMove, ParseMoveError> {
    let err = |kind| ParseMoveError {
        token: token.to_owned(),
        kind,
    };

    let mut state = State::Start;
    let mut mv = CubeMove::new(MoveFamily::R, 1);
    for c in token.chars() {
        state = match (state, c) {
            (State::Start | State::Layer(_), '0'..='9') => {
                let depth = match state {
                    State::Layer(depth) => depth,
                    _ => 0,
                };
                let depth = depth
                    .checked_mul(10)
                    .and_then(|d| d.checked_add(c as usize - '0' as usize))
                    .ok_or_else(|| err(ParseMoveErrorKind::InvalidLayer))?;
                State::Layer(depth)
            }
            (State::Start | State::Layer(_), c) => {
                let family = MoveFamily::from_letter(c)
                    .ok_or_else(|| err(ParseMoveErrorKind::UnknownMove(c)))?;
                if let State::Layer(depth) = state {
                    if family.kind() != MoveKind::Face {
                        return Err(err(ParseMoveErrorKind::LayerNotAllowed(c)));
                    }
                    mv.layer = depth
                        .checked_sub(1)
                        .ok_or_else(|| err(ParseMoveErrorKind::InvalidLayer))?;
                }
                mv.family = family;
                State::Letter(family)
            }
            (State::Letter(family), 'w') => {
                if family.kind() != MoveKind::Face {
                    return Err(err(ParseMoveErrorKind::WideNotAllowed(family.letter())));
                }
                mv.wide = true;
                State::Wide(family)
            }
            (State::Letter(_) | State::Wide(_), '2') => {
                mv.count = 2;
                State::Done
            }
            (State::Letter(_) | State::Wide(_), '\'') => {
                mv.count = 3;
                State::Done
            }
            (State::Wide(_), 'w') | (State::Done, '2' | '\'') => {
                return Err(err(ParseMoveErrorKind::RepeatedModifier(c)))
            }
            (_, c) => return Err(err(ParseMoveErrorKind::UnexpectedChar(c))),
        };
    }

    match state {
        State::Start | State::Layer(_) => Err(err(ParseMoveErrorKind::Empty)),
        _ => Ok(mv),
    }
}

/// Read a whitespace separated sequence of moves. Empty input is the empty sequence.
pub fn parse_moves(s: &str) -> Result<MoveSequence<CubeMove>, ParseMoveError> {
    s.split_whitespace().map(parse_token).collect()
}

/// Parse a sequence, cancel it as far as possible, and write it back out.
///
/// ```rust
/// assert_eq!(cfen_cube::notation::simplify("R U U' R L R").unwrap(), "R' L");
/// ```
pub fn simplify(s: &str) -> Result<String, ParseMoveError> {
    Ok(parse_moves(s)?.cancel().to_string())
}

impl FromStr for CubeMove {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_token(s)
    }
}

impl FromStr for MoveSequence<CubeMove> {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_moves(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mv;

    use proptest::collection::vec;
    use proptest::prelude::*;

    fn kind(s: &str) -> ParseMoveErrorKind {
        parse_moves(s).unwrap_err().kind
    }

    #[test]
    fn basic_moves() {
        assert_eq!(
            parse_moves("R U R' U'").unwrap(),
            MoveSequence(vec![mv!(R, 1), mv!(U, 1), mv!(R, 3), mv!(U, 3)])
        );
        assert_eq!(
            parse_moves("  Rw2\tM'\n x y2 z' Fw E S2 ").unwrap(),
            MoveSequence(vec![
                mv!(R w, 2),
                mv!(M, 3),
                mv!(X, 1),
                mv!(Y, 2),
                mv!(Z, 3),
                mv!(F w, 1),
                mv!(E, 1),
                mv!(S, 2),
            ])
        );
        assert_eq!("Dw'".parse::<CubeMove>(), Ok(mv!(D w, 3)));
    }

    #[test]
    fn layer_prefix() {
        assert_eq!(
            parse_moves("2R 3Uw' 1F2 10B").unwrap(),
            MoveSequence(vec![
                CubeMove::inner(MoveFamily::R, 1, 1),
                CubeMove {
                    family: MoveFamily::U,
                    layer: 2,
                    wide: true,
                    count: 3,
                },
                mv!(F, 2),
                CubeMove::inner(MoveFamily::B, 9, 1),
            ])
        );
        let alg = MoveSequence(vec![CubeMove::inner(MoveFamily::R, 1, 1)]);
        assert_eq!(alg.to_string(), "2R");
        assert_eq!(alg.to_string().parse::<MoveSequence<CubeMove>>(), Ok(alg));
    }

    #[test]
    fn empty_input() {
        assert!(parse_moves("").unwrap().is_empty());
        assert!(parse_moves(" \t\n ").unwrap().is_empty());
        assert_eq!(
            "".parse::<CubeMove>().unwrap_err().kind,
            ParseMoveErrorKind::Empty
        );
    }

    #[test]
    fn malformed() {
        assert_eq!(kind("R Q"), ParseMoveErrorKind::UnknownMove('Q'));
        assert_eq!(kind("r"), ParseMoveErrorKind::UnknownMove('r'));
        assert_eq!(kind("X"), ParseMoveErrorKind::UnknownMove('X'));
        assert_eq!(kind("2Q"), ParseMoveErrorKind::UnknownMove('Q'));
        assert_eq!(kind("2M"), ParseMoveErrorKind::LayerNotAllowed('M'));
        assert_eq!(kind("3x'"), ParseMoveErrorKind::LayerNotAllowed('x'));
        assert_eq!(kind("0R"), ParseMoveErrorKind::InvalidLayer);
        assert_eq!(kind("99999999999999999999999R"), ParseMoveErrorKind::InvalidLayer);
        assert_eq!(kind("R 2"), ParseMoveErrorKind::Empty);
        assert_eq!(kind("R2R"), ParseMoveErrorKind::UnexpectedChar('R'));
        assert_eq!(kind("Mw"), ParseMoveErrorKind::WideNotAllowed('M'));
        assert_eq!(kind("xw"), ParseMoveErrorKind::WideNotAllowed('x'));
        assert_eq!(kind("R2'"), ParseMoveErrorKind::RepeatedModifier('\''));
        assert_eq!(kind("R'2"), ParseMoveErrorKind::RepeatedModifier('2'));
        assert_eq!(kind("R''"), ParseMoveErrorKind::RepeatedModifier('\''));
        assert_eq!(kind("R22"), ParseMoveErrorKind::RepeatedModifier('2'));
        assert_eq!(kind("Rww"), ParseMoveErrorKind::RepeatedModifier('w'));
        assert_eq!(kind("RU"), ParseMoveErrorKind::UnexpectedChar('U'));
        assert_eq!(kind("R3"), ParseMoveErrorKind::UnexpectedChar('3'));
        assert_eq!(kind("R2w"), ParseMoveErrorKind::UnexpectedChar('w'));

        let e = parse_moves("R U F2x").unwrap_err();
        assert_eq!(e.token, "F2x");
        assert_eq!(e.to_string(), "invalid move `F2x`: unexpected `x`");
    }

    #[test]
    fn simplification() {
        assert_eq!(simplify("R R R R").unwrap(), "");
        assert_eq!(simplify("R U2 U2 R'").unwrap(), "");
        assert_eq!(simplify("Rw R Rw").unwrap(), "Rw2 R");
        assert_eq!(simplify("x M x'").unwrap(), "M");
        assert!(simplify("R Uw2'").is_err());
    }

    prop_compose! {
        fn any_parsable()(
            family in any::<MoveFamily>(),
            layer in 0..12usize,
            wide in any::<bool>(),
            count in 1..=3u8,
        ) -> CubeMove {
            let face = family.kind() == MoveKind::Face;
            CubeMove {
                family,
                layer: if face { layer } else { 0 },
                wide: wide && face,
                count,
            }
        }
    }

    proptest! {
        #[test]
        fn display_parses_back(mvs in vec(any_parsable(), 0..20)) {
            let alg = MoveSequence(mvs);
            prop_assert_eq!(parse_moves(&alg.to_string()).unwrap(), alg);
        }
    }
}
