//! Run-length coding of a single CFEN face, e.g. `Y3R2?4`.

use super::{CfenError, CfenSticker};

/// Append the run-length coding of `stickers` to `out`. Runs of one sticker have no count.
pub(super) fn encode(stickers: &[CfenSticker], out: &mut String) {
    let mut i = 0;
    while i < stickers.len() {
        let s = stickers[i];
        let run = stickers[i..].iter().take_while(|&&t| t == s).count();
        out.push(s.letter());
        if run > 1 {
            out.push_str(&run.to_string());
        }
        i += run;
    }
}

#[derive(Debug, Clone, Copy)]
enum State {
    /// Waiting for a sticker letter.
    Letter,
    /// Read a letter and possibly some digits of its count, which started at `start`.
    Run {
        sticker: CfenSticker,
        count: Option<usize>,
        start: usize,
    },
}

/// Decode one face into `(sticker, run length)` pairs. `offset` is where `text` starts in the
/// whole CFEN string, so that errors can point at the right character.
pub(super) fn decode(text: &str, offset: usize) -> Result<Vec<(CfenSticker, usize)>, CfenError> {
    let mut runs = Vec::new();
    let mut state = State::Letter;

    for (i, c) in text.char_indices() {
        let pos = offset + i;
        state = match (state, c.to_digit(10)) {
            (State::Run { sticker, count, start }, Some(d)) => {
                let count = count
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|n| n.checked_add(d as usize))
                    .ok_or(CfenError::CountOverflow { position: start })?;
                State::Run {
                    sticker,
                    count: Some(count),
                    start,
                }
            }
            (State::Letter, Some(_)) => {
                return Err(CfenError::UnexpectedChar { found: c, position: pos })
            }
            (state, None) => {
                if let State::Run { sticker, count, start } = state {
                    runs.push((sticker, finish(count, start)?));
                }
                let sticker = CfenSticker::from_letter(c)
                    .ok_or(CfenError::UnexpectedChar { found: c, position: pos })?;
                State::Run {
                    sticker,
                    count: None,
                    start: pos + c.len_utf8(),
                }
            }
        };
    }

    if let State::Run { sticker, count, start } = state {
        runs.push((sticker, finish(count, start)?));
    }
    Ok(runs)
}

fn finish(count: Option<usize>, start: usize) -> Result<usize, CfenError> {
    match count {
        None => Ok(1),
        Some(0) => Err(CfenError::ZeroCount { position: start }),
        Some(n) => Ok(n),
    }
}
