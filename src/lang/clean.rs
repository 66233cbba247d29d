use super::token::*;
use log::debug;

/// ## Peephole cleanup
///
/// Rewrites redundant runs of terminals into shorter equivalents.
/// Dropped tokens become `Empty` so indices stay stable. A token is
/// examined again after every rewrite it triggers, so a second pass over
/// cleaned tokens changes nothing.

pub fn clean(tokens: &mut [Token]) {
    let mut rewrites = 0;
    for index in 0..tokens.len() {
        while rewrite(tokens, index) {
            rewrites += 1;
        }
    }
    debug!("cleanup rewrote {} tokens", rewrites);
}

/// Returns true when anything changed, so `index` is examined again.
fn rewrite(tokens: &mut [Token], index: usize) -> bool {
    use Lexeme::*;
    let lexeme = tokens[index].lexeme;
    match lexeme {
        ReverseStack => match prev_useful(tokens, index) {
            Some(prev) if tokens[prev].lexeme == SortStackAscending => {
                tokens[prev].lexeme = Empty;
                tokens[index].lexeme = SortStackDescending;
                true
            }
            Some(prev) if tokens[prev].lexeme == ReverseStack => {
                tokens[prev].lexeme = Empty;
                tokens[index].lexeme = Empty;
                true
            }
            _ => false,
        },
        Invert => match run_of(tokens, index, 3) {
            Some(run) => {
                tokens[run[1]].lexeme = Empty;
                tokens[run[2]].lexeme = Empty;
                true
            }
            None => false,
        },
        LogicalAndStackPair | LogicalAndStackWhole => match prev_useful(tokens, index) {
            Some(prev)
                if tokens[prev].lexeme == LogicalAndStackPair
                    || (lexeme == LogicalAndStackWhole
                        && tokens[prev].lexeme == LogicalAndStackWhole) =>
            {
                tokens[prev].lexeme = Empty;
                true
            }
            _ => false,
        },
        AddOne | SubtractOne => collapse(tokens, index, 8),
        MultiplyTwo | DivideTwo => collapse(tokens, index, 3),
        AddEight => match prev_useful(tokens, index) {
            Some(prev) if tokens[prev].lexeme == SetZero => {
                tokens[prev].lexeme = Empty;
                tokens[index].lexeme = SetOneByte;
                true
            }
            _ => false,
        },
        ShuffleStack | SortStackAscending | SortStackDescending => {
            match prev_useful(tokens, index).map(|prev| (prev, tokens[prev].lexeme)) {
                Some((prev, ShuffleStack))
                | Some((prev, SortStackAscending))
                | Some((prev, SortStackDescending))
                | Some((prev, ReverseStack)) => {
                    tokens[prev].lexeme = Empty;
                    true
                }
                _ => false,
            }
        }
        _ => false,
    }
}

/// Indices of `len` consecutive useful tokens sharing the lexeme at `index`,
/// starting with `index` and walking backwards.
fn run_of(tokens: &[Token], index: usize, len: usize) -> Option<Vec<usize>> {
    let lexeme = tokens[index].lexeme;
    let mut run = vec![index];
    while run.len() < len {
        let prev = prev_useful(tokens, run[run.len() - 1])?;
        if tokens[prev].lexeme != lexeme {
            return None;
        }
        run.push(prev);
    }
    Some(run)
}

/// Folds a run of unit steps into the matching eight-step.
fn collapse(tokens: &mut [Token], index: usize, len: usize) -> bool {
    use Lexeme::*;
    let eight = match tokens[index].lexeme {
        AddOne => AddEight,
        SubtractOne => SubtractEight,
        MultiplyTwo => MultiplyEight,
        DivideTwo => DivideEight,
        _ => return false,
    };
    match run_of(tokens, index, len) {
        Some(run) => {
            for &earlier in &run[1..] {
                tokens[earlier].lexeme = Empty;
            }
            tokens[index].lexeme = eight;
            true
        }
        None => false,
    }
}
