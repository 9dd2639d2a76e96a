//! Word-boundary, character-class and bracket search over line content.
//!
//! Word motion is defined by a fixed separator set rather than Unicode word
//! classes: any code point in [`WORD_SEPARATORS`] ends a word. Runs of
//! whitespace collapse into a single hop.

use super::{LineSource, Position};

/// Characters that terminate a word
pub const WORD_SEPARATORS: &str = " \t\"'()[]{}<>,.;:!?+-*/=&|^%$#@~`\\";

/// Separators that collapse into one hop when repeated
pub const WHITESPACE: &str = " \t";

/// Paired delimiters recognized by bracket matching (opener, closer)
pub const BRACKET_PAIRS: [(char, char); 3] = [('(', ')'), ('{', '}'), ('[', ']')];

pub fn is_separator(ch: char) -> bool {
    WORD_SEPARATORS.contains(ch)
}

pub fn is_whitespace(ch: char) -> bool {
    WHITESPACE.contains(ch)
}

/// First index of a char from `set`, ignoring the first char of `chars`
pub fn find_any_of(chars: &[char], set: &str) -> Option<usize> {
    chars
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, ch)| set.contains(**ch))
        .map(|(i, _)| i)
}

/// Last index of a char from `set`, ignoring the first and the last char
pub fn find_any_of_last(chars: &[char], set: &str) -> Option<usize> {
    let end = chars.len().checked_sub(1)?;
    (1..end).rev().find(|&i| set.contains(chars[i]))
}

/// Next word boundary on one line, starting from `x`.
///
/// Lands on the next separator after `x`; a whitespace separator is followed
/// to the end of its run. Returns `None` when the rest of the line holds no
/// boundary, in which case the caller crosses to the next line.
pub fn word_forward(chars: &[char], x: usize) -> Option<usize> {
    let rest = chars.get(x..)?;
    let mut next = x + find_any_of(rest, WORD_SEPARATORS)?;
    if is_whitespace(chars[next]) {
        while next + 1 < chars.len() && is_whitespace(chars[next + 1]) {
            next += 1;
        }
    }
    Some(next)
}

/// Previous word start on one line, starting from `x`.
///
/// Lands just after the nearest separator that lies at least two code points
/// before `x`. Single steps onto whitespace repeat, so a run of blanks is one
/// hop. Returns `None` when no separator precedes `x`.
pub fn word_backward(chars: &[char], x: usize) -> Option<usize> {
    let x = x.min(chars.len());
    let step = |from: usize| find_any_of_last(&chars[..from], WORD_SEPARATORS).map(|i| i + 1);

    let mut prev = x;
    let mut current = step(x)?;
    while current > 0 && prev - current == 1 && is_whitespace(chars[current]) {
        prev = current;
        current = step(current).unwrap_or(0);
    }
    Some(current)
}

/// Find the delimiter matching the bracket at (x, y).
///
/// At end of line the char before `x` is used. Openers scan forward and
/// closers scan backward, counting nesting depth.
pub fn find_matching<S: LineSource + ?Sized>(source: &S, x: usize, y: usize) -> Option<Position> {
    let chars = source.line_chars(y);
    let x = if x == chars.len() { x.checked_sub(1)? } else { x };
    let current = *chars.get(x)?;
    let (open, close) = BRACKET_PAIRS
        .iter()
        .copied()
        .find(|(open, close)| *open == current || *close == current)?;

    let mut depth = 0usize;
    if current == open {
        let mut from = x + 1;
        for yy in y..source.line_count() {
            let line = if yy == y { chars.clone() } else { source.line_chars(yy) };
            for (xx, ch) in line.iter().enumerate().skip(from) {
                if *ch == close {
                    if depth == 0 {
                        return Some(Position::at(xx, yy));
                    }
                    depth -= 1;
                } else if *ch == open {
                    depth += 1;
                }
            }
            from = 0;
        }
    } else {
        for yy in (0..=y).rev() {
            let line = if yy == y { chars.clone() } else { source.line_chars(yy) };
            let end = if yy == y { x } else { line.len() };
            for xx in (0..end).rev() {
                let ch = line[xx];
                if ch == open {
                    if depth == 0 {
                        return Some(Position::at(xx, yy));
                    }
                    depth -= 1;
                } else if ch == close {
                    depth += 1;
                }
            }
        }
    }
    None
}

/// Find any char of `set` from (x, y), inclusive of the start position.
///
/// Scans forward across following lines, or backward across preceding ones.
pub fn find_global<S: LineSource + ?Sized>(
    source: &S,
    backwards: bool,
    set: &str,
    x: usize,
    y: usize,
) -> Option<Position> {
    if backwards {
        for yy in (0..=y.min(source.line_count().saturating_sub(1))).rev() {
            let line = source.line_chars(yy);
            let end = if yy == y { (x + 1).min(line.len()) } else { line.len() };
            if let Some(xx) = (0..end).rev().find(|&i| set.contains(line[i])) {
                return Some(Position::at(xx, yy));
            }
        }
    } else {
        for yy in y..source.line_count() {
            let line = source.line_chars(yy);
            let start = if yy == y { x } else { 0 };
            if let Some(xx) = (start..line.len()).find(|&i| set.contains(line[i])) {
                return Some(Position::at(xx, yy));
            }
        }
    }
    None
}
