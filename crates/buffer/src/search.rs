//! Literal, case-sensitive substring search.

use std::fmt;

/// Outcome of a search or replace, rendered as a status prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// Match at a 1-based line and column
    At { line: usize, column: usize },
    NotFound,
    /// A match exists but the requested one past it does not
    NoFurtherMatches,
}

impl SearchStatus {
    /// Status for a match at 0-based (x, y)
    pub fn at(x: usize, y: usize) -> Self {
        SearchStatus::At {
            line: y + 1,
            column: x + 1,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, SearchStatus::At { .. })
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStatus::At { line, column } => write!(f, "[At: {}:{}]: ", line, column),
            SearchStatus::NotFound => write!(f, "[Not found]: "),
            SearchStatus::NoFurtherMatches => write!(f, "[No further matches]: "),
        }
    }
}

/// Find `what` in `line` at or after code-point offset `from`.
///
/// Returns the code-point offset of the match. An empty query never matches.
pub fn find_in_line(line: &[char], what: &[char], from: usize) -> Option<usize> {
    if what.is_empty() || what.len() > line.len() {
        return None;
    }
    (from..=line.len() - what.len()).find(|&i| line[i..i + what.len()] == *what)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(SearchStatus::at(0, 1).to_string(), "[At: 2:1]: ");
        assert_eq!(SearchStatus::NotFound.to_string(), "[Not found]: ");
        assert_eq!(
            SearchStatus::NoFurtherMatches.to_string(),
            "[No further matches]: "
        );
        assert!(SearchStatus::at(3, 3).is_match());
        assert!(!SearchStatus::NotFound.is_match());
    }

    #[test]
    fn test_find_in_line() {
        let line = chars("abcabc");
        assert_eq!(find_in_line(&line, &chars("bc"), 0), Some(1));
        assert_eq!(find_in_line(&line, &chars("bc"), 2), Some(4));
        assert_eq!(find_in_line(&line, &chars("bc"), 5), None);
        assert_eq!(find_in_line(&line, &chars("abc"), 3), Some(3));
    }

    #[test]
    fn test_find_is_case_sensitive() {
        assert_eq!(find_in_line(&chars("Hello"), &chars("hello"), 0), None);
    }

    #[test]
    fn test_find_uses_code_point_offsets() {
        let line = chars("héllo wörld");
        assert_eq!(find_in_line(&line, &chars("wö"), 0), Some(6));
    }

    #[test]
    fn test_find_edge_cases() {
        assert_eq!(find_in_line(&chars("abc"), &[], 0), None);
        assert_eq!(find_in_line(&chars("ab"), &chars("abc"), 0), None);
        assert_eq!(find_in_line(&chars("abc"), &chars("c"), 10), None);
    }
}
