//! Textual sequences of naturals: `3,1,4`, `3 1 4`, or `[3, 1, 4]`.

use std::fmt::Display;

/// Error parsing a sequence literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// A token was not a natural number.
    #[error("element {position} ('{token}') is not a natural number")]
    InvalidElement {
        /// Zero-based position of the token.
        position: usize,
        /// The offending token.
        token: String,
    },

    /// An opening `[` without a closing `]`, or the reverse.
    #[error("unbalanced brackets in sequence literal")]
    UnbalancedBrackets,
}

/// Parse a comma and/or whitespace separated list of naturals.
///
/// Surrounding brackets are optional. Blank input and `[]` both parse to the
/// empty sequence.
///
/// # Errors
///
/// Returns [`SequenceError`] if brackets are unbalanced or a token is not a
/// `u64`.
pub fn parse_sequence(input: &str) -> Result<Vec<u64>, SequenceError> {
    let trimmed = input.trim();
    let body = match (trimmed.strip_prefix('['), trimmed.ends_with(']')) {
        (Some(rest), true) => rest.strip_suffix(']').unwrap_or(rest),
        (None, false) => trimmed,
        _ => return Err(SequenceError::UnbalancedBrackets),
    };

    body.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token
                .parse::<u64>()
                .map_err(|_| SequenceError::InvalidElement {
                    position,
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Render a sequence as `[a, b, c]`.
#[must_use]
pub fn format_sequence<T: Display>(seq: &[T]) -> String {
    let items: Vec<String> = seq.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commas() {
        assert_eq!(parse_sequence("3,1,4"), Ok(vec![3, 1, 4]));
    }

    #[test]
    fn parses_whitespace_and_brackets() {
        assert_eq!(parse_sequence(" [3, 1  4,1 ,5] "), Ok(vec![3, 1, 4, 1, 5]));
    }

    #[test]
    fn blank_and_empty_brackets_are_empty() {
        assert_eq!(parse_sequence(""), Ok(vec![]));
        assert_eq!(parse_sequence("   "), Ok(vec![]));
        assert_eq!(parse_sequence("[]"), Ok(vec![]));
    }

    #[test]
    fn trailing_comma_is_ignored() {
        assert_eq!(parse_sequence("1,2,"), Ok(vec![1, 2]));
    }

    #[test]
    fn rejects_negative() {
        assert_eq!(
            parse_sequence("1,-2"),
            Err(SequenceError::InvalidElement {
                position: 1,
                token: "-2".into()
            })
        );
    }

    #[test]
    fn rejects_unbalanced() {
        assert_eq!(parse_sequence("[1,2"), Err(SequenceError::UnbalancedBrackets));
        assert_eq!(parse_sequence("1,2]"), Err(SequenceError::UnbalancedBrackets));
    }

    #[test]
    fn error_message_names_token() {
        let err = parse_sequence("7 x").expect_err("x is not a number");
        assert_eq!(err.to_string(), "element 1 ('x') is not a natural number");
    }

    #[test]
    fn formats_with_brackets() {
        assert_eq!(format_sequence(&[1, 1, 3]), "[1, 1, 3]");
        assert_eq!(format_sequence::<u64>(&[]), "[]");
    }
}
