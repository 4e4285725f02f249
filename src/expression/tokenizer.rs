//! Boundary expression tokenizer.
//!
//! An expression is a chain of geometry components separated by dashes,
//! e.g. `46 27 18 N 006 37 35 E - BORDER(CH) - 46 26 45 N 006 43 33 E`.
//! Dashes inside parentheses belong to a component's parameter list and
//! never split.

/// Errors that can occur when splitting an expression into tokens.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenizeError {
    /// Parentheses do not balance across the expression.
    #[error("unbalanced parentheses in expression \"{0}\"")]
    UnbalancedParentheses(String),
    /// A delimiter produced an empty token.
    #[error("empty component at position {position} in expression \"{expression}\"")]
    EmptyToken { expression: String, position: usize },
}

/// Splits an expression into trimmed component tokens.
///
/// The delimiter is a dash at parenthesis depth zero; surrounding
/// whitespace is trimmed from every token. Token order is the winding
/// order of the resulting polygon.
pub fn tokenize(expression: &str) -> Result<Vec<String>, TokenizeError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut depth: u32 = 0;

    for c in expression.chars() {
        match c {
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| TokenizeError::UnbalancedParentheses(expression.to_string()))?;
                current.push(c);
            }
            '-' if depth == 0 => {
                tokens.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    if depth != 0 {
        return Err(TokenizeError::UnbalancedParentheses(expression.to_string()));
    }
    tokens.push(current);

    let tokens: Vec<String> = tokens.into_iter().map(|t| t.trim().to_string()).collect();
    if let Some(position) = tokens.iter().position(|t| t.is_empty()) {
        return Err(TokenizeError::EmptyToken {
            expression: expression.to_string(),
            position,
        });
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_token() {
        let tokens = tokenize("46 27 18 N 006 37 35 E").unwrap();
        assert_eq!(tokens, vec!["46 27 18 N 006 37 35 E"]);
    }

    #[test]
    fn test_splits_and_trims() {
        let tokens = tokenize("46 27 18 N 006 37 35 E - BORDER(CH) - 46 26 45 N 006 43 33 E")
            .unwrap();
        assert_eq!(
            tokens,
            vec![
                "46 27 18 N 006 37 35 E",
                "BORDER(CH)",
                "46 26 45 N 006 43 33 E",
            ]
        );
    }

    #[test]
    fn test_preserves_written_order() {
        let tokens = tokenize("a - b - c").unwrap();
        assert_eq!(tokens, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_dash_inside_parentheses_does_not_split() {
        let tokens = tokenize("ARC(46 00 00 N 006 00 00 E, 5.0, cw-x) - b").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], "ARC(46 00 00 N 006 00 00 E, 5.0, cw-x)");
    }

    #[test]
    fn test_unclosed_parenthesis() {
        let result = tokenize("BORDER(CH - 46 26 45 N 006 43 33 E");
        assert!(matches!(
            result,
            Err(TokenizeError::UnbalancedParentheses(_))
        ));
    }

    #[test]
    fn test_stray_closing_parenthesis() {
        let result = tokenize("BORDER CH) - 46 26 45 N 006 43 33 E");
        assert!(matches!(
            result,
            Err(TokenizeError::UnbalancedParentheses(_))
        ));
    }

    #[test]
    fn test_empty_token_between_delimiters() {
        let result = tokenize("a -  - b");
        assert!(matches!(
            result,
            Err(TokenizeError::EmptyToken { position: 1, .. })
        ));
    }

    #[test]
    fn test_empty_expression() {
        let result = tokenize("");
        assert!(matches!(
            result,
            Err(TokenizeError::EmptyToken { position: 0, .. })
        ));
    }
}
