//! Boundary expression parsing.
//!
//! Turns the raw text of a boundary description into an ordered list of
//! typed [`Component`]s: tokenize on depth-zero dashes, then classify
//! each token by its structural pattern.

mod component;
mod tokenizer;

pub use component::{parse_component, Component, ComponentError, Direction};
pub use tokenizer::{tokenize, TokenizeError};

/// Errors that can occur when parsing a full expression.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExpressionError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    #[error(transparent)]
    Component(#[from] ComponentError),
}

/// Parses a boundary expression into its ordered component sequence.
pub fn parse(expression: &str) -> Result<Vec<Component>, ExpressionError> {
    let tokens = tokenize(expression)?;
    let mut components = Vec::with_capacity(tokens.len());
    for token in &tokens {
        components.push(parse_component(token)?);
    }
    Ok(components)
}
