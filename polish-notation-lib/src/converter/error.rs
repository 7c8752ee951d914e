use crate::converter::operator::BinaryOperator;
use crate::converter::token::Token;
use itertools::Itertools;
use thiserror::Error;

/// Errors produced while scanning raw text into tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("expression is empty")]
    EmptyInput,
    #[error("unrecognized character '{text}' at position {position}")]
    UnrecognizedCharacter { text: String, position: usize },
}

/// Errors produced while building a syntax tree out of tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expression is empty")]
    EmptyInput,
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("missing closing parenthesis")]
    MissingClosingParenthesis,
    #[error("unexpected token '{token}'")]
    UnexpectedToken { token: Token },
    #[error("unexpected tokens after end of expression: {}", .tokens.iter().format(" "))]
    TrailingTokens { tokens: Vec<Token> },
    #[error("assignment target must be a single identifier")]
    InvalidAssignmentTarget,
}

/// Errors produced while converting between notations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("unbalanced parentheses in expression")]
    UnbalancedParenthesis,
    #[error("token '{token}' is not valid in an arithmetic expression")]
    InvalidToken { token: String },
    #[error("{node} nodes cannot be represented in {notation} notation")]
    UnsupportedNode {
        node: &'static str,
        notation: &'static str,
    },
}

/// Errors produced while evaluating a postfix expression.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("operator '{operator}' requires two operands")]
    InsufficientOperands { operator: BinaryOperator },
    #[error("division by zero")]
    DivisionByZero,
    #[error("variable '{name}' has no value bound to it")]
    UndefinedVariable { name: String },
    #[error("invalid token '{token}' in postfix expression")]
    InvalidToken { token: String },
    #[error("malformed postfix expression")]
    MalformedExpression,
    #[error("missing values for variables: {}", .names.join(", "))]
    MissingVariables { names: Vec<String> },
}

/// Umbrella error for entry points that span several pipeline stages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_error_names_the_offending_text_and_position() {
        let error = LexError::UnrecognizedCharacter {
            text: "&".to_string(),
            position: 6,
        };
        assert_eq!(error.to_string(), "unrecognized character '&' at position 6");
    }

    #[test]
    fn trailing_tokens_error_lists_the_leftover_tokens() {
        let error = ParseError::TrailingTokens {
            tokens: vec![
                Token::Identifier("B".to_string()),
                Token::Number("2".to_string()),
            ],
        };
        assert_eq!(
            error.to_string(),
            "unexpected tokens after end of expression: B 2"
        );
    }

    #[test]
    fn missing_variables_error_lists_every_name() {
        let error = EvalError::MissingVariables {
            names: vec!["B".to_string(), "C".to_string()],
        };
        assert_eq!(error.to_string(), "missing values for variables: B, C");
    }
}
