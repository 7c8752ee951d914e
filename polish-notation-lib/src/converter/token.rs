use crate::converter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression.
///
/// Number and identifier tokens keep the lexeme exactly as it was written,
/// so converted output reproduces the user's spelling of a literal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Number(String),
    Identifier(String),
    Operator(BinaryOperator),
    Equal,
    OpenParenthesis,
    CloseParenthesis,
}

impl Token {
    /// A 'value' is a token that either represents, contains or is a numerical
    /// value. E.g. a number literal or identifier.
    pub fn is_value(&self) -> bool {
        matches!(self, Token::Number(_) | Token::Identifier(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(lexeme) => write!(f, "{}", lexeme),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::Equal => write!(f, "="),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl str::FromStr for Token {
    type Err = ();

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        let mut characters = input.chars();
        if let (Some(symbol), None) = (characters.next(), characters.next()) {
            if let Some(operator) = BinaryOperator::from_symbol(symbol) {
                return Ok(Token::Operator(operator));
            }
        }
        match input {
            "=" => Ok(Token::Equal),
            "(" => Ok(Token::OpenParenthesis),
            ")" => Ok(Token::CloseParenthesis),
            _ if is_decimal_literal(input) => Ok(Token::Number(input.to_string())),
            _ if is_identifier(input) => Ok(Token::Identifier(input.to_string())),
            _ => Err(()),
        }
    }
}

/// Whether the text is a signed or unsigned decimal literal such as
/// `42`, `-1.5` or `+0.25`.
pub(crate) fn is_decimal_literal(text: &str) -> bool {
    let unsigned = text
        .strip_prefix('-')
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text);
    let mut parts = unsigned.splitn(2, '.');
    let integral = parts.next().unwrap_or_default();
    let fractional = parts.next();
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|byte| byte.is_ascii_digit());
    all_digits(integral) && fractional.map_or(true, all_digits)
}

/// Whether the text is a valid identifier: a letter or underscore followed by
/// letters, digits or underscores.
pub(crate) fn is_identifier(text: &str) -> bool {
    let mut characters = text.chars();
    match characters.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            characters.all(|character| character.is_ascii_alphanumeric() || character == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_symbols_parse_into_operator_tokens() {
        for symbol in ["+", "-", "*", "/", "^"] {
            let token: Token = symbol.parse().unwrap();
            assert!(matches!(token, Token::Operator(_)));
            assert_eq!(token.to_string(), symbol);
        }
    }

    #[test]
    fn number_lexemes_keep_their_spelling() {
        let token: Token = "2.50".parse().unwrap();
        assert_eq!(token, Token::Number("2.50".to_string()));
        assert_eq!(token.to_string(), "2.50");
    }

    #[test]
    fn identifier_like_text_parses_into_identifier_token() {
        let token: Token = "_rate2".parse().unwrap();
        assert_eq!(token, Token::Identifier("_rate2".to_string()));
    }

    #[test]
    fn values_are_numbers_and_identifiers() {
        assert!(Token::Number("1".to_string()).is_value());
        assert!(Token::Identifier("x".to_string()).is_value());
        assert!(!Token::OpenParenthesis.is_value());
        assert!(!Token::Equal.is_value());
    }

    #[test]
    fn decimal_literal_check_accepts_signs_and_fractions() {
        for literal in ["0", "42", "-7", "+3", "1.5", "-0.25"] {
            assert!(is_decimal_literal(literal), "{literal} should be accepted");
        }
        for text in ["", "-", "1.", ".5", "1.2.3", "x", "1e5"] {
            assert!(!is_decimal_literal(text), "{text} should be rejected");
        }
    }

    #[test]
    fn identifier_check_requires_leading_letter_or_underscore() {
        assert!(is_identifier("velocity"));
        assert!(is_identifier("_hidden"));
        assert!(is_identifier("x2"));
        assert!(!is_identifier("2x"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("a-b"));
    }
}
