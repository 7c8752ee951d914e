use crate::converter::error::LexError;
use crate::converter::operator::BinaryOperator;
use crate::converter::token::Token;

/// Splits an expression into tokens.
///
/// The scanner tries a fixed set of patterns at each position: number
/// (digits with an optional fractional part), identifier, operator symbol,
/// `=`, parentheses, and whitespace (skipped). Anything else is reported as
/// an unrecognized run of characters together with its byte offset.
///
/// # Arguments
///
/// * `expression`: The text-representation of an infix expression.
///
/// returns: The tokens of the expression, in source order.
///
/// # Examples
///
/// ```
/// use polish_notation::converter::lexer::tokenize;
///
/// let tokens = tokenize("A + 2.5")?;
/// assert_eq!(tokens.len(), 3);
/// # Ok::<(), polish_notation::converter::error::LexError>(())
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, LexError> {
    if expression.trim().is_empty() {
        return Err(LexError::EmptyInput);
    }

    let characters: Vec<(usize, char)> = expression.char_indices().collect();
    let mut tokens = Vec::new();
    let mut index = 0;

    while index < characters.len() {
        let (position, character) = characters[index];
        if matches!(character, ' ' | '\t') {
            index += 1;
        } else if character.is_ascii_digit() {
            let (lexeme, consumed) = scan_number(&characters[index..]);
            tokens.push(Token::Number(lexeme));
            index += consumed;
        } else if character.is_ascii_alphabetic() || character == '_' {
            let (lexeme, consumed) = scan_identifier(&characters[index..]);
            tokens.push(Token::Identifier(lexeme));
            index += consumed;
        } else if let Some(operator) = BinaryOperator::from_symbol(character) {
            tokens.push(Token::Operator(operator));
            index += 1;
        } else if character == '=' {
            tokens.push(Token::Equal);
            index += 1;
        } else if character == '(' {
            tokens.push(Token::OpenParenthesis);
            index += 1;
        } else if character == ')' {
            tokens.push(Token::CloseParenthesis);
            index += 1;
        } else {
            // Report the whole run of unmatchable characters, not just the first.
            let text = characters[index..]
                .iter()
                .map(|&(_, unmatched)| unmatched)
                .take_while(|&unmatched| !starts_token(unmatched))
                .collect();
            return Err(LexError::UnrecognizedCharacter { text, position });
        }
    }

    Ok(tokens)
}

fn scan_number(characters: &[(usize, char)]) -> (String, usize) {
    let mut lexeme = String::new();
    let mut consumed = 0;
    while consumed < characters.len() && characters[consumed].1.is_ascii_digit() {
        lexeme.push(characters[consumed].1);
        consumed += 1;
    }
    // A decimal point only belongs to the number when digits follow it.
    if consumed + 1 < characters.len()
        && characters[consumed].1 == '.'
        && characters[consumed + 1].1.is_ascii_digit()
    {
        lexeme.push('.');
        consumed += 1;
        while consumed < characters.len() && characters[consumed].1.is_ascii_digit() {
            lexeme.push(characters[consumed].1);
            consumed += 1;
        }
    }
    (lexeme, consumed)
}

fn scan_identifier(characters: &[(usize, char)]) -> (String, usize) {
    let mut lexeme = String::new();
    let mut consumed = 0;
    while consumed < characters.len()
        && (characters[consumed].1.is_ascii_alphanumeric() || characters[consumed].1 == '_')
    {
        lexeme.push(characters[consumed].1);
        consumed += 1;
    }
    (lexeme, consumed)
}

fn starts_token(character: char) -> bool {
    character.is_ascii_digit()
        || character.is_ascii_alphabetic()
        || character == '_'
        || BinaryOperator::from_symbol(character).is_some()
        || matches!(character, '=' | '(' | ')' | ' ' | '\t')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::operator::BinaryOperator;
    use pretty_assertions::assert_eq;

    #[test]
    fn simple_expression_returns_tokens_in_source_order() {
        let tokens = tokenize("A + B * 2").unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::Identifier("A".to_string()),
                Token::Operator(BinaryOperator::Add),
                Token::Identifier("B".to_string()),
                Token::Operator(BinaryOperator::Multiply),
                Token::Number("2".to_string()),
            ]
        );
    }

    #[test]
    fn parenthesised_expression_returns_parenthesis_tokens() {
        let tokens = tokenize("(x - 1) / 2").unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::OpenParenthesis,
                Token::Identifier("x".to_string()),
                Token::Operator(BinaryOperator::Subtract),
                Token::Number("1".to_string()),
                Token::CloseParenthesis,
                Token::Operator(BinaryOperator::Divide),
                Token::Number("2".to_string()),
            ]
        );
    }

    #[test]
    fn decimal_number_is_scanned_as_one_token() {
        let tokens = tokenize("3.25 + _rate2").unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::Number("3.25".to_string()),
                Token::Operator(BinaryOperator::Add),
                Token::Identifier("_rate2".to_string()),
            ]
        );
    }

    #[test]
    fn trailing_decimal_point_is_not_part_of_the_number() {
        let error = tokenize("1.").unwrap_err();

        assert_eq!(
            error,
            LexError::UnrecognizedCharacter {
                text: ".".to_string(),
                position: 1,
            }
        );
    }

    #[test]
    fn assignment_symbol_is_lexed_as_equal_token() {
        let tokens = tokenize("x = 1").unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::Identifier("x".to_string()),
                Token::Equal,
                Token::Number("1".to_string()),
            ]
        );
    }

    #[test]
    fn empty_expression_returns_error() {
        assert_eq!(tokenize("").unwrap_err(), LexError::EmptyInput);
        assert_eq!(tokenize("   \t ").unwrap_err(), LexError::EmptyInput);
    }

    #[test]
    fn unrecognized_character_reports_text_and_byte_position() {
        let error = tokenize("A + B & C").unwrap_err();

        assert_eq!(
            error,
            LexError::UnrecognizedCharacter {
                text: "&".to_string(),
                position: 6,
            }
        );
    }

    #[test]
    fn run_of_unrecognized_characters_is_reported_as_one_error() {
        let error = tokenize("A @# C").unwrap_err();

        assert_eq!(
            error,
            LexError::UnrecognizedCharacter {
                text: "@#".to_string(),
                position: 2,
            }
        );
    }

    #[test]
    fn unrecognized_character_at_end_of_input_is_still_reported() {
        let error = tokenize("A + B $").unwrap_err();

        assert_eq!(
            error,
            LexError::UnrecognizedCharacter {
                text: "$".to_string(),
                position: 6,
            }
        );
    }

    #[test]
    fn tokenizing_twice_returns_the_same_tokens() {
        let first = tokenize("A + B").unwrap();
        let second = tokenize("A + B").unwrap();

        assert_eq!(first, second);
    }
}
