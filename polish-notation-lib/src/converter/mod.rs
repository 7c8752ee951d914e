pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod postfix_converter;
pub mod prefix_converter;
pub mod syntax;
pub mod three_address;
pub mod token;
pub mod variables;

use crate::converter::error::Error;
use crate::converter::token::Token;
use string_builder::Builder;
use syntax::expression_tree::Node;

/// Parses the given input string into an equivalent expression tree,
/// which is easier to manipulate than the original string.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The root of the equivalent expression tree.
///
/// # Examples
///
/// ```
/// use polish_notation::converter::parse_expression;
/// # use polish_notation::converter::error::Error;
///
/// # fn main() -> Result<(), Error> {
/// let expression = "A + B * C";
/// let tree = parse_expression(expression)?;
/// print!("{}", tree);
/// # Ok(()) }
/// ```
pub fn parse_expression(expression: &str) -> Result<Node, Error> {
    let tokens = lexer::tokenize(expression)?;
    let tree = parser::parse_tokens(tokens)?;
    Ok(tree)
}

/// Converts the given infix expression into postfix (reverse Polish)
/// notation, working directly on the token stream with the shunting-yard
/// algorithm.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The postfix notation, space-separated.
///
/// # Examples
///
/// ```
/// use polish_notation::converter::convert_to_postfix;
/// # use polish_notation::converter::error::Error;
///
/// # fn main() -> Result<(), Error> {
/// let postfix = convert_to_postfix("A + B * C")?;
/// assert_eq!(postfix, "A B C * +");
/// # Ok(()) }
/// ```
pub fn convert_to_postfix(expression: &str) -> Result<String, Error> {
    let tokens = lexer::tokenize(expression)?;
    let postfix_tokens = postfix_converter::infix_to_postfix(tokens)?;
    Ok(tokens_to_string(&postfix_tokens))
}

/// Converts the given infix expression into prefix (Polish) notation by
/// parsing it and traversing the tree operator-first.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The prefix notation, space-separated.
///
/// # Examples
///
/// ```
/// use polish_notation::converter::convert_to_prefix;
/// # use polish_notation::converter::error::Error;
///
/// # fn main() -> Result<(), Error> {
/// let prefix = convert_to_prefix("A + B * C")?;
/// assert_eq!(prefix, "+ A * B C");
/// # Ok(()) }
/// ```
pub fn convert_to_prefix(expression: &str) -> Result<String, Error> {
    let tree = parse_expression(expression)?;
    let prefix_tokens = prefix_converter::prefix_from_ast(&tree)?;
    Ok(tokens_to_string(&prefix_tokens))
}

/// Pretty-prints the given tokens separated by single spaces.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use polish_notation::converter::tokens_to_string;
/// use polish_notation::converter::token::Token;
///
/// let tokens = vec![
///     Token::Identifier("x".to_string()),
///     Token::Number("2".to_string()),
///     "^".parse().unwrap(),
/// ];
/// assert_eq!(tokens_to_string(&tokens), "x 2 ^");
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> String {
    let mut builder = Builder::new(tokens.len() * 2);

    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.to_string());
    }

    builder.string().unwrap_or_default()
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! debug {
    ($( $args:expr ),*) => { dbg!( $( $args ),* ); }
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! debug {
    ($( $args:expr ),*) => {()}
}
