use crate::converter::error::ConvertError;
use crate::converter::syntax::expression_tree::Node;
use crate::converter::token::Token;

/// Linearizes an expression tree into prefix (Polish) order: operator first,
/// then both operands. Precedence is implied by position, so the output
/// needs no parentheses.
pub fn prefix_from_ast(node: &Node) -> Result<Vec<Token>, ConvertError> {
    match node {
        Node::Number(value) => Ok(vec![Token::Number(value.to_string())]),
        Node::Identifier(name) => Ok(vec![Token::Identifier(name.clone())]),
        Node::BinaryOperation {
            operator,
            left_operand,
            right_operand,
        } => {
            let mut tokens = vec![Token::Operator(*operator)];
            tokens.extend(prefix_from_ast(left_operand)?);
            tokens.extend(prefix_from_ast(right_operand)?);
            Ok(tokens)
        }
        Node::UnaryOperation { .. } => Err(ConvertError::UnsupportedNode {
            node: "unary operation",
            notation: "prefix",
        }),
        Node::Assignment { .. } => Err(ConvertError::UnsupportedNode {
            node: "assignment",
            notation: "prefix",
        }),
    }
}
