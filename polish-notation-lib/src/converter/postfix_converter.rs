use crate::converter::error::ConvertError;
use crate::converter::operator::{Associativity, BinaryOperator};
use crate::converter::syntax::expression_tree::Node;
use crate::converter::token::Token;
use std::collections::VecDeque;

/// Entries that may live on the shunting-yard operator stack.
enum StackEntry {
    Operator(BinaryOperator),
    OpenParenthesis,
}

/// Reorders infix tokens into postfix (reverse Polish) order using the
/// shunting-yard algorithm. Parentheses steer the reordering but are never
/// part of the output.
pub fn infix_to_postfix(original_tokens: Vec<Token>) -> Result<Vec<Token>, ConvertError> {
    let mut tokens: VecDeque<Token> = VecDeque::from(original_tokens);
    let mut operators: VecDeque<StackEntry> = VecDeque::new();
    let mut output: Vec<Token> = vec![];
    while let Some(token) = tokens.pop_front() {
        match token {
            Token::Number(_) | Token::Identifier(_) => output.push(token),
            Token::OpenParenthesis => operators.push_front(StackEntry::OpenParenthesis),
            Token::Operator(operator) => push_operator(&mut operators, &mut output, operator),
            Token::CloseParenthesis => {
                pop_until_open_parenthesis(&mut operators, &mut output)?
            }
            Token::Equal => {
                return Err(ConvertError::InvalidToken {
                    token: token.to_string(),
                })
            }
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn push_operator(
    operators: &mut VecDeque<StackEntry>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
) {
    loop {
        let top = match operators.front() {
            // An open parenthesis shields everything beneath it.
            None | Some(StackEntry::OpenParenthesis) => break,
            Some(StackEntry::Operator(top)) => *top,
        };
        // Equal precedence stays on the stack for a right-associative
        // incoming operator, so `^` chains group to the right.
        if !top.precedence_ge(&operator)
            || top.precedence_eq(&operator) && operator.associativity() == Associativity::Right
        {
            break;
        }
        operators.pop_front();
        output.push(Token::Operator(top));
    }

    operators.push_front(StackEntry::Operator(operator));
}

fn pop_until_open_parenthesis(
    operators: &mut VecDeque<StackEntry>,
    output: &mut Vec<Token>,
) -> Result<(), ConvertError> {
    loop {
        match operators.pop_front() {
            None => return Err(ConvertError::UnbalancedParenthesis),
            // Discard the open parenthesis.
            Some(StackEntry::OpenParenthesis) => return Ok(()),
            Some(StackEntry::Operator(operator)) => output.push(Token::Operator(operator)),
        }
    }
}

fn transfer_leftover_operators(
    operators: &mut VecDeque<StackEntry>,
    output: &mut Vec<Token>,
) -> Result<(), ConvertError> {
    while let Some(entry) = operators.pop_front() {
        match entry {
            StackEntry::OpenParenthesis => return Err(ConvertError::UnbalancedParenthesis),
            StackEntry::Operator(operator) => output.push(Token::Operator(operator)),
        }
    }
    Ok(())
}

/// Linearizes an expression tree into postfix order. The inverse of parsing:
/// operands first, operator last, no parentheses needed.
pub fn postfix_from_ast(node: &Node) -> Result<Vec<Token>, ConvertError> {
    match node {
        Node::Number(value) => Ok(vec![Token::Number(value.to_string())]),
        Node::Identifier(name) => Ok(vec![Token::Identifier(name.clone())]),
        Node::BinaryOperation {
            operator,
            left_operand,
            right_operand,
        } => {
            let mut tokens = postfix_from_ast(left_operand)?;
            tokens.extend(postfix_from_ast(right_operand)?);
            tokens.push(Token::Operator(*operator));
            Ok(tokens)
        }
        Node::UnaryOperation { .. } => Err(ConvertError::UnsupportedNode {
            node: "unary operation",
            notation: "postfix",
        }),
        Node::Assignment { .. } => Err(ConvertError::UnsupportedNode {
            node: "assignment",
            notation: "postfix",
        }),
    }
}
