use crate::converter::error::{Error, EvalError};
use crate::converter::operator::BinaryOperator;
use crate::converter::token::{is_decimal_literal, is_identifier};
use crate::converter::variables::extract_variables;
use crate::debug;
use std::collections::HashMap;

/// Evaluates a postfix expression against the given variable values.
///
/// The expression is split on whitespace and executed on a value stack:
/// operators pop two values and push their result, everything else pushes a
/// value (a bound variable or a decimal literal). Exactly one value must
/// remain at the end.
///
/// # Arguments
///
/// * `postfix`: The expression in postfix notation, e.g. `"A B +"`.
/// * `variables`: Values for the variables appearing in the expression.
///
/// returns: The numeric result of the evaluation.
///
/// # Examples
///
/// ```
/// use polish_notation::converter::evaluator::evaluate_postfix;
/// use std::collections::HashMap;
///
/// let variables = HashMap::from([("A".to_string(), 1.0), ("B".to_string(), 2.0)]);
/// let result = evaluate_postfix("A B +", &variables)?;
/// assert_eq!(result, 3.0);
/// # Ok::<(), polish_notation::converter::error::EvalError>(())
/// ```
pub fn evaluate_postfix(
    postfix: &str,
    variables: &HashMap<String, f64>,
) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::new();

    for token in postfix.split_whitespace() {
        if let Some(operator) = parse_operator(token) {
            let second = stack.pop();
            let first = stack.pop();
            let (first, second) = match (first, second) {
                (Some(first), Some(second)) => (first, second),
                _ => return Err(EvalError::InsufficientOperands { operator }),
            };
            if operator == BinaryOperator::Divide && second == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            stack.push(operator.apply(first, second));
        } else if let Some(value) = variables.get(token) {
            stack.push(*value);
        } else if is_decimal_literal(token) {
            let value = token.parse::<f64>().map_err(|_| EvalError::InvalidToken {
                token: token.to_string(),
            })?;
            stack.push(value);
        } else if is_identifier(token) {
            return Err(EvalError::UndefinedVariable {
                name: token.to_string(),
            });
        } else {
            return Err(EvalError::InvalidToken {
                token: token.to_string(),
            });
        }
    }

    if stack.len() != 1 {
        return Err(EvalError::MalformedExpression);
    }
    Ok(stack[0])
}

fn parse_operator(token: &str) -> Option<BinaryOperator> {
    let mut characters = token.chars();
    match (characters.next(), characters.next()) {
        (Some(symbol), None) => BinaryOperator::from_symbol(symbol),
        _ => None,
    }
}

/// Evaluates an infix expression by converting it to postfix first.
///
/// Every variable the expression mentions must have a value; the missing
/// ones are reported together in a single error rather than one at a time.
///
/// # Arguments
///
/// * `expression`: The expression in infix notation, e.g. `"A + B"`.
/// * `variables`: Values for the variables appearing in the expression.
///
/// returns: The numeric result of the evaluation.
///
/// # Examples
///
/// ```
/// use polish_notation::converter::evaluator::evaluate_expression;
/// use std::collections::HashMap;
///
/// let variables = HashMap::from([("A".to_string(), 1.0), ("B".to_string(), 2.0)]);
/// let result = evaluate_expression("(A + B) * 3", &variables)?;
/// assert_eq!(result, 9.0);
/// # Ok::<(), polish_notation::converter::error::Error>(())
/// ```
pub fn evaluate_expression(
    expression: &str,
    variables: &HashMap<String, f64>,
) -> Result<f64, Error> {
    let required = extract_variables(expression)?;
    let missing: Vec<String> = required
        .into_iter()
        .filter(|name| !variables.contains_key(name))
        .collect();
    if !missing.is_empty() {
        return Err(EvalError::MissingVariables { names: missing }.into());
    }

    let postfix = crate::converter::convert_to_postfix(expression)?;
    debug!(&postfix);
    let result = evaluate_postfix(&postfix, variables)?;
    Ok(result)
}
