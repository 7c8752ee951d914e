use crate::converter::error::ConvertError;
use crate::converter::operator::BinaryOperator;
use crate::converter::syntax::expression_tree::Node;

/// One record of a triple sequence. Operands are either leaf lexemes or
/// `"(i)"` references to the implicit result of the i:th earlier record
/// (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    pub operator: BinaryOperator,
    pub first: String,
    pub second: String,
}

/// One record of a quadruple sequence. Unlike a triple, the result is stored
/// in an explicitly named temporary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quadruple {
    pub operator: BinaryOperator,
    pub first: String,
    pub second: String,
    pub result: String,
}

/// Mints `T1, T2, …` temporary names. Scoped to a single conversion call so
/// every conversion starts counting from `T1` again.
struct TemporaryAllocator {
    next: usize,
}

impl TemporaryAllocator {
    fn new() -> TemporaryAllocator {
        TemporaryAllocator { next: 1 }
    }

    fn allocate(&mut self) -> String {
        let name = format!("T{}", self.next);
        self.next += 1;
        name
    }
}

/// Flattens an expression tree into triples, visiting operands before their
/// operator (post-order). A lone leaf produces no records.
pub fn ast_to_triples(node: &Node) -> Result<Vec<Triple>, ConvertError> {
    let mut triples = Vec::new();
    linearize_triple(node, &mut triples)?;
    Ok(triples)
}

fn linearize_triple(node: &Node, triples: &mut Vec<Triple>) -> Result<String, ConvertError> {
    match node {
        Node::Number(value) => Ok(value.to_string()),
        Node::Identifier(name) => Ok(name.clone()),
        Node::BinaryOperation {
            operator,
            left_operand,
            right_operand,
        } => {
            let first = linearize_triple(left_operand, triples)?;
            let second = linearize_triple(right_operand, triples)?;
            triples.push(Triple {
                operator: *operator,
                first,
                second,
            });
            Ok(format!("({})", triples.len()))
        }
        Node::UnaryOperation { .. } => Err(ConvertError::UnsupportedNode {
            node: "unary operation",
            notation: "three-address",
        }),
        Node::Assignment { .. } => Err(ConvertError::UnsupportedNode {
            node: "assignment",
            notation: "three-address",
        }),
    }
}

/// Flattens an expression tree into quadruples. Each operation stores its
/// result in a fresh temporary, which its parent then consumes by name.
pub fn ast_to_quadruples(node: &Node) -> Result<Vec<Quadruple>, ConvertError> {
    let mut quadruples = Vec::new();
    let mut temporaries = TemporaryAllocator::new();
    linearize_quadruple(node, &mut quadruples, &mut temporaries)?;
    Ok(quadruples)
}

fn linearize_quadruple(
    node: &Node,
    quadruples: &mut Vec<Quadruple>,
    temporaries: &mut TemporaryAllocator,
) -> Result<String, ConvertError> {
    match node {
        Node::Number(value) => Ok(value.to_string()),
        Node::Identifier(name) => Ok(name.clone()),
        Node::BinaryOperation {
            operator,
            left_operand,
            right_operand,
        } => {
            let first = linearize_quadruple(left_operand, quadruples, temporaries)?;
            let second = linearize_quadruple(right_operand, quadruples, temporaries)?;
            let result = temporaries.allocate();
            quadruples.push(Quadruple {
                operator: *operator,
                first,
                second,
                result: result.clone(),
            });
            Ok(result)
        }
        Node::UnaryOperation { .. } => Err(ConvertError::UnsupportedNode {
            node: "unary operation",
            notation: "three-address",
        }),
        Node::Assignment { .. } => Err(ConvertError::UnsupportedNode {
            node: "assignment",
            notation: "three-address",
        }),
    }
}
