use crate::converter::operator::{BinaryOperator, UnaryOperator};
use crate::converter::syntax::syntax_visitor::{
    walk_assignment, walk_binary_operation, walk_unary_operation, SyntaxVisitor,
};
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::num::ParseFloatError;
use std::str;

/// A numeric literal value.
///
/// Integers and floats are kept apart so that a value prints back the way it
/// was written; arithmetic always happens in `f64` regardless.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Numeric {
    Integer(i64),
    Float(f64),
}

impl Numeric {
    pub fn as_f64(&self) -> f64 {
        match self {
            Numeric::Integer(value) => *value as f64,
            Numeric::Float(value) => *value,
        }
    }
}

impl str::FromStr for Numeric {
    type Err = ParseFloatError;

    fn from_str(lexeme: &str) -> Result<Numeric, Self::Err> {
        if lexeme.contains('.') {
            return Ok(Numeric::Float(lexeme.parse()?));
        }
        match lexeme.parse::<i64>() {
            Ok(value) => Ok(Numeric::Integer(value)),
            // Literals too large for an integer still parse, as floats.
            Err(_) => Ok(Numeric::Float(lexeme.parse()?)),
        }
    }
}

impl Display for Numeric {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Integer(value) => write!(f, "{}", value),
            Numeric::Float(value) => write!(f, "{}", value),
        }
    }
}

/// A part of an expression tree.
#[derive(Clone, PartialEq)]
pub enum Node {
    // Terminal symbols (leaves)
    Number(Numeric),
    Identifier(String),
    // Non-terminal symbols (non-leaves)
    BinaryOperation {
        operator: BinaryOperator,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
    },
    UnaryOperation {
        operator: UnaryOperator,
        operand: Box<Node>,
    },
    Assignment {
        target: String,
        value: Box<Node>,
    },
}

impl Node {
    pub fn new_number(value: Numeric) -> Node {
        Node::Number(value)
    }

    pub fn new_integer(value: i64) -> Node {
        Node::Number(Numeric::Integer(value))
    }

    pub fn new_float(value: f64) -> Node {
        Node::Number(Numeric::Float(value))
    }

    pub fn new_identifier(name: String) -> Node {
        Node::Identifier(name)
    }

    pub fn new_binary_operation(
        operator: BinaryOperator,
        left_operand: Node,
        right_operand: Node,
    ) -> Node {
        Node::BinaryOperation {
            operator,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
        }
    }

    pub fn new_unary_operation(operator: UnaryOperator, operand: Node) -> Node {
        Node::UnaryOperation {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn new_assignment(target: String, value: Node) -> Node {
        Node::Assignment {
            target,
            value: Box::new(value),
        }
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Node::Number(_) | Node::Identifier(_))
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        match self {
            Node::Number(value) => visitor.visit_number(*value),
            Node::Identifier(name) => visitor.visit_identifier(name),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => visitor.visit_binary_operation(operator, left_operand, right_operand),
            Node::UnaryOperation { operator, operand } => {
                visitor.visit_unary_operation(operator, operand)
            }
            Node::Assignment { target, value } => visitor.visit_assignment(target, value),
        }
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("expression".into()),
        };
        self.accept(&mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        match write_tree(&visitor.builder.build(), &mut buffer) {
            Ok(_) => {}
            Err(_) => return Err(fmt::Error),
        }
        let text = match std::str::from_utf8(&buffer) {
            Ok(text) => text,
            Err(_) => return Err(fmt::Error),
        };
        f.write_str(text)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Number(value) => write!(f, "{:?}", value),
            Node::Identifier(name) => write!(f, "{:?}", name),
            Node::BinaryOperation { operator, .. } => write!(f, "{:?}", operator),
            Node::UnaryOperation { operator, .. } => write!(f, "{:?}", operator),
            Node::Assignment { target, .. } => write!(f, "Assignment({:?})", target),
        }
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_number(&mut self, value: Numeric) {
        self.builder.add_empty_child(format!("{}", value));
    }
    fn visit_identifier(&mut self, name: &str) {
        self.builder.add_empty_child(name.to_string());
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.builder.begin_child(format!("{}", operator));
        walk_binary_operation(self, left_operand, right_operand);
        self.builder.end_child();
    }
    fn visit_unary_operation(&mut self, operator: &UnaryOperator, operand: &Node) {
        self.builder.begin_child(format!("{}", operator));
        walk_unary_operation(self, operand);
        self.builder.end_child();
    }
    fn visit_assignment(&mut self, target: &str, value: &Node) {
        self.builder.begin_child(format!("{} =", target));
        walk_assignment(self, value);
        self.builder.end_child();
    }
}
