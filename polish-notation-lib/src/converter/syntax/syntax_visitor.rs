use crate::converter::operator::{BinaryOperator, UnaryOperator};
use crate::converter::syntax::expression_tree::{Node, Numeric};

/// If a method is not implemented, the default implementation will continue in
/// a pre-order traversal of the tree.
pub(crate) trait SyntaxVisitor: Sized {
    fn visit_number(&mut self, _value: Numeric) {}
    fn visit_identifier(&mut self, _name: &str) {}
    fn visit_binary_operation(
        &mut self,
        _operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        walk_binary_operation(self, left_operand, right_operand)
    }
    fn visit_unary_operation(&mut self, _operator: &UnaryOperator, operand: &Node) {
        walk_unary_operation(self, operand)
    }
    fn visit_assignment(&mut self, _target: &str, value: &Node) {
        walk_assignment(self, value)
    }
}

pub(crate) fn walk_binary_operation(
    visitor: &mut impl SyntaxVisitor,
    left_operand: &Node,
    right_operand: &Node,
) {
    left_operand.accept(visitor);
    right_operand.accept(visitor);
}

pub(crate) fn walk_unary_operation(visitor: &mut impl SyntaxVisitor, operand: &Node) {
    operand.accept(visitor);
}

pub(crate) fn walk_assignment(visitor: &mut impl SyntaxVisitor, value: &Node) {
    value.accept(visitor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::operator::BinaryOperator;

    fn create_complex_tree() -> Node {
        let a = Node::new_identifier("a".into());
        let b = Node::new_identifier("b".into());
        let c = Node::new_identifier("c".into());
        let d = Node::new_identifier("d".into());
        let second_plus = Node::new_binary_operation(BinaryOperator::Add, b, c);
        let star = Node::new_binary_operation(BinaryOperator::Multiply, second_plus, d);
        Node::new_binary_operation(BinaryOperator::Add, a, star)
    }

    struct PrePostPrintVisitor {
        prints: Vec<String>,
    }

    impl SyntaxVisitor for PrePostPrintVisitor {
        fn visit_number(&mut self, value: Numeric) {
            self.prints.push(format!("{}", value))
        }
        fn visit_identifier(&mut self, name: &str) {
            self.prints.push(name.to_string())
        }
        fn visit_binary_operation(
            &mut self,
            operator: &BinaryOperator,
            left_operand: &Node,
            right_operand: &Node,
        ) {
            self.prints.push(format!("{}", operator));
            walk_binary_operation(self, left_operand, right_operand);
            self.prints.push(format!("exit {}", operator));
        }
        fn visit_assignment(&mut self, target: &str, value: &Node) {
            self.prints.push(format!("{} =", target));
            walk_assignment(self, value);
            self.prints.push(format!("exit {} =", target));
        }
    }

    #[test]
    fn walk_tree_prints_all_nodes_in_tree_in_pre_and_post_orders() {
        let root = create_complex_tree();
        let mut visitor = PrePostPrintVisitor { prints: vec![] };
        root.accept(&mut visitor);
        assert_eq!(
            visitor.prints,
            ["+", "a", "*", "+", "b", "c", "exit +", "d", "exit *", "exit +",]
        )
    }

    #[test]
    fn walk_assignment_descends_into_the_assigned_value() {
        let value = Node::new_binary_operation(
            BinaryOperator::Add,
            Node::new_identifier("a".into()),
            Node::new_integer(1),
        );
        let root = Node::new_assignment("result".into(), value);
        let mut visitor = PrePostPrintVisitor { prints: vec![] };
        root.accept(&mut visitor);
        assert_eq!(
            visitor.prints,
            ["result =", "+", "a", "1", "exit +", "exit result =",]
        )
    }
}
