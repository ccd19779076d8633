use crate::node::{Compound, LogicOp, Node};
use std::ops::{BitAnd, BitOr, BitXor, Not};

///
/// Binary combinators
///
/// `a.and(b)` and `a & b` are the same operation. Two compounds of the
/// combining operator merge into one wider compound; any other pairing
/// yields a plain two-child compound:
///
///     AND(a, b) & AND(c, d)  →  AND(a, b, c, d)
///     AND(a, b) & OR(c, d)   →  AND(AND(a, b), OR(c, d))
///     AND(a, b) & c          →  AND(AND(a, b), c)
///
/// Full recursive merging is available through `Node::flatten`.
///

impl Node {
    #[must_use]
    pub fn and(self, rhs: impl Into<Self>) -> Self {
        combine(LogicOp::And, self, rhs.into())
    }

    #[must_use]
    pub fn or(self, rhs: impl Into<Self>) -> Self {
        combine(LogicOp::Or, self, rhs.into())
    }

    /// Exclusive or, expanded to `(self & !rhs) | (rhs & !self)`.
    #[must_use]
    pub fn xor(self, rhs: impl Into<Self>) -> Self {
        let rhs = rhs.into();
        let left = self.clone().and(rhs.clone().negate());
        let right = rhs.and(self.negate());

        left.or(right)
    }

    #[must_use]
    pub fn negate(self) -> Self {
        Self::Compound(Compound::new_unchecked(LogicOp::Not, vec![self]))
    }
}

fn combine(op: LogicOp, lhs: Node, rhs: Node) -> Node {
    let children = match (lhs, rhs) {
        (Node::Compound(left), Node::Compound(right)) if left.op() == op && right.op() == op => {
            let (_, mut children) = left.into_parts();
            let (_, tail) = right.into_parts();
            children.extend(tail);

            tracing::trace!(op = %op, children = children.len(), "merged like-kind compounds");
            children
        }
        (left, right) => vec![left, right],
    };

    Node::Compound(Compound::new_unchecked(op, children))
}

//
// Operators
//

impl BitAnd for Node {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitAnd for &Node {
    type Output = Node;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.clone().and(rhs.clone())
    }
}

impl BitOr for Node {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl BitOr for &Node {
    type Output = Node;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.clone().or(rhs.clone())
    }
}

impl BitXor for Node {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.xor(rhs)
    }
}

impl BitXor for &Node {
    type Output = Node;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.clone().xor(rhs.clone())
    }
}

impl Not for Node {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl Not for &Node {
    type Output = Node;

    fn not(self) -> Self::Output {
        self.clone().negate()
    }
}
