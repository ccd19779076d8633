//! Expression tree vocabulary.
//!
//! Trees are immutable values built bottom-up. Equality, hashing and
//! ordering are structural: two independently built trees of the same
//! shape and leaf values are interchangeable.

mod compare;
mod compound;
mod flatten;
mod raw;

#[cfg(test)]
mod tests;

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

// re-exports
pub use compare::{CompareOp, Comparison};
pub use compound::{Compound, LogicOp};
pub use raw::RawExpression;

///
/// Node
///

#[derive(Clone, Debug, Deserialize, Eq, From, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Node {
    Comparison(Comparison),
    Compound(Compound),
    Expression(RawExpression),
}

impl Node {
    /// Dispatch key used by the renderer protocol.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Comparison(_) => NodeKind::Comparison,
            Self::Compound(compound) => NodeKind::of(compound.op()),
            Self::Expression(_) => NodeKind::Expression,
        }
    }

    #[must_use]
    pub const fn as_comparison(&self) -> Option<&Comparison> {
        match self {
            Self::Comparison(cmp) => Some(cmp),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_compound(&self) -> Option<&Compound> {
        match self {
            Self::Compound(compound) => Some(compound),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_expression(&self) -> Option<&RawExpression> {
        match self {
            Self::Expression(raw) => Some(raw),
            _ => None,
        }
    }

    /// True when this node is a compound of the given operator.
    #[must_use]
    pub fn is_compound(&self, op: LogicOp) -> bool {
        self.as_compound().is_some_and(|c| c.op() == op)
    }

    /// Number of nodes in the tree, this one included.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Self::Compound(compound) => 1 + compound.iter().map(Self::size).sum::<usize>(),
            Self::Comparison(_) | Self::Expression(_) => 1,
        }
    }
}

///
/// NodeKind
///
/// One entry per renderer capability.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum NodeKind {
    #[display("comparison")]
    Comparison,
    #[display("AND")]
    And,
    #[display("OR")]
    Or,
    #[display("NOT")]
    Not,
    #[display("expression")]
    Expression,
}

impl NodeKind {
    #[must_use]
    pub const fn of(op: LogicOp) -> Self {
        match op {
            LogicOp::And => Self::And,
            LogicOp::Or => Self::Or,
            LogicOp::Not => Self::Not,
        }
    }
}
