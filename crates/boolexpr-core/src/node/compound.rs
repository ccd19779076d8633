use crate::{
    error::{Arity, ExprError},
    node::Node,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// LogicOp
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum LogicOp {
    #[display("AND")]
    And,
    #[display("OR")]
    Or,
    #[display("NOT")]
    Not,
}

///
/// Compound
///
/// Internal node combining child conditions under one logical operator.
///
/// Invariants (checked by every constructor, including deserialization):
/// - AND / OR hold at least one child
/// - NOT holds exactly one child
///
/// Child order is construction order and is preserved through rendering.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(try_from = "CompoundRepr")]
pub struct Compound {
    op: LogicOp,
    children: Vec<Node>,
}

impl Compound {
    pub fn new<I>(op: LogicOp, children: I) -> Result<Self, ExprError>
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        let children: Vec<Node> = children.into_iter().map(Into::into).collect();
        if !Arity::of(op).accepts(children.len()) {
            return Err(ExprError::invalid_arity(op, children.len()));
        }

        Ok(Self { op, children })
    }

    /// Build a compound whose arity is already guaranteed by the caller.
    pub(crate) fn new_unchecked(op: LogicOp, children: Vec<Node>) -> Self {
        debug_assert!(Arity::of(op).accepts(children.len()));

        Self { op, children }
    }

    #[must_use]
    pub const fn op(&self) -> LogicOp {
        self.op
    }

    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.children.len()
    }

    /// Always false; present for clippy's `len_without_is_empty`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.children.iter()
    }

    pub(crate) fn into_parts(self) -> (LogicOp, Vec<Node>) {
        (self.op, self.children)
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

// Deserialization shadow; routed through `Compound::new` so arity holds.
#[derive(Deserialize)]
struct CompoundRepr {
    op: LogicOp,
    children: Vec<Node>,
}

impl TryFrom<CompoundRepr> for Compound {
    type Error = ExprError;

    fn try_from(repr: CompoundRepr) -> Result<Self, Self::Error> {
        Self::new(repr.op, repr.children)
    }
}
