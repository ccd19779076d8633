//! Construction API.
//!
//! Free functions build leaves and variadic compounds; `combine` adds the
//! binary combinators and their operator forms on `Node`.

mod combine;
mod fields;


use crate::{
    error::ExprError,
    node::{CompareOp, Comparison, Compound, LogicOp, Node, RawExpression},
    value::Value,
};

// re-exports
pub use fields::Fields;

/// Equality comparison.
#[must_use]
pub fn eq(lval: impl Into<Value>, rval: impl Into<Value>) -> Node {
    compare(CompareOp::Eq, lval, rval)
}

/// Inequality comparison.
///
/// Stored as an atomic `NE` comparison, distinct from `not(eq(..))`;
/// bundled renderers emit both forms identically.
#[must_use]
pub fn ne(lval: impl Into<Value>, rval: impl Into<Value>) -> Node {
    compare(CompareOp::Ne, lval, rval)
}

/// Less-than comparison.
#[must_use]
pub fn lt(lval: impl Into<Value>, rval: impl Into<Value>) -> Node {
    compare(CompareOp::Lt, lval, rval)
}

/// Less-than-or-equal comparison.
#[must_use]
pub fn lte(lval: impl Into<Value>, rval: impl Into<Value>) -> Node {
    compare(CompareOp::Lte, lval, rval)
}

/// Greater-than comparison.
#[must_use]
pub fn gt(lval: impl Into<Value>, rval: impl Into<Value>) -> Node {
    compare(CompareOp::Gt, lval, rval)
}

/// Greater-than-or-equal comparison.
#[must_use]
pub fn gte(lval: impl Into<Value>, rval: impl Into<Value>) -> Node {
    compare(CompareOp::Gte, lval, rval)
}

/// Join one or more conditions under AND.
///
/// Children are kept exactly as given: no flattening, and a single child
/// still yields a one-child compound.
pub fn and<I>(children: I) -> Result<Node, ExprError>
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    compound(LogicOp::And, children, Fields::new())
}

/// Join one or more conditions under OR. Same policy as [`and`].
pub fn or<I>(children: I) -> Result<Node, ExprError>
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    compound(LogicOp::Or, children, Fields::new())
}

/// AND over positional children followed by `name = value` equalities,
/// in insertion order.
pub fn and_with<I>(children: I, fields: Fields) -> Result<Node, ExprError>
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    compound(LogicOp::And, children, fields)
}

/// OR over positional children followed by `name = value` equalities.
pub fn or_with<I>(children: I, fields: Fields) -> Result<Node, ExprError>
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    compound(LogicOp::Or, children, fields)
}

/// Negate exactly one condition.
#[must_use]
pub fn not(child: impl Into<Node>) -> Node {
    Node::Compound(Compound::new_unchecked(LogicOp::Not, vec![child.into()]))
}

/// Negate either the positional child or a single `name = value` pair.
/// Any total other than one condition is an arity error.
pub fn not_with(child: Option<Node>, fields: Fields) -> Result<Node, ExprError> {
    compound(LogicOp::Not, child, fields)
}

/// Opaque leaf emitted verbatim by renderers.
#[must_use]
pub fn expression(payload: impl Into<String>) -> Node {
    Node::Expression(RawExpression::new(payload))
}

fn compare(op: CompareOp, lval: impl Into<Value>, rval: impl Into<Value>) -> Node {
    Node::Comparison(Comparison::new(op, lval, rval))
}

fn compound<I>(op: LogicOp, children: I, fields: Fields) -> Result<Node, ExprError>
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    let children = children
        .into_iter()
        .map(Into::<Node>::into)
        .chain(fields.into_comparisons());

    Compound::new(op, children).map(Node::Compound)
}
