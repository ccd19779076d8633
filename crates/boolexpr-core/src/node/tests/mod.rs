
use crate::{
    build::{and, eq, expression, gt, ne, not, or},
    error::{Arity, ExprError},
    node::{CompareOp, Compound, LogicOp, Node, NodeKind},
    test_support::record_access_tree,
    value::Value,
};
use std::collections::{BTreeSet, HashSet};

#[test]
fn empty_and_or_fail_with_invalid_arity() {
    for op in [LogicOp::And, LogicOp::Or] {
        let err = Compound::new(op, Vec::<Node>::new()).expect_err("empty compound");
        assert_eq!(
            err,
            ExprError::InvalidArity {
                op,
                expected: Arity::AtLeastOne,
                got: 0,
            }
        );
    }
}

#[test]
fn not_requires_exactly_one_child() {
    assert!(Compound::new(LogicOp::Not, Vec::<Node>::new()).is_err());
    assert!(Compound::new(LogicOp::Not, [eq("a", 1)]).is_ok());

    let err = Compound::new(LogicOp::Not, [eq("a", 1), eq("b", 2)]).expect_err("two children");
    assert_eq!(
        err,
        ExprError::InvalidArity {
            op: LogicOp::Not,
            expected: Arity::ExactlyOne,
            got: 2,
        }
    );
    assert_eq!(err.to_string(), "NOT requires exactly one condition; got 2");
}

#[test]
fn independently_built_trees_are_equal_and_dedupe() {
    let left = record_access_tree();
    let right = record_access_tree();
    assert_eq!(left, right);

    let mut hashed = HashSet::new();
    hashed.insert(left.clone());
    hashed.insert(right.clone());
    assert_eq!(hashed.len(), 1);

    let mut ordered = BTreeSet::new();
    ordered.insert(left);
    ordered.insert(right);
    assert_eq!(ordered.len(), 1);
}

#[test]
fn leaf_values_and_order_participate_in_equality() {
    let a = and([eq("a", 1), eq("b", 2)]).expect("and");
    let swapped = and([eq("b", 2), eq("a", 1)]).expect("and");
    let other_value = and([eq("a", 1), eq("b", 3)]).expect("and");

    assert_ne!(a, swapped);
    assert_ne!(a, other_value);
    assert_ne!(eq("a", 1), eq("a", "1"));
}

#[test]
fn ne_and_negated_eq_are_distinct_structures() {
    let atomic = ne("x", "y");
    let compound = not(eq("x", "y"));

    assert_ne!(atomic, compound);
    assert_eq!(atomic.kind(), NodeKind::Comparison);
    assert_eq!(compound.kind(), NodeKind::Not);
}

#[test]
fn accessors_expose_parts_without_mutation() {
    let node = gt("age", 21);
    let cmp = node.as_comparison().expect("comparison");
    assert_eq!(cmp.op(), CompareOp::Gt);
    assert_eq!(cmp.lval(), &Value::from("age"));
    assert_eq!(cmp.rval(), &Value::Int(21));

    let raw = expression("TODAY()");
    assert_eq!(raw.as_expression().map(|r| r.payload()), Some("TODAY()"));
    assert!(raw.as_compound().is_none());
}

#[test]
fn kind_tracks_compound_operator() {
    let tree = record_access_tree();
    assert_eq!(tree.kind(), NodeKind::And);
    assert!(tree.is_compound(LogicOp::And));
    assert!(!tree.is_compound(LogicOp::Or));
    assert_eq!(tree.size(), 8);
}

#[test]
fn flatten_merges_like_kinds_at_every_depth() {
    let (a, b, c, d, e) = (eq("a", "a"), eq("b", "b"), eq("c", "c"), eq("d", "d"), eq("e", "e"));
    let de = or([d.clone(), e.clone()]).expect("or");
    let nested = and([
        and([a.clone(), b.clone()]).expect("and"),
        and([c.clone(), de.clone()]).expect("and"),
    ])
    .expect("and");

    let expected = and([a, b, c, de]).expect("and");
    assert_eq!(nested.flatten(), expected);
    assert_eq!(not(nested).flatten(), not(expected));
}

#[test]
fn flatten_keeps_double_negation() {
    let double = not(not(eq("a", 1)));

    assert_eq!(double.flatten(), double);
}

#[test]
fn flatten_leaves_leaves_alone() {
    let leaf = eq("a", 1);
    assert_eq!(leaf.flatten(), leaf);

    let raw = expression("x");
    assert_eq!(raw.flatten(), raw);
}

#[test]
fn deserialization_enforces_arity() {
    let tree = record_access_tree();
    let json = serde_json::to_string(&tree).expect("serialize");
    let back: Node = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, tree);

    let empty_and = r#"{"Compound":{"op":"And","children":[]}}"#;
    let err = serde_json::from_str::<Node>(empty_and).expect_err("empty AND");
    assert!(err.to_string().contains("AND requires at least one condition"));
}
