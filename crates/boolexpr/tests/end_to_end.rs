use boolexpr::{ExprError, RenderError, prelude::*};
use proptest::prelude::*;
use time::macros::date;

fn record_access() -> Node {
    and([
        eq("id", "theRecordId"),
        or([
            not(eq("status", "private")),
            and([eq("status", "private"), eq("owner", "theUser")]).expect("and"),
        ])
        .expect("or"),
    ])
    .expect("and")
}

#[test]
fn record_access_filter_renders_exactly() {
    let filter = LdapRenderer::new().render(&record_access()).expect("render");

    assert_eq!(
        filter,
        "(&(id=theRecordId)(|(!(status=private))(&(status=private)(owner=theUser))))"
    );
}

#[test]
fn operator_form_builds_the_same_filter() {
    let built = eq("id", "theRecordId")
        & (!eq("status", "private") | (eq("status", "private") & eq("owner", "theUser")));

    assert_eq!(built, record_access());
}

#[test]
fn keyword_sugar_builds_the_same_filter() {
    let private_owned = boolexpr::and!(; status = "private", owner = "theUser").expect("and");
    let visible = or([not_with(None, Fields::new().field("status", "private")).expect("not"), private_owned])
        .expect("or");
    let built = and_with([visible], Fields::new().field("id", "theRecordId")).expect("and");

    // keyword children come after positional ones
    let reordered = and([
        or([
            not(eq("status", "private")),
            and([eq("status", "private"), eq("owner", "theUser")]).expect("and"),
        ])
        .expect("or"),
        eq("id", "theRecordId"),
    ])
    .expect("and");
    assert_eq!(built, reordered);
}

#[test]
fn empty_and_fails_at_construction() {
    assert!(matches!(
        and(Vec::<Node>::new()),
        Err(ExprError::InvalidArity { op: LogicOp::And, got: 0, .. })
    ));
}

#[test]
fn same_tree_three_dialects() {
    let cond = (eq("team", "core") | gte("joined", date!(2024 - 01 - 01))) & ne("role", "bot");

    assert_eq!(
        LdapRenderer::new().render(&cond).expect("ldap"),
        "(&(|(team=core)(joined>=20240101000000Z))(!(role=bot)))"
    );
    assert_eq!(
        InfixRenderer::new().render(&cond).expect("infix"),
        "((team=core or joined>=2024-01-01) and role!=bot)"
    );
    assert_eq!(
        AirtableRenderer::new().render(&cond).expect("airtable"),
        "AND(OR({team}='core', {joined}>='2024-01-01'), {role}!='bot')"
    );
}

#[test]
fn chained_combinators_render_flat_in_every_dialect() {
    let cond = eq("a", 1) & eq("b", 2) & !(eq("c", 3) | eq("d", 4) | eq("e", 5));

    assert_eq!(
        LdapRenderer::new().render(&cond).expect("ldap"),
        "(&(a=1)(b=2)(!(|(c=3)(d=4)(e=5))))"
    );
    assert_eq!(
        InfixRenderer::new().render(&cond).expect("infix"),
        "(a=1 and b=2 and not (c=3 or d=4 or e=5))"
    );
    assert_eq!(
        AirtableRenderer::new().render(&cond).expect("airtable"),
        "AND({a}=1, {b}=2, NOT(OR({c}=3, {d}=4, {e}=5)))"
    );
    assert_eq!(
        PythonRenderer::new().render(&cond).expect("python"),
        "(a == 1 and b == 2 and not (c == 3 or d == 4 or e == 5))"
    );
}

#[test]
fn umbrella_error_collects_both_failure_modes() {
    fn build_and_render() -> Result<String, boolexpr::Error> {
        let tree = or(Vec::<Node>::new())?;
        Ok(LdapRenderer::new().render(&tree)?)
    }

    assert!(matches!(build_and_render(), Err(boolexpr::Error::Expr(_))));

    struct Nothing;
    impl Render for Nothing {}

    let err: boolexpr::Error = Nothing.render(&eq("a", 1)).expect_err("no capability").into();
    assert!(matches!(
        err,
        boolexpr::Error::Render(RenderError::MissingCapability {
            kind: NodeKind::Comparison,
            ..
        })
    ));
}

#[test]
fn trees_round_trip_through_json() {
    let tree = record_access();
    let json = serde_json::to_string(&tree).expect("serialize");

    assert_eq!(serde_json::from_str::<Node>(&json).expect("deserialize"), tree);
}

#[test]
fn version_is_exported() {
    assert!(!boolexpr::VERSION.is_empty());
}

fn arb_leaf() -> impl Strategy<Value = Node> {
    ("[a-z]{1,6}", any::<i64>()).prop_map(|(field, value)| eq(field, value))
}

proptest! {
    #[test]
    fn swapping_children_swaps_output(a in arb_leaf(), b in arb_leaf()) {
        let renderer = LdapRenderer::new();
        let ab = renderer.render(&and([a.clone(), b.clone()]).expect("and")).expect("render");
        let ba = renderer.render(&and([b.clone(), a.clone()]).expect("and")).expect("render");

        let left = renderer.render(&a).expect("render");
        let right = renderer.render(&b).expect("render");
        prop_assert_eq!(ab, format!("(&{left}{right})"));
        prop_assert_eq!(ba, format!("(&{right}{left})"));
    }

    #[test]
    fn rendering_is_deterministic(a in arb_leaf(), b in arb_leaf(), c in arb_leaf()) {
        let tree = (a | !b) & c;
        let renderer = LdapRenderer::new();

        prop_assert_eq!(renderer.render(&tree), renderer.render(&tree.clone()));
    }

    #[test]
    fn ne_matches_negated_eq_in_ldap(field in "[a-z]{1,6}", value in any::<u32>()) {
        let renderer = LdapRenderer::new();

        prop_assert_eq!(
            renderer.render(&ne(field.as_str(), value)),
            renderer.render(&not(eq(field.as_str(), value)))
        );
    }
}
