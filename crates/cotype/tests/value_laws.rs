//! Algebraic laws of the value types, checked end to end against the public
//! surface of the crate.

use std::any::Any;

use anyhow::anyhow;
use cotype::{
    aggregate, AggregateError, Coproduct2, Coproduct3, NonEmpty, OptionExt, PositiveInt,
    ResultExt,
};

#[test]
fn option_map_composes() {
    let f = |v: i32| v + 1;
    let g = |v: i32| v * 2;
    let composed = |v: i32| g(f(v));

    assert_eq!(Some(10).map(f).map(g), Some(10).map(composed));
    assert_eq!(None::<i32>.map(f).map(g), None);
}

#[test]
fn option_flat_map_identities() {
    let f = |v: i32| if v > 0 { Some(v * 2) } else { None };

    // Left identity: wrapping then binding is just applying.
    assert_eq!(Some(21).and_then(f), f(21));
    // Right identity: binding the constructor changes nothing.
    assert_eq!(Some(21).and_then(Some), Some(21));
    assert_eq!(None::<i32>.and_then(Some), None);
}

#[test]
fn option_fallbacks() {
    assert_eq!(None::<i32>.unwrap_or(5), 5);
    assert_eq!(Some(1).unwrap_or(5), 1);

    // The lazy supplier must not run on a present option.
    let value = Some(2).match_either(|v| v, || panic!("empty handler must not run"));
    assert_eq!(value, 2);
}

#[test]
fn try_success_chain_matches_the_success_branch() {
    let result: Result<i32, String> = Ok(10);
    let halved = result
        .and_then(|v| Ok::<i32, String>(v / 2))
        .match_either(|s| s, |_| -1);
    assert_eq!(halved, 5);
}

#[test]
fn refinement_round_trip() {
    assert!(PositiveInt::try_new(-3).is_none());
    let three = PositiveInt::try_new(3).unwrap();
    assert_eq!(i32::from(three), 3);
}

#[test]
fn aggregation_collapses_by_count() {
    assert!(aggregate(Vec::new()).is_none());

    let single = aggregate(vec![anyhow!("only")]).unwrap();
    assert!(single.downcast_ref::<AggregateError>().is_none());
    assert_eq!(single.to_string(), "only");

    let many = aggregate(vec![anyhow!("1"), anyhow!("2")]).unwrap();
    let composite = many.downcast_ref::<AggregateError>().unwrap();
    let messages: Vec<String> = composite.errors().iter().map(|e| e.to_string()).collect();
    assert_eq!(messages, vec!["1", "2"]);
}

#[test]
fn non_empty_establishes_its_invariant_once() {
    assert!(NonEmpty::<i32>::try_new(vec![]).is_none());

    let items = NonEmpty::try_new(vec![7]).unwrap();
    assert_eq!(items.len().get(), 1);
    assert_eq!(*items.first(), 7);

    let items = NonEmpty::try_new(vec![4, 5, 6]).unwrap();
    assert_eq!(items.len().get(), 3);
    assert_eq!(items.into_vec(), vec![4, 5, 6]);
}

#[test]
fn coproduct_tags_and_payloads_cohere() {
    let second: Coproduct2<i32, &str> = Coproduct2::create_second("payload");
    let outcome = second.fold(
        |_| panic!("first handler must not run"),
        |text| text.to_uppercase(),
    );
    assert_eq!(outcome, "PAYLOAD");
    assert_eq!(second.index(), 2);
}

#[test]
fn safe_dynamic_construction_is_total() {
    // "x" is neither an i32 nor a bool, so it lands on the trailing branch.
    let sum = Coproduct3::<i32, bool, Box<dyn Any>>::from_any_safe(Box::new("x"));
    assert_eq!(sum.index(), 3);

    let sum = Coproduct3::<i32, bool, Box<dyn Any>>::from_any_safe(Box::new(true));
    assert_eq!(sum.second(), Some(&true));
}

#[test]
fn nested_options_flatten_by_one_level() {
    let nested: Option<Option<i32>> = Some(Some(3));
    assert_eq!(nested.flatten(), Some(3));
    let nested: Option<Option<i32>> = Some(None);
    assert_eq!(nested.flatten(), None);
}
