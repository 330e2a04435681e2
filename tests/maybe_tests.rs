#![cfg(all(feature = "typeclass", feature = "data"))]
//! Scenario tests for the Maybe monad: construction, equality, display,
//! bind, apply, and the lift family.

use funcrs::data::{Just, Maybe, Nothing};
use funcrs::typeclass::Monad;
use rstest::rstest;

// =============================================================================
// Construction and equality
// =============================================================================

#[rstest]
fn pure_is_just() {
    assert_eq!(<Maybe<()>>::pure(2), Just(2));
}

#[rstest]
fn just_is_not_nothing() {
    assert_ne!(Just(2), Nothing);
}

#[rstest]
fn nothing_equals_nothing() {
    assert_eq!(Maybe::<i32>::Nothing, Nothing);
}

#[rstest]
#[case(Just(2), "Just 2")]
#[case(Nothing, "Nothing")]
fn display_forms(#[case] value: Maybe<i32>, #[case] expected: &str) {
    assert_eq!(value.to_string(), expected);
}

// =============================================================================
// bind
// =============================================================================

#[rstest]
fn bind_chains_through_just() {
    assert_eq!(<Maybe<()>>::pure(7).bind(|x| Just(x + 1)), Just(8));
    assert_eq!(Just(1).bind(|x| Just(x + 1)), Just(2));
}

#[rstest]
fn bind_short_circuits_on_nothing() {
    let absent: Maybe<i32> = Nothing;
    assert_eq!(absent.bind(|x| Just(x + 1)), Nothing);
}

#[rstest]
fn bind_chain_stops_at_first_nothing() {
    let result = Just(1)
        .bind(|x| if x > 10 { Just(x) } else { Nothing })
        .bind(|x: i32| Just(x + 1));
    assert_eq!(result, Nothing);
}

// =============================================================================
// apply and the lift family
// =============================================================================

#[rstest]
fn apply_on_just() {
    assert_eq!(<Maybe<()>>::pure(|x: i32| x + 1).apply(Just(1)), Just(2));
}

#[rstest]
fn apply_on_nothing() {
    let absent: Maybe<i32> = Nothing;
    assert_eq!(<Maybe<()>>::pure(|x: i32| x + 1).apply(absent), Nothing);
}

#[rstest]
fn lift_m_maps_over_just() {
    assert_eq!(<Maybe<()>>::lift_m(|x: i32| x + 1, Just(1)), Just(2));
}

#[rstest]
fn lift_m_preserves_nothing() {
    let absent: Maybe<i32> = Nothing;
    assert_eq!(<Maybe<()>>::lift_m(|x: i32| x + 1, absent), Nothing);
}

#[rstest]
fn lift_m2_combines_two_justs() {
    assert_eq!(
        <Maybe<()>>::lift_m2(|x, y| x + y, Just(1), Just(2)),
        Just(3)
    );
}

#[rstest]
fn lift_m2_fails_if_either_is_nothing() {
    let absent: Maybe<i32> = Nothing;
    assert_eq!(<Maybe<()>>::lift_m2(|x, y| x + y, Just(1), absent), Nothing);
    let absent: Maybe<i32> = Nothing;
    assert_eq!(<Maybe<()>>::lift_m2(|x, y| x + y, absent, Just(2)), Nothing);
}

#[rstest]
fn lift_m3_through_lift_m5_combine_all_arguments() {
    assert_eq!(
        <Maybe<()>>::lift_m3(|a, b, c| a + b + c, Just(1), Just(2), Just(3)),
        Just(6)
    );
    assert_eq!(
        <Maybe<()>>::lift_m4(|a, b, c, d| a + b + c + d, Just(1), Just(2), Just(3), Just(4)),
        Just(10)
    );
    assert_eq!(
        <Maybe<()>>::lift_m5(
            |a, b, c, d, e| a + b + c + d + e,
            Just(1),
            Just(2),
            Just(3),
            Just(4),
            Just(5)
        ),
        Just(15)
    );
}

#[rstest]
fn lift_m5_fails_on_any_nothing() {
    let absent: Maybe<i32> = Nothing;
    assert_eq!(
        <Maybe<()>>::lift_m5(
            |a, b, c, d, e| a + b + c + d + e,
            Just(1),
            Just(2),
            absent,
            Just(4),
            Just(5)
        ),
        Nothing
    );
}

// =============================================================================
// then
// =============================================================================

#[rstest]
fn then_sequences_and_discards() {
    assert_eq!(Just(1).then(Just("ok")), Just("ok"));
    let absent: Maybe<i32> = Nothing;
    assert_eq!(absent.then(Just("ok")), Nothing);
}
