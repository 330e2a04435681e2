#![cfg(all(feature = "typeclass", feature = "effect"))]
//! Scenario tests for the Writer family: value threading, log
//! accumulation, tell, and the MonadWriter operations.

use funcrs::effect::{Writer, WriterList, WriterProd, WriterStr, WriterSum};
use funcrs::typeclass::{Monad, Product, Semigroup, Sum};
use rstest::rstest;

// =============================================================================
// Value threading and log accumulation
// =============================================================================

#[rstest]
fn single_bind_concatenates_string_log() {
    let result = <WriterStr<()>>::pure(5).bind(|x| Writer::new(x + 1, String::from("Added 1")));
    assert_eq!(result, Writer::new(6, String::from("Added 1")));
}

#[rstest]
fn chained_binds_concatenate_sequence_log_in_call_order() {
    let result = <WriterList<String, ()>>::pure(5)
        .bind(|x| Writer::new(x + 1, vec![String::from("Added 1")]))
        .bind(|x| Writer::new(x + 2, vec![String::from("Added 2")]));
    assert_eq!(
        result,
        Writer::new(8, vec![String::from("Added 1"), String::from("Added 2")])
    );
}

#[rstest]
fn tell_injects_log_without_value() {
    let result = <WriterStr<()>>::pure(1).bind(|x| {
        <WriterStr<()>>::pure(2).bind(move |y| {
            WriterStr::tell(String::from("Added 1, 2")).bind(move |_| <WriterStr<()>>::pure(x + y))
        })
    });
    assert_eq!(result, WriterStr::new(3, String::from("Added 1, 2")));
}

#[rstest]
fn sum_logs_add() {
    let result = <WriterSum<i32, ()>>::pure(10)
        .bind(|x| Writer::new(x + 1, Sum(5)))
        .bind(|x| Writer::new(x * 2, Sum(7)));
    assert_eq!(result, Writer::new(22, Sum(12)));
}

#[rstest]
fn product_logs_multiply() {
    let result = <WriterProd<i32, ()>>::pure(10)
        .bind(|x| Writer::new(x + 1, Product(5)))
        .bind(|x| Writer::new(x * 2, Product(7)));
    assert_eq!(result, Writer::new(22, Product(35)));
}

#[rstest]
fn pure_log_is_monoid_identity() {
    assert_eq!(<WriterStr<()>>::pure(1).exec(), "");
    assert_eq!(<WriterList<String, ()>>::pure(1).exec(), Vec::<String>::new());
    assert_eq!(<WriterSum<i32, ()>>::pure(1).exec(), Sum(0));
    assert_eq!(<WriterProd<i32, ()>>::pure(1).exec(), Product(1));
}

// =============================================================================
// Derived operations over Writer
// =============================================================================

#[rstest]
fn lift_m2_combines_values_and_logs() {
    let combined = <WriterStr<()>>::lift_m2(
        |x, y| x + y,
        WriterStr::new(1, String::from("left;")),
        WriterStr::new(2, String::from("right;")),
    );
    assert_eq!(combined, WriterStr::new(3, String::from("left;right;")));
}

#[rstest]
fn apply_combines_logs_left_to_right() {
    let applied = WriterStr::new(|x: i32| x * 2, String::from("fn;")).apply(WriterStr::new(
        21,
        String::from("arg;"),
    ));
    assert_eq!(applied, WriterStr::new(42, String::from("fn;arg;")));
}

#[rstest]
fn then_keeps_both_logs_discards_first_value() {
    let sequenced = WriterStr::new(1, String::from("a")).then(WriterStr::new("two", String::from("b")));
    assert_eq!(sequenced, WriterStr::new("two", String::from("ab")));
}

// =============================================================================
// MonadWriter operations
// =============================================================================

#[rstest]
fn tell_then_tell_is_tell_of_combined() {
    let sequential =
        WriterStr::tell(String::from("first;")).then(WriterStr::tell(String::from("second;")));
    let combined = WriterStr::tell(String::from("first;").combine(String::from("second;")));
    assert_eq!(sequential, combined);
}

#[rstest]
fn listen_exposes_log_next_to_value() {
    let listened = Writer::listen(WriterStr::new(42, String::from("log")));
    assert_eq!(
        listened,
        Writer::new((42, String::from("log")), String::from("log"))
    );
}

#[rstest]
fn censor_rewrites_log() {
    let censored = Writer::censor(
        |log: String| log.to_uppercase(),
        WriterStr::new(42, String::from("quiet")),
    );
    assert_eq!(censored, WriterStr::new(42, String::from("QUIET")));
}

#[rstest]
fn pass_applies_yielded_modifier() {
    let writer: Writer<String, (i32, fn(String) -> String)> = Writer::new(
        (7, (|log: String| log.repeat(2)) as fn(String) -> String),
        String::from("ab"),
    );
    assert_eq!(Writer::pass(writer), WriterStr::new(7, String::from("abab")));
}

// =============================================================================
// Accessors
// =============================================================================

#[rstest]
fn run_eval_exec_project_the_pair() {
    let writer = WriterList::new(42, vec![String::from("log")]);
    let (value, log) = writer.run();
    assert_eq!(value, 42);
    assert_eq!(log, vec![String::from("log")]);
    assert_eq!(writer.eval(), 42);
    assert_eq!(writer.exec(), vec![String::from("log")]);
}
