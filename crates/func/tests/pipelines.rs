//! End-to-end use of the composition helpers together with fpkit-core types.

use fpkit_core::prelude::*;
use fpkit_func::{Pipe, async_pipe, compose, curry2, foldr, once, pipe, try_catch};
use pretty_assertions::assert_eq;

fn parse(s: &str) -> Outcome<i32, String> {
    Outcome::from(s.trim().parse::<i32>().map_err(|e| e.to_string()))
}

#[test]
fn pipe_through_outcome_steps() {
    let result = pipe!(
        " 21 ",
        parse,
        |o: Outcome<i32, String>| o.map(|n| n * 2),
        |o: Outcome<i32, String>| o.unwrap_or(0)
    );
    assert_eq!(result, 42);
}

#[test]
fn compose_of_curried_stages() {
    let scale = curry2(|factor: i32, x: i32| x * factor);
    let offset = curry2(|delta: i32, x: i32| x + delta);
    let f = compose(offset(1), scale(3));
    assert_eq!([1, 2, 3].map(&f), [4, 7, 10]);
}

#[test]
fn foldr_builds_nonempty_list_in_order() {
    let list = foldr(
        |x, acc: NonEmptyList<i32>| NonEmptyList::with_tail(x, acc.into_vec()),
        NonEmptyList::new(4),
        vec![1, 2, 3],
    );
    assert_eq!(list.into_vec(), vec![1, 2, 3, 4]);
}

#[test]
fn once_and_try_catch_compose() {
    let guarded = once(try_catch(|n: i32| 100 / n));
    assert!(guarded(0).is_err());
    assert!(guarded(5).is_err());
}

#[test]
fn method_pipe_reads_left_to_right() {
    let words = "b a c"
        .pipe(|s| s.split(' ').collect::<Vec<_>>())
        .tap(|v| assert_eq!(v.len(), 3))
        .pipe(|mut v| {
            v.sort_unstable();
            v.join(",")
        });
    assert_eq!(words, "a,b,c");
}

#[tokio::test]
async fn async_pipe_awaits_each_step() {
    async fn lookup(id: u32) -> Maybe<&'static str> {
        if id == 1 { Maybe::Some("ada") } else { Maybe::Empty }
    }
    async fn greet(name: Maybe<&'static str>) -> String {
        name.map(|n| format!("hello {n}")).unwrap_or_else(|| "nobody".to_owned())
    }

    assert_eq!(async_pipe!(1, lookup, greet).await, "hello ada");
    assert_eq!(async_pipe!(2, lookup, greet).await, "nobody");
}
