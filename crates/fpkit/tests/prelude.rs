//! The prelude covers a full parse, validate and gather flow.

use std::time::Duration;

use fpkit::prelude::*;
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq)]
struct Reading {
    sensor: &'static str,
    celsius: i32,
}

fn parse_line(line: &'static str) -> Outcome<Reading, String> {
    let mut parts = line.split('=');
    let sensor = from_nullable(parts.next()).filter(|s| !s.is_empty());
    let value = from_nullable(parts.next()).bind(|v| Maybe::from(v.trim().parse::<i32>().ok()));
    sensor
        .zip(value)
        .map(|(sensor, celsius)| Reading { sensor, celsius })
        .ok_or_else(|| format!("malformed line: {line:?}"))
}

fn plausible() -> Validation<'static, Reading, String> {
    Validation::new()
        .check(ensure(|r: &Reading| r.celsius > -90, "below record low".to_owned()))
        .check(ensure(|r: &Reading| r.celsius < 60, "above record high".to_owned()))
}

async fn load(line: &'static str, delay_ms: u64) -> Outcome<Reading, String> {
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    let rules = plausible();
    parse_line(line).bind(|r| rules.validate(r).map_err(|errors| errors.to_string()))
}

#[tokio::test(start_paused = true)]
async fn gather_parsed_and_validated_readings() {
    let ok = gather_results([load("a=21", 30), load("b=-4", 10)]).await;
    assert_eq!(
        ok.map(|rs| rs.into_iter().map(|r| r.sensor).collect::<Vec<_>>()),
        Outcome::Ok(vec!["a", "b"])
    );

    let bad = gather_results_accumulate([load("a=99", 5), load("=3", 1), load("c=0", 2)]).await;
    assert_eq!(
        bad.err().map(NonEmptyList::into_vec),
        Maybe::Some(vec![
            "above record high".to_owned(),
            "malformed line: \"=3\"".to_owned(),
        ])
    );
}

#[test]
fn sequences_and_composition() {
    let groups: Vec<(bool, usize)> = chunk(1..=10, 3)
        .unwrap()
        .map(|c| c.iter().sum::<i32>())
        .group_by_key(|sum| sum % 2 == 0)
        .map(|(even, sums)| (even, sums.len()))
        .collect();
    // chunk sums: 6, 15, 24, 10
    assert_eq!(groups, vec![(true, 1), (false, 1), (true, 2)]);

    let describe = compose(|n: usize| format!("{n} groups"), |v: Vec<(bool, usize)>| v.len());
    assert_eq!(describe(groups), "3 groups");
}

#[test]
fn argument_errors_surface_as_fp_error() {
    let err: FpError = match chunk([1], 0) {
        Ok(_) => panic!("zero-sized chunk accepted"),
        Err(e) => e,
    };
    assert!(err.is_invalid_argument());
}
