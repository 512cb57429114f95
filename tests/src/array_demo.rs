#![cfg(test)]
use drills_common::array_demo::{self, DemoReport};
use drills_common::sequence::{Sequence, SequenceError, SequenceOfSequences};

fn demo() -> (DemoReport, Vec<String>) {
    let mut out: Vec<u8> = Vec::new();
    let report: DemoReport = array_demo::run(&mut out).expect("demo should succeed");
    let lines: Vec<String> = String::from_utf8(out)
        .expect("output is utf-8")
        .lines()
        .map(str::to_owned)
        .collect();
    (report, lines)
}

#[test]
fn demo_prints_four_lines() {
    let (_, lines) = demo();

    assert_eq!(
        lines,
        vec![
            "vector1: 10 20 (size 2)",
            "vector2: 100 200 (size 2)",
            "vector_2d[0][0]: 10",
            "vector_2d[0][0]: 10",
        ]
    );
}

#[test]
fn demo_builds_both_vectors() {
    let (report, _) = demo();

    assert_eq!(report.vector2.len(), 2);
    assert_eq!(report.vector2.at(0), Ok(&100));
    assert_eq!(report.vector2.at(1), Ok(&200));
    assert_eq!(report.vector1.len(), 2);
    assert_eq!(report.vector1.at(1), Ok(&20));
}

/// Nesting copies: overwriting vector1[0] does not reach vector_2d[0][0].
#[test]
fn nested_copy_ignores_later_mutation() {
    let (report, _) = demo();

    assert_eq!(report.nested_before, 10);
    assert_eq!(report.vector1.at(0), Ok(&1000));
    assert_eq!(report.nested_after, 10);
}

#[test]
fn out_of_range_access_is_an_error() {
    let mut vector1: Sequence<i32> = Sequence::new();
    vector1.push(10);
    vector1.push(20);

    assert_eq!(
        vector1.at(5),
        Err(SequenceError::OutOfRange { index: 5, len: 2 })
    );
    assert!(vector1.set(5, 1).is_err());

    let mut vector_2d: SequenceOfSequences = Sequence::new();
    vector_2d.push(vector1);
    assert!(vector_2d.at(2).is_err());
    assert!(vector_2d.at(0).and_then(|v| v.at(2)).is_err());
}
