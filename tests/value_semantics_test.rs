// cosy-value - End-to-end semantics tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Exercises the value type the way a host evaluator would: building
//! values, combining them, coercing them, and rendering the results.

use cosy_value::{Cosy, Error};

#[test]
fn mixed_addition_renders_symmetrically() {
    // 3 + (1 + 2i) and (1 + 2i) + 3 produce the same value
    let left = Cosy::number(3).combine(&Cosy::complex(1.0, 2.0)).unwrap();
    let right = Cosy::complex(1.0, 2.0).combine(&Cosy::number(3)).unwrap();
    assert_eq!(left, right);
    assert_eq!(left, Cosy::complex(4.0, 2.0));
    assert_eq!(format!("{}", left), "(4 + 2i)");
}

#[test]
fn string_building_flow() {
    // A host concatenating a label with a computed number
    let sum = Cosy::number(40).combine(&Cosy::number(2)).unwrap();
    let label = Cosy::string("answer: ").combine(&sum).unwrap();
    assert_eq!(format!("{}", label), "answer: 42");
}

#[test]
fn coerce_then_add() {
    // A sequence standing in for a complex literal
    let pair = Cosy::sequence(vec![Cosy::number(1), Cosy::number(2)]);
    let as_complex = pair.to_complex().unwrap();
    let shifted = as_complex.combine(&Cosy::number(10)).unwrap();
    assert_eq!(shifted, Cosy::complex(11.0, 2.0));
}

#[test]
fn deeply_nested_sequence_renders() {
    let val = Cosy::sequence(vec![
        Cosy::number(1),
        Cosy::sequence(vec![
            Cosy::string("x"),
            Cosy::sequence(vec![Cosy::complex(0.0, -1.0)]),
        ]),
        Cosy::empty_sequence(),
    ]);
    assert_eq!(format!("{}", val), "{ 1, { x, { (0 - 1i) } }, {  } }");
}

#[test]
fn sequence_ownership_is_recursive() {
    // Moving a value into a sequence transfers ownership; cloning the
    // sequence deep-copies every element.
    let inner = Cosy::sequence(vec![Cosy::string("owned")]);
    let outer = Cosy::sequence(vec![inner, Cosy::number(1)]);
    let copy = outer.clone();
    drop(outer);
    assert_eq!(format!("{}", copy), "{ { owned }, 1 }");
}

#[test]
fn errors_surface_as_diagnostics() {
    // The host renders errors with Display when aborting evaluation
    let err = Cosy::string("a").combine(&Cosy::complex(1.0, 0.0)).unwrap_err();
    assert_eq!(
        format!("{}", err),
        "+: expected string or number, got complex"
    );

    let err = Cosy::string("oops").to_complex().unwrap_err();
    assert_eq!(format!("{}", err), "Cannot convert string to complex");

    let err = Cosy::sequence(vec![Cosy::number(1)])
        .to_complex()
        .unwrap_err();
    assert_eq!(
        format!("{}", err),
        "Cannot convert sequence to complex: sequence too short: need at least 2 elements, got 1"
    );
}

#[test]
fn sequence_addition_is_rejected_on_both_sides() {
    let seq = Cosy::sequence(vec![Cosy::number(1), Cosy::number(2)]);
    for other in [
        Cosy::number(1),
        Cosy::complex(1.0, 0.0),
        Cosy::sequence(vec![Cosy::number(3)]),
    ] {
        assert!(matches!(
            seq.combine(&other),
            Err(Error::TypeError { got: "sequence", .. })
        ));
        assert!(matches!(
            other.combine(&seq),
            Err(Error::TypeError { got: "sequence", .. })
        ));
    }
}

#[test]
fn failed_operations_leave_values_usable() {
    let mut val = Cosy::string("still here");
    assert!(val.coerce_to_complex().is_err());
    assert!(val.combine(&Cosy::empty_sequence()).is_err());
    assert_eq!(format!("{}", val), "still here");
}
