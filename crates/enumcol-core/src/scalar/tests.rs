use crate::scalar::{Scalar, ScalarError, ScalarTag};
use proptest::prelude::*;
use serde_json::json;
use std::fmt;

fn look_alikes() -> Vec<Scalar> {
    vec![
        Scalar::Bool(false),
        Scalar::Float(0.0),
        Scalar::Int(0),
        Scalar::Null,
        Scalar::Text(String::new()),
        Scalar::Text("0".to_string()),
    ]
}

#[test]
fn keys_distinguish_loosely_equal_payloads() {
    let scalars = look_alikes();

    for (left_index, left) in scalars.iter().enumerate() {
        for (right_index, right) in scalars.iter().enumerate() {
            if left_index == right_index {
                assert_eq!(left.key(), right.key());
            } else {
                assert_ne!(
                    left.key(),
                    right.key(),
                    "{} and {} must key apart",
                    left.key().describe(),
                    right.key().describe()
                );
            }
        }
    }
}

#[test]
fn int_zero_does_not_widen_to_text_zero() {
    let int = Scalar::Int(0);
    let text = Scalar::Text("0".to_string());

    assert_eq!(int.to_string(), text.to_string());
    assert_ne!(int, text);
    assert_ne!(int.tag(), text.tag());
    assert_ne!(int.key(), text.key());
}

#[test]
fn json_scalars_canonicalize_without_coercion() {
    assert_eq!(Scalar::try_from(json!(null)), Ok(Scalar::Null));
    assert_eq!(Scalar::try_from(json!(true)), Ok(Scalar::Bool(true)));
    assert_eq!(Scalar::try_from(json!(7)), Ok(Scalar::Int(7)));
    assert_eq!(Scalar::try_from(json!(-7)), Ok(Scalar::Int(-7)));
    assert_eq!(Scalar::try_from(json!(1.5)), Ok(Scalar::Float(1.5)));
    assert_eq!(
        Scalar::try_from(json!("active")),
        Ok(Scalar::Text("active".to_string()))
    );
}

#[test]
fn json_compounds_are_rejected() {
    for input in [json!([1, 2]), json!({ "status": "active" })] {
        let rejected = Scalar::try_from(input).unwrap_err();
        assert!(matches!(rejected, ScalarError::UnexpectedValue { .. }));
    }
}

#[test]
fn json_number_outside_payload_range_is_rejected() {
    let rejected = Scalar::try_from(json!(u64::MAX)).unwrap_err();
    let ScalarError::UnexpectedValue { kind } = rejected;
    assert!(kind.contains("payload range"), "got: {kind}");
}

#[test]
fn non_finite_floats_are_rejected() {
    assert!(Scalar::try_float(f64::NAN).is_err());
    assert!(Scalar::try_float(f64::INFINITY).is_err());
    assert!(Scalar::try_float(f64::NEG_INFINITY).is_err());
    assert_eq!(Scalar::try_float(1.25), Ok(Scalar::Float(1.25)));
}

#[test]
fn display_is_the_raw_text_form() {
    assert_eq!(Scalar::Text("urgent".to_string()).to_string(), "urgent");
    assert_eq!(Scalar::Int(7).to_string(), "7");
    assert_eq!(Scalar::Bool(true).to_string(), "true");
    assert_eq!(Scalar::Null.to_string(), "");
}

#[test]
fn display_objects_canonicalize_to_their_text_form() {
    struct StatusCode(u16);

    impl fmt::Display for StatusCode {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "HTTP-{}", self.0)
        }
    }

    let scalar = Scalar::from_display(&StatusCode(404));
    assert_eq!(scalar, Scalar::Text("HTTP-404".to_string()));
}

#[test]
fn tags_are_stable() {
    assert_eq!(ScalarTag::Bool.to_u8(), 1);
    assert_eq!(ScalarTag::Float.to_u8(), 2);
    assert_eq!(ScalarTag::Int.to_u8(), 3);
    assert_eq!(ScalarTag::Null.to_u8(), 4);
    assert_eq!(ScalarTag::Text.to_u8(), 5);
    assert_eq!(ScalarTag::Text.label(), "Text");
}

#[test]
fn driver_round_trip_preserves_payload_type() {
    for scalar in look_alikes() {
        let driver = serde_json::Value::from(&scalar);
        let back = Scalar::try_from(driver).expect("driver value should canonicalize");
        assert_eq!(back.key(), scalar.key());
    }
}

fn scalar_strategy() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        Just(Scalar::Null),
        any::<bool>().prop_map(Scalar::Bool),
        any::<i64>().prop_map(Scalar::Int),
        (-1.0e12_f64..1.0e12_f64).prop_map(Scalar::Float),
        ".{0,24}".prop_map(Scalar::Text),
    ]
}

proptest! {
    /// Equal keys imply equal payloads over heterogeneous scalars.
    #[test]
    fn keys_are_injective(left in scalar_strategy(), right in scalar_strategy()) {
        if left.key() == right.key() {
            prop_assert_eq!(left, right);
        }
    }

    /// Tags always agree between a payload and its key.
    #[test]
    fn key_tag_matches_payload_tag(scalar in scalar_strategy()) {
        prop_assert_eq!(scalar.key().tag(), scalar.tag());
    }
}
