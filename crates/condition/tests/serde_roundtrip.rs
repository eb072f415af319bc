#![cfg(feature = "json")]

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use value_condition::prelude::*;
use value_condition::{SerializableAdvancedCondition, is_condition_value};

/// Region filter as it would be stored in a settings file.
fn stored_region_filter() -> Value {
    json!({
        "condition": "list",
        "conditions": [
            {"condition": "literal", "value": "eu-west-1"},
            {"condition": "disabled"},
            {
                "condition": "advanced",
                "include": [
                    {"condition": "literal", "value": "us-east-1"},
                    {"condition": "literal", "value": "us-east-2"}
                ],
                "exclude": {"condition": "literal", "value": "us-east-2"}
            }
        ]
    })
}

#[test]
fn stored_filter_loads_and_matches() {
    let stored = SerializableCondition::<String>::from_json(stored_region_filter()).unwrap();
    let filter = stored.into_condition();

    assert!(filter.matches(&"eu-west-1".to_string()));
    assert!(filter.matches(&"us-east-1".to_string()));
    assert!(!filter.matches(&"us-east-2".to_string()));
    assert!(!filter.matches(&"ap-south-1".to_string()));
}

#[test]
fn stored_filter_writes_back_normalized() {
    let stored = SerializableCondition::<String>::from_json(stored_region_filter()).unwrap();
    let written = stored.into_condition().to_serializable().unwrap().to_json().unwrap();

    // The single exclude entry comes back as a one-element list.
    assert_eq!(
        written["conditions"][2]["exclude"],
        json!([{"condition": "literal", "value": "us-east-2"}])
    );
    assert_eq!(written["conditions"][0], stored_region_filter()["conditions"][0]);
}

#[test]
fn json_values_as_literals() {
    let cond = SerializableCondition::Advanced(
        SerializableAdvancedCondition::including([json!({"tier": "gold"}), json!(1)])
            .excluding([json!(null)]),
    )
    .into_condition();

    assert!(cond.matches(&json!({"tier": "gold"})));
    assert!(cond.matches(&json!(1.0)));
    assert!(!cond.matches(&json!({"tier": "silver"})));
    assert!(!cond.matches(&json!(null)));
}

#[test]
fn discriminant_decides_what_is_a_condition() {
    let stored = stored_region_filter();
    assert!(!is_condition_value(&stored));
    assert!(is_condition_value(&stored["conditions"][2]));

    let lookalike = json!({"include": ["a"], "exclude": ["b"], "match": "strict"});
    assert!(!is_condition_value(&lookalike));

    let wrapped = SerializableCondition::literal(lookalike.clone());
    assert!(!wrapped.is_condition());
    assert!(wrapped.matches(&lookalike));
}

#[test]
fn unknown_tags_are_rejected() {
    let err = SerializableCondition::<i32>::from_json(json!({"condition": "predicate"}))
        .unwrap_err();
    assert_eq!(err.code(), "CONDITION_DESER");
}
