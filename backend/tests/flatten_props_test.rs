//! Flattening holds up on arbitrary provider payloads.

use backend::api::search::flatten::flatten_event;
use common::search_const::{FEI_SEPARATOR, PMN_LINK_PREFIX};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        ".{0,16}".prop_map(Value::String),
    ]
}

fn any_json() -> impl Strategy<Value = Value> {
    json_leaf().prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::hash_map("[a-z_]{1,12}", inner, 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

fn object_with(extras: std::collections::HashMap<String, Value>, key: &str, value: Value) -> Value {
    let mut object: Map<String, Value> = extras.into_iter().collect();
    object.insert(key.to_string(), value);
    Value::Object(object)
}

fn openfda_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any_json(),
        (prop::collection::hash_map("[a-z_]{1,12}", any_json(), 0..4), any_json())
            .prop_map(|(extras, fei)| object_with(extras, "fei_number", fei)),
    ]
}

fn device_value() -> impl Strategy<Value = Value> {
    let device_entry = (prop::collection::hash_map("[a-z_]{1,12}", any_json(), 0..4), openfda_value())
        .prop_map(|(extras, openfda)| object_with(extras, "openfda", openfda));
    prop_oneof![
        any_json(),
        prop::collection::vec(prop_oneof![device_entry, any_json()], 0..3).prop_map(Value::Array),
    ]
}

fn event_value() -> impl Strategy<Value = Value> {
    (
        prop::collection::hash_map("[a-z_]{1,12}", any_json(), 0..6),
        device_value(),
        any_json(),
    )
        .prop_map(|(extras, device, number)| {
            let mut object: Map<String, Value> = extras.into_iter().collect();
            object.insert("device".to_string(), device);
            object.insert("pma_pmn_number".to_string(), number);
            Value::Object(object)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn any_json_value_flattens(raw in any_json()) {
        let _ = flatten_event(&raw);
    }

    #[test]
    fn any_event_shaped_object_flattens(raw in event_value()) {
        let record = flatten_event(&raw);
        if let Some(link) = &record.regulatory_link {
            prop_assert!(record.regulatory_number.starts_with('K'));
            prop_assert_eq!(link, &format!("{PMN_LINK_PREFIX}{}", record.regulatory_number));
        }
    }

    #[test]
    fn string_fei_numbers_are_joined(numbers in prop::collection::vec("[0-9A-Za-z ;]{0,12}", 0..6)) {
        let raw = serde_json::json!({
            "device": [{ "openfda": { "fei_number": numbers.clone() } }]
        });
        prop_assert_eq!(flatten_event(&raw).fei_numbers, numbers.join(FEI_SEPARATOR));
    }

    #[test]
    fn k_numbers_and_only_k_numbers_get_a_link(number in ".{0,12}") {
        let record = flatten_event(&serde_json::json!({ "pma_pmn_number": number.clone() }));
        prop_assert_eq!(record.regulatory_link.is_some(), number.starts_with('K'));
        prop_assert_eq!(record.regulatory_number, number);
    }
}
