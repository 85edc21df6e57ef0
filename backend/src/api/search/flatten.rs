//! Reshapes nested provider event records into flat table rows.

use common::{
    flat_record::{FlatRecord, ResultSet},
    search_const::{FEI_SEPARATOR, PMN_LINK_PREFIX},
};
use serde_json::Value;

/// Never fails: absent, null or oddly-typed parts of the record become empty cells.
pub fn flatten_event(raw: &Value) -> FlatRecord {
    let device = raw
        .get("device")
        .and_then(Value::as_array)
        .and_then(|devices| devices.first())
        .unwrap_or(&Value::Null);
    let openfda = device.get("openfda").unwrap_or(&Value::Null);

    let regulatory_number = text_at(raw, "pma_pmn_number");
    let regulatory_link = regulatory_number.as_deref().and_then(premarket_notification_link);

    FlatRecord {
        manufacturer: text_at(device, "manufacturer_d_name"),
        brand_name: text_at(device, "brand_name"),
        generic_name: text_at(device, "generic_name"),
        product_code: text_at(device, "device_report_product_code"),
        udi_di: text_at(device, "udi_di"),
        device_name_fda: text_at(openfda, "device_name"),
        device_class: text_at(openfda, "device_class"),
        regulatory_number: regulatory_number.unwrap_or_default(),
        regulatory_link,
        event_type: text_at(raw, "event_type"),
        event_date: text_at(raw, "date_of_event"),
        received_date: text_at(raw, "date_received"),
        fei_numbers: join_fei_numbers(openfda.get("fei_number")),
    }
}

/// Flattens every record, keeping provider order.
pub fn flatten_events(raw_events: &[Value]) -> ResultSet {
    raw_events.iter().map(flatten_event).collect()
}

/// Numbers starting with `K` are taken to be 510(k) premarket notifications.
/// This is a prefix heuristic; the provider field also carries PMA and other numbers.
pub fn premarket_notification_link(number: &str) -> Option<String> {
    if number.starts_with('K') {
        Some(format!("{PMN_LINK_PREFIX}{number}"))
    } else {
        None
    }
}

fn text_at(object: &Value, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn join_fei_numbers(value: Option<&Value>) -> String {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect::<Vec<_>>()
            .join(FEI_SEPARATOR),
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}
