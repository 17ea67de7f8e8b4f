use serde_json::{Map, Value};

/// Deep copy of `value` where every object field named `version` whose value
/// is empty or missing is replaced with `sw_version`. Non-empty versions and
/// all other fields pass through unchanged; arrays are mapped element-wise.
/// Idempotent once no empty version field remains.
pub fn fill_versions(value: &Value, sw_version: &str) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| fill_versions(item, sw_version))
                .collect(),
        ),
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, item) in map {
                if key == "version" && is_blank(item) {
                    out.insert(key.clone(), Value::from(sw_version));
                } else {
                    out.insert(key.clone(), fill_versions(item, sw_version));
                }
            }
            Value::Object(out)
        }
        scalar => scalar.clone(),
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
