use serde_json::{Map, Value};

use crate::model::profile::empty_generic_product_module;

const PROFILE_KEYS: [&str; 7] = [
    "sw_package_id",
    "profile_name",
    "generic_product_module",
    "source_references",
    "swad",
    "swdd",
    "artifacts",
];

const GENERATED_KEYS: [&str; 9] = [
    "sw_package_id",
    "sw_package_version",
    "sw_package_type",
    "generic_product_module",
    "source_references",
    "swad",
    "swdd",
    "artifacts",
    "sw_version",
];

/// Re-keys a profile into canonical field order. Missing collections default
/// to empty arrays and a missing `generic_product_module` to its zeroed
/// shape; unknown fields are appended after the known ones in their original
/// order. Never drops data; non-object input is returned unchanged.
pub fn order_profile(profile: &Value) -> Value {
    let Some(map) = profile.as_object() else {
        return profile.clone();
    };
    let mut out = Map::new();
    out.insert("sw_package_id".to_string(), scalar_or_empty(map, "sw_package_id"));
    out.insert("profile_name".to_string(), scalar_or_empty(map, "profile_name"));
    out.insert(
        "generic_product_module".to_string(),
        map.get("generic_product_module")
            .cloned()
            .unwrap_or_else(empty_generic_product_module),
    );
    for key in ["source_references", "swad", "swdd", "artifacts"] {
        out.insert(key.to_string(), array_or_empty(map, key));
    }
    append_unknown(&mut out, map, &PROFILE_KEYS);
    Value::Object(out)
}

/// Same re-keying for a generated document. `sw_package_version`,
/// `sw_package_type` and `sw_version` are emitted only when present.
pub fn order_generated(document: &Value) -> Value {
    let Some(map) = document.as_object() else {
        return document.clone();
    };
    let mut out = Map::new();
    out.insert("sw_package_id".to_string(), scalar_or_empty(map, "sw_package_id"));
    for key in ["sw_package_version", "sw_package_type"] {
        if let Some(value) = map.get(key) {
            out.insert(key.to_string(), value.clone());
        }
    }
    out.insert(
        "generic_product_module".to_string(),
        map.get("generic_product_module")
            .cloned()
            .unwrap_or_else(empty_generic_product_module),
    );
    for key in ["source_references", "swad", "swdd", "artifacts"] {
        out.insert(key.to_string(), array_or_empty(map, key));
    }
    if let Some(value) = map.get("sw_version") {
        out.insert("sw_version".to_string(), value.clone());
    }
    append_unknown(&mut out, map, &GENERATED_KEYS);
    Value::Object(out)
}

fn scalar_or_empty(map: &Map<String, Value>, key: &str) -> Value {
    map.get(key).cloned().unwrap_or_else(|| Value::from(""))
}

fn array_or_empty(map: &Map<String, Value>, key: &str) -> Value {
    match map.get(key) {
        Some(value @ Value::Array(_)) => value.clone(),
        _ => Value::Array(Vec::new()),
    }
}

fn append_unknown(out: &mut Map<String, Value>, source: &Map<String, Value>, known: &[&str]) {
    for (key, value) in source {
        if !known.contains(&key.as_str()) {
            out.insert(key.clone(), value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys(value: &Value) -> Vec<&str> {
        value.as_object().unwrap().keys().map(String::as_str).collect()
    }

    #[test]
    fn profile_keys_come_out_in_canonical_order() {
        let input = json!({
            "artifacts": [],
            "profile_name": "p",
            "sw_package_id": 1,
            "swdd": [],
            "swad": [],
            "source_references": [],
            "generic_product_module": { "location": "", "id": "", "version": "" },
        });
        assert_eq!(keys(&order_profile(&input)), PROFILE_KEYS);
    }

    #[test]
    fn profile_defaults_missing_fields() {
        let ordered = order_profile(&json!({ "sw_package_id": 7 }));
        assert_eq!(ordered["profile_name"], json!(""));
        assert_eq!(ordered["source_references"], json!([]));
        assert_eq!(ordered["artifacts"], json!([]));
        assert_eq!(
            ordered["generic_product_module"],
            json!({ "location": "", "id": "", "version": "" })
        );
    }

    #[test]
    fn profile_keeps_unknown_fields_after_known_ones() {
        let input = json!({ "custom": true, "sw_package_id": 1, "another": "x" });
        let ordered = order_profile(&input);
        assert_eq!(ordered["custom"], json!(true));
        assert_eq!(ordered["another"], json!("x"));
        let ordered_keys = keys(&ordered);
        assert_eq!(ordered_keys[..7], PROFILE_KEYS);
        assert_eq!(ordered_keys[7..], ["custom", "another"]);
    }

    #[test]
    fn generated_optional_keys_only_when_present() {
        let without = order_generated(&json!({ "sw_package_id": 1 }));
        assert!(without.get("sw_version").is_none());
        assert!(without.get("sw_package_version").is_none());

        let with = order_generated(&json!({
            "sw_package_id": 1,
            "sw_version": "REL_1.0",
            "sw_package_version": "1.0.0",
            "sw_package_type": "standard",
        }));
        assert_eq!(
            keys(&with),
            [
                "sw_package_id",
                "sw_package_version",
                "sw_package_type",
                "generic_product_module",
                "source_references",
                "swad",
                "swdd",
                "artifacts",
                "sw_version",
            ]
        );
    }

    #[test]
    fn generated_keeps_unknown_fields() {
        let ordered = order_generated(&json!({ "sw_package_id": 1, "note": "keep me" }));
        assert_eq!(ordered["note"], json!("keep me"));
        assert_eq!(*keys(&ordered).last().unwrap(), "note");
    }

    #[test]
    fn non_objects_pass_through() {
        assert_eq!(order_profile(&json!(null)), json!(null));
        assert_eq!(order_generated(&json!([1, 2])), json!([1, 2]));
    }
}
