//! Profile skeletons and field helpers.
//!
//! Profiles travel through the system as `serde_json::Value` trees so that
//! unknown fields survive every hop; the builders here produce the canonical
//! empty shapes the editor starts from.

use serde_json::{Value, json};

/// Canonical shape of a freshly created, still empty profile.
pub fn empty_profile() -> Value {
    json!({
        "sw_package_id": null,
        "profile_name": "",
        "generic_product_module": empty_generic_product_module(),
        "source_references": [],
        "swad": [],
        "swdd": [],
        "artifacts": [],
    })
}

/// Zeroed `generic_product_module` record.
pub fn empty_generic_product_module() -> Value {
    json!({ "location": "", "id": "", "version": "" })
}

/// Reads a package id that may arrive as a JSON number or a numeric string.
pub fn package_id(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
