use serde_json::{Map, Value};

use super::{order_profile, renumber_source_references, to_project_name};
use crate::constants::{
    DEFAULT_CATEGORY, DEFAULT_KIND, DEFAULT_REGULATORY_REQUIREMENT, KIND_GENERATED_CODE,
    content_type_for_kind,
};
use crate::model::artifact::{Artifact, sorted_reference_indices};
use crate::model::profile::package_id;
use crate::model::source_reference::ChangeLog;

/// Puts an edited profile into its canonical storage shape:
///
/// - `sw_package_id` is required and canonicalized to a JSON number;
/// - source references are renumbered, their `location` reduced to a bare
///   project name, additional information re-stamped (`category`, coerced
///   `kind`, derived `content_type`, project-name `location`), regulatory
///   requirements defaulted, and the change log cleared down to its label;
/// - artifacts are rebuilt to the closed shape with generated fields blank
///   and `source_references_idx` sorted ascending;
/// - the result is returned in canonical display order.
///
/// Generation-only values never reach storage through this path.
pub fn normalize_for_save(profile: &Value) -> Result<Value, String> {
    let map = profile
        .as_object()
        .ok_or_else(|| "profile must be a JSON object".to_string())?;
    let id = package_id(map.get("sw_package_id"))
        .ok_or_else(|| "profile must have a SW package id".to_string())?;

    let mut out = map.clone();
    out.insert("sw_package_id".to_string(), Value::from(id));

    let references: Vec<Value> = map
        .get("source_references")
        .and_then(Value::as_array)
        .map(|refs| refs.iter().map(normalize_reference).collect())
        .unwrap_or_default();
    out.insert(
        "source_references".to_string(),
        Value::Array(renumber_source_references(&references)),
    );

    let artifacts: Vec<Value> = map
        .get("artifacts")
        .and_then(Value::as_array)
        .map(|artifacts| {
            artifacts
                .iter()
                .enumerate()
                .map(|(i, artifact)| normalize_artifact(i, artifact))
                .collect()
        })
        .unwrap_or_default();
    out.insert("artifacts".to_string(), Value::Array(artifacts));

    Ok(order_profile(&Value::Object(out)))
}

fn normalize_reference(reference: &Value) -> Value {
    let Some(map) = reference.as_object() else {
        return reference.clone();
    };
    let mut out = map.clone();

    out.insert(
        "location".to_string(),
        Value::from(to_project_name(str_field(map, "location"))),
    );
    if !matches!(map.get("components"), Some(Value::Array(_))) {
        out.insert("components".to_string(), Value::Array(Vec::new()));
    }

    let infos: Vec<Value> = map
        .get("additional_information")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().map(normalize_additional_information).collect())
        .unwrap_or_default();
    out.insert("additional_information".to_string(), Value::Array(infos));

    if !matches!(map.get("regulatory_requirements"), Some(Value::Array(_))) {
        out.insert(
            "regulatory_requirements".to_string(),
            Value::from(vec![DEFAULT_REGULATORY_REQUIREMENT]),
        );
    }

    let filenamn = map
        .get("change_log")
        .and_then(|log| log.get("filenamn"))
        .and_then(Value::as_str);
    out.insert("change_log".to_string(), ChangeLog::cleared(filenamn).into());

    Value::Object(out)
}

fn normalize_additional_information(entry: &Value) -> Value {
    let Some(map) = entry.as_object() else {
        return entry.clone();
    };
    let mut out = map.clone();
    let kind = if str_field(map, "kind") == KIND_GENERATED_CODE {
        KIND_GENERATED_CODE
    } else {
        DEFAULT_KIND
    };
    out.insert("category".to_string(), Value::from(DEFAULT_CATEGORY));
    out.insert("kind".to_string(), Value::from(kind));
    out.insert("content_type".to_string(), Value::from(content_type_for_kind(kind)));
    out.insert(
        "location".to_string(),
        Value::from(to_project_name(str_field(map, "location"))),
    );
    Value::Object(out)
}

fn normalize_artifact(position: usize, artifact: &Value) -> Value {
    let name = artifact.get("name").and_then(Value::as_str).unwrap_or("");
    Artifact::normalized(position as u32 + 1, name, sorted_reference_indices(artifact)).into()
}

fn str_field<'a>(map: &'a Map<String, Value>, key: &str) -> &'a str {
    map.get(key).and_then(Value::as_str).unwrap_or("")
}
