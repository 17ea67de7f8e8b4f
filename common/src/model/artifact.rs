//! Build-artifact records.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::constants::{ARTIFACT_KIND, BUILDTIME_CP, BUILDTIME_CPV, TARGET_PLATFORM};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildtimeConfiguration {
    pub cp: String,
    pub cpv: Vec<String>,
}

impl Default for BuildtimeConfiguration {
    fn default() -> Self {
        Self {
            cp: BUILDTIME_CP.to_string(),
            cpv: vec![BUILDTIME_CPV.to_string()],
        }
    }
}

/// A build artifact in its closed, normalized shape. Stored profiles keep
/// `version`, `location` and `sha256` blank; generation fills them from the
/// artifact store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    pub idx: u32,
    pub name: String,
    pub kind: String,
    pub version: String,
    pub location: String,
    pub sha256: String,
    pub target_platform: String,
    pub buildtime_configurations: Vec<BuildtimeConfiguration>,
    pub source_references_idx: Vec<i64>,
}

impl Artifact {
    /// Storage shape: editable fields kept, generated fields blank, static
    /// fields forced to their fixed values.
    pub fn normalized(idx: u32, name: &str, source_references_idx: Vec<i64>) -> Self {
        Self {
            idx,
            name: name.to_string(),
            kind: ARTIFACT_KIND.to_string(),
            version: String::new(),
            location: String::new(),
            sha256: String::new(),
            target_platform: TARGET_PLATFORM.to_string(),
            buildtime_configurations: vec![BuildtimeConfiguration::default()],
            source_references_idx,
        }
    }
}

impl From<Artifact> for Value {
    fn from(artifact: Artifact) -> Value {
        json!({
            "idx": artifact.idx,
            "name": artifact.name,
            "kind": artifact.kind,
            "version": artifact.version,
            "location": artifact.location,
            "sha256": artifact.sha256,
            "target_platform": artifact.target_platform,
            "buildtime_configurations": artifact.buildtime_configurations,
            "source_references_idx": artifact.source_references_idx,
        })
    }
}

/// Pulls `source_references_idx` out of a raw artifact value, sorted
/// ascending. Non-integer entries are dropped.
pub fn sorted_reference_indices(artifact: &Value) -> Vec<i64> {
    let mut indices: Vec<i64> = artifact
        .get("source_references_idx")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_i64).collect())
        .unwrap_or_default();
    indices.sort_unstable();
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_artifact_forces_static_fields() {
        let artifact = Artifact::normalized(2, "SUM SWP1", vec![1, 3]);
        assert_eq!(artifact.kind, "VBF file");
        assert_eq!(artifact.target_platform, "SUM1");
        assert_eq!(artifact.version, "");
        assert_eq!(artifact.sha256, "");
        assert_eq!(artifact.buildtime_configurations[0].cp, "VCTN");
        assert_eq!(artifact.buildtime_configurations[0].cpv, vec!["PRR"]);
    }

    #[test]
    fn value_conversion_keeps_field_order() {
        let value = Value::from(Artifact::normalized(1, "SUM SWLM", vec![]));
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "idx",
                "name",
                "kind",
                "version",
                "location",
                "sha256",
                "target_platform",
                "buildtime_configurations",
                "source_references_idx",
            ]
        );
    }

    #[test]
    fn reference_indices_are_sorted() {
        let artifact = json!({ "source_references_idx": [4, 1, 3] });
        assert_eq!(sorted_reference_indices(&artifact), vec![1, 3, 4]);
        assert_eq!(sorted_reference_indices(&json!({})), Vec::<i64>::new());
    }
}
