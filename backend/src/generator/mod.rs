//! Profile-to-deliverable generation.
//!
//! `generate` turns a stored profile plus a release version string into the
//! final deliverable document:
//!
//! 1. Refuses a blank version (the caller's precondition); otherwise takes a
//!    deep working copy with every empty `version` field filled and the
//!    editor-only `profile_name` removed.
//! 2. Resolves every source reference concurrently: the reference's project
//!    name becomes a browseable tag URL, each additional-information entry
//!    resolves its own project (or inherits the parent's), and the change
//!    log is stamped with the release version and the reference URL.
//! 3. Resolves every artifact concurrently against the artifact store and
//!    rebuilds it to the closed deliverable shape.
//! 4. Renumbers the resolved references, attaches `sw_version` and the
//!    derived `sw_package_version`, and returns the document in canonical
//!    field order.
//!
//! The two fan-outs are independent and overlap. Lookup failures never abort
//! a run: a reference or additional-information entry falls back to its
//! unresolved project string, an artifact keeps blank delivery metadata and
//! contributes a warning for the caller to surface. The input profile is
//! never modified.

use common::constants::{ARTIFACT_KIND, DEFAULT_FILENAMN, TARGET_PLATFORM};
use common::model::artifact::{Artifact, BuildtimeConfiguration, sorted_reference_indices};
use common::requests::ArtifactMeta;
use common::transform::{fill_versions, order_generated, renumber_source_references};
use common::version::sw_package_version;
use futures_util::future::join_all;
use log::debug;
use serde_json::Value;

/// Resolves a project name plus version tag to a browseable URL.
pub trait TagUrlResolver {
    async fn tag_url(&self, project: &str, tag: &str) -> Result<Option<String>, String>;
}

/// Resolves delivery metadata for a named artifact at a version tag.
pub trait ArtifactMetaResolver {
    async fn artifact_meta(&self, name: &str, sw_version: &str) -> Result<ArtifactMeta, String>;
}

/// One generation run: the deliverable document plus the non-fatal warnings
/// collected along the way.
pub struct GeneratedPackage {
    pub document: Value,
    pub warnings: Vec<String>,
}

pub async fn generate<T, A>(
    profile: &Value,
    sw_version: &str,
    tags: &T,
    artifacts: &A,
) -> Result<GeneratedPackage, String>
where
    T: TagUrlResolver,
    A: ArtifactMetaResolver,
{
    let sw_version = sw_version.trim();
    if sw_version.is_empty() {
        return Err("sw_version is required".to_string());
    }

    let filled = fill_versions(profile, sw_version);
    let Value::Object(mut working) = filled else {
        return Err("profile must be a JSON object".to_string());
    };
    // Editor-only metadata, never part of the deliverable.
    working.shift_remove("profile_name");

    let references = working
        .get("source_references")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    let artifact_entries = working
        .get("artifacts")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    let reference_futures = join_all(
        references
            .iter()
            .map(|reference| resolve_reference(reference, sw_version, tags)),
    );
    let artifact_futures = join_all(
        artifact_entries
            .iter()
            .enumerate()
            .map(|(position, artifact)| resolve_artifact(position, artifact, sw_version, artifacts)),
    );
    let (resolved_references, resolved_artifacts) =
        futures_util::join!(reference_futures, artifact_futures);

    let mut warnings = Vec::new();
    let mut artifact_values = Vec::with_capacity(resolved_artifacts.len());
    for (value, warning) in resolved_artifacts {
        artifact_values.push(value);
        warnings.extend(warning);
    }

    working.insert(
        "source_references".to_string(),
        Value::Array(renumber_source_references(&resolved_references)),
    );
    working.insert("artifacts".to_string(), Value::Array(artifact_values));
    working.insert("sw_version".to_string(), Value::from(sw_version));
    working.insert(
        "sw_package_version".to_string(),
        Value::from(sw_package_version(sw_version)),
    );
    let package_type = working
        .get("sw_package_type")
        .and_then(Value::as_str)
        .filter(|package_type| !package_type.is_empty())
        .unwrap_or("standard")
        .to_string();
    working.insert("sw_package_type".to_string(), Value::from(package_type));

    Ok(GeneratedPackage {
        document: order_generated(&Value::Object(working)),
        warnings,
    })
}

async fn resolve_reference<T: TagUrlResolver>(
    reference: &Value,
    sw_version: &str,
    tags: &T,
) -> Value {
    let mut out = reference.as_object().cloned().unwrap_or_default();
    let base_project = trimmed(out.get("location"));

    let reference_url = resolve_or_fallback(&base_project, sw_version, tags).await;

    let infos = out
        .get("additional_information")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    let resolved_infos = join_all(
        infos
            .iter()
            .map(|info| resolve_additional_information(info, &base_project, sw_version, tags)),
    )
    .await;
    out.insert(
        "additional_information".to_string(),
        Value::Array(resolved_infos),
    );

    let mut change_log = out
        .get("change_log")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();
    if !change_log.contains_key("filenamn") {
        change_log.insert("filenamn".to_string(), Value::from(DEFAULT_FILENAMN));
    }
    change_log.insert("version".to_string(), Value::from(sw_version));
    change_log.insert("location".to_string(), Value::from(reference_url.clone()));
    out.insert("change_log".to_string(), Value::Object(change_log));

    // Components are refreshed in the editor, not re-resolved here.
    if !matches!(out.get("components"), Some(Value::Array(_))) {
        out.insert("components".to_string(), Value::Array(Vec::new()));
    }

    out.insert("location".to_string(), Value::from(reference_url));
    Value::Object(out)
}

async fn resolve_additional_information<T: TagUrlResolver>(
    info: &Value,
    base_project: &str,
    sw_version: &str,
    tags: &T,
) -> Value {
    let mut out = info.as_object().cloned().unwrap_or_default();
    let own_project = trimmed(out.get("location"));
    let project = if own_project.is_empty() {
        base_project.to_string()
    } else {
        own_project
    };
    let resolved = resolve_or_fallback(&project, sw_version, tags).await;
    out.insert("location".to_string(), Value::from(resolved));
    Value::Object(out)
}

/// Empty project resolves to an empty location; a failed or empty lookup
/// falls back to the unresolved project string.
async fn resolve_or_fallback<T: TagUrlResolver>(
    project: &str,
    sw_version: &str,
    tags: &T,
) -> String {
    if project.is_empty() {
        return String::new();
    }
    match tags.tag_url(project, sw_version).await {
        Ok(Some(url)) if !url.is_empty() => url,
        Ok(_) => project.to_string(),
        Err(error) => {
            debug!("tag lookup for {} failed: {}", project, error);
            project.to_string()
        }
    }
}

async fn resolve_artifact<A: ArtifactMetaResolver>(
    position: usize,
    artifact: &Value,
    sw_version: &str,
    resolver: &A,
) -> (Value, Option<String>) {
    let name = trimmed(artifact.get("name"));
    let mut location = String::new();
    let mut sha256 = String::new();
    let mut warning = None;
    if !name.is_empty() {
        match resolver.artifact_meta(&name, sw_version).await {
            Ok(meta) => {
                location = meta.location;
                sha256 = meta.sha256;
            }
            Err(error) => warning = Some(format!("Artifact \"{}\": {}", name, error)),
        }
    }

    let version = artifact
        .get("version")
        .and_then(Value::as_str)
        .filter(|version| !version.is_empty())
        .unwrap_or(sw_version)
        .to_string();

    let resolved = Artifact {
        idx: position as u32 + 1,
        name,
        kind: ARTIFACT_KIND.to_string(),
        version,
        location,
        sha256,
        target_platform: TARGET_PLATFORM.to_string(),
        buildtime_configurations: vec![BuildtimeConfiguration::default()],
        source_references_idx: sorted_reference_indices(artifact),
    };
    (resolved.into(), warning)
}

fn trimmed(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .unwrap_or("")
        .trim()
        .to_string()
}
