//! Source-reference sub-records.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::constants::{DEFAULT_FILENAMN, DEFAULT_REGULATORY_REQUIREMENT};

/// Change-log record attached to every source reference. `version` and
/// `location` stay blank in storage; generation fills them from the requested
/// release and the resolved reference URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeLog {
    pub filenamn: String,
    pub version: String,
    pub location: String,
}

impl ChangeLog {
    /// Blank change log, carrying over a stored label when there is one.
    pub fn cleared(filenamn: Option<&str>) -> Self {
        let filenamn = match filenamn {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => DEFAULT_FILENAMN.to_string(),
        };
        Self {
            filenamn,
            version: String::new(),
            location: String::new(),
        }
    }
}

impl From<ChangeLog> for Value {
    fn from(log: ChangeLog) -> Value {
        json!({
            "filenamn": log.filenamn,
            "version": log.version,
            "location": log.location,
        })
    }
}

/// Skeleton for a new source reference added in the editor.
pub fn new_source_reference(idx: u32) -> Value {
    json!({
        "idx": idx,
        "name": "",
        "version": "",
        "location": "",
        "components": [],
        "additional_information": [],
        "regulatory_requirements": [DEFAULT_REGULATORY_REQUIREMENT],
        "change_log": ChangeLog::cleared(None),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleared_change_log_keeps_custom_label() {
        let log = ChangeLog::cleared(Some("release notes"));
        assert_eq!(log.filenamn, "release notes");
        assert_eq!(log.version, "");
        assert_eq!(log.location, "");
    }

    #[test]
    fn cleared_change_log_defaults_empty_label() {
        assert_eq!(ChangeLog::cleared(None).filenamn, "Gerrit log");
        assert_eq!(ChangeLog::cleared(Some("")).filenamn, "Gerrit log");
    }

    #[test]
    fn new_reference_defaults_regulatory_requirements() {
        let reference = new_source_reference(3);
        assert_eq!(reference["idx"], json!(3));
        assert_eq!(reference["regulatory_requirements"], json!(["N/A"]));
        assert_eq!(reference["change_log"]["filenamn"], json!("Gerrit log"));
    }
}
