//! SQLite-backed profile store.
//!
//! Profiles are opaque JSON documents keyed by `sw_package_id`; the store
//! never looks inside them beyond that key. Documents are persisted as
//! canonical-order JSON text, so what goes in comes back out byte for byte.
//! A connection is opened per operation and the schema is created lazily.

use common::model::profile::package_id;
use rusqlite::{Connection, params};
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn open(&self) -> Result<Connection, String> {
        let conn = Connection::open(&self.path).map_err(|e| e.to_string())?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS profiles (
                sw_package_id INTEGER PRIMARY KEY,
                document TEXT NOT NULL
            )",
            [],
        )
        .map_err(|e| e.to_string())?;
        Ok(conn)
    }

    pub fn list(&self) -> Result<Vec<Value>, String> {
        let conn = self.open()?;
        let mut stmt = conn
            .prepare("SELECT document FROM profiles ORDER BY sw_package_id")
            .map_err(|e| e.to_string())?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| e.to_string())?;

        let mut profiles = Vec::new();
        for document in rows.filter_map(Result::ok) {
            let profile = serde_json::from_str(&document).map_err(|e| e.to_string())?;
            profiles.push(profile);
        }
        Ok(profiles)
    }

    pub fn get(&self, sw_package_id: i64) -> Result<Option<Value>, String> {
        let conn = self.open()?;
        let mut stmt = conn
            .prepare("SELECT document FROM profiles WHERE sw_package_id = ?1")
            .map_err(|e| e.to_string())?;
        let mut rows = stmt
            .query_map(params![sw_package_id], |row| row.get::<_, String>(0))
            .map_err(|e| e.to_string())?;

        match rows.next() {
            Some(Ok(document)) => serde_json::from_str(&document)
                .map(Some)
                .map_err(|e| e.to_string()),
            Some(Err(e)) => Err(e.to_string()),
            None => Ok(None),
        }
    }

    pub fn upsert(&self, profile: &Value) -> Result<(), String> {
        let conn = self.open()?;
        insert_profile(&conn, profile)
    }

    /// Replaces the whole collection (legacy bulk save).
    pub fn replace_all(&self, profiles: &[Value]) -> Result<(), String> {
        let conn = self.open()?;
        conn.execute("DELETE FROM profiles", [])
            .map_err(|e| e.to_string())?;
        for profile in profiles {
            insert_profile(&conn, profile)?;
        }
        Ok(())
    }

    /// Returns whether a profile was actually removed.
    pub fn delete(&self, sw_package_id: i64) -> Result<bool, String> {
        let conn = self.open()?;
        let deleted = conn
            .execute(
                "DELETE FROM profiles WHERE sw_package_id = ?1",
                params![sw_package_id],
            )
            .map_err(|e| e.to_string())?;
        Ok(deleted > 0)
    }
}

fn insert_profile(conn: &Connection, profile: &Value) -> Result<(), String> {
    let id = package_id(profile.get("sw_package_id"))
        .ok_or_else(|| "sw_package_id is required".to_string())?;
    let document = serde_json::to_string(profile).map_err(|e| e.to_string())?;
    conn.execute(
        "INSERT OR REPLACE INTO profiles (sw_package_id, document) VALUES (?1, ?2)",
        params![id, document],
    )
    .map_err(|e| e.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn temp_store(dir: &tempfile::TempDir) -> ProfileStore {
        ProfileStore::new(dir.path().join("profiles.sqlite"))
    }

    #[test]
    fn round_trips_documents() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        let profile = json!({ "sw_package_id": 7, "profile_name": "weekly", "custom": [1, 2] });

        store.upsert(&profile).unwrap();
        assert_eq!(store.get(7).unwrap(), Some(profile.clone()));
        assert_eq!(store.list().unwrap(), vec![profile]);
    }

    #[test]
    fn upsert_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        store.upsert(&json!({ "sw_package_id": 7, "profile_name": "a" })).unwrap();
        store.upsert(&json!({ "sw_package_id": 7, "profile_name": "b" })).unwrap();

        let profiles = store.list().unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0]["profile_name"], json!("b"));
    }

    #[test]
    fn delete_reports_presence() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        store.upsert(&json!({ "sw_package_id": 1 })).unwrap();

        assert!(store.delete(1).unwrap());
        assert!(!store.delete(1).unwrap());
        assert_eq!(store.get(1).unwrap(), None);
    }

    #[test]
    fn replace_all_swaps_the_collection() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        store.upsert(&json!({ "sw_package_id": 1 })).unwrap();

        store
            .replace_all(&[json!({ "sw_package_id": 2 }), json!({ "sw_package_id": 3 })])
            .unwrap();
        let ids: Vec<i64> = store
            .list()
            .unwrap()
            .iter()
            .map(|p| p["sw_package_id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn rejects_documents_without_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        assert!(store.upsert(&json!({ "profile_name": "x" })).is_err());
    }
}
