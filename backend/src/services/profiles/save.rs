//! Create-or-replace handler for `POST /api/profiles`.
//!
//! Accepts either a single profile object, which is upserted by its
//! `sw_package_id`, or an array of profiles, which replaces the whole stored
//! collection (legacy bulk mode kept for older clients). Every incoming
//! profile is normalized before persisting, so stored documents are always
//! in canonical shape regardless of what the editor sent.

use actix_web::{HttpResponse, Responder, web};
use common::transform::normalize_for_save;
use serde_json::{Value, json};

use crate::state::AppState;
use crate::store::ProfileStore;

pub async fn process(state: web::Data<AppState>, payload: web::Json<Value>) -> impl Responder {
    match payload.into_inner() {
        Value::Array(profiles) => replace_all(&state.store, &profiles),
        profile => save_one(&state.store, &profile),
    }
}

fn replace_all(store: &ProfileStore, profiles: &[Value]) -> HttpResponse {
    let normalized: Result<Vec<Value>, String> = profiles.iter().map(normalize_for_save).collect();
    let normalized = match normalized {
        Ok(normalized) => normalized,
        Err(e) => return HttpResponse::BadRequest().body(e),
    };
    match store.replace_all(&normalized) {
        Ok(()) => HttpResponse::Ok().json(json!({ "success": true, "mode": "replaced_all" })),
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("Error saving profiles: {}", e)),
    }
}

pub(super) fn save_one(store: &ProfileStore, profile: &Value) -> HttpResponse {
    let normalized = match normalize_for_save(profile) {
        Ok(normalized) => normalized,
        Err(e) => return HttpResponse::BadRequest().body(e),
    };
    match upsert_mode(store, &normalized) {
        Ok(mode) => HttpResponse::Ok().json(json!({ "success": true, "mode": mode })),
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("Error saving profile: {}", e)),
    }
}

fn upsert_mode(store: &ProfileStore, normalized: &Value) -> Result<&'static str, String> {
    let id = common::model::profile::package_id(normalized.get("sw_package_id"))
        .ok_or_else(|| "sw_package_id is required".to_string())?;
    let existing = store.get(id)?;
    store.upsert(normalized)?;
    Ok(if existing.is_some() { "updated" } else { "created" })
}
