//! Replace-or-create handler for `PUT /api/profiles/{sw_package_id}`.
//!
//! A body without `sw_package_id` inherits the id from the URL path, so
//! clients can PUT a bare document to a known address.

use actix_web::{Responder, web};
use common::model::profile::package_id;
use serde_json::Value;

use super::save;
use crate::state::AppState;

pub async fn process(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> impl Responder {
    let mut profile = payload.into_inner();
    if package_id(profile.get("sw_package_id")).is_none() {
        if let (Some(map), Ok(id)) = (profile.as_object_mut(), path.into_inner().parse::<i64>()) {
            map.insert("sw_package_id".to_string(), Value::from(id));
        }
    }
    save::save_one(&state.store, &profile)
}
