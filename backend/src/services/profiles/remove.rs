use actix_web::{HttpResponse, Responder, web};
use serde_json::json;

use crate::state::AppState;

pub async fn process(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = match path.into_inner().parse::<i64>() {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("sw_package_id must be numeric"),
    };
    match state.store.delete(id) {
        Ok(true) => HttpResponse::Ok().json(json!({ "success": true, "mode": "deleted" })),
        Ok(false) => HttpResponse::NotFound().body("Profile not found"),
        Err(e) => {
            HttpResponse::ServiceUnavailable().body(format!("Error deleting profile: {}", e))
        }
    }
}
