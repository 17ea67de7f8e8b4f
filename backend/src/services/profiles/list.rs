use actix_web::{HttpResponse, Responder, web};

use crate::state::AppState;

pub async fn process(state: web::Data<AppState>) -> impl Responder {
    match state.store.list() {
        Ok(profiles) => HttpResponse::Ok().json(profiles),
        Err(e) => {
            HttpResponse::ServiceUnavailable().body(format!("Error listing profiles: {}", e))
        }
    }
}
