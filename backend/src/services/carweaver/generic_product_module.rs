use actix_web::{HttpResponse, Responder, web};

use crate::state::AppState;

pub async fn process(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.carweaver.generic_product_module(&path.into_inner()).await {
        Ok(info) => HttpResponse::Ok().json(info),
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("CarWeaver error: {}", e)),
    }
}
