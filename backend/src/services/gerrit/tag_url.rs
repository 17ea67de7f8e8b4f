use actix_web::{HttpResponse, Responder, web};
use common::requests::{TagUrl, TagUrlQuery};

use crate::state::AppState;

pub async fn process(state: web::Data<AppState>, query: web::Query<TagUrlQuery>) -> impl Responder {
    match state.gerrit.tag_url_by_exact_name(&query.project, &query.tag).await {
        Ok(Some(url)) => HttpResponse::Ok().json(TagUrl { url }),
        Ok(None) => HttpResponse::NotFound().body("Tag URL not found"),
        Err(e) => HttpResponse::ServiceUnavailable().body(e),
    }
}
