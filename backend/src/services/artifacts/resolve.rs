use actix_web::{HttpResponse, Responder, web};
use common::constants::is_known_artifact_name;
use common::requests::ArtifactResolveQuery;

use crate::state::AppState;

pub async fn process(
    state: web::Data<AppState>,
    query: web::Query<ArtifactResolveQuery>,
) -> impl Responder {
    if !is_known_artifact_name(&query.name) {
        return HttpResponse::BadRequest().body(format!("Unknown artifact name: {}", query.name));
    }
    match state.artifactory.resolve(&query.name, &query.sw_version).await {
        Ok(meta) => HttpResponse::Ok().json(meta),
        Err(e) => HttpResponse::NotFound().body(e),
    }
}
