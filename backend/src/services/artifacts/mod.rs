//! Artifact helper endpoint: delivery metadata (download URL and checksum)
//! for one named artifact at a given SW version.

mod resolve;

use actix_web::Scope;
use actix_web::web::{get, scope};

const API_PATH: &str = "/api/artifacts";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/resolve", get().to(resolve::process))
}
