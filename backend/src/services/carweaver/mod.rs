//! CarWeaver bridge endpoints used by the editor's refresh buttons.
//!
//! All three accept either a plain item id (`x040000000302858D`) or a full
//! SystemWeaver URL (`swap://SystemWeaver:3000/x04...`); only the raw id is
//! passed upstream. Lookup failures surface as error responses and leave
//! whatever the editor currently shows untouched.

mod generic_product_module;
mod items;
mod source_components;

use actix_web::Scope;
use actix_web::web::{get, scope};

const API_PATH: &str = "/api/carweaver";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/items/{item_id}", get().to(items::process))
        .route(
            "/source_components/{item_id:.*}",
            get().to(source_components::process),
        )
        .route(
            "/generic_product_module/{item_id:.*}",
            get().to(generic_product_module::process),
        )
}
