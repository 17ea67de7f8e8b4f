mod clients;
mod config;
mod generator;
mod services;
mod state;
mod store;

use actix_web::{web, App, HttpResponse, HttpServer};
use env_logger::Env;
use log::info;

use crate::config::Config;
use crate::state::AppState;

async fn banner() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "msg": "SW package profile service running.",
        "generate": "POST /api/generate/swlm with { sw_package_id, sw_version }",
        "helpers": [
            "GET /api/gerrit/tag_url?project=...&tag=...",
            "GET /api/artifacts/resolve?name=SUM%20SWLM&sw_version=BSW_VCC_20.0.1",
            "GET /api/carweaver/generic_product_module/{item_id}",
            "GET /api/carweaver/source_components/{item_id}",
        ],
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let state = AppState::new(&config);
    let (host, port) = (config.bind_host.clone(), config.bind_port);

    info!("Server running at http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
            .app_data(web::Data::new(state.clone()))
            .service(services::profiles::configure_routes())
            .service(services::generate::configure_routes())
            .service(services::gerrit::configure_routes())
            .service(services::artifacts::configure_routes())
            .service(services::carweaver::configure_routes())
            .route("/", web::get().to(banner))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
