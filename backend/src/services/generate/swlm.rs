use actix_web::{HttpResponse, Responder, web};
use common::model::profile::package_id;
use common::requests::GenerateRequest;
use log::warn;

use crate::generator;
use crate::state::AppState;

pub async fn process(
    state: web::Data<AppState>,
    payload: web::Json<GenerateRequest>,
) -> impl Responder {
    let request = payload.into_inner();
    let sw_version = request.sw_version.trim().to_string();
    let id = match package_id(Some(&request.sw_package_id)) {
        Some(id) if !sw_version.is_empty() => id,
        _ => {
            return HttpResponse::BadRequest().body("sw_package_id and sw_version are required");
        }
    };

    let profile = match state.store.get(id) {
        Ok(Some(profile)) => profile,
        Ok(None) => return HttpResponse::NotFound().body("Profile not found"),
        Err(e) => {
            return HttpResponse::ServiceUnavailable().body(format!("Error loading profile: {}", e));
        }
    };

    match generator::generate(&profile, &sw_version, &state.gerrit, &state.artifactory).await {
        Ok(generated) => {
            for warning in &generated.warnings {
                warn!("generate sw_package {}: {}", id, warning);
            }
            HttpResponse::Ok().json(generated.document)
        }
        Err(e) => HttpResponse::BadRequest().body(e),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test, web};
    use serde_json::json;

    use crate::config::Config;
    use crate::state::AppState;

    fn test_state(dir: &tempfile::TempDir) -> AppState {
        let config = Config {
            bind_host: "127.0.0.1".to_string(),
            bind_port: 0,
            profile_db: dir
                .path()
                .join("profiles.sqlite")
                .to_string_lossy()
                .into_owned(),
            gerrit_url: "http://gerrit.invalid".to_string(),
            gerrit_user: String::new(),
            gerrit_pass: String::new(),
            artifactory_base_url: "http://artifactory.invalid".to_string(),
            artifactory_token: String::new(),
            artifactory_repo: "ARTBC-SUM-LTS".to_string(),
            carweaver_url: "http://carweaver.invalid".to_string(),
            carweaver_user: String::new(),
            carweaver_pass: String::new(),
            carweaver_key: String::new(),
        };
        AppState::new(&config)
    }

    #[actix_web::test]
    async fn missing_fields_are_a_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(&dir)))
                .service(super::super::configure_routes()),
        )
        .await;

        for body in [
            json!({ "sw_version": "REL_1.0" }),
            json!({ "sw_package_id": 1 }),
            json!({ "sw_package_id": 1, "sw_version": "   " }),
        ] {
            let request = test::TestRequest::post()
                .uri("/api/generate/swlm")
                .set_json(body)
                .to_request();
            let response = test::call_service(&app, request).await;
            assert_eq!(response.status(), 400);
        }
    }

    #[actix_web::test]
    async fn unknown_profile_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(&dir)))
                .service(super::super::configure_routes()),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/api/generate/swlm")
            .set_json(json!({ "sw_package_id": 99, "sw_version": "REL_1.0" }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 404);
    }
}
