use actix_web::{web, HttpResponse, Responder};
use common::config::ConsoleSettings;

/// `GET /console/config`
pub async fn process(settings: web::Data<ConsoleSettings>) -> impl Responder {
    HttpResponse::Ok().json(settings.get_ref())
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use common::config::{ConsoleSettings, CONSOLE_CONFIG_PATH};

    use crate::services::console::configure_routes;

    #[actix_web::test]
    async fn publishes_settings_in_camel_case() {
        let settings = ConsoleSettings {
            api_base_url: "http://dq:9000".to_string(),
            association_redirect_ms: 250,
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(settings.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri(CONSOLE_CONFIG_PATH).to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["apiBaseUrl"], "http://dq:9000");
        assert_eq!(body["associationRedirectMs"], 250);
    }
}
