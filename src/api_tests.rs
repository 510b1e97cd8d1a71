#[cfg(test)]
mod api_scenario_tests {
    use crate::config::Config;
    use crate::routes;
    use crate::server::Server;
    use actix_web::{App, http::StatusCode, test};
    use chrono::{DateTime, Utc};
    use serde_json::{Value, json};

    async fn create_test_app() -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        let server = Server::new(Config::default());
        test::init_service(
            App::new()
                .app_data(server.clock_data())
                .configure(routes::configure),
        )
        .await
    }

    #[actix_web::test]
    async fn test_health_returns_healthy_status() {
        let app = create_test_app().await;
        let req = test::TestRequest::get().uri("/health").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn test_users_returns_list() {
        let app = create_test_app().await;
        let req = test::TestRequest::get().uri("/api/users").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let users = body.as_array().expect("listing should be an array");
        assert_eq!(users.len(), 2);
        assert_eq!(users[0]["id"], 1);
        assert_eq!(users[1]["id"], 2);
    }

    #[actix_web::test]
    async fn test_create_user() {
        let app = create_test_app().await;
        let issued = Utc::now();
        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "name": "Bob", "email": "bob@example.com" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["id"], 3);
        assert_eq!(body["name"], "Bob");
        assert_eq!(body["email"], "bob@example.com");

        let created_at = DateTime::parse_from_rfc3339(body["createdAt"].as_str().unwrap())
            .expect("createdAt should be RFC 3339")
            .with_timezone(&Utc);
        assert!(created_at >= issued);
    }

    #[actix_web::test]
    async fn test_create_user_without_email_fails() {
        let app = create_test_app().await;
        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "name": "Invalid" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        let error = body["error"].as_str().expect("error should be a string");
        assert!(!error.is_empty());
        assert!(body.get("id").is_none());
        assert!(body.get("createdAt").is_none());
    }

    #[actix_web::test]
    async fn test_sum_returns_sum() {
        let app = create_test_app().await;
        let req = test::TestRequest::get().uri("/api/sum/5/3").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "a": 5, "b": 3, "sum": 8 }));
    }

    #[actix_web::test]
    async fn test_listing_survives_creation() {
        let app = create_test_app().await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "name": "Bob", "email": "bob@example.com" }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );

        let req = test::TestRequest::get().uri("/api/users").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.as_array().map(Vec::len), Some(2));
    }
}
