use crate::api::App;
use crate::config::SharedConfig;
use axum::extract::State;
use axum::http::header;
use axum::routing::any;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Build the router for `app`, registering each entry of [`App::routes`] for every request
/// method.
pub fn new(app: App, config: SharedConfig) -> Router {
    app.routes()
        .iter()
        .fold(Router::<SharedConfig>::new(), |router, &(path, handler)| {
            router.route(
                path,
                any(move |State(config): State<SharedConfig>| async move {
                    (
                        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                        handler(&config),
                    )
                }),
            )
        })
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Reminder};
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn config(name: &str, vcap_services: &str) -> SharedConfig {
        Arc::new(Config {
            name: name.as_bytes().to_vec(),
            vcap_services: vcap_services.as_bytes().to_vec(),
            reminder: Reminder::default(),
            bind_addr: ([127, 0, 0, 1], 8080).into(),
        })
    }

    async fn request(
        app: App,
        config: SharedConfig,
        method: Method,
        path: &str,
    ) -> (StatusCode, String) {
        let response = new(app, config)
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(path)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn get_ok(app: App, config: SharedConfig, path: &str) -> String {
        let (status, body) = request(app, config, Method::GET, path).await;
        assert_eq!(status, StatusCode::OK, "GET {path}");
        body
    }

    #[tokio::test]
    async fn greeter_says_hello() {
        assert_eq!(get_ok(App::Greeter, config("Sam", ""), "/").await, "hello Sam\n");
        assert_eq!(get_ok(App::Greeter, config("", ""), "/").await, "hello \n");
    }

    #[tokio::test]
    async fn responses_are_plain_text() {
        let response = new(App::Greeter, config("Sam", ""))
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn farewell_routes_differ_by_version_infix() {
        let root = get_ok(App::Farewell, config("Sam", ""), "/").await;
        let v1 = get_ok(App::Farewell, config("Sam", ""), "/v1").await;
        assert_eq!(root, "goodbye Sam\n");
        assert_eq!(v1, "goodbye from v1 Sam\n");
        assert_eq!(v1.replacen("from v1 ", "", 1), root);
    }

    #[tokio::test]
    async fn unknown_paths_are_not_found() {
        for (app, path) in [
            (App::Greeter, "/v1"),
            (App::Greeter, "/hello"),
            (App::Farewell, "/v2"),
            (App::Farewell, "/v1/extra"),
            (App::CredentialGreeter, "/services"),
            (App::ReminderGreeter, "/v1"),
        ] {
            let (status, _) = request(app, config("Sam", ""), Method::GET, path).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{app:?} {path}");
        }
    }

    #[tokio::test]
    async fn every_method_gets_the_greeting() {
        for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
            assert_eq!(
                request(App::Greeter, config("Sam", ""), method.clone(), "/").await,
                (StatusCode::OK, "hello Sam\n".to_string()),
                "{method}"
            );
        }
        assert_eq!(
            request(App::Farewell, config("Sam", ""), Method::POST, "/v1").await,
            (StatusCode::OK, "goodbye from v1 Sam\n".to_string())
        );
    }

    #[tokio::test]
    async fn credential_greeter_renders_compliment_and_raw_services() {
        let vcap = r#"{"user-provided":[{"name":"compliment-service","credentials":{"compliment":"great"}}]}"#;
        let body = get_ok(App::CredentialGreeter, config("Sam", vcap), "/").await;
        assert_eq!(
            body,
            format!("hello Sam, you are great!\nYou have these services: {vcap}")
        );
    }

    #[tokio::test]
    async fn credential_greeter_survives_malformed_services() {
        let vcap = "{\"user-provided\": [";
        let body = get_ok(App::CredentialGreeter, config("Sam", vcap), "/").await;
        assert_eq!(
            body,
            format!("hello Sam, you are !\nYou have these services: {vcap}")
        );
    }

    #[tokio::test]
    async fn reminder_greeter_asks_about_the_pet() {
        let body = get_ok(App::ReminderGreeter, config("Sam", ""), "/").await;
        assert_eq!(
            body,
            "hello Sam, you are !\nYou have these services: .\nDid you remember to  your  named  at :?\n"
        );
    }

    #[tokio::test]
    async fn repeated_requests_are_identical() {
        let vcap = r#"{"user-provided":[{"name":"compliment-service","credentials":{"compliment":"kind"}}]}"#;
        let config = config("Sam", vcap);
        let first = get_ok(App::CredentialGreeter, config.clone(), "/").await;
        let second = get_ok(App::CredentialGreeter, config, "/").await;
        assert_eq!(first, second);
    }
}
