//! Prometheus exposition. Kept in its own binary because the recorder is
//! process-global.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use ideabox::config::Config;
use metrics_exporter_prometheus::PrometheusBuilder;
use tower::ServiceExt;

#[tokio::test]
async fn test_metrics_endpoint_counts_requests() {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install recorder");

    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();
    config.general.max_db_connections = 1;
    config.general.min_db_connections = 1;

    let state = ideabox::api::create_app_state_from_config(config, Some(handle))
        .await
        .expect("failed to create app state");
    let app = ideabox::api::router(state);

    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(body.to_vec()).unwrap();

    let health_line = text
        .lines()
        .find(|line| {
            line.starts_with("http_requests_total{")
                && line.contains("path=\"/health\"")
                && line.contains("status=\"200\"")
        })
        .unwrap_or_else(|| panic!("no /health counter in:\n{text}"));
    assert!(health_line.ends_with(" 3"), "unexpected count: {health_line}");

    assert!(text.contains("http_request_duration_seconds"));
}
