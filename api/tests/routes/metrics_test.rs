#[cfg(test)]
mod tests {
    use axum::http::{StatusCode, header::CONTENT_TYPE};
    use monitor::test_helpers::FakeSampler;
    use tower::ServiceExt;

    use crate::helpers::{get, make_test_app, read_json};

    #[tokio::test]
    async fn exposition_is_served_as_plain_text() {
        let (app, _) = make_test_app(FakeSampler::healthy());

        let response = app.oneshot(get("/metrics")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/plain"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();

        let values: Vec<&str> = text.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(
            values,
            vec![
                "cpu_usage_percent 23.5",
                "memory_usage_percent 41.27",
                "disk_usage_percent 63",
                "network_bytes_sent 123456",
                "network_bytes_recv 654321",
                "network_packets_sent 1200",
                "network_packets_recv 3400",
            ]
        );
        assert_eq!(text.matches("# HELP ").count(), 7);
        assert_eq!(text.matches("# TYPE ").count(), 7);
    }

    #[tokio::test]
    async fn sampler_failure_is_a_server_error() {
        let (app, _) = make_test_app(FakeSampler::failing());

        let response = app.oneshot(get("/metrics")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = read_json(response).await;
        assert_eq!(json["success"], false);
    }
}
