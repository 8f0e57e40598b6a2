#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use monitor::{ResourceSnapshot, test_helpers::FakeSampler};
    use tower::ServiceExt;

    use crate::helpers::{get, make_test_app, read_json};

    #[tokio::test]
    async fn healthy_host_returns_200() {
        let (app, _) = make_test_app(FakeSampler::healthy());

        let response = app.oneshot(get("/healthz")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = read_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["container"], "blue");
        assert_eq!(json["checks"]["cpu_ok"], true);
        assert_eq!(json["checks"]["memory_ok"], true);
        assert_eq!(json["checks"]["disk_ok"], true);
        assert_eq!(json["metrics"]["cpu_percent"], 23.5);
        assert_eq!(json["metrics"]["memory_percent"], 41.27);
        assert_eq!(json["metrics"]["disk_percent"], 63.0);
        assert!(json["timestamp"].is_string());
        assert!(json.get("error").is_none());
    }

    #[tokio::test]
    async fn degraded_host_returns_503() {
        let sampler = FakeSampler::healthy().with_resources(ResourceSnapshot {
            cpu_percent: 10.0,
            memory_percent: 10.0,
            disk_percent: 90.0,
        });
        let (app, _) = make_test_app(sampler);

        let response = app.oneshot(get("/healthz")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let json = read_json(response).await;
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["checks"]["disk_ok"], false);
        assert_eq!(json["checks"]["cpu_ok"], true);
        assert_eq!(json["checks"]["memory_ok"], true);
    }

    #[tokio::test]
    async fn sampling_failure_reports_unhealthy_with_zeroed_metrics() {
        let (app, _) = make_test_app(FakeSampler::failing());

        let response = app.oneshot(get("/healthz")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let json = read_json(response).await;
        assert_eq!(json["status"], "unhealthy");
        assert_eq!(json["container"], "blue");
        for check in ["cpu_ok", "memory_ok", "disk_ok"] {
            assert_eq!(json["checks"][check], false, "{check}");
        }
        for metric in ["cpu_percent", "memory_percent", "disk_percent"] {
            assert_eq!(json["metrics"][metric], 0.0, "{metric}");
        }
        assert_eq!(json["error"], "disk statistics unavailable: permission denied");
    }
}
