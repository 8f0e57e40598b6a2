#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::http::StatusCode;
    use monitor::test_helpers::FakeSampler;
    use tower::ServiceExt;

    use crate::helpers::{get, make_test_app, read_json};

    #[tokio::test]
    async fn reports_application_and_host_facts() {
        let (app, _) = make_test_app(FakeSampler::healthy());

        let response = app.oneshot(get("/info")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = read_json(response).await;
        let application = &json["application"];
        assert_eq!(application["name"], "Process Monitor API");
        assert_eq!(application["version"], "2.1.0-test");
        assert_eq!(application["environment"], "test");
        assert_eq!(application["container"], "blue");
        assert!(application["start_time"].is_string());

        let system = &json["system"];
        assert_eq!(system["hostname"], "test-host");
        assert_eq!(system["platform"], "linux");
        assert_eq!(system["cpu_count"], 8);
        assert_eq!(system["memory_total_gb"], 16.0);
    }

    #[tokio::test]
    async fn uptime_grows_between_calls() {
        let (app, app_state) = make_test_app(FakeSampler::healthy());

        let first = read_json(app.clone().oneshot(get("/info")).await.unwrap()).await;
        tokio::time::sleep(Duration::from_millis(25)).await;
        let second = read_json(app.oneshot(get("/info")).await.unwrap()).await;

        let a = first["application"]["uptime_seconds"].as_f64().unwrap();
        let b = second["application"]["uptime_seconds"].as_f64().unwrap();
        assert!(a >= 0.0);
        assert!(b >= a + 0.02, "uptime went from {a} to {b}");
        assert!(b <= app_state.deployment().uptime_seconds());
    }
}
