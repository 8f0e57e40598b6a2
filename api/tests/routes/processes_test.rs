#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use monitor::test_helpers::FakeSampler;
    use tower::ServiceExt;

    use crate::helpers::{get, make_test_app, read_json};

    fn pids(json: &serde_json::Value) -> Vec<u64> {
        json["processes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["pid"].as_u64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn default_limit_comes_from_config() {
        let (app, _) = make_test_app(FakeSampler::healthy());

        let response = app.oneshot(get("/processes")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = read_json(response).await;
        assert_eq!(json["count"], 3);
        assert_eq!(pids(&json), vec![200, 410, 305]);
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn processes_are_sorted_by_memory_descending() {
        let (app, _) = make_test_app(FakeSampler::healthy());

        let json = read_json(app.oneshot(get("/processes?limit=200")).await.unwrap()).await;
        let memory: Vec<f64> = json["processes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["memory_percent"].as_f64().unwrap())
            .collect();
        assert!(memory.windows(2).all(|w| w[0] >= w[1]));
    }

    #[tokio::test]
    async fn unreadable_processes_are_left_out() {
        let (app, _) = make_test_app(FakeSampler::healthy());

        let json = read_json(app.oneshot(get("/processes?limit=200")).await.unwrap()).await;
        assert_eq!(json["count"], 4);
        let pids = pids(&json);
        assert!(!pids.contains(&201), "access-denied process leaked");
        assert!(!pids.contains(&306), "zombie process leaked");
    }

    #[tokio::test]
    async fn count_reflects_processes_returned() {
        let (app, _) = make_test_app(FakeSampler::healthy());

        let json = read_json(app.oneshot(get("/processes?limit=1")).await.unwrap()).await;
        assert_eq!(json["count"], 1);
        assert_eq!(pids(&json), vec![200]);
        assert_eq!(json["processes"][0]["name"], "postgres");
        assert_eq!(json["processes"][0]["memory_percent"], 18.5);
    }

    #[tokio::test]
    async fn out_of_range_limits_are_rejected() {
        for uri in ["/processes?limit=0", "/processes?limit=201"] {
            let (app, _) = make_test_app(FakeSampler::healthy());
            let response = app.oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");

            let json = read_json(response).await;
            assert_eq!(json["success"], false);
            assert_eq!(json["message"], "limit must be between 1 and 200");
        }
    }

    #[tokio::test]
    async fn unparseable_limits_get_the_error_envelope() {
        for uri in ["/processes?limit=lots", "/processes?limit=-1", "/processes?limit=2.5"] {
            let (app, _) = make_test_app(FakeSampler::healthy());
            let response = app.oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");

            let json = read_json(response).await;
            assert_eq!(json["success"], false, "{uri}");
            assert_eq!(json["message"], "limit must be between 1 and 200", "{uri}");
        }
    }

    #[tokio::test]
    async fn sampler_failure_is_a_server_error() {
        let (app, _) = make_test_app(FakeSampler::failing());
        let response = app.oneshot(get("/processes")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = read_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(
            json["message"],
            "disk statistics unavailable: permission denied"
        );
    }
}
