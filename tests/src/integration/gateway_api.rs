//! # Gateway Wire Contract Tests
//!
//! Drive the real router end to end (no socket) and assert the exact wire
//! shapes the dashboard UI consumes:
//!
//! - `POST /api/process` → `{"status":"success","result":[...]}` or
//!   `{"status":"error","message":...}`
//! - `GET /api/benchmark` → array of
//!   `{digits, vedic, numpy, standardOps, vedicOps}` records

#[cfg(test)]
mod tests {
    use crate::decode_little_endian;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use axum::Router;
    use tower::ServiceExt;
    use vedabyte_gateway::{GatewayConfig, GatewayService};

    fn router() -> Router {
        let mut config = GatewayConfig::default();
        config.benchmark.sizes = vec![4, 8];
        config.benchmark.iterations = 2;
        GatewayService::new(config)
            .expect("config is valid")
            .build_router()
    }

    async fn json_of(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json")
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("request")
    }

    #[tokio::test]
    async fn test_process_round_trips_a_large_number() {
        // 25 random-ish digits, value checked against num-bigint
        let digits: Vec<i64> = vec![7, 3, 9, 0, 2, 8, 1, 4, 6, 5, 9, 9, 0, 1, 2, 3, 8, 7, 5, 4, 1, 0, 9, 2, 6];
        let body = serde_json::json!({ "digits": digits }).to_string();

        let response = router().oneshot(post_json("/api/process", &body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_of(response).await;
        assert_eq!(json["status"], "success");

        let result: Vec<u8> = json["result"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_u64().unwrap() as u8)
            .collect();
        let input: Vec<u8> = digits.iter().map(|&d| d as u8).collect();
        let value = decode_little_endian(&input);
        assert_eq!(decode_little_endian(&result), &value * &value);
    }

    #[tokio::test]
    async fn test_process_error_shape_for_empty_input() {
        let response = router()
            .oneshot(post_json("/api/process", r#"{"digits":[]}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = json_of(response).await;
        assert_eq!(json["status"], "error");
        assert!(json["message"].is_string());
        assert!(json.get("result").is_none(), "no partial output on failure");
    }

    #[tokio::test]
    async fn test_process_error_shape_for_out_of_range_digits() {
        for body in [r#"{"digits":[1,2,10]}"#, r#"{"digits":[-1]}"#] {
            let response = router().oneshot(post_json("/api/process", body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {}", body);

            let json = json_of(response).await;
            assert_eq!(json["status"], "error");
            assert!(
                json["message"].as_str().unwrap().contains("out of range"),
                "message should name the fault: {}",
                json["message"]
            );
        }
    }

    #[tokio::test]
    async fn test_benchmark_record_contract() {
        let response = router().oneshot(get("/api/benchmark")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_of(response).await;
        let records = json.as_array().expect("array of records");
        assert_eq!(records.len(), 2);

        for record in records {
            for field in ["digits", "vedic", "numpy", "standardOps", "vedicOps"] {
                assert!(record.get(field).is_some(), "missing field {}", field);
            }
            let d = record["digits"].as_u64().unwrap();
            assert_eq!(record["standardOps"].as_u64().unwrap(), d * d);
            assert_eq!(record["vedicOps"].as_u64().unwrap(), d * d / 2);
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = router().oneshot(get("/api/unknown")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
