#[cfg(test)]
mod tests {
    use reqwest::header::{HeaderMap, AUTHORIZATION};
    use serde_json::{json, Value};
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use test_context::{test_context, AsyncTestContext};
    use tracsis::api::{RawReply, Tracsis, Transport, TransportError};

    /// Scripted reply for one transport round-trip.
    enum CannedReply {
        Reply(u16, String),
        Failure(String),
    }

    #[derive(Debug, Clone)]
    struct RecordedCall {
        url: String,
        authorization: Option<String>,
        body: Value,
    }

    /// Transport double: records every outgoing call and replays canned
    /// replies in order.
    struct MockTransport {
        replies: Mutex<VecDeque<CannedReply>>,
        calls: Mutex<Vec<RecordedCall>>,
    }

    impl MockTransport {
        fn new(replies: Vec<CannedReply>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Transport for &MockTransport {
        async fn post_json(&self, url: &str, headers: &HeaderMap, body: &Value) -> Result<RawReply, TransportError> {
            let authorization = headers.get(AUTHORIZATION).and_then(|value| value.to_str().ok()).map(str::to_string);
            self.calls.lock().unwrap().push(RecordedCall {
                url: url.to_string(),
                authorization,
                body: body.clone(),
            });

            match self.replies.lock().unwrap().pop_front() {
                Some(CannedReply::Reply(status, body)) => Ok(RawReply { status, body }),
                Some(CannedReply::Failure(message)) => Err(TransportError {
                    message,
                    status_code: None,
                }),
                None => Err(TransportError {
                    message: "Request failed: no canned reply left".to_string(),
                    status_code: None,
                }),
            }
        }
    }

    fn login_ok() -> CannedReply {
        CannedReply::Reply(
            200,
            json!({
                "error": false,
                "data": {
                    "access_token": "AT1",
                    "refresh_token": "RT1",
                    "user_id": 6010,
                    "user_code": "EMP-1",
                    "user_name": "Test User"
                }
            })
            .to_string(),
        )
    }

    fn empty_grid() -> CannedReply {
        CannedReply::Reply(200, json!({"error": false, "data": {"items": []}}).to_string())
    }

    struct ApiTestContext {
        user: String,
        password: String,
    }

    impl AsyncTestContext for ApiTestContext {
        async fn setup() -> Self {
            ApiTestContext {
                user: "a@b.com".to_string(),
                password: "secret".to_string(),
            }
        }

        async fn teardown(self) {
            // Nothing to clean up; the mock transport owns no resources.
        }
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn fresh_client_is_not_authenticated(_ctx: &mut ApiTestContext) {
        let mock = MockTransport::new(vec![]);
        let api = Tracsis::with_transport(&mock);

        assert!(!api.is_authenticated());
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn login_stores_token_pair_and_bearer_header(ctx: &mut ApiTestContext) {
        let mock = MockTransport::new(vec![login_ok(), empty_grid()]);
        let mut api = Tracsis::with_transport(&mock);

        let response = api.login(&ctx.user, &ctx.password).await;
        assert!(!response.error);
        assert!(api.is_authenticated());
        assert_eq!(api.session().access_token(), Some("AT1"));
        assert_eq!(api.session().refresh_token(), Some("RT1"));

        // Every subsequent request carries the bearer header.
        api.get_task_list(6010, 1, 10).await;
        let calls = mock.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].authorization.as_deref(), Some("Bearer AT1"));
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn partial_token_pair_never_authenticates(ctx: &mut ApiTestContext) {
        let mock = MockTransport::new(vec![CannedReply::Reply(
            200,
            json!({"error": false, "data": {"access_token": "AT1"}}).to_string(),
        )]);
        let mut api = Tracsis::with_transport(&mock);
        api.login(&ctx.user, &ctx.password).await;
        assert!(!api.is_authenticated());

        let mock = MockTransport::new(vec![CannedReply::Reply(
            200,
            json!({"error": false, "data": {"refresh_token": "RT1"}}).to_string(),
        )]);
        let mut api = Tracsis::with_transport(&mock);
        api.login(&ctx.user, &ctx.password).await;
        assert!(!api.is_authenticated());
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn login_error_envelope_leaves_session_empty(ctx: &mut ApiTestContext) {
        let mock = MockTransport::new(vec![CannedReply::Reply(
            200,
            json!({"error": true, "message": "Invalid credentials"}).to_string(),
        )]);
        let mut api = Tracsis::with_transport(&mock);

        let response = api.login(&ctx.user, &ctx.password).await;
        assert!(response.error);
        assert!(!api.is_authenticated());
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn task_list_requires_authentication_without_network(_ctx: &mut ApiTestContext) {
        let mock = MockTransport::new(vec![]);
        let api = Tracsis::with_transport(&mock);

        let response = api.get_task_list(6010, 1, 10).await;
        assert!(response.error);
        assert_eq!(response.status_code, Some(401));
        assert!(response.message.unwrap().contains("Not authenticated"));
        assert_eq!(mock.call_count(), 0);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn task_logs_require_authentication_without_network(_ctx: &mut ApiTestContext) {
        let mock = MockTransport::new(vec![]);
        let api = Tracsis::with_transport(&mock);

        let response = api.get_task_logs(7, 1, 10).await;
        assert!(response.error);
        assert_eq!(response.status_code, Some(401));
        assert_eq!(mock.call_count(), 0);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn task_list_payload_filters_by_user(ctx: &mut ApiTestContext) {
        let mock = MockTransport::new(vec![login_ok(), empty_grid()]);
        let mut api = Tracsis::with_transport(&mock);
        api.login(&ctx.user, &ctx.password).await;

        api.get_task_list(42, 2, 5).await;

        let calls = mock.calls();
        assert!(calls[1].url.ends_with("/master-grid/grid-data"));
        let body = &calls[1].body;
        assert_eq!(body["slug"], "pts_my_tasks");
        assert_eq!(body["extra"]["extra_condition"], "pts_tasks.assign_user_id = 42");
        assert_eq!(body["page"], 2);
        assert_eq!(body["per_page"], 5);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn task_logs_listing_is_unfiltered(ctx: &mut ApiTestContext) {
        let mock = MockTransport::new(vec![login_ok(), empty_grid()]);
        let mut api = Tracsis::with_transport(&mock);
        api.login(&ctx.user, &ctx.password).await;

        api.get_task_logs(7, 1, 10).await;

        let body = &mock.calls()[1].body;
        assert_eq!(body["slug"], "pts_my_logs");
        assert_eq!(body["extra"], json!({}));
        assert!(body.get("task_id").is_none());
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn log_work_maps_completed_status(ctx: &mut ApiTestContext) {
        let mock = MockTransport::new(vec![login_ok(), CannedReply::Reply(200, json!({"error": false}).to_string())]);
        let mut api = Tracsis::with_transport(&mock);
        api.login(&ctx.user, &ctx.password).await;

        let response = api.log_task_work(7, "c", "Fix bug", "2026/08/06", 2.5).await;
        assert!(!response.error);

        let calls = mock.calls();
        assert!(calls[1].url.ends_with("/pts/task/log"));
        let body = &calls[1].body;
        assert_eq!(body["task_status"], 3);
        assert_eq!(body["task_id"], 7);
        assert_eq!(body["role_id"], 2);

        let work = body["work"].as_array().unwrap();
        assert_eq!(work.len(), 1);
        assert_eq!(work[0]["work_title"], "Fix bug");
        assert_eq!(work[0]["work_date"], "2026/08/06");
        assert_eq!(work[0]["work_type"], "Development");
        assert_eq!(work[0]["log_hour"], 2.5);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn log_work_maps_any_other_status_to_in_progress(_ctx: &mut ApiTestContext) {
        for status in ["i", "x"] {
            let mock = MockTransport::new(vec![CannedReply::Reply(200, json!({"error": false}).to_string())]);
            let api = Tracsis::with_transport(&mock);

            api.log_task_work(7, status, "Fix bug", "2026/08/06", 1.0).await;
            assert_eq!(mock.calls()[0].body["task_status"], 4);
        }
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn log_work_skips_client_side_auth_check(_ctx: &mut ApiTestContext) {
        // Unlike the listing endpoints the request goes out unauthenticated
        // and the server is the one that rejects it.
        let mock = MockTransport::new(vec![CannedReply::Reply(401, "Unauthorized".to_string())]);
        let api = Tracsis::with_transport(&mock);

        let response = api.log_task_work(7, "c", "Fix bug", "2026/08/06", 1.0).await;
        assert_eq!(mock.call_count(), 1);
        assert!(response.error);
        assert_eq!(response.status_code, Some(401));
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn transport_failure_is_contained(ctx: &mut ApiTestContext) {
        let mock = MockTransport::new(vec![CannedReply::Failure("Request failed: connection refused".to_string())]);
        let mut api = Tracsis::with_transport(&mock);

        let response = api.login(&ctx.user, &ctx.password).await;
        assert!(response.error);
        assert!(response.message.unwrap().contains("Request failed"));
        assert!(!api.is_authenticated());
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn http_error_carries_status(ctx: &mut ApiTestContext) {
        let mock = MockTransport::new(vec![CannedReply::Reply(500, "Internal Server Error".to_string())]);
        let mut api = Tracsis::with_transport(&mock);

        let response = api.login(&ctx.user, &ctx.password).await;
        assert!(response.error);
        assert_eq!(response.status_code, Some(500));
        assert!(response.message.unwrap().contains("Request failed"));
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn invalid_json_preserves_raw_body(ctx: &mut ApiTestContext) {
        let mock = MockTransport::new(vec![CannedReply::Reply(200, "<html>not json</html>".to_string())]);
        let mut api = Tracsis::with_transport(&mock);

        let response = api.login(&ctx.user, &ctx.password).await;
        assert!(response.error);
        assert_eq!(response.message.as_deref(), Some("Invalid JSON response from server"));
        assert_eq!(response.status_code, Some(200));
        assert_eq!(response.raw_response.as_deref(), Some("<html>not json</html>"));
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn business_error_passes_through_verbatim(ctx: &mut ApiTestContext) {
        let mock = MockTransport::new(vec![
            login_ok(),
            CannedReply::Reply(200, json!({"error": true, "message": "No access"}).to_string()),
        ]);
        let mut api = Tracsis::with_transport(&mock);
        api.login(&ctx.user, &ctx.password).await;

        let response = api.get_task_list(6010, 1, 10).await;
        assert!(response.error);
        assert_eq!(response.message.as_deref(), Some("No access"));
    }
}
