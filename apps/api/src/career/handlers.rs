//! Axum route handlers for the career advice relay.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CareerAdviceRequest {
    /// Tolerates both a missing field and an explicit null.
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CareerAdviceResponse {
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /career
///
/// Relays one prompt to the generative API and returns the generated report.
/// An absent or blank prompt is rejected before any outbound call is made.
pub async fn handle_career_advice(
    State(state): State<AppState>,
    Json(request): Json<CareerAdviceRequest>,
) -> Result<Json<CareerAdviceResponse>, AppError> {
    let prompt = request.prompt.as_deref().unwrap_or("");
    if prompt.trim().is_empty() {
        return Err(AppError::Validation("Prompt is required".to_string()));
    }

    let text = state.llm.generate(prompt).await?;

    Ok(Json(CareerAdviceResponse { text }))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::llm_client::{GeminiClient, GenerativeBackend, LlmError};
    use crate::routes::build_router;
    use crate::state::AppState;

    /// Echoes the prompt back as the generated text, counting invocations.
    struct EchoBackend {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl GenerativeBackend for EchoBackend {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("advice for: {prompt}"))
        }
    }

    /// Always fails with a fixed upstream error.
    struct UpstreamErrorBackend {
        status: u16,
        body: &'static str,
    }

    #[async_trait]
    impl GenerativeBackend for UpstreamErrorBackend {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::Upstream {
                status: self.status,
                body: self.body.to_string(),
            })
        }
    }

    fn router_with(backend: Arc<dyn GenerativeBackend>) -> Router {
        build_router(AppState { llm: backend })
    }

    fn career_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/career")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_probe() {
        let backend = Arc::new(EchoBackend {
            calls: AtomicUsize::new(0),
        });
        let response = router_with(backend)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(!body_string(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_success_wraps_generated_text() {
        let backend = Arc::new(EchoBackend {
            calls: AtomicUsize::new(0),
        });
        let response = router_with(backend.clone())
            .oneshot(career_request(r#"{"prompt":"plan my career"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["text"], "advice for: plan my career");
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_empty_and_null_prompts_rejected_without_backend_call() {
        let backend = Arc::new(EchoBackend {
            calls: AtomicUsize::new(0),
        });

        for body in [r#"{}"#, r#"{"prompt":""}"#, r#"{"prompt":null}"#, r#"{"prompt":"   "}"#] {
            let response = router_with(backend.clone())
                .oneshot(career_request(body))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
            let parsed: Value = serde_json::from_str(&body_string(response).await).unwrap();
            assert_eq!(parsed["error"], "Prompt is required");
        }

        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_upstream_error_passes_through_status_and_body() {
        const ERROR_BODY: &str = r#"{"error":{"code":403,"message":"API key not valid"}}"#;
        let backend = Arc::new(UpstreamErrorBackend {
            status: 403,
            body: ERROR_BODY,
        });

        let response = router_with(backend)
            .oneshot(career_request(r#"{"prompt":"plan my career"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_string(response).await, ERROR_BODY);
    }

    #[tokio::test]
    async fn test_transport_failure_yields_generic_500() {
        // A real client pointed at a dead port exercises the full
        // transport-error path without leaking the connection detail.
        let backend = Arc::new(GeminiClient::with_base_url(
            "test-key".to_string(),
            "http://127.0.0.1:9".to_string(),
        ));

        let response = router_with(backend)
            .oneshot(career_request(r#"{"prompt":"plan my career"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let parsed: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(parsed["error"], "Internal server error");
    }

    #[tokio::test]
    async fn test_concurrent_requests_do_not_cross_talk() {
        let backend = Arc::new(EchoBackend {
            calls: AtomicUsize::new(0),
        });
        let app = router_with(backend);

        let (first, second) = tokio::join!(
            app.clone().oneshot(career_request(r#"{"prompt":"alpha"}"#)),
            app.clone().oneshot(career_request(r#"{"prompt":"beta"}"#)),
        );

        let first: Value = serde_json::from_str(&body_string(first.unwrap()).await).unwrap();
        let second: Value = serde_json::from_str(&body_string(second.unwrap()).await).unwrap();

        assert_eq!(first["text"], "advice for: alpha");
        assert_eq!(second["text"], "advice for: beta");
    }
}
