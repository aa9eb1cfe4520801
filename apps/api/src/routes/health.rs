/// GET /
/// Liveness probe. The body is a fixed confirmation string with no further
/// semantics.
pub async fn health_handler() -> &'static str {
    "Career Mentor API is running"
}
