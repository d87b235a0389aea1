/// Readiness probe. axum sends `&str` as `text/plain; charset=utf-8`.
pub async fn healthz() -> &'static str {
    "OK"
}
