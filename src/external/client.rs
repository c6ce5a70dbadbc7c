use std::sync::LazyLock;
use std::time::Duration;

/// User-Agent sent with every request
pub fn user_agent() -> String {
    format!("camply-notify/{}", crate::pkg_version())
}

/// Global HTTP client instance
///
/// This client is initialized lazily on first access and reused across the application,
/// so repeated notifications share pooled connections.
///
/// # Features
/// - **Timeouts**: 30s request timeout, 10s connect timeout
/// - **Compression**: gzip responses are decoded transparently
/// - **Security**: Uses Rustls for TLS (no OpenSSL dependency)
///
/// # Example
/// ```rust,ignore
/// use crate::external::client::HTTP_CLIENT;
///
/// async fn post_note(url: &str) -> Result<reqwest::Response, reqwest::Error> {
///     HTTP_CLIENT
///         .post(url)
///         .json(&serde_json::json!({"type": "note", "body": "hello"}))
///         .send()
///         .await
/// }
/// ```
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        // Timeouts
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        // Connection pooling
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        .gzip(true)
        .user_agent(user_agent())
        .build()
        .expect("Failed to build HTTP client")
});
