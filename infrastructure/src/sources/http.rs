//! Shared HTTP plumbing for the remote sources

use quiz_application::SourceError;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// User agent sent with every request
const USER_AGENT: &str = concat!("StrawhatQuiz/", env!("CARGO_PKG_VERSION"));

/// Maximum response body size (5 MB)
const MAX_BODY_SIZE: usize = 5 * 1024 * 1024;

/// Build the client shared by all remote sources.
///
/// `timeout` bounds each whole request; an elapsed timeout surfaces as
/// [`SourceError::Fetch`].
pub fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client, SourceError> {
    let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| SourceError::fetch(format!("Failed to build HTTP client: {}", e)))
}

/// Send a request and return the body of a successful response
pub(crate) async fn fetch_body(request: reqwest::RequestBuilder) -> Result<Vec<u8>, SourceError> {
    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            SourceError::fetch(format!("Request timed out: {}", e))
        } else {
            SourceError::fetch(format!("Request failed: {}", e))
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::fetch(format!(
            "HTTP error: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        )));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| SourceError::fetch(format!("Failed to read response body: {}", e)))?;

    if body.len() > MAX_BODY_SIZE {
        return Err(SourceError::fetch(format!(
            "Response too large: {} bytes (max: {} bytes)",
            body.len(),
            MAX_BODY_SIZE
        )));
    }

    Ok(body.to_vec())
}

/// Decode a JSON body, mapping failures to [`SourceError::Parse`]
pub(crate) fn decode_json<T: DeserializeOwned>(body: &[u8], what: &str) -> Result<T, SourceError> {
    serde_json::from_slice(body)
        .map_err(|e| SourceError::parse(format!("Unexpected {} response: {}", what, e)))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve a single canned HTTP response on localhost.
    ///
    /// Returns the URL and a handle resolving to the request line the
    /// server received.
    pub(crate) async fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let Ok((mut stream, _)) = listener.accept().await else {
                return String::new();
            };
            let mut buf = [0u8; 4096];
            let n = stream.read(&mut buf).await.unwrap_or(0);
            let request_line = String::from_utf8_lossy(&buf[..n])
                .lines()
                .next()
                .unwrap_or_default()
                .to_string();
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
            request_line
        });

        (format!("http://{}/", addr), handle)
    }

    #[tokio::test]
    async fn test_fetch_body_success() {
        let (url, request) = serve_once("200 OK", "[1, 2, 3]").await;
        let client = build_client(None).unwrap();

        let body = fetch_body(client.get(&url)).await.unwrap();
        let values: Vec<u32> = decode_json(&body, "test").unwrap();
        assert_eq!(values, vec![1, 2, 3]);
        assert_eq!(request.await.unwrap(), "GET / HTTP/1.1");
    }

    #[tokio::test]
    async fn test_fetch_body_http_error() {
        let (url, _) = serve_once("503 Service Unavailable", "{}").await;
        let client = build_client(None).unwrap();

        let err = fetch_body(client.get(&url)).await.unwrap_err();
        assert_eq!(
            err,
            SourceError::Fetch("HTTP error: 503 Service Unavailable".to_string())
        );
    }

    #[tokio::test]
    async fn test_connection_refused_is_fetch_error() {
        // Bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = build_client(Some(Duration::from_secs(2))).unwrap();
        let err = fetch_body(client.get(format!("http://{}/", addr)))
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Fetch(_)));
    }

    #[test]
    fn test_decode_json_parse_error() {
        let err = decode_json::<Vec<u32>>(b"{not json", "quote").unwrap_err();
        assert!(matches!(err, SourceError::Parse(m) if m.starts_with("Unexpected quote response")));
    }
}
