//! HTTP client abstraction for testability

use std::io::Read;
use std::time::Duration;

use tracing::debug;

use crate::config::DownloadConfig;
use crate::error::{FetchError, FetchResult};

/// A streaming response body.
pub type Body = Box<dyn Read + Send>;

/// Trait for HTTP client operations.
///
/// Lets the manifest and piece fetchers run against canned bodies in tests.
pub trait HttpClient: Send + Sync {
    /// Performs an HTTP GET request and returns the body as a stream.
    ///
    /// The status code is not inspected: whatever the server sends is
    /// handed back to the caller.
    fn get(&self, url: &str) -> FetchResult<Body>;
}

/// Real HTTP client implementation using reqwest.
#[derive(Debug)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Creates a client that sends the configured `User-Agent`.
    ///
    /// No request timeout is set; a stalled peer stalls the caller.
    pub fn new(config: &DownloadConfig) -> FetchResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> FetchResult<Body> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            debug!(url, %status, "Non-success status, using body as-is");
        }

        Ok(Box::new(response))
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Cursor;
    use std::sync::Mutex;

    /// Mock HTTP client serving fixed bodies keyed by URL.
    #[derive(Default)]
    pub struct MockHttpClient {
        pub bodies: HashMap<String, Vec<u8>>,
        pub requests: Mutex<Vec<String>>,
    }

    impl MockHttpClient {
        pub fn with_body(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
            self.bodies.insert(url.to_string(), body.into());
            self
        }

        pub fn requested(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl HttpClient for MockHttpClient {
        fn get(&self, url: &str) -> FetchResult<Body> {
            self.requests.lock().unwrap().push(url.to_string());
            match self.bodies.get(url) {
                Some(body) => Ok(Box::new(Cursor::new(body.clone()))),
                None => Err(FetchError::Transport {
                    url: url.to_string(),
                    reason: "connection refused".to_string(),
                }),
            }
        }
    }

    #[test]
    fn test_mock_client_success() {
        let mock = MockHttpClient::default().with_body("http://example.com/a", b"abc".to_vec());

        let mut body = String::new();
        mock.get("http://example.com/a")
            .unwrap()
            .read_to_string(&mut body)
            .unwrap();

        assert_eq!(body, "abc");
        assert_eq!(mock.requested(), vec!["http://example.com/a".to_string()]);
    }

    #[test]
    fn test_mock_client_error() {
        let mock = MockHttpClient::default();
        let result = mock.get("http://example.com/missing");
        assert!(matches!(result, Err(FetchError::Transport { .. })));
    }

    #[test]
    fn test_reqwest_client_rejects_malformed_url() {
        let client = ReqwestClient::new(&DownloadConfig::default()).unwrap();
        let result = client.get("definitely not a url");
        assert!(matches!(result, Err(FetchError::RequestBuild { .. })));
    }
}
