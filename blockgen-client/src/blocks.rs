//! Block generation endpoint

use crate::SimulatorClient;
use crate::error::{ClientError, Result};
use blockgen_core::dto::SimulatorResponse;
use blockgen_core::endpoint::generate_blocks_url;
use tracing::debug;

impl SimulatorClient {
    /// Ask the simulator to generate `count` blocks
    ///
    /// Sends a POST with an empty body. Any HTTP response is returned with
    /// its status and text body, whatever the status is. Only failures to
    /// get a complete response surface as errors.
    ///
    /// # Example
    /// ```no_run
    /// # use blockgen_client::SimulatorClient;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = SimulatorClient::new("http://localhost:8085");
    /// let response = client.generate_blocks(1).await?;
    /// assert_eq!(response.status, 200);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn generate_blocks(&self, count: u32) -> Result<SimulatorResponse> {
        if count == 0 {
            return Err(ClientError::InvalidRequest(
                "block count must be greater than 0".to_string(),
            ));
        }

        let url = generate_blocks_url(&self.base_url, count);
        debug!("POST {}", url);

        let response = self.client.post(&url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!("Simulator answered {} ({} bytes)", status, body.len());

        Ok(SimulatorResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        extract::{Path, State},
        http::StatusCode,
        routing::post,
    };
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[derive(Clone, Default)]
    struct Recorded {
        requests: Arc<Mutex<Vec<(u32, String)>>>,
    }

    async fn generate(
        State(recorded): State<Recorded>,
        Path(count): Path<u32>,
        body: String,
    ) -> (StatusCode, String) {
        recorded.requests.lock().unwrap().push((count, body));
        (StatusCode::OK, format!("generated {} block(s)", count))
    }

    async fn unavailable() -> (StatusCode, &'static str) {
        (StatusCode::SERVICE_UNAVAILABLE, "")
    }

    async fn stalled() -> &'static str {
        tokio::time::sleep(Duration::from_secs(5)).await;
        "too late"
    }

    // Local test servers must not be routed through a system proxy.
    fn local_client(base_url: impl Into<String>) -> SimulatorClient {
        let http_client = reqwest::Client::builder().no_proxy().build().unwrap();
        SimulatorClient::with_client(base_url, http_client)
    }

    async fn spawn_simulator(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_generate_blocks_success() {
        let recorded = Recorded::default();
        let router = Router::new()
            .route("/simulator/generate-blocks/{count}", post(generate))
            .with_state(recorded.clone());
        let base_url = spawn_simulator(router).await;

        let client = local_client(base_url);
        let response = client.generate_blocks(1).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, "generated 1 block(s)");

        let requests = recorded.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0], (1, String::new()));
    }

    #[tokio::test]
    async fn test_generate_blocks_passes_count_in_path() {
        let recorded = Recorded::default();
        let router = Router::new()
            .route("/simulator/generate-blocks/{count}", post(generate))
            .with_state(recorded.clone());
        let base_url = spawn_simulator(router).await;

        let client = local_client(format!("{}/", base_url));
        let response = client.generate_blocks(3).await.unwrap();

        assert_eq!(response.body, "generated 3 block(s)");
        assert_eq!(recorded.requests.lock().unwrap()[0].0, 3);
    }

    #[tokio::test]
    async fn test_non_200_is_returned_not_raised() {
        let router = Router::new().route("/simulator/generate-blocks/{count}", post(unavailable));
        let base_url = spawn_simulator(router).await;

        let client = local_client(base_url);
        let response = client.generate_blocks(1).await.unwrap();

        assert_eq!(response.status, 503);
        assert!(response.body.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404() {
        let base_url = spawn_simulator(Router::new()).await;

        let client = local_client(base_url);
        let response = client.generate_blocks(1).await.unwrap();

        assert_eq!(response.status, 404);
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = local_client(format!("http://{}", addr));
        let err = client.generate_blocks(1).await.unwrap_err();

        assert!(err.is_connect());
        assert!(matches!(err, ClientError::RequestFailed(_)));
    }

    #[tokio::test]
    async fn test_timeout() {
        let router = Router::new().route("/simulator/generate-blocks/{count}", post(stalled));
        let base_url = spawn_simulator(router).await;

        let http_client = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_millis(100))
            .build()
            .unwrap();
        let client = SimulatorClient::with_client(base_url, http_client);
        let err = client.generate_blocks(1).await.unwrap_err();

        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn test_zero_blocks_rejected() {
        let client = SimulatorClient::new("http://localhost:8085");
        let err = client.generate_blocks(0).await.unwrap_err();

        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }
}
