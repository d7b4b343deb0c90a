use async_trait::async_trait;
use reqwest::Client;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use super::PayloadSource;
use anyhow::{Result, anyhow, bail};

/// HTTP payload source for remote files
pub struct HttpSource {
    client: Client,
    url: String,
    size: u64,
    range_supported: bool,
    transferred_bytes: AtomicU64,
    max_retry: u32,
}

impl HttpSource {
    /// Create a new HTTP source
    ///
    /// This will send a HEAD request to get the payload size and check
    /// whether the server supports Range requests, which lets interrupted
    /// downloads resume instead of restarting
    pub async fn new(url: String) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        // Send HEAD request to check capabilities
        let resp = client.head(&url).send().await?;

        if !resp.status().is_success() {
            bail!("HTTP request failed with status: {}", resp.status());
        }

        let range_supported = resp
            .headers()
            .get("accept-ranges")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("bytes"));

        // Get payload size from Content-Length
        let size = resp
            .headers()
            .get("content-length")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| anyhow!("Remote server did not return Content-Length"))?;

        Ok(Self {
            client,
            url,
            size,
            range_supported,
            transferred_bytes: AtomicU64::new(0),
            max_retry: 10,
        })
    }

    /// Get total bytes transferred from network
    pub fn transferred_bytes(&self) -> u64 {
        self.transferred_bytes.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl PayloadSource for HttpSource {
    async fn read_all(&self) -> Result<Vec<u8>> {
        let expected = self.size as usize;
        let mut body: Vec<u8> = Vec::with_capacity(expected);
        let mut retry_count = 0;

        while body.len() < expected {
            // Resume from where the last attempt stopped if the server
            // supports Range requests; otherwise start over.
            let resuming = self.range_supported && !body.is_empty();
            let mut request = self.client.get(&self.url);
            if resuming {
                request = request.header("Range", format!("bytes={}-", body.len()));
            } else {
                body.clear();
            }

            let result = match request.send().await {
                Ok(resp) => {
                    let status = resp.status();
                    let status_ok = if resuming {
                        status == reqwest::StatusCode::PARTIAL_CONTENT
                    } else {
                        status.is_success()
                    };
                    if !status_ok {
                        bail!("HTTP request failed with status: {}", status);
                    }
                    resp.bytes().await
                }
                Err(e) => Err(e),
            };

            match result {
                Ok(bytes) => {
                    let chunk_len = bytes.len().min(expected - body.len());
                    body.extend_from_slice(&bytes[..chunk_len]);

                    self.transferred_bytes
                        .fetch_add(chunk_len as u64, Ordering::Relaxed);
                }
                Err(e) if e.is_timeout() || e.is_connect() || e.is_body() => {
                    retry_count += 1;
                    if retry_count >= self.max_retry {
                        bail!("Max retries exceeded");
                    }
                    eprintln!(
                        "Connection error, retry {}/{}: {}",
                        retry_count, self.max_retry, e
                    );
                    tokio::time::sleep(Duration::from_millis(500 * retry_count as u64)).await;
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(body)
    }

    fn size(&self) -> u64 {
        self.size
    }
}
