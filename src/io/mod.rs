mod http;
mod local;

pub use http::HttpSource;
pub use local::LocalFileSource;

use anyhow::Result;
use async_trait::async_trait;

/// Trait for sources that can materialize a full payload
#[async_trait]
pub trait PayloadSource: Send + Sync {
    /// Read the entire payload into memory
    async fn read_all(&self) -> Result<Vec<u8>>;

    /// Get the total size of the payload in bytes
    fn size(&self) -> u64;
}
