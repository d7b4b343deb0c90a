use super::PayloadSource;
use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Local file payload source
pub struct LocalFileSource {
    path: PathBuf,
    size: u64,
}

impl LocalFileSource {
    pub fn new(path: &Path) -> Result<Self> {
        let size = std::fs::metadata(path)?.len();
        Ok(Self {
            path: path.to_path_buf(),
            size,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PayloadSource for LocalFileSource {
    async fn read_all(&self) -> Result<Vec<u8>> {
        Ok(tokio::fs::read(&self.path).await?)
    }

    fn size(&self) -> u64 {
        self.size
    }
}
