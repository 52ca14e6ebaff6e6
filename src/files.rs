//! Document root access and response generation.
//!
//! Every request resolves its path afresh and re-reads the file; nothing is
//! cached between requests.

use std::io;

use tracing::{info, warn};

use crate::config::{StaticFilesConfig, normalize_root};
use crate::http::mime::content_type_for;
use crate::http::response::Response;

/// Files served from a single root directory.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: String,
}

impl StaticFiles {
    /// Creates a file source rooted at `root`, appending `/` if missing.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: normalize_root(root.into()),
        }
    }

    pub fn from_config(cfg: &StaticFilesConfig) -> Self {
        Self::new(cfg.root.clone())
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Maps a target onto the filesystem by plain concatenation.
    ///
    /// `..`, percent escapes and query strings pass through untouched.
    pub fn resolve(&self, target: &str) -> String {
        format!("{}{}", self.root, target)
    }

    /// True only for regular files.
    pub async fn exists(&self, path: &str) -> bool {
        tokio::fs::metadata(path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }

    pub async fn size(&self, path: &str) -> io::Result<u64> {
        Ok(tokio::fs::metadata(path).await?.len())
    }

    pub async fn read_all(&self, path: &str) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }

    /// Builds the response for a stripped request target.
    ///
    /// Missing files get the 404 response. A file that passes the existence
    /// check but then fails to stat or read gets a 500.
    pub async fn respond(&self, target: &str) -> Response {
        let path = self.resolve(target);
        info!(path = %path, "Request Line: GET");

        if !self.exists(&path).await {
            return Response::not_found();
        }

        match self.load(&path).await {
            Ok(content) => Response::file(content, content_type_for(&path)),
            Err(e) => {
                warn!(path = %path, error = %e, "failed to read file");
                Response::internal_error()
            }
        }
    }

    async fn load(&self, path: &str) -> io::Result<Vec<u8>> {
        let size = self.size(path).await?;
        let content = self.read_all(path).await?;

        if content.len() as u64 != size {
            warn!(
                path = %path,
                expected = size,
                actual = content.len(),
                "file changed size while reading"
            );
        }

        Ok(content)
    }
}
