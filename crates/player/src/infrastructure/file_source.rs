//! Catalog read from the local filesystem (desktop only)

use std::path::PathBuf;

use async_trait::async_trait;

use crate::ports::outbound::{CatalogSourcePort, LoadError};

#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSourcePort for FileCatalogSource {
    async fn fetch_catalog(&self) -> Result<String, LoadError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| LoadError::Io {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn reads_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"nome":"Espada"}}]"#).unwrap();

        let source = FileCatalogSource::new(file.path());
        let document = source.fetch_catalog().await.unwrap();

        assert_eq!(document, r#"[{"nome":"Espada"}]"#);
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileCatalogSource::new(dir.path().join("dados.json"));

        match source.fetch_catalog().await {
            Err(LoadError::Io { path, .. }) => assert!(path.ends_with("dados.json")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
