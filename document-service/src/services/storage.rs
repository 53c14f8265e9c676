use crate::error::DocumentError;
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

/// Where generated documents are persisted. Keys are single file names.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write `data` under `key`, replacing any previous copy. Returns the
    /// stored location.
    async fn upload(&self, key: &str, data: Vec<u8>) -> Result<String, DocumentError>;
    async fn download(&self, key: &str) -> Result<Vec<u8>, DocumentError>;
}

pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub async fn new(base_path: impl Into<PathBuf>) -> Result<Self, DocumentError> {
        let base_path = base_path.into();
        if !base_path.exists() {
            fs::create_dir_all(&base_path).await?;
        }
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn resolve(&self, key: &str) -> Result<PathBuf, DocumentError> {
        let mut components = Path::new(key).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) => Ok(self.base_path.join(name)),
            _ => Err(DocumentError::InvalidKey(key.to_string())),
        }
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn upload(&self, key: &str, data: Vec<u8>) -> Result<String, DocumentError> {
        let path = self.resolve(key)?;
        // Write to a sibling first so readers never see a half-written file.
        // One temp file per upload; concurrent writers of a key must not share it.
        let partial = path.with_extension(format!("{}.partial", Uuid::new_v4()));
        fs::write(&partial, data).await?;
        if let Err(e) = fs::rename(&partial, &path).await {
            let _ = fs::remove_file(&partial).await;
            return Err(e.into());
        }
        Ok(path.display().to_string())
    }

    async fn download(&self, key: &str) -> Result<Vec<u8>, DocumentError> {
        let path = self.resolve(key)?;
        match fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(DocumentError::NotFound(key.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
