//! Logo loading for the summary header.

use crate::error::DocumentError;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Decoded 8-bit RGB pixels, row-major, no alpha.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl LogoImage {
    /// Decode PNG or JPEG bytes, flattening transparency onto white.
    pub fn decode(bytes: &[u8]) -> Result<Self, DocumentError> {
        let decoded =
            image::load_from_memory(bytes).map_err(|e| DocumentError::Logo(e.to_string()))?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();

        let mut rgb = Vec::with_capacity((width * height * 3) as usize);
        for pixel in rgba.pixels() {
            let [r, g, b, a] = pixel.0;
            let alpha = u16::from(a);
            for channel in [r, g, b] {
                let blended = (u16::from(channel) * alpha + 255 * (255 - alpha)) / 255;
                rgb.push(blended as u8);
            }
        }

        Ok(Self { width, height, rgb })
    }
}

#[async_trait]
pub trait LogoSource: Send + Sync {
    async fn load(&self) -> Result<LogoImage, DocumentError>;
}

/// Reads the logo from disk on every call.
pub struct FileLogoSource {
    path: PathBuf,
}

impl FileLogoSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl LogoSource for FileLogoSource {
    async fn load(&self) -> Result<LogoImage, DocumentError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| DocumentError::Logo(format!("{}: {}", self.path.display(), e)))?;
        let logo = LogoImage::decode(&bytes)?;
        debug!(path = %self.path.display(), width = logo.width, height = logo.height, "Logo loaded");
        Ok(logo)
    }
}
