use crate::{
    error::{Result, StudioError},
    models::{ArtStyle, AspectRatio},
};
use base64::{engine::general_purpose, Engine as _};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_MIME_TYPE: &str = "image/png";
pub const DOWNLOAD_PREFIX: &str = "nanobanana";

/// Splits `data:<mime>;<encoding>,<payload>` into mime type and payload.
/// The mime type falls back to `image/png` when the header carries none.
fn split_data_url(data_url: &str) -> Option<(String, &str)> {
    let (header, payload) = data_url.split_once(',')?;
    let mime_type = header
        .split_once(':')
        .and_then(|(_, rest)| rest.split_once(';'))
        .map(|(mime, _)| mime.trim())
        .filter(|mime| !mime.is_empty())
        .unwrap_or(DEFAULT_MIME_TYPE)
        .to_string();
    Some((mime_type, payload))
}

pub fn to_data_url(mime_type: &str, payload: &str) -> String {
    format!("data:{};base64,{}", mime_type, payload)
}

/// Image mime type guessed from a file extension; `None` for anything that is not an image.
pub fn mime_type_for_path(path: &Path) -> Option<&'static str> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    let mime_type = match extension.as_deref()? {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "heic" => "image/heic",
        "heif" => "image/heif",
        _ => return None,
    };
    Some(mime_type)
}

/// An image the user supplied for editing, held as a data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    data_url: String,
    mime_type: String,
    payload_offset: usize,
}

impl SourceImage {
    pub fn from_data_url(data_url: impl Into<String>) -> Result<Self> {
        let data_url = data_url.into();
        let (mime_type, payload) = split_data_url(&data_url).ok_or_else(|| {
            StudioError::InvalidDataUrl("expected data:<mime>;base64,<payload>".into())
        })?;
        let payload_offset = data_url.len() - payload.len();
        Ok(Self {
            mime_type,
            payload_offset,
            data_url,
        })
    }

    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
        let payload = general_purpose::STANDARD.encode(bytes);
        let data_url = to_data_url(mime_type, &payload);
        Self {
            mime_type: mime_type.to_string(),
            payload_offset: data_url.len() - payload.len(),
            data_url,
        }
    }

    /// Reads a local image file and encodes it as a data URL.
    /// Files without an image extension are rejected before they are read.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mime_type = mime_type_for_path(path).ok_or_else(|| {
            StudioError::UnsupportedImageType(format!(
                "{} (expected png, jpg, jpeg, webp, gif, heic or heif)",
                path.display()
            ))
        })?;
        let bytes = tokio::fs::read(path).await?;
        log::debug!("Read {} bytes from {}", bytes.len(), path.display());
        Ok(Self::from_bytes(mime_type, &bytes))
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// The encoded payload after the first comma.
    pub fn payload(&self) -> &str {
        &self.data_url[self.payload_offset..]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub style: ArtStyle,
    pub aspect_ratio: AspectRatio,
    pub source_image: Option<SourceImage>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            style: ArtStyle::default(),
            aspect_ratio: AspectRatio::default(),
            source_image: None,
        }
    }

    pub fn with_style(mut self, style: ArtStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub fn with_source_image(mut self, source_image: SourceImage) -> Self {
        self.source_image = Some(source_image);
        self
    }

    pub fn is_edit(&self) -> bool {
        self.source_image.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub image_url: Option<String>,
    pub prompt_used: String,
}

/// A generated image ready to be saved under a timestamped name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    pub data_url: String,
    pub filename: String,
}

impl DownloadTarget {
    pub fn new(data_url: impl Into<String>, unix_millis: i64) -> Self {
        Self {
            data_url: data_url.into(),
            filename: format!("{}-{}.png", DOWNLOAD_PREFIX, unix_millis),
        }
    }

    pub fn now(data_url: impl Into<String>) -> Self {
        Self::new(data_url, chrono::Utc::now().timestamp_millis())
    }

    pub fn decode(&self) -> Result<Vec<u8>> {
        let (_, payload) = split_data_url(&self.data_url)
            .ok_or_else(|| StudioError::InvalidDataUrl("missing payload".into()))?;
        general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| StudioError::InvalidDataUrl(e.to_string()))
    }

    /// Decodes the payload and writes it into `dir`, returning the written path.
    pub async fn save_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let bytes = self.decode()?;
        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(&self.filename);
        tokio::fs::write(&path, &bytes).await?;
        log::info!("💾 Saved {} bytes to {}", bytes.len(), path.display());
        Ok(path)
    }
}
