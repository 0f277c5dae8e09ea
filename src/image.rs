//! Local image checks and base64 encoding.
//!
//! Images arrive as file paths from the camera or gallery picker. Before anything is
//! sent to the model the path is checked for a supported extension, an existing
//! non-empty file and a size limit, then read and encoded into an [`InlineImage`].

use crate::error::{IdentifyError, Result};
use crate::llm::models::InlineImage;
use base64::Engine;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];
pub const MAX_IMAGE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

const INVALID_FORMAT: &str = "Invalid image format. Please use JPG or PNG.";

/// Lower-cased extension of `path`, if any
pub fn image_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// True when the extension is one of [`ALLOWED_EXTENSIONS`]
pub fn has_supported_extension(path: &Path) -> bool {
    image_extension(path).is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}

/// A captured or picked photo that passed the format check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    path: PathBuf,
}

impl ImageFile {
    /// Accept `path` if its extension is a supported image format.
    ///
    /// Only the name is checked here; existence and size are checked on read.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !has_supported_extension(&path) {
            return Err(IdentifyError::InvalidImage(INVALID_FORMAT.to_string()));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file, enforcing that it exists, is non-empty and within the size limit.
    pub async fn read_bytes(&self) -> Result<Vec<u8>> {
        let metadata = tokio::fs::metadata(&self.path).await.map_err(|e| {
            IdentifyError::InvalidImage(format!(
                "Image file {} is not readable: {}",
                self.path.display(),
                e
            ))
        })?;

        if !metadata.is_file() {
            return Err(IdentifyError::InvalidImage(format!(
                "Image path {} is not a file",
                self.path.display()
            )));
        }
        if metadata.len() == 0 {
            return Err(IdentifyError::InvalidImage(format!(
                "Image file {} is empty",
                self.path.display()
            )));
        }
        if metadata.len() > MAX_IMAGE_SIZE_BYTES {
            return Err(IdentifyError::InvalidImage(format!(
                "Image file {} is larger than 5 MB",
                self.path.display()
            )));
        }

        Ok(tokio::fs::read(&self.path).await?)
    }

    /// Read and base64-encode the image for inline transport.
    ///
    /// The mime type is always `image/jpeg`, PNG input included.
    pub async fn to_inline(&self) -> Result<InlineImage> {
        let bytes = self.read_bytes().await?;
        debug!("Encoding {} image bytes from {}", bytes.len(), self.path.display());
        Ok(InlineImage::jpeg(
            base64::engine::general_purpose::STANDARD.encode(bytes),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_image(suffix: &str, contents: &[u8]) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    #[test]
    fn test_supported_extensions_case_insensitive() {
        assert!(has_supported_extension(Path::new("/tmp/leaf.jpg")));
        assert!(has_supported_extension(Path::new("/tmp/leaf.JPEG")));
        assert!(has_supported_extension(Path::new("leaf.Png")));
        assert!(!has_supported_extension(Path::new("leaf.gif")));
        assert!(!has_supported_extension(Path::new("leaf")));
    }

    #[test]
    fn test_new_rejects_unsupported_format() {
        let err = ImageFile::new("/tmp/photo.heic").unwrap_err();
        assert_eq!(err.to_string(), "Invalid image format. Please use JPG or PNG.");
    }

    #[tokio::test]
    async fn test_to_inline_encodes_base64_jpeg() {
        let file = temp_image(".jpg", b"fake_image_data");
        let image = ImageFile::new(file.path()).unwrap();

        let inline = image.to_inline().await.unwrap();

        let expected =
            base64::engine::general_purpose::STANDARD.encode(b"fake_image_data");
        assert_eq!(inline.data, expected);
        assert_eq!(inline.mime_type, "image/jpeg");
    }

    #[tokio::test]
    async fn test_png_is_sent_as_jpeg_mime() {
        let file = temp_image(".png", b"png-bytes");
        let inline = ImageFile::new(file.path()).unwrap().to_inline().await.unwrap();
        assert_eq!(inline.mime_type, "image/jpeg");
    }

    #[tokio::test]
    async fn test_empty_file_is_rejected() {
        let file = temp_image(".jpg", b"");
        let result = ImageFile::new(file.path()).unwrap().read_bytes().await;
        assert!(matches!(result, Err(IdentifyError::InvalidImage(msg)) if msg.contains("empty")));
    }

    #[tokio::test]
    async fn test_missing_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let image = ImageFile::new(dir.path().join("missing.jpg")).unwrap();
        let result = image.read_bytes().await;
        assert!(matches!(result, Err(IdentifyError::InvalidImage(_))));
    }

    #[tokio::test]
    async fn test_oversized_file_is_rejected() {
        let file = temp_image(".jpg", &vec![0u8; (MAX_IMAGE_SIZE_BYTES + 1) as usize]);
        let result = ImageFile::new(file.path()).unwrap().read_bytes().await;
        assert!(matches!(result, Err(IdentifyError::InvalidImage(msg)) if msg.contains("5 MB")));
    }
}
