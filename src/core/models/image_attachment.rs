use anyhow::{Context, Result};
use std::path::Path;

use crate::global_constants;

/// Binary image payload uploaded alongside a text query.
#[derive(Clone, PartialEq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for ImageAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageAttachment")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl ImageAttachment {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub async fn from_path(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read image file {:?}", path))?;

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(global_constants::DEFAULT_IMAGE_FILE_NAME)
            .to_string();
        let mime_type = Self::guess_mime_type(path).to_string();

        log::debug!(
            "{} Loaded {} ({} bytes, {})",
            global_constants::LOG_TAG_ATTACHMENT,
            file_name,
            bytes.len(),
            mime_type
        );

        Ok(Self {
            file_name,
            mime_type,
            bytes,
        })
    }

    fn guess_mime_type(path: &Path) -> &'static str {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            Some("bmp") => "image/bmp",
            _ => global_constants::DEFAULT_IMAGE_MIME_TYPE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_mime_type_known_extensions() {
        assert_eq!(ImageAttachment::guess_mime_type(Path::new("a.png")), "image/png");
        assert_eq!(ImageAttachment::guess_mime_type(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(ImageAttachment::guess_mime_type(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(ImageAttachment::guess_mime_type(Path::new("a.webp")), "image/webp");
    }

    #[test]
    fn test_guess_mime_type_falls_back_to_octet_stream() {
        assert_eq!(
            ImageAttachment::guess_mime_type(Path::new("a.tiff")),
            "application/octet-stream"
        );
        assert_eq!(
            ImageAttachment::guess_mime_type(Path::new("no_extension")),
            "application/octet-stream"
        );
    }

    #[tokio::test]
    async fn test_from_path_reads_bytes_and_name() {
        let temp_dir = tempfile::tempdir().unwrap();
        let image_path = temp_dir.path().join("doge.gif");
        std::fs::write(&image_path, b"GIF89a").unwrap();

        let attachment = ImageAttachment::from_path(&image_path).await.unwrap();

        assert_eq!(attachment.file_name, "doge.gif");
        assert_eq!(attachment.mime_type, "image/gif");
        assert_eq!(attachment.bytes, b"GIF89a".to_vec());
    }

    #[tokio::test]
    async fn test_from_path_missing_file_fails() {
        let temp_dir = tempfile::tempdir().unwrap();

        let result = ImageAttachment::from_path(&temp_dir.path().join("missing.png")).await;

        assert!(result.is_err());
    }

    #[test]
    fn test_debug_omits_raw_bytes() {
        let attachment = ImageAttachment::new("a.png", "image/png", vec![1, 2, 3]);

        let debug = format!("{:?}", attachment);

        assert!(debug.contains("len: 3"));
        assert!(!debug.contains("[1, 2, 3]"));
    }
}
