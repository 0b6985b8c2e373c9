use crate::{InspectorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum allowed size for an uploaded image (10 MB).
/// Enforced at the HTTP layer via the request body limit.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Raster formats the upload surface accepts. Anything else is rejected
/// before a request is ever constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpeg,
    Webp,
}

impl ImageFormat {
    /// The fixed accepted-format allow-list.
    pub const ACCEPTED: [ImageFormat; 3] = [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::Webp];

    /// Canonical format tag sent to the inference endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Webp => "webp",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Webp => "image/webp",
        }
    }

    /// Resolve a format from a file extension (`png`, `jpg`, `jpeg`, `webp`),
    /// case-insensitively. Returns `None` for anything off the allow-list.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "webp" => Some(ImageFormat::Webp),
            _ => None,
        }
    }

    /// Resolve a format from a MIME type (`image/png`, `image/jpeg`, `image/webp`).
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        match mime.to_ascii_lowercase().as_str() {
            "image/png" => Some(ImageFormat::Png),
            "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
            "image/webp" => Some(ImageFormat::Webp),
            _ => None,
        }
    }

    /// Resolve a format from a file name by its extension.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let ext = name.rsplit_once('.').map(|(_, ext)| ext)?;
        Self::from_extension(ext)
    }

    /// Comma-separated list of accepted extensions, for user-facing messages.
    pub fn accepted_list() -> &'static str {
        "png, jpg, jpeg, webp"
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-supplied image: raw bytes plus the declared format tag.
///
/// Created once per upload, read-only, and discarded when the request
/// completes. No content inspection happens locally; whether the bytes
/// actually depict a windshield is the model's judgment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub format: ImageFormat,
    pub data: Vec<u8>,
}

impl UploadedImage {
    pub fn new(format: ImageFormat, data: Vec<u8>) -> Self {
        Self { format, data }
    }

    /// Build an image from a file name and raw bytes, rejecting file names
    /// whose extension is off the allow-list.
    pub fn from_file_name(name: &str, data: Vec<u8>) -> Result<Self> {
        let format = ImageFormat::from_file_name(name).ok_or_else(|| {
            InspectorError::InputFormat(format!(
                "'{name}' is not an accepted image; accepted formats: {}",
                ImageFormat::accepted_list()
            ))
        })?;
        Ok(Self { format, data })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_extensions_resolve() {
        assert_eq!(ImageFormat::from_extension("png"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_extension("PNG"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_extension("jpg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("jpeg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("webp"), Some(ImageFormat::Webp));
    }

    #[test]
    fn test_rejected_extensions() {
        assert_eq!(ImageFormat::from_extension("bmp"), None);
        assert_eq!(ImageFormat::from_extension("gif"), None);
        assert_eq!(ImageFormat::from_extension("tiff"), None);
        assert_eq!(ImageFormat::from_extension(""), None);
    }

    #[test]
    fn test_mime_type_resolution() {
        assert_eq!(ImageFormat::from_mime_type("image/png"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_mime_type("image/jpeg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_mime_type("image/webp"), Some(ImageFormat::Webp));
        assert_eq!(ImageFormat::from_mime_type("image/bmp"), None);
        assert_eq!(ImageFormat::from_mime_type("text/plain"), None);
    }

    #[test]
    fn test_format_tag_round_trip() {
        for format in ImageFormat::ACCEPTED {
            assert_eq!(ImageFormat::from_extension(format.as_str()), Some(format));
        }
    }

    #[test]
    fn test_from_file_name() {
        assert_eq!(ImageFormat::from_file_name("windshield.png"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_file_name("photo.front.JPG"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_file_name("scan.bmp"), None);
        assert_eq!(ImageFormat::from_file_name("no_extension"), None);
    }

    #[test]
    fn test_uploaded_image_from_file_name() {
        let image = UploadedImage::from_file_name("windshield.webp", vec![1, 2, 3]).unwrap();
        assert_eq!(image.format, ImageFormat::Webp);
        assert_eq!(image.len(), 3);

        let err = UploadedImage::from_file_name("windshield.bmp", vec![1]).unwrap_err();
        assert!(matches!(err, crate::InspectorError::InputFormat(_)));
        assert!(err.to_string().contains("png, jpg, jpeg, webp"));
    }
}
