//! Shared record types

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One image of a carousel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    /// Local file path
    pub path: PathBuf,

    /// Display name (file name)
    pub name: String,

    /// 1-based position in the carousel
    pub order: usize,

    /// Caption and OCR output accumulated so far
    #[serde(default)]
    pub text: String,
}

impl ImageRecord {
    pub fn new(path: impl Into<PathBuf>, order: usize, text: impl Into<String>) -> Self {
        let path = path.into();
        let name = display_name(&path);
        Self {
            path,
            name,
            order,
            text: text.into(),
        }
    }
}

/// File name of `path`, or the whole path when it has none.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Extensions accepted when loading local images (compared lowercase).
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_takes_file_name() {
        let record = ImageRecord::new("/tmp/post/image_1.jpg", 1, "");
        assert_eq!(record.name, "image_1.jpg");
        assert_eq!(record.order, 1);
        assert!(record.text.is_empty());
    }

    #[test]
    fn test_is_image_path() {
        assert!(is_image_path(Path::new("a.png")));
        assert!(is_image_path(Path::new("a.JPG")));
        assert!(is_image_path(Path::new("dir/a.jpeg")));
        assert!(is_image_path(Path::new("a.Gif")));
        assert!(is_image_path(Path::new("a.bmp")));
        assert!(!is_image_path(Path::new("a.txt")));
        assert!(!is_image_path(Path::new("a.webp")));
        assert!(!is_image_path(Path::new("png")));
    }

    #[test]
    fn test_serialize_camel_case() {
        let record = ImageRecord::new("x/a.png", 3, "olá");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"order\":3"));
        assert!(json.contains("\"name\":\"a.png\""));
    }
}
