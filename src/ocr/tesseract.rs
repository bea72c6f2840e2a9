//! Tesseract CLI adapter
//!
//! The image is written to a temporary PNG and handed to the `tesseract`
//! executable; recognized text is read from stdout.

use super::OcrEngine;
use crate::error::{CarouselOcrError, Result};
use image::{DynamicImage, ImageFormat};
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct TesseractCli {
    command: PathBuf,
}

impl TesseractCli {
    pub fn new(command: impl Into<PathBuf>) -> Self {
        Self { command: command.into() }
    }
}

impl Default for TesseractCli {
    fn default() -> Self {
        Self::new("tesseract")
    }
}

impl OcrEngine for TesseractCli {
    fn recognize(&self, image: &DynamicImage, lang: &str) -> Result<String> {
        let temp_dir = tempfile::Builder::new().prefix("carousel-ocr-").tempdir()?;
        let input = temp_dir.path().join("input.png");
        image
            .save_with_format(&input, ImageFormat::Png)
            .map_err(|e| CarouselOcrError::ImageDecode(e.to_string()))?;

        debug!("tesseract {} stdout -l {}", input.display(), lang);
        let output = Command::new(&self.command)
            .arg(&input)
            .arg("stdout")
            .args(["-l", lang])
            .output()
            .map_err(|e| CarouselOcrError::TesseractNotFound(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CarouselOcrError::Ocr(format!(
                "tesseract falhou (código {:?}): {}",
                output.status.code(),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    fn version(&self) -> Result<String> {
        let output = Command::new(&self.command)
            .arg("--version")
            .output()
            .map_err(|e| CarouselOcrError::TesseractNotFound(e.to_string()))?;

        if !output.status.success() {
            return Err(CarouselOcrError::TesseractNotFound(format!(
                "código de saída {:?}",
                output.status.code()
            )));
        }

        // older releases print the banner on stderr
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let banner = if stdout.trim().is_empty() { stderr } else { stdout };
        Ok(banner.lines().next().unwrap_or_default().trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary_is_reported() {
        let engine = TesseractCli::new("/nonexistent/bin/tesseract-xyz");
        let err = engine.version().unwrap_err();
        assert!(matches!(err, CarouselOcrError::TesseractNotFound(_)));

        let image = DynamicImage::new_rgb8(2, 2);
        let err = engine.recognize(&image, "por").unwrap_err();
        assert!(matches!(err, CarouselOcrError::TesseractNotFound(_)));
    }
}
