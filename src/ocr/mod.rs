//! OCR engine abstraction
//!
//! The engine itself is external; this module decodes images, calls the
//! engine and cleans its output.

mod tesseract;

pub use tesseract::TesseractCli;

use crate::error::{CarouselOcrError, Result};
use carousel_ocr_common::report::{format_image_error, format_result_entry};
use carousel_ocr_common::{clean_text, Carousel};
use image::DynamicImage;
use std::path::Path;
use tracing::{debug, warn};

/// An OCR engine: decoded image + language code in, raw text out.
pub trait OcrEngine: Send + Sync {
    fn recognize(&self, image: &DynamicImage, lang: &str) -> Result<String>;

    /// Engine identification, also used as an availability check.
    fn version(&self) -> Result<String>;
}

/// Decode uploaded bytes and normalize to RGB.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    let image = image::load_from_memory(bytes)
        .map_err(|e| CarouselOcrError::ImageDecode(e.to_string()))?;
    Ok(to_rgb(image))
}

/// Open a local image file and normalize to RGB.
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    let image = image::open(path)
        .map_err(|e| CarouselOcrError::ImageDecode(format!("{}: {}", path.display(), e)))?;
    Ok(to_rgb(image))
}

fn to_rgb(image: DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageRgb8(_) => image,
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}

/// Recognize and clean.
pub fn extract_text(engine: &dyn OcrEngine, image: &DynamicImage, lang: &str) -> Result<String> {
    let raw = engine.recognize(image, lang)?;
    let cleaned = clean_text(&raw);
    debug!("ocr: {} raw chars -> {} cleaned", raw.len(), cleaned.len());
    Ok(cleaned)
}

/// Open + recognize + clean a local file.
pub fn extract_file(engine: &dyn OcrEngine, path: &Path, lang: &str) -> Result<String> {
    let image = open_image(path)?;
    extract_text(engine, &image, lang)
}

/// Outcome of one image in a carousel run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OcrEvent {
    /// The record was updated; `entry` is its results block.
    Done { index: usize, entry: String },
    /// OCR failed for this image; the record is unchanged.
    Failed { index: usize, message: String },
}

/// Run OCR over every record in carousel order, appending the cleaned
/// text to each record. Failures are reported and skipped.
///
/// Returns the number of records visited.
pub fn extract_carousel<F>(
    carousel: &mut Carousel,
    engine: &dyn OcrEngine,
    lang: &str,
    mut on_event: F,
) -> usize
where
    F: FnMut(OcrEvent),
{
    let jobs: Vec<(usize, std::path::PathBuf, String)> = carousel
        .records()
        .iter()
        .enumerate()
        .map(|(idx, r)| (idx, r.path.clone(), r.name.clone()))
        .collect();

    for (index, path, name) in &jobs {
        match extract_file(engine, path, lang) {
            Ok(cleaned) => {
                if let Some(record) = carousel.apply_ocr(*index, &cleaned) {
                    on_event(OcrEvent::Done {
                        index: *index,
                        entry: format_result_entry(record),
                    });
                }
            }
            Err(e) => {
                warn!("ocr failed for {}: {}", path.display(), e);
                on_event(OcrEvent::Failed {
                    index: *index,
                    message: format_image_error(name, &e.to_string()),
                });
            }
        }
    }

    jobs.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::Mutex;

    struct FixedEngine {
        text: String,
        langs: Mutex<Vec<String>>,
    }

    impl FixedEngine {
        fn new(text: &str) -> Self {
            Self { text: text.to_string(), langs: Mutex::new(Vec::new()) }
        }
    }

    impl OcrEngine for FixedEngine {
        fn recognize(&self, _image: &DynamicImage, lang: &str) -> Result<String> {
            self.langs.lock().unwrap().push(lang.to_string());
            Ok(self.text.clone())
        }

        fn version(&self) -> Result<String> {
            Ok("fixed 1.0".into())
        }
    }

    fn png_bytes() -> Vec<u8> {
        let image = DynamicImage::new_rgba8(3, 3);
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, image::ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_decode_image_converts_to_rgb() {
        let image = decode_image(&png_bytes()).unwrap();
        assert!(matches!(image, DynamicImage::ImageRgb8(_)));
        assert_eq!(image.width(), 3);
    }

    #[test]
    fn test_decode_image_rejects_garbage() {
        let err = decode_image(b"not an image").unwrap_err();
        assert!(matches!(err, CarouselOcrError::ImageDecode(_)));
    }

    #[test]
    fn test_extract_text_cleans_and_passes_lang() {
        let engine = FixedEngine::new("  Olá\n\n mundo \x0c");
        let image = decode_image(&png_bytes()).unwrap();
        let text = extract_text(&engine, &image, "por").unwrap();
        assert_eq!(text, "Olá mundo");
        assert_eq!(*engine.langs.lock().unwrap(), vec!["por".to_string()]);
    }

    #[test]
    fn test_extract_carousel_updates_records_and_reports_failures() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("a.png");
        let bad = dir.path().join("b.png");
        std::fs::write(&good, png_bytes()).unwrap();
        std::fs::write(&bad, b"broken").unwrap();

        let mut carousel = Carousel::new();
        carousel.load_folder_entries(vec![good, bad], "Legenda");

        let engine = FixedEngine::new("texto\n");
        let mut events = Vec::new();
        let visited = extract_carousel(&mut carousel, &engine, "por", |e| events.push(e));

        assert_eq!(visited, 2);
        assert_eq!(carousel.records()[0].text, "Legenda\n--- OCR ---\ntexto");
        assert!(carousel.records()[1].text.is_empty());

        assert!(matches!(&events[0], OcrEvent::Done { index: 0, entry } if entry.contains("Imagem 1: a.png")));
        assert!(matches!(&events[1], OcrEvent::Failed { index: 1, message } if message.contains("Erro na imagem b.png")));
    }
}
