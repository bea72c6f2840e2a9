//! Error handling tests

use carousel_ocr::download::Platform;
use carousel_ocr::error::CarouselOcrError;
use carousel_ocr::scanner;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"));
    assert!(matches!(result.unwrap_err(), CarouselOcrError::FolderNotFound(_)));
}

#[test]
fn test_scan_folder_no_images() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("test.txt"), "hello").unwrap();
    std::fs::write(dir.path().join("data.json"), "{}").unwrap();

    let result = scanner::scan_folder(dir.path()).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_unsupported_url_message() {
    let err = Platform::from_url("https://www.youtube.com/watch?v=abc").unwrap_err();
    let display = err.to_string();
    assert!(display.contains("URL não suportada"));
    assert!(display.contains("youtube.com"));
}

#[test]
fn test_error_display() {
    let errors = vec![
        CarouselOcrError::Config("teste".to_string()),
        CarouselOcrError::FileNotFound("a.png".to_string()),
        CarouselOcrError::ImageDecode("formato".to_string()),
        CarouselOcrError::TesseractNotFound("not found".to_string()),
        CarouselOcrError::Ocr("falha".to_string()),
        CarouselOcrError::NotACarousel,
        CarouselOcrError::NoImagesInPost,
        CarouselOcrError::NoText,
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "empty message: {:?}", err);
    }
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: CarouselOcrError = io_err.into();
    assert!(matches!(err, CarouselOcrError::Io(_)));
}

#[test]
fn test_common_error_is_transparent() {
    let common_err = carousel_ocr_common::Error::Export("falha na planilha".to_string());
    let err: CarouselOcrError = common_err.into();

    assert!(matches!(err, CarouselOcrError::Common(_)));
    assert_eq!(err.to_string(), "Export error: falha na planilha");
}
