//! CSV/Excel export integration tests

use calamine::{open_workbook, Data, Reader, Xlsx};
use carousel_ocr::cli::ExportFormat;
use carousel_ocr::error::CarouselOcrError;
use carousel_ocr::export::{csv, excel, export_records};
use carousel_ocr_common::ImageRecord;
use tempfile::tempdir;

fn create_records() -> Vec<ImageRecord> {
    vec![
        ImageRecord::new(
            "/tmp/post/image_1.jpg",
            1,
            "Legenda do Instagram:\n--------------------\nBom dia\n--------------------\n\n\n--- OCR ---\nPrimeiro slide",
        ),
        ImageRecord::new("/tmp/post/image_2.jpg", 2, "--- OCR ---\nSegundo, com vírgula"),
        ImageRecord::new("/tmp/post/image_3.jpg", 3, ""),
    ]
}

#[test]
fn test_csv_file_contents() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("resultado.csv");

    csv::write_csv(&create_records(), &output_path).expect("CSV export failed");

    let bytes = std::fs::read(&output_path).unwrap();
    assert!(bytes.starts_with(b"\xEF\xBB\xBF"), "missing UTF-8 BOM");

    let content = String::from_utf8(bytes[3..].to_vec()).unwrap();
    assert!(content.starts_with("Ordem,Imagem,Texto Extraído"));
    assert!(content.contains("\"--- OCR ---\nSegundo, com vírgula\""));
    assert!(content.contains("3,image_3.jpg,"));
}

#[test]
fn test_excel_cells() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("resultado.xlsx");

    excel::write_excel(&create_records(), &output_path).expect("Excel export failed");

    let mut workbook: Xlsx<_> = open_workbook(&output_path).expect("open xlsx");
    let range = workbook.worksheet_range("Carrossel").expect("sheet");

    assert_eq!(range.get_value((0, 0)), Some(&Data::String("Ordem no Carrossel".into())));
    assert_eq!(range.get_value((0, 1)), Some(&Data::String("Imagem".into())));
    assert_eq!(range.get_value((0, 2)), Some(&Data::String("Texto Extraído".into())));

    assert_eq!(range.get_value((1, 0)), Some(&Data::Float(1.0)));
    assert_eq!(range.get_value((2, 1)), Some(&Data::String("image_2.jpg".into())));
    assert_eq!(
        range.get_value((2, 2)),
        Some(&Data::String("--- OCR ---\nSegundo, com vírgula".into()))
    );
    assert_eq!(range.get_value((3, 0)), Some(&Data::Float(3.0)));
}

#[test]
fn test_export_refuses_without_text() {
    let dir = tempdir().expect("Failed to create temp dir");
    let records = vec![ImageRecord::new("/tmp/a.png", 1, "")];

    let err = csv::write_csv(&records, &dir.path().join("x.csv")).unwrap_err();
    assert!(matches!(err, CarouselOcrError::NoText));

    let err = excel::write_excel(&records, &dir.path().join("x.xlsx")).unwrap_err();
    assert!(matches!(err, CarouselOcrError::NoText));

    assert!(!dir.path().join("x.csv").exists());
}

#[test]
fn test_export_both_into_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_dir = dir.path().join("saida");

    let written = export_records(&create_records(), &ExportFormat::Both, &output_dir, "carrossel")
        .expect("export failed");

    assert_eq!(written.len(), 2);
    assert!(output_dir.join("carrossel.csv").exists());
    assert!(output_dir.join("carrossel.xlsx").exists());
}
