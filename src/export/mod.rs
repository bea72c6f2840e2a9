pub mod csv;
pub mod excel;

use crate::cli::ExportFormat;
use crate::error::{CarouselOcrError, Result};
use carousel_ocr_common::ImageRecord;
use std::path::{Path, PathBuf};

fn output_path_for_format(output: &Path, title: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", title, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path, title: &str) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        let csv_path = output.join(format!("{}.csv", title));
        let excel_path = output.join(format!("{}.xlsx", title));
        (csv_path, excel_path)
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(title);
        let csv_path = parent.join(format!("{}.csv", stem));
        let excel_path = parent.join(format!("{}.xlsx", stem));
        (csv_path, excel_path)
    }
}

/// Nothing to export until at least one record has text.
pub(crate) fn ensure_has_text(records: &[ImageRecord]) -> Result<()> {
    if records.iter().any(|r| !r.text.is_empty()) {
        Ok(())
    } else {
        Err(CarouselOcrError::NoText)
    }
}

/// Write the requested formats; returns the written paths.
pub fn export_records(
    records: &[ImageRecord],
    format: &ExportFormat,
    output: &Path,
    title: &str,
) -> Result<Vec<PathBuf>> {
    ensure_has_text(records)?;

    if output.extension().is_none() {
        std::fs::create_dir_all(output)?;
    }

    let written = match format {
        ExportFormat::Csv => {
            let path = output_path_for_format(output, title, "csv");
            csv::write_csv(records, &path)?;
            vec![path]
        }
        ExportFormat::Excel => {
            let path = output_path_for_format(output, title, "xlsx");
            excel::write_excel(records, &path)?;
            vec![path]
        }
        ExportFormat::Both => {
            let (csv_path, excel_path) = output_paths_for_both(output, title);
            csv::write_csv(records, &csv_path)?;
            excel::write_excel(records, &excel_path)?;
            vec![csv_path, excel_path]
        }
    };

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_for_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = output_path_for_format(dir.path(), "carrossel", "csv");
        assert_eq!(path, dir.path().join("carrossel.csv"));
    }

    #[test]
    fn test_output_path_for_file() {
        let path = output_path_for_format(Path::new("/tmp/out/result.csv"), "carrossel", "csv");
        assert_eq!(path, PathBuf::from("/tmp/out/result.csv"));
    }

    #[test]
    fn test_output_paths_for_both_from_file() {
        let (csv_path, excel_path) = output_paths_for_both(Path::new("/tmp/out/result.csv"), "x");
        assert_eq!(csv_path, PathBuf::from("/tmp/out/result.csv"));
        assert_eq!(excel_path, PathBuf::from("/tmp/out/result.xlsx"));
    }

    #[test]
    fn test_ensure_has_text() {
        let empty = vec![ImageRecord::new("a.png", 1, "")];
        assert!(matches!(ensure_has_text(&empty), Err(CarouselOcrError::NoText)));
        assert!(matches!(ensure_has_text(&[]), Err(CarouselOcrError::NoText)));

        let some = vec![ImageRecord::new("a.png", 1, ""), ImageRecord::new("b.png", 2, "x")];
        assert!(ensure_has_text(&some).is_ok());
    }
}
