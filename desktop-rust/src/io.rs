use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use carousel_ocr::export::csv::write_csv;
use carousel_ocr::export::excel::write_excel;
use carousel_ocr::scanner::scan_folder;
use carousel_ocr_common::{IMAGE_EXTENSIONS, ImageRecord};
use rfd::{MessageButtons, MessageDialog, MessageLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFormat {
    Csv,
    Excel,
}

impl SaveFormat {
    pub fn label(self) -> &'static str {
        match self {
            SaveFormat::Csv => "CSV",
            SaveFormat::Excel => "Excel",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            SaveFormat::Csv => "csv",
            SaveFormat::Excel => "xlsx",
        }
    }

    pub fn default_file_name(self) -> String {
        format!("carrossel.{}", self.extension())
    }
}

pub fn pick_folder() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Selecionar Pasta com Imagens")
        .pick_folder()
}

pub fn pick_images() -> Option<Vec<PathBuf>> {
    rfd::FileDialog::new()
        .set_title("Selecionar Imagens")
        .add_filter("Imagens", IMAGE_EXTENSIONS)
        .pick_files()
}

pub fn pick_save_path(format: SaveFormat) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title(format!("Salvar {}", format.label()))
        .add_filter(format.label(), &[format.extension()])
        .set_file_name(format.default_file_name())
        .save_file()
}

/// Images directly inside `folder`.
pub fn folder_images(folder: &Path) -> Result<Vec<PathBuf>> {
    scan_folder(folder).with_context(|| format!("scan {}", folder.display()))
}

pub fn save_records(format: SaveFormat, records: &[ImageRecord], path: &Path) -> Result<()> {
    match format {
        SaveFormat::Csv => write_csv(records, path),
        SaveFormat::Excel => write_excel(records, path),
    }
    .with_context(|| format!("write {}", path.display()))
}

pub fn show_error(title: &str, message: &str) {
    show(MessageLevel::Error, title, message);
}

pub fn show_warning(title: &str, message: &str) {
    show(MessageLevel::Warning, title, message);
}

pub fn show_info(title: &str, message: &str) {
    show(MessageLevel::Info, title, message);
}

fn show(level: MessageLevel, title: &str, message: &str) {
    MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_names() {
        assert_eq!(SaveFormat::Csv.default_file_name(), "carrossel.csv");
        assert_eq!(SaveFormat::Excel.default_file_name(), "carrossel.xlsx");
    }

    #[test]
    fn test_save_records_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let records = vec![ImageRecord::new(PathBuf::from("/x/a.png"), 1, "olá")];

        save_records(SaveFormat::Csv, &records, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("a.png"));
        assert!(content.contains("olá"));
    }

    #[test]
    fn test_folder_images_missing_folder() {
        assert!(folder_images(Path::new("/definitely/not/here")).is_err());
    }
}
