//! Carousel bookkeeping
//!
//! Keeps the loaded images in carousel order together with the preview
//! cursor. Loads append; duplicates (same path) are skipped; orders are
//! assigned from the current length and the position inside the batch.

use crate::types::ImageRecord;
use std::path::PathBuf;

/// Separator inserted between the caption/previous text and OCR output.
pub const OCR_SEPARATOR: &str = "\n--- OCR ---\n";

#[derive(Debug, Clone, Default)]
pub struct Carousel {
    records: Vec<ImageRecord>,
    cursor: usize,
}

impl Carousel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Images found in a folder. `paths` must already be filtered to image
    /// files; they are sorted here. The first path of the batch carries the
    /// caption as its initial text.
    ///
    /// Returns the number of records actually added.
    pub fn load_folder_entries(&mut self, mut paths: Vec<PathBuf>, caption: &str) -> usize {
        paths.sort();
        self.append_batch(&paths, Some(caption))
    }

    /// Images picked one by one. No caption.
    pub fn load_files(&mut self, mut paths: Vec<PathBuf>) -> usize {
        paths.sort();
        self.append_batch(&paths, None)
    }

    fn append_batch(&mut self, paths: &[PathBuf], caption: Option<&str>) -> usize {
        let start_order = self.records.len() + 1;
        let mut added = 0;

        for (idx, path) in paths.iter().enumerate() {
            if self.contains(path) {
                continue;
            }
            let initial_text = match caption {
                Some(caption) if idx == 0 => caption,
                _ => "",
            };
            self.records
                .push(ImageRecord::new(path.clone(), start_order + idx, initial_text));
            added += 1;
        }

        // the cursor jumps to the first image of the batch
        if !paths.is_empty() {
            self.cursor = self.records.len().saturating_sub(paths.len());
        }
        self.clamp_cursor();
        added
    }

    fn contains(&self, path: &PathBuf) -> bool {
        self.records.iter().any(|r| &r.path == path)
    }

    fn clamp_cursor(&mut self) {
        if self.cursor >= self.records.len() {
            self.cursor = self.records.len().saturating_sub(1);
        }
    }

    /// Index of the previewed image.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&ImageRecord> {
        self.records.get(self.cursor)
    }

    /// Move the preview forward. Returns false at the end.
    pub fn next(&mut self) -> bool {
        if !self.records.is_empty() && self.cursor + 1 < self.records.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Move the preview back. Returns false at the start.
    pub fn prev(&mut self) -> bool {
        if !self.records.is_empty() && self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// `"i/n - name"`, or `"0/0"` when nothing is loaded.
    pub fn preview_label(&self) -> String {
        match self.current() {
            Some(record) => format!("{}/{} - {}", self.cursor + 1, self.records.len(), record.name),
            None => "0/0".to_string(),
        }
    }

    pub fn status_label(&self) -> String {
        format!("{} imagem(ns) carregada(s)", self.records.len())
    }

    /// Append cleaned OCR output to the record's text.
    pub fn apply_ocr(&mut self, index: usize, cleaned: &str) -> Option<&ImageRecord> {
        let record = self.records.get_mut(index)?;
        let combined = format!("{}{}{}", record.text, OCR_SEPARATOR, cleaned);
        record.text = combined.trim().to_string();
        Some(record)
    }

    /// True when at least one record has text (export precondition).
    pub fn has_text(&self) -> bool {
        self.records.iter().any(|r| !r.text.is_empty())
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.cursor = 0;
    }
}
