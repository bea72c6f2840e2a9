use anyhow::Result;
use carousel_ocr_common::Carousel;
use tempfile::TempDir;

use crate::io::folder_images;

#[derive(Debug, Default)]
pub struct AppState {
    pub carousel: Carousel,
    /// Results panel contents
    pub results: String,
    pub download_status: String,
    /// OCR progress: (done, total)
    pub progress: (usize, usize),
    /// Download folders; removed when dropped (clear / exit)
    pub temp_dirs: Vec<TempDir>,
}

impl AppState {
    pub fn progress_fraction(&self) -> f32 {
        let (done, total) = self.progress;
        if total == 0 {
            0.0
        } else {
            done as f32 / total as f32
        }
    }

    /// Load a finished download; the folder is kept until clear/exit.
    pub fn load_download(&mut self, dir: TempDir, caption_text: &str) -> Result<usize> {
        let scanned = folder_images(dir.path());
        self.temp_dirs.push(dir);
        Ok(self.carousel.load_folder_entries(scanned?, caption_text))
    }

    pub fn clear(&mut self) {
        self.carousel.clear();
        self.results.clear();
        self.progress = (0, 0);
        self.temp_dirs.clear();
    }
}
