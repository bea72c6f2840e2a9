//! Export core modules shared by the CLI and the desktop tool.

pub mod csv_core;

#[cfg(feature = "excel")]
pub mod excel_core;

/// A row of the exported table
pub trait CarouselRow {
    fn order(&self) -> usize;
    fn name(&self) -> &str;
    fn text(&self) -> &str;
}

impl CarouselRow for crate::types::ImageRecord {
    fn order(&self) -> usize { self.order }
    fn name(&self) -> &str { &self.name }
    fn text(&self) -> &str { &self.text }
}
