use super::ensure_has_text;
use crate::error::Result;
use carousel_ocr_common::export::csv_core::generate_csv_buffer;
use carousel_ocr_common::ImageRecord;
use std::path::Path;
use tracing::info;

/// Columns: Ordem, Imagem, Texto Extraído (UTF-8 with BOM).
pub fn write_csv(records: &[ImageRecord], output_path: &Path) -> Result<()> {
    ensure_has_text(records)?;
    let buffer = generate_csv_buffer(records)?;
    std::fs::write(output_path, buffer)?;
    info!("csv written: {} ({} rows)", output_path.display(), records.len());
    Ok(())
}
