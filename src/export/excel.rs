use super::ensure_has_text;
use crate::error::Result;
use carousel_ocr_common::export::excel_core::generate_excel_buffer;
use carousel_ocr_common::ImageRecord;
use std::path::Path;
use tracing::info;

/// Columns: Ordem no Carrossel, Imagem, Texto Extraído.
pub fn write_excel(records: &[ImageRecord], output_path: &Path) -> Result<()> {
    ensure_has_text(records)?;
    let buffer = generate_excel_buffer(records)?;
    std::fs::write(output_path, buffer)?;
    info!("xlsx written: {} ({} rows)", output_path.display(), records.len());
    Ok(())
}
