//! CSV generation
//!
//! UTF-8 with BOM so spreadsheet apps pick up the accents.

use super::CarouselRow;
use crate::error::{Error, Result};

pub const CSV_HEADERS: [&str; 3] = ["Ordem", "Imagem", "Texto Extraído"];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub fn generate_csv_buffer<T: CarouselRow>(rows: &[T]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(UTF8_BOM.to_vec());
    writer.write_record(CSV_HEADERS)?;

    for row in rows {
        writer.write_record([row.order().to_string().as_str(), row.name(), row.text()])?;
    }

    writer
        .into_inner()
        .map_err(|e| Error::Export(format!("CSV flush error: {}", e)))
}
