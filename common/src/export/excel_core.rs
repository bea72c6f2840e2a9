//! Spreadsheet generation
//!
//! One sheet, header row plus one row per image, text column wrapped.

use super::CarouselRow;
use crate::error::{Error, Result};
use rust_xlsxwriter::*;

pub const EXCEL_HEADERS: [&str; 3] = ["Ordem no Carrossel", "Imagem", "Texto Extraído"];

const SHEET_NAME: &str = "Carrossel";
const ORDER_COL_WIDTH: f64 = 18.0;
const NAME_COL_WIDTH: f64 = 28.0;
const TEXT_COL_WIDTH: f64 = 80.0;

/// Build the workbook in memory.
pub fn generate_excel_buffer<T: CarouselRow>(rows: &[T]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let text_format = Format::new()
        .set_text_wrap()
        .set_align(FormatAlign::Top);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)
        .map_err(|e| Error::Export(format!("sheet name error: {}", e)))?;

    for (col, width) in [ORDER_COL_WIDTH, NAME_COL_WIDTH, TEXT_COL_WIDTH].iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)
            .map_err(|e| Error::Export(format!("column width error: {}", e)))?;
    }

    for (col, header) in EXCEL_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Export(format!("header write error: {}", e)))?;
    }

    for (idx, row) in rows.iter().enumerate() {
        let excel_row = (idx + 1) as u32;
        worksheet.write_number(excel_row, 0, row.order() as f64)
            .map_err(|e| Error::Export(format!("order write error: {}", e)))?;
        worksheet.write_string(excel_row, 1, row.name())
            .map_err(|e| Error::Export(format!("name write error: {}", e)))?;
        worksheet.write_string_with_format(excel_row, 2, row.text(), &text_format)
            .map_err(|e| Error::Export(format!("text write error: {}", e)))?;
    }

    workbook.save_to_buffer()
        .map_err(|e| Error::Export(format!("workbook save error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ImageRecord;

    #[test]
    fn test_generate_excel_buffer_is_zip() {
        let rows = vec![
            ImageRecord::new("/p/image_1.jpg", 1, "primeira"),
            ImageRecord::new("/p/image_2.jpg", 2, ""),
        ];
        let buffer = generate_excel_buffer(&rows).unwrap();
        // xlsx is a zip container
        assert!(buffer.starts_with(b"PK"));
    }

    #[test]
    fn test_generate_excel_buffer_empty() {
        let buffer = generate_excel_buffer::<ImageRecord>(&[]).unwrap();
        assert!(!buffer.is_empty());
    }
}
