//! Text blocks written to the results panel / console

use crate::text::text_or_placeholder;
use crate::types::ImageRecord;

/// Result block for one processed image.
pub fn format_result_entry(record: &ImageRecord) -> String {
    format!(
        "\n{}\nImagem {}: {}\n{}\n{}\n",
        "=".repeat(60),
        record.order,
        record.name,
        "-".repeat(60),
        text_or_placeholder(&record.text),
    )
}

/// Line appended when OCR fails for one image.
pub fn format_image_error(name: &str, cause: &str) -> String {
    format!("\nErro na imagem {}: {}\n", name, cause)
}

/// Caption header stored as the initial text of the first downloaded image.
/// Empty caption → empty string.
pub fn format_caption(platform_label: &str, caption: &str) -> String {
    if caption.is_empty() {
        return String::new();
    }
    let rule = "-".repeat(20);
    format!("Legenda do {}:\n{}\n{}\n{}\n\n", platform_label, rule, caption, rule)
}

/// Detailed download failure log for the results panel.
pub fn format_download_error_log(details: &str) -> String {
    let bang = "!".repeat(80);
    format!(
        "\n{bang}\n LOG DE ERRO DETALHADO - DOWNLOAD\n{bang}\n{details}\n{bang}\n",
    )
}

/// Message shown in the download error dialog.
pub fn download_error_message(cause: &str) -> String {
    format!(
        "Ocorreu um erro inesperado durante o download.\n\nCausa: {}\n\n\
         Detalhes técnicos foram adicionados ao painel de 'Resultados da Extração' para análise.",
        cause
    )
}
