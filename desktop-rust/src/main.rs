mod app;
mod io;
mod model;
mod worker;

use std::sync::Arc;

use app::DesktopApp;
use carousel_ocr::config::Config;
use carousel_ocr::ocr::{OcrEngine, TesseractCli};
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!("config not loaded, using defaults: {err}");
        Config::default()
    });

    let engine = TesseractCli::new(&config.tesseract_cmd);
    match engine.version() {
        Ok(version) => tracing::info!("tesseract {version}"),
        Err(err) => {
            io::show_error(
                "Erro de Dependência",
                &format!(
                    "{err}\n\nPor favor, instale o Tesseract e adicione-o ao PATH do sistema."
                ),
            );
            return Ok(());
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Extrator de Texto de Carrosséis",
        options,
        Box::new(move |_cc| Box::new(DesktopApp::new(config, Arc::new(engine)))),
    )
}
