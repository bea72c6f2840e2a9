use carousel_ocr::{cli, config, download, error, export, ocr, scanner, server};
use carousel_ocr_common::Carousel;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::{CarouselOcrError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use ocr::{OcrEngine, OcrEvent, TesseractCli};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Serve { host, port } => {
            let engine = TesseractCli::new(&config.tesseract_cmd);
            match engine.version() {
                Ok(version) => info!("OCR engine: {}", version),
                Err(e) => warn!("{}", e),
            }

            let addr = format!(
                "{}:{}",
                host.unwrap_or_else(|| config.host.clone()),
                port.unwrap_or(config.port)
            );
            let state = server::AppState::new(Arc::new(engine), config.lang.clone());
            server::serve(&addr, state, config.max_upload_bytes).await?;
        }

        Commands::Extract { inputs, format, output, lang, title } => {
            println!("📸 carousel-ocr - extração de texto\n");

            let engine = checked_engine(&config)?;
            let lang = lang.unwrap_or_else(|| config.lang.clone());

            // 1. Load
            println!("[1/3] Carregando imagens...");
            let mut carousel = Carousel::new();
            scanner::load_inputs(&mut carousel, &inputs)?;
            if carousel.is_empty() {
                return Err(CarouselOcrError::NoImagesFound(
                    inputs.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", "),
                ));
            }
            println!("✔ {}\n", carousel.status_label());

            // 2. OCR
            println!("[2/3] Extraindo texto (OCR, idioma: {})...", lang);
            run_ocr(&mut carousel, &engine, &lang);

            // 3. Export
            println!("[3/3] Exportando ({})...", format);
            let output = output.unwrap_or_else(|| PathBuf::from("."));
            let title = title.unwrap_or_else(default_title);
            for path in export::export_records(carousel.records(), &format, &output, &title)? {
                println!("✔ Salvo em: {}", path.display());
            }

            println!("\n✅ Concluído");
        }

        Commands::Download { url, output, ocr, format, lang } => {
            // unsupported URLs stop here, before any network work
            let platform = download::Platform::from_url(&url)?;
            println!("📥 carousel-ocr - download ({})\n", platform);

            let engine = if ocr { Some(checked_engine(&config)?) } else { None };
            let dest = output.unwrap_or_else(|| PathBuf::from(default_title()));
            let client = download::build_client(&config)?;

            let task_dest = dest.clone();
            let downloaded = tokio::task::spawn_blocking(move || {
                download::download_post(platform, &client, &url, &task_dest, |msg| println!("- {}", msg))
            })
            .await
            .map_err(|e| CarouselOcrError::Task(e.to_string()))??;

            println!("✔ {} imagens salvas em {}", downloaded.saved.len(), downloaded.folder.display());
            if !downloaded.caption_text.is_empty() {
                println!("\n{}", downloaded.caption_text.trim_end());
            }

            if let Some(engine) = engine {
                let lang = lang.unwrap_or_else(|| config.lang.clone());
                let mut carousel = Carousel::new();
                carousel.load_folder_entries(scanner::scan_folder(&downloaded.folder)?, &downloaded.caption_text);

                println!("\nExtraindo texto (OCR, idioma: {})...", lang);
                run_ocr(&mut carousel, &engine, &lang);

                for path in export::export_records(carousel.records(), &format, &dest, "carrossel")? {
                    println!("✔ Salvo em: {}", path.display());
                }
            }

            println!("\n✅ Concluído");
        }

        Commands::Config { set_lang, set_tesseract, show } => {
            let mut config = config;
            let changed = set_lang.is_some() || set_tesseract.is_some();

            if let Some(lang) = set_lang {
                config.lang = lang;
            }
            if let Some(cmd) = set_tesseract {
                config.tesseract_cmd = cmd;
            }
            if changed {
                config.save()?;
                println!("✔ Configuração salva: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("Configuração:");
                println!("  Idioma: {}", config.lang);
                println!("  Tesseract: {}", config.tesseract_cmd);
                println!("  Endereço da API: {}", config.bind_address());
                println!("  Tamanho máximo de upload: {} bytes", config.max_upload_bytes);
                println!("  Timeout de download: {}s", config.download_timeout_seconds);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Tesseract must answer `--version` before any OCR work starts.
fn checked_engine(config: &Config) -> Result<TesseractCli> {
    let engine = TesseractCli::new(&config.tesseract_cmd);
    let version = engine.version()?;
    info!("OCR engine: {}", version);
    Ok(engine)
}

fn run_ocr(carousel: &mut Carousel, engine: &dyn OcrEngine, lang: &str) {
    let pb = ProgressBar::new(carousel.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let processed = ocr::extract_carousel(carousel, engine, lang, |event| {
        match event {
            OcrEvent::Done { entry, .. } => pb.println(entry.trim_end()),
            OcrEvent::Failed { message, .. } => pb.println(message.trim_end()),
        }
        pb.inc(1);
    });

    pb.finish_and_clear();
    println!("✔ Extração concluída! {} imagens processadas.\n", processed);
}

fn default_title() -> String {
    format!("carrossel_{}", chrono::Local::now().format("%Y%m%d_%H%M%S"))
}
