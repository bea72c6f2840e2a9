use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

use eframe::egui::{self, RichText};
use image::ImageReader;

use carousel_ocr::config::Config;
use carousel_ocr::error::CarouselOcrError;
use carousel_ocr::ocr::OcrEngine;
use carousel_ocr_common::report::{
    download_error_message, format_download_error_log, format_image_error, format_result_entry,
};

use crate::io::{self, SaveFormat};
use crate::model::AppState;
use crate::worker::{self, UiMessage};

const PREVIEW_MAX: u32 = 900;

pub struct DesktopApp {
    state: AppState,
    config: Config,
    engine: Arc<dyn OcrEngine>,
    url_input: String,
    downloading: bool,
    extracting: bool,
    tx: Sender<UiMessage>,
    rx: Receiver<UiMessage>,
    preview: Option<(PathBuf, egui::TextureHandle)>,
    preview_inflight: Option<PathBuf>,
    preview_failed: Option<PathBuf>,
    preview_tx: Sender<PreviewData>,
    preview_rx: Receiver<PreviewData>,
}

struct PreviewData {
    path: PathBuf,
    image: Result<([usize; 2], Vec<u8>), String>,
}

impl DesktopApp {
    pub fn new(config: Config, engine: Arc<dyn OcrEngine>) -> Self {
        let (tx, rx) = mpsc::channel();
        let (preview_tx, preview_rx) = mpsc::channel();
        Self {
            state: AppState::default(),
            config,
            engine,
            url_input: String::new(),
            downloading: false,
            extracting: false,
            tx,
            rx,
            preview: None,
            preview_inflight: None,
            preview_failed: None,
            preview_tx,
            preview_rx,
        }
    }

    fn select_folder(&mut self) {
        let Some(folder) = io::pick_folder() else {
            return;
        };
        match io::folder_images(&folder) {
            Ok(paths) => {
                self.state.carousel.load_folder_entries(paths, "");
            }
            Err(err) => io::show_error("Erro", &format!("{err:#}")),
        }
    }

    fn select_images(&mut self) {
        if let Some(paths) = io::pick_images() {
            self.state.carousel.load_files(paths);
        }
    }

    fn start_download(&mut self) {
        let url = self.url_input.trim().to_string();
        if url.is_empty() {
            io::show_warning("Aviso", "Por favor, insira uma URL.");
            return;
        }

        match worker::start_download(&url, &self.config, self.tx.clone()) {
            Ok(_) => {
                self.downloading = true;
                self.state.download_status = "Iniciando download...".to_string();
            }
            Err(CarouselOcrError::UnsupportedUrl(_)) => io::show_error(
                "Erro",
                "URL não suportada. Use links do TikTok ou Instagram.",
            ),
            Err(err) => io::show_error("Erro", &err.to_string()),
        }
    }

    fn start_extraction(&mut self) {
        if self.state.carousel.is_empty() {
            io::show_warning("Aviso", "Nenhuma imagem carregada!");
            return;
        }

        let jobs: Vec<(usize, PathBuf)> = self
            .state
            .carousel
            .records()
            .iter()
            .enumerate()
            .map(|(idx, record)| (idx, record.path.clone()))
            .collect();

        self.state.results.clear();
        self.state.progress = (0, jobs.len());
        self.extracting = true;
        worker::start_ocr(jobs, self.engine.clone(), self.config.lang.clone(), self.tx.clone());
    }

    fn save(&mut self, format: SaveFormat) {
        if !self.state.carousel.has_text() {
            io::show_warning("Aviso", "Nenhum texto extraído ainda!");
            return;
        }
        let Some(path) = io::pick_save_path(format) else {
            return;
        };
        match io::save_records(format, self.state.carousel.records(), &path) {
            Ok(()) => io::show_info(
                "Sucesso",
                &format!("{} salvo em:\n{}", format.label(), path.display()),
            ),
            Err(err) => io::show_error(
                "Erro",
                &format!("Erro ao salvar {}: {err:#}", format.label()),
            ),
        }
    }

    fn clear_all(&mut self) {
        self.state.clear();
        self.preview = None;
        self.preview_inflight = None;
        self.preview_failed = None;
        self.state.download_status.clear();
    }

    fn request_preview(&mut self) {
        let Some(path) = self.state.carousel.current().map(|r| r.path.clone()) else {
            return;
        };
        let shown = self.preview.as_ref().is_some_and(|(p, _)| *p == path);
        if shown
            || self.preview_inflight.as_ref() == Some(&path)
            || self.preview_failed.as_ref() == Some(&path)
        {
            return;
        }

        self.preview_inflight = Some(path.clone());
        let sender = self.preview_tx.clone();
        std::thread::spawn(move || {
            let image = ImageReader::open(&path)
                .map_err(|e| e.to_string())
                .and_then(|r| r.with_guessed_format().map_err(|e| e.to_string()))
                .and_then(|r| r.decode().map_err(|e| e.to_string()))
                .map(|image| {
                    let scaled = image.thumbnail(PREVIEW_MAX, PREVIEW_MAX);
                    let size = [scaled.width() as usize, scaled.height() as usize];
                    (size, scaled.to_rgba8().into_raw())
                });
            let _ = sender.send(PreviewData { path, image });
        });
    }

    fn poll_messages(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.preview_rx.try_recv() {
            if self.preview_inflight.as_ref() == Some(&msg.path) {
                self.preview_inflight = None;
            }
            match msg.image {
                Ok((size, pixels)) => {
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &pixels);
                    let name = msg.path.display().to_string();
                    let texture = ctx.load_texture(name, color_image, egui::TextureOptions::default());
                    self.preview = Some((msg.path, texture));
                }
                Err(err) => {
                    self.preview_failed = Some(msg.path);
                    io::show_error("Erro", &format!("Erro ao carregar imagem: {err}"));
                }
            }
        }

        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    fn handle_message(&mut self, msg: UiMessage) {
        match msg {
            UiMessage::DownloadStatus(status) => self.state.download_status = status,
            UiMessage::DownloadDone { dir, caption_text } => {
                match self.state.load_download(dir, &caption_text) {
                    Ok(added) => tracing::info!("download loaded {added} images"),
                    Err(err) => io::show_error("Erro", &format!("{err:#}")),
                }
                self.url_input.clear();
            }
            UiMessage::DownloadFailed { cause, details } => {
                self.state.results.push_str(&format_download_error_log(&details));
                io::show_error("Erro de Download", &download_error_message(&cause));
            }
            UiMessage::DownloadFinished => {
                self.downloading = false;
                self.state.download_status.clear();
            }
            UiMessage::OcrItem { index, result } => {
                self.state.progress.0 = index + 1;
                match result {
                    Ok(cleaned) => {
                        if let Some(record) = self.state.carousel.apply_ocr(index, &cleaned) {
                            self.state.results.push_str(&format_result_entry(record));
                        }
                    }
                    Err(cause) => {
                        let name = self
                            .state
                            .carousel
                            .records()
                            .get(index)
                            .map(|r| r.name.clone())
                            .unwrap_or_default();
                        self.state.results.push_str(&format_image_error(&name, &cause));
                    }
                }
            }
            UiMessage::OcrFinished { processed } => {
                self.extracting = false;
                io::show_info(
                    "Concluído",
                    &format!("Extração concluída! {processed} imagens processadas."),
                );
            }
        }
    }

    fn input_panel(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label(RichText::new("Entrada de Dados Locais").strong());
            ui.horizontal(|ui| {
                if ui.add_enabled(!self.extracting, egui::Button::new("Selecionar Pasta")).clicked() {
                    self.select_folder();
                }
                if ui.add_enabled(!self.extracting, egui::Button::new("Adicionar Imagens")).clicked() {
                    self.select_images();
                }
            });
            ui.label(self.state.carousel.status_label());
        });

        ui.add_space(6.0);
        ui.group(|ui| {
            ui.label(RichText::new("Baixar Carrossel (TikTok/Instagram)").strong());
            ui.horizontal(|ui| {
                ui.label("URL:");
                ui.add(egui::TextEdit::singleline(&mut self.url_input).desired_width(240.0));
            });
            let enabled = !self.downloading && !self.extracting;
            if ui.add_enabled(enabled, egui::Button::new("Baixar Mídia")).clicked() {
                self.start_download();
            }
            if !self.state.download_status.is_empty() {
                ui.label(&self.state.download_status);
            }
        });
    }

    fn preview_panel(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Visualização do Carrossel").strong());
        ui.horizontal(|ui| {
            if ui.button("◀ Anterior").clicked() {
                self.state.carousel.prev();
            }
            ui.label(self.state.carousel.preview_label());
            if ui.button("Próxima ▶").clicked() {
                self.state.carousel.next();
            }
        });

        self.request_preview();
        let current = self.state.carousel.current().map(|r| r.path.clone());
        match (&self.preview, current) {
            (Some((path, texture)), Some(current)) if *path == current => {
                let available = ui.available_size();
                ui.add(
                    egui::Image::new(texture)
                        .max_size(available)
                        .maintain_aspect_ratio(true),
                );
            }
            (_, Some(current)) if self.preview_failed.as_ref() == Some(&current) => {
                ui.label("Não foi possível exibir a imagem");
            }
            (_, Some(_)) => {
                ui.spinner();
            }
            (_, None) => {
                ui.label("Nenhuma imagem carregada");
            }
        }
    }

    fn results_panel(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Resultados da Extração").strong());
        ui.horizontal(|ui| {
            let idle = !self.extracting;
            if ui.add_enabled(idle, egui::Button::new("Extrair Texto (OCR)")).clicked() {
                self.start_extraction();
            }
            if ui.add_enabled(idle, egui::Button::new("Salvar CSV")).clicked() {
                self.save(SaveFormat::Csv);
            }
            if ui.add_enabled(idle, egui::Button::new("Salvar Excel")).clicked() {
                self.save(SaveFormat::Excel);
            }
            if ui.add_enabled(idle, egui::Button::new("Limpar Tudo")).clicked() {
                self.clear_all();
            }
        });
        ui.separator();

        egui::ScrollArea::vertical().stick_to_bottom(true).show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut self.state.results)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY)
                    .desired_rows(24),
            );
        });
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.downloading || self.extracting || self.preview_inflight.is_some() {
            ctx.request_repaint();
        }

        self.poll_messages(ctx);

        egui::TopBottomPanel::top("title").show(ctx, |ui| {
            ui.heading("Extrator de Texto de Carrosséis");
        });

        egui::TopBottomPanel::bottom("progress").show(ctx, |ui| {
            let (done, total) = self.state.progress;
            ui.add(
                egui::ProgressBar::new(self.state.progress_fraction())
                    .text(format!("{done}/{total}")),
            );
        });

        egui::SidePanel::left("input")
            .resizable(true)
            .default_width(380.0)
            .show(ctx, |ui| {
                self.input_panel(ui);
                ui.add_space(6.0);
                self.preview_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.results_panel(ui);
        });
    }
}
