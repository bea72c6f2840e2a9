//! Background jobs for the desktop app
//!
//! Downloads and OCR run on plain threads and report back over an mpsc
//! channel; the UI drains it every frame.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use carousel_ocr::config::Config;
use carousel_ocr::download::{self, Platform};
use carousel_ocr::error::Result;
use carousel_ocr::ocr::{self, OcrEngine};
use tempfile::TempDir;

pub enum UiMessage {
    DownloadStatus(String),
    /// Images are in `dir`; `caption_text` goes to the first image.
    DownloadDone { dir: TempDir, caption_text: String },
    DownloadFailed { cause: String, details: String },
    /// Sent after Done/Failed; re-enables the download button.
    DownloadFinished,
    OcrItem { index: usize, result: std::result::Result<String, String> },
    OcrFinished { processed: usize },
}

/// Route the URL and start the download thread. An unsupported URL is
/// returned as an error and no thread is started.
pub fn start_download(
    url: &str,
    config: &Config,
    tx: Sender<UiMessage>,
) -> Result<JoinHandle<()>> {
    let platform = Platform::from_url(url)?;
    let url = url.trim().to_string();
    let config = config.clone();

    Ok(thread::spawn(move || {
        let status_tx = tx.clone();
        let outcome = run_download(platform, &url, &config, move |msg| {
            let _ = status_tx.send(UiMessage::DownloadStatus(msg));
        });

        let message = match outcome {
            Ok((dir, caption_text)) => UiMessage::DownloadDone { dir, caption_text },
            Err(err) => {
                tracing::error!("download failed: {err:?}");
                UiMessage::DownloadFailed {
                    cause: err.to_string(),
                    details: format!("URL: {url}\nPlataforma: {platform}\n\n{err:#?}"),
                }
            }
        };
        let _ = tx.send(message);
        let _ = tx.send(UiMessage::DownloadFinished);
    }))
}

fn run_download<F>(
    platform: Platform,
    url: &str,
    config: &Config,
    mut progress: F,
) -> Result<(TempDir, String)>
where
    F: FnMut(String),
{
    progress(format!("{}: Criando pasta temporária...", platform.label()));
    let dir = tempfile::Builder::new().prefix("carousel-ocr-").tempdir()?;
    let client = download::build_client(config)?;
    let post = download::download_post(platform, &client, url, dir.path(), progress)?;
    Ok((dir, post.caption_text))
}

/// OCR every `(index, path)` job in order. The UI applies the results.
pub fn start_ocr(
    jobs: Vec<(usize, PathBuf)>,
    engine: Arc<dyn OcrEngine>,
    lang: String,
    tx: Sender<UiMessage>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        for (index, path) in &jobs {
            let result = ocr::extract_file(engine.as_ref(), path, &lang).map_err(|e| e.to_string());
            if tx.send(UiMessage::OcrItem { index: *index, result }).is_err() {
                return;
            }
        }
        let _ = tx.send(UiMessage::OcrFinished { processed: jobs.len() });
    })
}
