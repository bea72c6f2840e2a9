//! Social-media carousel download
//!
//! Resolves a post URL to its image URLs and caption, then saves the images
//! as `image_{n}.jpg` into a folder. All calls are blocking; the desktop
//! tool runs them on a worker thread and the CLI under `spawn_blocking`.

pub mod instagram;
pub mod tiktok;

use crate::config::Config;
use crate::error::{CarouselOcrError, Result};
use carousel_ocr_common::report::format_caption;
use reqwest::blocking::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Supported platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    TikTok,
    Instagram,
}

impl Platform {
    /// Route a URL by its host. Anything that is not TikTok or Instagram is
    /// rejected.
    pub fn from_url(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let parsed = url::Url::parse(trimmed)
            .map_err(|_| CarouselOcrError::UnsupportedUrl(trimmed.to_string()))?;
        let host = parsed.host_str().unwrap_or_default().to_lowercase();

        if host.contains("tiktok.com") {
            Ok(Platform::TikTok)
        } else if host.contains("instagram.com") {
            Ok(Platform::Instagram)
        } else {
            Err(CarouselOcrError::UnsupportedUrl(trimmed.to_string()))
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::TikTok => "TikTok",
            Platform::Instagram => "Instagram",
        }
    }

    /// Fetch post metadata (image URLs + caption).
    pub fn fetch_post(&self, client: &Client, url: &str) -> Result<Post> {
        match self {
            Platform::TikTok => tiktok::fetch_post(client, url),
            Platform::Instagram => instagram::fetch_post(client, url),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Post metadata. `None` entries are images whose URL was missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Post {
    pub caption: Option<String>,
    pub image_urls: Vec<Option<String>>,
}

/// What a finished download hands back to the caller
#[derive(Debug, Clone)]
pub struct DownloadedPost {
    pub folder: PathBuf,
    /// Formatted caption header, empty when the post has no caption
    pub caption_text: String,
    pub saved: Vec<PathBuf>,
}

pub fn build_client(config: &Config) -> Result<Client> {
    let client = Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.download_timeout_seconds))
        .build()?;
    Ok(client)
}

/// Fetch a post and save its images into `dest`.
///
/// `progress` receives user-facing status lines.
pub fn download_post<P>(
    platform: Platform,
    client: &Client,
    url: &str,
    dest: &Path,
    mut progress: P,
) -> Result<DownloadedPost>
where
    P: FnMut(String),
{
    let label = platform.label();
    progress(format!("{}: Acessando a plataforma... (pode levar um momento)", label));

    let post = platform.fetch_post(client, url)?;
    let count = post.image_urls.len();
    progress(format!("{}: Encontradas {} imagens. Baixando...", label, count));

    std::fs::create_dir_all(dest)?;
    let saved = save_images(client, &post.image_urls, dest, |i| {
        progress(format!("{}: Baixando imagem {}/{}...", label, i, count))
    })?;
    info!("{}: {} images saved to {}", label, saved.len(), dest.display());

    progress("Download concluído! Carregando imagens...".to_string());

    let caption_text = format_caption(label, post.caption.as_deref().unwrap_or_default());
    Ok(DownloadedPost {
        folder: dest.to_path_buf(),
        caption_text,
        saved,
    })
}

/// Stream each URL to `dest/image_{n}.jpg` (n is 1-based, by position).
/// Missing URLs are skipped without shifting the numbering.
pub fn save_images<F>(
    client: &Client,
    urls: &[Option<String>],
    dest: &Path,
    mut on_image: F,
) -> Result<Vec<PathBuf>>
where
    F: FnMut(usize),
{
    let mut saved = Vec::new();

    for (idx, url) in urls.iter().enumerate() {
        let number = idx + 1;
        on_image(number);

        let Some(url) = url else {
            debug!("image {} has no url, skipped", number);
            continue;
        };

        let mut response = client.get(url).send()?.error_for_status()?;
        let path = dest.join(format!("image_{}.jpg", number));
        let mut file = std::fs::File::create(&path)?;
        response.copy_to(&mut file)?;
        saved.push(path);
    }

    Ok(saved)
}
