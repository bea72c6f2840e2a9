use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarouselOcrError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Arquivo não encontrado: {0}")]
    FileNotFound(String),

    #[error("Pasta não encontrada: {0}")]
    FolderNotFound(String),

    #[error("Nenhuma imagem encontrada: {0}")]
    NoImagesFound(String),

    #[error("Erro ao carregar imagem: {0}")]
    ImageDecode(String),

    #[error("Tesseract OCR não encontrado ou não configurado corretamente: {0}")]
    TesseractNotFound(String),

    #[error("Falha no OCR: {0}")]
    Ocr(String),

    #[error("URL não suportada. Use links do TikTok ou Instagram: {0}")]
    UnsupportedUrl(String),

    #[error("O link não parece ser um carrossel de imagens ou os dados não foram retornados.")]
    NotACarousel,

    #[error("Nenhuma imagem encontrada no post do carrossel.")]
    NoImagesInPost,

    #[error("Resposta inesperada da plataforma: {0}")]
    UnexpectedResponse(String),

    #[error("Erro de download: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Nenhum texto extraído ainda!")]
    NoText,

    #[error("Erro de JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Erro de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro no servidor: {0}")]
    Server(String),

    #[error("Falha na tarefa em segundo plano: {0}")]
    Task(String),

    #[error(transparent)]
    Common(#[from] carousel_ocr_common::Error),
}

pub type Result<T> = std::result::Result<T, CarouselOcrError>;
