use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "carousel-ocr")]
#[command(about = "Extrator de texto de carrosséis: API de OCR, download e exportação", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Detailed logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the OCR HTTP API
    Serve {
        /// Bind host (default from config: 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (default from config: 8000)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// OCR local images in carousel order and export the results
    Extract {
        /// Folders and/or image files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output format (csv/excel/both)
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,

        /// Output file or directory (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Tesseract language (default from config: por)
        #[arg(short, long)]
        lang: Option<String>,

        /// Base file name used when the output is a directory
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Download the images of a TikTok/Instagram carousel
    Download {
        /// Post URL
        #[arg(required = true)]
        url: String,

        /// Destination folder (default: ./carrossel_<AAAAmmdd_HHMMSS>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Run OCR on the downloaded images and export
        #[arg(long)]
        ocr: bool,

        /// Output format when --ocr is set (csv/excel/both)
        #[arg(short, long, default_value = "both")]
        format: ExportFormat,

        /// Tesseract language (default from config: por)
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Show/edit configuration
    Config {
        /// Set the default Tesseract language
        #[arg(long)]
        set_lang: Option<String>,

        /// Set the Tesseract executable
        #[arg(long)]
        set_tesseract: Option<String>,

        /// Show the configuration
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Excel,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use csv, excel, or both", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Both => write!(f, "both"),
        }
    }
}
