pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod export;
pub mod ocr;
pub mod scanner;
pub mod server;
