//! Carousel OCR Common Library
//!
//! Types and utilities shared by the CLI/HTTP service and the desktop tool

pub mod types;
pub mod text;
pub mod carousel;
pub mod report;
pub mod error;
pub mod export;

pub use types::{ImageRecord, IMAGE_EXTENSIONS, display_name, is_image_path};
pub use text::{clean_text, text_or_placeholder, NO_TEXT_PLACEHOLDER};
pub use carousel::Carousel;
pub use error::{Error, Result};
pub use export::CarouselRow;
