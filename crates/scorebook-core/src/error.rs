//! Error types for scorebook-core

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scorebook operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load results from {path}: {message}")]
    Data { path: PathBuf, message: String },

    #[error("Nothing to export: no game records loaded ({0})")]
    EmptyInput(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("Chart rendering failed: {0}")]
    Chart(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type alias for scorebook operations
pub type Result<T> = std::result::Result<T, Error>;
