//! # Error Types Module
//!
//! Questo modulo definisce i tipi di errore dell'ottimizzazione di una singola immagine.
//!
//! ## Responsabilità:
//! - Definisce `OptimizeError` enum per categorizzare ogni fallimento di `optimize`
//! - Fornisce messaggi di errore descrittivi e strutturati
//! - Integra con `thiserror` per la catena delle cause (`source()`)
//! - Espone `FailureKind` serializzabile per l'output JSON
//!
//! ## Categorie di errori:
//! - `InvalidConfig`: Parametri della richiesta fuori range (quality, max width)
//! - `MissingSource`: File sorgente inesistente al momento del controllo
//! - `Decode`: File presente ma non decodificabile (corrotto, formato non supportato)
//! - `EncodeOrWrite`: Encoding JPEG o scrittura della destinazione falliti
//!
//! ## Esempio:
//! ```ignore
//! if !source.is_file() {
//!     return Err(OptimizeError::MissingSource(source.to_path_buf()));
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Custom error types for a single optimization request
#[derive(thiserror::Error, Debug)]
pub enum OptimizeError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("file not found: {}", .0.display())]
    MissingSource(PathBuf),

    #[error("cannot decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("cannot read image: {0}")]
    DecodeIo(#[source] std::io::Error),

    #[error("cannot encode image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse failure category reported in outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    InvalidConfig,
    MissingSource,
    DecodeFault,
    EncodeOrWriteFault,
}

impl OptimizeError {
    /// Maps the error onto its reporting category
    pub fn kind(&self) -> FailureKind {
        match self {
            OptimizeError::InvalidConfig(_) => FailureKind::InvalidConfig,
            OptimizeError::MissingSource(_) => FailureKind::MissingSource,
            OptimizeError::Decode(_) | OptimizeError::DecodeIo(_) => FailureKind::DecodeFault,
            OptimizeError::Encode(_) | OptimizeError::Write { .. } => FailureKind::EncodeOrWriteFault,
        }
    }
}
