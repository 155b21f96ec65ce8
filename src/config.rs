//! # Request Configuration Module
//!
//! Questo modulo definisce i parametri di una singola ottimizzazione.
//!
//! ## Responsabilità:
//! - Definisce la struct `OptimizationRequest` (sorgente, destinazione, parametri)
//! - Fornisce valori di default per max width, qualità, sfondo e filtro
//! - Valida i parametri prima di qualsiasi accesso al filesystem
//!
//! ## Parametri:
//! - `max_width`: Larghezza massima in pixel (default: 1600, deve essere > 0)
//! - `quality`: Qualità JPEG (1-100, default: 85)
//! - `background`: Colore su cui appiattire i pixel trasparenti (default: bianco)
//! - `filter`: Algoritmo di resampling per il downscale (default: Lanczos)
//!
//! ## Validazione:
//! - Nessun clamping: `quality` fuori da 1-100 viene rifiutata
//! - `max_width == 0` viene rifiutato
//!
//! ## Esempio:
//! ```ignore
//! let request = OptimizationRequest {
//!     quality: 70,
//!     ..OptimizationRequest::new("public/hero.png", "public/hero.jpg")
//! };
//! request.validate()?;
//! ```

use crate::error::OptimizeError;
use crate::resize::ResizeAlgorithm;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_MAX_WIDTH: u32 = 1600;
pub const DEFAULT_QUALITY: u8 = 85;

/// Opaque color that transparent pixels are composited onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background(pub [u8; 3]);

impl Background {
    pub const WHITE: Background = Background([255, 255, 255]);
    pub const BLACK: Background = Background([0, 0, 0]);
}

impl Default for Background {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Parameters of one optimize call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRequest {
    /// Image to read
    pub source_path: PathBuf,
    /// JPEG file to create or overwrite
    pub destination_path: PathBuf,
    /// Images wider than this are downscaled to exactly this width
    pub max_width: u32,
    /// JPEG quality (1-100)
    pub quality: u8,
    /// Flatten color for alpha channels
    pub background: Background,
    /// Resampling filter used when downscaling
    pub filter: ResizeAlgorithm,
}

impl OptimizationRequest {
    /// Request with the default max width and quality
    pub fn new(source_path: impl Into<PathBuf>, destination_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            destination_path: destination_path.into(),
            max_width: DEFAULT_MAX_WIDTH,
            quality: DEFAULT_QUALITY,
            background: Background::default(),
            filter: ResizeAlgorithm::default(),
        }
    }

    pub fn with_max_width(mut self, max_width: u32) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    /// Validate request parameters
    pub fn validate(&self) -> Result<(), OptimizeError> {
        if self.quality == 0 || self.quality > 100 {
            return Err(OptimizeError::InvalidConfig(format!(
                "quality must be between 1 and 100, got {}",
                self.quality
            )));
        }

        if self.max_width == 0 {
            return Err(OptimizeError::InvalidConfig(
                "max width must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = OptimizationRequest::new("a.png", "a.jpg");
        assert_eq!(request.max_width, 1600);
        assert_eq!(request.quality, 85);
        assert_eq!(request.background, Background::WHITE);
        assert_eq!(request.filter, ResizeAlgorithm::Lanczos);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_validation() {
        let mut request = OptimizationRequest::new("a.png", "a.jpg");

        request.quality = 0;
        assert!(matches!(request.validate(), Err(OptimizeError::InvalidConfig(_))));

        request.quality = 101;
        assert!(matches!(request.validate(), Err(OptimizeError::InvalidConfig(_))));

        request.quality = 1;
        assert!(request.validate().is_ok());

        request.quality = 100;
        assert!(request.validate().is_ok());

        request.max_width = 0;
        assert!(matches!(request.validate(), Err(OptimizeError::InvalidConfig(_))));
    }

    #[test]
    fn test_request_json_roundtrip() {
        let request = OptimizationRequest::new("public/scroll3.png", "public/scroll3.jpg")
            .with_quality(70)
            .with_background(Background::BLACK);

        let json = serde_json::to_string(&request).unwrap();
        let loaded: OptimizationRequest = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded, request);
    }
}
