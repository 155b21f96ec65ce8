//! # Image Resize Module
//!
//! Questo modulo gestisce il downscale delle immagini troppo larghe.
//!
//! ## Caratteristiche
//! - **Solo downscale**: Un'immagine con larghezza <= `max_width` non viene mai ingrandita
//! - **Larghezza esatta**: L'output ha sempre larghezza `max_width`
//! - **Altezza troncata**: `floor(height * max_width / width)`, minimo 1 pixel
//! - **Filtro Lanczos**: Default per il miglior anti-aliasing in riduzione
//!
//! ## Esempio
//! ```text
//! 3200x1600, max 1600 -> 1600x800
//! 1601x999,  max 1600 -> 1600x998
//! 1200x900,  max 1600 -> invariata
//! ```

use image::imageops::{self, FilterType};
use image::RgbImage;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Algoritmi di resize disponibili
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeAlgorithm {
    /// Lanczos (finestra 3) - Migliore qualità per downscaling
    #[default]
    Lanczos,
    /// Catmull-Rom - Buon bilanciamento qualità/velocità
    CatmullRom,
    /// Triangle - Veloce, qualità accettabile
    Triangle,
    /// Nearest - Nessuna interpolazione
    Nearest,
}

impl ResizeAlgorithm {
    /// Converte l'algoritmo nel filtro del crate `image`
    pub fn to_filter_type(self) -> FilterType {
        match self {
            ResizeAlgorithm::Lanczos => FilterType::Lanczos3,
            ResizeAlgorithm::CatmullRom => FilterType::CatmullRom,
            ResizeAlgorithm::Triangle => FilterType::Triangle,
            ResizeAlgorithm::Nearest => FilterType::Nearest,
        }
    }
}

/// Computes the downscaled size for an image, or `None` when it already fits.
///
/// The ratio is real-valued and the height is truncated toward zero. A very
/// wide, short image never collapses below one pixel of height.
pub fn target_dimensions(width: u32, height: u32, max_width: u32) -> Option<(u32, u32)> {
    if width <= max_width {
        return None;
    }

    let ratio = max_width as f64 / width as f64;
    let new_height = ((height as f64 * ratio) as u32).max(1);

    Some((max_width, new_height))
}

/// Downscale `image` to `max_width` if it is wider, otherwise return it untouched
pub fn fit_to_width(image: RgbImage, max_width: u32, algorithm: ResizeAlgorithm) -> RgbImage {
    match target_dimensions(image.width(), image.height(), max_width) {
        Some((new_width, new_height)) => {
            debug!(
                "Resizing {}x{} -> {}x{} using {:?}",
                image.width(),
                image.height(),
                new_width,
                new_height,
                algorithm
            );
            imageops::resize(&image, new_width, new_height, algorithm.to_filter_type())
        }
        None => image,
    }
}
