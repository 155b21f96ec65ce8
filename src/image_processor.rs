//! # Image Processing Module
//!
//! Questo modulo contiene la routine di normalizzazione di una singola immagine.
//!
//! ## Pipeline di Ottimizzazione
//!
//! 1. **Validazione**: `quality` e `max_width` controllati prima di toccare il disco
//! 2. **Controllo esistenza**: Sorgente mancante -> `MissingSource`, nessun decode
//! 3. **Decode**: Formato rilevato dal contenuto (magic bytes), non dall'estensione
//! 4. **Normalizzazione colore**: Tutto diventa RGB a 8 bit; l'alpha viene
//!    composto sul colore di sfondo della richiesta (passo lossy accettato)
//! 5. **Resize condizionale**: Solo se `width > max_width`, filtro Lanczos
//! 6. **Encode e scrittura**: JPEG in memoria, poi scrittura atomica
//!
//! ## Formati
//!
//! | Formato | Input | Output |
//! |---------|-------|--------|
//! | PNG     | ✅ (RGB, RGBA, grayscale, palette) | ❌ |
//! | JPEG    | ✅    | ✅     |
//! | WebP    | ✅    | ❌     |
//!
//! Le immagini PNG con palette vengono espanse dal decoder in RGB/RGBA, quindi
//! non raggiungono mai l'encoder come dati indicizzati.
//!
//! ## Error Handling
//!
//! Ogni errore viene catturato al confine di `optimize` e convertito in
//! `OptimizationOutcome::Failure`. La destinazione viene scritta solo a
//! encoding completato, tramite file temporaneo e rename.
//!
//! ## Esempio
//!
//! ```ignore
//! let optimizer = ImageOptimizer::new();
//! let outcome = optimizer.optimize(&OptimizationRequest::new("public/scroll3.png", "public/scroll3.jpg"));
//! println!("{}", outcome.report_line());
//! ```

use crate::config::{Background, OptimizationRequest};
use crate::error::OptimizeError;
use crate::file_manager::FileManager;
use crate::outcome::{OptimizationOutcome, OptimizedImage};
use crate::resize;
use image::codecs::jpeg::JpegEncoder;
use image::io::Reader as ImageReader;
use image::{ColorType, DynamicImage, ImageEncoder, Rgb, RgbImage, Rgba, RgbaImage};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Pixel layout of a decoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Rgb,
    Rgba,
    Luma,
    LumaAlpha,
    /// 16-bit or floating point samples
    Other { alpha: bool },
}

impl ColorMode {
    fn from_color_type(color: ColorType) -> Self {
        match color {
            ColorType::Rgb8 => ColorMode::Rgb,
            ColorType::Rgba8 => ColorMode::Rgba,
            ColorType::L8 => ColorMode::Luma,
            ColorType::La8 => ColorMode::LumaAlpha,
            other => ColorMode::Other { alpha: other.has_alpha() },
        }
    }

    pub fn has_alpha(self) -> bool {
        match self {
            ColorMode::Rgba | ColorMode::LumaAlpha => true,
            ColorMode::Other { alpha } => alpha,
            ColorMode::Rgb | ColorMode::Luma => false,
        }
    }
}

/// A decoded raster, alive only for one optimize call
#[derive(Debug)]
pub struct ImageAsset {
    pub width: u32,
    pub height: u32,
    pub color_mode: ColorMode,
    image: DynamicImage,
}

impl ImageAsset {
    /// Decode an image file, sniffing the format from its content.
    ///
    /// The file handle is owned by the reader and closed when `decode` returns.
    pub fn decode(path: &Path) -> Result<Self, OptimizeError> {
        let reader = ImageReader::open(path)
            .map_err(OptimizeError::DecodeIo)?
            .with_guessed_format()
            .map_err(OptimizeError::DecodeIo)?;
        debug!("Detected format {:?} for {}", reader.format(), path.display());

        let image = reader.decode().map_err(OptimizeError::Decode)?;
        Ok(Self::from_image(image))
    }

    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            color_mode: ColorMode::from_color_type(image.color()),
            image,
        }
    }

    /// Convert to opaque 8-bit RGB, compositing any alpha over `background`
    pub fn into_rgb(self, background: Background) -> RgbImage {
        match self.color_mode {
            ColorMode::Rgb => self.image.into_rgb8(),
            mode if mode.has_alpha() => flatten(&self.image.into_rgba8(), background),
            _ => self.image.into_rgb8(),
        }
    }
}

/// Alpha-composite every pixel onto an opaque background
pub fn flatten(image: &RgbaImage, background: Background) -> RgbImage {
    let [bg_r, bg_g, bg_b] = background.0;
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let Rgba([r, g, b, a]) = *image.get_pixel(x, y);
        Rgb([blend(r, bg_r, a), blend(g, bg_g, a), blend(b, bg_b, a)])
    })
}

fn blend(color: u8, background: u8, alpha: u8) -> u8 {
    let alpha = alpha as u32;
    ((color as u32 * alpha + background as u32 * (255 - alpha) + 127) / 255) as u8
}

/// Encode RGB pixels to baseline JPEG bytes
pub fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>, OptimizeError> {
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgb8)
        .map_err(OptimizeError::Encode)?;
    Ok(buffer)
}

/// Single-image optimizer: decode, normalize, downscale, encode, write
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageOptimizer;

impl ImageOptimizer {
    pub fn new() -> Self {
        Self
    }

    /// Optimizes one image. Never fails: every error becomes a `Failure` outcome.
    pub fn optimize(&self, request: &OptimizationRequest) -> OptimizationOutcome {
        match self.try_optimize(request) {
            Ok(image) => {
                info!(
                    "Optimized {} -> {} ({}x{})",
                    request.source_path.display(),
                    request.destination_path.display(),
                    image.width,
                    image.height
                );
                OptimizationOutcome::success(&request.source_path, &request.destination_path, image)
            }
            Err(error) => {
                warn!("Error optimizing {}: {}", request.source_path.display(), error);
                OptimizationOutcome::failure(&request.source_path, &error)
            }
        }
    }

    /// The optimization pipeline with errors propagated
    pub fn try_optimize(&self, request: &OptimizationRequest) -> Result<OptimizedImage, OptimizeError> {
        request.validate()?;

        let source = request.source_path.as_path();
        let original_size = match fs::metadata(source) {
            Ok(metadata) if metadata.is_file() => metadata.len(),
            _ => return Err(OptimizeError::MissingSource(source.to_path_buf())),
        };

        let asset = ImageAsset::decode(source)?;
        debug!(
            "Decoded {}: {}x{} {:?}",
            source.display(),
            asset.width,
            asset.height,
            asset.color_mode
        );

        let rgb = asset.into_rgb(request.background);
        let rgb = resize::fit_to_width(rgb, request.max_width, request.filter);

        let jpeg = encode_jpeg(&rgb, request.quality)?;
        FileManager::write_atomic(&request.destination_path, &jpeg)?;

        Ok(OptimizedImage {
            width: rgb.width(),
            height: rgb.height(),
            original_size,
            optimized_size: jpeg.len() as u64,
        })
    }
}
