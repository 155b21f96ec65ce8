//! # Asset Image Optimizer Library
//!
//! Questo è il modulo principale della libreria che espone tutte le API pubbliche.
//!
//! ## Responsabilità:
//! - Definisce la struttura modulare dell'applicazione
//! - Espone i tipi e le funzioni principali tramite re-exports
//! - Non esegue nulla al caricamento: il lavoro parte solo da `main`
//!
//! ## Architettura dei moduli:
//! - `config`: Parametri di una richiesta e validazione
//! - `error`: Tassonomia degli errori di ottimizzazione
//! - `image_processor`: Decode, normalizzazione colore, resize, encode JPEG
//! - `resize`: Calcolo dimensioni e resampling
//! - `file_manager`: Scrittura atomica e formattazione dimensioni
//! - `outcome`: Esito etichettato di ogni richiesta
//! - `optimizer`: Lista fissa di asset e driver sequenziale
//! - `json_output`: Output JSON per uso programmatico
//!
//! ## Utilizzo:
//! ```rust
//! use asset_image_optimizer::{optimize, OptimizationRequest};
//!
//! let outcome = optimize(&OptimizationRequest::new("public/scroll3.png", "public/scroll3.jpg"));
//! println!("{}", outcome.report_line());
//! ```

pub mod config;
pub mod error;
pub mod file_manager;
pub mod image_processor;
pub mod json_output;
pub mod optimizer;
pub mod outcome;
pub mod resize;

pub use config::{Background, OptimizationRequest};
pub use error::{FailureKind, OptimizeError};
pub use image_processor::{ImageAsset, ImageOptimizer};
pub use optimizer::{default_requests, run_requests, OptimizationSummary};
pub use outcome::OptimizationOutcome;

/// Optimize one image with a fresh `ImageOptimizer`
pub fn optimize(request: &OptimizationRequest) -> OptimizationOutcome {
    ImageOptimizer::new().optimize(request)
}
