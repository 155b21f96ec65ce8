//! # Optimization Outcome Module
//!
//! Risultato etichettato di una singola chiamata a `optimize`.
//! Un fallimento non viene mai propagato: diventa `Failure` e il driver prosegue.

use crate::error::{FailureKind, OptimizeError};
use crate::file_manager::FileManager;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What a successful optimization produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimizedImage {
    pub width: u32,
    pub height: u32,
    pub original_size: u64,
    pub optimized_size: u64,
}

/// Result of one optimize call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OptimizationOutcome {
    Success {
        source_path: PathBuf,
        destination_path: PathBuf,
        width: u32,
        height: u32,
        original_size: u64,
        optimized_size: u64,
    },
    Failure {
        source_path: PathBuf,
        kind: FailureKind,
        reason: String,
    },
}

impl OptimizationOutcome {
    pub fn success(source_path: &Path, destination_path: &Path, image: OptimizedImage) -> Self {
        Self::Success {
            source_path: source_path.to_path_buf(),
            destination_path: destination_path.to_path_buf(),
            width: image.width,
            height: image.height,
            original_size: image.original_size,
            optimized_size: image.optimized_size,
        }
    }

    pub fn failure(source_path: &Path, error: &OptimizeError) -> Self {
        Self::Failure {
            source_path: source_path.to_path_buf(),
            kind: error.kind(),
            reason: error.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn source_path(&self) -> &Path {
        match self {
            Self::Success { source_path, .. } | Self::Failure { source_path, .. } => source_path,
        }
    }

    /// One human-readable console line
    pub fn report_line(&self) -> String {
        match self {
            Self::Success {
                source_path,
                destination_path,
                width,
                height,
                original_size,
                optimized_size,
            } => format!(
                "Optimized {} -> {} ({}x{}, {} -> {}, {})",
                source_path.display(),
                destination_path.display(),
                width,
                height,
                FileManager::format_size(*original_size),
                FileManager::format_size(*optimized_size),
                FileManager::describe_change(*original_size, *optimized_size)
            ),
            Self::Failure { source_path, reason, .. } => {
                format!("Error optimizing {}: {}", source_path.display(), reason)
            }
        }
    }
}
