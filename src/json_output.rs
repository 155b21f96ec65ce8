//! # JSON Output Module
//!
//! Questo modulo gestisce l'output strutturato in JSON (`--json`).
//!
//! ## Responsabilità:
//! - Emette un oggetto JSON per riga su stdout
//! - Riusa `OptimizationOutcome` e `OptimizationSummary` senza duplicarne i campi
//!
//! ## Tipi di messaggi:
//! - `outcome`: Risultato di una singola richiesta
//! - `summary`: Statistiche finali del run

use crate::optimizer::OptimizationSummary;
use crate::outcome::OptimizationOutcome;
use serde::{Deserialize, Serialize};

/// Tipo di messaggio JSON
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JsonMessage {
    /// Risultato di una richiesta
    Outcome {
        index: usize,
        total: usize,
        outcome: OptimizationOutcome,
    },

    /// Fine del run
    Summary { summary: OptimizationSummary },
}

impl JsonMessage {
    /// Emette il messaggio JSON su stdout
    pub fn emit(&self) {
        if let Ok(json) = serde_json::to_string(self) {
            println!("{}", json);
        }
    }

    pub fn outcome(index: usize, total: usize, outcome: &OptimizationOutcome) -> Self {
        Self::Outcome {
            index,
            total,
            outcome: outcome.clone(),
        }
    }

    pub fn summary(summary: &OptimizationSummary) -> Self {
        Self::Summary {
            summary: summary.clone(),
        }
    }
}
