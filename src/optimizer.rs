//! # Optimizer Driver Module
//!
//! Driver sequenziale sopra `ImageOptimizer`.
//!
//! ## Responsabilità:
//! - Definisce la lista fissa di asset da ottimizzare (`default_requests`)
//! - Esegue le richieste una alla volta, senza fermarsi ai fallimenti
//! - Aggrega gli esiti in `OptimizationSummary`
//!
//! Nessun lavoro avviene al caricamento del modulo: solo `main` avvia il run.

use crate::config::OptimizationRequest;
use crate::file_manager::FileManager;
use crate::image_processor::ImageOptimizer;
use crate::outcome::OptimizationOutcome;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Source and destination file names of the bundled assets, relative to the base directory
pub const ASSETS: &[(&str, &str)] = &[
    ("scroll3.png", "scroll3.jpg"),
    ("scroll4.png", "scroll4.jpg"),
];

/// Build the fixed request list under `base_dir`
pub fn default_requests(base_dir: &Path, max_width: u32, quality: u8) -> Vec<OptimizationRequest> {
    ASSETS
        .iter()
        .map(|(source, destination)| {
            OptimizationRequest::new(base_dir.join(source), base_dir.join(destination))
                .with_max_width(max_width)
                .with_quality(quality)
        })
        .collect()
}

/// Run every request in order, calling `on_outcome` as each one finishes.
///
/// Returns the outcomes in request order together with their summary.
pub fn run_requests<F>(
    requests: &[OptimizationRequest],
    mut on_outcome: F,
) -> (Vec<OptimizationOutcome>, OptimizationSummary)
where
    F: FnMut(usize, &OptimizationOutcome),
{
    let optimizer = ImageOptimizer::new();
    let mut outcomes = Vec::with_capacity(requests.len());
    let mut summary = OptimizationSummary::default();

    for (index, request) in requests.iter().enumerate() {
        debug!("Request {}/{}: {:?}", index + 1, requests.len(), request);
        let outcome = optimizer.optimize(request);
        on_outcome(index, &outcome);
        summary.add(&outcome);
        outcomes.push(outcome);
    }

    (outcomes, summary)
}

/// Statistics over one run
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub total_original_size: u64,
    pub total_optimized_size: u64,
}

impl OptimizationSummary {
    pub fn from_outcomes(outcomes: &[OptimizationOutcome]) -> Self {
        let mut summary = Self::default();
        for outcome in outcomes {
            summary.add(outcome);
        }
        summary
    }

    pub fn add(&mut self, outcome: &OptimizationOutcome) {
        self.attempted += 1;
        match outcome {
            OptimizationOutcome::Success { original_size, optimized_size, .. } => {
                self.succeeded += 1;
                self.total_original_size += original_size;
                self.total_optimized_size += optimized_size;
            }
            OptimizationOutcome::Failure { .. } => self.failed += 1,
        }
    }

    /// Bytes saved; a re-encode that grew the file counts as zero
    pub fn bytes_saved(&self) -> u64 {
        self.total_original_size.saturating_sub(self.total_optimized_size)
    }

    pub fn overall_reduction_percent(&self) -> f64 {
        FileManager::calculate_reduction(self.total_original_size, self.total_optimized_size)
    }

    pub fn format_summary(&self) -> String {
        format!(
            "Processed: {} files | Optimized: {} | Errors: {} | Total saved: {} ({})",
            self.attempted,
            self.succeeded,
            self.failed,
            FileManager::format_size(self.bytes_saved()),
            FileManager::describe_change(self.total_original_size, self.total_optimized_size)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use image::{Rgba, RgbaImage};
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_default_requests() {
        let requests = default_requests(Path::new("public"), 1600, 85);

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].source_path, PathBuf::from("public/scroll3.png"));
        assert_eq!(requests[0].destination_path, PathBuf::from("public/scroll3.jpg"));
        assert_eq!(requests[1].source_path, PathBuf::from("public/scroll4.png"));
        assert_eq!(requests[1].destination_path, PathBuf::from("public/scroll4.jpg"));
        assert!(requests.iter().all(|r| r.max_width == 1600 && r.quality == 85));
    }

    #[test]
    fn test_run_continues_after_failure() {
        let temp_dir = TempDir::new().unwrap();
        // Only the second asset exists
        RgbaImage::from_pixel(64, 16, Rgba([10, 20, 30, 255]))
            .save(temp_dir.path().join("scroll4.png"))
            .unwrap();

        let requests = default_requests(temp_dir.path(), 32, 85);
        let mut seen = Vec::new();
        let (outcomes, summary) = run_requests(&requests, |index, outcome| seen.push((index, outcome.is_success())));

        assert_eq!(seen, vec![(0, false), (1, true)]);
        assert!(matches!(
            outcomes[0],
            OptimizationOutcome::Failure { kind: FailureKind::MissingSource, .. }
        ));
        assert!(!temp_dir.path().join("scroll3.jpg").exists());

        let written = image::open(temp_dir.path().join("scroll4.jpg")).unwrap();
        assert_eq!((written.width(), written.height()), (32, 8));

        assert_eq!(summary, OptimizationSummary::from_outcomes(&outcomes));
        assert_eq!(summary.attempted, 2);
        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.failed, 1);
        assert!(summary.total_optimized_size > 0);
    }

    #[test]
    fn test_summary_bytes_saved() {
        let success = |original_size, optimized_size| OptimizationOutcome::Success {
            source_path: PathBuf::from("a.png"),
            destination_path: PathBuf::from("a.jpg"),
            width: 1,
            height: 1,
            original_size,
            optimized_size,
        };

        let summary = OptimizationSummary::from_outcomes(&[success(1000, 250), success(100, 150)]);

        assert_eq!(summary.total_original_size, 1100);
        assert_eq!(summary.total_optimized_size, 400);
        assert_eq!(summary.bytes_saved(), 700);
        assert!(summary.format_summary().starts_with("Processed: 2 files | Optimized: 2 | Errors: 0"));
        assert!(summary.format_summary().ends_with("(63.6% saved)"));

        let grown = OptimizationSummary::from_outcomes(&[success(100, 150)]);
        assert_eq!(grown.bytes_saved(), 0);
        assert!(grown.format_summary().ends_with("Total saved: 0 B (50.0% larger)"));
    }

    #[test]
    fn test_empty_run() {
        let (outcomes, summary) = run_requests(&[], |_, _| panic!("no outcomes expected"));
        assert!(outcomes.is_empty());
        assert_eq!(summary.attempted, 0);
        assert_eq!(summary.overall_reduction_percent(), 0.0);
    }
}
