//! # File Management Module
//!
//! Questo modulo gestisce le operazioni sui file dell'ottimizzatore.
//!
//! ## Responsabilità:
//! - Scrittura atomica della destinazione (file temporaneo + rename)
//! - Utilità per calcoli dimensioni e percentuali
//! - Formattazione human-readable delle dimensioni
//!
//! ## Sicurezza operazioni:
//! - Il file temporaneo nasce nella stessa directory della destinazione,
//!   quindi il rename finale non attraversa filesystem diversi
//! - In caso di errore il temporaneo viene rimosso dal suo `Drop`
//! - La destinazione è sempre completa oppure intatta
//!
//! ## Esempio:
//! ```ignore
//! FileManager::write_atomic(Path::new("public/scroll3.jpg"), &jpeg_bytes)?;
//! println!("{}", FileManager::format_size(1536)); // "1.50 KB"
//! ```

use crate::error::OptimizeError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::Builder;
use tracing::debug;

/// Manages file operations
pub struct FileManager;

impl FileManager {
    /// Write `bytes` to `destination`, replacing it only once the data is fully on disk
    pub fn write_atomic(destination: &Path, bytes: &[u8]) -> Result<(), OptimizeError> {
        let write_error = |source: io::Error| OptimizeError::Write {
            path: destination.to_path_buf(),
            source,
        };

        let dir = match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = Builder::new()
            .prefix(".optimize-")
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(write_error)?;
        debug!("Writing {} bytes to {}", bytes.len(), temp.path().display());

        temp.write_all(bytes).map_err(write_error)?;
        temp.as_file().sync_all().map_err(write_error)?;
        Self::apply_output_permissions(temp.as_file(), destination).map_err(write_error)?;

        temp.persist(destination).map_err(|e| write_error(e.error))?;
        Ok(())
    }

    /// Temp files are created owner-only; give the output the permissions of the
    /// file it replaces, or regular 0644 for a new file.
    #[cfg(unix)]
    fn apply_output_permissions(file: &fs::File, destination: &Path) -> io::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let permissions = match fs::metadata(destination) {
            Ok(existing) => existing.permissions(),
            Err(_) => fs::Permissions::from_mode(0o644),
        };
        file.set_permissions(permissions)
    }

    #[cfg(not(unix))]
    fn apply_output_permissions(_file: &fs::File, _destination: &Path) -> io::Result<()> {
        Ok(())
    }

    /// Get human-readable file size
    pub fn format_size(size: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = size as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", size as u64, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }

    /// Calculate percentage reduction
    pub fn calculate_reduction(original_size: u64, new_size: u64) -> f64 {
        if original_size == 0 {
            0.0
        } else {
            ((original_size as f64 - new_size as f64) / original_size as f64) * 100.0
        }
    }

    /// "42.0% saved", or "12.5% larger" when the re-encode grew the file
    pub fn describe_change(original_size: u64, new_size: u64) -> String {
        let reduction = Self::calculate_reduction(original_size, new_size);
        if reduction < 0.0 {
            format!("{:.1}% larger", -reduction)
        } else {
            format!("{:.1}% saved", reduction)
        }
    }
}
