//! # File I/O Module
//!
//! Handles project file operations with safety features:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **Version validation**: Ensure schema compatibility
//!
//! ## File Format
//!
//! Projects are saved as `.tcc` files containing JSON. Results can be
//! exported separately with [`save_result_json`]; they are never read back.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tcc_core::file_io::{save_project, load_project};
//! use tcc_core::project::TccProject;
//! use std::path::Path;
//!
//! let project = TccProject::default();
//! let path = Path::new("floor.tcc");
//!
//! save_project(&project, path).unwrap();
//! let loaded = load_project(path).unwrap();
//! assert_eq!(loaded.input, project.input);
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use serde::Serialize;

use crate::calculations::tcc::TccResult;
use crate::diagram::DiagramData;
use crate::errors::{CalcError, CalcResult};
use crate::project::{TccProject, SCHEMA_VERSION};

/// Serialize `value` as pretty JSON and write it atomically.
///
/// The save process:
/// 1. Serialize to JSON
/// 2. Write to a temporary file next to the target (`<ext>.tmp`)
/// 3. Sync to disk (fsync)
/// 4. Rename over the target (atomic on most filesystems)
fn write_json_atomic<T: Serialize>(value: &T, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    write_text_atomic(&json, path)
}

/// Write text to `path` via a synced temporary file and a rename.
pub fn write_text_atomic(contents: &str, path: &Path) -> CalcResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(contents.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

fn tmp_path_for(path: &Path) -> std::path::PathBuf {
    let extension = path
        .extension()
        .map(|e| format!("{}.tmp", e.to_string_lossy()))
        .unwrap_or_else(|| "tmp".to_string());
    path.with_extension(extension)
}

/// Save a project to a file with atomic write semantics.
///
/// # Example
///
/// ```rust,no_run
/// use tcc_core::file_io::save_project;
/// use tcc_core::project::TccProject;
/// use std::path::Path;
///
/// save_project(&TccProject::default(), Path::new("floor.tcc"))?;
/// # Ok::<(), tcc_core::errors::CalcError>(())
/// ```
pub fn save_project(project: &TccProject, path: &Path) -> CalcResult<()> {
    write_json_atomic(project, path)
}

/// Load a project from a file.
///
/// # Returns
///
/// * `Ok(TccProject)` - Successfully loaded project
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_project(path: &Path) -> CalcResult<TccProject> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let project: TccProject =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&project.meta.version)?;

    tracing::debug!(path = %path.display(), label = %project.input.label, "loaded project");
    Ok(project)
}

/// Export a calculation result as pretty JSON.
pub fn save_result_json(result: &TccResult, path: &Path) -> CalcResult<()> {
    write_json_atomic(result, path)
}

/// Export renderer-facing diagram data as pretty JSON.
pub fn save_diagram_json(diagram: &DiagramData, path: &Path) -> CalcResult<()> {
    write_json_atomic(diagram, path)
}

/// Validate that a file version is compatible with the current schema.
pub fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    let (Some(&file_major), Some(&current_major)) = (file_parts.first(), current_parts.first())
    else {
        return Err(mismatch());
    };

    // Major version must match
    if file_major != current_major {
        return Err(mismatch());
    }

    // For 0.x versions, a newer minor may have breaking changes
    if current_major == 0 {
        let file_minor = file_parts.get(1);
        let current_minor = current_parts.get(1);
        if let (Some(&file_minor), Some(&current_minor)) = (file_minor, current_minor) {
            if file_minor > current_minor {
                return Err(mismatch());
            }
        }
    }

    Ok(())
}
