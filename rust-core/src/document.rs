//! Frequency-data document: one reduced spectrum per window
//!
//! Serializes as a JSON array of arrays of numbers, rows in window order and
//! values in ascending frequency order.

use crate::error::{FrequencyDataError, Result};
use ndarray::{Array2, ArrayView1};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::Builder;

/// Reduced spectra stored as a (windows × bands) matrix
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyData {
    values: Array2<f64>,
}

impl FrequencyData {
    /// Build from per-window rows, each of length `num_bands`
    pub fn from_rows(rows: Vec<Vec<f64>>, num_bands: usize) -> Result<Self> {
        let num_windows = rows.len();
        let flat: Vec<f64> = rows.into_iter().flatten().collect();

        let values = Array2::from_shape_vec((num_windows, num_bands), flat)
            .map_err(|e| FrequencyDataError::Transform(format!("ragged spectra: {}", e)))?;

        Ok(Self { values })
    }

    /// Wrap an existing matrix
    pub fn from_array(values: Array2<f64>) -> Self {
        Self { values }
    }

    pub fn num_windows(&self) -> usize {
        self.values.nrows()
    }

    pub fn num_bands(&self) -> usize {
        self.values.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.values.nrows() == 0
    }

    /// Band value for one window
    ///
    /// Panics if out of bounds.
    pub fn get(&self, window: usize, band: usize) -> f64 {
        self.values[[window, band]]
    }

    /// Reduced spectrum of one window
    pub fn window(&self, index: usize) -> ArrayView1<'_, f64> {
        self.values.row(index)
    }

    /// Underlying matrix
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn into_array(self) -> Array2<f64> {
        self.values
    }

    /// Copy out as nested vectors
    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        self.values.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Encode the document as a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Write the document to `path`, replacing any existing file
    ///
    /// The JSON is written to a temporary file next to the target and renamed
    /// into place, so a failure never leaves a truncated document behind.
    /// An existing target keeps its permissions, a new one gets the umask
    /// default, and a symlinked target is written through.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let target = resolve_target(path);
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = temp_builder()
            .tempfile_in(dir)
            .map_err(|e| FrequencyDataError::write(path, e))?;

        if let Ok(existing) = fs::metadata(&target) {
            tmp.as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| FrequencyDataError::write(path, e))?;
        }

        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            serde_json::to_writer(&mut writer, self)?;
            writer
                .flush()
                .map_err(|e| FrequencyDataError::write(path, e))?;
        }

        tmp.persist(&target)
            .map_err(|e| FrequencyDataError::write(path, e.error))?;

        Ok(())
    }
}

/// Follow a symlinked output path to the file it points at
///
/// Dangling links fall back to the link path itself.
fn resolve_target(path: &Path) -> PathBuf {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}

/// Temp files are created 0o666 so the process umask applies, like `File::create`
#[cfg(unix)]
fn temp_builder<'a, 'b>() -> Builder<'a, 'b> {
    use std::os::unix::fs::PermissionsExt;

    let mut builder = Builder::new();
    builder.permissions(fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn temp_builder<'a, 'b>() -> Builder<'a, 'b> {
    Builder::new()
}

struct Row<'a>(ArrayView1<'a, f64>);

impl Serialize for Row<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for value in self.0.iter() {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl Serialize for FrequencyData {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.num_windows()))?;
        for row in self.values.rows() {
            seq.serialize_element(&Row(row))?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FrequencyData {
        FrequencyData::from_rows(vec![vec![1.0, 0.25], vec![0.0, 3.5]], 2).unwrap()
    }

    #[test]
    fn test_json_shape() {
        assert_eq!(sample().to_json().unwrap(), "[[1.0,0.25],[0.0,3.5]]");
    }

    #[test]
    fn test_empty_document() {
        let data = FrequencyData::from_rows(Vec::new(), 16).unwrap();
        assert!(data.is_empty());
        assert_eq!(data.to_json().unwrap(), "[]");
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = FrequencyData::from_rows(vec![vec![1.0, 2.0], vec![3.0]], 2).unwrap_err();
        assert!(matches!(err, FrequencyDataError::Transform(_)));
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frequency_data.json");

        sample().write_json(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<Vec<f64>> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, sample().to_nested());
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let previous = "this is a much longer previous document than the new one";
        std::fs::write(&path, previous).unwrap();

        FrequencyData::from_rows(vec![vec![2.0]], 1)
            .unwrap()
            .write_json(&path)
            .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[[2.0]]");
    }

    #[test]
    fn test_missing_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");

        let err = sample().write_json(&path).unwrap_err();
        assert!(matches!(err, FrequencyDataError::Write { .. }));
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_overwrite_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, "[]").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        sample().write_json(&path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_uses_umask_default() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let reference = dir.path().join("reference");
        std::fs::File::create(&reference).unwrap();
        let path = dir.path().join("fresh.json");

        sample().write_json(&path).unwrap();

        let mode = |p: &Path| std::fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&path), mode(&reference));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_target_written_through() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real.json");
        let link = dir.path().join("link.json");
        std::fs::write(&real, "[]").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        sample().write_json(&link).unwrap();

        let link_meta = std::fs::symlink_metadata(&link).unwrap();
        assert!(link_meta.file_type().is_symlink());
        assert_eq!(
            std::fs::read_to_string(&real).unwrap(),
            "[[1.0,0.25],[0.0,3.5]]"
        );
    }
}
