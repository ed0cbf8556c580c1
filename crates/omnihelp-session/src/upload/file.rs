//! Staged file selection and size display.

use std::path::Path;

use bytes::Bytes;
use derive_more::{AsRef, Deref};

/// A file staged for upload.
///
/// Holds the display name and raw content, and dereferences to the
/// underlying [`Bytes`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(AsRef, Deref)]
pub struct SelectedFile {
    name: String,

    #[deref]
    #[as_ref]
    content: Bytes,
}

impl SelectedFile {
    /// Stages a file from a display name and its raw content.
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Display name, usually the original filename.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw file content.
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    /// Content size in bytes.
    pub fn size(&self) -> usize {
        self.content.len()
    }

    /// Content size formatted for display.
    pub fn formatted_size(&self) -> String {
        format_file_size(self.size() as u64)
    }

    /// Returns true when the name carries a `.pdf` extension, compared
    /// case-insensitively.
    pub fn is_pdf(&self) -> bool {
        Path::new(&self.name)
            .extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case("pdf"))
    }
}

/// Formats a byte count for display, binary-scaled to at most two decimals.
///
/// # Examples
///
/// ```rust
/// use omnihelp_session::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 Bytes");
/// assert_eq!(format_file_size(1024), "1 KB");
/// assert_eq!(format_file_size(2_300_000), "2.19 MB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let scale = (((bytes as f64).ln() / 1024_f64.ln()).floor() as usize).min(UNITS.len() - 1);
    let value = (bytes as f64 / 1024_f64.powi(scale as i32) * 100.0).round() / 100.0;
    let unit = UNITS[scale];
    format!("{value} {unit}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(500), "500 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2_300_000), "2.19 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024), "5 GB");
    }

    #[test]
    fn test_format_file_size_clamps_to_largest_unit() {
        // Terabyte-scale counts stay in gigabytes rather than scaling past
        // the unit table.
        assert_eq!(format_file_size(2 * 1024 * 1024 * 1024 * 1024), "2048 GB");
    }

    #[test]
    fn test_pdf_detection_is_case_insensitive() {
        assert!(SelectedFile::new("manual.pdf", Bytes::new()).is_pdf());
        assert!(SelectedFile::new("Manual.PDF", Bytes::new()).is_pdf());
        assert!(SelectedFile::new("archive.v2.Pdf", Bytes::new()).is_pdf());

        assert!(!SelectedFile::new("notes.txt", Bytes::new()).is_pdf());
        assert!(!SelectedFile::new("manual", Bytes::new()).is_pdf());
        assert!(!SelectedFile::new("manual.pdf.exe", Bytes::new()).is_pdf());
    }

    #[test]
    fn test_selected_file_derefs_to_content() {
        let file = SelectedFile::new("manual.pdf", Bytes::from_static(b"%PDF-1.7"));

        assert_eq!(file.size(), 8);
        assert_eq!(file.len(), 8);
        assert_eq!(&file[..4], b"%PDF");
        assert_eq!(file.formatted_size(), "8 Bytes");
    }
}
