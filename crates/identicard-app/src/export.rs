//! ## Summary
//! Saves a finished vCard as a `.vcf` download.
//!
//! The text is wrapped in a [`VCardBlob`] tagged `text/vcard;charset=utf-8`
//! and handed to a [`DownloadTarget`]. The directory target writes through a
//! temporary file that is persisted under the final name; the temporary
//! handle is closed before [`download_vcard`] returns, whether saving
//! succeeded or not.

use std::io::Write;
use std::path::PathBuf;

use identicard_core::constants::{DEFAULT_FILENAME, VCARD_MIME_TYPE};
use identicard_core::error::CoreError;
use tempfile::NamedTempFile;

use crate::error::{AppError, AppResult};

/// An in-memory download: file name, media type and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardBlob<'a> {
    pub filename: &'a str,
    pub mime_type: &'static str,
    pub bytes: &'a [u8],
}

/// Where downloads end up.
pub trait DownloadTarget {
    /// Filename used when the caller does not pass one.
    fn default_filename(&self) -> &str {
        DEFAULT_FILENAME
    }

    /// ## Summary
    /// Saves the blob and returns its final location.
    ///
    /// ## Errors
    /// Returns an error if the blob cannot be saved.
    fn save(&self, blob: &VCardBlob<'_>) -> AppResult<PathBuf>;
}

/// Saves downloads as files in a directory.
#[derive(Debug, Clone)]
pub struct DirectoryTarget {
    dir: PathBuf,
    default_filename: String,
}

impl DirectoryTarget {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, default_filename: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            default_filename: default_filename.into(),
        }
    }
}

impl DownloadTarget for DirectoryTarget {
    fn default_filename(&self) -> &str {
        &self.default_filename
    }

    #[tracing::instrument(skip(self, blob), fields(filename = blob.filename, bytes = blob.bytes.len()))]
    fn save(&self, blob: &VCardBlob<'_>) -> AppResult<PathBuf> {
        check_filename(blob.filename)?;
        let dest = self.dir.join(blob.filename);
        let export_err = |source| AppError::Export {
            path: dest.clone(),
            source,
        };

        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(export_err)?;
        tmp.write_all(blob.bytes).map_err(export_err)?;
        tmp.flush().map_err(export_err)?;
        tmp.persist(&dest).map_err(|e| export_err(e.error))?;

        tracing::info!(path = %dest.display(), mime_type = blob.mime_type, "Saved vCard");
        Ok(dest)
    }
}

/// Rejects names that would leave the target directory.
fn check_filename(filename: &str) -> AppResult<()> {
    if filename.trim().is_empty()
        || filename.contains(['/', '\\'])
        || filename == "."
        || filename == ".."
    {
        return Err(CoreError::InvalidInput(format!(
            "{filename:?} is not a valid file name"
        ))
        .into());
    }
    Ok(())
}

/// ## Summary
/// Offers the vCard text as a download.
///
/// Uses the target's default filename when `filename` is `None`.
///
/// ## Errors
/// Returns an error if the target fails to save the blob.
pub fn download_vcard(
    vcard: &str,
    filename: Option<&str>,
    target: &impl DownloadTarget,
) -> AppResult<PathBuf> {
    let blob = VCardBlob {
        filename: filename.unwrap_or_else(|| target.default_filename()),
        mime_type: VCARD_MIME_TYPE,
        bytes: vcard.as_bytes(),
    };

    target.save(&blob)
}
