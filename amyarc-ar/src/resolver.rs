//! Safe file name resolution inside the archive folder

use amyarc_common::{Error, Result};
use std::path::{Component, Path, PathBuf};

/// Maps caller-supplied logical names (analysis ids, audio file names) to
/// concrete paths inside the archive folder.
///
/// Every resolved path must stay inside the archive folder. Names with
/// traversal segments, separators, or absolute prefixes are rejected before
/// touching the filesystem; a name that resolves through a symlink leaving
/// the archive is rejected after canonicalization.
#[derive(Debug, Clone)]
pub struct ArchiveFileResolver {
    archive_folder: PathBuf,
}

/// File name prefix of persisted analysis records
pub const ANALYSIS_FILE_PREFIX: &str = "amy_analysis_";

/// File name extension of persisted analysis records
pub const ANALYSIS_FILE_EXT: &str = ".json";

impl ArchiveFileResolver {
    pub fn new(archive_folder: impl Into<PathBuf>) -> Self {
        Self {
            archive_folder: archive_folder.into(),
        }
    }

    /// The archive folder this resolver is rooted at
    pub fn archive_folder(&self) -> &Path {
        &self.archive_folder
    }

    /// Resolve a raw file name to a path under the archive folder.
    ///
    /// Fails with `Error::InvalidName` if the name is empty, is not a
    /// single plain path component, or canonicalizes to a path outside
    /// the archive folder. A name that passes validation but has no
    /// backing file still resolves, so callers can report `NotFound`
    /// separately from a malformed name.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty() {
            return Err(Error::InvalidName("empty file name".to_string()));
        }
        if !is_plain_file_name(name) {
            return Err(Error::InvalidName(format!(
                "'{}' is not a plain file name",
                name
            )));
        }

        let candidate = self.archive_folder.join(name);

        // A plain component can still escape through a symlink; compare
        // canonical paths when the file exists.
        if candidate.exists() {
            let canonical = candidate.canonicalize()?;
            let root = self.archive_folder.canonicalize()?;
            if !canonical.starts_with(&root) {
                return Err(Error::InvalidName(format!(
                    "'{}' resolves outside the archive folder",
                    name
                )));
            }
        }

        Ok(candidate)
    }

    /// Resolve the record file for an analysis id
    /// (`amy_analysis_<id>.json`).
    pub fn resolve_analysis(&self, id: &str) -> Result<PathBuf> {
        if id.is_empty() {
            return Err(Error::InvalidName("empty analysis id".to_string()));
        }
        if !is_plain_file_name(id) {
            return Err(Error::InvalidName(format!(
                "'{}' is not a valid analysis id",
                id
            )));
        }
        self.resolve(&format!("{}{}{}", ANALYSIS_FILE_PREFIX, id, ANALYSIS_FILE_EXT))
    }

    /// Existence check on a resolved path
    pub fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// A name is plain when it parses as exactly one normal path component:
/// no `..`/`.` segments, no separators, no absolute or drive prefixes.
/// Backslashes are rejected explicitly; on Unix they are ordinary file
/// name bytes but never appear in archive file names.
fn is_plain_file_name(name: &str) -> bool {
    if name.contains('\\') {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
