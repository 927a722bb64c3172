//! Discovery and retrieval of saved analysis records
//!
//! Every call re-reads the archive folder; records added or removed by the
//! capture pipeline are visible without a restart.

use crate::resolver::{ArchiveFileResolver, ANALYSIS_FILE_EXT, ANALYSIS_FILE_PREFIX};
use amyarc_common::model::SavedAnalysis;
use amyarc_common::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Read-only access to the analysis records in the archive folder
#[derive(Debug, Clone)]
pub struct AnalysisRepository {
    resolver: ArchiveFileResolver,
}

impl AnalysisRepository {
    pub fn new(resolver: ArchiveFileResolver) -> Self {
        Self { resolver }
    }

    /// List every analysis record in the archive folder.
    ///
    /// Files that do not match the `amy_analysis_*.json` naming convention
    /// are skipped. One unreadable or invalid record fails the whole
    /// listing; partial results are never returned. Order is directory
    /// enumeration order.
    pub async fn list_all(&self) -> Result<Vec<SavedAnalysis>> {
        let folder = self.resolver.archive_folder();
        let mut entries = tokio::fs::read_dir(folder).await.map_err(|e| {
            Error::Retrieval(format!("Error retrieving analyses: cannot read archive folder: {}", e))
        })?;

        let mut analyses = Vec::new();
        loop {
            let entry = entries.next_entry().await.map_err(|e| {
                Error::Retrieval(format!("Error retrieving analyses: cannot read archive folder: {}", e))
            })?;
            let Some(entry) = entry else { break };

            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if !is_analysis_file_name(name) {
                continue;
            }

            let analysis = read_record(&entry.path(), name).await?;
            analyses.push(analysis);
        }

        debug!("Listed {} analysis records", analyses.len());
        Ok(analyses)
    }

    /// Fetch a single validated analysis record by id.
    ///
    /// Fails with `Error::NotFound` if no `amy_analysis_<id>.json` file
    /// exists, `Error::Retrieval` if the file cannot be read or does not
    /// match the record schema.
    pub async fn get_by_id(&self, id: &str) -> Result<SavedAnalysis> {
        let path = self.resolver.resolve_analysis(id)?;
        if !self.resolver.exists(&path) {
            return Err(Error::NotFound(format!("Analysis '{}' not found", id)));
        }

        let file_name = format!("{}{}{}", ANALYSIS_FILE_PREFIX, id, ANALYSIS_FILE_EXT);
        read_record(&path, &file_name).await
    }
}

/// Eligibility check for record files: `amy_analysis_<id>.json`
fn is_analysis_file_name(name: &str) -> bool {
    name.starts_with(ANALYSIS_FILE_PREFIX) && name.ends_with(ANALYSIS_FILE_EXT)
}

/// Read and validate one record file.
///
/// Error messages carry the record file name, never the full path.
async fn read_record(path: &Path, file_name: &str) -> Result<SavedAnalysis> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        Error::Retrieval(format!("Error retrieving analysis '{}': {}", file_name, e))
    })?;
    serde_json::from_slice(&bytes).map_err(|e| {
        Error::Retrieval(format!("Error retrieving analysis '{}': invalid record: {}", file_name, e))
    })
}
