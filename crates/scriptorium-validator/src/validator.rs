//! Dataset validation logic

use crate::error::{DatasetError, Inconsistency};
use scriptorium_domain::naming;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// The DatasetValidator gates corpus directories before they are scanned
///
/// Validation is a pure gate: on success nothing is returned and the caller
/// may build an article store from the directory unconditionally.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetValidator;

/// One directory entry, as seen by the validator
struct Entry {
    name: String,
    len: u64,
}

impl DatasetValidator {
    /// Create a new DatasetValidator
    pub fn new() -> Self {
        Self
    }

    /// Validate the directory at `path`
    ///
    /// # Errors
    ///
    /// - [`DatasetError::NotFound`] if the path does not exist
    /// - [`DatasetError::NotADirectory`] if it is not a directory
    /// - [`DatasetError::EmptyDataset`] if the directory has no entries
    /// - [`DatasetError::Inconsistent`] for any violated invariant
    pub fn validate(&self, path: impl AsRef<Path>) -> Result<(), DatasetError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(DatasetError::NotFound(path.to_path_buf()));
        }
        if !path.is_dir() {
            return Err(DatasetError::NotADirectory(path.to_path_buf()));
        }

        let entries = self.list_entries(path)?;
        if entries.is_empty() {
            return Err(DatasetError::EmptyDataset(path.to_path_buf()));
        }

        debug!("Validating {} entries in {}", entries.len(), path.display());

        let mut ids = BTreeSet::new();
        let mut raw_count = 0;
        let mut meta_count = 0;

        for entry in &entries {
            let id = naming::leading_number(&entry.name)
                .ok_or_else(|| Inconsistency::MissingLeadingId(entry.name.clone()))?;
            ids.insert(id);

            if naming::is_raw_file(&entry.name) {
                raw_count += 1;
                if entry.len == 0 {
                    return Err(Inconsistency::EmptyRawFile(entry.name.clone()).into());
                }
            }
            if naming::is_meta_file(&entry.name) {
                meta_count += 1;
            }
        }

        check_numbering(&ids)?;

        if raw_count != meta_count {
            return Err(Inconsistency::FileCountMismatch {
                raw: raw_count,
                meta: meta_count,
            }
            .into());
        }

        info!(
            "Dataset {} is consistent: {} articles",
            path.display(),
            ids.len()
        );
        Ok(())
    }

    /// List directory entries sorted by name, so that the first reported
    /// violation does not depend on filesystem order
    fn list_entries(&self, path: &Path) -> Result<Vec<Entry>, DatasetError> {
        let mut entries = Vec::new();
        for dir_entry in fs::read_dir(path)? {
            let dir_entry = dir_entry?;
            let metadata = dir_entry.metadata()?;
            entries.push(Entry {
                name: dir_entry.file_name().to_string_lossy().into_owned(),
                len: metadata.len(),
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

/// Require the id set to be exactly `1..=N`
///
/// Ids shared by several files of one article appear once in the set.
fn check_numbering(ids: &BTreeSet<u32>) -> Result<(), Inconsistency> {
    let mut previous = 0u32;
    for &id in ids {
        if previous == 0 && id != 1 {
            return Err(Inconsistency::NumberingStart(id));
        }
        if previous != 0 && id != previous + 1 {
            return Err(Inconsistency::NumberingGap { previous, next: id });
        }
        previous = id;
    }
    Ok(())
}

/// Validate the directory at `path` with a default validator
pub fn validate_dataset(path: impl AsRef<Path>) -> Result<(), DatasetError> {
    DatasetValidator::new().validate(path)
}
