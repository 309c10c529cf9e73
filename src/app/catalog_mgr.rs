// Blueprint - app/catalog_mgr.rs
//
// Chooses the company records shown in the directory: a user-supplied JSON
// catalog when one is configured and valid, the built-in fixture otherwise.

use crate::core::catalog;
use crate::core::model::CompanyRecord;
use crate::util::constants;
use crate::util::error::CatalogError;
use std::path::Path;

/// Read and validate a catalog file from disk.
pub fn load_catalog_file(path: &Path) -> Result<Vec<CompanyRecord>, CatalogError> {
    let metadata = std::fs::metadata(path).map_err(|e| CatalogError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    if metadata.len() > constants::MAX_CATALOG_FILE_SIZE {
        return Err(CatalogError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size: constants::MAX_CATALOG_FILE_SIZE,
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    catalog::parse_catalog_json(&content, path)
}

/// Load the records to display.
///
/// A catalog that fails to load is logged and reported back; the built-in
/// records are used in its place (non-fatal).
pub fn load_companies(catalog_path: Option<&Path>) -> (Vec<CompanyRecord>, Option<CatalogError>) {
    let Some(path) = catalog_path else {
        let companies = catalog::sample_companies();
        tracing::info!(count = companies.len(), "Using built-in sample companies");
        return (companies, None);
    };

    match load_catalog_file(path) {
        Ok(companies) => {
            tracing::info!(
                path = %path.display(),
                count = companies.len(),
                "Loaded company catalog"
            );
            (companies, None)
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Catalog failed to load; falling back to built-in sample companies"
            );
            (catalog::sample_companies(), Some(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_no_catalog_uses_samples() {
        let (companies, err) = load_companies(None);
        assert_eq!(companies.len(), 8);
        assert!(err.is_none());
    }

    #[test]
    fn test_missing_file_falls_back_with_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let (companies, err) = load_companies(Some(&path));
        assert_eq!(companies, catalog::sample_companies());
        assert!(matches!(err, Some(CatalogError::Io { .. })));
    }

    #[test]
    fn test_valid_file_replaces_samples() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name":"Orbital","industry":"Hardware","size":"Startup (1-50)",
                "location":"Remote","founded":"2023","employees":"9","funding":"$2M"}}]"#
        )
        .unwrap();
        let (companies, err) = load_companies(Some(file.path()));
        assert!(err.is_none(), "{err:?}");
        assert_eq!(companies.len(), 1);
        assert_eq!(companies[0].name, "Orbital");
    }

    #[test]
    fn test_oversized_file_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let padding = vec![b' '; constants::MAX_CATALOG_FILE_SIZE as usize + 1];
        file.write_all(&padding).unwrap();
        let result = load_catalog_file(file.path());
        assert!(matches!(result, Err(CatalogError::FileTooLarge { .. })));
    }
}
