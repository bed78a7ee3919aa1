//! Record Store — the seed listings, loaded once at startup and shared read-only.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::Record;

/// Immutable, ordered list of seed records. A record's identity is its index.
///
/// Shared across handlers as `Arc<RecordStore>`; there are no writers after
/// construction, so no locking.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Loads the seed file. The top level must be a JSON array of objects.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file '{}'", path.display()))?;
        let store = Self::from_json(&raw).with_context(|| {
            format!("Seed file '{}' is not a JSON array of records", path.display())
        })?;

        info!(
            "Loaded {} records ({} active) from {}",
            store.len(),
            store.active().count(),
            path.display()
        );
        Ok(store)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_str(raw)?;
        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records eligible for search, in pool order.
    pub fn active(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(|r| r.is_active())
    }

    /// Every record's role title in pool order, inactive ones included.
    pub fn role_titles(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.role.title().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SEED: &str = r#"[
        {"employer": {"name": "Acme"}, "role": {"title": "Backend Intern"}},
        {"employer": {"name": "Globex"}, "role": {"title": "Data Analyst", "is_active": false}},
        {"employer": {"name": "Initech"}, "is_active": false},
        {"employer": {"name": "Hooli"}}
    ]"#;

    #[test]
    fn test_from_json_keeps_pool_order() {
        let store = RecordStore::from_json(SEED).unwrap();
        assert_eq!(store.len(), 4);
        let names: Vec<_> = store.records().iter().map(|r| r.employer.name()).collect();
        assert_eq!(names, vec!["Acme", "Globex", "Initech", "Hooli"]);
    }

    #[test]
    fn test_active_filters_inactive_records() {
        let store = RecordStore::from_json(SEED).unwrap();
        let active: Vec<_> = store.active().map(|r| r.employer.name()).collect();
        assert_eq!(active, vec!["Acme", "Hooli"]);
    }

    #[test]
    fn test_role_titles_include_inactive_and_blank() {
        let store = RecordStore::from_json(SEED).unwrap();
        assert_eq!(
            store.role_titles(),
            vec!["Backend Intern", "Data Analyst", "", ""]
        );
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(RecordStore::from_json(r#"{"employer": {}}"#).is_err());
    }

    #[test]
    fn test_from_json_rejects_non_object_element() {
        assert!(RecordStore::from_json(r#"[{"employer": {}}, "oops"]"#).is_err());
    }

    #[test]
    fn test_empty_array_is_empty_store() {
        let store = RecordStore::from_json("[]").unwrap();
        assert!(store.is_empty());
        assert_eq!(store.active().count(), 0);
    }

    #[test]
    fn test_bundled_seed_parses() {
        let store = RecordStore::from_json(include_str!("../data/roles_seed.json")).unwrap();
        assert_eq!(store.len(), 6);
        assert_eq!(store.active().count(), 4);
    }

    #[test]
    fn test_load_reads_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SEED.as_bytes()).unwrap();

        let store = RecordStore::load(file.path()).unwrap();
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = RecordStore::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("missing.json"));
    }
}
