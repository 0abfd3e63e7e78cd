use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::PlaceRecord;

/// Append-only JSON archive of every place fetched from the external
/// lookup, kept alongside the search index as a flat-file audit trail.
///
/// Each append is a read-modify-write of the whole array; this is not safe
/// for concurrent writers.
#[derive(Debug, Clone)]
pub struct PlaceArchive {
    path: PathBuf,
}

impl PlaceArchive {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, record: &PlaceRecord) -> Result<()> {
        let mut records = self.read_all();
        records.push(record.clone());

        let json = serde_json::to_string_pretty(&records)?;
        fs::write(&self.path, json)?;

        tracing::debug!(path = %self.path.display(), total = records.len(), "Archived place");
        Ok(())
    }

    /// Current archive contents. A missing or corrupt file starts a fresh
    /// array rather than failing the append.
    pub fn read_all(&self) -> Vec<PlaceRecord> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Archive file is not valid JSON, starting over"
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample(name: &str) -> PlaceRecord {
        PlaceRecord {
            name: name.to_string(),
            description: format!("{name}은 어딘가에 위치한 관광명소입니다."),
            location: "어딘가".to_string(),
            url: "http://place.map.kakao.com/1".to_string(),
            hours: None,
            highlights: vec![],
            nearby: vec![],
        }
    }

    #[test]
    fn append_creates_file_with_one_entry() {
        let dir = tempfile::tempdir().unwrap();
        let archive = PlaceArchive::new(dir.path().join("tour_data.json"));

        archive.append(&sample("한라산")).unwrap();

        let records = archive.read_all();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "한라산");
    }

    #[test]
    fn append_preserves_existing_entries_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let archive = PlaceArchive::new(dir.path().join("tour_data.json"));

        archive.append(&sample("경복궁")).unwrap();
        archive.append(&sample("불국사")).unwrap();

        let names: Vec<String> = archive.read_all().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["경복궁", "불국사"]);
    }

    #[test]
    fn corrupt_file_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tour_data.json");
        std::fs::write(&path, "{not json").unwrap();

        let archive = PlaceArchive::new(&path);
        archive.append(&sample("해운대")).unwrap();

        assert_eq!(archive.read_all().len(), 1);
    }
}
