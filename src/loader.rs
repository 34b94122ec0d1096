use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::engine::{EngineError, Hierarchy};
use crate::model::*;

/// Parse a JSON hierarchy description and build the index.
pub fn parse_hierarchy(json: &str) -> Result<Hierarchy, LoadError> {
    let spec: HierarchySpec = serde_json::from_str(json).map_err(LoadError::Parse)?;
    Hierarchy::build(&spec).map_err(LoadError::Hierarchy)
}

pub fn load_hierarchy(path: &Path) -> Result<Hierarchy, LoadError> {
    let json = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let hierarchy = parse_hierarchy(&json)?;
    debug!(path = %path.display(), resources = hierarchy.resource_count(), "hierarchy loaded");
    Ok(hierarchy)
}

pub fn read_queries(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write one result token per line. Creates or truncates `path`.
pub fn write_results(path: &Path, results: &[Outcome]) -> Result<(), LoadError> {
    let wrap = |source: io::Error| LoadError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);
    for outcome in results {
        writeln!(writer, "{outcome}").map_err(wrap)?;
    }
    writer.flush().map_err(wrap)?;
    Ok(())
}

#[derive(Debug)]
pub enum LoadError {
    Read { path: PathBuf, source: io::Error },
    Parse(serde_json::Error),
    Hierarchy(EngineError),
    Write { path: PathBuf, source: io::Error },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Read { path, source } => {
                write!(f, "failed to read '{}': {source}", path.display())
            }
            LoadError::Parse(e) => write!(f, "malformed resources file: {e}"),
            LoadError::Hierarchy(e) => write!(f, "invalid resource hierarchy: {e}"),
            LoadError::Write { path, source } => {
                write!(f, "failed to write output file '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Read { source, .. } | LoadError::Write { source, .. } => Some(source),
            LoadError::Parse(e) => Some(e),
            LoadError::Hierarchy(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("booker_test_loader");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn parse_valid_hierarchy() {
        let json = r#"{ "resources": { "buildings": [
            { "id": "B1", "vehicles": ["V0"], "sections": [
                { "id": "S1", "sections": [ { "id": "SS1", "vehicles": ["V1"] } ] }
            ] }
        ] } }"#;
        let h = parse_hierarchy(json).unwrap();
        assert_eq!(h.resource_count(), 5);
        assert_eq!(h.children_of("B1"), ["V0", "S1"]);
    }

    #[test]
    fn parse_accepts_long_vehicle_id() {
        let vehicle = "V".repeat(300);
        let json = format!(
            r#"{{ "resources": {{ "buildings": [ {{ "id": "B1", "vehicles": ["{vehicle}"] }} ] }} }}"#
        );
        let h = parse_hierarchy(&json).unwrap();
        assert!(h.contains(&vehicle));
        assert_eq!(h.children_of("B1"), [vehicle.as_str()]);
    }

    #[test]
    fn parse_rejects_malformed_json() {
        let err = parse_hierarchy("{ \"resources\": ").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        assert!(err.to_string().starts_with("malformed resources file"));
    }

    #[test]
    fn parse_rejects_wrong_shape() {
        let err = parse_hierarchy(r#"{ "resources": { "buildings": [ { "vehicles": [] } ] } }"#)
            .unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn parse_rejects_duplicate_ids() {
        let json = r#"{ "resources": { "buildings": [ { "id": "B1" }, { "id": "B1" } ] } }"#;
        let err = parse_hierarchy(json).unwrap_err();
        assert!(matches!(err, LoadError::Hierarchy(EngineError::DuplicateResource { .. })));
        assert!(err.to_string().contains("duplicate resource id 'B1'"));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let path = tmp_path("does_not_exist.json");
        let err = load_hierarchy(&path).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().contains("does_not_exist.json"));
    }

    #[test]
    fn load_from_file() {
        let path = tmp_path("resources.json");
        fs::write(&path, r#"{ "resources": { "buildings": [ { "id": "B1", "vehicles": ["V1"] } ] } }"#)
            .unwrap();
        let h = load_hierarchy(&path).unwrap();
        assert!(h.contains("V1"));
    }

    #[test]
    fn write_one_token_per_line() {
        let path = tmp_path("results.txt");
        write_results(&path, &[Outcome::Yes, Outcome::Ok, Outcome::Failed, Outcome::No]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "yes\nok\nfailed\nno\n");
    }

    #[test]
    fn write_truncates_existing_file() {
        let path = tmp_path("results_truncate.txt");
        fs::write(&path, "stale\nstale\nstale\n").unwrap();
        write_results(&path, &[Outcome::Ok]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "ok\n");
    }

    #[test]
    fn write_empty_results() {
        let path = tmp_path("results_empty.txt");
        write_results(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let path = std::env::temp_dir()
            .join("booker_test_loader_missing_dir")
            .join("nested")
            .join("results.txt");
        let err = write_results(&path, &[Outcome::Ok]).unwrap_err();
        assert!(matches!(err, LoadError::Write { .. }));
    }
}
