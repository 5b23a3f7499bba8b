use std::fs;
use std::io::{self, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serializer as _;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;

/// Error type for record store I/O
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Load/save boundary between an in-memory collection and its JSON file.
///
/// The file holds a single JSON array of flat objects. A missing file is an
/// empty collection.
#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R> RecordStore<R>
where
    R: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RecordStore {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record from the backing file.
    pub fn load(&self) -> Result<Vec<R>, StoreError> {
        if !self.path.exists() {
            log::debug!("{} does not exist, starting empty", self.path.display());
            return Ok(Vec::new());
        }
        let text = fs::read_to_string(&self.path).map_err(|e| StoreError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        let records: Vec<R> = serde_json::from_str(&text).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            source: e,
        })?;
        log::debug!("loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    /// Overwrite the backing file with the full sequence of records.
    pub fn save<'a, I>(&self, records: I) -> Result<(), StoreError>
    where
        I: IntoIterator<Item = &'a R>,
        R: 'a,
    {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        (&mut ser).collect_seq(records)?;

        atomic_write(&self.path, &buf).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })?;
        log::debug!("saved {}", self.path.display());
        Ok(())
    }
}

/// Write `content` to `path` through a temp file and a rename, so readers
/// never see a half-written file.
///
/// A symlinked `path` is followed so the link target is what gets replaced,
/// and an existing file keeps its permissions.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let target = if path.exists() {
        fs::canonicalize(path)?
    } else {
        path.to_path_buf()
    };
    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    if let Ok(meta) = fs::metadata(&target) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Contact, Task};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn task_store(dir: &TempDir) -> RecordStore<Task> {
        RecordStore::new(dir.path().join("tasks.json"))
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = task_store(&dir);
        assert!(store.load().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn load_malformed_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let store = task_store(&dir);
        fs::write(store.path(), "not json [[[").unwrap();
        assert!(matches!(store.load(), Err(StoreError::Parse { .. })));
    }

    #[test]
    fn load_empty_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let store = task_store(&dir);
        fs::write(store.path(), "").unwrap();
        assert!(matches!(store.load(), Err(StoreError::Parse { .. })));
    }

    #[test]
    fn save_writes_four_space_indented_array() {
        let dir = TempDir::new().unwrap();
        let store = task_store(&dir);
        store.save(&[Task::new("Buy milk")]).unwrap();
        let text = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            text,
            "[\n    {\n        \"task\": \"Buy milk\",\n        \"done\": false\n    }\n]"
        );
    }

    #[test]
    fn save_empty_sequence_writes_empty_array() {
        let dir = TempDir::new().unwrap();
        let store = task_store(&dir);
        store.save(&Vec::<Task>::new()).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
    }

    #[test]
    fn save_overwrites_rather_than_appends() {
        let dir = TempDir::new().unwrap();
        let store = task_store(&dir);
        store.save(&[Task::new("a"), Task::new("b")]).unwrap();
        store.save(&[Task::new("c")]).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, vec![Task::new("c")]);
    }

    #[test]
    fn save_of_load_is_json_equal() {
        let dir = TempDir::new().unwrap();
        let store: RecordStore<Contact> = RecordStore::new(dir.path().join("contacts.json"));
        let original = r#"[{"name":"Ann","phone":"111","email":"ann@example.org","address":"1 Elm St"},
            {"name":"Bob","phone":"222","email":"","address":""}]"#;
        fs::write(store.path(), original).unwrap();

        let records = store.load().unwrap();
        store.save(&records).unwrap();

        let before: serde_json::Value = serde_json::from_str(original).unwrap();
        let after: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(before, after);
    }

    #[cfg(unix)]
    #[test]
    fn save_through_symlink_updates_link_target() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("real.json");
        let link = dir.path().join("tasks.json");
        fs::write(&real, "[]").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let store: RecordStore<Task> = RecordStore::new(&link);
        store.save(&[Task::new("Buy milk")]).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        let on_disk: Vec<Task> = serde_json::from_str(&fs::read_to_string(&real).unwrap()).unwrap();
        assert_eq!(on_disk, vec![Task::new("Buy milk")]);
    }

    #[cfg(unix)]
    #[test]
    fn save_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = task_store(&dir);
        fs::write(store.path(), "[]").unwrap();
        fs::set_permissions(store.path(), fs::Permissions::from_mode(0o644)).unwrap();

        store.save(&[Task::new("x")]).unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[test]
    fn save_into_missing_directory_is_write_error() {
        let dir = TempDir::new().unwrap();
        let store: RecordStore<Task> = RecordStore::new(dir.path().join("nope/tasks.json"));
        assert!(matches!(
            store.save(&[Task::new("x")]),
            Err(StoreError::Write { .. })
        ));
    }
}
