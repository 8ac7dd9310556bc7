use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use uuid::Uuid;

use crate::error::{PromoAdminError, Result};
use crate::model::{BlogPost, PromoCode};

use super::{BlogPostStore, MemoryStore, PromoCodeStore};

pub const SNAPSHOT_VERSION: u32 = 1;

/// On-disk layout of a [`JsonFileStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    #[serde(flatten)]
    pub rows: MemoryStore,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            rows: MemoryStore::new(),
        }
    }
}

/// Store backed by a pretty-printed JSON snapshot file.
///
/// The whole file is read on open. Every mutation is applied to a copy,
/// written to disk, and only then becomes visible; a failed write leaves both
/// the file and the in-memory rows untouched.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    rows: MemoryStore,
}

impl JsonFileStore {
    /// Open the snapshot at `path`. A missing file is an empty store.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read, is not valid
    /// JSON, or carries an unsupported version.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let rows = match fs::read_to_string(&path) {
            Ok(content) => parse_snapshot(&path, &content)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "snapshot missing, starting empty");
                MemoryStore::new()
            }
            Err(source) => return Err(PromoAdminError::FileRead { path, source }),
        };

        debug!(
            path = %path.display(),
            codes = rows.promo_codes.len(),
            posts = rows.blog_posts.len(),
            "snapshot loaded"
        );
        Ok(Self { path, rows })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn commit<T>(&mut self, change: impl FnOnce(&mut MemoryStore) -> Result<T>) -> Result<T> {
        let mut next = self.rows.clone();
        let outcome = change(&mut next)?;
        write_snapshot(&self.path, &next)?;
        self.rows = next;
        Ok(outcome)
    }
}

fn parse_snapshot(path: &Path, content: &str) -> Result<MemoryStore> {
    let snapshot: Snapshot = serde_json::from_str(content)?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(PromoAdminError::UnsupportedSnapshotVersion {
            path: path.to_path_buf(),
            found: snapshot.version,
            expected: SNAPSHOT_VERSION,
        });
    }
    Ok(snapshot.rows)
}

/// Serialize to a sibling temp file, then rename over the target.
fn write_snapshot(path: &Path, rows: &MemoryStore) -> Result<()> {
    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        rows: rows.clone(),
    };
    let json = serde_json::to_string_pretty(&snapshot)?;

    let to_write_error = |source: io::Error| PromoAdminError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_write_error)?;
    }

    let tmp = temp_path(path);
    fs::write(&tmp, json).map_err(to_write_error)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(to_write_error(e));
    }

    trace!(path = %path.display(), "snapshot written");
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

impl PromoCodeStore for JsonFileStore {
    fn fetch_codes(&self) -> Result<Vec<PromoCode>> {
        self.rows.fetch_codes()
    }

    fn insert_codes(&mut self, codes: Vec<PromoCode>) -> Result<()> {
        self.commit(|rows| rows.insert_codes(codes))
    }

    fn delete_codes(&mut self, ids: &[Uuid]) -> Result<usize> {
        self.commit(|rows| rows.delete_codes(ids))
    }
}

impl BlogPostStore for JsonFileStore {
    fn fetch_posts(&self) -> Result<Vec<BlogPost>> {
        self.rows.fetch_posts()
    }

    fn insert_post(&mut self, post: BlogPost) -> Result<()> {
        self.commit(|rows| rows.insert_post(post))
    }

    fn replace_post(&mut self, post: BlogPost) -> Result<()> {
        self.commit(|rows| rows.replace_post(post))
    }

    fn delete_post(&mut self, id: Uuid) -> Result<()> {
        self.commit(|rows| rows.delete_post(id))
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
