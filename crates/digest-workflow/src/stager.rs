use crate::error::StageError;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Writes uploaded payloads into a shared staging directory.
///
/// Files are named after the upload; staging the same name twice overwrites
/// the earlier content. Stale files are removed by [`FileStager::sweep`].
#[derive(Debug, Clone)]
pub struct FileStager {
    dir: PathBuf,
}

impl FileStager {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a given upload name stages to, without writing anything
    pub fn path_for(&self, name: &str) -> Result<PathBuf, StageError> {
        let file_name = Path::new(name)
            .file_name()
            .ok_or_else(|| StageError::InvalidName(name.to_string()))?;

        Ok(self.dir.join(file_name))
    }

    pub async fn stage(&self, name: &str, bytes: &[u8]) -> Result<PathBuf, StageError> {
        let path = self.path_for(name)?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| StageError::Io {
                path: self.dir.clone(),
                source,
            })?;

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| StageError::Io {
                path: path.clone(),
                source,
            })?;

        tracing::info!(path = %path.display(), bytes = bytes.len(), "upload staged");
        Ok(path)
    }

    /// Remove staged files last modified more than `max_age` ago.
    ///
    /// Returns the number of files removed.
    pub async fn sweep(&self, max_age: Duration) -> Result<usize, StageError> {
        let io_err = |source: std::io::Error| StageError::Io {
            path: self.dir.clone(),
            source,
        };

        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(io_err(e)),
        };

        let now = SystemTime::now();
        let mut removed = 0;

        while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
            let metadata = match entry.metadata().await {
                Ok(metadata) if metadata.is_file() => metadata,
                _ => continue,
            };

            let age = metadata
                .modified()
                .ok()
                .and_then(|modified| now.duration_since(modified).ok())
                .unwrap_or_default();

            if age > max_age {
                match tokio::fs::remove_file(entry.path()).await {
                    Ok(()) => removed += 1,
                    Err(e) => {
                        tracing::warn!(path = %entry.path().display(), error = %e, "failed to remove staged file")
                    }
                }
            }
        }

        if removed > 0 {
            tracing::info!(removed, dir = %self.dir.display(), "swept stale staged files");
        }
        Ok(removed)
    }
}
