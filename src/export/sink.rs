use std::fs;
use std::path::{Path, PathBuf};

use super::ExportArtifact;
use crate::error::{ReplydeskError, Result};

/// Receives a finished export, the way a browser receives a download
pub trait ArtifactSink {
    /// Store the artifact and return where it went
    fn deliver(&self, artifact: &ExportArtifact) -> Result<PathBuf>;
}

/// Writes artifacts into a directory under their own file name
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectorySink { dir: dir.into() }
    }
}

impl ArtifactSink for DirectorySink {
    fn deliver(&self, artifact: &ExportArtifact) -> Result<PathBuf> {
        let file_name = Path::new(&artifact.file_name);
        if file_name.components().count() != 1 || file_name.file_name().is_none() {
            return Err(ReplydeskError::Export(format!(
                "invalid export file name '{}'",
                artifact.file_name
            )));
        }

        fs::create_dir_all(&self.dir).map_err(|e| {
            ReplydeskError::Export(format!("cannot create {}: {}", self.dir.display(), e))
        })?;

        let path = self.dir.join(file_name);
        fs::write(&path, &artifact.bytes)
            .map_err(|e| ReplydeskError::Export(format!("cannot write {}: {}", path.display(), e)))?;

        tracing::info!("Wrote {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{CSV_CONTENT_TYPE, ExportFormat};
    use tempfile::TempDir;

    fn artifact(name: &str) -> ExportArtifact {
        ExportArtifact {
            format: ExportFormat::Csv,
            file_name: name.to_string(),
            content_type: CSV_CONTENT_TYPE,
            bytes: b"id".to_vec(),
        }
    }

    #[test]
    fn test_deliver_writes_file() {
        let dir = TempDir::new().unwrap();
        let sink = DirectorySink::new(dir.path().join("out"));

        let path = sink.deliver(&artifact("tickets.csv")).unwrap();
        assert_eq!(path, dir.path().join("out").join("tickets.csv"));
        assert_eq!(fs::read(path).unwrap(), b"id");
    }

    #[test]
    fn test_deliver_rejects_paths() {
        let dir = TempDir::new().unwrap();
        let sink = DirectorySink::new(dir.path());

        assert!(sink.deliver(&artifact("../escape.csv")).is_err());
        assert!(sink.deliver(&artifact("")).is_err());
    }
}
