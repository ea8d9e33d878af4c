use crate::adapter::tfrecord::split_records;
use crate::error::AppError;
use crate::port::RecordSource;
use std::ffi::OsStr;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use tracing::debug;

/// Record files kept in a local directory.
#[derive(Debug, Clone)]
pub struct LocalRecordStore {
    dir: PathBuf,
}

impl LocalRecordStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn list(&self) -> Result<Vec<String>, AppError> {
        let dir_name = self.dir.display().to_string();
        let mut entries = tokio::fs::read_dir(&self.dir)
            .await
            .map_err(|e| AppError::from_io(&dir_name, e))?;

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| AppError::from_io(&dir_name, e))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| AppError::from_io(&dir_name, e))?;
            if !file_type.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();

        debug!(dir = %dir_name, count = names.len(), "listed record files");
        Ok(names)
    }
}

impl RecordSource for LocalRecordStore {
    fn list_records(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<String>, AppError>> + Send + '_>> {
        Box::pin(self.list())
    }

    fn read_examples(
        &self,
        record: &str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Vec<u8>>, AppError>> + Send + '_>> {
        // Only bare file names are served from the directory.
        let path = (Path::new(record).file_name() == Some(OsStr::new(record)))
            .then(|| self.dir.join(record));
        let record = record.to_string();
        Box::pin(async move {
            let path = path.ok_or_else(|| {
                AppError::InvalidArgument(format!("not a record file name: {record}"))
            })?;
            let bytes = tokio::fs::read(&path)
                .await
                .map_err(|e| AppError::from_io(path.display().to_string(), e))?;
            let examples = split_records(&bytes)?;
            debug!(record = %record, examples = examples.len(), "read record file");
            Ok(examples)
        })
    }
}
