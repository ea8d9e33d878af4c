use crate::adapter::{LocalRecordStore, MlEngineClient};
use crate::config::Settings;
use crate::domain::NameTable;
use crate::error::AppError;
use crate::port::{Predictor, RecordSource};
use std::sync::Arc;
use tracing::info;

/// Shared application state: the name table and the two collaborators.
///
/// Everything here is read-only after startup, so clones are handed to each
/// request without locking.
#[derive(Clone)]
pub struct AppState {
    pub names: Arc<NameTable>,
    pub predictor: Arc<dyn Predictor>,
    pub records: Arc<dyn RecordSource>,
    pub top_k: usize,
    pub landing_video_id: String,
}

impl AppState {
    /// Create `AppState` from configuration settings.
    ///
    /// Loads the vocabulary table once; a missing or malformed table fails startup.
    pub fn from_settings(settings: &Settings) -> Result<Self, AppError> {
        let names = NameTable::load(&settings.vocabulary_path)?;
        info!(
            path = %settings.vocabulary_path.display(),
            entries = names.len(),
            "Loaded vocabulary"
        );

        let predictor = MlEngineClient::new(settings.ml_engine())?;
        let records = LocalRecordStore::new(&settings.records_dir);
        info!(records_dir = %records.dir().display(), "Sampling records from directory");

        Ok(Self {
            names: Arc::new(names),
            predictor: Arc::new(predictor),
            records: Arc::new(records),
            top_k: settings.top_k,
            landing_video_id: settings.landing_video_id.clone(),
        })
    }
}
